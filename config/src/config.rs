// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use crate::{settings::Settings, vars};
use std::{env, fmt};
use tracing::instrument;

/// Everything a run needs, read once at startup and passed down by reference.
#[derive(Debug, Clone)]
pub struct Config {
  pub mail: MailConfig,
  pub gateway: GatewayConfig,
  pub settings: Settings,
}

#[derive(Clone, Default)]
pub struct MailConfig {
  pub user: String,
  pub password: String,
  pub recipient: String,
  pub smtp_host: String,
  pub smtp_port: u16,
}

#[derive(Clone, Default)]
pub struct GatewayConfig {
  pub url: String,
  pub token: String,
  pub target: String,
  pub timeout_secs: u64,
}

impl Config {
  #[instrument(skip(settings))]
  pub fn from_env(settings: Settings) -> Self {
    Self::from_lookup(settings, |key| env::var(key).ok())
  }

  pub fn from_lookup<F>(settings: Settings, lookup: F) -> Self
  where
    F: Fn(&str) -> Option<String>,
  {
    let read = |key: &str| lookup(key).map(|v| v.trim().to_string()).unwrap_or_default();

    let mail = MailConfig {
      user: read(vars::MAIL_USER),
      // App passwords are handed out as four space-separated groups.
      password: read(vars::MAIL_PASSWORD).replace(' ', ""),
      recipient: read(vars::MAIL_RECIPIENT),
      smtp_host: settings.mail.smtp_host.clone(),
      smtp_port: settings.mail.smtp_port,
    };

    let gateway = GatewayConfig {
      url: read(vars::GATEWAY_URL),
      token: read(vars::GATEWAY_TOKEN),
      target: read(vars::GATEWAY_TARGET),
      timeout_secs: settings.gateway.timeout_secs,
    };

    Self {
      mail,
      gateway,
      settings,
    }
  }
}

impl MailConfig {
  /// Names of the required mail variables that are empty.
  pub fn missing(&self) -> Vec<&'static str> {
    [
      (vars::MAIL_USER, &self.user),
      (vars::MAIL_PASSWORD, &self.password),
      (vars::MAIL_RECIPIENT, &self.recipient),
    ]
    .into_iter()
    .filter(|(_, value)| value.is_empty())
    .map(|(name, _)| name)
    .collect()
  }
}

impl GatewayConfig {
  /// Names of the gateway variables without which nothing can be posted.
  pub fn missing(&self) -> Vec<&'static str> {
    [
      (vars::GATEWAY_URL, &self.url),
      (vars::GATEWAY_TOKEN, &self.token),
    ]
    .into_iter()
    .filter(|(_, value)| value.is_empty())
    .map(|(name, _)| name)
    .collect()
  }
}

fn redact(value: &str) -> &'static str {
  if value.is_empty() {
    "<unset>"
  } else {
    "<redacted>"
  }
}

impl fmt::Debug for MailConfig {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("MailConfig")
      .field("user", &self.user)
      .field("password", &redact(&self.password))
      .field("recipient", &self.recipient)
      .field("smtp_host", &self.smtp_host)
      .field("smtp_port", &self.smtp_port)
      .finish()
  }
}

impl fmt::Debug for GatewayConfig {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("GatewayConfig")
      .field("url", &self.url)
      .field("token", &redact(&self.token))
      .field("target", &self.target)
      .field("timeout_secs", &self.timeout_secs)
      .finish()
  }
}
