// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use std::{fmt, time::Duration};

pub(crate) const MESSAGE_PATH: &str = "/api/message";
pub(crate) const SEND_ACTION: &str = "send";
pub(crate) const DEFAULT_TIMEOUT_SECS: u64 = 15;
pub(crate) const ERROR_BODY_LIMIT: usize = 200;

#[derive(Clone)]
pub struct ClientConfig {
  pub(crate) base_url: String,
  pub(crate) token: String,
  pub(crate) timeout: Duration,
}

impl Default for ClientConfig {
  fn default() -> Self {
    Self {
      base_url: String::new(),
      token: String::new(),
      timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
    }
  }
}

impl ClientConfig {
  pub(crate) fn message_url(&self) -> String {
    format!("{}{}", self.base_url.trim_end_matches('/'), MESSAGE_PATH)
  }
}

impl fmt::Debug for ClientConfig {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let token = if self.token.is_empty() {
      "<unset>"
    } else {
      "<redacted>"
    };
    f.debug_struct("ClientConfig")
      .field("base_url", &self.base_url)
      .field("token", &token)
      .field("timeout", &self.timeout)
      .finish()
  }
}
