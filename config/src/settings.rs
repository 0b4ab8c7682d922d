// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use error::Error;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::{debug, instrument};

/// Non-secret tunables. Every key is optional in the TOML file.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Settings {
  pub weather: WeatherSettings,
  pub mail: MailSettings,
  pub gateway: GatewaySettings,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct WeatherSettings {
  pub city: String,
  pub base_url: String,
  pub timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct MailSettings {
  pub smtp_host: String,
  pub smtp_port: u16,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct GatewaySettings {
  pub timeout_secs: u64,
}

impl Default for WeatherSettings {
  fn default() -> Self {
    Self {
      city: "Tokyo".into(),
      base_url: "https://wttr.in".into(),
      timeout_secs: 10,
    }
  }
}

impl Default for MailSettings {
  fn default() -> Self {
    Self {
      smtp_host: "smtp.gmail.com".into(),
      smtp_port: 465,
    }
  }
}

impl Default for GatewaySettings {
  fn default() -> Self {
    Self { timeout_secs: 15 }
  }
}

impl Settings {
  #[instrument(skip(path))]
  pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
    let path = path.as_ref();
    if !path.exists() {
      return Err(Error::PathNotFound(path.to_path_buf()));
    }
    let content = fs::read_to_string(path)?;
    let settings = Self::parse(&content)?;
    debug!("Loaded settings from {}", path.display());
    Ok(settings)
  }

  pub fn parse(content: &str) -> Result<Self, Error> {
    let settings: Self =
      toml::from_str(content).map_err(|e| Error::ConfigError(format!("invalid settings: {}", e)))?;
    settings.validate()?;
    Ok(settings)
  }

  /// Falls back to defaults when no file is given.
  pub fn load(path: Option<&Path>) -> Result<Self, Error> {
    match path {
      Some(path) => Self::from_file(path),
      None => Ok(Self::default()),
    }
  }

  fn validate(&self) -> Result<(), Error> {
    if self.weather.city.trim().is_empty() {
      return Err(Error::ConfigError("weather.city cannot be empty".into()));
    }
    if self.mail.smtp_host.trim().is_empty() {
      return Err(Error::ConfigError("mail.smtp_host cannot be empty".into()));
    }
    if self.weather.timeout_secs == 0 || self.gateway.timeout_secs == 0 {
      return Err(Error::ConfigError("timeouts must be positive".into()));
    }
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn empty_file_yields_defaults() {
    let settings = Settings::parse("").unwrap();
    assert_eq!(settings, Settings::default());
    assert_eq!(settings.weather.city, "Tokyo");
    assert_eq!(settings.mail.smtp_port, 465);
    assert_eq!(settings.gateway.timeout_secs, 15);
  }

  #[test]
  fn partial_sections_keep_other_defaults() {
    let settings = Settings::parse(
      r#"
        [weather]
        city = "Osaka"

        [mail]
        smtp_port = 2465
      "#,
    )
    .unwrap();
    assert_eq!(settings.weather.city, "Osaka");
    assert_eq!(settings.weather.base_url, "https://wttr.in");
    assert_eq!(settings.mail.smtp_host, "smtp.gmail.com");
    assert_eq!(settings.mail.smtp_port, 2465);
  }

  #[test]
  fn rejects_blank_city_and_zero_timeout() {
    assert!(Settings::parse("[weather]\ncity = \" \"").is_err());
    assert!(Settings::parse("[gateway]\ntimeout_secs = 0").is_err());
    assert!(Settings::parse("weather = 3").is_err());
  }

  #[test]
  fn load_without_path_is_default() {
    assert_eq!(Settings::load(None).unwrap(), Settings::default());
    assert!(matches!(
      Settings::load(Some(Path::new("/no/such/courier.toml"))),
      Err(Error::PathNotFound(_))
    ));
  }
}
