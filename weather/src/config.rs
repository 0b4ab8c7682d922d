// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use base::Error;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct WeatherConfig {
  pub(crate) city: String,
  pub(crate) base_url: String,
  pub(crate) timeout: Duration,
}

impl WeatherConfig {
  pub fn new(
    city: impl Into<String>,
    base_url: impl Into<String>,
    timeout: Duration,
  ) -> Result<Self, Error> {
    let city = city.into();
    if city.trim().is_empty() {
      return Err(Error::ConfigError("City name cannot be empty".into()));
    }

    Ok(Self {
      city: city.trim().to_string(),
      base_url: base_url.into(),
      timeout,
    })
  }
}
