// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use crate::{
  config::WeatherConfig,
  constants::REPORT_QUERY,
  models::report::{Report, WeatherReport},
};
use async_trait::async_trait;
use base::Error;
use tracing::{debug, info, instrument, warn};
use url::Url;

#[async_trait]
pub trait WeatherProvider: Send + Sync {
  async fn fetch_report(&self) -> Result<WeatherReport, Error>;
  fn city(&self) -> &str;
}

pub struct WeatherService {
  config: WeatherConfig,
  client: reqwest::Client,
}

impl WeatherService {
  pub fn new(config: WeatherConfig) -> Result<Self, Error> {
    let client = reqwest::Client::builder()
      .timeout(config.timeout)
      .build()?;
    Ok(Self { config, client })
  }

  fn build_api_url(&self) -> Result<Url, Error> {
    let mut url = Url::parse(&self.config.base_url)
      .map_err(|e| Error::ConfigError(format!("Invalid weather URL: {}", e)))?;
    url
      .path_segments_mut()
      .map_err(|_| Error::ConfigError("Weather URL cannot be a base".into()))?
      .pop_if_empty()
      .push(&self.config.city);
    url.set_query(Some(REPORT_QUERY));
    Ok(url)
  }
}

#[async_trait]
impl WeatherProvider for WeatherService {
  #[instrument(skip(self), fields(city = %self.config.city))]
  async fn fetch_report(&self) -> Result<WeatherReport, Error> {
    let url = self.build_api_url()?;
    debug!("Requesting {}", url);

    let response = self
      .client
      .get(url)
      .send()
      .await
      .map_err(|e| Error::FetchError(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
      return Err(Error::FetchError(format!(
        "weather service responded with {}",
        status
      )));
    }

    let body = response
      .text()
      .await
      .map_err(|e| Error::FetchError(e.to_string()))?;
    debug!("Raw weather line: {}", body.trim());

    Ok(WeatherReport::parse(&body))
  }

  fn city(&self) -> &str {
    &self.config.city
  }
}

/// Fetches once; a failure becomes a degraded report rather than an error.
pub async fn report_or_degraded(provider: &dyn WeatherProvider) -> Report {
  match provider.fetch_report().await {
    Ok(report) => {
      info!(
        "Fetched weather for {}: {} {} {}",
        provider.city(),
        report.condition,
        report.temperature,
        report.wind
      );
      Report::Parsed(report)
    }
    Err(e) => {
      warn!("Weather fetch failed, sending degraded report: {}", e);
      Report::degraded(provider.city(), e)
    }
  }
}
