// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use crate::message::compose;
use base::{status_line, DispatchResult, DispatchStatus, Error};
use chrono::NaiveDate;
use config::Config;
use gateway::ChatDispatcher;
use mailer::EmailDispatcher;
use std::time::Duration;
use tracing::{error, info, instrument};
use weather::{report_or_degraded, Report, WeatherConfig, WeatherProvider, WeatherService};

pub struct ServiceRunner {
  weather: Box<dyn WeatherProvider>,
  email: EmailDispatcher,
  chat: Option<ChatDispatcher>,
}

#[derive(Debug)]
pub struct RunSummary {
  pub report: Report,
  pub email: DispatchResult,
  pub chat: DispatchResult,
}

impl ServiceRunner {
  #[instrument(skip(config))]
  pub fn new(config: &Config, email_only: bool) -> Result<Self, Error> {
    let weather = WeatherService::new(WeatherConfig::new(
      config.settings.weather.city.clone(),
      config.settings.weather.base_url.clone(),
      Duration::from_secs(config.settings.weather.timeout_secs),
    )?)?;

    let chat = if email_only {
      None
    } else {
      Some(ChatDispatcher::new(config.gateway.clone())?)
    };

    Ok(Self {
      weather: Box::new(weather),
      email: EmailDispatcher::new(config.mail.clone()),
      chat,
    })
  }

  pub fn with_parts(
    weather: Box<dyn WeatherProvider>,
    email: EmailDispatcher,
    chat: Option<ChatDispatcher>,
  ) -> Self {
    Self {
      weather,
      email,
      chat,
    }
  }

  /// Fetch, format, email, chat; in that order, each step once.
  #[instrument(skip(self, supplied))]
  pub async fn run(&self, supplied: Option<String>, date: NaiveDate) -> RunSummary {
    let report = match supplied {
      Some(text) => {
        info!("Using report text from the command line");
        Report::Supplied(text)
      }
      None => report_or_degraded(self.weather.as_ref()).await,
    };

    let composed = compose(&report, self.weather.city(), date);

    let email = self
      .email
      .dispatch(&composed.subject, &composed.email_body)
      .await;
    log_outcome("Email", &email);

    let chat = match &self.chat {
      Some(chat) => chat.dispatch(&composed.chat_body).await,
      None => Ok(DispatchStatus::Skipped("chat disabled by --email-only".into())),
    };
    log_outcome("Chat", &chat);

    RunSummary {
      report,
      email,
      chat,
    }
  }
}

impl RunSummary {
  pub fn status_lines(&self) -> [String; 2] {
    [
      status_line("Email", &self.email),
      status_line("Chat", &self.chat),
    ]
  }
}

fn log_outcome(channel: &str, result: &DispatchResult) {
  match result {
    Ok(status) => info!("{} {}", channel, status),
    Err(e) => error!("{} failed ({:?}): {}", channel, e.kind(), e),
  }
}

/// The lines printed when the mail variables are incomplete and nothing is sent.
pub fn missing_variables_notice(missing: &[&str]) -> Vec<String> {
  let mut lines = vec!["Error: one or more required environment variables are missing.".to_string()];
  lines.extend(missing.iter().map(|name| format!(" - missing variable: {}", name)));
  lines
}
