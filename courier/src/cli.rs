// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use tracing::level_filters::LevelFilter;

#[derive(Parser, Clone, Debug, Default, PartialEq, Eq)]
#[command(
  author,
  version,
  about,
  long_about = "Fetches today's weather once and delivers it by email and chat message."
)]
pub struct Cli {
  /// Report text to send as is, skipping the weather fetch
  #[arg(value_name = "REPORT")]
  pub report: Option<String>,

  /// Optional TOML file overriding city, endpoints and timeouts
  #[arg(long, value_name = "PATH")]
  pub settings: Option<PathBuf>,

  /// Send the email only, never the chat message
  #[arg(long)]
  pub email_only: bool,

  /// Set logging level to use
  #[arg(long, short, value_enum, default_value_t = LogLevel::Info)]
  pub log_level: LogLevel,
}

/// Mirrors `LevelFilter` so clap can list the choices.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Default)]
pub enum LogLevel {
  Off,
  Error,
  Warn,
  #[default]
  Info,
  Debug,
  Trace,
}

impl From<LogLevel> for LevelFilter {
  fn from(value: LogLevel) -> Self {
    match value {
      LogLevel::Off => LevelFilter::OFF,
      LogLevel::Error => LevelFilter::ERROR,
      LogLevel::Warn => LevelFilter::WARN,
      LogLevel::Info => LevelFilter::INFO,
      LogLevel::Debug => LevelFilter::DEBUG,
      LogLevel::Trace => LevelFilter::TRACE,
    }
  }
}
