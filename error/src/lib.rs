// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use std::path::PathBuf;
use thiserror::Error as ThisError;

#[derive(ThisError, Debug)]
pub enum Error {
  #[error("Weather fetch failed: {0}")]
  FetchError(String),
  #[error("Missing configuration: {}", .0.join(", "))]
  ConfigMissing(Vec<&'static str>),
  #[error("Configuration error: {0}")]
  ConfigError(String),
  #[error("Transport error: {0}")]
  TransportError(String),
  #[error("API error: {0}")]
  ApiError(String),
  #[error("HTTP error: {0}")]
  HttpError(#[from] reqwest::Error),
  #[error("SMTP error: {0}")]
  SmtpError(#[from] lettre::transport::smtp::Error),
  #[error("Invalid email address: {0}")]
  InvalidAddress(#[from] lettre::address::AddressError),
  #[error("Failed to build email: {0}")]
  MessageError(#[from] lettre::error::Error),
  #[error("IO error: {0}")]
  IoError(#[from] std::io::Error),
  #[error("File not found: {}", .0.display())]
  PathNotFound(PathBuf),
  #[error("Timeout error")]
  TimeoutError,
}

/// Coarse failure category, so callers can branch without matching on text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
  Fetch,
  ConfigMissing,
  Transport,
  Invalid,
}

impl Error {
  /// Keeps client-side timeouts apart from other HTTP failures.
  pub fn from_http(err: reqwest::Error) -> Self {
    if err.is_timeout() {
      Error::TimeoutError
    } else {
      Error::HttpError(err)
    }
  }

  pub fn kind(&self) -> ErrorKind {
    match self {
      Error::FetchError(_) => ErrorKind::Fetch,
      Error::ConfigMissing(_) => ErrorKind::ConfigMissing,
      Error::TransportError(_)
      | Error::ApiError(_)
      | Error::HttpError(_)
      | Error::SmtpError(_)
      | Error::TimeoutError => ErrorKind::Transport,
      Error::ConfigError(_)
      | Error::InvalidAddress(_)
      | Error::MessageError(_)
      | Error::IoError(_)
      | Error::PathNotFound(_) => ErrorKind::Invalid,
    }
  }
}
