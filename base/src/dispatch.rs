// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use crate::Error;
use std::fmt;

/// Stand-in text for any field or identifier that is not available.
pub const PLACEHOLDER: &str = "N/A";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchStatus {
  Sent { receipt: Option<String> },
  Skipped(String),
}

pub type DispatchResult = Result<DispatchStatus, Error>;

impl DispatchStatus {
  pub fn sent() -> Self {
    Self::Sent { receipt: None }
  }

  pub fn sent_with(receipt: impl Into<String>) -> Self {
    Self::Sent {
      receipt: Some(receipt.into()),
    }
  }
}

impl fmt::Display for DispatchStatus {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Sent { receipt: None } => write!(f, "sent"),
      Self::Sent {
        receipt: Some(receipt),
      } => write!(f, "sent ({})", receipt),
      Self::Skipped(reason) => write!(f, "skipped: {}", reason),
    }
  }
}

/// Renders a dispatch outcome as the single status line shown to the operator.
pub fn status_line(channel: &str, result: &DispatchResult) -> String {
  match result {
    Ok(status) => format!("{} status: {}", channel, status),
    Err(e) => format!("{} status: failed: {}", channel, e),
  }
}
