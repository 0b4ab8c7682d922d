// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use crate::{
  builders::MessageBuilder,
  client::{ChatGateway, GatewayClient},
};
use ::config::GatewayConfig;
use base::{DispatchResult, DispatchStatus, Error};
use std::time::Duration;
use tracing::{info, instrument};

pub struct ChatDispatcher {
  config: GatewayConfig,
  gateway: Option<Box<dyn ChatGateway>>,
}

impl ChatDispatcher {
  /// Builds the HTTP client only when the gateway is fully configured.
  pub fn new(config: GatewayConfig) -> Result<Self, Error> {
    let gateway: Option<Box<dyn ChatGateway>> = if config.missing().is_empty() {
      let client = GatewayClient::builder()
        .base_url(config.url.clone())
        .token(config.token.clone())
        .timeout(Duration::from_secs(config.timeout_secs))
        .build()?;
      Some(Box::new(client))
    } else {
      None
    };

    Ok(Self { config, gateway })
  }

  pub fn with_gateway(config: GatewayConfig, gateway: Box<dyn ChatGateway>) -> Self {
    Self {
      config,
      gateway: Some(gateway),
    }
  }

  /// Posts one chat message; an unconfigured gateway is skipped, not failed.
  #[instrument(skip(self, body), fields(target = %self.config.target))]
  pub async fn dispatch(&self, body: &str) -> DispatchResult {
    let missing = self.config.missing();
    let gateway = match &self.gateway {
      Some(gateway) if missing.is_empty() => gateway,
      _ => {
        info!("Chat gateway not configured, skipping");
        return Ok(DispatchStatus::Skipped(format!(
          "gateway not configured ({})",
          missing.join(", ")
        )));
      }
    };

    let receipt = MessageBuilder::new()
      .target(&self.config.target)
      .text(body)
      .send(gateway.as_ref())
      .await?;

    info!("Chat message accepted as {}", receipt.message_id);
    Ok(DispatchStatus::sent_with(receipt.message_id))
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::types::{MessageReceipt, OutgoingMessage};
  use async_trait::async_trait;
  use base::ErrorKind;
  use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc, Mutex,
  };

  #[derive(Clone, Default)]
  struct RecordingGateway {
    calls: Arc<AtomicUsize>,
    last: Arc<Mutex<Option<(String, String)>>>,
    fail: bool,
  }

  #[async_trait]
  impl ChatGateway for RecordingGateway {
    async fn send_message(&self, message: &OutgoingMessage<'_>) -> Result<MessageReceipt, Error> {
      self.calls.fetch_add(1, Ordering::SeqCst);
      *self.last.lock().unwrap() = Some((message.target.to_string(), message.message.to_string()));
      if self.fail {
        return Err(Error::TransportError("connection refused".into()));
      }
      Ok(MessageReceipt {
        message_id: "msg-1".into(),
      })
    }
  }

  fn gateway_config() -> GatewayConfig {
    GatewayConfig {
      url: "https://gw.example.com".into(),
      token: "tok".into(),
      target: "+100200300".into(),
      timeout_secs: 15,
    }
  }

  #[tokio::test]
  async fn missing_url_or_token_skips_without_calls() {
    for blank in ["url", "token"] {
      let mut config = gateway_config();
      match blank {
        "url" => config.url.clear(),
        _ => config.token.clear(),
      }

      let gateway = RecordingGateway::default();
      let dispatcher = ChatDispatcher::with_gateway(config, Box::new(gateway.clone()));
      let status = dispatcher.dispatch("hello").await.unwrap();

      assert!(matches!(status, DispatchStatus::Skipped(_)));
      assert_eq!(gateway.calls.load(Ordering::SeqCst), 0);
    }
  }

  #[tokio::test]
  async fn new_without_configuration_skips() {
    let dispatcher = ChatDispatcher::new(GatewayConfig::default()).unwrap();
    let status = dispatcher.dispatch("hello").await.unwrap();
    assert_eq!(
      status,
      DispatchStatus::Skipped(
        "gateway not configured (CLAWDBOT_GATEWAY_URL, CLAWDBOT_GATEWAY_TOKEN)".into()
      )
    );
  }

  #[tokio::test]
  async fn sends_to_configured_target() {
    let gateway = RecordingGateway::default();
    let dispatcher = ChatDispatcher::with_gateway(gateway_config(), Box::new(gateway.clone()));

    let status = dispatcher.dispatch("🌟 weather 🌟").await.unwrap();
    assert_eq!(status, DispatchStatus::sent_with("msg-1"));
    assert_eq!(gateway.calls.load(Ordering::SeqCst), 1);
    assert_eq!(
      gateway.last.lock().unwrap().clone(),
      Some(("+100200300".to_string(), "🌟 weather 🌟".to_string()))
    );
  }

  #[tokio::test]
  async fn gateway_failure_is_returned_not_raised() {
    let gateway = RecordingGateway {
      fail: true,
      ..Default::default()
    };
    let dispatcher = ChatDispatcher::with_gateway(gateway_config(), Box::new(gateway));
    let err = dispatcher.dispatch("hello").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Transport);
  }

  #[tokio::test]
  async fn unreachable_gateway_is_a_transport_error() {
    let mut config = gateway_config();
    config.url = "http://127.0.0.1:1".into();
    let dispatcher = ChatDispatcher::new(config).unwrap();
    let err = dispatcher.dispatch("hello").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Transport);
  }
}
