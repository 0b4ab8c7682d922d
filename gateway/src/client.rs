// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use crate::{
  builders::{GatewayClientBuilder, MessageBuilder},
  config::{ClientConfig, ERROR_BODY_LIMIT},
  types::{GatewayResponse, MessageReceipt, OutgoingMessage},
};
use async_trait::async_trait;
use base::Error;
use reqwest::{header, Client};
use std::fmt;
use tracing::{debug, instrument, warn};

#[async_trait]
pub trait ChatGateway: Send + Sync {
  async fn send_message(&self, message: &OutgoingMessage<'_>) -> Result<MessageReceipt, Error>;
}

#[derive(Clone)]
pub struct GatewayClient {
  pub(crate) config: ClientConfig,
  pub(crate) client: Client,
}

impl GatewayClient {
  pub fn builder() -> GatewayClientBuilder {
    GatewayClientBuilder::default()
  }

  pub fn message(&self) -> MessageBuilder<'_> {
    MessageBuilder::new()
  }
}

impl fmt::Debug for GatewayClient {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("GatewayClient")
      .field("config", &self.config)
      .finish_non_exhaustive()
  }
}

#[async_trait]
impl ChatGateway for GatewayClient {
  #[instrument(skip(self, message), fields(target = message.target))]
  async fn send_message(&self, message: &OutgoingMessage<'_>) -> Result<MessageReceipt, Error> {
    let response = self
      .client
      .post(self.config.message_url())
      .header(header::AUTHORIZATION, format!("Bearer {}", self.config.token))
      .json(message)
      .send()
      .await
      .map_err(Error::from_http)?;

    let status = response.status();
    if !status.is_success() {
      let body = response.text().await.unwrap_or_default();
      let excerpt: String = body.chars().take(ERROR_BODY_LIMIT).collect();
      return Err(Error::ApiError(format!("{}: {}", status, excerpt.trim())));
    }

    let body = response.text().await.map_err(Error::from_http)?;
    let parsed = serde_json::from_str::<GatewayResponse>(&body).unwrap_or_else(|e| {
      warn!("Gateway accepted the message but replied with unreadable JSON: {}", e);
      GatewayResponse::default()
    });

    let receipt = parsed.into_receipt();
    debug!("Gateway accepted message {}", receipt.message_id);
    Ok(receipt)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use base::{testing::OneShotServer, ErrorKind};

  fn client(base_url: &str) -> GatewayClient {
    GatewayClient::builder()
      .base_url(base_url)
      .token("tok-123")
      .build()
      .unwrap()
  }

  #[tokio::test]
  async fn posts_bearer_authenticated_json() {
    let server = OneShotServer::respond(
      "200 OK",
      "application/json",
      r#"{"ok":true,"result":{"messageId":"3EB0C767D097"}}"#,
    )
    .await;
    let client = client(&server.base_url);

    let receipt = client
      .message()
      .target("+100200300")
      .text("Sunny")
      .send(&client)
      .await
      .unwrap();
    assert_eq!(receipt.message_id, "3EB0C767D097");

    let request = server.request().await;
    let lowered = request.to_ascii_lowercase();
    assert!(request.starts_with("POST /api/message HTTP/1.1"));
    assert!(lowered.contains("authorization: bearer tok-123"));
    assert!(lowered.contains("content-type: application/json"));

    let body = request.split("\r\n\r\n").nth(1).unwrap();
    assert_eq!(
      serde_json::from_str::<serde_json::Value>(body).unwrap(),
      serde_json::json!({"action": "send", "target": "+100200300", "message": "Sunny"})
    );
  }

  #[tokio::test]
  async fn non_success_status_is_an_api_error() {
    let server =
      OneShotServer::respond("401 Unauthorized", "application/json", r#"{"error":"bad token"}"#).await;
    let client = client(&server.base_url);
    let err = client
      .message()
      .target("+100200300")
      .text("Sunny")
      .send(&client)
      .await
      .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Transport);
    assert!(err.to_string().contains("401"));
    assert!(err.to_string().contains("bad token"));
  }

  #[tokio::test]
  async fn unreadable_success_body_still_counts_as_sent() {
    let server = OneShotServer::respond("200 OK", "text/plain", "queued").await;
    let receipt = MessageBuilder::new()
      .text("Sunny")
      .send(&client(&server.base_url))
      .await
      .unwrap();
    assert_eq!(receipt.message_id, "N/A");
  }

  #[tokio::test]
  async fn silent_gateway_times_out() {
    // Bound but never accepted: the request is queued and no reply ever comes.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let client = GatewayClient::builder()
      .base_url(format!("http://{}", listener.local_addr().unwrap()))
      .token("tok-123")
      .timeout(std::time::Duration::from_millis(200))
      .build()
      .unwrap();

    let err = MessageBuilder::new().text("Sunny").send(&client).await.unwrap_err();
    assert!(matches!(err, Error::TimeoutError));
    assert_eq!(err.kind(), ErrorKind::Transport);
    drop(listener);
  }

  #[test]
  fn debug_output_hides_token() {
    let rendered = format!("{:?}", client("https://gw.example.com"));
    assert!(!rendered.contains("tok-123"));
    assert!(rendered.contains("<redacted>"));
    assert!(rendered.contains("https://gw.example.com"));
  }

  #[tokio::test]
  async fn refused_connection_is_an_http_error() {
    let err = MessageBuilder::new()
      .text("Sunny")
      .send(&client("http://127.0.0.1:1"))
      .await
      .unwrap_err();
    assert!(matches!(err, Error::HttpError(_)));
  }
}
