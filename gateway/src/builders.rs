// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use crate::{
  client::{ChatGateway, GatewayClient},
  config::{ClientConfig, SEND_ACTION},
  types::{MessageReceipt, OutgoingMessage},
};
use base::Error;
use ::config::vars;

#[derive(Default)]
pub struct MessageBuilder<'a> {
  pub(crate) target: Option<&'a str>,
  pub(crate) text: Option<&'a str>,
}

impl<'a> MessageBuilder<'a> {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn target(mut self, target: &'a str) -> Self {
    self.target = Some(target);
    self
  }

  pub fn text(mut self, text: &'a str) -> Self {
    self.text = Some(text);
    self
  }

  pub async fn send(self, gateway: &dyn ChatGateway) -> Result<MessageReceipt, Error> {
    let text = self
      .text
      .ok_or_else(|| Error::ApiError("Message text is required".into()))?;

    let message = OutgoingMessage {
      action: SEND_ACTION,
      target: self.target.unwrap_or_default(),
      message: text,
    };

    gateway.send_message(&message).await
  }
}

#[derive(Default)]
pub struct GatewayClientBuilder {
  pub(crate) config: ClientConfig,
}

impl GatewayClientBuilder {
  pub fn base_url(mut self, url: impl Into<String>) -> Self {
    self.config.base_url = url.into();
    self
  }

  pub fn token(mut self, token: impl Into<String>) -> Self {
    self.config.token = token.into();
    self
  }

  pub fn timeout(mut self, timeout: std::time::Duration) -> Self {
    self.config.timeout = timeout;
    self
  }

  pub fn build(self) -> Result<GatewayClient, Error> {
    let mut missing = Vec::new();
    if self.config.base_url.trim().is_empty() {
      missing.push(vars::GATEWAY_URL);
    }
    if self.config.token.trim().is_empty() {
      missing.push(vars::GATEWAY_TOKEN);
    }
    if !missing.is_empty() {
      return Err(Error::ConfigMissing(missing));
    }

    let client = reqwest::Client::builder()
      .timeout(self.config.timeout)
      .build()
      .map_err(Error::HttpError)?;

    Ok(GatewayClient {
      config: self.config,
      client,
    })
  }
}
