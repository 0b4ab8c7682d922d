// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use base::PLACEHOLDER;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct OutgoingMessage<'a> {
  pub action: &'static str,
  pub target: &'a str,
  pub message: &'a str,
}

#[derive(Debug, Deserialize, Default)]
pub(crate) struct GatewayResponse {
  #[serde(default)]
  pub result: Option<SendResult>,
}

#[derive(Debug, Deserialize, Default)]
pub(crate) struct SendResult {
  #[serde(default, rename = "messageId")]
  pub message_id: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageReceipt {
  pub message_id: String,
}

impl GatewayResponse {
  /// `result.messageId` may arrive as a string or a number.
  pub(crate) fn into_receipt(self) -> MessageReceipt {
    let message_id = match self.result.and_then(|r| r.message_id) {
      Some(Value::String(id)) if !id.is_empty() => id,
      Some(Value::Number(id)) => id.to_string(),
      _ => PLACEHOLDER.to_string(),
    };
    MessageReceipt { message_id }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn receipt(json: &str) -> MessageReceipt {
    serde_json::from_str::<GatewayResponse>(json)
      .unwrap()
      .into_receipt()
  }

  #[test]
  fn payload_shape() {
    let payload = OutgoingMessage {
      action: "send",
      target: "+100200300",
      message: "hi",
    };
    assert_eq!(
      serde_json::to_value(&payload).unwrap(),
      serde_json::json!({"action": "send", "target": "+100200300", "message": "hi"})
    );
  }

  #[test]
  fn message_id_string_or_number() {
    assert_eq!(receipt(r#"{"result":{"messageId":"ABC123"}}"#).message_id, "ABC123");
    assert_eq!(receipt(r#"{"result":{"messageId":77}}"#).message_id, "77");
  }

  #[test]
  fn absent_message_id_falls_back() {
    assert_eq!(receipt(r#"{}"#).message_id, "N/A");
    assert_eq!(receipt(r#"{"result":null}"#).message_id, "N/A");
    assert_eq!(receipt(r#"{"result":{"ok":true}}"#).message_id, "N/A");
    assert_eq!(receipt(r#"{"result":{"messageId":""}}"#).message_id, "N/A");
  }
}
