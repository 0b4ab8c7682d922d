// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
mod config;
mod settings;

pub use crate::{
  config::{Config, GatewayConfig, MailConfig},
  settings::{GatewaySettings, MailSettings, Settings, WeatherSettings},
};

pub mod vars {
  pub const MAIL_USER: &str = "GMAIL_USER";
  pub const MAIL_PASSWORD: &str = "GMAIL_APP_PASSWORD";
  pub const MAIL_RECIPIENT: &str = "RECIPIENT_EMAIL";
  pub const GATEWAY_URL: &str = "CLAWDBOT_GATEWAY_URL";
  pub const GATEWAY_TOKEN: &str = "CLAWDBOT_GATEWAY_TOKEN";
  pub const GATEWAY_TARGET: &str = "CLAWDBOT_MESSAGE_TARGET";
}
