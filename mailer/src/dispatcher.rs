// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use crate::transport::{MailTransport, SmtpMailer};
use base::{DispatchResult, DispatchStatus, Error};
use config::MailConfig;
use lettre::{message::header::ContentType, Message};
use tracing::{info, instrument};

pub struct EmailDispatcher {
  config: MailConfig,
  transport: Box<dyn MailTransport>,
}

impl EmailDispatcher {
  pub fn new(config: MailConfig) -> Self {
    let transport = Box::new(SmtpMailer::new(
      config.smtp_host.clone(),
      config.smtp_port,
      &config.user,
      &config.password,
    ));
    Self { config, transport }
  }

  pub fn with_transport(config: MailConfig, transport: Box<dyn MailTransport>) -> Self {
    Self { config, transport }
  }

  fn build_message(&self, subject: &str, body: &str) -> Result<Message, Error> {
    let message = Message::builder()
      .from(self.config.user.parse()?)
      .to(self.config.recipient.parse()?)
      .subject(subject)
      .header(ContentType::TEXT_PLAIN)
      .body(body.to_string())?;
    Ok(message)
  }

  /// Sends one plain-text email. Nothing is sent when credentials are missing.
  #[instrument(skip(self, body), fields(recipient = %self.config.recipient))]
  pub async fn dispatch(&self, subject: &str, body: &str) -> DispatchResult {
    let missing = self.config.missing();
    if !missing.is_empty() {
      return Err(Error::ConfigMissing(missing));
    }

    let message = self.build_message(subject, body)?;
    self.transport.send(message).await?;

    info!("Email delivered to {}", self.config.recipient);
    Ok(DispatchStatus::sent())
  }
}
