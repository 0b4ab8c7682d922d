// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use async_trait::async_trait;
use base::Error;
use lettre::{
  transport::smtp::authentication::Credentials, AsyncSmtpTransport, AsyncTransport, Message,
  Tokio1Executor,
};
use tracing::{debug, instrument};

#[async_trait]
pub trait MailTransport: Send + Sync {
  async fn send(&self, message: Message) -> Result<(), Error>;
}

/// Implicit-TLS SMTP submission, one session per message.
#[derive(Clone)]
pub struct SmtpMailer {
  host: String,
  port: u16,
  credentials: Credentials,
}

impl SmtpMailer {
  pub fn new(host: impl Into<String>, port: u16, user: &str, password: &str) -> Self {
    Self {
      host: host.into(),
      port,
      credentials: Credentials::new(user.to_string(), password.to_string()),
    }
  }

  fn transport(&self) -> Result<AsyncSmtpTransport<Tokio1Executor>, Error> {
    // `relay` wraps the socket in TLS from the first byte.
    let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(&self.host)?
      .port(self.port)
      .credentials(self.credentials.clone())
      .build();
    Ok(transport)
  }
}

#[async_trait]
impl MailTransport for SmtpMailer {
  #[instrument(skip(self, message), fields(host = %self.host, port = self.port))]
  async fn send(&self, message: Message) -> Result<(), Error> {
    let transport = self.transport()?;
    let response = transport.send(message).await?;
    debug!("SMTP accepted message: {:?}", response.code());
    Ok(())
  }
}
