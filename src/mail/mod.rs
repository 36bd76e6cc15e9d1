//! Mail transport seam and the lettre-backed SMTP mailer.

use crate::{app::Config, models::outbound::OutboundMessage};
use async_trait::async_trait;
use lettre::{
  AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor, message::header::ContentType,
  transport::smtp::authentication::Credentials,
};
use std::time::Duration;
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum MailError {
  #[error("invalid mail address: {0}")]
  Address(#[from] lettre::address::AddressError),
  #[error("could not assemble message: {0}")]
  Message(#[from] lettre::error::Error),
  #[error("smtp failure: {0}")]
  Smtp(#[from] lettre::transport::smtp::Error),
  // For transports not backed by lettre
  #[error("{0}")]
  Other(String),
}

/// Capability to deliver one outbound message.
///
/// The handler only sees this trait; tests substitute a recording or
/// failing double, production wires in [`SmtpMailer`].
#[async_trait]
pub trait MailTransport: Send + Sync {
  async fn send(&self, msg: &OutboundMessage) -> Result<(), MailError>;
}

/// Relay-backed mailer, connected per the startup [`Config`].
pub struct SmtpMailer {
  transport: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpMailer {
  pub fn new(config: &Config) -> Result<Self, MailError> {
    let builder = if config.smtp_starttls {
      AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.smtp_host)?
    } else {
      // Plain connection for local relays such as MailDev
      AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&config.smtp_host)
    };
    let mut builder = builder
      .port(config.smtp_port)
      .timeout(Some(Duration::from_secs(config.smtp_timeout_secs)));
    if config.username.is_empty() || config.password.is_empty() {
      info!(
        smtp_host = %config.smtp_host,
        smtp_port = config.smtp_port,
        "SMTP credentials not configured, using unauthenticated connection"
      );
    } else {
      builder = builder.credentials(Credentials::new(
        config.username.clone(),
        config.password.clone(),
      ));
    }
    Ok(Self {
      transport: builder.build(),
    })
  }
}

#[async_trait]
impl MailTransport for SmtpMailer {
  async fn send(&self, msg: &OutboundMessage) -> Result<(), MailError> {
    let email = Message::builder()
      .from(msg.sender.parse()?)
      .to(msg.recipient.parse()?)
      .subject(msg.subject.clone())
      .header(ContentType::TEXT_PLAIN)
      .body(msg.body.clone())?;
    self.transport.send(email).await?;
    Ok(())
  }
}
