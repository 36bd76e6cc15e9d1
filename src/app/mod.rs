//! Application setup and runtime.

use crate::{
  http,
  mail::{MailTransport, SmtpMailer},
};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;

fn env_or(key: &str, default: &str) -> String {
  std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Mail relay and server settings, read once at startup.
///
/// All values are opaque to the handlers; only the bind address and port
/// are parsed. The recipient falls back to the sender, which falls back
/// to the relay username, so a single `MAIL_USERNAME` is enough for the
/// common self-hosted setup.
#[derive(Debug, Clone)]
pub struct Config {
  pub addr: String,
  pub smtp_host: String,
  pub smtp_port: u16,
  pub smtp_starttls: bool,
  pub smtp_timeout_secs: u64,
  pub username: String,
  pub password: String,
  pub sender: String,
  pub recipient: String,
}

impl Config {
  pub fn from_env() -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
    let username = env_or("MAIL_USERNAME", "");
    let sender = env_or("MAIL_SENDER", &username);
    let recipient = env_or("MAIL_RECIPIENT", &sender);
    Ok(Self {
      addr: env_or("PORTFOLIO_ADDR", "127.0.0.1:8000"),
      smtp_host: env_or("SMTP_HOST", "smtp.gmail.com"),
      smtp_port: env_or("SMTP_PORT", "587").parse()?,
      smtp_starttls: env_or("SMTP_STARTTLS", "true").parse()?,
      smtp_timeout_secs: env_or("SMTP_TIMEOUT_SECS", "30").parse()?,
      username,
      password: env_or("MAIL_PASSWORD", ""),
      sender,
      recipient,
    })
  }
}

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
  pub config: Arc<Config>,
  pub mailer: Arc<dyn MailTransport>,
}

/// Start the HTTP server with configured environment.
pub async fn run() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
  crate::util::init_tracing();

  let config = Arc::new(Config::from_env()?);
  let mailer = Arc::new(SmtpMailer::new(&config)?);
  let state = AppState {
    config: config.clone(),
    mailer,
  };

  let app = http::build_router(state);

  let addr: SocketAddr = config.addr.parse()?;

  info!("portfolio home:      http://{}/", addr);
  info!("contact form:        http://{}/contact", addr);
  info!("send endpoint:       POST http://{}/send-email", addr);

  let listener = tokio::net::TcpListener::bind(addr).await?;
  axum::serve(listener, app).await?;
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::sync::Mutex;

  // from_env reads process-wide state; tests touching it must not interleave
  static ENV_LOCK: Mutex<()> = Mutex::new(());

  const VARS: &[&str] = &[
    "PORTFOLIO_ADDR",
    "SMTP_HOST",
    "SMTP_PORT",
    "SMTP_STARTTLS",
    "SMTP_TIMEOUT_SECS",
    "MAIL_USERNAME",
    "MAIL_PASSWORD",
    "MAIL_SENDER",
    "MAIL_RECIPIENT",
  ];

  fn with_env<T>(vars: &[(&str, &str)], f: impl FnOnce() -> T) -> T {
    let _guard = ENV_LOCK.lock().unwrap();
    for key in VARS {
      std::env::remove_var(key);
    }
    for (key, value) in vars {
      std::env::set_var(key, value);
    }
    let out = f();
    for key in VARS {
      std::env::remove_var(key);
    }
    out
  }

  #[test]
  fn username_alone_feeds_sender_and_recipient() {
    let config = with_env(&[("MAIL_USERNAME", "me@example.com")], || {
      Config::from_env().unwrap()
    });
    assert_eq!(config.username, "me@example.com");
    assert_eq!(config.sender, "me@example.com");
    assert_eq!(config.recipient, "me@example.com");
  }

  #[test]
  fn sender_feeds_recipient_when_recipient_unset() {
    let config = with_env(
      &[
        ("MAIL_USERNAME", "me@example.com"),
        ("MAIL_SENDER", "noreply@example.com"),
      ],
      || Config::from_env().unwrap(),
    );
    assert_eq!(config.sender, "noreply@example.com");
    assert_eq!(config.recipient, "noreply@example.com");
  }

  #[test]
  fn explicit_recipient_wins() {
    let config = with_env(
      &[
        ("MAIL_USERNAME", "me@example.com"),
        ("MAIL_SENDER", "noreply@example.com"),
        ("MAIL_RECIPIENT", "inbox@example.com"),
      ],
      || Config::from_env().unwrap(),
    );
    assert_eq!(config.sender, "noreply@example.com");
    assert_eq!(config.recipient, "inbox@example.com");
  }

  #[test]
  fn defaults_apply_without_env() {
    let config = with_env(&[], || Config::from_env().unwrap());
    assert_eq!(config.addr, "127.0.0.1:8000");
    assert_eq!(config.smtp_host, "smtp.gmail.com");
    assert_eq!(config.smtp_port, 587);
    assert!(config.smtp_starttls);
    assert_eq!(config.smtp_timeout_secs, 30);
  }

  #[test]
  fn unparsable_port_and_flag_error() {
    let err = with_env(&[("SMTP_PORT", "not-a-port")], || Config::from_env());
    assert!(err.is_err());
    let err = with_env(&[("SMTP_STARTTLS", "yes")], || Config::from_env());
    assert!(err.is_err());
  }
}
