//! Email sending functionality module
//!
//! Outgoing mail goes through the [`Mailer`] trait. [`EmailService`] is the
//! lettre-backed SMTP implementation and [`TransportProvider`] builds it once
//! per process from [`SmtpConfig`].

mod provider;
mod service;
mod types;

use anyhow::Result;
use async_trait::async_trait;

pub use provider::{MailerFactory, TransportProvider};
pub use service::EmailService;
pub use types::{EmailMessage, SmtpConfig, SmtpCredentials, DEFAULT_SMTP_HOST, DEFAULT_SMTP_PORT};

#[async_trait]
pub trait Mailer: Send + Sync {
  async fn send_email(&self, message: &EmailMessage) -> Result<()>;
}
