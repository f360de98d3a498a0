use std::sync::{
  atomic::{AtomicBool, Ordering},
  Arc,
};

use anyhow::Result;
use tokio::sync::OnceCell;

use crate::email::{
  service::EmailService,
  types::{SmtpConfig, SmtpCredentials},
  Mailer,
};

pub type MailerFactory = Box<dyn Fn(&SmtpConfig, &SmtpCredentials) -> Result<Arc<dyn Mailer>> + Send + Sync>;

/// Hands out the process-wide mail transport.
///
/// The transport is built on first use and shared afterwards. Missing
/// credentials or a failed build are never cached, so every call checks again.
pub struct TransportProvider {
  config: SmtpConfig,
  factory: MailerFactory,
  mailer: OnceCell<Arc<dyn Mailer>>,
  warned_missing_credentials: AtomicBool,
}

impl TransportProvider {
  pub fn new(config: SmtpConfig) -> Self {
    Self::with_factory(config, |config, credentials| {
      let service = EmailService::new(config, credentials)?;
      Ok(Arc::new(service) as Arc<dyn Mailer>)
    })
  }

  pub fn with_factory<F>(config: SmtpConfig, factory: F) -> Self
  where
    F: Fn(&SmtpConfig, &SmtpCredentials) -> Result<Arc<dyn Mailer>> + Send + Sync + 'static,
  {
    Self {
      config,
      factory: Box::new(factory),
      mailer: OnceCell::new(),
      warned_missing_credentials: AtomicBool::new(false),
    }
  }

  pub async fn get(&self) -> Option<Arc<dyn Mailer>> {
    let Some(credentials) = self.config.credentials.as_ref() else {
      if !self.warned_missing_credentials.swap(true, Ordering::Relaxed) {
        tracing::warn!("EMAIL_USER or EMAIL_PASS is not set, feedback emails cannot be sent");
      }
      return None;
    };

    let result = self
      .mailer
      .get_or_try_init(move || async move {
        tracing::info!(
          "Building SMTP transport for {}:{} (secure = {})",
          self.config.host,
          self.config.port,
          self.config.secure
        );
        (self.factory)(&self.config, credentials)
      })
      .await;

    match result {
      Ok(mailer) => Some(Arc::clone(mailer)),
      Err(e) => {
        tracing::error!("Failed to build SMTP transport: {:?}", e);
        None
      }
    }
  }
}
