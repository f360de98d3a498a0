use anyhow::Context;

use crate::email::{SmtpConfig, SmtpCredentials, DEFAULT_SMTP_HOST, DEFAULT_SMTP_PORT};

pub const DEFAULT_PORT: u16 = 3000;

/// Process configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
  pub port: u16,
  pub smtp: SmtpConfig,
  /// `TO_EMAIL`, falling back to the SMTP account user.
  pub to_email: Option<String>,
  /// `EMAIL_FROM`, falling back to the SMTP account user.
  pub from_email: Option<String>,
}

impl AppConfig {
  pub fn from_env() -> anyhow::Result<Self> {
    Self::from_lookup(|key| std::env::var(key).ok())
  }

  pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
  where
    F: Fn(&str) -> Option<String>,
  {
    let var = |key: &str| lookup(key).filter(|value| !value.is_empty());

    let port = match var("PORT") {
      Some(port) => port.parse().with_context(|| format!("PORT is not a valid port: {}", port))?,
      None => DEFAULT_PORT,
    };

    let user = var("EMAIL_USER");
    let credentials = match (user.clone(), var("EMAIL_PASS")) {
      (Some(username), Some(password)) => Some(SmtpCredentials { username, password }),
      _ => None,
    };

    let smtp = SmtpConfig {
      host: var("SMTP_HOST").unwrap_or_else(|| DEFAULT_SMTP_HOST.to_string()),
      port: var("SMTP_PORT")
        .and_then(|port| port.parse().ok())
        .unwrap_or(DEFAULT_SMTP_PORT),
      secure: var("SMTP_SECURE").as_deref() == Some("true"),
      credentials,
    };

    Ok(Self {
      port,
      smtp,
      to_email: var("TO_EMAIL").or_else(|| user.clone()),
      from_email: var("EMAIL_FROM").or(user),
    })
  }
}
