use async_trait::async_trait;
use std::{error::Error, sync::Arc};

use super::{message::render, model::FeedbackSubmission};
use crate::email::{EmailMessage, TransportProvider};

#[derive(Debug)]
pub enum FeedbackServiceError {
  DestinationNotConfigured,
  MailNotConfigured,
  SendFailed(String),
}

impl FeedbackServiceError {
  /// Message returned to the client. Never includes transport detail.
  pub fn public_message(&self) -> &'static str {
    match self {
      FeedbackServiceError::DestinationNotConfigured => "destination not configured",
      FeedbackServiceError::MailNotConfigured => "mail not configured",
      FeedbackServiceError::SendFailed(_) => "could not send email",
    }
  }
}

impl Error for FeedbackServiceError {}

impl std::fmt::Display for FeedbackServiceError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      FeedbackServiceError::SendFailed(msg) => write!(f, "{}: {}", self.public_message(), msg),
      _ => write!(f, "{}", self.public_message()),
    }
  }
}

#[async_trait]
pub trait FeedbackService: Send + Sync {
  async fn submit(&self, submission: FeedbackSubmission) -> Result<(), FeedbackServiceError>;
}

pub struct FeedbackServiceImpl {
  provider: Arc<TransportProvider>,
  to_email: Option<String>,
  from_email: Option<String>,
}

impl FeedbackServiceImpl {
  pub fn new(provider: Arc<TransportProvider>, to_email: Option<String>, from_email: Option<String>) -> Self {
    Self {
      provider,
      to_email,
      from_email,
    }
  }
}

#[async_trait]
impl FeedbackService for FeedbackServiceImpl {
  async fn submit(&self, submission: FeedbackSubmission) -> Result<(), FeedbackServiceError> {
    let rendered = render(&submission);

    let Some(to_email) = self.to_email.clone() else {
      tracing::warn!("TO_EMAIL is not set, dropping feedback submission");
      return Err(FeedbackServiceError::DestinationNotConfigured);
    };

    let mailer = self
      .provider
      .get()
      .await
      .ok_or(FeedbackServiceError::MailNotConfigured)?;

    let from_email = self
      .from_email
      .clone()
      .ok_or(FeedbackServiceError::MailNotConfigured)?;

    let message = EmailMessage::new(
      from_email,
      to_email,
      rendered.subject,
      rendered.text_body,
      rendered.html_body,
    );

    match mailer.send_email(&message).await {
      Ok(_) => {
        tracing::info!(
          "Feedback email sent to {} (code only = {})",
          message.to,
          submission.is_code_only()
        );
        Ok(())
      }
      Err(e) => {
        tracing::error!("Failed to send feedback email to {}: {:?}", message.to, e);
        Err(FeedbackServiceError::SendFailed(e.to_string()))
      }
    }
  }
}
