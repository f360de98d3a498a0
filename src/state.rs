use std::sync::Arc;

use crate::{
  config::AppConfig,
  domains::feedback::{
    model::FeedbackSubmission,
    service::{FeedbackService, FeedbackServiceError, FeedbackServiceImpl},
  },
  email::TransportProvider,
};

pub trait AppState: Clone + Send + Sync + 'static {
  fn submit_feedback(
    &self,
    submission: FeedbackSubmission,
  ) -> impl std::future::Future<Output = Result<(), FeedbackServiceError>> + Send;
}

#[derive(Clone)]
pub struct SharedAppState {
  pub feedback_service: Arc<FeedbackServiceImpl>,
}

impl SharedAppState {
  pub fn new(config: &AppConfig) -> Self {
    let provider = Arc::new(TransportProvider::new(config.smtp.clone()));
    Self::with_provider(config, provider)
  }

  pub fn with_provider(config: &AppConfig, provider: Arc<TransportProvider>) -> Self {
    let feedback_service = Arc::new(FeedbackServiceImpl::new(
      provider,
      config.to_email.clone(),
      config.from_email.clone(),
    ));

    Self { feedback_service }
  }
}

impl AppState for SharedAppState {
  async fn submit_feedback(&self, submission: FeedbackSubmission) -> Result<(), FeedbackServiceError> {
    self.feedback_service.submit(submission).await
  }
}
