use axum::{
  body::Bytes,
  extract::State,
  response::Json as JsonResponse,
  routing::{post, Router},
};

use super::model::{FeedbackResponse, FeedbackSubmission};
use crate::{
  state::{AppState, SharedAppState},
  AppError,
};

pub fn feedback_routes() -> Router<SharedAppState> {
  Router::new().route("/feedback", post(submit_feedback_handler))
}

pub async fn submit_feedback_handler(
  State(state): State<SharedAppState>,
  body: Bytes,
) -> Result<JsonResponse<FeedbackResponse>, AppError> {
  let submission = FeedbackSubmission::from_body(&body);
  state.submit_feedback(submission).await?;
  Ok(JsonResponse(FeedbackResponse { ok: true }))
}
