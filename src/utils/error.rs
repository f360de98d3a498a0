use axum::{
  http::StatusCode,
  response::{IntoResponse, Response},
  Json,
};
use serde_json::json;

#[derive(Debug)]
pub struct AppError {
  pub status_code: StatusCode,
  pub message: String,
}

impl AppError {
  pub fn new(status_code: StatusCode, message: impl Into<String>) -> Self {
    Self {
      status_code,
      message: message.into(),
    }
  }

  pub fn internal_server_error(message: impl Into<String>) -> Self {
    Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
  }
}

impl IntoResponse for AppError {
  fn into_response(self) -> Response {
    let body = Json(json!({
      "ok": false,
      "error": self.message,
    }));

    (self.status_code, body).into_response()
  }
}

impl From<crate::domains::feedback::service::FeedbackServiceError> for AppError {
  fn from(error: crate::domains::feedback::service::FeedbackServiceError) -> Self {
    AppError::internal_server_error(error.public_message())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[tokio::test]
  async fn test_into_response_shape() {
    let response = AppError::internal_server_error("mail not configured").into_response();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
      .await
      .expect("read body");
    let value: serde_json::Value = serde_json::from_slice(&body).expect("json body");
    assert_eq!(value, json!({ "ok": false, "error": "mail not configured" }));
  }
}
