use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use axum::{
  body::{Body, Bytes},
  http::{Request, StatusCode},
  Router,
};
use tower::ServiceExt;

use crate::{
  app::create_app,
  config::AppConfig,
  email::{EmailMessage, Mailer, SmtpConfig, SmtpCredentials, TransportProvider},
  state::SharedAppState,
};

mockall::mock! {
  pub Mailer {}

  #[async_trait]
  impl Mailer for Mailer {
    async fn send_email(&self, message: &EmailMessage) -> Result<()>;
  }
}

pub fn test_config(to_email: Option<&str>) -> AppConfig {
  AppConfig {
    port: 0,
    smtp: SmtpConfig {
      credentials: Some(SmtpCredentials {
        username: "sender@example.com".to_string(),
        password: "secret".to_string(),
      }),
      ..SmtpConfig::default()
    },
    to_email: to_email.map(str::to_string),
    from_email: Some("sender@example.com".to_string()),
  }
}

pub fn provider_with_mailer(mailer: MockMailer) -> TransportProvider {
  let mailer: Arc<dyn Mailer> = Arc::new(mailer);
  TransportProvider::with_factory(test_config(None).smtp, move |_, _| Ok(Arc::clone(&mailer)))
}

pub fn app_with_mailer(mailer: MockMailer, to_email: Option<&str>) -> Router {
  let config = test_config(to_email);
  let state = SharedAppState::with_provider(&config, Arc::new(provider_with_mailer(mailer)));
  create_app(state)
}

pub async fn post_raw(app: Router, uri: &str, body: impl Into<Body>) -> (StatusCode, Bytes) {
  let request = Request::builder()
    .method("POST")
    .uri(uri)
    .header("content-type", "application/json")
    .body(body.into())
    .expect("build request");

  let response = app.oneshot(request).await.expect("handle request");
  let status = response.status();
  let body = axum::body::to_bytes(response.into_body(), usize::MAX)
    .await
    .expect("read response body");
  (status, body)
}

pub async fn post_json(app: Router, uri: &str, body: &serde_json::Value) -> (StatusCode, Bytes) {
  post_raw(app, uri, serde_json::to_vec(body).expect("serialize request body")).await
}
