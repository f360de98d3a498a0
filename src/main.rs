use tokio::signal;

use dotenvy::dotenv;
use tracing_subscriber::EnvFilter;

use feedback_relay::app::create_app;
use feedback_relay::config::AppConfig;
use feedback_relay::state::SharedAppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  dotenv().ok();

  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
    .init();

  let config = AppConfig::from_env()?;

  if config.smtp.credentials.is_none() {
    tracing::warn!("Set EMAIL_USER, EMAIL_PASS and TO_EMAIL in .env to enable feedback emails");
  }
  if config.to_email.is_none() {
    tracing::warn!("TO_EMAIL is not set and there is no EMAIL_USER to fall back to");
  }

  let app_state = SharedAppState::new(&config);
  let app = create_app(app_state);

  let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;

  tracing::info!("Server running on http://localhost:{}", config.port);

  axum::serve(listener, app)
    .with_graceful_shutdown(shutdown_signal())
    .await?;

  Ok(())
}

async fn shutdown_signal() {
  let ctrl_c = async {
    signal::ctrl_c().await.expect("Failed to install Ctrl+C handler");
  };

  #[cfg(unix)]
  let terminate = async {
    signal::unix::signal(signal::unix::SignalKind::terminate())
      .expect("Failed to install signal handler")
      .recv()
      .await;
  };

  #[cfg(not(unix))]
  let terminate = std::future::pending::<()>();

  tokio::select! {
      _ = ctrl_c => {},
      _ = terminate => {},
  }

  tracing::info!("Received termination signal, shutting down gracefully...");
}
