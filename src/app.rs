use axum::{response::Html, routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::{domains::feedback::rest::feedback_routes, state::SharedAppState};

const LANDING_PAGE: &str = include_str!("../static/index.html");

pub fn create_app(state: SharedAppState) -> Router {
  Router::new()
    .route("/", get(landing_page_handler))
    .nest("/api", feedback_routes())
    .layer(TraceLayer::new_for_http())
    .with_state(state)
}

pub async fn landing_page_handler() -> Html<&'static str> {
  Html(LANDING_PAGE)
}
