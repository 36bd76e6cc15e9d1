//! HTTP router and handlers.

use crate::app::AppState;
use axum::{
  Router,
  routing::{get, post},
};

pub mod pages;
pub mod send;

/// Assemble the HTTP router with all routes.
pub fn build_router(state: AppState) -> Router {
  Router::new()
    .route("/", get(pages::home))
    .route("/contact", get(pages::contact))
    .route("/send-email", post(send::send_email))
    .with_state(state)
}
