//! Handler for the contact-form send endpoint.

use crate::{
  app::AppState,
  models::{contact::ContactSubmission, outbound::OutboundMessage, response::SendResponse},
};
use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use tracing::error;

/// Validate a submission, relay it as an email, map the outcome to JSON.
///
/// A JSON `null` body deserializes to `None`; an unparsable body or a
/// non-JSON content type is rejected by the `Json` extractor before this
/// runs. Missing keys short-circuit to 400 without touching the transport.
pub async fn send_email(
  State(state): State<AppState>,
  Json(payload): Json<Option<ContactSubmission>>,
) -> impl IntoResponse {
  let submission = payload.unwrap_or_default();
  let missing = submission.missing_fields();
  if !missing.is_empty() {
    return (
      StatusCode::BAD_REQUEST,
      Json(SendResponse::err(format!(
        "Missing required fields: {}",
        missing.join(", ")
      ))),
    );
  }

  let msg = OutboundMessage::from_submission(&submission, &state.config);
  match state.mailer.send(&msg).await {
    Ok(()) => (
      StatusCode::OK,
      Json(SendResponse::ok("Your message has been sent.")),
    ),
    Err(e) => {
      error!("send_email transport error: {e}");
      // Transport detail stays server-side
      (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(SendResponse::err(
          "Could not send your message. Please try again later.",
        )),
      )
    }
  }
}
