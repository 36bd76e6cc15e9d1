//! JSON body returned by the send endpoint.

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct SendResponse {
  pub success: bool,
  pub message: String,
}

impl SendResponse {
  pub fn ok(message: impl Into<String>) -> Self {
    SendResponse {
      success: true,
      message: message.into(),
    }
  }

  pub fn err(message: impl Into<String>) -> Self {
    SendResponse {
      success: false,
      message: message.into(),
    }
  }
}
