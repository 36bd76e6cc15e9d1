//! Outbound email built from a submission.

use crate::app::Config;
use crate::models::contact::ContactSubmission;

const SITE_NAME: &str = "santiagopontiles.com";

/// One email handed to the mail transport, then discarded.
#[derive(Debug, Clone)]
pub struct OutboundMessage {
  pub subject: String,
  pub body: String,
  pub sender: String,
  pub recipient: String,
}

impl OutboundMessage {
  /// Interpolate the submission into the fixed subject and body templates.
  ///
  /// Caller must have verified that all three fields are present.
  pub fn from_submission(submission: &ContactSubmission, config: &Config) -> Self {
    let name = submission.name.as_deref().unwrap_or_default();
    let email = submission.email.as_deref().unwrap_or_default();
    let message = submission.message.as_deref().unwrap_or_default();
    let subject = format!("[Portfolio] New message from {name}");
    let body = format!(
      "Name: {name}\n\
       Email: {email}\n\
       \n\
       Message:\n\
       {message}\n\
       \n\
       ___________________________________________________\n\
       Sent from {SITE_NAME}\n"
    );
    OutboundMessage {
      subject,
      body,
      sender: config.sender.clone(),
      recipient: config.recipient.clone(),
    }
  }
}
