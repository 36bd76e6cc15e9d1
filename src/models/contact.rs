//! Contact-form submission payload.

use serde::Deserialize;

/// One contact-form submission, as posted by the contact page.
///
/// Fields are optional so that presence is checked by the handler, which
/// answers a missing key with its own JSON error body instead of the
/// framework's rejection. Values are opaque strings; no format or length
/// checks beyond presence.
#[derive(Debug, Default, Deserialize)]
pub struct ContactSubmission {
  pub name: Option<String>,
  pub email: Option<String>,
  pub message: Option<String>,
}

impl ContactSubmission {
  /// Names of the required keys absent from this submission.
  pub fn missing_fields(&self) -> Vec<&'static str> {
    let mut missing = Vec::new();
    if self.name.is_none() {
      missing.push("name");
    }
    if self.email.is_none() {
      missing.push("email");
    }
    if self.message.is_none() {
      missing.push("message");
    }
    missing
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn missing_fields_lists_absent_keys() {
    let sub = ContactSubmission {
      name: None,
      email: Some("a@b.com".into()),
      message: None,
    };
    assert_eq!(sub.missing_fields(), vec!["name", "message"]);
  }

  #[test]
  fn missing_fields_empty_when_all_present() {
    let sub = ContactSubmission {
      name: Some("x".into()),
      email: Some("y".into()),
      message: Some("z".into()),
    };
    assert!(sub.missing_fields().is_empty());
  }

  #[test]
  fn empty_object_is_missing_everything() {
    let sub: ContactSubmission = serde_json::from_str("{}").unwrap();
    assert_eq!(sub.missing_fields(), vec!["name", "email", "message"]);
  }
}
