//! Contact form validation and the form-relay payload.

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const MESSAGE_MIN_CHARS: usize = 10;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ContactError {
    #[error("name is missing")]
    MissingName,
    #[error("email address is invalid")]
    InvalidEmail,
    #[error("message must be at least {min} characters")]
    MessageTooShort { min: usize },
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    /// Every problem with the form, or `Ok` when it can be sent.
    pub fn validate(&self) -> Result<(), Vec<ContactError>> {
        let mut errors = Vec::new();
        if self.name.trim().is_empty() {
            errors.push(ContactError::MissingName);
        }
        if !looks_like_email(&self.email) {
            errors.push(ContactError::InvalidEmail);
        }
        if self.message.chars().count() < MESSAGE_MIN_CHARS {
            errors.push(ContactError::MessageTooShort {
                min: MESSAGE_MIN_CHARS,
            });
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    pub fn payload<'a>(&'a self, access_key: &'a str) -> ContactPayload<'a> {
        ContactPayload {
            access_key,
            name: &self.name,
            email: &self.email,
            message: &self.message,
        }
    }
}

/// JSON body posted to the relay.
#[derive(Debug, Serialize)]
pub struct ContactPayload<'a> {
    pub access_key: &'a str,
    pub name: &'a str,
    pub email: &'a str,
    pub message: &'a str,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct RelayReply {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

/// `local@domain.tld` shape: no whitespace, something before the `@`, and a
/// dot with characters on both sides after it.
pub fn looks_like_email(s: &str) -> bool {
    if s.is_empty() || s.chars().any(char::is_whitespace) {
        return false;
    }
    s.match_indices('@').any(|(at, _)| {
        let domain = &s[at + 1..];
        at > 0
            && domain
                .match_indices('.')
                .any(|(dot, _)| dot > 0 && dot + 1 < domain.len())
    })
}
