use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::storage::{append_contact_message, KeyValueStore, StorageError};

const NAME_REQUIRED: &str = "Please provide your name.";
const ALL_REQUIRED: &str = "Please complete all required fields.";

/// Entry of the append-only contact log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub message: String,
    /// ISO-8601 UTC timestamp.
    pub date: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn new(name: &str, email: &str, message: &str) -> Self {
        Self {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        }
    }

    fn trimmed(&self) -> ContactForm {
        ContactForm::new(self.name.trim(), self.email.trim(), self.message.trim())
    }
}

#[derive(Debug, Error)]
pub enum ContactError {
    #[error("{0}")]
    Validation(&'static str),
    #[error("failed to record contact message: {0}")]
    Storage(#[from] StorageError),
}

impl ContactError {
    /// Inline text shown next to the form.
    pub fn feedback(&self) -> String {
        match self {
            ContactError::Validation(text) => (*text).to_string(),
            ContactError::Storage(_) => "Sorry, your message could not be saved.".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequiredFields {
    #[default]
    NameOnly,
    All,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub feedback: String,
    pub log_len: usize,
}

pub fn validate(form: &ContactForm, required: RequiredFields) -> Result<(), ContactError> {
    match required {
        RequiredFields::NameOnly if form.name.is_empty() => {
            Err(ContactError::Validation(NAME_REQUIRED))
        }
        RequiredFields::All
            if form.name.is_empty() || form.email.is_empty() || form.message.is_empty() =>
        {
            Err(ContactError::Validation(ALL_REQUIRED))
        }
        _ => Ok(()),
    }
}

pub fn iso_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Validates `form` and appends it to the log. Nothing is written on failure.
pub fn submit(
    store: &mut dyn KeyValueStore,
    key: &str,
    form: &ContactForm,
    required: RequiredFields,
    now: DateTime<Utc>,
) -> Result<Submission, ContactError> {
    let form = form.trimmed();
    if let Err(err) = validate(&form, required) {
        tracing::info!(%err, "contact form rejected");
        return Err(err);
    }

    let message = ContactMessage {
        name: form.name.clone(),
        email: form.email,
        message: form.message,
        date: iso_timestamp(now),
    };
    let log_len = append_contact_message(store, key, message)?;
    tracing::info!(log_len, "contact message recorded");

    Ok(Submission {
        feedback: format!("Thanks, {}! Your message is recorded.", form.name),
        log_len,
    })
}
