//! Contact form model and its simulated submission.
//!
//! There is no backend: submitting waits [`SUBMIT_DELAY`], shows a toast and
//! clears the form.

use std::time::Duration;

use chrono::{DateTime, Utc};
use tracing::info;

use crate::error::{PortfolioError, PortfolioResult};

/// Simulated round-trip for a submission.
pub const SUBMIT_DELAY: Duration = Duration::from_millis(1500);

pub const CONTACT_EMAIL: &str = "example@example.com";

pub const SENT_TITLE: &str = "Message sent!";
pub const SENT_BODY: &str = "Thanks for reaching out. I'll get back to you soon!";

/// Social profile links, as `(label, url)`
pub const SOCIAL_LINKS: [(&str, &str); 4] = [
    ("GitHub", "https://github.com"),
    ("LinkedIn", "https://linkedin.com"),
    ("Twitter", "https://twitter.com"),
    ("Email", "mailto:example@example.com"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
}

/// A message that went through the simulated submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentMessage {
    pub name: String,
    pub email: String,
    pub message: String,
    pub sent_at: DateTime<Utc>,
}

/// The contact form's fields and submission state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
    state: SubmissionState,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    pub fn is_submitting(&self) -> bool {
        self.state == SubmissionState::Submitting
    }

    pub fn set(&mut self, field: ContactField, value: impl Into<String>) {
        let value = value.into();
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Message => self.message = value,
        }
    }

    /// All three fields are required; the email needs an `@`.
    pub fn validate(&self) -> PortfolioResult<()> {
        let missing = [
            ("name", &self.name),
            ("email", &self.email),
            ("message", &self.message),
        ]
        .into_iter()
        .find(|(_, value)| value.trim().is_empty());

        if let Some((field, _)) = missing {
            return Err(PortfolioError::InvalidContactForm(format!("{} is required", field)));
        }
        if !self.email.contains('@') {
            return Err(PortfolioError::InvalidContactForm(
                "email must contain '@'".to_string(),
            ));
        }
        Ok(())
    }

    /// Start submitting. Rejects invalid forms and double submits.
    pub fn begin_submit(&mut self) -> PortfolioResult<()> {
        if self.is_submitting() {
            return Err(PortfolioError::InvalidContactForm(
                "submission already in progress".to_string(),
            ));
        }
        self.validate()?;
        self.state = SubmissionState::Submitting;
        Ok(())
    }

    /// The simulated delay elapsed: clear the form and hand back what was sent.
    ///
    /// Returns `None` when no submission was in progress.
    pub fn finish_submit(&mut self) -> Option<SentMessage> {
        if !self.is_submitting() {
            return None;
        }
        let form = std::mem::take(self);
        info!(name = %form.name, "Contact message sent");
        Some(SentMessage {
            name: form.name,
            email: form.email,
            message: form.message,
            sent_at: Utc::now(),
        })
    }
}

/// vCard for the "save contact" download.
pub fn contact_vcard(display_name: &str) -> String {
    format!(
        "BEGIN:VCARD\r\nVERSION:3.0\r\nFN:{}\r\nEMAIL:{}\r\nURL:{}\r\nREV:{}\r\nEND:VCARD\r\n",
        display_name,
        CONTACT_EMAIL,
        SOCIAL_LINKS[0].1,
        Utc::now().format("%Y%m%dT%H%M%SZ"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        let mut form = ContactForm::new();
        form.set(ContactField::Name, "Rin");
        form.set(ContactField::Email, "rin@example.com");
        form.set(ContactField::Message, "Nice panels!");
        form
    }

    #[test]
    fn test_missing_fields_rejected() {
        let mut form = filled();
        form.set(ContactField::Message, "   ");
        assert!(matches!(
            form.begin_submit(),
            Err(PortfolioError::InvalidContactForm(msg)) if msg.contains("message")
        ));
        assert_eq!(form.state(), SubmissionState::Idle);
    }

    #[test]
    fn test_email_needs_at_sign() {
        let mut form = filled();
        form.set(ContactField::Email, "rin.example.com");
        assert!(form.validate().is_err());
    }

    #[test]
    fn test_submit_cycle_resets_form() {
        let mut form = filled();
        form.begin_submit().unwrap();
        assert!(form.is_submitting());
        assert!(form.begin_submit().is_err());

        let sent = form.finish_submit().unwrap();
        assert_eq!(sent.name, "Rin");
        assert_eq!(form, ContactForm::new());
        assert!(form.finish_submit().is_none());
    }

    #[test]
    fn test_vcard_contains_email() {
        let card = contact_vcard("Manga Dev");
        assert!(card.starts_with("BEGIN:VCARD"));
        assert!(card.contains("EMAIL:example@example.com"));
        assert!(card.contains("FN:Manga Dev"));
    }
}
