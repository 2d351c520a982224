//! Contact form state machine and mail handoff
//!
//! Submission delegates message composition to the platform mailto
//! handler. The handoff is fire-and-forget: success means the request
//! was issued, not that a mail was actually sent. That is a known
//! limitation of the behavior, kept deliberately.

mod mailto;

pub use mailto::{mailto_url, percent_encode};

/// Recipient address for the contact handoff
pub const CONTACT_EMAIL: &str = "kailen.howard@protonmail.com";

/// Outcome banner shown after a submit attempt
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormOutcome {
    #[default]
    None,
    Success,
    Error,
}

/// The handoff request could not be issued
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HandoffError;

/// Where a composed mailto URL is handed off
///
/// The browser shell points this at the platform handler by assigning
/// `location.href`; tests substitute a recorder.
pub trait MailHandoff {
    /// Issue the handoff; fire-and-forget from the form's perspective
    fn open(&mut self, url: &str) -> Result<(), HandoffError>;
}

/// Contact form fields and submit state
///
/// Created empty on mount and destroyed on navigation away; nothing is
/// persisted.
#[derive(Debug, Default)]
pub struct ContactForm {
    name: String,
    email: String,
    message: String,
    submitting: bool,
    outcome: FormOutcome,
}

impl ContactForm {
    /// Create an empty form in the editing state
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn email(&self) -> &str {
        &self.email
    }

    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Check if a submit is in flight
    #[inline]
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Outcome of the last submit attempt
    #[inline]
    pub fn outcome(&self) -> FormOutcome {
        self.outcome
    }

    /// Update the name field; editing clears a stale outcome banner
    pub fn set_name(&mut self, value: &str) {
        self.name = value.to_string();
        self.outcome = FormOutcome::None;
    }

    /// Update the email field
    pub fn set_email(&mut self, value: &str) {
        self.email = value.to_string();
        self.outcome = FormOutcome::None;
    }

    /// Update the message field
    pub fn set_message(&mut self, value: &str) {
        self.message = value.to_string();
        self.outcome = FormOutcome::None;
    }

    /// Check field-level validity: all fields present, email shaped
    /// like an address
    pub fn is_valid(&self) -> bool {
        !self.name.trim().is_empty()
            && !self.message.trim().is_empty()
            && email_shape_ok(&self.email)
    }

    /// Submit intent
    ///
    /// An invalid form never leaves the editing state and returns
    /// false. A valid form composes the mailto URL and issues the
    /// handoff: success clears the fields, failure preserves them so
    /// the user can resubmit.
    pub fn submit(&mut self, handoff: &mut dyn MailHandoff) -> bool {
        if !self.is_valid() {
            return false;
        }

        self.submitting = true;
        let url = mailto_url(CONTACT_EMAIL, &self.name, &self.email, &self.message);
        let result = handoff.open(&url);
        self.submitting = false;

        match result {
            Ok(()) => {
                self.outcome = FormOutcome::Success;
                self.name.clear();
                self.email.clear();
                self.message.clear();
            }
            Err(HandoffError) => {
                self.outcome = FormOutcome::Error;
            }
        }
        true
    }
}

/// Minimal address-shape check: text on both sides of a single `@`
///
/// Full address validation is the input element's concern; this only
/// guards the composed handoff.
fn email_shape_ok(email: &str) -> bool {
    let email = email.trim();
    match email.split_once('@') {
        Some((local, domain)) => !local.is_empty() && !domain.is_empty() && !domain.contains('@'),
        None => false,
    }
}
