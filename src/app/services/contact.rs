//! Contact form state and its hand-off to an email relay.
//!
//! The relay itself (an HTTP call to a third-party mail service) lives
//! outside this crate. [`ContactController::submit`] builds the payload and
//! passes it to an [`EmailRelay`]; the relay reports back later through
//! [`ContactController::complete`].

use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

use regex_lite::Regex;

pub use crate::app::domain::contact::ContactField;
use crate::app::infrastructure::error::{AppError, Result};

static EMAIL_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+$").expect("email pattern is valid"));

pub const SENT_MESSAGE: &str = "Message sent successfully!";
pub const FAILED_MESSAGE: &str = "Failed to send message. Please try again later.";

/// How long the notification banner stays up.
pub const NOTIFICATION_AUTO_HIDE_MS: u64 = 6000;

/// Identifiers the relay needs to route a message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelayConfig {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            service_id: "service_s648v8q".to_string(),
            template_id: "template_yjsotxy".to_string(),
            public_key: "wBbAChWzwh8V6pXIg".to_string(),
        }
    }
}

/// Template parameters sent to the relay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RelayPayload {
    pub from_name: String,
    pub reply_to: String,
    pub message: String,
}

/// Fire-and-forget delivery. `send` only starts the request; an `Err` means
/// it could not even be started.
pub trait EmailRelay {
    fn send(&mut self, config: &RelayConfig, payload: &RelayPayload) -> Result<()>;
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn set(&mut self, field: ContactField, value: impl Into<String>) {
        let value = value.into();
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Message => self.message = value,
        }
    }

    /// Every field is required and the email must look like `local@domain`.
    pub fn validate(&self) -> std::result::Result<(), ContactField> {
        if self.name.trim().is_empty() {
            return Err(ContactField::Name);
        }
        if !EMAIL_SHAPE.is_match(self.email.trim()) {
            return Err(ContactField::Email);
        }
        if self.message.trim().is_empty() {
            return Err(ContactField::Message);
        }
        Ok(())
    }

    pub fn payload(&self) -> RelayPayload {
        RelayPayload {
            from_name: self.name.clone(),
            reply_to: self.email.clone(),
            message: self.message.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

/// Transient banner shown after a submission settles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: &'static str,
    pub severity: Severity,
    pub open: bool,
    pub auto_hide_ms: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitResult {
    Started,
    /// A previous submission is still outstanding.
    Busy,
    Invalid(ContactField),
}

#[derive(Debug, Default)]
pub struct ContactController {
    form: ContactForm,
    loading: bool,
    notification: Option<Notification>,
}

impl ContactController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn notification(&self) -> Option<&Notification> {
        self.notification.as_ref()
    }

    pub fn update(&mut self, field: ContactField, value: impl Into<String>) {
        self.form.set(field, value);
    }

    pub fn submit(&mut self, relay: &mut dyn EmailRelay, config: &RelayConfig) -> SubmitResult {
        if self.loading {
            log::debug!("Submit ignored, previous message still in flight");
            return SubmitResult::Busy;
        }
        if let Err(field) = self.form.validate() {
            return SubmitResult::Invalid(field);
        }

        self.loading = true;
        let payload = self.form.payload();
        if let Err(e) = relay.send(config, &payload) {
            self.complete(Err(e));
        }
        SubmitResult::Started
    }

    /// Settle the outstanding submission. Has no effect if nothing is in flight.
    pub fn complete(&mut self, outcome: Result<()>) {
        if !self.loading {
            log::warn!("Relay completion arrived with no submission in flight");
            return;
        }
        self.loading = false;

        match outcome {
            Ok(()) => {
                log::info!("Contact message sent");
                self.form = ContactForm::default();
                self.notification = Some(Notification {
                    message: SENT_MESSAGE,
                    severity: Severity::Success,
                    open: true,
                    auto_hide_ms: NOTIFICATION_AUTO_HIDE_MS,
                });
            }
            Err(e) => {
                log::error!("Error sending message: {}", e);
                self.notification = Some(Notification {
                    message: FAILED_MESSAGE,
                    severity: Severity::Error,
                    open: true,
                    auto_hide_ms: NOTIFICATION_AUTO_HIDE_MS,
                });
            }
        }
    }

    pub fn close_notification(&mut self) {
        if let Some(n) = self.notification.as_mut() {
            n.open = false;
        }
    }
}

/// Relay that records what it was asked to send and never completes by
/// itself. Useful for tests and dry runs.
#[derive(Debug, Default)]
pub struct RecordingRelay {
    pub sent: Vec<RelayPayload>,
    pub refuse: bool,
}

impl EmailRelay for RecordingRelay {
    fn send(&mut self, _config: &RelayConfig, payload: &RelayPayload) -> Result<()> {
        if self.refuse {
            return Err(AppError::Relay("relay unavailable".to_string()));
        }
        self.sent.push(payload.clone());
        Ok(())
    }
}
