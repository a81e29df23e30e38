//! The contact form.
//!
//! Submission is simulated: valid input disables the submit button for a
//! fixed delay, then shows a thank-you message and resets the form. Nothing
//! leaves the page.

use dioxus_logger::tracing::{debug, info};
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::context::PageContext;
use crate::event::PageEvent;
use crate::scheduler::Task;

pub const FORM_ID: &str = "contactForm";
pub const RESPONSE_ID: &str = "formResponse";
pub const RESPONSE_CLASS: &str = "form-response";
pub const SENDING_LABEL: &str = "Sending...";
pub const SUCCESS_MESSAGE: &str = "Thank you for your message! I'll get back to you soon.";

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please fill in all fields.")]
    MissingFields,
    #[error("Please enter a valid email address.")]
    InvalidEmail,
}

/// Form inputs, keyed by element id.
#[derive(Clone, Copy, PartialEq, Eq, Debug, strum::Display, strum::EnumString, strum::AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum Field {
    Name,
    Email,
    Message,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactFields {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Message => self.message = value,
        }
    }

    /// Trims every field and checks them: presence first, then email shape.
    pub fn validate(&self) -> Result<ContactFields, ValidationError> {
        let trimmed = ContactFields {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            message: self.message.trim().to_string(),
        };
        if trimmed.name.is_empty() || trimmed.email.is_empty() || trimmed.message.is_empty() {
            return Err(ValidationError::MissingFields);
        }
        if !is_valid_email(&trimmed.email) {
            return Err(ValidationError::InvalidEmail);
        }
        Ok(trimmed)
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum ResponseKind {
    Success,
    Error,
}

/// A status message shown under the form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormResponse {
    pub text: String,
    pub kind: ResponseKind,
    pub seq: u64,
}

impl FormResponse {
    pub fn class(&self) -> String {
        format!("{RESPONSE_CLASS} {}", self.kind)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubmitButton {
    pub label: String,
    pub disabled: bool,
    original_label: String,
}

impl SubmitButton {
    pub fn new(label: &str) -> Self {
        Self {
            label: label.to_string(),
            disabled: false,
            original_label: label.to_string(),
        }
    }

    fn start_sending(&mut self) {
        self.label = SENDING_LABEL.to_string();
        self.disabled = true;
    }

    fn restore(&mut self) {
        self.label = self.original_label.clone();
        self.disabled = false;
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactState {
    pub fields: ContactFields,
    pub submit: SubmitButton,
    response: Option<FormResponse>,
    next_seq: u64,
}

impl ContactState {
    pub fn new(submit_label: &str) -> Self {
        Self {
            fields: ContactFields::default(),
            submit: SubmitButton::new(submit_label),
            response: None,
            next_seq: 0,
        }
    }

    /// The visible response, if any.
    pub fn response(&self) -> Option<&FormResponse> {
        self.response.as_ref()
    }

    pub fn is_sending(&self) -> bool {
        self.submit.disabled
    }

    fn show(&mut self, text: impl Into<String>, kind: ResponseKind) -> u64 {
        self.next_seq += 1;
        self.response = Some(FormResponse {
            text: text.into(),
            kind,
            seq: self.next_seq,
        });
        self.next_seq
    }

    fn hide(&mut self, seq: u64) {
        if self.response.as_ref().is_some_and(|r| r.seq == seq) {
            self.response = None;
        }
    }
}

pub(crate) fn on_input(ctx: &mut PageContext<'_>, event: &PageEvent) {
    let PageEvent::Input { target, value } = event else {
        return;
    };
    let Some(field) = target.id.as_deref().and_then(|id| id.parse::<Field>().ok()) else {
        return;
    };
    ctx.state.contact.fields.set(field, value.clone());
}

pub(crate) fn on_submit(ctx: &mut PageContext<'_>, _event: &PageEvent) {
    let contact = &mut ctx.state.contact;
    if contact.is_sending() {
        debug!("ignoring submit while a message is being sent");
        return;
    }
    contact.response = None;

    match contact.fields.validate() {
        Err(e) => {
            contact.show(e.to_string(), ResponseKind::Error);
        }
        Ok(fields) => {
            info!("sending message from {}", fields.email);
            contact.submit.start_sending();
            let delay = ctx.state.config.send_delay();
            ctx.schedule(delay, Task::FinishSend);
        }
    }
}

pub(crate) fn on_timer(ctx: &mut PageContext<'_>, event: &PageEvent) {
    let PageEvent::Timer(task) = event else {
        return;
    };
    match task {
        Task::FinishSend => {
            let contact = &mut ctx.state.contact;
            let seq = contact.show(SUCCESS_MESSAGE, ResponseKind::Success);
            contact.fields = ContactFields::default();
            contact.submit.restore();
            let delay = ctx.state.config.success_hide_delay();
            ctx.schedule(delay, Task::HideResponse { seq });
        }
        Task::HideResponse { seq } => ctx.state.contact.hide(*seq),
    }
}
