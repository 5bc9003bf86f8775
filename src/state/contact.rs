//! Contact form state machine.
//!
//! DESIGN
//! ======
//! `Idle -> Validating -> (Idle | Sending) -> (Done | Idle)`.
//!
//! Validation itself is the browser's native constraint check; the machine
//! only receives its verdict. An invalid form returns to `Idle` with the
//! `was-validated` marker set so CSS can surface the hints. A valid form
//! enters `Sending`, which disables the submit control until the send
//! resolves. Success lands in `Done` (and clears the marker); failure
//! returns to `Idle` with the fields intact. `Done` accepts a new submit.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use serde::Serialize;

use crate::net::contact::ContactError;
use crate::state::toast::ToastKind;

pub const SUBMIT_LABEL: &str = "Send Project Brief";
pub const SENDING_LABEL: &str = "Sending...";
pub const SUCCESS_MESSAGE: &str = "Thank you! Your message has been sent.";
pub const FAILURE_MESSAGE: &str = "Sorry, your message could not be sent. Please try again.";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormPhase {
    #[default]
    Idle,
    Validating,
    Sending,
    Done,
}

/// Result of a submit attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Constraint validation failed; nothing is sent.
    Invalid,
    /// The caller should collect the payload and start the send.
    Send,
    /// A send is already in flight.
    Ignored,
}

/// Toast to show when a send resolves.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Notice {
    pub message: &'static str,
    pub kind: ToastKind,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactState {
    pub phase: FormPhase,
    pub was_validated: bool,
}

impl ContactState {
    /// Handle a submit event given the native validity verdict.
    pub fn submit(&mut self, valid: bool) -> SubmitOutcome {
        if self.phase == FormPhase::Sending {
            return SubmitOutcome::Ignored;
        }
        self.phase = FormPhase::Validating;
        if valid {
            self.phase = FormPhase::Sending;
            SubmitOutcome::Send
        } else {
            self.phase = FormPhase::Idle;
            self.was_validated = true;
            SubmitOutcome::Invalid
        }
    }

    /// Resolve an in-flight send. Returns `None` if nothing was sending.
    ///
    /// Success clears `fields` for the next message; failure leaves them as
    /// typed so the visitor can retry.
    pub fn complete(&mut self, fields: &mut ContactFields, result: Result<(), &ContactError>) -> Option<Notice> {
        if self.phase != FormPhase::Sending {
            return None;
        }
        match result {
            Ok(()) => {
                self.phase = FormPhase::Done;
                self.was_validated = false;
                fields.clear();
                Some(Notice {
                    message: SUCCESS_MESSAGE,
                    kind: ToastKind::Success,
                })
            }
            Err(_) => {
                self.phase = FormPhase::Idle;
                Some(Notice {
                    message: FAILURE_MESSAGE,
                    kind: ToastKind::Error,
                })
            }
        }
    }

    #[must_use]
    pub fn submit_disabled(&self) -> bool {
        self.phase == FormPhase::Sending
    }

    #[must_use]
    pub fn submit_label(&self) -> &'static str {
        if self.submit_disabled() { SENDING_LABEL } else { SUBMIT_LABEL }
    }
}

/// Current values of the form's named fields.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactFields {
    pub full_name: String,
    pub email: String,
    pub service_type: String,
    pub budget: String,
    pub message: String,
}

impl ContactFields {
    /// Snapshot the fields into the template parameters of the delivery call.
    #[must_use]
    pub fn payload(&self) -> ContactPayload {
        ContactPayload {
            full_name: self.full_name.clone(),
            from_email: self.email.clone(),
            service_type: self.service_type.clone(),
            budget: self.budget.clone(),
            message: self.message.clone(),
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Template parameters for the email-delivery integration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ContactPayload {
    pub full_name: String,
    pub from_email: String,
    pub service_type: String,
    pub budget: String,
    pub message: String,
}
