//! Booking form state machine.
//!
//! All state changes go through [`Wizard::dispatch`]. A `Submit` event that
//! passes contact validation hands back the [`BookingRecord`] to send; the
//! caller reports the proxy's answer with `Settled`.

pub mod validation;

use crate::errors::SubmitError;
use crate::models::{BookingDraft, BookingRecord, Service};

pub use validation::ValidationError;

pub const SUCCESS_MESSAGE: &str = "Booking successfully submitted!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    SelectService,
    SelectDateTime,
    ContactInfo,
}

impl Step {
    pub fn number(&self) -> u8 {
        match self {
            Step::SelectService => 1,
            Step::SelectDateTime => 2,
            Step::ContactInfo => 3,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Step::SelectService => "select_service",
            Step::SelectDateTime => "select_date_time",
            Step::ContactInfo => "contact_info",
        }
    }
}

/// Message shown above the form.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Outcome {
    #[default]
    None,
    Success(String),
    Error(String),
}

#[derive(Debug)]
pub enum WizardEvent {
    SelectService(Service),
    SetDate(String),
    SetTime(String),
    SetName(String),
    SetEmail(String),
    SetPhone(String),
    Next,
    Back,
    Submit,
    Settled(Result<serde_json::Value, SubmitError>),
}

#[derive(Debug, Clone)]
pub struct Wizard {
    step: Step,
    draft: BookingDraft,
    outcome: Outcome,
    submitting: bool,
}

impl Default for Wizard {
    fn default() -> Self {
        Self::new()
    }
}

impl Wizard {
    pub fn new() -> Self {
        Self {
            step: Step::SelectService,
            draft: BookingDraft::default(),
            outcome: Outcome::None,
            submitting: false,
        }
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn draft(&self) -> &BookingDraft {
        &self.draft
    }

    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Applies one event. Returns the payload to send to the proxy only when a
    /// submission was started by this event.
    pub fn dispatch(&mut self, event: WizardEvent) -> Option<BookingRecord> {
        match event {
            WizardEvent::SelectService(service) => self.draft.select_service(service),
            WizardEvent::SetDate(v) => self.draft.date = v,
            WizardEvent::SetTime(v) => self.draft.time = v,
            WizardEvent::SetName(v) => self.draft.name = v,
            WizardEvent::SetEmail(v) => self.draft.email = v,
            WizardEvent::SetPhone(v) => self.draft.phone = v,
            WizardEvent::Next => self.next(),
            WizardEvent::Back => self.back(),
            WizardEvent::Submit => return self.submit(),
            WizardEvent::Settled(result) => self.settle(result),
        }
        None
    }

    fn guard(&mut self, check: Result<(), ValidationError>) -> bool {
        match check {
            Ok(()) => {
                self.outcome = Outcome::None;
                true
            }
            Err(e) => {
                tracing::debug!(step = self.step.as_str(), error = %e, "step validation failed");
                self.outcome = Outcome::Error(e.to_string());
                false
            }
        }
    }

    fn next(&mut self) {
        let target = match self.step {
            Step::SelectService => {
                if !self.guard(validation::validate_service(&self.draft)) {
                    return;
                }
                Step::SelectDateTime
            }
            Step::SelectDateTime => {
                if !self.guard(validation::validate_date_time(&self.draft)) {
                    return;
                }
                Step::ContactInfo
            }
            // Step 3 leaves through Submit only.
            Step::ContactInfo => return,
        };
        self.step = target;
    }

    fn back(&mut self) {
        if self.submitting {
            return;
        }
        self.step = match self.step {
            Step::SelectService => return,
            Step::SelectDateTime => Step::SelectService,
            Step::ContactInfo => Step::SelectDateTime,
        };
        self.outcome = Outcome::None;
    }

    fn submit(&mut self) -> Option<BookingRecord> {
        if self.step != Step::ContactInfo || self.submitting {
            return None;
        }
        if !self.guard(validation::validate_contact(&self.draft)) {
            return None;
        }

        self.submitting = true;
        self.outcome = Outcome::None;
        Some(BookingRecord::single(self.draft.to_fields()))
    }

    fn settle(&mut self, result: Result<serde_json::Value, SubmitError>) {
        if !self.submitting {
            tracing::warn!("submission result received with nothing in flight, ignoring");
            return;
        }
        self.submitting = false;

        match result {
            Ok(_) => {
                self.draft = BookingDraft::default();
                self.step = Step::SelectService;
                self.outcome = Outcome::Success(SUCCESS_MESSAGE.to_string());
            }
            Err(e) => {
                tracing::error!(error = %e, "error submitting booking");
                self.outcome = Outcome::Error(format!("Failed to submit booking: {e}"));
            }
        }
    }
}
