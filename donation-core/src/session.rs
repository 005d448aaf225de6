//! Submission state machine for one form session.
//!
//! ```text
//! Idle ──validated submit──▶ Submitting ──Confirmed──────────────▶ Success
//!   ▲                            │
//!   └──offline instructions / gateway failure / timeout──────────┘
//! ```
//!
//! A failed attempt leaves nothing behind: the error is returned once and
//! the session is back in `Idle`. Nothing is retried automatically.

use std::time::Duration;

use thiserror::Error;
use tracing::{info, warn};

use crate::calculations::{SubmissionValidator, ValidationError};
use crate::models::{CharityCatalog, FormState};
use crate::submission::{SubmissionError, SubmissionGateway, SubmissionOutcome};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    /// Form is interactive.
    #[default]
    Idle,
    /// Waiting on the payment collaborator; submit is disabled.
    Submitting,
    /// Terminal: the thank-you view replaces the form.
    Success,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SubmitError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    #[error("submission failed: {0}")]
    Failed(#[from] SubmissionError),

    #[error("a submission is already in progress")]
    InProgress,

    #[error("this donation has already been submitted")]
    AlreadyCompleted,
}

/// Owns the form for one visit and tracks where its submission stands.
#[derive(Debug, Clone)]
pub struct DonationSession {
    form: FormState,
    status: SubmissionStatus,
    validator: SubmissionValidator,
}

impl DonationSession {
    /// Starts a session with a fresh form over `catalog`.
    pub fn new(catalog: &CharityCatalog) -> Self {
        Self::from_form(FormState::new(catalog))
    }

    pub fn from_form(form: FormState) -> Self {
        Self {
            form,
            status: SubmissionStatus::Idle,
            validator: SubmissionValidator::new(),
        }
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    /// Mutable access to the form, only while it is interactive.
    pub fn form_mut(&mut self) -> Option<&mut FormState> {
        match self.status {
            SubmissionStatus::Idle => Some(&mut self.form),
            SubmissionStatus::Submitting | SubmissionStatus::Success => None,
        }
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    /// Runs the validator without changing state.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.validator.validate(&self.form)
    }

    /// Validates and moves `Idle -> Submitting`, returning the snapshot to
    /// hand to the gateway.
    ///
    /// # Errors
    ///
    /// * [`SubmitError::Invalid`] if the form fails validation (stays `Idle`).
    /// * [`SubmitError::InProgress`] / [`SubmitError::AlreadyCompleted`] if
    ///   the session is not `Idle`.
    pub fn begin_submit(&mut self) -> Result<FormState, SubmitError> {
        match self.status {
            SubmissionStatus::Idle => {}
            SubmissionStatus::Submitting => return Err(SubmitError::InProgress),
            SubmissionStatus::Success => return Err(SubmitError::AlreadyCompleted),
        }

        self.validate()?;
        self.status = SubmissionStatus::Submitting;
        info!(total = %self.form.total(), "submission started");
        Ok(self.form.clone())
    }

    /// Applies the gateway's answer to a submission begun with
    /// [`begin_submit`](Self::begin_submit).
    ///
    /// `Confirmed` ends the session in `Success`; offline instructions and
    /// failures return it to `Idle`.
    pub fn complete_submit(
        &mut self,
        result: Result<SubmissionOutcome, SubmissionError>,
    ) -> Result<SubmissionOutcome, SubmitError> {
        if self.status != SubmissionStatus::Submitting {
            warn!(status = ?self.status, "completion received with no submission in flight");
        }

        match result {
            Ok(outcome @ SubmissionOutcome::Confirmed { .. }) => {
                self.status = SubmissionStatus::Success;
                info!(reference = outcome.reference(), "donation confirmed");
                Ok(outcome)
            }
            Ok(outcome @ SubmissionOutcome::RequiresOfflineInstructions { .. }) => {
                self.status = SubmissionStatus::Idle;
                info!(
                    reference = outcome.reference(),
                    "donation awaiting offline payment"
                );
                Ok(outcome)
            }
            Err(error) => {
                self.status = SubmissionStatus::Idle;
                warn!(%error, "submission failed");
                Err(SubmitError::Failed(error))
            }
        }
    }

    /// Validates, hands the snapshot to `gateway`, and waits at most
    /// `timeout` for its answer.
    pub async fn submit(
        &mut self,
        gateway: &dyn SubmissionGateway,
        timeout: Duration,
    ) -> Result<SubmissionOutcome, SubmitError> {
        let snapshot = self.begin_submit()?;

        let result = match tokio::time::timeout(timeout, gateway.submit(&snapshot)).await {
            Ok(result) => result,
            Err(_elapsed) => Err(SubmissionError::TimedOut(timeout)),
        };

        self.complete_submit(result)
    }
}
