use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::FormState;

/// What the payment collaborator did with a submitted donation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubmissionOutcome {
    /// Payment confirmed (card checkout completed).
    Confirmed { reference: String },
    /// Donor must complete payment out of band, e.g. by bank transfer.
    RequiresOfflineInstructions {
        reference: String,
        instructions: String,
    },
}

impl SubmissionOutcome {
    pub fn reference(&self) -> &str {
        match self {
            Self::Confirmed { reference } => reference,
            Self::RequiresOfflineInstructions { reference, .. } => reference,
        }
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SubmissionError {
    #[error("payment rejected: {0}")]
    Rejected(String),

    #[error("transport error: {0}")]
    Transport(String),

    #[error("no response from payment provider after {0:?}")]
    TimedOut(Duration),

    #[error("configuration error: {0}")]
    Configuration(String),
}

#[async_trait]
pub trait SubmissionGateway: Send + Sync {
    /// Unique, lowercase identifier for this backend.
    fn backend_name(&self) -> &'static str;

    /// Hands a validated form snapshot to the payment provider.
    async fn submit(
        &self,
        form: &FormState,
    ) -> Result<SubmissionOutcome, SubmissionError>;
}
