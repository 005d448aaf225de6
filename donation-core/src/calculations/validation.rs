//! Submit-time checks.
//!
//! Two rules run in a fixed order and only the first failure is reported:
//!
//! 1. Amount: donation base plus tip must be at least [`MINIMUM_DONATION`].
//! 2. Personal details: first name, last name, email and postcode must be
//!    non-empty after trimming.

use rust_decimal::Decimal;
use thiserror::Error;
use tracing::{debug, warn};

use crate::models::{AllocationType, FormState};

/// Smallest accepted total (base plus tip), inclusive.
pub const MINIMUM_DONATION: Decimal = Decimal::TWO;

/// Reasons a submit attempt is refused. The messages are shown to the donor.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// Default allocation total (including tip) is below the minimum.
    #[error("Please select an amount of at least $2.")]
    InsufficientAmount { total: Decimal },

    /// Specific allocation total (including tip) is below the minimum.
    #[error("Please allocate at least $2 across your preferred charities.")]
    InsufficientSpecificAllocation { total: Decimal },

    /// One or more required identity fields are blank.
    #[error("Please fill in all required personal details.")]
    MissingPersonalDetails { missing: Vec<&'static str> },
}

/// Single synchronous pass over a form snapshot. Never mutates the form.
#[derive(Debug, Clone, Copy, Default)]
pub struct SubmissionValidator;

impl SubmissionValidator {
    pub fn new() -> Self {
        Self
    }

    /// Runs the amount rule, then the personal details rule.
    ///
    /// # Errors
    ///
    /// Returns the first failing rule as a [`ValidationError`].
    pub fn validate(
        &self,
        state: &FormState,
    ) -> Result<(), ValidationError> {
        let result = self
            .check_amount(state)
            .and_then(|()| self.check_personal_details(state));

        match &result {
            Ok(()) => debug!(total = %state.total(), "form passed validation"),
            Err(error) => warn!(?error, "form failed validation"),
        }
        result
    }

    fn check_amount(
        &self,
        state: &FormState,
    ) -> Result<(), ValidationError> {
        let tip = state.tip_dollar_amount();
        match state.allocation_type() {
            AllocationType::Specific => {
                let total = state.specific_allocations_total() + tip;
                if total < MINIMUM_DONATION {
                    return Err(ValidationError::InsufficientSpecificAllocation { total });
                }
            }
            AllocationType::Default => {
                let total = state.basic_donation_amount() + tip;
                if total < MINIMUM_DONATION {
                    return Err(ValidationError::InsufficientAmount { total });
                }
            }
        }
        Ok(())
    }

    fn check_personal_details(
        &self,
        state: &FormState,
    ) -> Result<(), ValidationError> {
        let missing = state.personal_details().missing_fields();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::MissingPersonalDetails { missing })
        }
    }
}
