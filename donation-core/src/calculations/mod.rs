//! Derivations over a [`FormState`](crate::FormState).
//!
//! The tip resolver and allocation aggregator are pure functions re-run by
//! the form's setters; the validator runs once per submit attempt.

pub mod allocation;
pub mod common;
pub mod summary;
pub mod tip;
pub mod validation;

pub use allocation::AllocationAggregator;
pub use summary::{DonationSummary, SummaryLine};
pub use tip::TipResolver;
pub use validation::{MINIMUM_DONATION, SubmissionValidator, ValidationError};
