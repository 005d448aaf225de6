pub mod calculations;
pub mod currency;
pub mod input;
pub mod models;
pub mod session;
pub mod submission;

pub use calculations::{SubmissionValidator, ValidationError};
pub use models::*;
pub use session::{DonationSession, SubmissionStatus, SubmitError};
pub use submission::{SubmissionError, SubmissionGateway, SubmissionOutcome};
