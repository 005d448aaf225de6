//! The boundary to the payment collaborator.
//!
//! A [`SubmissionGateway`] receives a finalized [`FormState`](crate::FormState)
//! snapshot and reports whether the donation was confirmed or needs offline
//! (bank transfer) instructions. Gateways are created from a
//! [`GatewayConfig`] through a [`GatewayRegistry`].

pub mod gateway;
pub mod mock;
pub mod registry;

pub use gateway::{SubmissionError, SubmissionGateway, SubmissionOutcome};
pub use mock::{BANK_TRANSFER_INSTRUCTIONS, MockGateway, MockGatewayFactory};
pub use registry::{GatewayConfig, GatewayFactory, GatewayRegistry};
