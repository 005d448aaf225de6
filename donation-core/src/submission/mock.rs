//! In-process stand-in for the payment provider.
//!
//! Card donations are confirmed (the real provider would redirect to a
//! hosted checkout first); bank transfers come back with transfer
//! instructions and a reference the donor quotes on their payment.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use tracing::info;

use super::gateway::{SubmissionError, SubmissionGateway, SubmissionOutcome};
use super::registry::{GatewayConfig, GatewayFactory};
use crate::models::{FormState, PaymentMethod};

/// Text shown to donors who pay by bank transfer.
pub const BANK_TRANSFER_INSTRUCTIONS: &str = "We will email you our account details. \
Log in to your bank and make a transfer quoting your unique reference number.";

pub struct MockGateway {
    delay: Duration,
    sequence: AtomicU64,
}

impl MockGateway {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            sequence: AtomicU64::new(1),
        }
    }

    /// `DON-<yyyymmdd>-<sequence>`, unique per gateway instance.
    fn next_reference(&self) -> String {
        let n = self.sequence.fetch_add(1, Ordering::Relaxed);
        format!("DON-{}-{n:06}", Utc::now().format("%Y%m%d"))
    }
}

impl Default for MockGateway {
    fn default() -> Self {
        Self::new(Duration::ZERO)
    }
}

#[async_trait]
impl SubmissionGateway for MockGateway {
    fn backend_name(&self) -> &'static str {
        "mock"
    }

    async fn submit(
        &self,
        form: &FormState,
    ) -> Result<SubmissionOutcome, SubmissionError> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        let reference = self.next_reference();
        info!(
            %reference,
            payment_method = form.payment_method().as_str(),
            total = %form.total(),
            "mock submission accepted"
        );

        Ok(match form.payment_method() {
            PaymentMethod::CreditCard => SubmissionOutcome::Confirmed { reference },
            PaymentMethod::BankTransfer => SubmissionOutcome::RequiresOfflineInstructions {
                reference,
                instructions: BANK_TRANSFER_INSTRUCTIONS.to_string(),
            },
        })
    }
}

/// Register this with a [`GatewayRegistry`](super::GatewayRegistry) to make
/// the `"mock"` backend available.
pub struct MockGatewayFactory;

#[async_trait]
impl GatewayFactory for MockGatewayFactory {
    fn backend_name(&self) -> &'static str {
        "mock"
    }

    async fn create(
        &self,
        config: &GatewayConfig,
    ) -> Result<Box<dyn SubmissionGateway>, SubmissionError> {
        Ok(Box::new(MockGateway::new(config.simulated_delay)))
    }
}
