//! Batch driver: pushes each loaded form through the same steps a donor
//! takes on the page, from field checks to the payment collaborator.

use std::fmt;
use std::path::Path;
use std::time::Duration;

use donation_core::calculations::DonationSummary;
use donation_core::submission::{GatewayRegistry, MockGatewayFactory};
use donation_core::{
    CharityCatalog, DonationSession, FormState, PaymentMethod, ReferralCatalog,
    SubmissionGateway, SubmissionOutcome, SubmitError,
};
use donation_data::{CatalogLoadError, CharityCatalogLoader, ReferralCatalogLoader, builtin};
use tracing::{info, warn};

use crate::contact::check_contact_details;
use crate::render::SummaryTable;

/// Shown once a card donation is confirmed.
pub const THANK_YOU_MESSAGE: &str = "Thank you! Your receipt will be sent to your email address.";

/// Registry with every backend this binary can submit to.
pub fn build_registry() -> GatewayRegistry {
    let mut registry = GatewayRegistry::new();
    registry.register(Box::new(MockGatewayFactory));
    registry
}

/// The charity and referral lists the forms are checked against.
#[derive(Debug, Clone)]
pub struct Catalogs {
    pub charities: CharityCatalog,
    pub referrals: ReferralCatalog,
}

impl Catalogs {
    /// Loads each catalog from its CSV when a path is given, otherwise
    /// falls back to the built-in list.
    pub fn load(
        charities: Option<&Path>,
        referrals: Option<&Path>,
    ) -> Result<Self, CatalogLoadError> {
        let charities = match charities {
            Some(path) => CharityCatalogLoader::from_path(path)?,
            None => builtin::charities()?,
        };
        let referrals = match referrals {
            Some(path) => ReferralCatalogLoader::from_path(path)?,
            None => builtin::referral_sources()?,
        };
        Ok(Self {
            charities,
            referrals,
        })
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum FormOutcome {
    /// Field-level checks failed; the form was never submitted.
    ContactInvalid(Vec<String>),
    /// Validation or the gateway stopped the submission.
    NotSubmitted(SubmitError),
    Confirmed {
        reference: String,
    },
    AwaitingTransfer {
        reference: String,
        instructions: String,
    },
}

impl fmt::Display for FormOutcome {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            FormOutcome::ContactInvalid(errors) => write!(f, "{}", errors.join(" ")),
            FormOutcome::NotSubmitted(error) => write!(f, "{error}"),
            FormOutcome::Confirmed { reference } => {
                write!(f, "{THANK_YOU_MESSAGE} Reference: {reference}")
            }
            FormOutcome::AwaitingTransfer {
                reference,
                instructions,
            } => write!(f, "{instructions} Reference: {reference}"),
        }
    }
}

/// One form's summary and what happened when it was submitted.
#[derive(Debug)]
pub struct FormReport {
    /// 1-based row in the forms file.
    pub row: usize,
    pub payment_method: PaymentMethod,
    pub summary: DonationSummary,
    pub outcome: FormOutcome,
}

impl fmt::Display for FormReport {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        writeln!(f, "Form {} ({})", self.row, self.payment_method.to_long_str())?;
        writeln!(f, "{}", SummaryTable(&self.summary))?;
        write!(f, "=> {}", self.outcome)
    }
}

#[derive(Debug, Default)]
pub struct BatchReport {
    pub forms: Vec<FormReport>,
}

impl BatchReport {
    pub fn confirmed(&self) -> usize {
        self.count(|o| matches!(o, FormOutcome::Confirmed { .. }))
    }

    pub fn awaiting_transfer(&self) -> usize {
        self.count(|o| matches!(o, FormOutcome::AwaitingTransfer { .. }))
    }

    pub fn not_submitted(&self) -> usize {
        self.count(|o| {
            matches!(
                o,
                FormOutcome::ContactInvalid(_) | FormOutcome::NotSubmitted(_)
            )
        })
    }

    fn count(
        &self,
        pred: impl Fn(&FormOutcome) -> bool,
    ) -> usize {
        self.forms.iter().filter(|r| pred(&r.outcome)).count()
    }
}

impl fmt::Display for BatchReport {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        for report in &self.forms {
            writeln!(f, "{report}")?;
            writeln!(f)?;
        }
        write!(
            f,
            "{} form(s): {} confirmed, {} awaiting bank transfer, {} not submitted",
            self.forms.len(),
            self.confirmed(),
            self.awaiting_transfer(),
            self.not_submitted()
        )
    }
}

/// Submits one form, waiting at most `timeout` for the gateway.
///
/// The core validator runs before the email and postcode format checks.
pub async fn process_form(
    form: FormState,
    charities: &CharityCatalog,
    gateway: &dyn SubmissionGateway,
    timeout: Duration,
) -> (DonationSummary, FormOutcome) {
    let summary = DonationSummary::build(&form, charities);
    let mut session = DonationSession::from_form(form);

    // Only the first failing rule is reported, and the amount rule comes first.
    if let Err(error) = session.validate() {
        return (summary, FormOutcome::NotSubmitted(error.into()));
    }
    if let Err(errors) = check_contact_details(session.form().personal_details()) {
        return (summary, FormOutcome::ContactInvalid(errors));
    }

    let outcome = match session.submit(gateway, timeout).await {
        Ok(SubmissionOutcome::Confirmed { reference }) => FormOutcome::Confirmed { reference },
        Ok(SubmissionOutcome::RequiresOfflineInstructions {
            reference,
            instructions,
        }) => FormOutcome::AwaitingTransfer {
            reference,
            instructions,
        },
        Err(error) => FormOutcome::NotSubmitted(error),
    };
    (summary, outcome)
}

/// Submits every form in order. One form's failure never stops the batch.
pub async fn run_batch(
    forms: Vec<FormState>,
    charities: &CharityCatalog,
    gateway: &dyn SubmissionGateway,
    timeout: Duration,
) -> BatchReport {
    info!(
        count = forms.len(),
        backend = gateway.backend_name(),
        "processing forms"
    );

    let mut report = BatchReport::default();
    for (idx, form) in forms.into_iter().enumerate() {
        let row = idx + 1;
        let payment_method = form.payment_method();
        let (summary, outcome) = process_form(form, charities, gateway, timeout).await;
        if matches!(
            outcome,
            FormOutcome::ContactInvalid(_) | FormOutcome::NotSubmitted(_)
        ) {
            warn!(row, %outcome, "form not submitted");
        }
        report.forms.push(FormReport {
            row,
            payment_method,
            summary,
            outcome,
        });
    }
    report
}
