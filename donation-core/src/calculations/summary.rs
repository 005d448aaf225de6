//! The totals table shown to the donor beneath the amount sections.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::{AllocationType, CharityCatalog, DonationFrequency, FormState, TipType};

/// Label of the single line shown for an undirected donation.
pub const DEFAULT_ALLOCATION_LABEL: &str = "The most effective charities";

/// Tip line label under a default allocation.
pub const DEFAULT_TIP_LABEL: &str = "Help grow EA Australia's work";

/// Tip line label under a specific allocation.
pub const SPECIFIC_TIP_LABEL: &str = "Effective Altruism Australia";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryLine {
    pub label: String,
    pub amount: Decimal,
}

/// Read-only view of a form's totals.
///
/// Amounts are carried at full precision; rounding to the cent happens when
/// they are formatted for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DonationSummary {
    /// Donation lines: one per funded charity, or the default line.
    pub lines: Vec<SummaryLine>,
    pub tip: SummaryLine,
    pub total: Decimal,
    pub is_monthly: bool,
}

impl DonationSummary {
    /// Builds the summary for `state`, naming charities from `catalog`.
    ///
    /// In specific mode only charities with a non-zero allocation are
    /// listed, in catalog order.
    pub fn build(
        state: &FormState,
        catalog: &CharityCatalog,
    ) -> Self {
        let lines = match state.allocation_type() {
            AllocationType::Default => vec![SummaryLine {
                label: DEFAULT_ALLOCATION_LABEL.to_string(),
                amount: state.basic_donation_amount(),
            }],
            AllocationType::Specific => catalog
                .iter()
                .filter_map(|charity| {
                    let amount = state.charity_allocation(&charity.slug_id)?;
                    (!amount.is_zero()).then(|| SummaryLine {
                        label: charity.name.clone(),
                        amount,
                    })
                })
                .collect(),
        };

        let size = state.tip_size().normalize();
        let tip_label = match (state.allocation_type(), state.tip_type()) {
            (AllocationType::Default, TipType::Percentage) => {
                format!("{DEFAULT_TIP_LABEL} (+{size}%)")
            }
            (AllocationType::Specific, TipType::Percentage) => {
                format!("{SPECIFIC_TIP_LABEL} ({size}%)")
            }
            (AllocationType::Default, TipType::Dollar) => DEFAULT_TIP_LABEL.to_string(),
            (AllocationType::Specific, TipType::Dollar) => SPECIFIC_TIP_LABEL.to_string(),
        };

        Self {
            lines,
            tip: SummaryLine {
                label: tip_label,
                amount: state.tip_dollar_amount(),
            },
            total: state.total(),
            is_monthly: state.donation_frequency() == DonationFrequency::Monthly,
        }
    }

    /// Heading for the total line.
    pub fn total_label(&self) -> &'static str {
        if self.is_monthly {
            "TOTAL DONATION (each month)"
        } else {
            "TOTAL DONATION"
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::models::{Charity, CharityCategory};

    fn test_catalog() -> CharityCatalog {
        let charity = |slug: &str, name: &str| Charity {
            slug_id: slug.to_string(),
            name: name.to_string(),
            category: CharityCategory::Recommended,
            is_fund: false,
        };
        CharityCatalog::new(vec![
            charity("amf", "Against Malaria Foundation"),
            charity("gd", "GiveDirectly"),
            charity("hki", "Helen Keller International"),
        ])
        .unwrap()
    }

    #[test]
    fn default_mode_has_single_line() {
        let catalog = test_catalog();
        let mut state = FormState::new(&catalog);
        state.set_basic_donation_amount(dec!(100));

        let summary = DonationSummary::build(&state, &catalog);

        assert_eq!(
            summary.lines,
            vec![SummaryLine {
                label: DEFAULT_ALLOCATION_LABEL.to_string(),
                amount: dec!(100),
            }]
        );
        assert_eq!(summary.tip.label, "Help grow EA Australia's work (+10%)");
        assert_eq!(summary.tip.amount, dec!(10));
        assert_eq!(summary.total, dec!(110));
        assert_eq!(summary.total_label(), "TOTAL DONATION");
    }

    #[test]
    fn specific_mode_lists_funded_charities_in_catalog_order() {
        let catalog = test_catalog();
        let mut state = FormState::new(&catalog);
        state.set_allocation_type(AllocationType::Specific);
        state.set_charity_allocation("hki", dec!(1.98)).unwrap();
        state.set_charity_allocation("amf", dec!(0.01)).unwrap();

        let summary = DonationSummary::build(&state, &catalog);

        let labels: Vec<&str> = summary.lines.iter().map(|l| l.label.as_str()).collect();
        assert_eq!(
            labels,
            vec!["Against Malaria Foundation", "Helen Keller International"]
        );
        assert_eq!(summary.total, dec!(2.189));
        assert_eq!(summary.tip.label, "Effective Altruism Australia (10%)");
    }

    #[test]
    fn specific_dollar_tip_label_has_no_percentage() {
        let catalog = test_catalog();
        let mut state = FormState::new(&catalog);
        state.set_allocation_type(AllocationType::Specific);
        state.set_tip(dec!(2.50), TipType::Dollar);

        let summary = DonationSummary::build(&state, &catalog);

        assert_eq!(summary.tip.label, "Effective Altruism Australia");
    }

    #[test]
    fn dollar_tip_has_no_percentage_suffix() {
        let catalog = test_catalog();
        let mut state = FormState::new(&catalog);
        state.set_tip(dec!(5), TipType::Dollar);

        let summary = DonationSummary::build(&state, &catalog);

        assert_eq!(summary.tip.label, "Help grow EA Australia's work");
        assert_eq!(summary.tip.amount, dec!(5));
    }

    #[test]
    fn monthly_total_is_flagged() {
        let catalog = test_catalog();
        let mut state = FormState::new(&catalog);
        state.set_donation_frequency(DonationFrequency::Monthly);

        let summary = DonationSummary::build(&state, &catalog);

        assert!(summary.is_monthly);
        assert_eq!(summary.total_label(), "TOTAL DONATION (each month)");
    }
}
