//! Plain-text rendering of the form's read-only views.

use std::fmt;

use donation_core::calculations::DonationSummary;
use donation_core::currency::format_currency;
use donation_core::{CharityCatalog, ReferralCatalog};

const LABEL_WIDTH: usize = 44;

/// The totals table, with every amount formatted as currency.
pub struct SummaryTable<'a>(pub &'a DonationSummary);

impl fmt::Display for SummaryTable<'_> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let summary = self.0;
        writeln!(f, "{:<LABEL_WIDTH$} {:>14}", "Summary", "Amount")?;
        for line in &summary.lines {
            writeln!(
                f,
                "{:<LABEL_WIDTH$} {:>14}",
                line.label,
                format_currency(line.amount)
            )?;
        }
        writeln!(
            f,
            "{:<LABEL_WIDTH$} {:>14}",
            summary.tip.label,
            format_currency(summary.tip.amount)
        )?;
        write!(
            f,
            "{:<LABEL_WIDTH$} {:>14}",
            summary.total_label(),
            format_currency(summary.total)
        )
    }
}

/// The charity list as the allocation section groups it.
pub struct CatalogListing<'a> {
    pub charities: &'a CharityCatalog,
    pub referrals: &'a ReferralCatalog,
}

impl fmt::Display for CatalogListing<'_> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        for group in self.charities.grouped() {
            writeln!(f, "{}", group.category.heading())?;
            for charity in group.charities {
                let marker = if charity.is_fund { "*" } else { " " };
                writeln!(f, "  {marker} {:<36} {}", charity.name, charity.slug_id)?;
            }
        }
        writeln!(f, "How did you hear about us?")?;
        for source in self.referrals.iter() {
            writeln!(f, "    {:<36} {}", source.label, source.value)?;
        }
        Ok(())
    }
}
