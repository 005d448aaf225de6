//! CSV loader for batches of donation forms.
//!
//! Each row is one donor's pass through the form. Amount cells hold the raw
//! text the donor typed and go through the same coercion as the live form,
//! so `abc` or `-5` becomes `$0.00` rather than an error.
//!
//! ## CSV Format
//!
//! Headers are matched by name; column order does not matter. Every column
//! is optional and an empty cell leaves the form default in place.
//!
//! | Column                    | Type   | Notes |
//! |---------------------------|--------|-------|
//! | `frequency`               | code   | `one-time` (default) or `monthly` |
//! | `allocation`              | code   | `default` (default) or `specific` |
//! | `amount`                  | text   | Lump sum for default allocation |
//! | `allocations`             | text   | `slug:amount;slug:amount` for specific allocation |
//! | `tip_type`                | code   | `percentage` (default) or `dollar` |
//! | `tip_size`                | text   | Percent or dollars; default `10` |
//! | `first_name`              | string | |
//! | `last_name`               | string | |
//! | `email`                   | string | |
//! | `postcode`                | string | |
//! | `country`                 | string | Default `Australia` |
//! | `payment_method`          | code   | `credit-card` (default) or `bank-transfer` |
//! | `subscribe_to_updates`    | bool   | Default `true` |
//! | `subscribe_to_newsletter` | bool   | Default `false` |
//! | `connect_to_community`    | bool   | Default `false` |
//! | `referral_source`         | code   | A referral catalog value |
//!
//! ### Example
//!
//! ```csv
//! allocation,amount,allocations,tip_type,tip_size,first_name,last_name,email,postcode,payment_method
//! default,100,,,,Ada,Lovelace,ada@example.org,3000,credit-card
//! specific,,against-malaria-foundation:25;givedirectly:25,dollar,5,Alan,Turing,alan@example.org,2000,bank-transfer
//! ```

use std::path::Path;

use donation_core::input::{parse_amount, parse_optional_amount};
use donation_core::{
    AllocationType, CharityCatalog, DonationFrequency, FormError, FormState, PaymentMethod,
    ReferralCatalog, TipType,
};
use serde::Deserialize;

// ---------------------------------------------------------------------------
// Serde-compatible row that mirrors the CSV layout exactly
// ---------------------------------------------------------------------------

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct CsvRow {
    frequency: Option<String>,
    allocation: Option<String>,
    amount: Option<String>,
    allocations: Option<String>,
    tip_type: Option<String>,
    tip_size: Option<String>,
    first_name: Option<String>,
    last_name: Option<String>,
    email: Option<String>,
    postcode: Option<String>,
    country: Option<String>,
    payment_method: Option<String>,
    subscribe_to_updates: Option<bool>,
    subscribe_to_newsletter: Option<bool>,
    connect_to_community: Option<bool>,
    referral_source: Option<String>,
}

// ---------------------------------------------------------------------------
// Public error type
// ---------------------------------------------------------------------------

/// Errors that can occur while loading or converting form rows.
///
/// Row numbers are 1-based and do not count the header.
#[derive(Debug, thiserror::Error)]
pub enum CsvLoadError {
    #[error("CSV parse error: {0}")]
    Parse(#[from] csv::Error),

    #[error("cannot read form file: {0}")]
    Io(#[from] std::io::Error),

    #[error("unrecognised {column} '{value}' on row {row}")]
    InvalidCode {
        column: &'static str,
        value: String,
        row: usize,
    },

    #[error("malformed allocation '{entry}' on row {row} (expected slug:amount)")]
    InvalidAllocation { entry: String, row: usize },

    #[error("unknown charity '{slug}' on row {row}")]
    UnknownCharity { slug: String, row: usize },

    #[error("unknown referral source '{value}' on row {row}")]
    UnknownReferralSource { value: String, row: usize },
}

// ---------------------------------------------------------------------------
// Core loader
// ---------------------------------------------------------------------------

fn parse_code<T>(
    cell: Option<String>,
    column: &'static str,
    row: usize,
    parse: fn(&str) -> Option<T>,
) -> Result<Option<T>, CsvLoadError> {
    match cell {
        None => Ok(None),
        Some(value) => match parse(&value) {
            Some(code) => Ok(Some(code)),
            None => Err(CsvLoadError::InvalidCode { column, value, row }),
        },
    }
}

/// Applies `slug:amount;slug:amount` to the form.
fn apply_allocations(
    form: &mut FormState,
    spec: &str,
    row: usize,
) -> Result<(), CsvLoadError> {
    for entry in spec.split(';').map(str::trim).filter(|e| !e.is_empty()) {
        let (slug, amount) = entry
            .split_once(':')
            .ok_or_else(|| CsvLoadError::InvalidAllocation {
                entry: entry.to_string(),
                row,
            })?;
        form.set_charity_allocation(slug.trim(), parse_amount(amount))
            .map_err(|e| match e {
                FormError::UnknownCharity(slug) => CsvLoadError::UnknownCharity { slug, row },
            })?;
    }
    Ok(())
}

/// Convert a single CSV row into a populated form.
fn convert_row(
    row: CsvRow,
    row_number: usize,
    charities: &CharityCatalog,
    referrals: &ReferralCatalog,
) -> Result<FormState, CsvLoadError> {
    let mut form = FormState::new(charities);

    if let Some(frequency) =
        parse_code(row.frequency, "frequency", row_number, DonationFrequency::parse)?
    {
        form.set_donation_frequency(frequency);
    }
    if let Some(spec) = &row.allocations {
        apply_allocations(&mut form, spec, row_number)?;
    }
    if let Some(amount) = &row.amount {
        form.set_basic_donation_amount(parse_amount(amount));
    }
    if let Some(allocation) =
        parse_code(row.allocation, "allocation", row_number, AllocationType::parse)?
    {
        form.set_allocation_type(allocation);
    }

    let tip_type = parse_code(row.tip_type, "tip_type", row_number, TipType::parse)?;
    if tip_type.is_some() || row.tip_size.is_some() {
        let size = row
            .tip_size
            .as_deref()
            .and_then(parse_optional_amount)
            .unwrap_or_else(|| form.tip_size());
        form.set_tip(size, tip_type.unwrap_or(form.tip_type()));
    }

    if let Some(method) = parse_code(
        row.payment_method,
        "payment_method",
        row_number,
        PaymentMethod::parse,
    )? {
        form.set_payment_method(method);
    }

    let details = form.personal_details_mut();
    details.first_name = row.first_name.unwrap_or_default();
    details.last_name = row.last_name.unwrap_or_default();
    details.email = row.email.unwrap_or_default();
    details.postcode = row.postcode.unwrap_or_default();
    if let Some(country) = row.country {
        details.country = country;
    }

    if let Some(value) = &row.referral_source {
        if !referrals.contains(value) {
            return Err(CsvLoadError::UnknownReferralSource {
                value: value.clone(),
                row: row_number,
            });
        }
    }

    let comms = form.communications_mut();
    if let Some(v) = row.subscribe_to_updates {
        comms.subscribe_to_updates = v;
    }
    if let Some(v) = row.subscribe_to_newsletter {
        comms.subscribe_to_newsletter = v;
    }
    if let Some(v) = row.connect_to_community {
        comms.connect_to_community = v;
    }
    comms.referral_source = row.referral_source;

    Ok(form)
}

/// Parse CSV text and return one [`FormState`] per row, in file order.
///
/// # Errors
///
/// * [`CsvLoadError::Parse`] if the CSV is structurally invalid.
/// * [`CsvLoadError::InvalidCode`] for an unrecognised choice code.
/// * [`CsvLoadError::InvalidAllocation`] / [`CsvLoadError::UnknownCharity`]
///   for a bad `allocations` cell.
/// * [`CsvLoadError::UnknownReferralSource`] for a code not in `referrals`.
pub fn load_from_str(
    input: &str,
    charities: &CharityCatalog,
    referrals: &ReferralCatalog,
) -> Result<Vec<FormState>, CsvLoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .flexible(false)
        .from_reader(input.as_bytes());

    reader
        .deserialize::<CsvRow>()
        .enumerate()
        .map(|(idx, result)| {
            let row = result?;
            convert_row(row, idx + 1, charities, referrals)
        })
        .collect()
}

/// Read a file from disk and delegate to [`load_from_str`].
pub fn load_from_file(
    path: &Path,
    charities: &CharityCatalog,
    referrals: &ReferralCatalog,
) -> Result<Vec<FormState>, CsvLoadError> {
    let contents = std::fs::read_to_string(path)?;
    load_from_str(&contents, charities, referrals)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use donation_core::{Charity, CharityCategory, ReferralSource};
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn charities() -> CharityCatalog {
        let charity = |slug: &str| Charity {
            slug_id: slug.to_string(),
            name: slug.to_uppercase(),
            category: CharityCategory::Recommended,
            is_fund: false,
        };
        CharityCatalog::new(vec![charity("amf"), charity("gd"), charity("hki")]).unwrap()
    }

    fn referrals() -> ReferralCatalog {
        ReferralCatalog::new(vec![ReferralSource {
            value: "podcast".to_string(),
            label: "Podcast".to_string(),
        }])
        .unwrap()
    }

    fn load(input: &str) -> Result<Vec<FormState>, CsvLoadError> {
        load_from_str(input, &charities(), &referrals())
    }

    // -----------------------------------------------------------------------
    // 1. Defaults: a row with only an amount keeps every other default
    // -----------------------------------------------------------------------
    #[test]
    fn test_amount_only_row_keeps_defaults() {
        let forms = load("amount\n100\n").expect("should parse");

        assert_eq!(forms.len(), 1);
        let f = &forms[0];
        assert_eq!(f.basic_donation_amount(), dec!(100));
        assert_eq!(f.tip_type(), TipType::Percentage);
        assert_eq!(f.tip_dollar_amount(), dec!(10));
        assert_eq!(f.payment_method(), PaymentMethod::CreditCard);
        assert_eq!(f.personal_details().country, "Australia");
        assert!(f.communications().subscribe_to_updates);
    }

    // -----------------------------------------------------------------------
    // 2. Specific allocation with a fixed tip
    // -----------------------------------------------------------------------
    #[test]
    fn test_specific_allocations_are_applied() {
        let csv = "\
allocation,allocations,tip_type,tip_size
specific,amf:0.01; gd:0.01 ;hki:1.98,dollar,0.20
";
        let forms = load(csv).unwrap();
        let f = &forms[0];

        assert_eq!(f.allocation_type(), AllocationType::Specific);
        assert_eq!(f.donation_base(), dec!(2.00));
        assert_eq!(f.tip_dollar_amount(), dec!(0.20));
        assert_eq!(f.total(), dec!(2.20));
    }

    // -----------------------------------------------------------------------
    // 3. Amount coercion never fails a row
    // -----------------------------------------------------------------------
    #[test]
    fn test_garbage_amounts_coerce_to_zero() {
        let csv = "amount,tip_size\nabc,-5\n";
        let forms = load(csv).unwrap();

        assert_eq!(forms[0].basic_donation_amount(), dec!(0));
        assert_eq!(forms[0].tip_size(), dec!(0));
    }

    #[test]
    fn test_tip_type_alone_keeps_default_size() {
        let forms = load("amount,tip_type\n50,dollar\n").unwrap();

        assert_eq!(forms[0].tip_dollar_amount(), dec!(10));
    }

    // -----------------------------------------------------------------------
    // 4. Communications and details
    // -----------------------------------------------------------------------
    #[test]
    fn test_details_and_preferences_are_carried() {
        let csv = "\
first_name,last_name,email,postcode,country,subscribe_to_updates,connect_to_community,referral_source,frequency,payment_method
Ada,Lovelace,ada@example.org,3000,New Zealand,false,true,podcast,monthly,bank-transfer
";
        let forms = load(csv).unwrap();
        let f = &forms[0];

        assert_eq!(f.personal_details().first_name, "Ada");
        assert_eq!(f.personal_details().country, "New Zealand");
        assert!(!f.communications().subscribe_to_updates);
        assert!(f.communications().connect_to_community);
        assert_eq!(f.communications().referral_source.as_deref(), Some("podcast"));
        assert_eq!(f.donation_frequency(), DonationFrequency::Monthly);
        assert_eq!(f.payment_method(), PaymentMethod::BankTransfer);
    }

    // -----------------------------------------------------------------------
    // 5. Error paths
    // -----------------------------------------------------------------------
    #[test]
    fn test_invalid_code_reports_column_and_row() {
        let result = load("amount,frequency\n10,one-time\n10,weekly\n");

        match result {
            Err(CsvLoadError::InvalidCode { column, value, row }) => {
                assert_eq!(column, "frequency");
                assert_eq!(value, "weekly");
                assert_eq!(row, 2);
            }
            other => panic!("expected InvalidCode, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_charity_is_an_error() {
        let result = load("allocations\nsightsavers:5\n");

        assert!(matches!(
            result,
            Err(CsvLoadError::UnknownCharity { ref slug, row: 1 }) if slug == "sightsavers"
        ));
    }

    #[test]
    fn test_malformed_allocation_is_an_error() {
        let result = load("allocations\namf=5\n");

        assert!(matches!(result, Err(CsvLoadError::InvalidAllocation { .. })));
    }

    #[test]
    fn test_unknown_referral_source_is_an_error() {
        let result = load("referral_source\nradio\n");

        assert!(matches!(
            result,
            Err(CsvLoadError::UnknownReferralSource { .. })
        ));
    }

    #[test]
    fn test_ragged_rows_fail_to_parse() {
        let result = load("amount,email\n10\n");

        assert!(matches!(result, Err(CsvLoadError::Parse(_))));
    }
}
