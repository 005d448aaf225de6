//! Field-level format checks for the personal details section.
//!
//! The core only requires these fields to be present. Shape checks live
//! here, with the rest of the presentation layer. Blank fields are skipped
//! so that the core's "missing details" message is the one a donor sees.

use std::sync::LazyLock;

use donation_core::{DEFAULT_COUNTRY, PersonalDetails};
use regex::Regex;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("valid email regex"));

static AU_POSTCODE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}$").expect("valid postcode regex"));

static INTL_POSTCODE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9][A-Za-z0-9 \-]{1,9}$").expect("valid postcode regex")
});

/// Checks the shape of the email and postcode fields.
///
/// Rules:
/// - email must look like `local@domain.tld`
/// - Australian postcodes are four digits
/// - other postcodes are 2-10 letters, digits, spaces or hyphens
pub fn check_contact_details(details: &PersonalDetails) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    let email = details.email.trim();
    if !email.is_empty() && !EMAIL_RE.is_match(email) {
        errors.push(format!("'{email}' is not a valid email address."));
    }

    let postcode = details.postcode.trim();
    if !postcode.is_empty() {
        let pattern = if details.country == DEFAULT_COUNTRY {
            &AU_POSTCODE_RE
        } else {
            &INTL_POSTCODE_RE
        };
        if !pattern.is_match(postcode) {
            errors.push(format!(
                "'{postcode}' is not a valid postcode for {}.",
                details.country
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
