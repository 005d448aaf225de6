//! Catalogs shipped with the form, used when no catalog file is configured.

use donation_core::{CharityCatalog, ReferralCatalog};

use crate::{CatalogLoadError, CharityCatalogLoader, ReferralCatalogLoader};

const CHARITIES_CSV: &str = include_str!("../data/charities.csv");
const REFERRAL_SOURCES_CSV: &str = include_str!("../data/referral_sources.csv");

/// The default charity catalog.
pub fn charities() -> Result<CharityCatalog, CatalogLoadError> {
    CharityCatalogLoader::from_reader(CHARITIES_CSV.as_bytes())
}

/// The default referral sources.
pub fn referral_sources() -> Result<ReferralCatalog, CatalogLoadError> {
    ReferralCatalogLoader::from_reader(REFERRAL_SOURCES_CSV.as_bytes())
}

#[cfg(test)]
mod tests {
    use donation_core::CharityCategory;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn builtin_charities_load() {
        let catalog = charities().unwrap();

        assert_eq!(catalog.len(), 10);
        assert_eq!(catalog.name_of("unallocated"), Some("Top Charities Fund"));
        assert_eq!(
            catalog.get("sightsavers").map(|c| c.category),
            Some(CharityCategory::Other)
        );
    }

    #[test]
    fn builtin_grouping_lists_funds_first() {
        let catalog = charities().unwrap();

        let groups = catalog.grouped();

        let first_three: Vec<&str> = groups[0]
            .charities
            .iter()
            .take(3)
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(
            first_three,
            vec!["All Grants Fund", "Top Charities Fund", "Against Malaria Foundation"]
        );
        assert_eq!(groups[1].charities.len(), 3);
    }

    #[test]
    fn builtin_referral_sources_load() {
        let catalog = referral_sources().unwrap();

        assert_eq!(catalog.len(), 8);
        assert_eq!(catalog.label_of("podcast"), Some("Podcast"));
    }
}
