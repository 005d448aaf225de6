use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::CatalogError;

/// A "how did you hear about us" option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferralSource {
    pub value: String,
    pub label: String,
}

/// Ordered set of referral sources offered by the communications section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferralCatalog {
    sources: Vec<ReferralSource>,
}

impl ReferralCatalog {
    pub fn new(sources: Vec<ReferralSource>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for source in &sources {
            if !seen.insert(source.value.as_str()) {
                return Err(CatalogError::DuplicateReferralSource(source.value.clone()));
            }
        }
        Ok(Self { sources })
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ReferralSource> {
        self.sources.iter()
    }

    pub fn contains(
        &self,
        value: &str,
    ) -> bool {
        self.sources.iter().any(|s| s.value == value)
    }

    pub fn label_of(
        &self,
        value: &str,
    ) -> Option<&str> {
        self.sources
            .iter()
            .find(|s| s.value == value)
            .map(|s| s.label.as_str())
    }
}
