use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("duplicate charity '{0}' in catalog")]
    DuplicateCharity(String),

    #[error("duplicate referral source '{0}' in catalog")]
    DuplicateReferralSource(String),
}

/// Display grouping for a charity. Has no effect on any calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CharityCategory {
    Recommended,
    Other,
}

impl CharityCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Recommended => "recommended",
            Self::Other => "other",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "recommended" => Some(Self::Recommended),
            "other" => Some(Self::Other),
            _ => None,
        }
    }

    /// Heading shown above the group in the allocation section.
    pub fn heading(&self) -> &'static str {
        match self {
            Self::Recommended => "Our top recommended charities & funds",
            Self::Other => "Other charities we support",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Charity {
    pub slug_id: String,
    pub name: String,
    pub category: CharityCategory,
    /// Pooled funds are listed ahead of individual charities.
    pub is_fund: bool,
}

/// A display group produced by [`CharityCatalog::grouped`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharityGroup<'a> {
    pub category: CharityCategory,
    pub charities: Vec<&'a Charity>,
}

/// Ordered, immutable set of charities a donor can allocate to.
///
/// The catalog defines the key set of a form's specific allocations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharityCatalog {
    charities: Vec<Charity>,
}

impl CharityCatalog {
    /// Builds a catalog, rejecting duplicate slugs.
    pub fn new(charities: Vec<Charity>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for charity in &charities {
            if !seen.insert(charity.slug_id.as_str()) {
                return Err(CatalogError::DuplicateCharity(charity.slug_id.clone()));
            }
        }
        Ok(Self { charities })
    }

    pub fn len(&self) -> usize {
        self.charities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.charities.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Charity> {
        self.charities.iter()
    }

    pub fn slugs(&self) -> impl Iterator<Item = &str> {
        self.charities.iter().map(|c| c.slug_id.as_str())
    }

    pub fn get(
        &self,
        slug_id: &str,
    ) -> Option<&Charity> {
        self.charities.iter().find(|c| c.slug_id == slug_id)
    }

    pub fn contains(
        &self,
        slug_id: &str,
    ) -> bool {
        self.get(slug_id).is_some()
    }

    pub fn name_of(
        &self,
        slug_id: &str,
    ) -> Option<&str> {
        self.get(slug_id).map(|c| c.name.as_str())
    }

    /// Groups charities for display: recommended first, then other.
    ///
    /// Within the recommended group the funds come first, in reverse
    /// catalog order, followed by the remaining charities in catalog order.
    /// Empty groups are omitted.
    pub fn grouped(&self) -> Vec<CharityGroup<'_>> {
        let of = |category: CharityCategory| {
            self.charities
                .iter()
                .filter(move |c| c.category == category)
        };

        let mut recommended: Vec<&Charity> =
            of(CharityCategory::Recommended).filter(|c| c.is_fund).collect();
        recommended.reverse();
        recommended.extend(of(CharityCategory::Recommended).filter(|c| !c.is_fund));

        let other: Vec<&Charity> = of(CharityCategory::Other).collect();

        [
            (CharityCategory::Recommended, recommended),
            (CharityCategory::Other, other),
        ]
        .into_iter()
        .filter(|(_, charities)| !charities.is_empty())
        .map(|(category, charities)| CharityGroup {
            category,
            charities,
        })
        .collect()
    }
}
