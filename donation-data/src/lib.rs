//! Catalog data for the donation form: the charities a donor can allocate
//! to and the referral sources offered in the communications section.

pub mod builtin;
mod loader;

pub use loader::{
    CatalogLoadError, CharityCatalogLoader, CharityRecord, ReferralCatalogLoader, ReferralRecord,
};
