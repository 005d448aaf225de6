use std::fs::File;
use std::io::Read;
use std::path::Path;

use donation_core::{
    CatalogError, Charity, CharityCatalog, CharityCategory, ReferralCatalog, ReferralSource,
};
use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when loading catalog data.
#[derive(Debug, Error)]
pub enum CatalogLoadError {
    #[error("CSV parse error: {0}")]
    CsvParse(String),

    #[error("cannot read '{path}': {message}")]
    Io { path: String, message: String },

    /// `row` is 1-based, not counting the header.
    #[error("invalid category '{value}' on row {row} (expected 'recommended' or 'other')")]
    InvalidCategory { value: String, row: usize },

    #[error("catalog error: {0}")]
    Catalog(#[from] CatalogError),
}

impl From<csv::Error> for CatalogLoadError {
    fn from(err: csv::Error) -> Self {
        CatalogLoadError::CsvParse(err.to_string())
    }
}

fn open(path: &Path) -> Result<File, CatalogLoadError> {
    File::open(path).map_err(|e| CatalogLoadError::Io {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

/// A single record from a charities CSV file.
///
/// - `slug_id`: stable identifier, the allocation key
/// - `name`: display name
/// - `category`: `recommended` or `other`
/// - `is_fund`: `true` for pooled funds, listed first in their group
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct CharityRecord {
    pub slug_id: String,
    pub name: String,
    pub category: String,
    pub is_fund: bool,
}

/// Loader for the charity catalog.
pub struct CharityCatalogLoader;

impl CharityCatalogLoader {
    /// Parse charity records from any CSV reader, in file order.
    pub fn parse<R: Read>(reader: R) -> Result<Vec<CharityRecord>, CatalogLoadError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut records = Vec::new();
        for result in csv_reader.deserialize() {
            let record: CharityRecord = result?;
            records.push(record);
        }
        Ok(records)
    }

    /// Convert parsed records into a [`CharityCatalog`].
    ///
    /// # Errors
    ///
    /// * [`CatalogLoadError::InvalidCategory`] for an unrecognised category.
    /// * [`CatalogLoadError::Catalog`] if two records share a slug.
    pub fn load(records: Vec<CharityRecord>) -> Result<CharityCatalog, CatalogLoadError> {
        let charities = records
            .into_iter()
            .enumerate()
            .map(|(idx, record)| {
                let category = CharityCategory::parse(&record.category).ok_or_else(|| {
                    CatalogLoadError::InvalidCategory {
                        value: record.category.clone(),
                        row: idx + 1,
                    }
                })?;
                Ok(Charity {
                    slug_id: record.slug_id,
                    name: record.name,
                    category,
                    is_fund: record.is_fund,
                })
            })
            .collect::<Result<Vec<_>, CatalogLoadError>>()?;

        Ok(CharityCatalog::new(charities)?)
    }

    /// Parse and load in one step.
    pub fn from_reader<R: Read>(reader: R) -> Result<CharityCatalog, CatalogLoadError> {
        Self::load(Self::parse(reader)?)
    }

    /// Read a catalog from a CSV file on disk.
    pub fn from_path(path: &Path) -> Result<CharityCatalog, CatalogLoadError> {
        Self::from_reader(open(path)?)
    }
}

/// A single record from a referral sources CSV file (`value,label`).
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ReferralRecord {
    pub value: String,
    pub label: String,
}

/// Loader for the "how did you hear about us" options.
pub struct ReferralCatalogLoader;

impl ReferralCatalogLoader {
    pub fn parse<R: Read>(reader: R) -> Result<Vec<ReferralRecord>, CatalogLoadError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut records = Vec::new();
        for result in csv_reader.deserialize() {
            let record: ReferralRecord = result?;
            records.push(record);
        }
        Ok(records)
    }

    pub fn load(records: Vec<ReferralRecord>) -> Result<ReferralCatalog, CatalogLoadError> {
        let sources = records
            .into_iter()
            .map(|r| ReferralSource {
                value: r.value,
                label: r.label,
            })
            .collect();
        Ok(ReferralCatalog::new(sources)?)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<ReferralCatalog, CatalogLoadError> {
        Self::load(Self::parse(reader)?)
    }

    pub fn from_path(path: &Path) -> Result<ReferralCatalog, CatalogLoadError> {
        Self::from_reader(open(path)?)
    }
}
