//! Loads catalog fixtures from disk and builds forms over them.

use std::path::{Path, PathBuf};

use donation_core::{AllocationType, CatalogError, FormState};
use donation_data::{CatalogLoadError, CharityCatalogLoader};
use pretty_assertions::assert_eq;
use rust_decimal_macros::dec;

fn test_data(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("test-data")
        .join(name)
}

#[test]
fn test_load_small_catalog_from_disk() {
    let catalog = CharityCatalogLoader::from_path(&test_data("charities_small.csv"))
        .expect("fixture should load");

    let slugs: Vec<&str> = catalog.slugs().collect();
    assert_eq!(slugs, vec!["amf", "top-fund", "sci"]);
}

#[test]
fn test_form_keys_match_loaded_catalog() {
    let catalog = CharityCatalogLoader::from_path(&test_data("charities_small.csv")).unwrap();

    let mut form = FormState::new(&catalog);
    form.set_allocation_type(AllocationType::Specific);

    let keys: Vec<&str> = form.specific_allocations().keys().map(String::as_str).collect();
    assert_eq!(keys.len(), 3);
    assert!(form.set_charity_allocation("sci", dec!(5)).is_ok());
    assert!(form.set_charity_allocation("gd", dec!(5)).is_err());
}

#[test]
fn test_bad_category_fixture_fails_on_second_row() {
    let result = CharityCatalogLoader::from_path(&test_data("charities_bad_category.csv"));

    match result {
        Err(CatalogLoadError::InvalidCategory { value, row }) => {
            assert_eq!(value, "featured");
            assert_eq!(row, 2);
        }
        other => panic!("expected InvalidCategory, got {other:?}"),
    }
}

#[test]
fn test_duplicate_fixture_is_rejected() {
    let result = CharityCatalogLoader::from_path(&test_data("charities_duplicate.csv"));

    match result {
        Err(CatalogLoadError::Catalog(CatalogError::DuplicateCharity(slug))) => {
            assert_eq!(slug, "amf");
        }
        other => panic!("expected DuplicateCharity, got {other:?}"),
    }
}
