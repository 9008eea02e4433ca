//! Tests for the linked provider type catalog

use spi_application::{TypeCatalog, list_provider_types};

use crate::test_support::{Clock, Codec};

#[test]
fn test_linked_catalog_contains_registered_types() {
    let catalog = TypeCatalog::linked();
    assert!(catalog.resolve("test.spi.Gzip").is_some());
    assert!(catalog.resolve("test.spi.SystemClock").is_some());
    assert!(catalog.resolve("test.spi.Missing").is_none());
}

#[test]
fn test_implementors_of_contract() {
    let catalog = TypeCatalog::linked();
    let mut codecs: Vec<_> = catalog
        .implementors_of::<dyn Codec>()
        .iter()
        .map(|provider_type| provider_type.name)
        .collect();
    codecs.sort_unstable();
    assert_eq!(
        codecs,
        vec![
            "test.spi.AbstractCodec",
            "test.spi.BrokenCodec",
            "test.spi.Brotli",
            "test.spi.Gzip",
            "test.spi.Zstd",
        ]
    );

    let clocks = catalog.implementors_of::<dyn Clock>();
    assert_eq!(clocks.len(), 1);
    assert_eq!(clocks[0].contracts().collect::<Vec<_>>(), vec!["test.spi.Clock"]);
}

#[test]
fn test_list_provider_types_has_descriptions() {
    let types = list_provider_types();
    assert!(!types.is_empty());
    for (name, description) in &types {
        assert!(!name.is_empty(), "Provider type name should not be empty");
        assert!(
            !description.is_empty(),
            "Provider type '{}' should have a description",
            name
        );
    }
}
