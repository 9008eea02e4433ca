//! Unit tests for domain value objects

use spi_domain::constants::DEFAULT_REGISTRY_ROOT;
use spi_domain::{ContractId, ProviderName, RegistryKey};
use std::path::PathBuf;

#[test]
fn test_contract_id_accepts_qualified_names() {
    for identity in ["spi.facade.Logger", "Logger", "my_crate::Codec", "a-b.c"] {
        assert!(ContractId::new(identity).is_ok(), "{identity} should be valid");
    }
}

#[test]
fn test_contract_id_rejects_path_like_names() {
    for identity in ["", ".", "..", "a/b", "a\\b", "with space", "tab\there"] {
        assert!(ContractId::new(identity).is_err(), "{identity:?} should be rejected");
    }
}

#[test]
fn test_contract_id_serde() {
    let id: ContractId = serde_json::from_str("\"spi.facade.Logger\"").unwrap();
    assert_eq!(id.as_str(), "spi.facade.Logger");
    assert!(serde_json::from_str::<ContractId>("\"a/b\"").is_err());
}

#[test]
fn test_registry_key_default_root() {
    let key = RegistryKey::with_default_root(ContractId::new("spi.facade.Logger").unwrap());
    assert_eq!(key.root(), DEFAULT_REGISTRY_ROOT);
    assert_eq!(key.resource_path(), "META-INF/services/spi.facade.Logger");
    assert_eq!(
        key.relative_path(),
        PathBuf::from("META-INF")
            .join("services")
            .join("spi.facade.Logger")
    );
}

#[test]
fn test_registry_key_custom_root_strips_trailing_separator() {
    let contract = ContractId::new("Codec").unwrap();
    let key = RegistryKey::new("plugins/registry/", contract).unwrap();
    assert_eq!(key.resource_path(), "plugins/registry/Codec");
    assert_eq!(key.to_string(), "plugins/registry/Codec");
}

#[test]
fn test_registry_key_rejects_bad_roots() {
    let contract = ContractId::new("Codec").unwrap();
    for root in ["", "   ", "/abs", "a//b", "../up"] {
        assert!(
            RegistryKey::new(root, contract.clone()).is_err(),
            "{root:?} should be rejected"
        );
    }
}

#[test]
fn test_provider_name_parse_line() {
    assert_eq!(
        ProviderName::parse_line("spi.providers.ConsoleLogger")
            .unwrap()
            .as_str(),
        "spi.providers.ConsoleLogger"
    );
    assert_eq!(
        ProviderName::parse_line("\t spi.providers.NullLogger \r")
            .unwrap()
            .as_str(),
        "spi.providers.NullLogger"
    );
    assert!(ProviderName::parse_line("").is_none());
    assert!(ProviderName::parse_line(" \t ").is_none());
}

#[test]
fn test_provider_name_keeps_hash_prefixed_lines() {
    let name = ProviderName::parse_line("# not a comment").unwrap();
    assert_eq!(name.as_str(), "# not a comment");
}
