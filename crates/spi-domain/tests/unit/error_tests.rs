//! Unit tests for domain error types

use spi_domain::{Error, ErrorKind};

#[test]
fn test_type_resolution_error() {
    let error = Error::type_resolution("com.example.Missing");
    match &error {
        Error::TypeResolution { name } => assert_eq!(name, "com.example.Missing"),
        _ => panic!("Expected TypeResolution error"),
    }
    assert_eq!(error.kind(), ErrorKind::TypeResolution);
    assert!(error.to_string().contains("com.example.Missing"));
}

#[test]
fn test_incompatible_provider_error() {
    let error = Error::incompatible_provider("spi.providers.Clock", "spi.facade.Logger");
    match &error {
        Error::IncompatibleProvider { name, contract } => {
            assert_eq!(name, "spi.providers.Clock");
            assert_eq!(contract, "spi.facade.Logger");
        }
        _ => panic!("Expected IncompatibleProvider error"),
    }
    assert_eq!(error.kind(), ErrorKind::IncompatibleProvider);
}

#[test]
fn test_instantiation_error() {
    let error = Error::instantiation("spi.providers.Abstract", "no zero-argument factory");
    assert_eq!(error.kind(), ErrorKind::Instantiation);
    let display_str = error.to_string();
    assert!(display_str.contains("spi.providers.Abstract"));
    assert!(display_str.contains("no zero-argument factory"));
}

#[test]
fn test_resource_resolution_error_keeps_source() {
    let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
    let error = Error::resource_resolution_with_source("/opt/plugins", "cannot open", io);
    assert_eq!(error.kind(), ErrorKind::ResourceResolution);
    assert!(std::error::Error::source(&error).is_some());
    assert!(error.to_string().contains("/opt/plugins"));
}

#[test]
fn test_invalid_argument_is_not_a_discovery_kind() {
    let error = Error::invalid_argument("Registry root cannot be empty");
    match &error {
        Error::InvalidArgument { message } => assert_eq!(message, "Registry root cannot be empty"),
        _ => panic!("Expected InvalidArgument error"),
    }
    assert_eq!(error.kind(), ErrorKind::Other);
}
