//! Discovery driven by configuration: load path plus bundled resources

use std::path::PathBuf;

use spi_application::{FaultPolicy, list_bundled_resources};
use spi_infrastructure::config::DiscoveryConfig;

use crate::fixtures::{Greeter, Location, greetings};

#[test]
fn test_bundled_resources_are_linked() {
    assert!(
        list_bundled_resources()
            .iter()
            .any(|(package, path)| *package == "it-fixtures"
                && *path == "META-INF/services/it.spi.Greeter")
    );
}

#[test]
fn test_default_config_discovers_bundled_providers() {
    let config = DiscoveryConfig::default();
    let mut registry = config.registry::<dyn Greeter>();

    registry.discover();
    assert_eq!(greetings(registry.providers()), vec!["Ahoy, Ada"]);
}

#[test]
fn test_load_path_comes_before_bundled_resources() {
    let location = Location::new();
    location.write_services("it.spi.Greeter", "it.spi.French\n");
    let config = DiscoveryConfig {
        load_path: vec![location.path().to_path_buf()],
        ..DiscoveryConfig::default()
    };
    let mut registry = config.registry::<dyn Greeter>();

    registry.discover();
    assert_eq!(
        greetings(registry.providers()),
        vec!["Bonjour, Ada", "Ahoy, Ada"]
    );
}

#[test]
fn test_bundled_resources_can_be_disabled() {
    let config = DiscoveryConfig {
        include_bundled: false,
        load_path: vec![PathBuf::from("/nonexistent/spi/load/path")],
        ..DiscoveryConfig::default()
    };
    let mut registry = config.registry::<dyn Greeter>();

    let result = registry.discover();
    assert!(result.is_empty());
    assert!(result.is_clean());
}

#[test]
fn test_configured_policy_and_root_are_applied() {
    let location = Location::new();
    location.write("custom", "it.spi.Greeter", "it.spi.Nope\nit.spi.English\n");
    let config = DiscoveryConfig {
        registry_root: "custom".to_string(),
        load_path: vec![location.path().to_path_buf()],
        include_bundled: false,
        fault_policy: FaultPolicy::Abort,
    };
    let mut registry = config.registry::<dyn Greeter>();
    assert_eq!(registry.fault_policy(), FaultPolicy::Abort);

    let result = registry.discover();
    assert!(result.is_empty());
    assert_eq!(result.faults().count(), 1);
}
