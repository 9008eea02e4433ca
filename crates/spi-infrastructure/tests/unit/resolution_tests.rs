//! Resolution context tests

use std::sync::Arc;

use spi_application::{BundledResource, ResolutionContext};
use spi_domain::{ContractId, RegistryKey};
use spi_infrastructure::{BundledResources, ChainedContext, InMemoryContext};

fn key(identity: &str) -> RegistryKey {
    RegistryKey::with_default_root(ContractId::new(identity).unwrap())
}

fn read_all(context: &dyn ResolutionContext, identity: &str) -> Vec<(String, String)> {
    context
        .locate(&key(identity))
        .into_iter()
        .map(|located| {
            let source = located.unwrap();
            let mut text = String::new();
            std::io::Read::read_to_string(&mut source.open().unwrap(), &mut text).unwrap();
            (source.location().to_string(), text)
        })
        .collect()
}

static ALPHA: BundledResource = BundledResource {
    package: "alpha",
    path: "META-INF/services/test.Codec",
    content: "alpha.Codec\n",
};

static BETA: BundledResource = BundledResource {
    package: "beta",
    path: "META-INF/services/test.Other",
    content: "beta.Other\n",
};

#[test]
fn test_in_memory_locations_in_insertion_order() {
    let context = InMemoryContext::new()
        .with_resource("b", "META-INF/services/test.Codec", "b.Codec\n")
        .with_resource("a", "META-INF/services/test.Codec", "a.Codec\n")
        .with_resource("a", "META-INF/services/test.Other", "a.Other\n");

    assert_eq!(
        read_all(&context, "test.Codec"),
        vec![
            (
                "b/META-INF/services/test.Codec".to_string(),
                "b.Codec\n".to_string()
            ),
            (
                "a/META-INF/services/test.Codec".to_string(),
                "a.Codec\n".to_string()
            ),
        ]
    );
    assert!(read_all(&context, "test.Missing").is_empty());
}

#[test]
fn test_in_memory_remove_and_replace() {
    let mut context = InMemoryContext::new();
    context.insert("a", "META-INF/services/test.Codec", "old\n");
    context.insert("a", "META-INF/services/test.Codec", "new\n");
    assert_eq!(read_all(&context, "test.Codec")[0].1, "new\n");

    assert_eq!(
        context.remove("a", "META-INF/services/test.Codec").as_deref(),
        Some("new\n")
    );
    assert!(read_all(&context, "test.Codec").is_empty());
}

#[test]
fn test_bundled_resources_match_by_path() {
    let bundled = BundledResources::from_resources([&ALPHA, &BETA]);
    assert_eq!(bundled.len(), 2);

    let found = read_all(&bundled, "test.Codec");
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].0, "alpha:META-INF/services/test.Codec");
    assert_eq!(found[0].1, "alpha.Codec\n");
}

#[test]
fn test_chained_context_concatenates_in_order() {
    let memory = InMemoryContext::new().with_resource(
        "mem",
        "META-INF/services/test.Codec",
        "mem.Codec\n",
    );
    let chain = ChainedContext::new()
        .with(Arc::new(memory))
        .with(Arc::new(BundledResources::from_resources([&ALPHA])));

    let locations: Vec<String> = read_all(&chain, "test.Codec")
        .into_iter()
        .map(|(location, _)| location)
        .collect();
    assert_eq!(
        locations,
        vec![
            "mem/META-INF/services/test.Codec".to_string(),
            "alpha:META-INF/services/test.Codec".to_string()
        ]
    );
    assert_eq!(chain.len(), 2);
}
