//! Bundled Registry Resources
//!
//! Registry resources that crates ship inside the binary, the equivalent of
//! a registry file packaged with a component. Crates contribute them with
//! `#[linkme::distributed_slice(BUNDLED_RESOURCES)]`, usually pairing the
//! path with `include_str!` of a hand-authored file.

/// A registry resource compiled into the binary
#[derive(Debug)]
pub struct BundledResource {
    /// Contributing package, reported as the resource location
    pub package: &'static str,
    /// Resource path with `/` separators, e.g. `META-INF/services/spi.facade.Logger`
    pub path: &'static str,
    /// Resource text
    pub content: &'static str,
}

#[linkme::distributed_slice]
pub static BUNDLED_RESOURCES: [BundledResource] = [..];

/// List all bundled registry resources as `(package, path)` tuples
pub fn list_bundled_resources() -> Vec<(&'static str, &'static str)> {
    BUNDLED_RESOURCES
        .iter()
        .map(|resource| (resource.package, resource.path))
        .collect()
}
