//! Resources compiled into the binary
//!
//! Crates contribute registry resources to
//! [`spi_application::BUNDLED_RESOURCES`]; this context exposes them. The
//! contributing package name is reported as the location.

use std::io::{BufRead, Cursor};

use spi_application::{
    BUNDLED_RESOURCES, BundledResource, Located, RegistrySource, ResolutionContext,
};
use spi_domain::{RegistryKey, Result};

/// Registry resources bundled into the binary at link time
#[derive(Debug, Clone, Default)]
pub struct BundledResources {
    resources: Vec<&'static BundledResource>,
}

impl BundledResources {
    /// Every resource linked into the binary
    pub fn linked() -> Self {
        Self::from_resources(BUNDLED_RESOURCES.iter())
    }

    /// An explicit set of resources
    pub fn from_resources(resources: impl IntoIterator<Item = &'static BundledResource>) -> Self {
        Self {
            resources: resources.into_iter().collect(),
        }
    }

    /// Number of bundled resources
    pub fn len(&self) -> usize {
        self.resources.len()
    }

    /// Whether no resource is bundled
    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }
}

impl ResolutionContext for BundledResources {
    fn describe(&self) -> String {
        format!("bundled ({} resources)", self.resources.len())
    }

    fn locate(&self, key: &RegistryKey) -> Vec<Located<'_>> {
        let path = key.resource_path();
        self.resources
            .iter()
            .copied()
            .filter(|resource| resource.path == path)
            .map(|resource| {
                let source: Box<dyn RegistrySource + '_> = Box::new(BundledSource {
                    location: format!("{}:{}", resource.package, resource.path),
                    resource,
                });
                Ok(source)
            })
            .collect()
    }
}

struct BundledSource {
    location: String,
    resource: &'static BundledResource,
}

impl RegistrySource for BundledSource {
    fn location(&self) -> &str {
        &self.location
    }

    fn open(&self) -> Result<Box<dyn BufRead + '_>> {
        Ok(Box::new(Cursor::new(self.resource.content.as_bytes())))
    }
}
