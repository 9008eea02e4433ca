//! In-memory resolution context

use std::collections::BTreeMap;
use std::io::{BufRead, Cursor};

use spi_application::{Located, RegistrySource, ResolutionContext};
use spi_domain::{RegistryKey, Result};

/// Named in-memory locations holding registry resources as text
///
/// Locations are searched in insertion order.
///
/// ```
/// use spi_infrastructure::InMemoryContext;
///
/// let context = InMemoryContext::new()
///     .with_resource("core", "META-INF/services/spi.facade.Logger", "spi.providers.NullLogger\n")
///     .with_resource("extra", "META-INF/services/spi.facade.Logger", "spi.providers.ConsoleLogger\n");
/// assert_eq!(context.location_names(), vec!["core", "extra"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryContext {
    locations: Vec<(String, BTreeMap<String, String>)>,
}

impl InMemoryContext {
    /// Create an empty context
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a resource, creating the location if needed
    pub fn insert(
        &mut self,
        location: impl Into<String>,
        path: impl Into<String>,
        content: impl Into<String>,
    ) {
        let location = location.into();
        let resources = match self.locations.iter().position(|(name, _)| *name == location) {
            Some(index) => &mut self.locations[index].1,
            None => {
                self.locations.push((location, BTreeMap::new()));
                let last = self.locations.len() - 1;
                &mut self.locations[last].1
            }
        };
        resources.insert(path.into(), content.into());
    }

    /// Builder form of [`InMemoryContext::insert`]
    pub fn with_resource(
        mut self,
        location: impl Into<String>,
        path: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        self.insert(location, path, content);
        self
    }

    /// Remove a resource; returns its previous content
    pub fn remove(&mut self, location: &str, path: &str) -> Option<String> {
        self.locations
            .iter_mut()
            .find(|(name, _)| name == location)
            .and_then(|(_, resources)| resources.remove(path))
    }

    /// Location names in search order
    pub fn location_names(&self) -> Vec<&str> {
        self.locations.iter().map(|(name, _)| name.as_str()).collect()
    }
}

impl ResolutionContext for InMemoryContext {
    fn describe(&self) -> String {
        format!("in-memory [{}]", self.location_names().join(", "))
    }

    fn locate(&self, key: &RegistryKey) -> Vec<Located<'_>> {
        let path = key.resource_path();
        self.locations
            .iter()
            .filter_map(|(name, resources)| {
                resources.get(&path).map(|content| {
                    let source: Box<dyn RegistrySource + '_> = Box::new(MemorySource {
                        location: format!("{name}/{path}"),
                        content,
                    });
                    Ok(source)
                })
            })
            .collect()
    }
}

struct MemorySource<'a> {
    location: String,
    content: &'a str,
}

impl RegistrySource for MemorySource<'_> {
    fn location(&self) -> &str {
        &self.location
    }

    fn open(&self) -> Result<Box<dyn BufRead + '_>> {
        Ok(Box::new(Cursor::new(self.content.as_bytes())))
    }
}
