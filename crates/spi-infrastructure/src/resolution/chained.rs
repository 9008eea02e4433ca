//! Chained resolution context

use std::sync::Arc;

use spi_application::{Located, ResolutionContext};
use spi_domain::RegistryKey;

/// Searches several contexts one after another, merging what they find
#[derive(Clone, Default)]
pub struct ChainedContext {
    contexts: Vec<Arc<dyn ResolutionContext>>,
}

impl ChainedContext {
    /// Create an empty chain
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a context to the chain
    pub fn with(mut self, context: Arc<dyn ResolutionContext>) -> Self {
        self.contexts.push(context);
        self
    }

    /// Number of chained contexts
    pub fn len(&self) -> usize {
        self.contexts.len()
    }

    /// Whether the chain is empty
    pub fn is_empty(&self) -> bool {
        self.contexts.is_empty()
    }
}

impl ResolutionContext for ChainedContext {
    fn describe(&self) -> String {
        let parts: Vec<String> = self.contexts.iter().map(|c| c.describe()).collect();
        format!("chain [{}]", parts.join(" → "))
    }

    fn locate(&self, key: &RegistryKey) -> Vec<Located<'_>> {
        self.contexts
            .iter()
            .flat_map(|context| context.locate(key))
            .collect()
    }
}

impl std::fmt::Debug for ChainedContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.describe())
    }
}
