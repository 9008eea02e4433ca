//! Configuration types

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Arc;

use spi_application::{Contract, FaultPolicy, ProviderRegistry, ResolutionContext};
use spi_domain::constants::DEFAULT_REGISTRY_ROOT;

use crate::constants::DEFAULT_LOG_LEVEL;
use crate::resolution::{BundledResources, ChainedContext, LoadPath};

/// Main application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Provider discovery configuration
    #[serde(default)]
    pub discovery: DiscoveryConfig,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Enable JSON output format
    pub json_format: bool,

    /// Log to a daily-rolling file in addition to stderr
    pub file_output: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
            json_format: false,
            file_output: None,
        }
    }
}

/// Provider discovery configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiscoveryConfig {
    /// Directory under each location that holds registry resources
    pub registry_root: String,

    /// Directories searched for registry resources, in order
    pub load_path: Vec<PathBuf>,

    /// Also search resources bundled into the binary (after the load path)
    pub include_bundled: bool,

    /// What to do when an entry or resource cannot be loaded
    pub fault_policy: FaultPolicy,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            registry_root: DEFAULT_REGISTRY_ROOT.to_string(),
            load_path: Vec::new(),
            include_bundled: true,
            fault_policy: FaultPolicy::default(),
        }
    }
}

impl DiscoveryConfig {
    /// Resolution context described by this configuration
    ///
    /// The load path comes first, then bundled resources when enabled.
    pub fn build_context(&self) -> Arc<dyn ResolutionContext> {
        let mut chain = ChainedContext::new();
        if !self.load_path.is_empty() {
            chain = chain.with(Arc::new(LoadPath::new(self.load_path.iter().cloned())));
        }
        if self.include_bundled {
            chain = chain.with(Arc::new(BundledResources::linked()));
        }
        Arc::new(chain)
    }

    /// Provider registry for contract `C` configured from this section
    pub fn registry<C: Contract + ?Sized>(&self) -> ProviderRegistry<C> {
        ProviderRegistry::create(self.build_context())
            .with_registry_root(self.registry_root.clone())
            .with_fault_policy(self.fault_policy)
    }
}
