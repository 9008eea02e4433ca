//! # SPI
//!
//! Service provider discovery: given a contract, find and instantiate every
//! provider registered for it in registry resources on the load path.
//!
//! ## Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use spi::application::ProviderRegistry;
//! use spi::infrastructure::LoadPath;
//! use spi::providers::Logger;
//!
//! let context = Arc::new(LoadPath::new(["/opt/app/plugins"]));
//! let mut registry = ProviderRegistry::<dyn Logger>::create(context);
//! registry.discover();
//! if let Some(logger) = registry.providers().first() {
//!     logger.info("found a logger");
//! }
//! ```
//!
//! ## Architecture
//!
//! - `domain` - error taxonomy and value objects
//! - `application` - `Contract`, `ResolutionContext`, type catalog, `ProviderRegistry`
//! - `infrastructure` - load path, bundled and in-memory contexts, config, logging
//! - `providers` - the sample `Logger` contract and its providers
//! - `cli` - the `spi` command line

/// Domain layer - error taxonomy and value objects
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use spi_domain::*;
}

/// Application layer - contracts, type catalog and the provider registry
///
/// Re-exports from the application crate for convenience
pub mod application {
    pub use spi_application::*;
}

/// Infrastructure layer - resolution contexts, config and logging
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use spi_infrastructure::*;
}

/// Sample providers - the `Logger` contract
///
/// Re-exports from the providers crate for convenience
pub mod providers {
    pub use spi_providers::*;
}

pub mod cli;

pub use spi_application::{
    Contract, Diagnostic, DiscoveryResult, FaultPolicy, ProviderRegistry, ResolutionContext,
};
pub use spi_domain::{Error, Result};
