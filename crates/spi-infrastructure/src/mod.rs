//! # Infrastructure Layer
//!
//! Concrete resolution contexts and the cross-cutting concerns around
//! discovery.
//!
//! ### Resolution
//! | Module | Description |
//! |--------|-------------|
//! | [`resolution`] | Load path on disk, in-memory, bundled and chained contexts |
//!
//! ### Configuration & Observability
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Figment-layered TOML + environment configuration |
//! | [`logging`] | Structured logging with tracing |
//! | [`constants`] | Centralized configuration constants |
//! | [`error_ext`] | Context helpers converting foreign errors |

pub mod config;
pub mod constants;
pub mod error_ext;
pub mod logging;
pub mod resolution;

// Re-export commonly used types
pub use config::{AppConfig, ConfigLoader, DiscoveryConfig, LoggingConfig};
pub use error_ext::ErrorContext;
pub use resolution::{BundledResources, ChainedContext, InMemoryContext, LoadPath};
