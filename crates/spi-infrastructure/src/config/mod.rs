//! Configuration
//!
//! Figment-layered configuration: defaults, then a TOML file, then
//! `SPI_`-prefixed environment variables.

pub mod loader;
pub mod types;

pub use loader::ConfigLoader;
pub use types::{AppConfig, DiscoveryConfig, LoggingConfig};
