//! Application Layer - SPI
//!
//! Turns a contract into the list of provider instances registered for it.
//!
//! ## Ports
//!
//! - [`ports::Contract`]: marks a trait object type as discoverable and names
//!   its registry resource
//! - [`ports::ResolutionContext`]: the set of locations searched for registry
//!   resources, passed explicitly to every registry
//! - [`ports::registry`]: link-time registries of provider types and bundled
//!   registry resources
//!
//! ## Use Cases
//!
//! - [`use_cases::ProviderRegistry`]: `create` → `discover` → `providers`
//!
//! ## Dependencies
//!
//! This crate depends only on `spi-domain` plus `linkme` and `tracing`.
//! Concrete resolution contexts live in `spi-infrastructure`.

pub mod ports;
pub mod use_cases;

pub use ports::*;
pub use use_cases::*;
