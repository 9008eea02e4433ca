//! # Sample Providers
//!
//! A `Logger` contract and its implementations, registered at link time.
//!
//! Linking this crate contributes:
//! - provider types `spi.providers.TracingLogger`, `spi.providers.ConsoleLogger`
//!   and `spi.providers.NullLogger` to `PROVIDER_TYPES`
//! - the registry resource `META-INF/services/spi.facade.Logger` to
//!   `BUNDLED_RESOURCES`, listing the tracing and console loggers
//!
//! Binaries that only reach these types through discovery must still link
//! the crate, e.g. with `extern crate spi_providers;`.

pub mod logger;

pub use logger::{ConsoleLogger, Logger, NullLogger, TracingLogger};
