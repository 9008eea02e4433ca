//! Error context helpers
//!
//! Lift foreign errors (`std::io`, figment, toml) into the domain error while
//! keeping the original error as the source.

use spi_domain::error::{Error, Result};
use std::fmt;

/// Attach a message to a foreign error and convert it into [`Error`]
///
/// ```ignore
/// use spi_infrastructure::error_ext::ErrorContext;
///
/// std::fs::write(&path, text).io_context("Failed to write config file")?;
/// ```
pub trait ErrorContext<T> {
    /// Wrap the error as [`Error::Io`]
    fn io_context<M: fmt::Display>(self, message: M) -> Result<T>;

    /// Wrap the error as [`Error::Configuration`]
    fn config_context<M: fmt::Display>(self, message: M) -> Result<T>;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn io_context<M: fmt::Display>(self, message: M) -> Result<T> {
        self.map_err(|source| Error::Io {
            message: format!("{message}: {source}"),
            source: Some(Box::new(source)),
        })
    }

    fn config_context<M: fmt::Display>(self, message: M) -> Result<T> {
        self.map_err(|source| Error::Configuration {
            message: format!("{message}: {source}"),
            source: Some(Box::new(source)),
        })
    }
}
