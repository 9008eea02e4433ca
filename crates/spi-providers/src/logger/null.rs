//! Null logger

use linkme::distributed_slice;
use spi_application::{PROVIDER_TYPES, ProviderType, default_factory, implementation};

use super::Logger;

/// Logger that discards everything
#[derive(Debug, Default, Clone)]
pub struct NullLogger;

impl Logger for NullLogger {
    fn name(&self) -> &'static str {
        "null"
    }

    fn info(&self, _message: &str) {}

    fn warn(&self, _message: &str) {}
}

#[distributed_slice(PROVIDER_TYPES)]
static NULL_LOGGER: ProviderType = ProviderType {
    name: "spi.providers.NullLogger",
    description: "Logger that discards every message",
    factory: Some(default_factory::<NullLogger>),
    implements: &[implementation!(NullLogger => dyn Logger)],
};
