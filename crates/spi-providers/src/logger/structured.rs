//! Logger forwarding to `tracing`

use linkme::distributed_slice;
use spi_application::{PROVIDER_TYPES, ProviderType, default_factory, implementation};

use super::Logger;

/// Logger emitting `tracing` events under the `spi::logger` target
#[derive(Debug, Default, Clone)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn name(&self) -> &'static str {
        "tracing"
    }

    fn info(&self, message: &str) {
        tracing::info!(target: "spi::logger", "{}", message);
    }

    fn warn(&self, message: &str) {
        tracing::warn!(target: "spi::logger", "{}", message);
    }
}

#[distributed_slice(PROVIDER_TYPES)]
static TRACING_LOGGER: ProviderType = ProviderType {
    name: "spi.providers.TracingLogger",
    description: "Logger forwarding to tracing events",
    factory: Some(default_factory::<TracingLogger>),
    implements: &[implementation!(TracingLogger => dyn Logger)],
};
