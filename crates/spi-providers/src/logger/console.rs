//! Console logger
//!
//! Writes `[LEVEL] message` lines to stdout.

use linkme::distributed_slice;
use spi_application::{PROVIDER_TYPES, ProviderType, default_factory, implementation};

use super::Logger;

/// Logger printing to stdout
#[derive(Debug, Default, Clone)]
pub struct ConsoleLogger;

impl ConsoleLogger {
    fn format(level: &str, message: &str) -> String {
        format!("[{level}] {message}")
    }
}

impl Logger for ConsoleLogger {
    fn name(&self) -> &'static str {
        "console"
    }

    fn info(&self, message: &str) {
        println!("{}", Self::format("INFO", message));
    }

    fn warn(&self, message: &str) {
        println!("{}", Self::format("WARN", message));
    }
}

#[distributed_slice(PROVIDER_TYPES)]
static CONSOLE_LOGGER: ProviderType = ProviderType {
    name: "spi.providers.ConsoleLogger",
    description: "Logger printing [LEVEL] lines to stdout",
    factory: Some(default_factory::<ConsoleLogger>),
    implements: &[implementation!(ConsoleLogger => dyn Logger)],
};
