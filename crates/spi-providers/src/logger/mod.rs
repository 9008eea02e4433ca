//! Logger contract
//!
//! The facade a caller logs through without knowing which backend was
//! installed. Implementations are found through discovery.

use linkme::distributed_slice;
use spi_application::{BUNDLED_RESOURCES, BundledResource, Contract};

pub mod console;
pub mod null;
pub mod structured;

pub use console::ConsoleLogger;
pub use null::NullLogger;
pub use structured::TracingLogger;

/// Logging facade
pub trait Logger {
    /// Short backend name
    fn name(&self) -> &'static str;

    /// Log an informational message
    fn info(&self, message: &str);

    /// Log a warning
    fn warn(&self, message: &str);
}

impl Contract for dyn Logger {
    const IDENTITY: &'static str = "spi.facade.Logger";
}

#[distributed_slice(BUNDLED_RESOURCES)]
static LOGGER_REGISTRY: BundledResource = BundledResource {
    package: env!("CARGO_PKG_NAME"),
    path: "META-INF/services/spi.facade.Logger",
    content: include_str!("../../META-INF/services/spi.facade.Logger"),
};
