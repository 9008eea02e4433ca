//! Provider Registry System
//!
//! Link-time registration of provider types and bundled registry resources.
//! Uses the `linkme` crate so that every crate linked into the final binary
//! can contribute entries without the registry knowing about it.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    Provider Discovery Flow                       │
//! ├─────────────────────────────────────────────────────────────────┤
//! │                                                                 │
//! │  1. Provider defines:  #[linkme::distributed_slice(PROVIDER_TYPES)]
//! │                        static ENTRY: ProviderType = ...         │
//! │                              ↓                                  │
//! │  2. Registry resource: META-INF/services/<contract identity>    │
//! │                        lists provider type names, one per line  │
//! │                              ↓                                  │
//! │  3. ProviderRegistry:  name → TypeCatalog::resolve → factory    │
//! │                              ↓                                  │
//! │  4. Caller receives:   Vec<Box<dyn Contract>>                   │
//! │                                                                 │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Registering a Provider Type
//!
//! ```ignore
//! use spi_application::ports::registry::{default_factory, ProviderType, PROVIDER_TYPES};
//!
//! #[linkme::distributed_slice(PROVIDER_TYPES)]
//! static CONSOLE_LOGGER: ProviderType = ProviderType {
//!     name: "spi.providers.ConsoleLogger",
//!     description: "Writes log lines to stdout",
//!     factory: Some(default_factory::<ConsoleLogger>),
//!     implements: &[spi_application::implementation!(ConsoleLogger => dyn Logger)],
//! };
//! ```

pub mod provider_types;
pub mod resources;

pub use provider_types::{
    Implementation, PROVIDER_TYPES, ProviderFactory, ProviderObject, ProviderType, TypeCatalog,
    default_factory, list_provider_types,
};
pub use resources::{BUNDLED_RESOURCES, BundledResource, list_bundled_resources};
