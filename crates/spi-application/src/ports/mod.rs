//! Port definitions
//!
//! | Port | Description |
//! |------|-------------|
//! | [`Contract`] | Discoverable capability, implemented for `dyn Trait` |
//! | [`ResolutionContext`] | Locations searched for registry resources |
//! | [`RegistrySource`] | One registry resource found in a location |
//! | [`registry`] | Link-time provider type and bundled resource registries |

pub mod contract;
pub mod registry;
pub mod resolution;

pub use contract::Contract;
pub use registry::{
    BUNDLED_RESOURCES, BundledResource, Implementation, PROVIDER_TYPES, ProviderFactory,
    ProviderObject, ProviderType, TypeCatalog, default_factory, list_bundled_resources,
    list_provider_types,
};
pub use resolution::{Located, RegistrySource, ResolutionContext};
