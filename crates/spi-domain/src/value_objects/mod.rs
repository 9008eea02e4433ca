//! Domain Value Objects
//!
//! Immutable value objects describing what is being discovered and where
//! registry resources are addressed.
//!
//! | Value Object | Description |
//! |--------------|-------------|
//! | [`ContractId`] | Unique identity of a contract, used as resource file name |
//! | [`RegistryKey`] | Relative resource path `<registry-root>/<contract identity>` |
//! | [`ProviderName`] | A provider type name read from one registry line |

/// Contract identity value objects
pub mod contract;
/// Provider entry value objects
pub mod provider;
/// Registry resource addressing
pub mod registry;

pub use contract::ContractId;
pub use provider::ProviderName;
pub use registry::RegistryKey;
