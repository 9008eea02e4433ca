//! Use cases
//!
//! | Use case | Description |
//! |----------|-------------|
//! | [`ProviderRegistry`] | Discover and instantiate the providers of one contract |
//! | [`DiscoveryResult`] | Providers plus the diagnostics of one discovery run |

pub mod diagnostics;
pub mod provider_registry;

pub use diagnostics::{Diagnostic, DiscoveryResult, FaultPolicy};
pub use provider_registry::{ProviderRegistry, RegistryState};
