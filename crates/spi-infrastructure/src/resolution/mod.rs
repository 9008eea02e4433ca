//! Resolution contexts
//!
//! Implementations of [`spi_application::ResolutionContext`]:
//!
//! | Context | Locations searched |
//! |---------|--------------------|
//! | [`LoadPath`] | Directories on disk, `<dir>/<registry-root>/<contract>` |
//! | [`InMemoryContext`] | Named in-memory locations, for tests and embedding |
//! | [`BundledResources`] | Resources compiled into the binary via `linkme` |
//! | [`ChainedContext`] | Several contexts searched one after another |

pub mod bundled;
pub mod chained;
pub mod in_memory;
pub mod load_path;

pub use bundled::BundledResources;
pub use chained::ChainedContext;
pub use in_memory::InMemoryContext;
pub use load_path::LoadPath;
