//! Resolution context port
//!
//! A resolution context is the load-path equivalent: an ordered set of
//! locations, each of which may hold a registry resource for a given key.
//! Contexts are read-only from the registry's point of view.

use std::io::BufRead;

use spi_domain::{RegistryKey, Result};

/// Outcome of probing one location for a registry resource
///
/// `Err` means the location itself could not be enumerated; the other
/// locations are still reported.
pub type Located<'a> = Result<Box<dyn RegistrySource + 'a>>;

/// Set of locations searched for registry resources
pub trait ResolutionContext: Send + Sync {
    /// Short human-readable description used in logs
    fn describe(&self) -> String;

    /// Every registry resource reachable under `key`, in location order
    ///
    /// Locations without a matching resource contribute nothing. Finding no
    /// resource at all is not an error.
    fn locate(&self, key: &RegistryKey) -> Vec<Located<'_>>;
}

/// A registry resource found in one location
pub trait RegistrySource {
    /// Where the resource lives (file path, bundle name, ...)
    fn location(&self) -> &str;

    /// Open the resource for reading
    ///
    /// Every call must observe the current content; implementations must
    /// not hand out cached copies. The reader is dropped as soon as its
    /// lines are consumed.
    fn open(&self) -> Result<Box<dyn BufRead + '_>>;
}
