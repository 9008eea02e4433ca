//! Discovery results, diagnostics and fault policy

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use spi_domain::{Error, ErrorKind};

/// What discovery does after a fault
///
/// Incompatible entries are never faults: they are skipped under every
/// policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FaultPolicy {
    /// Skip the offending entry and keep reading. A read failure skips the
    /// rest of that resource.
    #[default]
    SkipEntry,
    /// Abandon the rest of the offending resource, continue with the next
    SkipResource,
    /// Stop discovery, keeping the providers found so far
    Abort,
}

impl FaultPolicy {
    /// Stable name used in configuration and on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SkipEntry => "skip-entry",
            Self::SkipResource => "skip-resource",
            Self::Abort => "abort",
        }
    }
}

impl fmt::Display for FaultPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FaultPolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "skip-entry" => Ok(Self::SkipEntry),
            "skip-resource" => Ok(Self::SkipResource),
            "abort" => Ok(Self::Abort),
            other => Err(Error::invalid_argument(format!(
                "Invalid fault policy: {other}. Use skip-entry, skip-resource, or abort"
            ))),
        }
    }
}

/// Something that went wrong (or was skipped) during discovery
#[derive(Debug)]
pub struct Diagnostic {
    /// Location of the registry resource, when one was involved
    pub source: Option<String>,
    /// 1-based line number within the resource
    pub line: Option<usize>,
    /// What happened
    pub error: Error,
}

impl Diagnostic {
    /// Diagnostic not tied to a resource
    pub fn new(error: Error) -> Self {
        Self {
            source: None,
            line: None,
            error,
        }
    }

    /// Diagnostic for a whole resource
    pub fn at_source(source: impl Into<String>, error: Error) -> Self {
        Self {
            source: Some(source.into()),
            line: None,
            error,
        }
    }

    /// Diagnostic for one line of a resource
    pub fn at_line(source: impl Into<String>, line: usize, error: Error) -> Self {
        Self {
            source: Some(source.into()),
            line: Some(line),
            error,
        }
    }

    /// Error classification
    pub fn kind(&self) -> ErrorKind {
        self.error.kind()
    }

    /// Whether this diagnostic reports a failure rather than a skipped entry
    pub fn is_fault(&self) -> bool {
        self.kind() != ErrorKind::IncompatibleProvider
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.source, self.line) {
            (Some(source), Some(line)) => write!(f, "{source}:{line}: {}", self.error),
            (Some(source), None) => write!(f, "{source}: {}", self.error),
            _ => write!(f, "{}", self.error),
        }
    }
}

/// Outcome of one discovery run
///
/// Providers are ordered by resource enumeration order, then line order.
/// Every provider satisfies the contract `C`.
pub struct DiscoveryResult<C: ?Sized> {
    pub(crate) providers: Vec<Box<C>>,
    pub(crate) diagnostics: Vec<Diagnostic>,
}

impl<C: ?Sized> DiscoveryResult<C> {
    pub(crate) fn empty() -> Self {
        Self {
            providers: Vec::new(),
            diagnostics: Vec::new(),
        }
    }

    /// Constructed providers
    pub fn providers(&self) -> &[Box<C>] {
        &self.providers
    }

    /// Everything recorded during the run, faults and skipped entries alike
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Diagnostics that report failures
    pub fn faults(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| d.is_fault())
    }

    /// Whether the run completed without faults
    pub fn is_clean(&self) -> bool {
        self.faults().next().is_none()
    }

    /// Number of providers
    pub fn len(&self) -> usize {
        self.providers.len()
    }

    /// Whether no provider was constructed
    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    /// Iterate over the providers
    pub fn iter(&self) -> std::slice::Iter<'_, Box<C>> {
        self.providers.iter()
    }

    /// Take ownership of the providers
    pub fn into_providers(self) -> Vec<Box<C>> {
        self.providers
    }
}

impl<C: ?Sized> Default for DiscoveryResult<C> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<C: ?Sized> fmt::Debug for DiscoveryResult<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DiscoveryResult")
            .field("providers", &self.providers.len())
            .field("diagnostics", &self.diagnostics)
            .finish()
    }
}

impl<'a, C: ?Sized> IntoIterator for &'a DiscoveryResult<C> {
    type Item = &'a Box<C>;
    type IntoIter = std::slice::Iter<'a, Box<C>>;

    fn into_iter(self) -> Self::IntoIter {
        self.providers.iter()
    }
}
