//! Provider entry value objects

use serde::{Deserialize, Serialize};
use std::fmt;

/// A provider type name as written on one line of a registry resource
///
/// Lines are trimmed; blank lines carry no entry. There is no comment
/// syntax and no quoting, so anything else on the line is the name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProviderName(String);

impl ProviderName {
    /// Parse one registry line, returning `None` for blank lines
    ///
    /// ```
    /// use spi_domain::ProviderName;
    ///
    /// assert_eq!(
    ///     ProviderName::parse_line("  spi.providers.ConsoleLogger\r").unwrap().as_str(),
    ///     "spi.providers.ConsoleLogger"
    /// );
    /// assert!(ProviderName::parse_line("   ").is_none());
    /// ```
    pub fn parse_line(line: &str) -> Option<Self> {
        let name = line.trim();
        if name.is_empty() {
            None
        } else {
            Some(Self(name.to_string()))
        }
    }

    /// Borrow the provider type name
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProviderName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ProviderName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
