//! Contract identity

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{Error, Result};

/// Unique identity of a contract
///
/// The identity doubles as the file name of the registry resource, so it
/// must be a single non-empty path segment without whitespace.
///
/// # Example
///
/// ```
/// use spi_domain::ContractId;
///
/// let id = ContractId::new("spi.facade.Logger").unwrap();
/// assert_eq!(id.as_str(), "spi.facade.Logger");
/// assert!(ContractId::new("../etc/passwd").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ContractId(String);

impl ContractId {
    /// Validate and wrap a contract identity
    pub fn new(identity: impl Into<String>) -> Result<Self> {
        let identity = identity.into();
        if identity.is_empty() {
            return Err(Error::invalid_argument("Contract identity cannot be empty"));
        }
        if identity == "." || identity == ".." {
            return Err(Error::invalid_argument(format!(
                "Contract identity '{identity}' is not a valid resource name"
            )));
        }
        if let Some(bad) = identity
            .chars()
            .find(|c| c.is_whitespace() || *c == '/' || *c == '\\')
        {
            return Err(Error::invalid_argument(format!(
                "Contract identity '{identity}' contains invalid character {bad:?}"
            )));
        }
        Ok(Self(identity))
    }

    /// Borrow the identity string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContractId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for ContractId {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl From<ContractId> for String {
    fn from(value: ContractId) -> Self {
        value.0
    }
}

impl AsRef<str> for ContractId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
