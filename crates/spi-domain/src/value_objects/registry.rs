//! Registry resource addressing

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

use crate::constants::{DEFAULT_REGISTRY_ROOT, REGISTRY_PATH_SEPARATOR};
use crate::error::{Error, Result};
use crate::value_objects::ContractId;

/// Relative path of the registry resources for one contract
///
/// Built as `<registry-root>/<contract identity>`. The same key is looked up
/// in every location of a resolution context.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RegistryKey {
    root: String,
    contract: ContractId,
}

impl RegistryKey {
    /// Build a key under a custom registry root
    ///
    /// The root must be a non-empty relative path; leading and trailing
    /// separators are rejected and stripped respectively.
    pub fn new(root: &str, contract: ContractId) -> Result<Self> {
        let root = root.trim().trim_end_matches(REGISTRY_PATH_SEPARATOR);
        if root.is_empty() {
            return Err(Error::invalid_argument("Registry root cannot be empty"));
        }
        if root.starts_with(REGISTRY_PATH_SEPARATOR) || root.starts_with('\\') {
            return Err(Error::invalid_argument(format!(
                "Registry root '{root}' must be a relative path"
            )));
        }
        if root
            .split(REGISTRY_PATH_SEPARATOR)
            .any(|segment| segment.is_empty() || segment == "..")
        {
            return Err(Error::invalid_argument(format!(
                "Registry root '{root}' contains an empty or parent segment"
            )));
        }
        Ok(Self {
            root: root.to_string(),
            contract,
        })
    }

    /// Build a key under [`DEFAULT_REGISTRY_ROOT`]
    pub fn with_default_root(contract: ContractId) -> Self {
        Self {
            root: DEFAULT_REGISTRY_ROOT.to_string(),
            contract,
        }
    }

    /// Registry root directory
    pub fn root(&self) -> &str {
        &self.root
    }

    /// Contract the key addresses
    pub fn contract(&self) -> &ContractId {
        &self.contract
    }

    /// Resource path with `/` separators, e.g. `META-INF/services/spi.facade.Logger`
    pub fn resource_path(&self) -> String {
        format!(
            "{}{}{}",
            self.root,
            REGISTRY_PATH_SEPARATOR,
            self.contract.as_str()
        )
    }

    /// Resource path as a platform path relative to a load-path location
    pub fn relative_path(&self) -> PathBuf {
        let mut path: PathBuf = self.root.split(REGISTRY_PATH_SEPARATOR).collect();
        path.push(self.contract.as_str());
        path
    }
}

impl fmt::Display for RegistryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.resource_path())
    }
}
