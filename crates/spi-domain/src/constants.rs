//! Domain layer constants
//!
//! Conventions of the registry resource format. Infrastructure-specific
//! constants (config file names, env prefixes) live in
//! `spi_infrastructure::constants`.

/// Directory under every load-path location that holds registry resources
pub const DEFAULT_REGISTRY_ROOT: &str = "META-INF/services";

/// Separator between the registry root and the contract identity
pub const REGISTRY_PATH_SEPARATOR: char = '/';
