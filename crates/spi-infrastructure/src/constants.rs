//! Infrastructure layer constants
//!
//! Registry format constants live in `spi_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "spi.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "spi";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "SPI";

/// Separator for nested keys in environment variables (`SPI_LOGGING__LEVEL`)
pub const CONFIG_ENV_NESTING_SEPARATOR: &str = "__";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable overriding the log filter
pub const LOG_FILTER_ENV: &str = "SPI_LOG";

/// Default file name stem for rolling log files
pub const DEFAULT_LOG_FILE_STEM: &str = "spi";
