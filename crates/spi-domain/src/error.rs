//! Error handling types

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for provider discovery
#[derive(Error, Debug)]
pub enum Error {
    /// A location of the resolution context could not be enumerated, or a
    /// registry resource could not be opened or read
    #[error("Resource resolution error at {location}: {message}")]
    ResourceResolution {
        /// Location (directory, bundle, in-memory name) that failed
        location: String,
        /// Description of the failure
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A registry line names a provider type that is not in the type catalog
    #[error("Unknown provider type: {name}")]
    TypeResolution {
        /// The provider type name as written in the registry resource
        name: String,
    },

    /// The resolved provider type does not implement the requested contract
    #[error("Provider type {name} does not implement contract {contract}")]
    IncompatibleProvider {
        /// The provider type name
        name: String,
        /// The contract identity that was requested
        contract: String,
    },

    /// The provider type has no zero-argument factory, or the factory failed
    #[error("Failed to instantiate provider {name}: {message}")]
    Instantiation {
        /// The provider type name
        name: String,
        /// Description of the failure
        message: String,
    },

    /// I/O operation error
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Invalid argument provided to a function
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Description of the invalid argument
        message: String,
    },

    /// Invalid or unreadable configuration
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Infrastructure operation error
    #[error("Infrastructure error: {message}")]
    Infrastructure {
        /// Description of the infrastructure error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

/// Classification of an [`Error`] for diagnostics and policy decisions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// See [`Error::ResourceResolution`]
    ResourceResolution,
    /// See [`Error::TypeResolution`]
    TypeResolution,
    /// See [`Error::IncompatibleProvider`]
    IncompatibleProvider,
    /// See [`Error::Instantiation`]
    Instantiation,
    /// I/O, configuration, argument and infrastructure errors
    Other,
}

// Discovery error creation methods
impl Error {
    /// Create a resource resolution error
    pub fn resource_resolution<L: Into<String>, S: Into<String>>(location: L, message: S) -> Self {
        Self::ResourceResolution {
            location: location.into(),
            message: message.into(),
            source: None,
        }
    }

    /// Create a resource resolution error with source
    pub fn resource_resolution_with_source<
        L: Into<String>,
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        location: L,
        message: S,
        source: E,
    ) -> Self {
        Self::ResourceResolution {
            location: location.into(),
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a type resolution error
    pub fn type_resolution<S: Into<String>>(name: S) -> Self {
        Self::TypeResolution { name: name.into() }
    }

    /// Create an incompatible provider error
    pub fn incompatible_provider<N: Into<String>, C: Into<String>>(name: N, contract: C) -> Self {
        Self::IncompatibleProvider {
            name: name.into(),
            contract: contract.into(),
        }
    }

    /// Create an instantiation error
    pub fn instantiation<N: Into<String>, S: Into<String>>(name: N, message: S) -> Self {
        Self::Instantiation {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Classify this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::ResourceResolution { .. } => ErrorKind::ResourceResolution,
            Self::TypeResolution { .. } => ErrorKind::TypeResolution,
            Self::IncompatibleProvider { .. } => ErrorKind::IncompatibleProvider,
            Self::Instantiation { .. } => ErrorKind::Instantiation,
            _ => ErrorKind::Other,
        }
    }
}

// Argument error creation methods
impl Error {
    /// Create an invalid argument error
    pub fn invalid_argument<S: Into<String>>(message: S) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }
}
