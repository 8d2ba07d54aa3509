use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using EvlogError
pub type Result<T> = std::result::Result<T, EvlogError>;

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that diagnostics, error hooks and
/// tests can match on without depending on message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    // Delivery
    DestinationIo,
    DestinationSerialization,
    DestinationRejected,
    DestinationPanicked,

    // Configuration
    Config,
    ConfigParse,
    Io,
}

impl ErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ErrorKind::DestinationIo => "ERR_DESTINATION_IO",
            ErrorKind::DestinationSerialization => "ERR_DESTINATION_SERIALIZATION",
            ErrorKind::DestinationRejected => "ERR_DESTINATION_REJECTED",
            ErrorKind::DestinationPanicked => "ERR_DESTINATION_PANICKED",
            ErrorKind::Config => "ERR_CONFIG",
            ErrorKind::ConfigParse => "ERR_CONFIG_PARSE",
            ErrorKind::Io => "ERR_IO",
        }
    }
}

/// Failure raised by a destination while delivering a single event
#[derive(Error, Debug)]
pub enum DestinationError {
    /// Writing to the underlying sink failed
    #[error("I/O failure: {0}")]
    Io(#[from] std::io::Error),

    /// The event could not be serialized
    #[error("Serialization failure: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The destination refused the event
    #[error("Event rejected: {reason}")]
    Rejected { reason: String },
}

impl DestinationError {
    pub fn rejected(reason: impl Into<String>) -> Self {
        DestinationError::Rejected {
            reason: reason.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            DestinationError::Io(_) => ErrorKind::DestinationIo,
            DestinationError::Serialization(_) => ErrorKind::DestinationSerialization,
            DestinationError::Rejected { .. } => ErrorKind::DestinationRejected,
        }
    }
}

/// Comprehensive error taxonomy for evlog operations
#[derive(Error, Debug)]
pub enum EvlogError {
    // ===== Delivery Errors =====
    /// A destination returned an error; delivery to other destinations continued
    #[error("Destination '{identifier}' failed: {source}")]
    Destination {
        identifier: String,
        #[source]
        source: DestinationError,
    },

    /// A destination panicked; the panic was contained
    #[error("Destination '{identifier}' panicked: {message}")]
    DestinationPanicked { identifier: String, message: String },

    // ===== Configuration Errors =====
    /// Configuration is structurally valid but semantically wrong
    #[error("Invalid configuration: {reason}")]
    Config { reason: String },

    /// Configuration text is not valid TOML for the schema
    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Configuration file could not be read
    #[error("Failed to read configuration from {}: {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl EvlogError {
    pub fn config(reason: impl Into<String>) -> Self {
        EvlogError::Config {
            reason: reason.into(),
        }
    }

    /// Get the error kind
    pub fn kind(&self) -> ErrorKind {
        match self {
            EvlogError::Destination { source, .. } => source.kind(),
            EvlogError::DestinationPanicked { .. } => ErrorKind::DestinationPanicked,
            EvlogError::Config { .. } => ErrorKind::Config,
            EvlogError::ConfigParse(_) => ErrorKind::ConfigParse,
            EvlogError::ConfigRead { .. } => ErrorKind::Io,
        }
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind().code()
    }

    /// Identifier of the destination involved, for delivery errors
    pub fn destination(&self) -> Option<&str> {
        match self {
            EvlogError::Destination { identifier, .. }
            | EvlogError::DestinationPanicked { identifier, .. } => Some(identifier),
            _ => None,
        }
    }
}
