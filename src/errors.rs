//! Error hierarchy for the client wiring layer.
//!
//! Errors are layered by concern: configuration loading and validation,
//! cluster node address parsing, and client construction. Everything
//! surfaces through the single top-level [`Error`], so a failed
//! initialization aborts in one place.

use config::ConfigError;

#[doc(hidden)]
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Configuration loading or deserialization failures
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Configuration validation failures
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Malformed cluster node addresses
    #[error(transparent)]
    Address(#[from] AddressError),

    /// Client construction failures, preserving the underlying cause
    #[error("Failed to create search client: {source}")]
    ClientCreation {
        #[source]
        source: Box<Error>,
    },

    /// A client handle is already present in the registry
    #[error("A search client is already registered")]
    AlreadyRegistered,
}

impl Error {
    /// Wraps a construction-path failure into a single creation error.
    pub(crate) fn creation(source: Error) -> Self {
        Error::ClientCreation {
            source: Box::new(source),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AddressError {
    /// Address lacks the mandatory port
    #[error("Missing port in cluster node address '{0}'")]
    MissingPort(String),

    /// Port segment is not a valid u16
    #[error("Invalid port '{port}' in cluster node address '{address}'")]
    InvalidPort { address: String, port: String },

    /// Host segment is empty
    #[error("Empty host in cluster node address '{0}'")]
    EmptyHost(String),

    /// Blank entry inside a comma-separated node list
    #[error("Empty entry in cluster node list '{0}'")]
    EmptyEntry(String),

    /// A `[` opened an IPv6 literal that never closes
    #[error("Unclosed '[' in cluster node address '{0}'")]
    UnclosedBracket(String),
}
