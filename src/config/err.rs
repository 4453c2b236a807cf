//! Errors that can occur during configuration.
use thiserror::Error;

/// A configuration error.
#[derive(Debug, Error)]
pub enum Error {
    /// We couldn't read the config file.
    #[error("couldn't read config: {0}")]
    Io(#[from] std::io::Error),

    /// We couldn't deserialise the config from TOML.
    #[error("couldn't parse config: {0}")]
    Deserialize(#[from] toml::de::Error),

    /// We couldn't serialise the config to TOML.
    #[error("couldn't dump config: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// We couldn't build the exam the config describes.
    #[error("couldn't build exam from config")]
    Exam(#[from] crate::err::Error),
}

/// Results over [Error].
pub type Result<T> = std::result::Result<T, Error>;
