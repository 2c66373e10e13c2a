//! Error types for interstyle-core
//!
//! The event handlers themselves never fail: a detached style, an empty
//! callback slot or a pick miss all degrade to "do nothing". Errors only
//! come from the setup surface:
//! - Loading a style configuration
//! - Registering a callback id on a slot the style does not have

use std::path::PathBuf;
use thiserror::Error;

use crate::event::EventKind;

/// Main error type for interstyle operations
#[derive(Error, Debug)]
pub enum InterstyleError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The style has no callback slot for this event kind
    #[error("{style} has no {kind} callback slot")]
    UnsupportedEvent {
        style: &'static str,
        kind: EventKind,
    },
}

/// Errors related to style configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("Failed to read style config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config text is not valid
    #[error("Invalid style config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Result type alias for interstyle operations
pub type InterstyleResult<T> = Result<T, InterstyleError>;

/// Result type alias for configuration loading
pub type ConfigResult<T> = Result<T, ConfigError>;
