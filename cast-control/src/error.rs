//! Error types for the control client

use thiserror::Error;

/// Errors that can occur while talking to a cast receiver
#[derive(Debug, Error)]
pub enum ControlError {
    /// Opening or using the CASTV2 session failed
    #[error("Cast session error: {0}")]
    Session(String),

    /// The local HTTP setup endpoint could not be reached or refused the request
    #[error("Network/HTTP error: {0}")]
    Network(String),

    /// The receiver answered without a volume level
    #[error("Device did not report a volume level")]
    NoStatus,

    /// A volume level outside [0.0, 1.0] was requested
    #[error("Invalid volume level: {0}")]
    InvalidLevel(f64),
}

/// Type alias for results that can return a ControlError
pub type Result<T> = std::result::Result<T, ControlError>;
