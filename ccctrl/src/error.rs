//! Errors that end a `ccctrl` run.
//!
//! Every variant is reported the same way: `Error: <message>` on stdout and exit
//! status 1.

use cast_control::ControlError;
use cast_discovery::DiscoveryError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CtlError {
    /// Discovery finished without finding any receiver
    #[error("No Chromecast devices detected.")]
    NoDevicesDetected,

    /// None of the discovered devices carries one of the requested names
    #[error("No devices found matching {0:?}.")]
    NoNameMatch(Vec<String>),

    /// The cast-type include/ignore sets removed every device
    #[error("No devices found matching the specified criteria.")]
    NoCriteriaMatch,

    #[error("Volume must be between 0.0 and 1.0.")]
    VolumeOutOfRange(f64),

    /// More than one action flag was given
    #[error("Only one action may be given, got {}.", .0.join(", "))]
    ConflictingActions(Vec<&'static str>),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    Discovery(#[from] DiscoveryError),

    #[error(transparent)]
    Control(#[from] ControlError),

    #[error("Failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CtlError>;
