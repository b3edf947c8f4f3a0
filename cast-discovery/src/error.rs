//! Error types for the discovery system.

use thiserror::Error;

/// Error type for discovery operations.
///
/// Represents the failure modes of a browse: the mDNS daemon could not be
/// started or driven, or a resolved service did not describe a usable cast device.
#[derive(Debug, Error)]
pub enum DiscoveryError {
    /// The mDNS daemon failed to start, browse or shut down
    #[error("mDNS error: {0}")]
    Mdns(String),

    /// A resolved service was missing required TXT records or addresses
    #[error("Invalid device: {0}")]
    InvalidDevice(String),
}

impl From<mdns_sd::Error> for DiscoveryError {
    fn from(error: mdns_sd::Error) -> Self {
        DiscoveryError::Mdns(error.to_string())
    }
}

/// Convenience Result type alias for discovery operations.
///
/// Equivalent to `std::result::Result<T, DiscoveryError>`.
pub type Result<T> = std::result::Result<T, DiscoveryError>;
