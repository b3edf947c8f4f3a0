//! Control client for Google Cast receivers
//!
//! Volume and mute go through a CASTV2 session (`rust_cast`); reboot goes through the
//! receiver's local HTTP setup endpoint (`ureq`).

mod error;
mod session;
mod setup;

pub use error::{ControlError, Result};
pub use session::{CastSession, RECEIVER_DESTINATION};
pub use setup::{SetupClient, SETUP_PORT};

use std::time::Duration;

use rust_cast::channels::receiver::Volume;

/// Amount `volume up` / `volume down` move the level by.
pub const DEFAULT_VOLUME_STEP: f64 = 0.1;

/// Volume state reported by a receiver
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VolumeStatus {
    /// Level in `0.0..=1.0`
    pub level: f64,
    pub muted: bool,
}

impl VolumeStatus {
    /// Convert the receiver's volume message; `None` when no level was reported.
    pub fn from_volume(volume: &Volume) -> Option<Self> {
        volume.level.map(|level| Self {
            level: f64::from(level),
            muted: volume.muted.unwrap_or(false),
        })
    }
}

/// Tunables for talking to receivers
///
/// The timeouts apply to the HTTP setup endpoint only; the CASTV2 session opened by
/// [`CastSession::connect`] has no connect or read timeout of its own.
#[derive(Debug, Clone)]
pub struct ControlConfig {
    pub connect_timeout: Duration,
    pub read_timeout: Duration,
    pub volume_step: f64,
}

impl Default for ControlConfig {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(5),
            read_timeout: Duration::from_secs(10),
            volume_step: DEFAULT_VOLUME_STEP,
        }
    }
}

impl ControlConfig {
    /// Setup-endpoint client honouring these timeouts
    pub fn setup_client(&self) -> SetupClient {
        SetupClient::new(self.connect_timeout, self.read_timeout)
    }
}

/// `current + delta`, clamped to `0.0..=1.0`.
pub fn stepped_level(current: f64, delta: f64) -> f64 {
    (current + delta).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0.5, 0.1, 0.6)]
    #[case(0.95, 0.1, 1.0)]
    #[case(0.05, -0.1, 0.0)]
    #[case(1.0, 0.1, 1.0)]
    #[case(0.0, -0.1, 0.0)]
    fn test_stepped_level(#[case] current: f64, #[case] delta: f64, #[case] expected: f64) {
        assert!((stepped_level(current, delta) - expected).abs() < 1e-9);
    }

    #[test]
    fn test_volume_status_from_volume() {
        let status = VolumeStatus::from_volume(&Volume {
            level: Some(0.5),
            muted: Some(true),
        })
        .unwrap();
        assert_eq!(status.level, 0.5);
        assert!(status.muted);
    }

    #[test]
    fn test_volume_status_missing_muted_defaults_to_unmuted() {
        let status = VolumeStatus::from_volume(&Volume {
            level: Some(0.25),
            muted: None,
        })
        .unwrap();
        assert!(!status.muted);
    }

    #[test]
    fn test_volume_status_without_level() {
        let status = VolumeStatus::from_volume(&Volume {
            level: None,
            muted: Some(false),
        });
        assert!(status.is_none());
    }

    #[test]
    fn test_control_config_default() {
        let config = ControlConfig::default();
        assert_eq!(config.volume_step, DEFAULT_VOLUME_STEP);
        assert_eq!(config.connect_timeout, Duration::from_secs(5));
    }
}
