//! CASTV2 receiver session.
//!
//! The framing, TLS and heartbeat handling belong to `rust_cast`; this module only
//! opens the virtual connection to the platform receiver and maps volume requests.

use rust_cast::channels::receiver::Volume;
use rust_cast::CastDevice;
use tracing::debug;

use crate::error::{ControlError, Result};
use crate::{stepped_level, VolumeStatus};

/// Destination id of the platform receiver on every cast device.
pub const RECEIVER_DESTINATION: &str = "receiver-0";

/// An open control session with one receiver
pub struct CastSession {
    device: CastDevice<'static>,
    host: String,
}

impl CastSession {
    /// Connect to the receiver at `host:port` and open the receiver channel.
    ///
    /// Receivers present self-signed certificates, so host verification is skipped.
    pub fn connect(host: &str, port: u16) -> Result<Self> {
        debug!("opening cast session to {}:{}", host, port);
        let device = CastDevice::connect_without_host_verification(host.to_string(), port)
            .map_err(|e| ControlError::Session(format!("connect to {}:{}: {}", host, port, e)))?;

        device
            .connection
            .connect(RECEIVER_DESTINATION)
            .map_err(|e| ControlError::Session(e.to_string()))?;

        Ok(Self {
            device,
            host: host.to_string(),
        })
    }

    /// Host this session is connected to
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Current volume of the receiver, or `None` if it reported no level
    pub fn status(&self) -> Result<Option<VolumeStatus>> {
        let status = self
            .device
            .receiver
            .get_status()
            .map_err(|e| ControlError::Session(e.to_string()))?;

        Ok(VolumeStatus::from_volume(&status.volume))
    }

    /// Set the volume level, `0.0..=1.0`
    pub fn set_volume(&self, level: f64) -> Result<()> {
        if !(0.0..=1.0).contains(&level) {
            return Err(ControlError::InvalidLevel(level));
        }
        self.send_volume(Volume {
            level: Some(level as f32),
            muted: None,
        })
    }

    /// Mute or unmute without touching the level
    pub fn set_muted(&self, muted: bool) -> Result<()> {
        self.send_volume(Volume {
            level: None,
            muted: Some(muted),
        })
    }

    /// Move the level by `delta`, clamped to the valid range
    pub fn step_volume(&self, delta: f64) -> Result<()> {
        let current = self.status()?.ok_or(ControlError::NoStatus)?;
        self.set_volume(stepped_level(current.level, delta))
    }

    fn send_volume(&self, volume: Volume) -> Result<()> {
        debug!(host = %self.host, level = ?volume.level, muted = ?volume.muted, "setting volume");
        self.device
            .receiver
            .set_volume(volume)
            .map_err(|e| ControlError::Session(e.to_string()))?;
        Ok(())
    }
}
