//! The device seam between the control pipeline and the cast collaborator.
//!
//! [`CastTarget`] is what the filter stage needs, [`CastControl`] is what actions
//! invoke. [`Chromecast`] implements both on top of a discovered record, opening the
//! CASTV2 session on first use.

use std::fmt;

use cast_control::{CastSession, ControlConfig, SetupClient, VolumeStatus};
use cast_discovery::{CastType, Device};
use tracing::debug;

use crate::error::Result;

/// Identity and classification of a device
pub trait CastTarget {
    fn name(&self) -> &str;
    fn cast_type(&self) -> CastType;
}

/// Operations an action can perform on a device
pub trait CastControl: CastTarget + fmt::Display {
    /// Current volume; `None` when the device reports none
    fn status(&mut self) -> Result<Option<VolumeStatus>>;
    fn set_volume(&mut self, level: f64) -> Result<()>;
    fn set_muted(&mut self, muted: bool) -> Result<()>;
    fn reboot(&mut self) -> Result<()>;
    fn volume_up(&mut self) -> Result<()>;
    fn volume_down(&mut self) -> Result<()>;
}

impl CastTarget for Device {
    fn name(&self) -> &str {
        &self.name
    }

    fn cast_type(&self) -> CastType {
        self.cast_type
    }
}

/// A discovered receiver plus its control clients
pub struct Chromecast {
    info: Device,
    config: ControlConfig,
    setup: SetupClient,
    session: Option<CastSession>,
}

impl Chromecast {
    pub fn new(info: Device, config: ControlConfig) -> Self {
        let setup = config.setup_client();
        Self {
            info,
            config,
            setup,
            session: None,
        }
    }

    fn session(&mut self) -> Result<&mut CastSession> {
        let session = match self.session.take() {
            Some(session) => session,
            None => CastSession::connect(&self.info.ip_address, self.info.port)?,
        };
        debug!("using cast session to {}", session.host());
        Ok(self.session.insert(session))
    }
}

impl CastTarget for Chromecast {
    fn name(&self) -> &str {
        &self.info.name
    }

    fn cast_type(&self) -> CastType {
        self.info.cast_type
    }
}

impl CastControl for Chromecast {
    fn status(&mut self) -> Result<Option<VolumeStatus>> {
        Ok(self.session()?.status()?)
    }

    fn set_volume(&mut self, level: f64) -> Result<()> {
        Ok(self.session()?.set_volume(level)?)
    }

    fn set_muted(&mut self, muted: bool) -> Result<()> {
        Ok(self.session()?.set_muted(muted)?)
    }

    fn reboot(&mut self) -> Result<()> {
        Ok(self.setup.reboot(&self.info.ip_address)?)
    }

    fn volume_up(&mut self) -> Result<()> {
        let step = self.config.volume_step;
        Ok(self.session()?.step_volume(step)?)
    }

    fn volume_down(&mut self) -> Result<()> {
        let step = self.config.volume_step;
        Ok(self.session()?.step_volume(-step)?)
    }
}

impl fmt::Display for Chromecast {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.info, f)
    }
}
