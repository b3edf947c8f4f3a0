//! Actions and the action builder.

use std::fmt;
use std::io::Write;

use tracing::info;

use crate::device::CastControl;
use crate::error::{CtlError, Result};

/// Action selection as parsed from the command line.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActionFlags {
    pub set_volume: Option<f64>,
    pub show: bool,
    pub mute: bool,
    pub unmute: bool,
    pub reboot: bool,
    pub volume_up: bool,
    pub volume_down: bool,
}

impl ActionFlags {
    /// Long flag names of every selected action, in builder order.
    pub fn selected(&self) -> Vec<&'static str> {
        [
            (self.set_volume.is_some(), "--set-volume"),
            (self.show, "--show"),
            (self.mute, "--mute"),
            (self.unmute, "--unmute"),
            (self.reboot, "--reboot"),
            (self.volume_up, "--volume-up"),
            (self.volume_down, "--volume-down"),
        ]
        .into_iter()
        .filter_map(|(set, flag)| set.then_some(flag))
        .collect()
    }
}

/// A single operation applied to one device. Stateless; one value serves every device
/// in a run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    SetVolume(f64),
    ShowStatus,
    SetMuted(bool),
    Reboot,
    VolumeUp,
    VolumeDown,
}

impl Action {
    /// Apply this action to `device`, writing any report to `out`.
    pub fn run<D, W>(&self, device: &mut D, out: &mut W) -> Result<()>
    where
        D: CastControl + ?Sized,
        W: Write,
    {
        match *self {
            Action::ShowStatus => match device.status()? {
                Some(status) => writeln!(
                    out,
                    "Volume={} ({})\n",
                    format_level(status.level),
                    if status.muted { "muted" } else { "unmuted" }
                )?,
                None => writeln!(out, "No device status available.")?,
            },
            Action::SetVolume(level) => device.set_volume(level)?,
            Action::SetMuted(muted) => device.set_muted(muted)?,
            Action::Reboot => device.reboot()?,
            Action::VolumeUp => device.volume_up()?,
            Action::VolumeDown => device.volume_down()?,
        }
        Ok(())
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::SetVolume(level) => write!(f, "SetVolume({})", format_level(*level)),
            other => write!(f, "{:?}", other),
        }
    }
}

/// Level rounded to two decimals, always with a fractional digit (`0.5`, `1.0`).
pub fn format_level(level: f64) -> String {
    let rounded = (level * 100.0).round() / 100.0;
    if rounded.fract() == 0.0 {
        format!("{:.1}", rounded)
    } else {
        format!("{}", rounded)
    }
}

/// Translate the selected flags into actions.
///
/// Order is fixed: set-volume, show, mute, unmute, reboot, volume-up, volume-down.
/// Selections combine additively; exclusivity is the command line's concern.
///
/// # Errors
///
/// `VolumeOutOfRange` when the requested level is outside `0.0..=1.0` (or NaN).
pub fn build_actions(flags: &ActionFlags) -> Result<Vec<Action>> {
    let mut actions = Vec::new();

    if let Some(level) = flags.set_volume {
        if !(0.0..=1.0).contains(&level) {
            return Err(CtlError::VolumeOutOfRange(level));
        }
        actions.push(Action::SetVolume(level));
    }
    if flags.show {
        actions.push(Action::ShowStatus);
    }
    if flags.mute {
        actions.push(Action::SetMuted(true));
    }
    if flags.unmute {
        actions.push(Action::SetMuted(false));
    }
    if flags.reboot {
        actions.push(Action::Reboot);
    }
    if flags.volume_up {
        actions.push(Action::VolumeUp);
    }
    if flags.volume_down {
        actions.push(Action::VolumeDown);
    }

    info!("built {} action(s)", actions.len());
    Ok(actions)
}
