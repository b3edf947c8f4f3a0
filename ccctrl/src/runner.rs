//! Applies actions to the selected devices.

use std::io::Write;

use tracing::debug;

use crate::action::Action;
use crate::device::CastControl;
use crate::error::Result;

/// Run every action against every device, in order.
///
/// With no actions, each device's representation is printed instead. The first
/// failing action aborts the run.
pub fn run_actions<D, W>(devices: &mut [D], actions: &[Action], verbose: bool, out: &mut W) -> Result<()>
where
    D: CastControl,
    W: Write,
{
    for device in devices.iter_mut() {
        if actions.is_empty() {
            writeln!(out, "{}", device)?;
            continue;
        }

        writeln!(out, "Device: {}.", device.name())?;
        for action in actions {
            if verbose {
                writeln!(out, "Running {}.", action)?;
            }
            debug!(device = device.name(), %action, "running action");
            action.run(device, out)?;
        }
    }
    Ok(())
}
