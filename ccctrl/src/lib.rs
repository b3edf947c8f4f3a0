//! Discover Chromecast devices and apply simple control actions to a filtered subset.
//!
//! The pipeline is discover → [`filter`] → [`action`] builder → [`runner`]. Discovery
//! and device control are provided by `cast_discovery` and `cast_control`; everything
//! here is generic over [`device::CastControl`] so it runs against any device.

pub mod action;
pub mod cli;
pub mod device;
pub mod error;
pub mod filter;
pub mod runner;

use std::io::Write;

pub use action::{build_actions, Action, ActionFlags};
pub use cli::{Args, Config};
pub use device::{CastControl, CastTarget, Chromecast};
pub use error::{CtlError, Result};
pub use filter::{select_devices, FilterCriteria};

/// Filter `discovered`, build the actions and run them, writing to `out`.
///
/// No device is contacted before both the selection and the actions are known to be
/// valid.
pub fn run<D, W>(config: &Config, discovered: Vec<D>, out: &mut W) -> Result<()>
where
    D: CastControl,
    W: Write,
{
    let mut devices = select_devices(discovered, &config.criteria)?;
    let actions = build_actions(&config.actions)?;
    runner::run_actions(&mut devices, &actions, config.verbose, out)
}
