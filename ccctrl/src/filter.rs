//! Device filtering and selection.
//!
//! Narrows the discovered devices by an optional name allow-list and by cast-type
//! include/ignore sets. Input order is preserved and an empty result at either phase
//! is its own error.

use tracing::debug;

use crate::device::CastTarget;
use crate::error::{CtlError, Result};

/// Criteria for selecting devices.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    /// Device names to keep; empty keeps every name
    pub names: Vec<String>,
    /// Cast types to keep; empty keeps every type not ignored
    pub include_types: Vec<String>,
    /// Cast types to drop; wins over `include_types`
    pub ignore_types: Vec<String>,
}

impl FilterCriteria {
    /// Whether a device of `cast_type` passes the type sets.
    pub fn accepts_type(&self, cast_type: &str) -> bool {
        !self.ignore_types.iter().any(|t| t == cast_type)
            && (self.include_types.is_empty() || self.include_types.iter().any(|t| t == cast_type))
    }
}

/// Keep the devices whose name is in `names`; an empty list keeps everything.
pub fn filter_by_name<D: CastTarget>(devices: Vec<D>, names: &[String]) -> Vec<D> {
    if names.is_empty() {
        return devices;
    }
    devices
        .into_iter()
        .filter(|device| names.iter().any(|n| n == device.name()))
        .collect()
}

/// Keep the devices whose cast type passes the include/ignore sets.
pub fn filter_by_type<D: CastTarget>(devices: Vec<D>, criteria: &FilterCriteria) -> Vec<D> {
    devices
        .into_iter()
        .filter(|device| criteria.accepts_type(device.cast_type().as_str()))
        .collect()
}

/// Run the full selection pipeline.
///
/// # Errors
///
/// * `NoDevicesDetected` - `devices` is empty
/// * `NoNameMatch` - a name allow-list was given and nothing matched it
/// * `NoCriteriaMatch` - the type sets removed every remaining device
pub fn select_devices<D: CastTarget>(devices: Vec<D>, criteria: &FilterCriteria) -> Result<Vec<D>> {
    if devices.is_empty() {
        return Err(CtlError::NoDevicesDetected);
    }

    let devices = filter_by_name(devices, &criteria.names);
    if devices.is_empty() {
        return Err(CtlError::NoNameMatch(criteria.names.clone()));
    }

    let devices = filter_by_type(devices, criteria);
    if devices.is_empty() {
        return Err(CtlError::NoCriteriaMatch);
    }

    debug!("{} device(s) selected", devices.len());
    Ok(devices)
}
