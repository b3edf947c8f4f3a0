//! Chromecast device discovery library
//!
//! This crate provides a simple API for discovering Google Cast receivers on a local
//! network. Browsing is delegated to the `mdns-sd` daemon; this crate only reads the
//! TXT records each receiver publishes and classifies it.
//!
//! # Quick Start
//!
//! ```no_run
//! use cast_discovery::get;
//!
//! // Discover all cast devices on the network
//! let devices = get();
//! for device in devices {
//!     println!("Found {} ({}) at {}", device.name, device.cast_type, device.ip_address);
//! }
//! ```
//!
//! # Iterator-based Discovery
//!
//! ```no_run
//! use cast_discovery::{get_iter, DeviceEvent};
//!
//! for event in get_iter() {
//!     match event {
//!         DeviceEvent::Found(device) => println!("Found: {}", device.name),
//!     }
//! }
//! ```

mod error;
mod mdns;
pub mod device;
mod discovery;

pub use device::CastType;
pub use discovery::DiscoveryIterator;
pub use error::{DiscoveryError, Result};

use std::time::Duration;

/// mDNS service type advertised by Google Cast receivers.
pub const SERVICE_TYPE: &str = "_googlecast._tcp.local.";

/// Default browse window.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Longest browse window; larger timeouts are cut down to this.
pub const MAX_TIMEOUT: Duration = Duration::from_secs(3600);

/// Information about a discovered cast receiver.
#[derive(Debug, Clone, PartialEq)]
pub struct Device {
    /// Receiver UUID as published in the `id` TXT record
    pub id: String,
    /// Friendly name of the device
    pub name: String,
    /// Model name (e.g., "Chromecast", "Google Cast Group")
    pub model_name: String,
    /// Receiver category derived from the model and capabilities
    pub cast_type: CastType,
    /// IP address of the device
    pub ip_address: String,
    /// CASTV2 port (8009 for single receivers, dynamic for groups)
    pub port: u16,
    /// Raw `ca` capability bitmask, when published
    pub capabilities: Option<u32>,
}

/// Events emitted during device discovery.
#[derive(Debug, Clone)]
pub enum DeviceEvent {
    /// A cast receiver was found on the network
    Found(Device),
}

/// Discover all cast devices with the default 5-second window.
///
/// Failures to start the mDNS daemon yield an empty list; use
/// [`try_get_with_timeout`] to observe them.
pub fn get() -> Vec<Device> {
    get_with_timeout(DEFAULT_TIMEOUT)
}

/// Discover all cast devices on the local network with a custom window.
///
/// # Examples
///
/// ```no_run
/// use cast_discovery::get_with_timeout;
/// use std::time::Duration;
///
/// let devices = get_with_timeout(Duration::from_secs(2));
/// println!("{} device(s)", devices.len());
/// ```
pub fn get_with_timeout(timeout: Duration) -> Vec<Device> {
    get_iter_with_timeout(timeout)
        .map(|event| match event {
            DeviceEvent::Found(device) => device,
        })
        .collect()
}

/// Discover all cast devices, propagating daemon failures.
///
/// # Errors
///
/// Returns `DiscoveryError::Mdns` if the daemon cannot be started or the browse fails.
pub fn try_get_with_timeout(timeout: Duration) -> Result<Vec<Device>> {
    let mut iter = DiscoveryIterator::new(timeout)?;
    let mut devices = Vec::new();
    while let Some(DeviceEvent::Found(device)) = iter.try_next()? {
        devices.push(device);
    }
    Ok(devices)
}

/// Get an iterator for discovering cast devices with the default window.
pub fn get_iter() -> DiscoveryIterator {
    get_iter_with_timeout(DEFAULT_TIMEOUT)
}

/// Get an iterator for discovering cast devices with a custom window.
///
/// If the daemon cannot be started the iterator is empty.
pub fn get_iter_with_timeout(timeout: Duration) -> DiscoveryIterator {
    DiscoveryIterator::new(timeout).unwrap_or_else(|e| {
        tracing::warn!("Failed to start discovery: {}", e);
        DiscoveryIterator::empty()
    })
}
