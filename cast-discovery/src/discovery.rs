//! Core discovery logic and iterator implementation.
//!
//! This module implements the discovery algorithm that:
//! 1. Browses `_googlecast._tcp.local.` for the configured window
//! 2. Deduplicates resolved services by their full instance name
//! 3. Reads the TXT records of each service into a device record
//! 4. Yields discovered devices as events

use std::collections::HashSet;
use std::time::Duration;

use tracing::debug;

use crate::device::device_from_properties;
use crate::error::Result;
use crate::mdns::{CastService, MdnsBrowser};
use crate::{DeviceEvent, SERVICE_TYPE};

/// Iterator that discovers cast devices on the local network.
///
/// The browse runs on the first call to `next()`; afterwards the buffered services are
/// converted one by one. Services that resolve twice, or whose TXT records do not
/// describe a usable device, are skipped.
///
/// # Examples
///
/// ```no_run
/// use cast_discovery::{get_iter, DeviceEvent};
///
/// for event in get_iter() {
///     match event {
///         DeviceEvent::Found(device) => {
///             println!("Found: {}", device.name);
///         }
///     }
/// }
/// ```
pub struct DiscoveryIterator {
    browser: Option<MdnsBrowser>,
    buffer: Vec<CastService>,
    buffer_index: usize,
    seen_services: HashSet<String>,
}

impl DiscoveryIterator {
    /// Create a new discovery iterator with the specified timeout
    pub fn new(timeout: Duration) -> Result<Self> {
        Ok(Self {
            browser: Some(MdnsBrowser::new(timeout)?),
            buffer: Vec::new(),
            buffer_index: 0,
            seen_services: HashSet::new(),
        })
    }

    /// Create an empty iterator that yields no results
    pub(crate) fn empty() -> Self {
        Self {
            browser: None,
            buffer: Vec::new(),
            buffer_index: 0,
            seen_services: HashSet::new(),
        }
    }

    /// Run the browse and buffer everything it resolved.
    fn fill_buffer(&mut self) -> Result<()> {
        if let Some(browser) = self.browser.take() {
            self.buffer = browser.browse(SERVICE_TYPE)?;
            debug!("mDNS browse resolved {} service(s)", self.buffer.len());
        }
        Ok(())
    }

    /// Like `Iterator::next`, but surfaces a failed browse instead of ending quietly.
    pub(crate) fn try_next(&mut self) -> Result<Option<DeviceEvent>> {
        if self.browser.is_some() {
            self.fill_buffer()?;
        }

        while self.buffer_index < self.buffer.len() {
            let service = &self.buffer[self.buffer_index];
            self.buffer_index += 1;

            if !self.seen_services.insert(service.fullname.clone()) {
                continue;
            }

            let ip_address = match service.primary_address() {
                Some(ip) => ip.to_string(),
                None => {
                    debug!("skipping {}: no address", service.fullname);
                    continue;
                }
            };

            match device_from_properties(&service.properties, ip_address, service.port) {
                Ok(device) => return Ok(Some(DeviceEvent::Found(device))),
                Err(e) => debug!("skipping {}: {}", service.fullname, e),
            }
        }

        Ok(None)
    }
}

impl Iterator for DiscoveryIterator {
    type Item = DeviceEvent;

    fn next(&mut self) -> Option<Self::Item> {
        match self.try_next() {
            Ok(event) => event,
            Err(e) => {
                debug!("discovery aborted: {}", e);
                None
            }
        }
    }
}
