//! Thin wrapper over the `mdns-sd` service daemon.
//!
//! Browses for the Google Cast service type for a bounded window and hands back the
//! resolved services as plain data. Not part of the public API.

use std::collections::HashMap;
use std::net::IpAddr;
use std::time::{Duration, Instant};

use mdns_sd::{ServiceDaemon, ServiceEvent};
use tracing::{debug, warn};

use crate::error::Result;
use crate::MAX_TIMEOUT;

/// A resolved `_googlecast._tcp` service, detached from the daemon's types.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct CastService {
    pub fullname: String,
    pub addresses: Vec<IpAddr>,
    pub port: u16,
    pub properties: HashMap<String, String>,
}

impl CastService {
    /// Preferred address for the control connection; IPv4 first.
    pub fn primary_address(&self) -> Option<IpAddr> {
        self.addresses
            .iter()
            .find(|ip| ip.is_ipv4())
            .or_else(|| self.addresses.first())
            .copied()
    }
}

/// mDNS browser bound to a single daemon instance.
pub(crate) struct MdnsBrowser {
    daemon: ServiceDaemon,
    timeout: Duration,
}

impl MdnsBrowser {
    /// Start the daemon. Fails when no multicast socket can be opened.
    pub fn new(timeout: Duration) -> Result<Self> {
        let daemon = ServiceDaemon::new()?;
        Ok(Self { daemon, timeout })
    }

    /// Browse `service_type` until the timeout elapses and return every service resolved.
    pub fn browse(&self, service_type: &str) -> Result<Vec<CastService>> {
        let receiver = self.daemon.browse(service_type)?;
        let deadline = browse_deadline(Instant::now(), self.timeout);
        let mut resolved = Vec::new();

        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() {
                break;
            }

            match receiver.recv_timeout(remaining) {
                Ok(ServiceEvent::ServiceResolved(info)) => {
                    debug!(fullname = info.get_fullname(), "resolved cast service");
                    let properties = info
                        .get_properties()
                        .iter()
                        .map(|p| (p.key().to_string(), p.val_str().to_string()))
                        .collect();
                    let mut addresses: Vec<IpAddr> =
                        info.get_addresses().iter().copied().collect();
                    addresses.sort();

                    resolved.push(CastService {
                        fullname: info.get_fullname().to_string(),
                        addresses,
                        port: info.get_port(),
                        properties,
                    });
                }
                Ok(other) => debug!(?other, "ignoring mDNS event"),
                Err(_) => break,
            }
        }

        if let Err(e) = self.daemon.stop_browse(service_type) {
            debug!("stop_browse failed: {}", e);
        }

        Ok(resolved)
    }
}

/// End of a browse window starting at `start`, capped at [`MAX_TIMEOUT`].
///
/// Falls back to `start` when the instant is not representable.
fn browse_deadline(start: Instant, timeout: Duration) -> Instant {
    start.checked_add(timeout.min(MAX_TIMEOUT)).unwrap_or(start)
}

impl Drop for MdnsBrowser {
    fn drop(&mut self) {
        if let Err(e) = self.daemon.shutdown() {
            warn!("Failed to shut down mDNS daemon: {}", e);
        }
    }
}
