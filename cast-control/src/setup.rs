//! Client for the receiver's local HTTP setup endpoint.

use std::time::Duration;

use serde_json::json;
use tracing::debug;

use crate::error::{ControlError, Result};

/// Port of the unauthenticated setup API.
pub const SETUP_PORT: u16 = 8008;

/// A minimal HTTP client for the `/setup` endpoints of a cast receiver
#[derive(Debug, Clone)]
pub struct SetupClient {
    agent: ureq::Agent,
    port: u16,
}

impl SetupClient {
    /// Create a setup client with the given request timeouts
    pub fn new(connect_timeout: Duration, read_timeout: Duration) -> Self {
        Self {
            agent: ureq::AgentBuilder::new()
                .timeout_connect(connect_timeout)
                .timeout_read(read_timeout)
                .build(),
            port: SETUP_PORT,
        }
    }

    /// Use a non-default setup port
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Ask the receiver at `ip` to reboot immediately
    pub fn reboot(&self, ip: &str) -> Result<()> {
        let url = self.url(ip, "setup/reboot");
        debug!("POST {}", url);

        let response = self
            .agent
            .post(&url)
            .send_json(json!({ "params": "now" }))
            .map_err(|e| ControlError::Network(e.to_string()))?;

        if response.status() != 200 {
            return Err(ControlError::Network(format!(
                "reboot failed: HTTP {}",
                response.status()
            )));
        }

        Ok(())
    }

    fn url(&self, ip: &str, path: &str) -> String {
        format!("http://{}:{}/{}", ip, self.port, path)
    }
}

impl Default for SetupClient {
    fn default() -> Self {
        Self::new(Duration::from_secs(5), Duration::from_secs(10))
    }
}
