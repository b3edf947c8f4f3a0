//! Cast device records and classification.
//!
//! This module turns the TXT records published by a Google Cast receiver into a
//! [`Device`] and decides which [`CastType`] the receiver belongs to.

use std::collections::HashMap;
use std::fmt;

use crate::error::{DiscoveryError, Result};
use crate::Device;

/// Capability bit: the receiver drives a display.
pub const CAPABILITY_VIDEO_OUT: u32 = 1 << 0;
/// Capability bit: the receiver plays audio.
pub const CAPABILITY_AUDIO_OUT: u32 = 1 << 2;
/// Capability bit: the receiver is a multizone group.
pub const CAPABILITY_MULTIZONE_GROUP: u32 = 1 << 5;

const GROUP_MODEL: &str = "google cast group";

const AUDIO_MODELS: &[&str] = &[
    "chromecast audio",
    "google home",
    "google home mini",
    "google home max",
    "google nest mini",
];

/// Category of a cast receiver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastType {
    /// A video-capable receiver (Chromecast dongle, TV)
    Cast,
    /// An audio-only receiver (speaker, Chromecast Audio)
    Audio,
    /// A multizone speaker group
    Group,
}

impl CastType {
    /// Lowercase name used on the command line and in listings.
    pub fn as_str(&self) -> &'static str {
        match self {
            CastType::Cast => "cast",
            CastType::Audio => "audio",
            CastType::Group => "group",
        }
    }

    /// Classify a receiver from its model name and optional capability bitmask.
    ///
    /// Known model names win; otherwise the capability bits decide, and a receiver
    /// that advertises nothing useful is treated as a regular cast device.
    pub fn classify(model_name: &str, capabilities: Option<u32>) -> Self {
        let model = model_name.trim().to_lowercase();
        if model == GROUP_MODEL {
            return CastType::Group;
        }
        if AUDIO_MODELS.contains(&model.as_str()) {
            return CastType::Audio;
        }

        match capabilities {
            Some(ca) if ca & CAPABILITY_MULTIZONE_GROUP != 0 => CastType::Group,
            Some(ca) if ca & CAPABILITY_VIDEO_OUT == 0 && ca & CAPABILITY_AUDIO_OUT != 0 => {
                CastType::Audio
            }
            _ => CastType::Cast,
        }
    }
}

impl fmt::Display for CastType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Build a [`Device`] from a service's TXT records.
///
/// # Arguments
///
/// * `properties` - TXT key/value pairs (`id`, `fn`, `md`, `ca`)
/// * `ip_address` - Address the service resolved to
/// * `port` - Port of the CASTV2 endpoint
///
/// # Errors
///
/// Returns `DiscoveryError::InvalidDevice` if the friendly name is missing.
pub fn device_from_properties(
    properties: &HashMap<String, String>,
    ip_address: String,
    port: u16,
) -> Result<Device> {
    let name = properties
        .get("fn")
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .ok_or_else(|| {
            DiscoveryError::InvalidDevice(format!("no friendly name for {}", ip_address))
        })?
        .to_string();

    let model_name = properties
        .get("md")
        .cloned()
        .unwrap_or_else(|| "Unknown".to_string());
    let capabilities = properties.get("ca").and_then(|ca| ca.trim().parse::<u32>().ok());
    let id = properties.get("id").cloned().unwrap_or_default();

    Ok(Device {
        id,
        cast_type: CastType::classify(&model_name, capabilities),
        name,
        model_name,
        ip_address,
        port,
        capabilities,
    })
}

impl fmt::Display for Device {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Chromecast({}, {}:{}, model={}, type={}, uuid={})",
            self.name, self.ip_address, self.port, self.model_name, self.cast_type, self.id
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn txt(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[rstest]
    #[case("Google Cast Group", None, CastType::Group)]
    #[case("Chromecast Audio", Some(4), CastType::Audio)]
    #[case("Google Home Mini", None, CastType::Audio)]
    #[case("Chromecast", Some(5), CastType::Cast)]
    #[case("Chromecast Ultra", None, CastType::Cast)]
    #[case("Some Speaker", Some(2052), CastType::Audio)]
    #[case("Some Group", Some(2084), CastType::Group)]
    #[case("Video Group", Some(37), CastType::Group)]
    fn test_classify(
        #[case] model: &str,
        #[case] capabilities: Option<u32>,
        #[case] expected: CastType,
    ) {
        assert_eq!(CastType::classify(model, capabilities), expected);
    }

    #[test]
    fn test_cast_type_display() {
        assert_eq!(CastType::Cast.to_string(), "cast");
        assert_eq!(CastType::Audio.to_string(), "audio");
        assert_eq!(CastType::Group.to_string(), "group");
    }

    #[test]
    fn test_device_from_properties() {
        let props = txt(&[
            ("id", "4a2b8c1d9e0f"),
            ("fn", "Living Room TV"),
            ("md", "Chromecast"),
            ("ca", "4101"),
        ]);
        let device = device_from_properties(&props, "192.168.1.20".to_string(), 8009).unwrap();

        assert_eq!(device.id, "4a2b8c1d9e0f");
        assert_eq!(device.name, "Living Room TV");
        assert_eq!(device.model_name, "Chromecast");
        assert_eq!(device.cast_type, CastType::Cast);
        assert_eq!(device.ip_address, "192.168.1.20");
        assert_eq!(device.port, 8009);
        assert_eq!(device.capabilities, Some(4101));
    }

    #[test]
    fn test_device_from_properties_group() {
        let props = txt(&[("fn", "Downstairs"), ("md", "Google Cast Group")]);
        let device = device_from_properties(&props, "192.168.1.21".to_string(), 32187).unwrap();
        assert_eq!(device.cast_type, CastType::Group);
        assert_eq!(device.port, 32187);
    }

    #[test]
    fn test_device_from_properties_missing_name() {
        let props = txt(&[("md", "Chromecast")]);
        let err = device_from_properties(&props, "10.0.0.5".to_string(), 8009).unwrap_err();
        assert!(matches!(err, DiscoveryError::InvalidDevice(_)));
    }

    #[test]
    fn test_device_from_properties_defaults() {
        let props = txt(&[("fn", "Kitchen"), ("ca", "garbage")]);
        let device = device_from_properties(&props, "10.0.0.6".to_string(), 8009).unwrap();
        assert_eq!(device.model_name, "Unknown");
        assert_eq!(device.capabilities, None);
        assert_eq!(device.id, "");
        assert_eq!(device.cast_type, CastType::Cast);
    }

    #[test]
    fn test_device_display() {
        let props = txt(&[("id", "abc"), ("fn", "Kitchen"), ("md", "Google Home")]);
        let device = device_from_properties(&props, "10.0.0.7".to_string(), 8009).unwrap();
        assert_eq!(
            device.to_string(),
            "Chromecast(Kitchen, 10.0.0.7:8009, model=Google Home, type=audio, uuid=abc)"
        );
    }
}
