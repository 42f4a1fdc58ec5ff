//! Platform signal: the runtime's OS family and device class.
//!
//! Supplied by the host; hintkit only reads it.

use serde::{Deserialize, Serialize};

/// Operating-system family the presentation is rendered on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlatformFamily {
    Ios,
    MacOs,
    WatchOs,
    TvOs,
    VisionOs,
}

impl PlatformFamily {
    pub const ALL: [PlatformFamily; 5] = [
        Self::Ios,
        Self::MacOs,
        Self::WatchOs,
        Self::TvOs,
        Self::VisionOs,
    ];

    /// Spatial/immersive platforms (visionOS).
    pub fn is_spatial(&self) -> bool {
        matches!(self, Self::VisionOs)
    }

    /// Desktop platforms (macOS).
    pub fn is_desktop(&self) -> bool {
        matches!(self, Self::MacOs)
    }

    /// Touch handhelds where the device class decides between phone and pad.
    pub fn is_touch_handheld(&self) -> bool {
        matches!(self, Self::Ios)
    }

    /// Small or distant displays (watch, TV).
    pub fn is_constrained_display(&self) -> bool {
        matches!(self, Self::WatchOs | Self::TvOs)
    }

    /// Device class typically paired with this family.
    pub fn typical_device(&self) -> DeviceClass {
        match self {
            Self::Ios => DeviceClass::Phone,
            Self::MacOs => DeviceClass::Desktop,
            Self::WatchOs | Self::TvOs | Self::VisionOs => DeviceClass::Other,
        }
    }
}

impl std::fmt::Display for PlatformFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ios => write!(f, "ios"),
            Self::MacOs => write!(f, "macos"),
            Self::WatchOs => write!(f, "watchos"),
            Self::TvOs => write!(f, "tvos"),
            Self::VisionOs => write!(f, "visionos"),
        }
    }
}

impl std::str::FromStr for PlatformFamily {
    type Err = String;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().replace(['_', '-', ' '], "").as_str() {
            "ios" | "ipados" => Ok(Self::Ios),
            "macos" | "osx" => Ok(Self::MacOs),
            "watchos" => Ok(Self::WatchOs),
            "tvos" => Ok(Self::TvOs),
            "visionos" => Ok(Self::VisionOs),
            _ => Err(format!("Invalid platform family: {}", s)),
        }
    }
}

/// Physical form factor of the device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceClass {
    Phone,
    Pad,
    Desktop,
    Other,
}

impl DeviceClass {
    pub const ALL: [DeviceClass; 4] = [Self::Phone, Self::Pad, Self::Desktop, Self::Other];
}

impl std::fmt::Display for DeviceClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Phone => write!(f, "phone"),
            Self::Pad => write!(f, "pad"),
            Self::Desktop => write!(f, "desktop"),
            Self::Other => write!(f, "other"),
        }
    }
}

impl std::str::FromStr for DeviceClass {
    type Err = String;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "phone" | "iphone" => Ok(Self::Phone),
            "pad" | "ipad" | "tablet" => Ok(Self::Pad),
            "desktop" | "mac" => Ok(Self::Desktop),
            "other" => Ok(Self::Other),
            _ => Err(format!("Invalid device class: {}", s)),
        }
    }
}

/// Read-only (OS family, device class) pair used as resolver input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlatformSignal {
    pub family: PlatformFamily,
    pub device: DeviceClass,
}

impl PlatformSignal {
    pub fn new(family: PlatformFamily, device: DeviceClass) -> Self {
        Self { family, device }
    }

    /// Signal for a family with its typical device class.
    pub fn for_family(family: PlatformFamily) -> Self {
        Self::new(family, family.typical_device())
    }
}

impl std::fmt::Display for PlatformSignal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.family, self.device)
    }
}
