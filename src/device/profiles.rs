//! Built-in catalogue of device profiles

use super::identity::DeviceProfile;

/// Static description of a known handset
#[derive(Debug, Clone, Copy)]
pub struct ProfileSpec {
    pub name: &'static str,
    pub manufacturer: &'static str,
    pub model: &'static str,
    pub device: &'static str,
    pub cpu: &'static str,
    pub android_version: u32,
    pub android_release: &'static str,
    pub dpi: &'static str,
    pub resolution: &'static str,
}

impl ProfileSpec {
    /// Materialize the owned profile
    pub fn to_profile(&self) -> DeviceProfile {
        DeviceProfile {
            name: self.name.to_string(),
            manufacturer: self.manufacturer.to_string(),
            model: self.model.to_string(),
            device: self.device.to_string(),
            cpu: self.cpu.to_string(),
            android_version: self.android_version,
            android_release: self.android_release.to_string(),
            dpi: self.dpi.to_string(),
            resolution: self.resolution.to_string(),
        }
    }
}

pub const PROFILES: &[ProfileSpec] = &[
    ProfileSpec {
        name: "samsung_galaxy_s21",
        manufacturer: "samsung",
        model: "SM-G991B",
        device: "o1s",
        cpu: "exynos2100",
        android_version: 31,
        android_release: "12",
        dpi: "480dpi",
        resolution: "1080x2400",
    },
    ProfileSpec {
        name: "oneplus_9",
        manufacturer: "OnePlus",
        model: "LE2113",
        device: "OnePlus9",
        cpu: "qcom",
        android_version: 30,
        android_release: "11",
        dpi: "420dpi",
        resolution: "1080x2400",
    },
    ProfileSpec {
        name: "pixel_6",
        manufacturer: "Google",
        model: "Pixel 6",
        device: "oriole",
        cpu: "gs101",
        android_version: 33,
        android_release: "13",
        dpi: "420dpi",
        resolution: "1080x2400",
    },
    ProfileSpec {
        name: "xiaomi_redmi_note_10",
        manufacturer: "Xiaomi",
        model: "M2101K7AG",
        device: "mojito",
        cpu: "qcom",
        android_version: 30,
        android_release: "11",
        dpi: "440dpi",
        resolution: "1080x2400",
    },
];

/// Look up a profile by name
pub fn find(name: &str) -> Option<&'static ProfileSpec> {
    PROFILES.iter().find(|spec| spec.name == name)
}
