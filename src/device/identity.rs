//! Device identity value object

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Hardware description of the simulated handset
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceProfile {
    /// Catalogue name
    pub name: String,
    pub manufacturer: String,
    pub model: String,
    pub device: String,
    pub cpu: String,
    /// Android API level
    pub android_version: u32,
    /// Android marketing release
    pub android_release: String,
    pub dpi: String,
    pub resolution: String,
}

/// Immutable metadata describing one simulated client device
///
/// Fields are only readable; an identity is replaced as a whole, never
/// edited in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceIdentity {
    device_id: String,
    uuid: Uuid,
    phone_id: Uuid,
    advertising_id: Uuid,
    profile: DeviceProfile,
    app_version: String,
    version_code: String,
    locale: String,
}

impl DeviceIdentity {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        device_id: impl Into<String>,
        uuid: Uuid,
        phone_id: Uuid,
        advertising_id: Uuid,
        profile: DeviceProfile,
        app_version: impl Into<String>,
        version_code: impl Into<String>,
        locale: impl Into<String>,
    ) -> Self {
        Self {
            device_id: device_id.into(),
            uuid,
            phone_id,
            advertising_id,
            profile,
            app_version: app_version.into(),
            version_code: version_code.into(),
            locale: locale.into(),
        }
    }

    /// Android id in the `android-<16 hex>` form
    pub fn device_id(&self) -> &str {
        &self.device_id
    }

    pub fn uuid(&self) -> Uuid {
        self.uuid
    }

    pub fn phone_id(&self) -> Uuid {
        self.phone_id
    }

    pub fn advertising_id(&self) -> Uuid {
        self.advertising_id
    }

    pub fn profile(&self) -> &DeviceProfile {
        &self.profile
    }

    pub fn app_version(&self) -> &str {
        &self.app_version
    }

    pub fn version_code(&self) -> &str {
        &self.version_code
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Render the user-agent string the official app sends
    pub fn user_agent(&self) -> String {
        let p = &self.profile;
        format!(
            "Instagram {} Android ({}/{}; {}; {}; {}; {}; {}; {}; {}; {})",
            self.app_version,
            p.android_version,
            p.android_release,
            p.dpi,
            p.resolution,
            p.manufacturer,
            p.model,
            p.device,
            p.cpu,
            self.locale,
            self.version_code
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device::profiles;

    fn sample() -> DeviceIdentity {
        DeviceIdentity::new(
            "android-0123456789abcdef",
            Uuid::nil(),
            Uuid::nil(),
            Uuid::nil(),
            profiles::find("pixel_6").unwrap().to_profile(),
            "269.0.0.18.75",
            "314665256",
            "en_US",
        )
    }

    #[test]
    fn test_user_agent_format() {
        let identity = sample();
        assert_eq!(
            identity.user_agent(),
            "Instagram 269.0.0.18.75 Android (33/13; 420dpi; 1080x2400; Google; Pixel 6; oriole; gs101; en_US; 314665256)"
        );
    }

    #[test]
    fn test_identity_serialization() {
        let identity = sample();
        let json = serde_json::to_string(&identity).unwrap();
        assert!(json.contains("android-0123456789abcdef"));

        let restored: DeviceIdentity = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, identity);
    }
}
