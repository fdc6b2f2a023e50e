//! Device identity providers
//!
//! [`DeviceBuilder`] either restores an identity from stored
//! [`DeviceParameters`] or generates a fresh, plausible one.

use super::{identity::DeviceIdentity, profiles};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// App version the simulated client reports
pub const APP_VERSION: &str = "269.0.0.18.75";

/// Build number matching [`APP_VERSION`]
pub const VERSION_CODE: &str = "314665256";

/// Produces the device identity a client will use for its whole lifetime
pub trait DeviceIdentityProvider: std::fmt::Debug + Send + Sync {
    /// Build a device identity
    fn build(&self) -> Result<DeviceIdentity>;
}

/// Persisted identifiers of a previously generated device
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceParameters {
    pub device_id: String,
    pub uuid: String,
    pub phone_id: String,
    pub advertising_id: String,
    /// Name of a built-in device profile
    pub profile: String,
}

impl DeviceParameters {
    /// Capture the parameters of an existing identity
    pub fn from_identity(identity: &DeviceIdentity) -> Self {
        Self {
            device_id: identity.device_id().to_string(),
            uuid: identity.uuid().to_string(),
            phone_id: identity.phone_id().to_string(),
            advertising_id: identity.advertising_id().to_string(),
            profile: identity.profile().name.clone(),
        }
    }
}

/// Default device identity provider
#[derive(Debug, Clone)]
pub struct DeviceBuilder {
    parameters: Option<DeviceParameters>,
    locale: String,
}

impl Default for DeviceBuilder {
    fn default() -> Self {
        Self {
            parameters: None,
            locale: "en_US".to_string(),
        }
    }
}

impl DeviceBuilder {
    /// Create a builder that generates new identities
    pub fn new() -> Self {
        Self::default()
    }

    /// Restore the identity described by stored parameters
    pub fn with_parameters(mut self, parameters: DeviceParameters) -> Self {
        self.parameters = Some(parameters);
        self
    }

    /// Set the app locale
    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = locale.into();
        self
    }

    fn restore(&self, params: &DeviceParameters) -> Result<DeviceIdentity> {
        validate_device_id(&params.device_id)?;
        let profile = profiles::find(&params.profile).ok_or_else(|| {
            Error::identity_build(format!("unknown device profile: {}", params.profile))
        })?;

        Ok(DeviceIdentity::new(
            params.device_id.clone(),
            parse_uuid("uuid", &params.uuid)?,
            parse_uuid("phone_id", &params.phone_id)?,
            parse_uuid("advertising_id", &params.advertising_id)?,
            profile.to_profile(),
            APP_VERSION,
            VERSION_CODE,
            self.locale.clone(),
        ))
    }

    fn generate(&self) -> DeviceIdentity {
        let seed = Uuid::new_v4();
        let profile = &profiles::PROFILES[seed.as_bytes()[0] as usize % profiles::PROFILES.len()];
        let device_id = format!("android-{}", &seed.simple().to_string()[..16]);

        DeviceIdentity::new(
            device_id,
            Uuid::new_v4(),
            Uuid::new_v4(),
            Uuid::new_v4(),
            profile.to_profile(),
            APP_VERSION,
            VERSION_CODE,
            self.locale.clone(),
        )
    }
}

impl DeviceIdentityProvider for DeviceBuilder {
    fn build(&self) -> Result<DeviceIdentity> {
        if self.locale.trim().is_empty() {
            return Err(Error::identity_build("locale must not be empty"));
        }

        match &self.parameters {
            Some(params) => {
                tracing::debug!("Restoring device identity {}", params.device_id);
                self.restore(params)
            }
            None => {
                let identity = self.generate();
                tracing::debug!(
                    "Generated device identity {} ({})",
                    identity.device_id(),
                    identity.profile().name
                );
                Ok(identity)
            }
        }
    }
}

/// Provider that always hands out the same identity
#[derive(Debug, Clone)]
pub struct StaticDeviceProvider {
    identity: DeviceIdentity,
}

impl StaticDeviceProvider {
    pub fn new(identity: DeviceIdentity) -> Self {
        Self { identity }
    }
}

impl DeviceIdentityProvider for StaticDeviceProvider {
    fn build(&self) -> Result<DeviceIdentity> {
        Ok(self.identity.clone())
    }
}

fn validate_device_id(device_id: &str) -> Result<()> {
    let valid = device_id
        .strip_prefix("android-")
        .is_some_and(|hex| {
            hex.len() == 16 && hex.chars().all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c))
        });

    if valid {
        Ok(())
    } else {
        Err(Error::identity_build(format!(
            "malformed device id: {device_id}"
        )))
    }
}

fn parse_uuid(field: &str, value: &str) -> Result<Uuid> {
    Uuid::parse_str(value)
        .map_err(|e| Error::identity_build(format!("invalid {field}: {e}")))
}
