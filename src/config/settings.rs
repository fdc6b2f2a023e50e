//! Configuration settings structure
//!
//! Defines the main settings structure and loading logic for the client.

use crate::{Error, Result, device::DeviceParameters, transport::DEFAULT_BASE_URL};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration settings for the client
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Network configuration
    pub network: NetworkSettings,
    /// Result shaping
    pub client: ClientSettings,
    /// Simulated device
    pub device: DeviceSettings,
    /// Logging configuration
    pub logging: LoggingSettings,
}

/// Transport configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkSettings {
    /// API root
    pub base_url: String,
    /// Explicit proxy, takes precedence over the environment
    pub proxy: Option<String>,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// HTTPS_PROXY from the environment
    #[serde(skip)]
    pub https_proxy: Option<String>,
    /// HTTP_PROXY from the environment
    #[serde(skip)]
    pub http_proxy: Option<String>,
    /// ALL_PROXY from the environment
    #[serde(skip)]
    pub all_proxy: Option<String>,
}

/// Result mode configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientSettings {
    /// Decode responses (`true`) or return them raw (`false`)
    pub normalized: bool,
}

/// Device identity configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DeviceSettings {
    /// App locale
    pub locale: String,
    /// Stored identifiers; a new device is generated when absent
    pub parameters: Option<DeviceParameters>,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Log level
    pub level: String,
    /// Enable verbose logging
    pub verbose: bool,
}

impl Default for NetworkSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            proxy: None,
            timeout_secs: 30,
            https_proxy: None,
            http_proxy: None,
            all_proxy: None,
        }
    }
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self { normalized: true }
    }
}

impl Default for DeviceSettings {
    fn default() -> Self {
        Self {
            locale: "en_US".to_string(),
            parameters: None,
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            verbose: false,
        }
    }
}

impl Settings {
    /// Create new settings with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load settings from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| Error::config(format!("Invalid config file {}: {}", path.display(), e)))
    }

    /// Load settings from environment variables
    pub fn from_env() -> Result<Self> {
        Self::default().merge_with_env()
    }

    /// Apply environment variable overrides
    pub fn merge_with_env(mut self) -> Result<Self> {
        if let Ok(base_url) = std::env::var("IG_BASE_URL") {
            self.network.base_url = base_url;
        }

        if let Ok(proxy) = std::env::var("IG_PROXY") {
            self.network.proxy = Some(proxy);
        }

        if let Ok(timeout) = std::env::var("IG_TIMEOUT_SECS") {
            self.network.timeout_secs = timeout
                .parse()
                .map_err(|e| Error::config(format!("Invalid timeout: {}", e)))?;
        }

        if let Ok(mode) = std::env::var("IG_RESULT_MODE") {
            self.client.normalized = match mode.trim().to_lowercase().as_str() {
                "normalized" | "true" | "1" => true,
                "raw" | "false" | "0" => false,
                other => {
                    return Err(Error::config(format!("Invalid result mode: {}", other)));
                }
            };
        }

        if let Ok(locale) = std::env::var("IG_LOCALE") {
            self.device.locale = locale;
        }

        if let Ok(level) = std::env::var("IG_LOG_LEVEL") {
            self.logging.level = level;
        }

        self.network.https_proxy = std::env::var("HTTPS_PROXY").ok();
        self.network.http_proxy = std::env::var("HTTP_PROXY").ok();
        self.network.all_proxy = std::env::var("ALL_PROXY").ok();

        Ok(self)
    }

    /// Proxy to use: explicit setting, then HTTPS_PROXY, HTTP_PROXY, ALL_PROXY
    pub fn get_proxy_url(&self) -> Option<String> {
        self.network
            .proxy
            .clone()
            .or_else(|| self.network.https_proxy.clone())
            .or_else(|| self.network.http_proxy.clone())
            .or_else(|| self.network.all_proxy.clone())
            .filter(|proxy| !proxy.trim().is_empty())
    }

    /// Check values that would otherwise fail later at client construction
    pub fn validate(&self) -> Result<()> {
        url::Url::parse(&self.network.base_url)
            .map_err(|e| Error::config(format!("Invalid base url: {}", e)))?;

        if self.network.timeout_secs == 0 {
            return Err(Error::config("Timeout must be greater than zero"));
        }

        if self.device.locale.trim().is_empty() {
            return Err(Error::config("Locale must not be empty"));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.network.base_url, DEFAULT_BASE_URL);
        assert_eq!(settings.network.timeout_secs, 30);
        assert!(settings.client.normalized);
        assert_eq!(settings.device.locale, "en_US");
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_settings_creation() {
        let settings = Settings::new();
        assert_eq!(settings.logging.level, "info");
    }

    #[test]
    fn test_partial_toml() {
        let settings: Settings = toml::from_str(
            r#"
[client]
normalized = false
            "#,
        )
        .unwrap();

        assert!(!settings.client.normalized);
        assert_eq!(settings.network.timeout_secs, 30);
    }

    #[test]
    fn test_device_parameters_toml() {
        let settings: Settings = toml::from_str(
            r#"
[device]
locale = "de_DE"

[device.parameters]
device_id = "android-0123456789abcdef"
uuid = "6f1c8b5e-3a4d-4c1b-9e2f-7a8b9c0d1e2f"
phone_id = "1b2c3d4e-5f60-4718-8293-a4b5c6d7e8f9"
advertising_id = "0a1b2c3d-4e5f-4607-8819-2a3b4c5d6e7f"
profile = "pixel_6"
            "#,
        )
        .unwrap();

        assert_eq!(settings.device.locale, "de_DE");
        assert_eq!(settings.device.parameters.unwrap().profile, "pixel_6");
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let mut settings = Settings::default();
        settings.network.timeout_secs = 0;
        assert!(matches!(settings.validate(), Err(Error::Config(_))));
    }

    #[test]
    fn test_validate_rejects_bad_base_url() {
        let mut settings = Settings::default();
        settings.network.base_url = "not a url".to_string();
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_blank_proxy_ignored() {
        let mut settings = Settings::default();
        settings.network.proxy = Some(" ".to_string());
        assert_eq!(settings.get_proxy_url(), None);
    }

    #[test]
    fn test_explicit_proxy_beats_environment_fallbacks() {
        let mut settings = Settings::default();
        settings.network.https_proxy = Some("https://https-proxy:8080".to_string());
        settings.network.all_proxy = Some("socks5://all-proxy:1080".to_string());
        assert_eq!(
            settings.get_proxy_url().as_deref(),
            Some("https://https-proxy:8080")
        );

        settings.network.https_proxy = None;
        assert_eq!(
            settings.get_proxy_url().as_deref(),
            Some("socks5://all-proxy:1080")
        );

        settings.network.proxy = Some("http://configured:3128".to_string());
        assert_eq!(
            settings.get_proxy_url().as_deref(),
            Some("http://configured:3128")
        );
    }
}
