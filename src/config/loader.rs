//! Resolving [`Settings`] from defaults, an optional TOML file and the
//! environment

use crate::{Error, Result, config::Settings};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// `$XDG_CONFIG_HOME/instagram-client/config.toml` or the platform equivalent
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("instagram-client").join("config.toml"))
}

/// Builds the effective settings for a client
///
/// Layers, lowest first: built-in defaults, the config file, `IG_*` and
/// proxy environment variables. The result is validated before it is
/// returned.
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    base: Settings,
    file_required: bool,
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self {
            base: Settings::default(),
            file_required: false,
        }
    }

    /// Start from these settings instead of the built-in defaults
    pub fn with_base(mut self, base: Settings) -> Self {
        self.base = base;
        self
    }

    /// Fail when the given config file does not exist
    ///
    /// An explicitly named file should exist; the default location may not.
    pub fn file_required(mut self, required: bool) -> Self {
        self.file_required = required;
        self
    }

    pub fn load(&self, config_file: Option<&Path>) -> Result<Settings> {
        let layered = match config_file {
            Some(path) if path.is_file() => {
                info!("Reading configuration from {}", path.display());
                Settings::from_file(path)?
            }
            Some(path) if self.file_required => {
                return Err(Error::config(format!(
                    "configuration file {} does not exist",
                    path.display()
                )));
            }
            Some(path) => {
                debug!("No configuration at {}, using defaults", path.display());
                self.base.clone()
            }
            None => self.base.clone(),
        };

        let settings = layered.merge_with_env()?;
        settings.validate()?;
        debug!(
            "Effective settings: base_url={} proxy={} normalized={}",
            settings.network.base_url,
            settings.get_proxy_url().is_some(),
            settings.client.normalized
        );

        Ok(settings)
    }

    /// Settings from defaults and the environment, ignoring any file
    pub fn from_env_only(&self) -> Result<Settings> {
        let settings = Settings::from_env()?;
        settings.validate()?;
        Ok(settings)
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
