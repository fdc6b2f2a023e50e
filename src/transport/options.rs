//! Transport connection options

use crate::{Error, Result};
use std::time::Duration;
use url::Url;

/// Base URL of the private API
pub const DEFAULT_BASE_URL: &str = "https://i.instagram.com/api/v1/";

const PROXY_SCHEMES: &[&str] = &["http", "https", "socks5", "socks5h"];

/// Connection options owned by a transport
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportOptions {
    base_url: Url,
    proxy: Option<Url>,
    timeout: Duration,
}

impl Default for TransportOptions {
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_BASE_URL).expect("default base url is valid"),
            proxy: None,
            timeout: Duration::from_secs(30),
        }
    }
}

impl TransportOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn proxy(&self) -> Option<&Url> {
        self.proxy.as_ref()
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Route requests through a proxy
    ///
    /// The URI must be absolute, use one of `http`, `https`, `socks5` or
    /// `socks5h`, and name a host. On error the options are left unchanged.
    pub fn add_proxy_uri(&mut self, uri: &str) -> Result<()> {
        let parsed = Url::parse(uri.trim())
            .map_err(|e| Error::invalid_configuration(format!("malformed proxy uri {uri:?}: {e}")))?;

        if !PROXY_SCHEMES.contains(&parsed.scheme()) {
            return Err(Error::invalid_configuration(format!(
                "unsupported proxy scheme: {}",
                parsed.scheme()
            )));
        }

        if parsed.host_str().is_none_or(str::is_empty) {
            return Err(Error::invalid_configuration(format!(
                "proxy uri has no host: {uri}"
            )));
        }

        self.proxy = Some(parsed);
        Ok(())
    }

    /// Connect directly again
    pub fn clear_proxy(&mut self) {
        self.proxy = None;
    }

    /// Point the transport at another API root
    pub fn set_base_url(&mut self, base_url: &str) -> Result<()> {
        let mut parsed = Url::parse(base_url)
            .map_err(|e| Error::invalid_configuration(format!("malformed base url: {e}")))?;

        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(Error::invalid_configuration(format!(
                "base url must be http(s): {base_url}"
            )));
        }

        // Url::join drops the last segment unless the path ends with a slash
        if !parsed.path().ends_with('/') {
            let path = format!("{}/", parsed.path());
            parsed.set_path(&path);
        }

        self.base_url = parsed;
        Ok(())
    }

    pub fn set_timeout(&mut self, timeout: Duration) {
        self.timeout = timeout;
    }
}
