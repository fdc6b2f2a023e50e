//! Authenticated session

use super::cookies::CookieSet;
use crate::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Authentication state for one logged-in account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    cookies: CookieSet,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    user_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    username: Option<String>,
    created_at: DateTime<Utc>,
}

impl Session {
    /// Create a session from the cookies a login flow produced
    pub fn new(cookies: CookieSet) -> Self {
        Self {
            cookies,
            user_id: None,
            username: None,
            created_at: Utc::now(),
        }
    }

    /// Attach the account id
    pub fn with_user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }

    /// Attach the account name
    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    pub fn cookies(&self) -> &CookieSet {
        &self.cookies
    }

    /// CSRF token echoed back on mutating requests
    pub fn csrf_token(&self) -> Option<&str> {
        self.cookies.value("csrftoken")
    }

    /// Account id, falling back to the `ds_user_id` cookie
    pub fn user_id(&self) -> Option<&str> {
        self.user_id
            .as_deref()
            .or_else(|| self.cookies.value("ds_user_id"))
    }

    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Parse a persisted session
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize for persistence
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load a persisted session from disk
    pub async fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = tokio::fs::read_to_string(path.as_ref()).await?;
        tracing::debug!("Loaded session from {:?}", path.as_ref());
        Self::from_json(&content)
    }

    /// Write the session to disk
    pub async fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        tokio::fs::write(path.as_ref(), self.to_json()?).await?;
        Ok(())
    }
}
