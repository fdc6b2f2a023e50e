//! Direct message types

use super::{
    serde_helpers::{deserialize_flexible_id, deserialize_optional_flexible_id},
    user::User,
};
use serde::{Deserialize, Serialize};

/// A single message in a thread
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectItem {
    pub item_id: String,
    #[serde(deserialize_with = "deserialize_flexible_id")]
    pub user_id: String,
    pub item_type: String,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_flexible_id")]
    pub timestamp: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectThread {
    pub thread_id: String,
    #[serde(default)]
    pub thread_title: Option<String>,
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub items: Vec<DirectItem>,
    #[serde(default)]
    pub has_older: bool,
    #[serde(default)]
    pub oldest_cursor: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Inbox {
    #[serde(default)]
    pub threads: Vec<DirectThread>,
    #[serde(default)]
    pub has_older: bool,
    #[serde(default)]
    pub oldest_cursor: Option<String>,
    #[serde(default)]
    pub unseen_count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectInbox {
    pub inbox: Inbox,
    #[serde(default)]
    pub pending_requests_total: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectThreadResponse {
    pub thread: DirectThread,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectSendPayload {
    pub thread_id: String,
    pub item_id: String,
}

/// Acknowledgement of a sent message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectSendResult {
    #[serde(default)]
    pub payload: Option<DirectSendPayload>,
}
