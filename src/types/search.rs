//! Search result types

use super::{serde_helpers::deserialize_flexible_id, user::User};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserSearch {
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub has_more: bool,
    #[serde(default)]
    pub num_results: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hashtag {
    #[serde(deserialize_with = "deserialize_flexible_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub media_count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HashtagResults {
    #[serde(default)]
    pub results: Vec<Hashtag>,
    #[serde(default)]
    pub has_more: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    #[serde(deserialize_with = "deserialize_flexible_id")]
    pub pk: String,
    pub name: String,
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lng: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceItem {
    pub location: Location,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub subtitle: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceResults {
    #[serde(default)]
    pub items: Vec<PlaceItem>,
    #[serde(default)]
    pub has_more: bool,
}
