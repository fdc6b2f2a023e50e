//! Media, feed and comment types

use super::{
    serde_helpers::{deserialize_flexible_id, deserialize_optional_flexible_id},
    user::User,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Caption {
    pub text: String,
}

/// A photo, video or carousel post
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaItem {
    /// Composite `<media pk>_<owner pk>` id
    pub id: String,
    #[serde(default, deserialize_with = "deserialize_optional_flexible_id")]
    pub pk: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
    /// 1 = photo, 2 = video, 8 = carousel
    #[serde(default)]
    pub media_type: u8,
    #[serde(default)]
    pub taken_at: Option<i64>,
    #[serde(default)]
    pub caption: Option<Caption>,
    #[serde(default)]
    pub like_count: Option<u64>,
    #[serde(default)]
    pub comment_count: Option<u64>,
    #[serde(default)]
    pub user: Option<User>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaInfo {
    #[serde(default)]
    pub items: Vec<MediaItem>,
}

impl MediaInfo {
    /// The requested item, if the payload carried one
    pub fn item(&self) -> Option<&MediaItem> {
        self.items.first()
    }
}

/// Paginated list of media
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedPage {
    #[serde(default)]
    pub items: Vec<MediaItem>,
    #[serde(default)]
    pub more_available: bool,
    #[serde(default, deserialize_with = "deserialize_optional_flexible_id")]
    pub next_max_id: Option<String>,
}

/// Timeline entry; ads and suggestion units carry no media
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineItem {
    #[serde(default)]
    pub media_or_ad: Option<MediaItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelinePage {
    #[serde(default)]
    pub feed_items: Vec<TimelineItem>,
    #[serde(default)]
    pub more_available: bool,
    #[serde(default)]
    pub next_max_id: Option<String>,
}

impl TimelinePage {
    /// Media entries, skipping ads and suggestion units
    pub fn media(&self) -> impl Iterator<Item = &MediaItem> {
        self.feed_items
            .iter()
            .filter_map(|item| item.media_or_ad.as_ref())
    }
}

/// Explore grid page; sections are kept as raw JSON because their layout
/// changes between app versions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExplorePage {
    #[serde(default)]
    pub sectional_items: Vec<serde_json::Value>,
    #[serde(default)]
    pub more_available: bool,
    #[serde(default)]
    pub next_max_id: Option<String>,
}

/// Activity feed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsInbox {
    #[serde(default)]
    pub new_stories: Vec<serde_json::Value>,
    #[serde(default)]
    pub old_stories: Vec<serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    #[serde(deserialize_with = "deserialize_flexible_id")]
    pub pk: String,
    pub text: String,
    #[serde(default)]
    pub created_at: Option<i64>,
    #[serde(default)]
    pub user: Option<User>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommentPage {
    #[serde(default)]
    pub comments: Vec<Comment>,
    #[serde(default)]
    pub comment_count: Option<u64>,
    #[serde(default)]
    pub next_max_id: Option<String>,
}

/// Result of posting a comment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommentResponse {
    pub comment: Comment,
}
