//! Normalized domain types
//!
//! These are the typed results feature modules return when the client is
//! in normalized result mode.

pub mod direct;
pub mod media;
pub mod search;
pub mod serde_helpers;
pub mod user;

pub use direct::{
    DirectInbox, DirectItem, DirectSendPayload, DirectSendResult, DirectThread, DirectThreadResponse,
    Inbox,
};
pub use media::{
    Caption, Comment, CommentPage, CommentResponse, ExplorePage, FeedPage, MediaInfo, MediaItem,
    NewsInbox, TimelineItem, TimelinePage,
};
pub use search::{Hashtag, HashtagResults, Location, PlaceItem, PlaceResults, UserSearch};
pub use user::{
    FriendshipResponse, FriendshipStatus, Suggestion, SuggestionBlock, SuggestedUsers, User, UserDetail, UserInfo,
    UserList,
};

use serde::{Deserialize, Serialize};

/// Bare acknowledgement returned by mutating endpoints
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusResponse {
    pub status: String,
}

impl StatusResponse {
    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }
}
