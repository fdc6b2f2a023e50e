//! Account and relationship types

use super::serde_helpers::deserialize_flexible_id;
use serde::{Deserialize, Serialize};

/// Compact account representation embedded in most payloads
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(deserialize_with = "deserialize_flexible_id")]
    pub pk: String,
    pub username: String,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub is_private: bool,
    #[serde(default)]
    pub is_verified: bool,
    #[serde(default)]
    pub profile_pic_url: Option<String>,
}

/// Full profile returned by the info endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserDetail {
    #[serde(flatten)]
    pub user: User,
    #[serde(default)]
    pub biography: Option<String>,
    #[serde(default)]
    pub follower_count: Option<u64>,
    #[serde(default)]
    pub following_count: Option<u64>,
    #[serde(default)]
    pub media_count: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    pub user: UserDetail,
}

/// Page of followers or followings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserList {
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub next_max_id: Option<String>,
}

impl UserList {
    pub fn has_more(&self) -> bool {
        self.next_max_id.is_some()
    }
}

/// Relationship between the session account and another account
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FriendshipStatus {
    pub following: bool,
    pub followed_by: bool,
    pub blocking: bool,
    pub is_private: bool,
    pub incoming_request: bool,
    pub outgoing_request: bool,
}

/// Result of follow and unfollow
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FriendshipResponse {
    pub friendship_status: FriendshipStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    pub user: User,
    #[serde(default)]
    pub social_context: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SuggestionBlock {
    #[serde(default)]
    pub suggestions: Vec<Suggestion>,
}

/// Accounts the service suggests following
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuggestedUsers {
    #[serde(default)]
    pub new_suggested_users: SuggestionBlock,
}

impl SuggestedUsers {
    pub fn suggestions(&self) -> &[Suggestion] {
        &self.new_suggested_users.suggestions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_user_detail_flattening() {
        let info: UserInfo = serde_json::from_value(json!({
            "user": {
                "pk": 25025320,
                "username": "instagram",
                "full_name": "Instagram",
                "is_verified": true,
                "follower_count": 1000
            },
            "status": "ok"
        }))
        .unwrap();

        assert_eq!(info.user.user.pk, "25025320");
        assert!(info.user.user.is_verified);
        assert!(!info.user.user.is_private);
        assert_eq!(info.user.follower_count, Some(1000));
        assert_eq!(info.user.media_count, None);
    }

    #[test]
    fn test_friendship_status_defaults() {
        let status: FriendshipStatus =
            serde_json::from_value(json!({"following": true, "status": "ok"})).unwrap();
        assert!(status.following);
        assert!(!status.followed_by);
    }

    #[test]
    fn test_user_list_pagination() {
        let list: UserList = serde_json::from_value(json!({
            "users": [{"pk": "1", "username": "a"}],
            "next_max_id": "QVFE"
        }))
        .unwrap();
        assert_eq!(list.users.len(), 1);
        assert!(list.has_more());
    }

    #[test]
    fn test_suggested_users() {
        let suggested: SuggestedUsers = serde_json::from_value(json!({
            "new_suggested_users": {
                "suggestions": [{"user": {"pk": 3, "username": "c"}, "social_context": "Followed by a"}]
            }
        }))
        .unwrap();
        assert_eq!(suggested.suggestions()[0].user.username, "c");

        let empty: SuggestedUsers = serde_json::from_value(json!({"status": "ok"})).unwrap();
        assert!(empty.suggestions().is_empty());
    }

    #[test]
    fn test_user_requires_username() {
        let result = serde_json::from_value::<User>(json!({"pk": 1}));
        assert!(result.is_err());
    }
}
