//! Follow relationships

use super::{capability, validate};
use crate::{
    Result,
    client::{ClientGeneric, Outcome},
    transport::{Method, Transport},
    types::{FriendshipResponse, FriendshipStatus, UserList},
};

#[derive(Debug)]
pub struct Friendships<'a, T: Transport> {
    client: &'a ClientGeneric<T>,
}

capability!(Friendships, "friendships");

impl<T: Transport> Friendships<'_, T> {
    pub async fn follow(&self, user_id: &str) -> Result<Outcome<FriendshipResponse>> {
        let user_id = validate::numeric_id("user_id", user_id)?;
        self.client.check_prerequisites()?;

        let request = self
            .client
            .post(format!("friendships/create/{user_id}/"))
            .form("user_id", user_id);
        self.execute(request).await
    }

    pub async fn unfollow(&self, user_id: &str) -> Result<Outcome<FriendshipResponse>> {
        let user_id = validate::numeric_id("user_id", user_id)?;
        self.client.check_prerequisites()?;

        let request = self
            .client
            .post(format!("friendships/destroy/{user_id}/"))
            .form("user_id", user_id);
        self.execute(request).await
    }

    /// Relationship between the session account and `user_id`
    pub async fn show(&self, user_id: &str) -> Result<Outcome<FriendshipStatus>> {
        let user_id = validate::numeric_id("user_id", user_id)?;
        self.client.check_prerequisites()?;

        let request = self
            .client
            .request(Method::Get, format!("friendships/show/{user_id}/"));
        self.execute(request).await
    }

    pub async fn followers(
        &self,
        user_id: &str,
        max_id: Option<&str>,
    ) -> Result<Outcome<UserList>> {
        self.list(user_id, "followers", max_id).await
    }

    pub async fn following(
        &self,
        user_id: &str,
        max_id: Option<&str>,
    ) -> Result<Outcome<UserList>> {
        self.list(user_id, "following", max_id).await
    }

    async fn list(
        &self,
        user_id: &str,
        direction: &str,
        max_id: Option<&str>,
    ) -> Result<Outcome<UserList>> {
        let user_id = validate::numeric_id("user_id", user_id)?;
        let max_id = validate::cursor("max_id", max_id)?;
        self.client.check_prerequisites()?;

        let request = self
            .client
            .request(Method::Get, format!("friendships/{user_id}/{direction}/"))
            .query_opt("max_id", max_id);
        self.execute(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{anonymous, authenticated};
    use crate::Error;

    #[tokio::test]
    async fn test_follow() {
        let client = authenticated(r#"{"friendship_status":{"following":true},"status":"ok"}"#);
        let result = client.friendships().follow("7").await.unwrap();

        assert!(result.normalized().unwrap().friendship_status.following);
        let request = client.transport().last_request().unwrap();
        assert_eq!(request.path, "friendships/create/7/");
        assert!(request.form.contains(&("user_id".to_string(), "7".to_string())));
        assert_eq!(request.header_value("X-CSRFToken"), Some("tok"));
    }

    #[tokio::test]
    async fn test_unfollow() {
        let client = authenticated(r#"{"friendship_status":{"following":false},"status":"ok"}"#);
        let result = client.friendships().unfollow("7").await.unwrap();

        assert!(!result.normalized().unwrap().friendship_status.following);
        assert_eq!(
            client.transport().last_request().unwrap().path,
            "friendships/destroy/7/"
        );
    }

    #[tokio::test]
    async fn test_show() {
        let client = authenticated(r#"{"following":false,"followed_by":true,"status":"ok"}"#);
        let status = client.friendships().show("7").await.unwrap();
        assert!(status.normalized().unwrap().followed_by);
    }

    #[tokio::test]
    async fn test_followers_and_following_paths() {
        let client = authenticated(r#"{"users":[],"status":"ok"}"#);
        client.friendships().followers("7", Some("c")).await.unwrap();
        client.friendships().following("7", None).await.unwrap();

        let requests = client.transport().requests();
        assert_eq!(requests[0].path, "friendships/7/followers/");
        assert_eq!(requests[1].path, "friendships/7/following/");
        assert!(requests[1].query.is_empty());
    }

    #[tokio::test]
    async fn test_api_failure_status() {
        let client = authenticated(r#"{"status":"fail","message":"feedback_required"}"#);
        let err = client.friendships().follow("7").await.unwrap_err();
        assert!(matches!(err, Error::Api { .. }));
    }

    #[tokio::test]
    async fn test_requires_session() {
        let client = anonymous("{}");
        assert!(client.friendships().follow("7").await.unwrap_err().is_auth());
        assert!(client.transport().requests().is_empty());
    }
}
