//! Timeline, profile and hashtag feeds

use super::{capability, validate};
use crate::{
    Result,
    client::{ClientGeneric, Outcome},
    transport::{Method, Transport},
    types::{FeedPage, TimelinePage},
};

#[derive(Debug)]
pub struct Feed<'a, T: Transport> {
    client: &'a ClientGeneric<T>,
}

capability!(Feed, "feed");

impl<T: Transport> Feed<'_, T> {
    /// Home timeline, optionally continuing from `max_id`
    pub async fn timeline(&self, max_id: Option<&str>) -> Result<Outcome<TimelinePage>> {
        let max_id = validate::cursor("max_id", max_id)?;
        self.client.check_prerequisites()?;

        let mut request = self
            .client
            .post("feed/timeline/")
            .form("is_prefetch", "0")
            .form("is_pull_to_refresh", if max_id.is_none() { "1" } else { "0" });
        request = match max_id {
            Some(max_id) => request.form("reason", "pagination").form("max_id", max_id),
            None => request.form("reason", "cold_start_fetch"),
        };
        self.execute(request).await
    }

    /// Posts of one account
    pub async fn user(&self, user_id: &str, max_id: Option<&str>) -> Result<Outcome<FeedPage>> {
        let user_id = validate::numeric_id("user_id", user_id)?;
        let max_id = validate::cursor("max_id", max_id)?;
        self.client.check_prerequisites()?;

        let request = self
            .client
            .request(Method::Get, format!("feed/user/{user_id}/"))
            .query_opt("max_id", max_id);
        self.execute(request).await
    }

    /// Recent posts tagged with `tag`
    pub async fn hashtag(&self, tag: &str, max_id: Option<&str>) -> Result<Outcome<FeedPage>> {
        let tag = validate::hashtag("tag", tag)?;
        let max_id = validate::cursor("max_id", max_id)?;
        self.client.check_prerequisites()?;

        let request = self
            .client
            .request(Method::Get, format!("feed/tag/{tag}/"))
            .query_opt("max_id", max_id);
        self.execute(request).await
    }
}
