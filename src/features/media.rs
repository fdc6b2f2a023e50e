//! Posts: details, likes and comments

use super::{capability, validate};
use crate::{
    Result,
    client::{ClientGeneric, Outcome},
    transport::{Method, Transport},
    types::{CommentPage, CommentResponse, MediaInfo, StatusResponse},
};

#[derive(Debug)]
pub struct Media<'a, T: Transport> {
    client: &'a ClientGeneric<T>,
}

capability!(Media, "media");

impl<T: Transport> Media<'_, T> {
    pub async fn info(&self, media_id: &str) -> Result<Outcome<MediaInfo>> {
        let media_id = validate::media_id("media_id", media_id)?;
        self.client.check_prerequisites()?;

        let request = self
            .client
            .request(Method::Get, format!("media/{media_id}/info/"));
        self.execute(request).await
    }

    pub async fn like(&self, media_id: &str) -> Result<Outcome<StatusResponse>> {
        self.toggle_like(media_id, "like").await
    }

    pub async fn unlike(&self, media_id: &str) -> Result<Outcome<StatusResponse>> {
        self.toggle_like(media_id, "unlike").await
    }

    pub async fn comments(
        &self,
        media_id: &str,
        max_id: Option<&str>,
    ) -> Result<Outcome<CommentPage>> {
        let media_id = validate::media_id("media_id", media_id)?;
        let max_id = validate::cursor("max_id", max_id)?;
        self.client.check_prerequisites()?;

        let request = self
            .client
            .request(Method::Get, format!("media/{media_id}/comments/"))
            .query_opt("max_id", max_id);
        self.execute(request).await
    }

    pub async fn comment(&self, media_id: &str, text: &str) -> Result<Outcome<CommentResponse>> {
        let media_id = validate::media_id("media_id", media_id)?;
        let text = validate::text("text", text)?;
        self.client.check_prerequisites()?;

        let request = self
            .client
            .post(format!("media/{media_id}/comment/"))
            .form("comment_text", text);
        self.execute(request).await
    }

    async fn toggle_like(&self, media_id: &str, action: &str) -> Result<Outcome<StatusResponse>> {
        let media_id = validate::media_id("media_id", media_id)?;
        self.client.check_prerequisites()?;

        let request = self
            .client
            .post(format!("media/{media_id}/{action}/"))
            .form("media_id", media_id);
        self.execute(request).await
    }
}
