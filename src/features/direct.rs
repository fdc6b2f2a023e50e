//! Direct messages

use super::{capability, validate};
use crate::{
    Result,
    client::{ClientGeneric, Outcome},
    transport::{Method, Transport},
    types::{DirectInbox, DirectSendResult, DirectThreadResponse},
};
use uuid::Uuid;

#[derive(Debug)]
pub struct Direct<'a, T: Transport> {
    client: &'a ClientGeneric<T>,
}

capability!(Direct, "direct");

impl<T: Transport> Direct<'_, T> {
    /// Thread list, optionally continuing from `cursor`
    pub async fn inbox(&self, cursor: Option<&str>) -> Result<Outcome<DirectInbox>> {
        let cursor = validate::cursor("cursor", cursor)?;
        self.client.check_prerequisites()?;

        let request = self
            .client
            .request(Method::Get, "direct_v2/inbox/")
            .query("persistentBadging", "true")
            .query("visual_message_return_type", "unseen")
            .query_opt("cursor", cursor);
        self.execute(request).await
    }

    /// Messages of one thread, optionally continuing from `cursor`
    pub async fn thread(
        &self,
        thread_id: &str,
        cursor: Option<&str>,
    ) -> Result<Outcome<DirectThreadResponse>> {
        let thread_id = validate::numeric_id("thread_id", thread_id)?;
        let cursor = validate::cursor("cursor", cursor)?;
        self.client.check_prerequisites()?;

        let request = self
            .client
            .request(Method::Get, format!("direct_v2/threads/{thread_id}/"))
            .query_opt("cursor", cursor);
        self.execute(request).await
    }

    /// Send a text message to one or more accounts
    ///
    /// A fresh `client_context` is generated per call; use
    /// [`send_text_with_context`](Self::send_text_with_context) to resend
    /// the same message.
    pub async fn send_text(
        &self,
        recipients: &[&str],
        text: &str,
    ) -> Result<Outcome<DirectSendResult>> {
        let context = Uuid::new_v4().to_string();
        self.send_text_with_context(recipients, text, &context).await
    }

    /// Send a text message under a caller-chosen `client_context`
    ///
    /// The server deduplicates messages by context, so retries should reuse it.
    pub async fn send_text_with_context(
        &self,
        recipients: &[&str],
        text: &str,
        client_context: &str,
    ) -> Result<Outcome<DirectSendResult>> {
        let recipients = validate::recipients("recipients", recipients)?;
        let text = validate::text("text", text)?;
        let client_context = validate::text("client_context", client_context)?;
        self.client.check_prerequisites()?;

        let request = self
            .client
            .post("direct_v2/threads/broadcast/text/")
            .form("recipient_users", format!("[[{}]]", recipients.join(",")))
            .form("action", "send_item")
            .form("client_context", client_context)
            .form("text", text);
        self.execute(request).await
    }
}
