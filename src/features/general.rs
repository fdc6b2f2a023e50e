//! Account-wide endpoints

use super::capability;
use crate::{
    Result,
    client::{ClientGeneric, Outcome},
    transport::{Method, Transport},
    types::{NewsInbox, UserInfo},
};

#[derive(Debug)]
pub struct General<'a, T: Transport> {
    client: &'a ClientGeneric<T>,
}

capability!(General, "general");

impl<T: Transport> General<'_, T> {
    /// Activity feed of the session account
    pub async fn news_inbox(&self) -> Result<Outcome<NewsInbox>> {
        self.client.check_prerequisites()?;

        let request = self.client.request(Method::Get, "news/inbox/");
        self.execute(request).await
    }

    /// Profile of the session account
    pub async fn current_user(&self) -> Result<Outcome<UserInfo>> {
        self.client.check_prerequisites()?;

        let request = self
            .client
            .request(Method::Get, "accounts/current_user/")
            .query("edit", "true");
        self.execute(request).await
    }
}
