//! Account profiles

use super::{capability, validate};
use crate::{
    Result,
    client::{ClientGeneric, Outcome},
    transport::{Method, Transport},
    types::UserInfo,
};

#[derive(Debug)]
pub struct Users<'a, T: Transport> {
    client: &'a ClientGeneric<T>,
}

capability!(Users, "user");

impl<T: Transport> Users<'_, T> {
    /// Profile of the account with the given id
    pub async fn info(&self, user_id: &str) -> Result<Outcome<UserInfo>> {
        let user_id = validate::numeric_id("user_id", user_id)?;
        self.client.check_prerequisites()?;

        let request = self
            .client
            .request(Method::Get, format!("users/{user_id}/info/"));
        self.execute(request).await
    }

    /// Profile of the account with the given name
    pub async fn info_by_username(&self, username: &str) -> Result<Outcome<UserInfo>> {
        let username = validate::username("username", username)?;
        self.client.check_prerequisites()?;

        let request = self
            .client
            .request(Method::Get, format!("users/{username}/usernameinfo/"));
        self.execute(request).await
    }
}
