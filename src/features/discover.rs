//! Explore and account suggestions

use super::{capability, validate};
use crate::{
    Result,
    client::{ClientGeneric, Outcome},
    transport::{Method, Transport},
    types::{ExplorePage, SuggestedUsers},
};

#[derive(Debug)]
pub struct Discover<'a, T: Transport> {
    client: &'a ClientGeneric<T>,
}

capability!(Discover, "discover");

impl<T: Transport> Discover<'_, T> {
    /// Explore grid, optionally continuing from `max_id`
    pub async fn explore(&self, max_id: Option<&str>) -> Result<Outcome<ExplorePage>> {
        let max_id = validate::cursor("max_id", max_id)?;
        self.client.check_prerequisites()?;

        let request = self
            .client
            .request(Method::Get, "discover/topical_explore/")
            .query("is_prefetch", "false")
            .query("is_ptr", if max_id.is_none() { "true" } else { "false" })
            .query_opt("max_id", max_id);
        self.execute(request).await
    }

    /// Accounts suggested for the session account
    pub async fn suggested_users(&self) -> Result<Outcome<SuggestedUsers>> {
        self.client.check_prerequisites()?;

        let request = self.client.post("discover/ayml/").form("paginate", "true");
        self.execute(request).await
    }
}
