//! Search for accounts, hashtags and places

use super::{capability, validate};
use crate::{
    Result,
    client::{ClientGeneric, Outcome},
    transport::{Method, Transport},
    types::{HashtagResults, PlaceResults, UserSearch},
};

const RESULT_COUNT: &str = "30";

#[derive(Debug)]
pub struct Search<'a, T: Transport> {
    client: &'a ClientGeneric<T>,
}

capability!(Search, "search");

impl<T: Transport> Search<'_, T> {
    /// Accounts matching `query`
    pub async fn users(&self, query: &str) -> Result<Outcome<UserSearch>> {
        let query = validate::text("query", query)?;
        self.client.check_prerequisites()?;

        let request = self
            .client
            .request(Method::Get, "users/search/")
            .query("q", query)
            .query("count", RESULT_COUNT);
        self.execute(request).await
    }

    /// Hashtags matching `query`
    pub async fn hashtags(&self, query: &str) -> Result<Outcome<HashtagResults>> {
        let query = validate::text("query", query)?;
        self.client.check_prerequisites()?;

        let request = self
            .client
            .request(Method::Get, "tags/search/")
            .query("q", query.trim_start_matches('#'))
            .query("count", RESULT_COUNT);
        self.execute(request).await
    }

    /// Places matching `query`
    pub async fn places(&self, query: &str) -> Result<Outcome<PlaceResults>> {
        let query = validate::text("query", query)?;
        self.client.check_prerequisites()?;

        let request = self
            .client
            .request(Method::Get, "fbsearch/places/")
            .query("query", query)
            .query("count", RESULT_COUNT);
        self.execute(request).await
    }
}
