//! HTTP execution boundary
//!
//! The client never talks to the network directly. It hands a [`Request`]
//! to a [`Transport`], which owns the connection options and the cookie
//! store. [`HttpTransport`] is the reqwest-backed implementation; tests
//! substitute their own.

pub mod http;
#[cfg(test)]
pub(crate) mod mock;
pub mod options;
pub mod request;

pub use http::HttpTransport;
pub use options::{DEFAULT_BASE_URL, TransportOptions};
pub use request::{Method, Request, Response};

use crate::{Result, session::CookieSet};
use async_trait::async_trait;

/// Executes requests on behalf of the client
#[async_trait]
pub trait Transport: std::fmt::Debug + Send + Sync {
    /// Replace the cookie store contents
    fn set_cookies(&mut self, cookies: &CookieSet);

    /// Cookies currently held by the store
    fn cookies(&self) -> &CookieSet;

    /// Connection options
    fn options(&self) -> &TransportOptions;

    /// Mutable connection options; changes apply to the next request
    fn options_mut(&mut self) -> &mut TransportOptions;

    /// Send a request. Non-success statuses are returned as errors.
    async fn send(&self, request: Request) -> Result<Response>;
}
