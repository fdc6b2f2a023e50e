//! Recording transport for unit tests

use super::{Request, Response, Transport, TransportOptions};
use crate::{Error, Result, session::CookieSet};
use async_trait::async_trait;
use std::sync::Mutex;

#[derive(Debug)]
pub(crate) struct MockTransport {
    options: TransportOptions,
    cookies: CookieSet,
    status: u16,
    body: String,
    requests: Mutex<Vec<Request>>,
}

impl MockTransport {
    /// Answer every request with `200` and the given body
    pub(crate) fn replying(body: impl Into<String>) -> Self {
        Self::with_status(200, body)
    }

    pub(crate) fn with_status(status: u16, body: impl Into<String>) -> Self {
        Self {
            options: TransportOptions::default(),
            cookies: CookieSet::new(),
            status,
            body: body.into(),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn requests(&self) -> Vec<Request> {
        self.requests.lock().unwrap().clone()
    }

    pub(crate) fn last_request(&self) -> Option<Request> {
        self.requests.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl Transport for MockTransport {
    fn set_cookies(&mut self, cookies: &CookieSet) {
        self.cookies = cookies.clone();
    }

    fn cookies(&self) -> &CookieSet {
        &self.cookies
    }

    fn options(&self) -> &TransportOptions {
        &self.options
    }

    fn options_mut(&mut self) -> &mut TransportOptions {
        &mut self.options
    }

    async fn send(&self, request: Request) -> Result<Response> {
        self.requests.lock().unwrap().push(request);
        let response = Response::new(self.status, self.body.clone());
        if response.is_success() {
            Ok(response)
        } else {
            Err(Error::http_status(self.status, self.body.clone()))
        }
    }
}
