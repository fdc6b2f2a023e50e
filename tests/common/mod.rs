//! Common test utilities and helpers
//!
//! This module provides shared utilities for integration tests.

#![allow(dead_code)]

use async_trait::async_trait;
use instagram_client::{
    Result,
    session::CookieSet,
    transport::{Request, Response, Transport, TransportOptions},
};
use std::sync::{Arc, Mutex};

/// Transport double returning a fixed response and recording every call
#[derive(Debug, Clone)]
pub struct RecordingTransport {
    options: TransportOptions,
    cookies: CookieSet,
    body: String,
    pub requests: Arc<Mutex<Vec<Request>>>,
    pub cookie_writes: Arc<Mutex<usize>>,
}

impl RecordingTransport {
    pub fn replying(body: impl Into<String>) -> Self {
        Self {
            options: TransportOptions::default(),
            cookies: CookieSet::new(),
            body: body.into(),
            requests: Arc::new(Mutex::new(Vec::new())),
            cookie_writes: Arc::new(Mutex::new(0)),
        }
    }

    pub fn sent(&self) -> Vec<Request> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    fn set_cookies(&mut self, cookies: &CookieSet) {
        *self.cookie_writes.lock().unwrap() += 1;
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
        Ok(Response::new(200, self.body.clone()))
    }
}

/// Test helper functions
pub mod helpers {
    use instagram_client::{Session, session::CookieSet};

    /// Session holding the cookies a login flow would produce
    pub fn test_session() -> Session {
        Session::new(CookieSet::from_pairs([
            ("sessionid", "42%3Aabc"),
            ("csrftoken", "csrf"),
            ("ds_user_id", "42"),
        ]))
    }
}
