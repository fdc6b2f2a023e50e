//! Authentication state
//!
//! A [`Session`] is produced by an external login flow and handed to the
//! client. It carries the cookie set that authenticates every request.

pub mod cookies;
pub mod credentials;

pub use cookies::{Cookie, CookieSet};
pub use credentials::Session;
