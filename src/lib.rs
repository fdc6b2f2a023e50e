//! Instagram Client - async private API client
//!
//! One [`Client`] binds an authenticated [`Session`], a simulated
//! [`DeviceIdentity`], a configurable transport (including proxy routing) and
//! a result mode, and exposes the API through feature modules that all share
//! that state.
//!
//! # Architecture
//!
//! - **Facade** ([`client`]): composition root and authentication gate
//! - **Feature modules** ([`features`]): discover, general, user, direct,
//!   search, feed, friendships and media operations
//! - **Transport** ([`transport`]): HTTP execution, proxy and cookie store
//! - **Device** ([`device`]): simulated client device identity
//!
//! # Result modes
//!
//! In normalized mode (the default) operations decode responses into the
//! typed values in [`types`]. In raw mode they return the transport
//! [`Response`](transport::Response) untouched. Both modes send the same
//! request.
//!
//! # Examples
//!
//! ```rust,no_run
//! use instagram_client::{Client, Session};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let mut client = Client::new()?;
//! client
//!     .set_session(Session::load("session.json").await?)
//!     .set_proxy_uri("socks5://127.0.0.1:1080")?;
//!
//! let profile = client.user().info("25025320").await?;
//!
//! client.set_mode(false);
//! let raw = client.user().info("25025320").await?;
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod client;
pub mod config;
pub mod device;
pub mod error;
pub mod features;
pub mod session;
pub mod transport;
pub mod types;
pub mod utils;

pub use client::{AuthState, Client, ClientGeneric, Outcome, ResultMode};
pub use config::Settings;
pub use device::{DeviceBuilder, DeviceIdentity, DeviceIdentityProvider};
pub use error::{Error, Result};
pub use session::Session;
pub use transport::{HttpTransport, Transport};
