//! Feature modules
//!
//! Each module groups the operations of one feature area and borrows the
//! client for the duration of a call. Every operation follows the same
//! order:
//!
//! 1. validate its arguments locally ([`validate`]),
//! 2. ask the client whether a session is present,
//! 3. build the request from the client's device and session,
//! 4. send it through the transport,
//! 5. decode it or hand back the raw response, depending on the result mode.
//!
//! ```rust,no_run
//! use instagram_client::{Client, Session, session::CookieSet};
//!
//! # async fn example() -> instagram_client::Result<()> {
//! let mut client = Client::new()?;
//! client.set_session(Session::new(CookieSet::from_pairs([("sessionid", "...")])));
//!
//! let results = client.search().users("rust").await?;
//! # Ok(())
//! # }
//! ```

pub mod direct;
pub mod discover;
pub mod feed;
pub mod friendships;
pub mod general;
pub mod media;
pub mod search;
pub mod users;
pub mod validate;

pub use direct::Direct;
pub use discover::Discover;
pub use feed::Feed;
pub use friendships::Friendships;
pub use general::General;
pub use media::Media;
pub use search::Search;
pub use users::Users;

use crate::{
    Error, Result,
    client::ClientGeneric,
    transport::{Response, Transport},
};
use serde::de::DeserializeOwned;

/// A feature module bound to a client
pub trait Capability<'a, T: Transport>: Sized {
    /// Feature area name, attached to dispatch and decoding events
    const NAME: &'static str;

    fn bind(client: &'a ClientGeneric<T>) -> Self;
}

/// Decode an API envelope into a typed result
///
/// Payloads reporting `"status": "fail"` become [`Error::Api`].
pub(crate) fn decode<N: DeserializeOwned>(response: &Response) -> Result<N> {
    let value: serde_json::Value = response.json()?;

    if value.get("status").and_then(serde_json::Value::as_str) == Some("fail") {
        let message = value
            .get("message")
            .and_then(serde_json::Value::as_str)
            .unwrap_or("request failed");
        tracing::warn!("API reported failure: {}", message);
        return Err(Error::api(message));
    }

    Ok(serde_json::from_value(value)?)
}

macro_rules! capability {
    ($name:ident, $label:literal) => {
        impl<'a, T: $crate::transport::Transport> $crate::features::Capability<'a, T>
            for $name<'a, T>
        {
            const NAME: &'static str = $label;

            fn bind(client: &'a $crate::client::ClientGeneric<T>) -> Self {
                Self { client }
            }
        }

        impl<'a, T: $crate::transport::Transport> $name<'a, T> {
            async fn execute<N: ::serde::de::DeserializeOwned>(
                &self,
                request: $crate::transport::Request,
            ) -> $crate::Result<$crate::client::Outcome<N>> {
                let feature = <Self as $crate::features::Capability<'a, T>>::NAME;
                self.client.execute(feature, request).await
            }
        }
    };
}

pub(crate) use capability;

#[cfg(test)]
pub(crate) mod test_support {
    use crate::{
        client::ClientGeneric,
        device::DeviceBuilder,
        session::{CookieSet, Session},
        transport::mock::MockTransport,
    };

    pub(crate) fn anonymous(body: &str) -> ClientGeneric<MockTransport> {
        ClientGeneric::with_transport(MockTransport::replying(body), &DeviceBuilder::default())
            .unwrap()
    }

    pub(crate) fn authenticated(body: &str) -> ClientGeneric<MockTransport> {
        let mut client = anonymous(body);
        client.set_session(Session::new(CookieSet::from_pairs([
            ("sessionid", "abc"),
            ("csrftoken", "tok"),
            ("ds_user_id", "42"),
        ])));
        client
    }

    pub(crate) fn failing(status: u16, body: &str) -> ClientGeneric<MockTransport> {
        let mut client = ClientGeneric::with_transport(
            MockTransport::with_status(status, body),
            &DeviceBuilder::default(),
        )
        .unwrap();
        client.set_session(Session::new(CookieSet::from_pairs([("sessionid", "abc")])));
        client
    }
}
