//! The client facade
//!
//! Holds the state every feature module borrows: the transport, the
//! simulated device, the authentication state and the result mode.
//!
//! Setters take `&mut self` while feature operations borrow `&self`, so a
//! session swap or proxy change can never interleave with an operation that
//! is reading the same state. Callers that share one client across tasks
//! wrap it in a lock of their choice.

use super::mode::{Outcome, ResultMode};
use crate::{
    Error, Result,
    config::Settings,
    device::{DeviceBuilder, DeviceIdentity, DeviceIdentityProvider},
    features::{
        self, Capability, Direct, Discover, Feed, Friendships, General, Media, Search, Users,
    },
    session::Session,
    transport::{HttpTransport, Method, Request, Transport},
};
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Authentication state of a client
///
/// There is no transition back to `Anonymous`; a session can only be
/// replaced by another one.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum AuthState {
    #[default]
    Anonymous,
    Authenticated(Session),
}

impl AuthState {
    pub fn session(&self) -> Option<&Session> {
        match self {
            Self::Anonymous => None,
            Self::Authenticated(session) => Some(session),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }
}

/// Convenience type alias for the client with the reqwest transport
pub type Client = ClientGeneric<HttpTransport>;

/// Client facade over a transport implementation
#[derive(Debug)]
pub struct ClientGeneric<T: Transport = HttpTransport> {
    transport: T,
    device: DeviceIdentity,
    auth: AuthState,
    mode: ResultMode,
}

impl ClientGeneric<HttpTransport> {
    /// Creates a client with a freshly generated device identity.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use instagram_client::Client;
    ///
    /// let client = Client::new()?;
    /// assert!(!client.is_session_available());
    /// assert!(client.mode());
    /// # Ok::<(), instagram_client::Error>(())
    /// ```
    pub fn new() -> Result<Self> {
        Self::with_provider(&DeviceBuilder::default())
    }

    /// Creates a client whose device identity comes from `provider`.
    ///
    /// A failing provider fails construction; no client is returned.
    pub fn with_provider(provider: &dyn DeviceIdentityProvider) -> Result<Self> {
        Self::with_transport(HttpTransport::default(), provider)
    }

    /// Creates a client configured from loaded settings.
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let mut transport = HttpTransport::default();
        let options = transport.options_mut();
        options.set_base_url(&settings.network.base_url)?;
        options.set_timeout(Duration::from_secs(settings.network.timeout_secs));
        if let Some(proxy) = settings.get_proxy_url() {
            options.add_proxy_uri(&proxy)?;
        }

        let mut builder = DeviceBuilder::new().with_locale(&settings.device.locale);
        if let Some(parameters) = &settings.device.parameters {
            builder = builder.with_parameters(parameters.clone());
        }

        let mut client = Self::with_transport(transport, &builder)?;
        client.set_mode(settings.client.normalized);
        Ok(client)
    }
}

impl<T: Transport> ClientGeneric<T> {
    /// Creates a client over a custom transport
    pub fn with_transport(transport: T, provider: &dyn DeviceIdentityProvider) -> Result<Self> {
        let device = provider.build()?;
        tracing::debug!(
            "Client created for device {} ({})",
            device.device_id(),
            device.profile().name
        );

        Ok(Self {
            transport,
            device,
            auth: AuthState::Anonymous,
            mode: ResultMode::default(),
        })
    }

    /// Returns the current session.
    pub fn session(&self) -> Option<&Session> {
        self.auth.session()
    }

    pub fn auth_state(&self) -> &AuthState {
        &self.auth
    }

    /// Replaces the session and pushes its cookies into the transport.
    ///
    /// Both happen under the same exclusive borrow, so no operation can
    /// observe the new session with the old cookies or the reverse.
    pub fn set_session(&mut self, session: Session) -> &mut Self {
        self.transport.set_cookies(session.cookies());
        tracing::info!(
            "Session set for user {} ({} cookies)",
            session.user_id().unwrap_or("unknown"),
            session.cookies().len()
        );
        self.auth = AuthState::Authenticated(session);
        self
    }

    /// Sets the result mode: `true` for normalized, `false` for raw.
    pub fn set_mode(&mut self, normalized: bool) -> &mut Self {
        self.mode = ResultMode::from(normalized);
        self
    }

    /// Returns `true` in normalized mode.
    pub fn mode(&self) -> bool {
        self.mode.into()
    }

    pub fn result_mode(&self) -> ResultMode {
        self.mode
    }

    /// Routes subsequent requests through a proxy.
    ///
    /// The cookie store and the session are left alone. A malformed URI
    /// fails with [`Error::InvalidConfiguration`] and changes nothing.
    pub fn set_proxy_uri(&mut self, uri: &str) -> Result<&mut Self> {
        self.transport.options_mut().add_proxy_uri(uri)?;
        tracing::info!("Proxy updated");
        Ok(self)
    }

    /// Fails with [`Error::NotAuthenticated`] unless a session is present.
    ///
    /// Pure check: no I/O and no side effects.
    pub fn check_prerequisites(&self) -> Result<()> {
        if !self.is_session_available() {
            return Err(Error::NotAuthenticated);
        }
        Ok(())
    }

    pub fn is_session_available(&self) -> bool {
        self.auth.is_authenticated()
    }

    pub fn device(&self) -> &DeviceIdentity {
        &self.device
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Bind any feature module to this client
    pub fn capability<'a, C: Capability<'a, T>>(&'a self) -> C {
        C::bind(self)
    }

    pub fn discover(&self) -> Discover<'_, T> {
        self.capability()
    }

    pub fn general(&self) -> General<'_, T> {
        self.capability()
    }

    pub fn user(&self) -> Users<'_, T> {
        self.capability()
    }

    pub fn direct(&self) -> Direct<'_, T> {
        self.capability()
    }

    pub fn search(&self) -> Search<'_, T> {
        self.capability()
    }

    pub fn feed(&self) -> Feed<'_, T> {
        self.capability()
    }

    pub fn friendships(&self) -> Friendships<'_, T> {
        self.capability()
    }

    pub fn media(&self) -> Media<'_, T> {
        self.capability()
    }

    /// Start a request scoped by the device identity and the session
    pub(crate) fn request(&self, method: Method, path: impl Into<String>) -> Request {
        let mut request = Request::new(method, path)
            .header("User-Agent", self.device.user_agent())
            .header("X-IG-Device-ID", self.device.uuid().to_string())
            .header("X-IG-Android-ID", self.device.device_id())
            .header("X-IG-App-Locale", self.device.locale());

        if let Some(session) = self.auth.session() {
            if let Some(csrf) = session.csrf_token() {
                request = request.header("X-CSRFToken", csrf);
            }
            if let Some(user_id) = session.user_id() {
                request = request.header("IG-U-DS-USER-ID", user_id);
            }
        }

        request
    }

    /// Start a mutating request carrying the standard form fields
    pub(crate) fn post(&self, path: impl Into<String>) -> Request {
        let mut request = self
            .request(Method::Post, path)
            .form("_uuid", self.device.uuid().to_string());

        if let Some(session) = self.auth.session() {
            if let Some(user_id) = session.user_id() {
                request = request.form("_uid", user_id);
            }
            if let Some(csrf) = session.csrf_token() {
                request = request.form("_csrftoken", csrf);
            }
        }

        request
    }

    /// Send a request for `feature` and shape the response by the current
    /// result mode
    pub(crate) async fn execute<N: DeserializeOwned>(
        &self,
        feature: &'static str,
        request: Request,
    ) -> Result<Outcome<N>> {
        tracing::debug!(feature, "Dispatching {:?} {}", request.method, request.path);
        let response = self.transport.send(request).await?;

        match self.mode {
            ResultMode::Normalized => features::decode(&response)
                .map(Outcome::Normalized)
                .inspect_err(|e| tracing::warn!(feature, "Could not decode response: {}", e)),
            ResultMode::Raw => Ok(Outcome::Raw(response)),
        }
    }
}
