//! reqwest-backed transport

use super::{Method, Request, Response, Transport, TransportOptions};
use crate::{Error, Result, session::CookieSet};
use async_trait::async_trait;
use reqwest::{Client, cookie::Jar};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Client built for a specific options snapshot
#[derive(Debug)]
struct CachedClient {
    options: TransportOptions,
    client: Client,
}

/// HTTP transport using reqwest
///
/// The cookie jar is shared with every `reqwest::Client` this transport
/// builds, so rebuilding the client after an options change (a new proxy,
/// a different timeout) keeps the authentication cookies intact.
#[derive(Debug)]
pub struct HttpTransport {
    options: TransportOptions,
    cookies: CookieSet,
    jar: Arc<Jar>,
    client: RwLock<Option<CachedClient>>,
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new(TransportOptions::default())
    }
}

impl HttpTransport {
    /// Create a transport with the given options
    pub fn new(options: TransportOptions) -> Self {
        Self {
            options,
            cookies: CookieSet::new(),
            jar: Arc::new(Jar::default()),
            client: RwLock::new(None),
        }
    }

    /// Return a client matching the current options, building one if needed
    async fn client(&self) -> Result<Client> {
        {
            let cache = self.client.read().await;
            if let Some(cached) = cache.as_ref()
                && cached.options == self.options
            {
                return Ok(cached.client.clone());
            }
        }

        let client = self.build_client()?;
        let mut cache = self.client.write().await;
        *cache = Some(CachedClient {
            options: self.options.clone(),
            client: client.clone(),
        });

        Ok(client)
    }

    fn build_client(&self) -> Result<Client> {
        let mut builder = Client::builder()
            .cookie_provider(Arc::clone(&self.jar))
            .timeout(self.options.timeout());

        if let Some(proxy) = self.options.proxy() {
            tracing::debug!("Building HTTP client with proxy {}", proxy.host_str().unwrap_or(""));
            let proxy = reqwest::Proxy::all(proxy.as_str())
                .map_err(|e| Error::invalid_configuration(format!("proxy rejected: {e}")))?;
            builder = builder.proxy(proxy);
        } else {
            builder = builder.no_proxy();
        }

        Ok(builder.build()?)
    }
}

#[async_trait]
impl Transport for HttpTransport {
    fn set_cookies(&mut self, cookies: &CookieSet) {
        let jar = Jar::default();
        for cookie in cookies.iter() {
            jar.add_cookie_str(&cookie.to_set_cookie(), self.options.base_url());
        }

        self.jar = Arc::new(jar);
        self.cookies = cookies.clone();
        // The cached client still points at the previous jar
        *self.client.get_mut() = None;
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
        let client = self.client().await?;
        let url = self
            .options
            .base_url()
            .join(&request.path)
            .map_err(|e| Error::invalid_argument("path", e.to_string()))?;

        tracing::debug!("{:?} {}", request.method, url.path());

        let mut builder = match request.method {
            Method::Get => client.get(url),
            Method::Post => client.post(url),
        };
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if !request.form.is_empty() {
            builder = builder.form(&request.form);
        }
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }

        let response = builder.send().await?;
        let status = response.status();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.as_str().to_string(), v.to_string()))
            })
            .collect();
        let body = response.text().await?;

        if !status.is_success() {
            tracing::warn!("Request to {} failed with status {}", request.path, status);
            return Err(Error::http_status(status.as_u16(), body));
        }

        Ok(Response {
            status: status.as_u16(),
            headers,
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::cookie::CookieStore;
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{body_string_contains, header, method, path, query_param},
    };

    async fn transport_for(server: &MockServer) -> HttpTransport {
        let mut options = TransportOptions::new();
        options
            .set_base_url(&format!("{}/api/v1/", server.uri()))
            .unwrap();
        HttpTransport::new(options)
    }

    #[test]
    fn test_set_cookies_fills_jar() {
        let mut transport = HttpTransport::default();
        transport.set_cookies(&CookieSet::from_pairs([("sessionid", "abc")]));

        let header = transport.jar.cookies(transport.options.base_url()).unwrap();
        assert_eq!(header.to_str().unwrap(), "sessionid=abc");
        assert_eq!(transport.cookies().value("sessionid"), Some("abc"));
    }

    #[test]
    fn test_set_cookies_replaces_previous_cookies() {
        let mut transport = HttpTransport::default();
        transport.set_cookies(&CookieSet::from_pairs([("sessionid", "first")]));
        transport.set_cookies(&CookieSet::from_pairs([("sessionid", "second")]));

        let header = transport.jar.cookies(transport.options.base_url()).unwrap();
        assert_eq!(header.to_str().unwrap(), "sessionid=second");
    }

    #[tokio::test]
    async fn test_proxy_change_keeps_jar() {
        let mut transport = HttpTransport::default();
        transport.set_cookies(&CookieSet::from_pairs([("sessionid", "abc")]));
        let jar_before = Arc::clone(&transport.jar);

        transport
            .options_mut()
            .add_proxy_uri("http://proxy.local:8080")
            .unwrap();
        transport.client().await.unwrap();

        assert!(Arc::ptr_eq(&jar_before, &transport.jar));
        assert_eq!(transport.cookies().len(), 1);
    }

    #[tokio::test]
    async fn test_client_rebuilt_on_options_change() {
        let mut transport = HttpTransport::default();
        transport.client().await.unwrap();

        transport
            .options_mut()
            .set_timeout(std::time::Duration::from_secs(5));
        transport.client().await.unwrap();

        let cache = transport.client.read().await;
        assert_eq!(
            cache.as_ref().unwrap().options.timeout(),
            std::time::Duration::from_secs(5)
        );
    }

    #[tokio::test]
    async fn test_send_get_with_cookies() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/users/search/"))
            .and(query_param("q", "rust"))
            .and(header("cookie", "sessionid=abc"))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"status":"ok"}"#))
            .expect(1)
            .mount(&server)
            .await;

        let mut transport = transport_for(&server).await;
        transport.set_cookies(&CookieSet::from_pairs([("sessionid", "abc")]));

        let response = transport
            .send(Request::get("users/search/").query("q", "rust"))
            .await
            .unwrap();

        assert_eq!(response.status, 200);
        assert_eq!(response.body, r#"{"status":"ok"}"#);
    }

    #[tokio::test]
    async fn test_send_post_form() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v1/media/1_2/comment/"))
            .and(body_string_contains("comment_text=hello"))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"status":"ok"}"#))
            .expect(1)
            .mount(&server)
            .await;

        let transport = transport_for(&server).await;
        let response = transport
            .send(Request::post("media/1_2/comment/").form("comment_text", "hello"))
            .await
            .unwrap();

        assert!(response.is_success());
    }

    #[tokio::test]
    async fn test_send_error_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(403).set_body_string(r#"{"message":"login_required"}"#),
            )
            .mount(&server)
            .await;

        let transport = transport_for(&server).await;
        let err = transport
            .send(Request::get("feed/timeline/"))
            .await
            .unwrap_err();

        match err {
            Error::HttpStatus { status, body } => {
                assert_eq!(status, 403);
                assert!(body.contains("login_required"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_send_connection_failure() {
        let mut options = TransportOptions::new();
        options.set_base_url("http://127.0.0.1:9/").unwrap();
        let transport = HttpTransport::new(options);

        let err = transport.send(Request::get("ping/")).await.unwrap_err();
        assert!(matches!(err, Error::Network(_)));
        assert!(err.is_transport());
    }
}
