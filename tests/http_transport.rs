//! End-to-end requests through the reqwest transport against a mock server

use instagram_client::{Client, Error, Session, Settings, session::CookieSet};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{header, header_exists, method, path, query_param},
};

async fn client_for(server: &MockServer) -> Client {
    let mut settings = Settings::default();
    settings.network.base_url = format!("{}/api/v1/", server.uri());
    Client::from_settings(&settings).unwrap()
}

fn session() -> Session {
    Session::new(CookieSet::from_pairs([
        ("sessionid", "abc"),
        ("csrftoken", "tok"),
    ]))
}

#[tokio::test]
async fn search_users_round_trip() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/users/search/"))
        .and(query_param("q", "rust"))
        .and(header_exists("user-agent"))
        .and(header_exists("x-ig-device-id"))
        .and(header("x-csrftoken", "tok"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{"num_results":1,"users":[{"pk":5,"username":"rustacean"}],"status":"ok"}"#,
        ))
        .expect(1)
        .mount(&server)
        .await;

    let mut client = client_for(&server).await;
    client.set_session(session());

    let result = client.search().users("rust").await.unwrap();
    let search = result.into_normalized().unwrap();

    assert_eq!(search.users[0].pk, "5");
}

#[tokio::test]
async fn session_cookies_reach_the_server() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/news/inbox/"))
        .and(|request: &wiremock::Request| {
            request
                .headers
                .get("cookie")
                .and_then(|value| value.to_str().ok())
                .is_some_and(|value| value.contains("sessionid=abc") && value.contains("csrftoken=tok"))
        })
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"status":"ok"}"#))
        .expect(1)
        .mount(&server)
        .await;

    let mut client = client_for(&server).await;
    client.set_session(session());

    client.general().news_inbox().await.unwrap();
}

#[tokio::test]
async fn raw_mode_returns_body_untouched() {
    let server = MockServer::start().await;
    let body = r#"{"items":[{"id":"1_2"}],"status":"ok"}"#;
    Mock::given(method("GET"))
        .and(path("/api/v1/media/1_2/info/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(&server)
        .await;

    let mut client = client_for(&server).await;
    client.set_session(session()).set_mode(false);

    let result = client.media().info("1_2").await.unwrap();
    let raw = result.into_raw().unwrap();

    assert_eq!(raw.status, 200);
    assert_eq!(raw.body, body);
}

#[tokio::test]
async fn error_status_is_surfaced() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/friendships/create/7/"))
        .respond_with(
            ResponseTemplate::new(429).set_body_string(r#"{"message":"Please wait","status":"fail"}"#),
        )
        .mount(&server)
        .await;

    let mut client = client_for(&server).await;
    client.set_session(session());

    let err = client.friendships().follow("7").await.unwrap_err();
    assert!(matches!(err, Error::HttpStatus { status: 429, .. }));
}

#[tokio::test]
async fn malformed_body_is_a_decoding_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>challenge</html>"))
        .mount(&server)
        .await;

    let mut client = client_for(&server).await;
    client.set_session(session());

    let err = client.feed().user("1", None).await.unwrap_err();
    assert!(matches!(err, Error::Decoding(_)));
}
