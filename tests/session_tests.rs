//! Session and login tests for whistle-rs
//!
//! These run against a local mock server and need no credentials.
//!
//! Run with: cargo test --test session_tests

use std::sync::Once;
use std::time::Duration;

use serde_json::json;
use tracing_subscriber::EnvFilter;
use url::Url;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use whistle_rs::prelude::*;

static INIT: Once = Once::new();

/// Initialize logging for tests
fn init_logging() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .try_init()
            .ok();
    });
}

/// Build a client pointed at the mock server
fn client_for(server: &MockServer, session: Session) -> WhistleClient {
    init_logging();
    let config = ClientConfig::default().with_base_url(Url::parse(&server.uri()).unwrap());
    WhistleClient::with_config(session, config).unwrap()
}

fn bearer_login_body() -> serde_json::Value {
    json!({
        "auth_token": "new-tok",
        "refresh_token": "refresh-abc",
        "user": {
            "id": 42,
            "email": "owner@example.com",
            "first_name": "Pat"
        }
    })
}

async fn mount_pets(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/api/pets"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "pets": [] })))
        .mount(server)
        .await;
}

// ============================================================================
// PRESET CREDENTIALS
// ============================================================================

mod preset_tests {
    use super::*;

    #[tokio::test]
    async fn test_bearer_session_never_logs_in() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/login"))
            .respond_with(ResponseTemplate::new(201).set_body_json(bearer_login_body()))
            .expect(0)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/pets"))
            .and(header("authorization", "Bearer tok-xyz"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "pets": [] })))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server, Session::from_bearer("tok-xyz").unwrap());
        assert!(client.session().is_authenticated());

        let pets = client.pets().list().await.unwrap();
        assert!(pets.is_empty());
    }

    #[tokio::test]
    async fn test_token_session_never_logs_in() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/tokens"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;
        mount_pets(&server).await;

        let client = client_for(&server, Session::from_token("abc123").unwrap());
        client.authorize().await.unwrap();
        client.pets().list().await.unwrap();
    }
}

// ============================================================================
// BEARER LOGIN
// ============================================================================

mod bearer_login_tests {
    use super::*;

    #[tokio::test]
    async fn test_login_once_then_reuse() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/login"))
            .and(body_json(json!({
                "email": "owner@example.com",
                "password": "hunter2"
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(bearer_login_body()))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/pets"))
            .and(header("authorization", "Bearer new-tok"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "pets": [] })))
            .expect(2)
            .mount(&server)
            .await;

        let session = Session::from_credentials("owner@example.com", "hunter2").unwrap();
        let client = client_for(&server, session);
        assert!(!client.session().is_authenticated());

        client.pets().list().await.unwrap();
        client.pets().list().await.unwrap();

        assert!(client.session().is_authenticated());
    }

    #[tokio::test]
    async fn test_login_request_carries_no_authorization() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/login"))
            .respond_with(ResponseTemplate::new(201).set_body_json(bearer_login_body()))
            .mount(&server)
            .await;

        let session = Session::from_credentials("owner@example.com", "hunter2").unwrap();
        let client = client_for(&server, session);
        client.authorize().await.unwrap();

        let requests = server.received_requests().await.unwrap();
        assert_eq!(requests.len(), 1);
        let login = &requests[0];
        assert!(login.headers.get("authorization").is_none());
        assert!(login.headers.get("x-whistle-authtoken").is_none());
        assert_eq!(
            login.headers.get("accept").unwrap(),
            "application/vnd.whistle.com.v4+json"
        );
    }

    #[tokio::test]
    async fn test_concurrent_first_use_logs_in_once() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/login"))
            .respond_with(
                ResponseTemplate::new(201)
                    .set_body_json(bearer_login_body())
                    .set_delay(Duration::from_millis(200)),
            )
            .expect(1)
            .mount(&server)
            .await;
        mount_pets(&server).await;

        let session = Session::from_credentials("owner@example.com", "hunter2").unwrap();
        let client = client_for(&server, session);
        let other = client.clone();

        let pets = client.pets();
        let other_pets = other.pets();
        let (a, b) = tokio::join!(pets.list(), other_pets.list());
        assert!(a.is_ok());
        assert!(b.is_ok());
    }

    #[tokio::test]
    async fn test_refresh_token_and_user_exposed() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/login"))
            .respond_with(ResponseTemplate::new(201).set_body_json(bearer_login_body()))
            .mount(&server)
            .await;

        let session = Session::from_credentials("owner@example.com", "hunter2").unwrap();
        let client = client_for(&server, session);
        assert!(client.session().refresh_token().is_none());

        client.authorize().await.unwrap();

        assert_eq!(
            client.session().refresh_token().as_deref(),
            Some("refresh-abc")
        );
        let user = client.session().user().unwrap();
        assert_eq!(user.id.as_str(), "42");
        assert_eq!(user.first_name, "Pat");
    }

    #[tokio::test]
    async fn test_refresh_token_login() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/login"))
            .and(body_json(json!({
                "email": "owner@example.com",
                "refresh_token": "refresh-abc"
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(bearer_login_body()))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/pets"))
            .and(header("authorization", "Bearer new-tok"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "pets": [] })))
            .expect(1)
            .mount(&server)
            .await;

        let session = Session::from_refresh_token("owner@example.com", "refresh-abc").unwrap();
        let client = client_for(&server, session);
        client.pets().list().await.unwrap();
    }

    #[tokio::test]
    async fn test_wrong_success_status_fails() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/login"))
            .respond_with(ResponseTemplate::new(200).set_body_json(bearer_login_body()))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/pets"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let session = Session::from_credentials("owner@example.com", "hunter2").unwrap();
        let client = client_for(&server, session);

        let err = client.pets().list().await.unwrap_err();
        match err {
            Error::Authentication(message) => assert!(message.contains("200"), "{}", message),
            other => panic!("expected authentication error, got {:?}", other),
        }
        assert!(!client.session().is_authenticated());
    }

    #[tokio::test]
    async fn test_empty_auth_token_fails() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/login"))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "auth_token": "" })))
            .mount(&server)
            .await;

        let session = Session::from_credentials("owner@example.com", "hunter2").unwrap();
        let client = client_for(&server, session);

        let err = client.authorize().await.unwrap_err();
        assert!(err.is_auth_error());
    }

    #[tokio::test]
    async fn test_failed_login_can_be_retried() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/login"))
            .respond_with(ResponseTemplate::new(500))
            .up_to_n_times(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/api/login"))
            .respond_with(ResponseTemplate::new(201).set_body_json(bearer_login_body()))
            .mount(&server)
            .await;

        let session = Session::from_credentials("owner@example.com", "hunter2").unwrap();
        let client = client_for(&server, session);

        assert!(client.authorize().await.is_err());
        assert!(!client.session().is_authenticated());

        client.authorize().await.unwrap();
        assert!(client.session().is_authenticated());
    }

    #[tokio::test]
    async fn test_unreachable_server_is_authentication_error() {
        init_logging();
        let config =
            ClientConfig::default().with_base_url(Url::parse("http://127.0.0.1:1").unwrap());
        let session = Session::from_credentials("owner@example.com", "hunter2").unwrap();
        let client = WhistleClient::with_config(session, config).unwrap();

        let err = client.authorize().await.unwrap_err();
        assert!(matches!(err, Error::Authentication(_)), "{:?}", err);
    }
}

// ============================================================================
// LEGACY TOKEN LOGIN
// ============================================================================

mod legacy_login_tests {
    use super::*;

    #[tokio::test]
    async fn test_legacy_login_sends_token_header() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/tokens"))
            .and(body_json(json!({
                "email": "owner@example.com",
                "password": "hunter2"
            })))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({ "success": true, "token": "legacy-1", "messages": [] })),
            )
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/pets"))
            .and(header("x-whistle-authtoken", "legacy-1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "pets": [] })))
            .expect(1)
            .mount(&server)
            .await;

        let session = Session::from_credentials_legacy("owner@example.com", "hunter2").unwrap();
        let client = client_for(&server, session);
        client.pets().list().await.unwrap();

        assert!(client.session().refresh_token().is_none());
    }

    #[tokio::test]
    async fn test_legacy_login_error_status() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/tokens"))
            .respond_with(
                ResponseTemplate::new(401).set_body_json(json!({ "error": "Unauthorized" })),
            )
            .expect(1)
            .mount(&server)
            .await;

        let session = Session::from_credentials_legacy("owner@example.com", "hunter2").unwrap();
        let client = client_for(&server, session);

        let err = client.authorize().await.unwrap_err();
        match err {
            Error::Authentication(message) => assert!(message.contains("401"), "{}", message),
            other => panic!("expected authentication error, got {:?}", other),
        }
        assert!(!client.session().is_authenticated());
    }

    #[tokio::test]
    async fn test_legacy_login_missing_token() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/tokens"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": true })))
            .mount(&server)
            .await;

        let session = Session::from_credentials_legacy("owner@example.com", "hunter2").unwrap();
        let client = client_for(&server, session);

        let err = client.authorize().await.unwrap_err();
        assert!(matches!(err, Error::Authentication(_)), "{:?}", err);
    }

    #[tokio::test]
    async fn test_legacy_login_empty_token() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/tokens"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({ "success": true, "token": "  " })),
            )
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/pets"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let session = Session::from_credentials_legacy("owner@example.com", "hunter2").unwrap();
        let client = client_for(&server, session);

        let err = client.pets().list().await.unwrap_err();
        assert!(matches!(err, Error::Authentication(_)), "{:?}", err);
        assert!(!client.session().is_authenticated());
    }

    #[tokio::test]
    async fn test_legacy_login_refused() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/tokens"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": false,
                "token": "",
                "messages": ["Invalid email or password"]
            })))
            .mount(&server)
            .await;

        let session = Session::from_credentials_legacy("owner@example.com", "wrong").unwrap();
        let client = client_for(&server, session);

        let err = client.authorize().await.unwrap_err();
        match err {
            Error::Authentication(message) => {
                assert!(message.contains("Invalid email or password"), "{}", message)
            }
            other => panic!("expected authentication error, got {:?}", other),
        }
    }
}
