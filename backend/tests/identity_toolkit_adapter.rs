//! Identity toolkit adapter tests against a mock provider.
//!
//! Requests go through the real reqwest adapter and the identity gateway
//! service so URL shape, query key, payloads and status mapping are covered
//! end to end.

use std::sync::Arc;
use std::time::Duration;

use auth_gateway::domain::ports::{IdentityEndpoint, IdentityGateway, IdentityProviderClient};
use auth_gateway::domain::{ErrorCode, IdToken, IdentityGatewayService, UserCredentials};
use auth_gateway::outbound::identity_toolkit::{IdentityToolkitHttpClient, IdentityToolkitTimeouts};
use reqwest::{Client, Url};
use rstest::rstest;
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const API_KEY: &str = "secret-key";

fn adapter(server: &MockServer, timeouts: IdentityToolkitTimeouts) -> IdentityToolkitHttpClient {
    let base = Url::parse(&format!("{}/v1", server.uri())).expect("mock server url");
    IdentityToolkitHttpClient::new(Client::new(), base, API_KEY, timeouts)
}

fn gateway(server: &MockServer) -> IdentityGatewayService<IdentityToolkitHttpClient> {
    IdentityGatewayService::new(Arc::new(adapter(server, IdentityToolkitTimeouts::default())))
}

fn credentials() -> UserCredentials {
    UserCredentials::try_from_parts("ada@example.com", "pw", "t1").expect("valid credentials")
}

#[tokio::test]
async fn sign_up_posts_credentials_with_api_key() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/accounts:signUp"))
        .and(query_param("key", API_KEY))
        .and(body_json(json!({
            "email": "ada@example.com",
            "password": "pw",
            "tenantId": "t1",
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "localId": "u1", "idToken": "tok" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let session = gateway(&server)
        .sign_up(&credentials())
        .await
        .expect("session");

    assert_eq!(session.user_id(), "u1");
    assert_eq!(session.tenant_id().as_ref(), "t1");
    assert_eq!(session.id_token().expose(), "tok");
}

#[tokio::test]
async fn sign_up_forwards_provider_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/accounts:signUp"))
        .respond_with(
            ResponseTemplate::new(400)
                .set_body_json(json!({ "error": { "code": 400, "message": "EMAIL_EXISTS" } })),
        )
        .mount(&server)
        .await;

    let err = gateway(&server)
        .sign_up(&credentials())
        .await
        .expect_err("rejection");

    assert_eq!(err.code(), ErrorCode::Unauthorized);
    assert!(err.message().contains("EMAIL_EXISTS"));
}

#[rstest]
#[case::unauthorised(401)]
#[case::bad_request(400)]
#[case::server_error(500)]
#[tokio::test]
async fn login_collapses_refusals_to_none(#[case] status: u16) {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/accounts:signInWithPassword"))
        .and(query_param("key", API_KEY))
        .respond_with(ResponseTemplate::new(status).set_body_string("nope"))
        .expect(1)
        .mount(&server)
        .await;

    let outcome = gateway(&server).login(&credentials()).await.expect("outcome");

    assert!(outcome.is_none());
}

#[tokio::test]
async fn verify_posts_token_to_lookup() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/accounts:lookup"))
        .and(query_param("key", API_KEY))
        .and(body_json(json!({ "idToken": "tok" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "users": [] })))
        .expect(1)
        .mount(&server)
        .await;

    let token = IdToken::new("tok").expect("token");
    gateway(&server).verify(&token).await.expect("verified");
}

#[tokio::test]
async fn verify_reports_status_for_unparseable_failure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/accounts:lookup"))
        .respond_with(ResponseTemplate::new(500).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let token = IdToken::new("tok").expect("token");
    let err = gateway(&server).verify(&token).await.expect_err("refusal");

    assert_eq!(err.code(), ErrorCode::Unauthorized);
    assert_eq!(
        err.details().and_then(|d| d.get("providerStatus")),
        Some(&json!(500))
    );
}

#[tokio::test]
async fn slow_provider_times_out_without_leaking_the_key() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/accounts:lookup"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(2)))
        .mount(&server)
        .await;
    let timeouts = IdentityToolkitTimeouts {
        lookup: Duration::from_millis(100),
        ..IdentityToolkitTimeouts::default()
    };

    let err = adapter(&server, timeouts)
        .post(IdentityEndpoint::Lookup, &json!({ "idToken": "tok" }))
        .await
        .expect_err("timeout");

    assert!(err.to_string().contains("timed out"));
    assert!(!err.to_string().contains(API_KEY));
}

#[tokio::test]
async fn unreachable_provider_is_service_unavailable() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind probe socket");
    let addr = listener.local_addr().expect("probe address");
    drop(listener);
    let base = Url::parse(&format!("http://{addr}/v1")).expect("closed port url");
    let client = IdentityToolkitHttpClient::new(
        Client::new(),
        base,
        API_KEY,
        IdentityToolkitTimeouts::default(),
    );

    let err = IdentityGatewayService::new(Arc::new(client))
        .login(&credentials())
        .await
        .expect_err("transport failure");

    assert_eq!(err.code(), ErrorCode::ServiceUnavailable);
}
