//! Handler tests for sign-up, login and verify.

use super::*;
use crate::domain::ports::{
    IdentityEndpoint, IdentityProviderError, MockIdentityProviderClient, ProviderResponse,
};
use crate::inbound::http::test_utils::{identity_state, send};
use actix_web::http::StatusCode;
use actix_web::http::header::HeaderName;
use actix_web::test;
use rstest::rstest;
use serde_json::{Value, json};

const ACCOUNT: &str = r#"{"localId":"u1","idToken":"tok"}"#;

fn untouched_client() -> MockIdentityProviderClient {
    let mut client = MockIdentityProviderClient::new();
    client.expect_post().times(0);
    client
}

fn client_answering(
    endpoint: IdentityEndpoint,
    response: Result<ProviderResponse, IdentityProviderError>,
) -> MockIdentityProviderClient {
    let mut client = MockIdentityProviderClient::new();
    client
        .expect_post()
        .withf(move |called, _| *called == endpoint)
        .times(1)
        .return_once(move |_, _| response);
    client
}

#[rstest]
#[case::blank_email(json!({ "email": " ", "password": "pw", "tenantId": "t1" }), "email")]
#[case::missing_password(json!({ "email": "a@b.c", "tenantId": "t1" }), "password")]
#[case::blank_tenant(json!({ "email": "a@b.c", "password": "pw", "tenantId": "" }), "tenantId")]
#[actix_web::test]
async fn credential_endpoints_reject_blank_fields_without_provider_calls(
    #[values("/sign-up", "/login")] uri: &str,
    #[case] body: Value,
    #[case] field: &str,
) {
    let res = send(
        identity_state(untouched_client()),
        test::TestRequest::post().uri(uri).set_json(body),
    )
    .await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let payload: Value = test::read_body_json(res).await;
    assert_eq!(payload["details"]["field"], field);
}

#[rstest]
#[case::sign_up("/sign-up", IdentityEndpoint::SignUp)]
#[case::login("/login", IdentityEndpoint::SignInWithPassword)]
#[actix_web::test]
async fn credential_endpoints_return_session(
    #[case] uri: &str,
    #[case] endpoint: IdentityEndpoint,
) {
    let client = client_answering(endpoint, Ok(ProviderResponse::new(200, ACCOUNT)));

    let res = send(
        identity_state(client),
        test::TestRequest::post()
            .uri(uri)
            .set_json(json!({ "email": "ada@example.com", "password": "pw", "tenantId": "t1" })),
    )
    .await;

    assert_eq!(res.status(), StatusCode::OK);
    let session: SessionBody = test::read_body_json(res).await;
    assert_eq!(
        session,
        SessionBody {
            user_id: "u1".to_owned(),
            tenant_id: "t1".to_owned(),
            id_token: "tok".to_owned(),
        }
    );
}

#[actix_web::test]
async fn sign_up_forwards_provider_message_as_unauthorized() {
    let client = client_answering(
        IdentityEndpoint::SignUp,
        Ok(ProviderResponse::new(
            400,
            r#"{"error":{"message":"EMAIL_EXISTS"}}"#,
        )),
    );

    let res = send(
        identity_state(client),
        test::TestRequest::post()
            .uri("/sign-up")
            .set_json(json!({ "email": "ada@example.com", "password": "pw", "tenantId": "t1" })),
    )
    .await;

    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    let payload: Value = test::read_body_json(res).await;
    assert!(
        payload["message"]
            .as_str()
            .is_some_and(|m| m.contains("EMAIL_EXISTS"))
    );
}

#[actix_web::test]
async fn login_refusal_is_unauthorized() {
    let client = client_answering(
        IdentityEndpoint::SignInWithPassword,
        Ok(ProviderResponse::new(401, "")),
    );

    let res = send(
        identity_state(client),
        test::TestRequest::post()
            .uri("/login")
            .set_json(json!({ "email": "ada@example.com", "password": "pw", "tenantId": "t1" })),
    )
    .await;

    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn login_transport_failure_is_service_unavailable() {
    let client = client_answering(
        IdentityEndpoint::SignInWithPassword,
        Err(IdentityProviderError::timeout("30s elapsed")),
    );

    let res = send(
        identity_state(client),
        test::TestRequest::post()
            .uri("/login")
            .set_json(json!({ "email": "ada@example.com", "password": "pw", "tenantId": "t1" })),
    )
    .await;

    assert_eq!(res.status(), StatusCode::SERVICE_UNAVAILABLE);
}

#[rstest]
#[case::missing(None)]
#[case::blank(Some("   "))]
#[actix_web::test]
async fn verify_requires_token_header(#[case] token: Option<&str>) {
    let mut request = test::TestRequest::post().uri("/verify");
    if let Some(token) = token {
        request = request.insert_header(("X-Id-Token", token));
    }

    let res = send(identity_state(untouched_client()), request).await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let payload: Value = test::read_body_json(res).await;
    assert_eq!(payload["message"], "Required header is missing: x-id-token");
}

#[actix_web::test]
async fn verify_returns_plain_text_confirmation() {
    let client = client_answering(
        IdentityEndpoint::Lookup,
        Ok(ProviderResponse::new(200, r#"{"users":[]}"#)),
    );

    let res = send(
        identity_state(client),
        test::TestRequest::post()
            .uri("/verify")
            .insert_header(("X-Id-Token", "tok")),
    )
    .await;

    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(
        res.headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok()),
        Some("text/plain; charset=utf-8")
    );
    let body = test::read_body(res).await;
    assert_eq!(body.as_ref(), VERIFIED_BODY.as_bytes());
}

#[actix_web::test]
async fn verify_reads_configured_header() {
    let client = client_answering(
        IdentityEndpoint::Lookup,
        Ok(ProviderResponse::new(200, "{}")),
    );
    let state = identity_state(client).with_id_token_header(HeaderName::from_static("x-auth"));

    let res = send(
        state,
        test::TestRequest::post()
            .uri("/verify")
            .insert_header(("X-Auth", "tok")),
    )
    .await;

    assert_eq!(res.status(), StatusCode::OK);
}

#[actix_web::test]
async fn verify_reports_provider_status_when_lookup_fails() {
    let client = client_answering(
        IdentityEndpoint::Lookup,
        Ok(ProviderResponse::new(500, "<html>")),
    );

    let res = send(
        identity_state(client),
        test::TestRequest::post()
            .uri("/verify")
            .insert_header(("X-Id-Token", "tok")),
    )
    .await;

    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    let payload: Value = test::read_body_json(res).await;
    assert_eq!(payload["details"]["providerStatus"], 500);
}
