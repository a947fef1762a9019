use std::sync::Arc;

use crate::model::Bind;
use crate::types::{HttpMethod, LoginAcceptParams, RejectParams};

use super::helpers;
use super::test_http_client::{TestHttpClient, TestHttpReqRes};

#[tokio::test]
async fn fetches_and_accepts_a_login_request() {
    let http_client = Arc::new(
        TestHttpClient::new()
            .add(
                TestHttpReqRes::new("http://localhost:4445/oauth2/auth/requests/login/abc123")
                    .set_response_body(helpers::login_payload("abc123").to_string()),
            )
            .add(
                TestHttpReqRes::new(
                    "http://localhost:4445/oauth2/auth/requests/login/abc123/accept",
                )
                .assert_request_method(HttpMethod::PUT)
                .assert_request_body(r#"{"subject":"user-1","remember":false}"#)
                .set_response_body(
                    r#"{"redirect_to":"http://localhost:4444/oauth2/auth?login_verifier=v1"}"#,
                ),
            ),
    );
    let admin = helpers::admin(http_client.clone());

    let login = admin.login_request("abc123").await.unwrap();

    assert_eq!("abc123", login.challenge);
    assert!(!login.skip);
    assert_eq!("session-1", login.session_id);
    assert_eq!(vec!["openid", "offline"], login.requested_scope);
    assert_eq!("client-1", login.client.client_id);
    assert!(login.client.binding().is_bound());

    let redirect_to = login.accept(LoginAcceptParams::subject("user-1")).await.unwrap();

    assert_eq!(
        "http://localhost:4444/oauth2/auth?login_verifier=v1",
        redirect_to
    );
    http_client.assert();
}

#[tokio::test]
async fn accept_sends_only_supplied_fields() {
    let http_client = Arc::new(
        TestHttpClient::new()
            .add(
                TestHttpReqRes::new("http://localhost:4445/oauth2/auth/requests/login/abc123")
                    .set_response_body(helpers::login_payload("abc123").to_string()),
            )
            .add(
                TestHttpReqRes::new(
                    "http://localhost:4445/oauth2/auth/requests/login/abc123/accept",
                )
                .assert_request_method(HttpMethod::PUT)
                .assert_request_body(
                    r#"{"subject":"user-1","acr":"level2","remember":true,"remember_for":3600}"#,
                )
                .set_response_body(
                    r#"{"redirect_to":"http://localhost:4444/oauth2/auth?login_verifier=v2"}"#,
                ),
            ),
    );
    let admin = helpers::admin(http_client.clone());

    let login = admin.login_request("abc123").await.unwrap();
    let params = LoginAcceptParams {
        acr: Some("level2".to_string()),
        remember: true,
        remember_for: Some(3600),
        ..LoginAcceptParams::subject("user-1")
    };
    login.accept(params).await.unwrap();

    http_client.assert();
}

#[tokio::test]
async fn rejects_a_login_request() {
    let http_client = Arc::new(
        TestHttpClient::new()
            .add(
                TestHttpReqRes::new("http://localhost:4445/oauth2/auth/requests/login/abc123")
                    .set_response_body(helpers::login_payload("abc123").to_string()),
            )
            .add(
                TestHttpReqRes::new(
                    "http://localhost:4445/oauth2/auth/requests/login/abc123/reject",
                )
                .assert_request_method(HttpMethod::PUT)
                .assert_request_body(
                    r#"{"error":"access_denied","error_description":"user denied the login"}"#,
                )
                .set_response_body(
                    r#"{"redirect_to":"http://localhost:4444/oauth2/auth?error=access_denied"}"#,
                ),
            ),
    );
    let admin = helpers::admin(http_client.clone());

    let login = admin.login_request("abc123").await.unwrap();
    let redirect_to = login
        .reject(RejectParams::error("access_denied", "user denied the login"))
        .await
        .unwrap();

    assert_eq!(
        "http://localhost:4444/oauth2/auth?error=access_denied",
        redirect_to
    );
    http_client.assert();
}

#[tokio::test]
async fn invalidates_login_sessions_by_subject() {
    let http_client = Arc::new(
        TestHttpReqRes::new("http://localhost:4445/oauth2/auth/sessions/login?subject=user-1")
            .assert_request_method(HttpMethod::DELETE)
            .set_response_status_code(204)
            .build(),
    );
    let admin = helpers::admin(http_client.clone());

    admin.invalidate_login_sessions("user-1").await.unwrap();

    http_client.assert();
}
