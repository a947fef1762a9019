use std::sync::Arc;

use serde_json::json;

use crate::model::{Bind, Session};
use crate::types::{ConsentAcceptParams, HttpMethod, RejectParams};

use super::helpers;
use super::test_http_client::{TestHttpClient, TestHttpReqRes};

#[tokio::test]
async fn fetches_a_consent_request_with_its_client_bound_below_it() {
    let http_client = Arc::new(
        TestHttpReqRes::new("http://localhost:4445/oauth2/auth/requests/consent/abc456")
            .set_response_body(helpers::consent_payload("abc456").to_string())
            .build(),
    );
    let admin = helpers::admin(http_client.clone());

    let consent = admin.consent_request("abc456").await.unwrap();

    assert_eq!("abc456", consent.challenge);
    assert_eq!("abc123", consent.login_challenge);
    assert_eq!("user-1", consent.subject);
    assert!(!consent.skip);

    // The embedded client is parented to the consent request, not to the
    // facade, while sharing the facade's transport.
    assert_eq!(
        "http://localhost:4445/oauth2/auth/requests/consent/abc456/clients/client-1",
        consent.client.url().unwrap().as_str()
    );
    let transport: Session = http_client.clone();
    assert!(Arc::ptr_eq(
        consent.client.binding().session().unwrap(),
        &transport
    ));
    http_client.assert();
}

#[tokio::test]
async fn accepts_a_consent_request_with_a_sparse_body() {
    let http_client = Arc::new(
        TestHttpClient::new()
            .add(
                TestHttpReqRes::new("http://localhost:4445/oauth2/auth/requests/consent/abc456")
                    .set_response_body(helpers::consent_payload("abc456").to_string()),
            )
            .add(
                TestHttpReqRes::new(
                    "http://localhost:4445/oauth2/auth/requests/consent/abc456/accept",
                )
                .assert_request_method(HttpMethod::PUT)
                .assert_request_body(r#"{"grant_scope":["openid"],"remember":false}"#)
                .set_response_body(
                    r#"{"redirect_to":"http://localhost:4444/oauth2/auth?consent_verifier=v1"}"#,
                ),
            ),
    );
    let admin = helpers::admin(http_client.clone());

    let consent = admin.consent_request("abc456").await.unwrap();
    let params = ConsentAcceptParams {
        grant_scope: Some(vec!["openid".to_string()]),
        ..ConsentAcceptParams::default()
    };
    let redirect_to = consent.accept(params).await.unwrap();

    assert_eq!(
        "http://localhost:4444/oauth2/auth?consent_verifier=v1",
        redirect_to
    );
    http_client.assert();
}

#[tokio::test]
async fn rejects_a_consent_request() {
    let http_client = Arc::new(
        TestHttpClient::new()
            .add(
                TestHttpReqRes::new("http://localhost:4445/oauth2/auth/requests/consent/abc456")
                    .set_response_body(helpers::consent_payload("abc456").to_string()),
            )
            .add(
                TestHttpReqRes::new(
                    "http://localhost:4445/oauth2/auth/requests/consent/abc456/reject",
                )
                .assert_request_method(HttpMethod::PUT)
                .assert_request_body(
                    r#"{"error":"access_denied","error_description":"user denied the consent"}"#,
                )
                .set_response_body(
                    r#"{"redirect_to":"http://localhost:4444/oauth2/auth?error=access_denied"}"#,
                ),
            ),
    );
    let admin = helpers::admin(http_client.clone());

    let consent = admin.consent_request("abc456").await.unwrap();
    let redirect_to = consent
        .reject(RejectParams::error(
            "access_denied",
            "user denied the consent",
        ))
        .await
        .unwrap();

    assert_eq!(
        "http://localhost:4444/oauth2/auth?error=access_denied",
        redirect_to
    );
    http_client.assert();
}

#[tokio::test]
async fn lists_consent_sessions_of_a_subject() {
    let body = json!([
        helpers::consent_session_payload("abc456"),
        helpers::consent_session_payload("def789"),
    ]);
    let http_client = Arc::new(
        TestHttpReqRes::new("http://localhost:4445/oauth2/auth/sessions/consent?subject=user-1")
            .set_response_body(body.to_string())
            .build(),
    );
    let admin = helpers::admin(http_client.clone());

    let sessions = admin.consent_sessions("user-1").await.unwrap();

    assert_eq!(2, sessions.len());
    assert_eq!("abc456", sessions[0].consent_request.challenge);
    assert_eq!("def789", sessions[1].consent_request.challenge);
    assert_eq!(vec!["openid"], sessions[0].grant_scope);
    assert!(sessions[0].remember);
    assert_eq!(3600, sessions[0].remember_for);

    // Every element of the listing is bound, embedded requests included.
    let transport: Session = http_client.clone();
    for session in &sessions {
        assert!(session.binding().is_bound());
        assert!(session.consent_request.binding().is_bound());
        assert!(Arc::ptr_eq(
            session.consent_request.binding().session().unwrap(),
            &transport
        ));
    }
    http_client.assert();
}

#[tokio::test]
async fn revokes_consent_sessions_for_one_client() {
    let http_client = Arc::new(
        TestHttpReqRes::new(
            "http://localhost:4445/oauth2/auth/sessions/consent?subject=user-1&client=client-1",
        )
        .assert_request_method(HttpMethod::DELETE)
        .set_response_status_code(204)
        .build(),
    );
    let admin = helpers::admin(http_client.clone());

    admin
        .revoke_consent_sessions("user-1", Some("client-1"))
        .await
        .unwrap();

    http_client.assert();
}

#[tokio::test]
async fn revokes_all_consent_sessions_of_a_subject() {
    let http_client = Arc::new(
        TestHttpReqRes::new("http://localhost:4445/oauth2/auth/sessions/consent?subject=user-1")
            .assert_request_method(HttpMethod::DELETE)
            .set_response_status_code(204)
            .build(),
    );
    let admin = helpers::admin(http_client.clone());

    admin.revoke_consent_sessions("user-1", None).await.unwrap();

    http_client.assert();
}
