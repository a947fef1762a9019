use std::sync::Arc;

use serde_json::{json, Value};

use crate::admin::HydraAdmin;

use super::test_http_client::TestHttpClient;

pub const BASE_URL: &str = "http://localhost:4445";

pub fn admin(http_client: Arc<TestHttpClient>) -> HydraAdmin {
    HydraAdmin::with_session(BASE_URL, http_client).unwrap()
}

pub fn client_payload(client_id: &str, client_name: &str) -> Value {
    json!({
        "allowed_cors_origins": [],
        "audience": [],
        "client_id": client_id,
        "client_name": client_name,
        "client_secret_expires_at": 0,
        "client_uri": "",
        "contacts": [],
        "grant_types": ["authorization_code", "refresh_token"],
        "logo_uri": "",
        "owner": "",
        "policy_uri": "",
        "redirect_uris": ["http://client.example.com/callback"],
        "response_types": ["code"],
        "scope": "openid offline",
        "subject_type": "public",
        "token_endpoint_auth_method": "client_secret_basic",
        "tos_uri": "",
        "updated_at": "2020-03-11T09:58:11Z",
        "userinfo_signed_response_alg": "none"
    })
}

pub fn login_payload(challenge: &str) -> Value {
    json!({
        "challenge": challenge,
        "client": client_payload("client-1", "Example App"),
        "oidc_context": {},
        "request_url": "http://localhost:4444/oauth2/auth?client_id=client-1&response_type=code",
        "requested_access_token_audience": [],
        "requested_scope": ["openid", "offline"],
        "session_id": "session-1",
        "skip": false,
        "subject": ""
    })
}

pub fn consent_payload(challenge: &str) -> Value {
    json!({
        "acr": "",
        "challenge": challenge,
        "client": client_payload("client-1", "Example App"),
        "login_challenge": "abc123",
        "login_session_id": "session-1",
        "oidc_context": {},
        "request_url": "http://localhost:4444/oauth2/auth?client_id=client-1&response_type=code",
        "requested_access_token_audience": [],
        "requested_scope": ["openid", "offline"],
        "skip": false,
        "subject": "user-1"
    })
}

pub fn consent_session_payload(challenge: &str) -> Value {
    json!({
        "consent_request": consent_payload(challenge),
        "grant_access_token_audience": [],
        "grant_scope": ["openid"],
        "remember": true,
        "remember_for": 3600,
        "session": {"access_token": {}, "id_token": {"email": "user@example.com"}}
    })
}

pub fn logout_payload() -> Value {
    json!({
        "request_url": "http://localhost:4444/oauth2/sessions/logout",
        "rp_initiated": true,
        "sid": "session-1",
        "subject": "user-1"
    })
}
