use super::*;
use crate::api::ScriptedTransport;
use crate::config::ApiConfig;
use crate::session::MemorySessionStore;

fn cache(transport: &ScriptedTransport, session: &MemorySessionStore) -> IdentityCache<ScriptedTransport, MemorySessionStore> {
    IdentityCache::new(ApiClient::new(ApiConfig::new(""), transport.clone(), session.clone()))
}

fn identity_json() -> serde_json::Value {
    serde_json::json!({"username": "ada", "email": "ada@example.com", "full_name": "Ada Lovelace"})
}

// =============================================================================
// No session
// =============================================================================

#[tokio::test]
async fn no_session_resolves_to_no_user_without_request() {
    let transport = ScriptedTransport::new().reply_json(200, &identity_json());
    let session = MemorySessionStore::new();
    let result = cache(&transport, &session).fetch_current().await;

    assert_eq!(result, Ok(None));
    assert_eq!(transport.request_count(), 0);
}

// =============================================================================
// With session
// =============================================================================

#[tokio::test]
async fn success_returns_identity_and_keeps_session() {
    let transport = ScriptedTransport::new().reply_json(200, &identity_json());
    let session = MemorySessionStore::with_token("tok");
    let identity = cache(&transport, &session).fetch_current().await.unwrap().unwrap();

    assert_eq!(identity.username, "ada");
    assert!(session.is_present());
    let request = &transport.requests()[0];
    assert_eq!(request.url, "/api/auth/me");
    assert_eq!(request.header("Authorization"), Some("Bearer tok"));
}

#[tokio::test]
async fn unauthorized_clears_session_and_resolves_to_no_user() {
    let transport = ScriptedTransport::new().reply(401, r#"{"detail":"Could not validate credentials"}"#);
    let session = MemorySessionStore::with_token("expired");
    let result = cache(&transport, &session).fetch_current().await;

    assert_eq!(result, Ok(None));
    assert!(!session.is_present());
}

#[tokio::test]
async fn server_error_propagates_and_keeps_session() {
    let transport = ScriptedTransport::new().reply(502, "bad gateway");
    let session = MemorySessionStore::with_token("tok");
    let result = cache(&transport, &session).fetch_current().await;

    assert!(matches!(result, Err(ApiError::Transient(_))));
    assert!(session.is_present());
}

#[tokio::test]
async fn network_failure_propagates_and_keeps_session() {
    let transport = ScriptedTransport::new().fail("timed out");
    let session = MemorySessionStore::with_token("tok");
    let result = cache(&transport, &session).fetch_current().await;

    assert_eq!(result, Err(ApiError::Transient("timed out".to_owned())));
    assert_eq!(session.get().as_deref(), Some("tok"));
}

#[tokio::test]
async fn other_client_errors_propagate_and_keep_session() {
    let transport = ScriptedTransport::new().reply(403, r#"{"detail":"Inactive user"}"#);
    let session = MemorySessionStore::with_token("tok");
    let result = cache(&transport, &session).fetch_current().await;

    assert_eq!(result, Err(ApiError::Validation("Inactive user".to_owned())));
    assert!(session.is_present());
}

#[tokio::test]
async fn every_call_issues_its_own_request() {
    let transport = ScriptedTransport::new()
        .reply_json(200, &identity_json())
        .reply_json(200, &identity_json());
    let session = MemorySessionStore::with_token("tok");
    let cache = cache(&transport, &session);
    cache.fetch_current().await.unwrap();
    cache.fetch_current().await.unwrap();

    assert_eq!(transport.request_count(), 2);
}
