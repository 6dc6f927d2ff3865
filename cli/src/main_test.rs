use super::*;
use coursehub::api::{Method, RequestBody, ScriptedTransport};
use coursehub::session::MemorySessionStore;

// =============================================================================
// Helpers
// =============================================================================

fn client(transport: &ScriptedTransport, session: &MemorySessionStore) -> ApiClient<ScriptedTransport, MemorySessionStore> {
    ApiClient::new(ApiConfig::new("http://api.test"), transport.clone(), session.clone())
}

fn command(args: &[&str]) -> Command {
    let argv = std::iter::once("coursehub").chain(args.iter().copied());
    Cli::try_parse_from(argv).unwrap().command
}

fn json_body(body: &RequestBody) -> Value {
    match body {
        RequestBody::Json(text) => serde_json::from_str(text).unwrap(),
        other => panic!("expected JSON body, got {other:?}"),
    }
}

fn course_json(id: &str) -> Value {
    json!({
        "id": id,
        "title": "Bookkeeping Basics",
        "description": "Ledgers, journals and trial balances.",
        "category": "Accounting & Finance",
        "level": "Beginner",
        "duration": 30,
        "credits": 40,
        "rating": 4.5,
        "duration_text": "1 Year",
        "image_url": "/assets/card-image.png",
        "published": true
    })
}

// =============================================================================
// Argument parsing
// =============================================================================

#[test]
fn token_file_flag_overrides_default_location() {
    let cli = Cli::try_parse_from(["coursehub", "--token-file", "/tmp/ch-token", "whoami"]).unwrap();
    assert_eq!(cli.token_file, Some(PathBuf::from("/tmp/ch-token")));
}

#[test]
fn unknown_level_is_rejected_by_parser() {
    let result = Cli::try_parse_from(["coursehub", "courses", "list", "--level", "expert"]);
    assert!(result.is_err());
}

// =============================================================================
// Session commands
// =============================================================================

#[tokio::test]
async fn login_posts_form_and_stores_token() {
    let transport = ScriptedTransport::new().reply_json(200, &json!({"access_token": "jwt-9", "token_type": "bearer"}));
    let session = MemorySessionStore::new();

    let output = run(client(&transport, &session), command(&["login", "--username", "ada", "--password", "pw123456"]))
        .await
        .unwrap();

    assert_eq!(output, json!({"username": "ada", "token_type": "bearer"}));
    assert_eq!(session.get().as_deref(), Some("jwt-9"));
    let request = &transport.requests()[0];
    assert_eq!(request.url, "http://api.test/api/auth/login");
    assert_eq!(request.body, RequestBody::Form("username=ada&password=pw123456".to_owned()));
}

#[tokio::test]
async fn blank_login_is_refused_without_request() {
    let transport = ScriptedTransport::new();
    let session = MemorySessionStore::new();
    let result = run(client(&transport, &session), command(&["login", "--username", " ", "--password", "x"])).await;
    assert!(matches!(result, Err(CliError::Invalid(_))));
    assert_eq!(transport.request_count(), 0);
}

#[tokio::test]
async fn logout_clears_token() {
    let transport = ScriptedTransport::new();
    let session = MemorySessionStore::with_token("jwt");
    run(client(&transport, &session), command(&["logout"])).await.unwrap();
    assert!(!session.is_present());
    assert_eq!(transport.request_count(), 0);
}

#[tokio::test]
async fn whoami_without_session_prints_null() {
    let transport = ScriptedTransport::new();
    let session = MemorySessionStore::new();
    let output = run(client(&transport, &session), command(&["whoami"])).await.unwrap();
    assert_eq!(output, Value::Null);
    assert_eq!(transport.request_count(), 0);
}

#[tokio::test]
async fn whoami_with_rejected_token_clears_it() {
    let transport = ScriptedTransport::new().reply(401, r#"{"detail":"Could not validate credentials"}"#);
    let session = MemorySessionStore::with_token("stale");
    let output = run(client(&transport, &session), command(&["whoami"])).await.unwrap();
    assert_eq!(output, Value::Null);
    assert!(!session.is_present());
}

// =============================================================================
// Course commands
// =============================================================================

#[tokio::test]
async fn list_maps_flags_to_query() {
    let transport = ScriptedTransport::new().reply_json(200, &json!({"items": [], "page": 2, "total_pages": 0}));
    let session = MemorySessionStore::new();
    run(
        client(&transport, &session),
        command(&["courses", "list", "--category", "Design", "--level", "advanced", "--page", "2", "--published", "true"]),
    )
    .await
    .unwrap();

    assert_eq!(
        transport.requests()[0].url,
        "http://api.test/api/courses?category=Design&level=Advanced&page=2&limit=10&published=true"
    );
}

#[tokio::test]
async fn invalid_create_is_refused_without_request() {
    let transport = ScriptedTransport::new();
    let session = MemorySessionStore::with_token("jwt");
    let result = run(
        client(&transport, &session),
        command(&["courses", "create", "--title", "Go", "--description", "short"]),
    )
    .await;

    let Err(CliError::Invalid(message)) = result else {
        panic!("expected validation failure");
    };
    assert!(message.contains("Title must be at least 3 characters"));
    assert!(message.contains("Category is required"));
    assert_eq!(transport.request_count(), 0);
}

#[tokio::test]
async fn create_fills_form_defaults() {
    let transport = ScriptedTransport::new().reply_json(201, &course_json("c-1"));
    let session = MemorySessionStore::with_token("jwt");
    run(
        client(&transport, &session),
        command(&[
            "courses",
            "create",
            "--title",
            "Bookkeeping Basics",
            "--description",
            "Ledgers, journals and trial balances.",
            "--category",
            "Accounting & Finance",
            "--duration",
            "30",
        ]),
    )
    .await
    .unwrap();

    let request = &transport.requests()[0];
    assert_eq!(request.method, Method::Post);
    let body = json_body(&request.body);
    assert_eq!(body["credits"], 40);
    assert_eq!(body["duration_text"], "1 Year");
    assert_eq!(body["level"], "Beginner");
    assert_eq!(body["published"], true);
}

#[tokio::test]
async fn update_keeps_fields_not_given_on_command_line() {
    let transport = ScriptedTransport::new().reply_json(200, &course_json("c-7")).reply_json(200, &course_json("c-7"));
    let session = MemorySessionStore::with_token("jwt");
    run(
        client(&transport, &session),
        command(&["courses", "update", "c-7", "--title", "Advanced Bookkeeping", "--published", "false"]),
    )
    .await
    .unwrap();

    let sent = transport.requests();
    assert_eq!(sent[0].method, Method::Get);
    assert_eq!(sent[1].method, Method::Put);
    assert_eq!(sent[1].url, "http://api.test/api/courses/c-7");
    let body = json_body(&sent[1].body);
    assert_eq!(body["title"], "Advanced Bookkeeping");
    assert_eq!(body["description"], "Ledgers, journals and trial balances.");
    assert_eq!(body["published"], false);
}

#[tokio::test]
async fn delete_reports_removed_id() {
    let transport = ScriptedTransport::new().reply(204, "");
    let session = MemorySessionStore::with_token("jwt");
    let output = run(client(&transport, &session), command(&["courses", "delete", "c-3"])).await.unwrap();
    assert_eq!(output, json!({"deleted": "c-3"}));
    assert_eq!(transport.requests()[0].method, Method::Delete);
}

#[tokio::test]
async fn profile_update_rejects_malformed_email() {
    let transport = ScriptedTransport::new();
    let session = MemorySessionStore::with_token("jwt");
    let result = run(client(&transport, &session), command(&["profile", "update", "--email", "nope"])).await;
    assert!(matches!(result, Err(CliError::Invalid(_))));
    assert_eq!(transport.request_count(), 0);
}
