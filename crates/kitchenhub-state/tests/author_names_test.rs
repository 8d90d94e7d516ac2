//! Behavior tests for AuthorDirectory: single-flight lookups, permanent
//! negative caching, and inline-name short-circuits. The `.expect(n)`
//! mounts are the assertion - wiremock verifies call counts on drop.

use std::sync::Arc;

use kitchenhub_client::comments::Comment;
use kitchenhub_client::{HubApiConfig, HubClient};
use kitchenhub_core::{Session, UserId};
use kitchenhub_state::AuthorDirectory;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(mock_server: &MockServer) -> HubClient {
    let config = HubApiConfig {
        base_url: mock_server.uri().parse().unwrap(),
        timeout_secs: 5,
    };
    HubClient::new(config).unwrap()
}

fn comment(id: i64, user_id: Option<i64>, user_name: Option<&str>) -> Comment {
    let mut value = serde_json::json!({"id": id});
    if let Some(uid) = user_id {
        value["userId"] = uid.into();
    }
    if let Some(name) = user_name {
        value["userName"] = name.into();
    }
    serde_json::from_value(value).unwrap()
}

#[tokio::test]
async fn resolves_once_and_serves_from_cache() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users/5"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"username": "alice"})),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let session = Session::anonymous();
    let dir = AuthorDirectory::new();
    let comments = vec![comment(1, Some(5), None), comment(2, Some(5), None)];

    dir.sync(&client, &session, &comments).await;
    assert_eq!(dir.cached(UserId::new(5)), Some(Some("alice".to_string())));
    assert_eq!(dir.label(&comments[0]), "alice");
    assert!(!dir.is_pending(UserId::new(5)));

    // Second pass over the same list: the cache answers, no request.
    dir.sync(&client, &session, &comments).await;
}

#[tokio::test]
async fn failed_lookup_is_cached_negative_and_never_retried() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users/6"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let session = Session::anonymous();
    let dir = AuthorDirectory::new();
    let comments = vec![comment(1, Some(6), None)];

    dir.sync(&client, &session, &comments).await;
    assert_eq!(dir.cached(UserId::new(6)), Some(None));
    assert_eq!(dir.label(&comments[0]), "User #6");

    // Subsequent list changes must not re-request a negative entry.
    dir.sync(&client, &session, &comments).await;
    dir.sync(&client, &session, &comments).await;
}

#[tokio::test]
async fn overlapping_syncs_issue_one_request_per_id() {
    let mock_server = MockServer::start().await;

    // Slow response so both passes overlap while the lookup is in flight.
    Mock::given(method("GET"))
        .and(path("/users/7"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!("bob"))
                .set_delay(std::time::Duration::from_millis(200)),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let session = Session::anonymous();
    let dir = Arc::new(AuthorDirectory::new());
    let comments = vec![comment(1, Some(7), None)];

    tokio::join!(
        dir.sync(&client, &session, &comments),
        dir.sync(&client, &session, &comments),
    );

    assert_eq!(dir.cached(UserId::new(7)), Some(Some("bob".to_string())));
    assert!(!dir.is_pending(UserId::new(7)));
}

#[tokio::test]
async fn inline_names_and_missing_ids_skip_lookup() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!("x")))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let session = Session::anonymous();
    let dir = AuthorDirectory::new();
    let comments = vec![
        comment(1, Some(5), Some("already here")),
        comment(2, None, None),
    ];

    dir.sync(&client, &session, &comments).await;
    assert_eq!(dir.label(&comments[0]), "already here");
    assert_eq!(dir.label(&comments[1]), "User");
}

#[tokio::test]
async fn partial_failure_is_isolated_per_id() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users/8"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!("carol")))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/users/9"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let session = Session::anonymous();
    let dir = AuthorDirectory::new();
    let comments = vec![comment(1, Some(8), None), comment(2, Some(9), None)];

    dir.sync(&client, &session, &comments).await;
    assert_eq!(dir.cached(UserId::new(8)), Some(Some("carol".to_string())));
    assert_eq!(dir.cached(UserId::new(9)), Some(None));
}
