//! Behavior tests for ExpiryAlerts: the [-1, 3] day window, ascending
//! sort, the anonymous-session guard, and keep-previous-feed on failure.

use chrono::NaiveDate;
use kitchenhub_client::{HubApiConfig, HubClient};
use kitchenhub_core::{Session, UserId};
use kitchenhub_state::ExpiryAlerts;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(mock_server: &MockServer) -> HubClient {
    let config = HubApiConfig {
        base_url: mock_server.uri().parse().unwrap(),
        timeout_secs: 5,
    };
    HubClient::new(config).unwrap()
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 8, 26).unwrap()
}

#[tokio::test]
async fn window_boundaries_and_ascending_sort() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/inventory/user/7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {"ingredientName": "Eggs",    "expirationDate": "2026-08-29"}, // +3: in
            {"ingredientName": "Butter",  "expirationDate": "2026-08-30"}, // +4: out
            {"ingredientName": "Milk",    "expirationDate": "2026-08-25"}, // -1: in
            {"ingredientName": "Yogurt",  "expirationDate": "2026-08-24"}, // -2: out
            {"ingredientName": "Spinach", "expirationDate": "2026-08-26"}, //  0: in
            {"ingredientName": "Salt"}                                     // undated: out
        ])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let session = Session::authenticated(UserId::new(7), "test-token");
    let mut alerts = ExpiryAlerts::new();
    alerts.refresh_at(&client, &session, today()).await.unwrap();

    assert_eq!(alerts.badge_count(), 3);
    let names: Vec<&str> = alerts
        .alerts()
        .iter()
        .map(|a| a.ingredient_name.as_str())
        .collect();
    assert_eq!(names, vec!["Milk", "Spinach", "Eggs"]);

    let labels: Vec<String> = alerts.alerts().iter().map(|a| a.label()).collect();
    assert_eq!(labels, vec!["expired", "expires today", "expires in 3 days"]);
}

#[tokio::test]
async fn anonymous_session_sends_no_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let mut alerts = ExpiryAlerts::new();
    alerts
        .refresh_at(&client, &Session::anonymous(), today())
        .await
        .unwrap();
    assert_eq!(alerts.badge_count(), 0);
}

#[tokio::test]
async fn failed_refresh_keeps_previous_feed() {
    let good_server = MockServer::start().await;
    let bad_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/inventory/user/7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {"ingredientName": "Milk", "expirationDate": "2026-08-27"}
        ])))
        .mount(&good_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/inventory/user/7"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&bad_server)
        .await;

    let session = Session::authenticated(UserId::new(7), "test-token");
    let mut alerts = ExpiryAlerts::new();

    alerts
        .refresh_at(&test_client(&good_server), &session, today())
        .await
        .unwrap();
    assert_eq!(alerts.badge_count(), 1);

    let result = alerts
        .refresh_at(&test_client(&bad_server), &session, today())
        .await;
    assert!(result.is_err());
    assert_eq!(alerts.badge_count(), 1, "previous feed must survive a failure");
    assert_eq!(alerts.alerts()[0].ingredient_name, "Milk");
}
