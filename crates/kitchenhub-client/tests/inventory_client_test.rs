//! Contract tests for InventoryClient.

use chrono::NaiveDate;
use kitchenhub_client::{HubApiConfig, HubClient, HubApiError};
use kitchenhub_core::{Session, UserId};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(mock_server: &MockServer) -> HubClient {
    let config = HubApiConfig {
        base_url: mock_server.uri().parse().unwrap(),
        timeout_secs: 5,
    };
    HubClient::new(config).unwrap()
}

#[tokio::test]
async fn lists_user_inventory_with_bearer_token() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/inventory/user/7"))
        .and(header("authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {"id": 1, "ingredientName": "Milk", "expirationDate": "2026-08-29"},
            {"id": 2, "ingredientName": "Salt"}
        ])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let session = Session::authenticated(UserId::new(7), "test-token");
    let items = client
        .inventory()
        .list_for_user(&session, UserId::new(7))
        .await
        .unwrap();

    assert_eq!(items.len(), 2);
    assert_eq!(
        items[0].expiration_date,
        Some(NaiveDate::from_ymd_opt(2026, 8, 29).unwrap())
    );
    assert!(items[1].expiration_date.is_none());
}

#[tokio::test]
async fn anonymous_session_short_circuits_before_any_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/inventory/user/7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let result = client
        .inventory()
        .list_for_user(&Session::anonymous(), UserId::new(7))
        .await;
    assert!(matches!(
        result,
        Err(HubApiError::NotAuthenticated { .. })
    ));
}
