//! # Inventory Client
//!
//! Fridge inventory items for the logged-in user, consumed by the expiry
//! alert feed and the fridge view. Listing requires identity - the
//! endpoint is scoped to a user.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use kitchenhub_core::{ItemId, Session, UserId};

use crate::error::HubApiError;

/// A tracked quantity of an ingredient in the fridge.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    #[serde(default)]
    pub id: Option<ItemId>,
    #[serde(default)]
    pub ingredient_name: String,
    #[serde(default)]
    pub quantity: Option<String>,
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub storage_location: Option<String>,
    /// ISO 8601 date; absent items never alert.
    #[serde(default)]
    pub expiration_date: Option<NaiveDate>,
}

/// Client for inventory endpoints.
#[derive(Debug, Clone)]
pub struct InventoryClient {
    http: reqwest::Client,
    base_url: url::Url,
}

impl InventoryClient {
    pub(crate) fn new(http: reqwest::Client, base_url: url::Url) -> Self {
        Self { http, base_url }
    }

    /// List a user's inventory. Requires a logged-in session.
    ///
    /// Calls `GET {base}/inventory/user/{id}`.
    pub async fn list_for_user(
        &self,
        session: &Session,
        user_id: UserId,
    ) -> Result<Vec<InventoryItem>, HubApiError> {
        crate::require_token(session, "list inventory")?;

        let endpoint = format!("GET /inventory/user/{user_id}");
        let url = crate::join_url(&self.base_url, &format!("inventory/user/{user_id}"));

        let resp = crate::retry::retry_send(|| {
            crate::authorize(self.http.get(&url), session).send()
        })
        .await
        .map_err(|e| HubApiError::Http {
            endpoint: endpoint.clone(),
            source: e,
        })?;

        let resp = crate::expect_success(resp, &endpoint).await?;

        resp.json().await.map_err(|e| HubApiError::Deserialization {
            endpoint,
            source: e,
        })
    }
}
