//! # Users Client
//!
//! Display-name resolution for comment authors. The backend is
//! inconsistent about the response shape for `GET /users/{id}`: it has
//! been observed returning a bare JSON string, or an object carrying
//! `username` (sometimes `userName`). This client accepts all three and
//! returns `None` for anything else, leaving retry policy to the caller
//! (`kitchenhub-state::author_names` treats `None` as a permanent
//! negative-cache entry).

use serde_json::Value;

use kitchenhub_core::{Session, UserId};

use crate::error::HubApiError;

/// Client for user endpoints.
#[derive(Debug, Clone)]
pub struct UsersClient {
    http: reqwest::Client,
    base_url: url::Url,
}

impl UsersClient {
    pub(crate) fn new(http: reqwest::Client, base_url: url::Url) -> Self {
        Self { http, base_url }
    }

    /// Resolve a user's display name. Returns `None` when the response
    /// carries no usable name.
    ///
    /// Calls `GET {base}/users/{id}`.
    pub async fn display_name(
        &self,
        session: &Session,
        user_id: UserId,
    ) -> Result<Option<String>, HubApiError> {
        let endpoint = format!("GET /users/{user_id}");
        let url = crate::join_url(&self.base_url, &format!("users/{user_id}"));

        let resp = crate::retry::retry_send(|| {
            crate::authorize(self.http.get(&url), session).send()
        })
        .await
        .map_err(|e| HubApiError::Http {
            endpoint: endpoint.clone(),
            source: e,
        })?;

        let resp = crate::expect_success(resp, &endpoint).await?;

        let value: Value = resp.json().await.map_err(|e| HubApiError::Deserialization {
            endpoint,
            source: e,
        })?;

        Ok(extract_name(&value))
    }
}

/// Pull a non-empty display name out of whichever shape the backend sent.
fn extract_name(value: &Value) -> Option<String> {
    let name = match value {
        Value::String(s) => Some(s.as_str()),
        Value::Object(map) => map
            .get("username")
            .or_else(|| map.get("userName"))
            .and_then(Value::as_str),
        _ => None,
    };
    name.map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}
