//! # kitchenhub-client -- Typed Rust client for the KitchenHub REST API
//!
//! Provides ergonomic, typed access to the KitchenHub backend (a Spring
//! Boot service):
//! - **Recipes** -- detail, meal-type listing, similar-recipe ranking
//! - **Comments** -- list/create/update/delete plus media upload
//! - **Users** -- display-name resolution
//! - **Inventory** -- fridge items for expiry alerts
//!
//! ## Identity
//!
//! Every call takes an explicit [`Session`] (the injected identity
//! context). The bearer token is attached when present; operations that
//! require identity return [`HubApiError::NotAuthenticated`] before any
//! request is sent when it is absent. The client never reads ambient
//! storage.
//!
//! ## Pagination caveat
//!
//! The backend nominally accepts `page`/`size` on the comment listing but
//! has been observed ignoring them and returning the full set. Callers
//! must treat the response as the complete list (see
//! `kitchenhub-state::comment_feed`).

pub mod comments;
pub mod config;
pub mod error;
pub mod inventory;
pub mod recipes;
pub(crate) mod retry;
pub mod users;

pub use config::HubApiConfig;
pub use error::HubApiError;

use std::time::Duration;

use kitchenhub_core::Session;

/// Top-level KitchenHub API client. Holds sub-clients for each resource.
#[derive(Debug, Clone)]
pub struct HubClient {
    recipes: recipes::RecipesClient,
    comments: comments::CommentsClient,
    users: users::UsersClient,
    inventory: inventory::InventoryClient,
}

impl HubClient {
    /// Create a new KitchenHub API client from configuration.
    pub fn new(config: HubApiConfig) -> Result<Self, HubApiError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| HubApiError::Http {
                endpoint: "client_init".into(),
                source: e,
            })?;

        Ok(Self {
            recipes: recipes::RecipesClient::new(http.clone(), config.base_url.clone()),
            comments: comments::CommentsClient::new(http.clone(), config.base_url.clone()),
            users: users::UsersClient::new(http.clone(), config.base_url.clone()),
            inventory: inventory::InventoryClient::new(http, config.base_url),
        })
    }

    /// Access the recipes client.
    pub fn recipes(&self) -> &recipes::RecipesClient {
        &self.recipes
    }

    /// Access the comments client.
    pub fn comments(&self) -> &comments::CommentsClient {
        &self.comments
    }

    /// Access the users client.
    pub fn users(&self) -> &users::UsersClient {
        &self.users
    }

    /// Access the inventory client.
    pub fn inventory(&self) -> &inventory::InventoryClient {
        &self.inventory
    }
}

// -- Shared request plumbing --------------------------------------------------

/// Join a resource path onto the configured base URL. The base may or may
/// not carry a trailing slash; the path never starts with one.
pub(crate) fn join_url(base: &url::Url, path: &str) -> String {
    format!(
        "{}/{}",
        base.as_str().trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Attach the session's bearer token when present. Reads go out
/// unauthenticated when there is no token; writes gate on
/// [`require_token`] first.
pub(crate) fn authorize(
    rb: reqwest::RequestBuilder,
    session: &Session,
) -> reqwest::RequestBuilder {
    match session.token() {
        Some(token) => rb.bearer_auth(token),
        None => rb,
    }
}

/// Short-circuit guard for identity-requiring operations: no token means
/// no request is sent at all.
pub(crate) fn require_token<'s>(
    session: &'s Session,
    operation: &'static str,
) -> Result<&'s str, HubApiError> {
    session
        .token()
        .ok_or(HubApiError::NotAuthenticated { operation })
}

/// Map a non-2xx response into [`HubApiError::Api`], passing 2xx through.
pub(crate) async fn expect_success(
    resp: reqwest::Response,
    endpoint: &str,
) -> Result<reqwest::Response, HubApiError> {
    if resp.status().is_success() {
        Ok(resp)
    } else {
        let status = resp.status().as_u16();
        let body = resp.text().await.unwrap_or_default();
        Err(HubApiError::Api {
            endpoint: endpoint.to_string(),
            status,
            body,
        })
    }
}
