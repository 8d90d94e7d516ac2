//! # Session Context
//!
//! The injected identity context passed explicitly to every component and
//! client call that needs the current user. Nothing in this workspace reads
//! ambient storage; the embedding application constructs a [`Session`] from
//! wherever it keeps credentials and hands it down.
//!
//! Custom `Debug` implementation redacts the bearer token to prevent
//! credential leakage in log output.

use zeroize::Zeroizing;

use crate::identity::UserId;

/// The current user's identity and API credentials.
#[derive(Clone, Default)]
pub struct Session {
    user_id: Option<UserId>,
    api_token: Option<Zeroizing<String>>,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("user_id", &self.user_id)
            .field(
                "api_token",
                &self.api_token.as_ref().map(|_| "[REDACTED]"),
            )
            .finish()
    }
}

impl Session {
    /// A session with no user and no credentials. Read-only endpoints that
    /// do not require identity still work; identity-requiring operations
    /// short-circuit before any request is sent.
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// A session for a logged-in user holding a bearer token.
    pub fn authenticated(user_id: UserId, api_token: impl Into<String>) -> Self {
        Self {
            user_id: Some(user_id),
            api_token: Some(Zeroizing::new(api_token.into())),
        }
    }

    /// The logged-in user, if any.
    pub fn user_id(&self) -> Option<UserId> {
        self.user_id
    }

    /// The bearer token, if any.
    pub fn token(&self) -> Option<&str> {
        self.api_token.as_deref().map(String::as_str)
    }

    /// Whether this session carries credentials.
    pub fn is_authenticated(&self) -> bool {
        self.api_token.is_some()
    }
}
