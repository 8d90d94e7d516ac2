//! # kitchenhub-cli - `khub` command-line companion for KitchenHub
//!
//! Drives the client SDK and screen-state layer from a terminal, mainly
//! for poking at a running backend during development.
//!
//! ## Subcommands
//!
//! - `khub recipe` - recipe detail, listing, similar-recipe ranking.
//! - `khub comments` - paged comment browsing, posting, deletion.
//! - `khub fridge` - expiry alert feed, one-shot or watch mode.
//! - `khub family` - local family roster with derived BMI.
//!
//! ## Environment
//!
//! - `KITCHENHUB_API_URL` / `KITCHENHUB_TIMEOUT_SECS` - backend location.
//! - `KITCHENHUB_USER_ID` / `KITCHENHUB_TOKEN` - the logged-in identity;
//!   both unset means an anonymous session (reads only).
//!
//! A `.env` file in the working directory is honored.

pub mod comments;
pub mod family;
pub mod fridge;
pub mod recipe;

use kitchenhub_client::HubClient;
use kitchenhub_core::{Session, UserId};

/// Everything a subcommand needs: the HTTP client and the identity.
pub struct CliContext {
    pub client: HubClient,
    pub session: Session,
}

/// Build the session from `KITCHENHUB_USER_ID` and `KITCHENHUB_TOKEN`.
/// Anything incomplete degrades to an anonymous session.
pub fn session_from_env() -> Session {
    let user_id = std::env::var("KITCHENHUB_USER_ID")
        .ok()
        .and_then(|s| s.parse::<i64>().ok())
        .map(UserId::new);
    let token = std::env::var("KITCHENHUB_TOKEN").ok();

    match (user_id, token) {
        (Some(user_id), Some(token)) => Session::authenticated(user_id, token),
        _ => Session::anonymous(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn incomplete_env_yields_anonymous_session() {
        std::env::remove_var("KITCHENHUB_USER_ID");
        std::env::remove_var("KITCHENHUB_TOKEN");
        let session = session_from_env();
        assert!(!session.is_authenticated());
    }
}
