//! # Author Directory
//!
//! Lazily resolves comment authors' display names without redundant
//! network calls. Two structures back it:
//!
//! - a cache mapping `UserId` to `Option<String>`, where `None` is the
//!   **permanent negative entry** - a lookup that was attempted and
//!   produced no usable name is never retried automatically;
//! - an in-flight registry (the pending set) claimed **before** any
//!   request goes out, so two overlapping sync passes can never issue
//!   concurrent lookups for the same id.
//!
//! Both use lock-free maps so the directory can be shared (`Arc`) between
//! a view and whatever triggers re-syncs.

use dashmap::{DashMap, DashSet};

use kitchenhub_client::comments::Comment;
use kitchenhub_client::HubClient;
use kitchenhub_core::{Session, UserId};

/// Resolves and caches comment author display names.
#[derive(Debug, Default)]
pub struct AuthorDirectory {
    cache: DashMap<UserId, Option<String>>,
    pending: DashSet<UserId>,
}

impl AuthorDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve any authors in `comments` that still need a lookup.
    /// Triggered whenever the visible comment list changes.
    ///
    /// Ids are claimed into the pending set before any request is issued
    /// (`DashSet::insert` is the atomic claim), then looked up in
    /// parallel. Each lookup's failure is isolated: it caches a negative
    /// entry for that id and never aborts its siblings. Every claimed id
    /// leaves the pending set whether its lookup succeeded or not.
    pub async fn sync(&self, client: &HubClient, session: &Session, comments: &[Comment]) {
        let mut claimed: Vec<UserId> = Vec::new();
        for comment in comments {
            if has_inline_name(comment) {
                continue;
            }
            let Some(id) = comment.user_id else { continue };
            if self.cache.contains_key(&id) {
                continue;
            }
            // insert returns false when the id is already in flight,
            // including earlier in this same pass.
            if self.pending.insert(id) {
                claimed.push(id);
            }
        }
        if claimed.is_empty() {
            return;
        }

        let mut tasks = tokio::task::JoinSet::new();
        for id in &claimed {
            let id = *id;
            let client = client.clone();
            let session = session.clone();
            tasks.spawn(async move {
                let name = match client.users().display_name(&session, id).await {
                    Ok(name) => name,
                    Err(e) => {
                        tracing::warn!(user_id = %id, "username lookup failed, caching negative: {e}");
                        None
                    }
                };
                (id, name)
            });
        }

        while let Some(joined) = tasks.join_next().await {
            if let Ok((id, name)) = joined {
                self.cache.insert(id, name);
                self.pending.remove(&id);
            }
        }
        // An aborted task would skip its removal above; sweep the claim
        // set so no id is left stuck in flight.
        for id in claimed {
            self.pending.remove(&id);
        }
    }

    /// Display label for a comment's author. Fallback order: inline name
    /// on the record, cached resolved name, `User #<id>`, plain `User`.
    pub fn label(&self, comment: &Comment) -> String {
        if let Some(name) = comment.user_name.as_deref() {
            let name = name.trim();
            if !name.is_empty() {
                return name.to_string();
            }
        }
        match comment.user_id {
            Some(id) => {
                if let Some(entry) = self.cache.get(&id) {
                    if let Some(name) = entry.value() {
                        return name.clone();
                    }
                }
                format!("User #{id}")
            }
            None => "User".to_string(),
        }
    }

    /// Cached state for an id: `None` = never looked up,
    /// `Some(None)` = negative entry, `Some(Some(name))` = resolved.
    pub fn cached(&self, id: UserId) -> Option<Option<String>> {
        self.cache.get(&id).map(|entry| entry.value().clone())
    }

    /// Whether a lookup for this id is currently in flight.
    pub fn is_pending(&self, id: UserId) -> bool {
        self.pending.contains(&id)
    }
}

fn has_inline_name(comment: &Comment) -> bool {
    comment
        .user_name
        .as_deref()
        .is_some_and(|name| !name.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

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

    #[test]
    fn label_prefers_inline_name() {
        let dir = AuthorDirectory::new();
        dir.cache.insert(UserId::new(5), Some("cached".into()));
        assert_eq!(dir.label(&comment(1, Some(5), Some("inline"))), "inline");
    }

    #[test]
    fn label_falls_back_to_cache_then_id() {
        let dir = AuthorDirectory::new();
        dir.cache.insert(UserId::new(5), Some("alice".into()));
        assert_eq!(dir.label(&comment(1, Some(5), None)), "alice");
        assert_eq!(dir.label(&comment(2, Some(6), None)), "User #6");
    }

    #[test]
    fn negative_cache_entry_does_not_mask_id_fallback() {
        let dir = AuthorDirectory::new();
        dir.cache.insert(UserId::new(5), None);
        assert_eq!(dir.label(&comment(1, Some(5), None)), "User #5");
    }

    #[test]
    fn label_without_user_id_is_generic() {
        let dir = AuthorDirectory::new();
        assert_eq!(dir.label(&comment(1, None, None)), "User");
        // Whitespace-only inline names don't count.
        assert_eq!(dir.label(&comment(2, None, Some("  "))), "User");
    }
}
