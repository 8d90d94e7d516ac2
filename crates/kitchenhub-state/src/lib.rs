//! # kitchenhub-state -- Screen-state components for KitchenHub views
//!
//! Each component owns its own state exclusively and publishes derived
//! state to its consuming view; none depends on another:
//!
//! - [`comment_feed`] -- fixed-size client-side pagination of a recipe's
//!   comments, with create/edit/delete round-trips and concurrent media
//!   upload fan-out
//! - [`author_names`] -- lazy display-name resolution with an in-flight
//!   registry and a permanent negative cache
//! - [`expiry_alerts`] -- the sorted soon-to-expire feed and its periodic
//!   refresh loop
//! - [`family`] -- the client-local family roster with derived BMI
//!
//! All network effects go through `kitchenhub-client`; identity arrives
//! as an explicit [`kitchenhub_core::Session`].

pub mod author_names;
pub mod comment_feed;
pub mod error;
pub mod expiry_alerts;
pub mod family;

pub use author_names::AuthorDirectory;
pub use comment_feed::{CommentDraft, CommentEdit, CommentFeed, PAGE_SIZE};
pub use error::ScreenError;
pub use expiry_alerts::{ExpiryAlert, ExpiryAlerts, SharedExpiryAlerts};
pub use family::{FamilyMember, FamilyRoster};
