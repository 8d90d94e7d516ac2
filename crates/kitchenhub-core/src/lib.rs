//! # kitchenhub-core -- Core domain types for the KitchenHub client stack
//!
//! Pure types and functions shared by the HTTP client and the screen-state
//! layer. No I/O lives here.
//!
//! - [`identity`] -- typed identifier newtypes ([`UserId`], [`RecipeId`], ...)
//! - [`session`] -- the injected identity context carried through every call
//! - [`health`] -- BMI calculation and category bands
//! - [`freshness`] -- expiry-date day math and classification
//! - [`tags`] -- comma-separated tag text parsing

pub mod freshness;
pub mod health;
pub mod identity;
pub mod session;
pub mod tags;

pub use freshness::{days_until, Freshness};
pub use health::{bmi_category, calc_bmi, BmiCategory};
pub use identity::{CommentId, ItemId, MemberId, RecipeId, UserId};
pub use session::Session;
