//! # Expiry-Date Day Math and Classification
//!
//! Calendar-day arithmetic for fridge inventory: how far an item is from
//! its expiration date, whether it belongs in the alert feed, and the
//! freshness band shown in the fridge view.
//!
//! All functions take `today` explicitly so callers (and tests) control
//! the clock.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Alert window lower bound: items expired since yesterday still alert.
pub const ALERT_WINDOW_MIN_DAYS: i64 = -1;

/// Alert window upper bound: items expiring within three days alert.
pub const ALERT_WINDOW_MAX_DAYS: i64 = 3;

/// Whole calendar days from `today` until `expiry`. Negative when the
/// date has passed.
pub fn days_until(expiry: NaiveDate, today: NaiveDate) -> i64 {
    (expiry - today).num_days()
}

/// Whether an item this many days from expiry belongs in the alert feed.
pub fn in_alert_window(diff_days: i64) -> bool {
    (ALERT_WINDOW_MIN_DAYS..=ALERT_WINDOW_MAX_DAYS).contains(&diff_days)
}

/// Human-readable label for an alert entry.
pub fn expiry_label(diff_days: i64) -> String {
    match diff_days {
        d if d < 0 => "expired".to_string(),
        0 => "expires today".to_string(),
        1 => "expires in 1 day".to_string(),
        d => format!("expires in {d} days"),
    }
}

/// Freshness band for the fridge view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Freshness {
    /// Expiration date has passed.
    Expired,
    /// Expires within three days.
    ExpiringSoon,
    /// Everything else, including items with no recorded date.
    Fresh,
}

impl Freshness {
    /// Classify an item by its (optional) expiration date.
    pub fn classify(expiry: Option<NaiveDate>, today: NaiveDate) -> Self {
        match expiry {
            None => Self::Fresh,
            Some(date) => {
                let diff = days_until(date, today);
                if diff < 0 {
                    Self::Expired
                } else if diff <= ALERT_WINDOW_MAX_DAYS {
                    Self::ExpiringSoon
                } else {
                    Self::Fresh
                }
            }
        }
    }
}
