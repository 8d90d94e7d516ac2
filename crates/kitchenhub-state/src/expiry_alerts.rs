//! # Expiry Alerts
//!
//! Surfaces a badge count and a sorted detail feed of soon-to-expire or
//! just-expired fridge items. An item alerts iff its calendar-day
//! distance from today is in `[-1, 3]`; the feed sorts ascending by
//! expiration date, so the most overdue item comes first.
//!
//! The feed refreshes once when a session is established and then on a
//! fixed interval (five minutes by default) while the session is active.
//! Nothing runs for an anonymous session. Read failures keep the
//! previous feed.

use std::sync::Arc;
use std::time::Duration;

use chrono::{Local, NaiveDate};
use parking_lot::RwLock;

use kitchenhub_client::{HubApiError, HubClient};
use kitchenhub_core::freshness::{days_until, expiry_label, in_alert_window};
use kitchenhub_core::{Session, UserId};

use crate::error::ScreenError;

/// Default refresh period for [`spawn_refresh_loop`].
pub const DEFAULT_REFRESH_PERIOD: Duration = Duration::from_secs(5 * 60);

/// One entry in the alert feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpiryAlert {
    pub ingredient_name: String,
    pub expiration_date: NaiveDate,
    /// Calendar days until expiry; negative when overdue.
    pub days_left: i64,
}

impl ExpiryAlert {
    /// Per-item label: "expired", "expires today", "expires in N days".
    pub fn label(&self) -> String {
        expiry_label(self.days_left)
    }
}

/// The notification feed and badge count.
#[derive(Debug, Default)]
pub struct ExpiryAlerts {
    alerts: Vec<ExpiryAlert>,
}

/// Alert feed shared between a view and its background refresh task.
/// The lock is only ever held for a field read or a swap, never across
/// an await point.
pub type SharedExpiryAlerts = Arc<RwLock<ExpiryAlerts>>;

impl ExpiryAlerts {
    pub fn new() -> Self {
        Self::default()
    }

    /// The sorted feed, soonest/most overdue first.
    pub fn alerts(&self) -> &[ExpiryAlert] {
        &self.alerts
    }

    /// The badge count equals the feed length.
    pub fn badge_count(&self) -> usize {
        self.alerts.len()
    }

    /// Refresh the feed from the backend using today's local date.
    ///
    /// Guard clause: an anonymous session does nothing and sends nothing.
    pub async fn refresh(
        &mut self,
        client: &HubClient,
        session: &Session,
    ) -> Result<(), ScreenError> {
        self.refresh_at(client, session, Local::now().date_naive())
            .await
    }

    /// Refresh with an explicit `today`, so tests control the clock.
    pub async fn refresh_at(
        &mut self,
        client: &HubClient,
        session: &Session,
        today: NaiveDate,
    ) -> Result<(), ScreenError> {
        let Some(user_id) = session.user_id() else {
            return Ok(());
        };
        match fetch_alerts(client, session, user_id, today).await {
            Ok(alerts) => {
                self.alerts = alerts;
                Ok(())
            }
            Err(e) => {
                tracing::warn!("inventory refresh failed, keeping previous alerts: {e}");
                Err(e.into())
            }
        }
    }
}

/// Fetch and derive the alert feed: filter to dated items inside the
/// alert window, sort ascending by raw expiration date.
async fn fetch_alerts(
    client: &HubClient,
    session: &Session,
    user_id: UserId,
    today: NaiveDate,
) -> Result<Vec<ExpiryAlert>, HubApiError> {
    let items = client.inventory().list_for_user(session, user_id).await?;

    let mut alerts: Vec<ExpiryAlert> = items
        .into_iter()
        .filter_map(|item| {
            let expiration_date = item.expiration_date?;
            let days_left = days_until(expiration_date, today);
            in_alert_window(days_left).then(|| ExpiryAlert {
                ingredient_name: item.ingredient_name,
                expiration_date,
                days_left,
            })
        })
        .collect();

    alerts.sort_by_key(|a| a.expiration_date);
    Ok(alerts)
}

/// Spawn the periodic refresh task for an active session.
///
/// The first interval tick fires immediately, covering the
/// refresh-on-session-establishment case. An anonymous session spawns a
/// task that exits at once without ever calling the backend. Failures
/// are logged and the previous feed kept; the loop keeps ticking.
pub fn spawn_refresh_loop(
    shared: SharedExpiryAlerts,
    client: HubClient,
    session: Session,
    period: Duration,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let Some(user_id) = session.user_id() else {
            tracing::debug!("no user in session, expiry refresh loop not started");
            return;
        };
        let mut ticker = tokio::time::interval(period);
        loop {
            ticker.tick().await;
            let today = Local::now().date_naive();
            match fetch_alerts(&client, &session, user_id, today).await {
                Ok(alerts) => shared.write().alerts = alerts,
                Err(e) => {
                    tracing::warn!("scheduled inventory refresh failed, keeping previous alerts: {e}");
                }
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alert_labels_follow_days_left() {
        let date = NaiveDate::from_ymd_opt(2026, 8, 27).unwrap();
        let mk = |days_left| ExpiryAlert {
            ingredient_name: "Milk".into(),
            expiration_date: date,
            days_left,
        };
        assert_eq!(mk(-1).label(), "expired");
        assert_eq!(mk(0).label(), "expires today");
        assert_eq!(mk(2).label(), "expires in 2 days");
    }

    #[test]
    fn empty_feed_has_zero_badge() {
        let alerts = ExpiryAlerts::new();
        assert_eq!(alerts.badge_count(), 0);
        assert!(alerts.alerts().is_empty());
    }
}
