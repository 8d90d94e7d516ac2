//! # Fridge Subcommand
//!
//! - `alerts` - one-shot expiry alert feed for the logged-in user.
//! - `watch` - keep the feed refreshed on an interval and print changes,
//!   the way the navigation shell badge behaves in the web app.

use std::time::Duration;

use anyhow::{bail, Result};
use clap::{Args, Subcommand};

use kitchenhub_state::expiry_alerts::{spawn_refresh_loop, DEFAULT_REFRESH_PERIOD};
use kitchenhub_state::{ExpiryAlert, ExpiryAlerts, SharedExpiryAlerts};

use crate::CliContext;

/// Arguments for the `khub fridge` subcommand.
#[derive(Args, Debug)]
pub struct FridgeArgs {
    #[command(subcommand)]
    pub command: FridgeCommand,
}

#[derive(Subcommand, Debug)]
pub enum FridgeCommand {
    /// Show the current expiry alert feed once.
    Alerts,

    /// Refresh the feed on an interval and print it when it changes.
    Watch {
        /// Seconds between refreshes.
        #[arg(long, default_value_t = DEFAULT_REFRESH_PERIOD.as_secs())]
        interval_secs: u64,
    },
}

pub async fn run_fridge(args: &FridgeArgs, ctx: &CliContext) -> Result<u8> {
    if ctx.session.user_id().is_none() {
        bail!("fridge alerts need a logged-in session (set KITCHENHUB_USER_ID and KITCHENHUB_TOKEN)");
    }

    match &args.command {
        FridgeCommand::Alerts => {
            let mut alerts = ExpiryAlerts::new();
            alerts.refresh(&ctx.client, &ctx.session).await?;
            print_feed(alerts.alerts());
            Ok(0)
        }
        FridgeCommand::Watch { interval_secs } => {
            let shared: SharedExpiryAlerts = Default::default();
            let handle = spawn_refresh_loop(
                shared.clone(),
                ctx.client.clone(),
                ctx.session.clone(),
                Duration::from_secs(*interval_secs),
            );

            let mut last_feed: Option<Vec<ExpiryAlert>> = None;
            loop {
                tokio::time::sleep(Duration::from_secs(1)).await;
                if handle.is_finished() {
                    bail!("refresh loop stopped unexpectedly");
                }
                let feed = shared.read().alerts().to_vec();
                if feed_changed(last_feed.as_deref(), &feed) {
                    print_feed(&feed);
                    last_feed = Some(feed);
                }
            }
        }
    }
}

/// Whether the feed needs reprinting. Item-level comparison: a swap that
/// keeps the feed length the same still counts as a change.
fn feed_changed(last: Option<&[ExpiryAlert]>, current: &[ExpiryAlert]) -> bool {
    last != Some(current)
}

fn print_feed(feed: &[ExpiryAlert]) {
    if feed.is_empty() {
        println!("nothing expiring soon");
        return;
    }
    println!("{} item(s) need attention:", feed.len());
    for alert in feed {
        println!(
            "  {}: {} ({})",
            alert.ingredient_name,
            alert.label(),
            alert.expiration_date
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn alert(name: &str, day: u32) -> ExpiryAlert {
        ExpiryAlert {
            ingredient_name: name.into(),
            expiration_date: NaiveDate::from_ymd_opt(2026, 8, day).unwrap(),
            days_left: 1,
        }
    }

    #[test]
    fn same_length_feed_with_different_items_is_a_change() {
        let before = vec![alert("Milk", 27)];
        let after = vec![alert("Eggs", 28)];
        assert!(feed_changed(Some(&before), &after));
    }

    #[test]
    fn identical_feed_is_not_a_change() {
        let feed = vec![alert("Milk", 27), alert("Eggs", 28)];
        assert!(!feed_changed(Some(&feed), &feed.clone()));
    }

    #[test]
    fn first_observation_always_prints() {
        assert!(feed_changed(None, &[]));
        assert!(feed_changed(None, &[alert("Milk", 27)]));
    }
}
