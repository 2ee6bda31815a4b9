//! Periodic check-and-notify task driven by a cron expression

use std::str::FromStr;

use chrono::{DateTime, Utc};
use cron::Schedule;
use tokio::task::JoinHandle;
use tracing::{error, info, warn};

use crate::catalog::api::{FetchParams, fetch_free_games};
use crate::error::AppError;
use crate::notify::send_discord_notification;
use crate::server::AppState;

/// Parses a seconds-first cron expression such as `0 0 0 * * *`.
pub fn parse_schedule(expression: &str) -> Result<Schedule, AppError> {
    Schedule::from_str(expression.trim())
        .map_err(|e| AppError::schedule_error(expression, e.to_string()))
}

/// First firing strictly after `after`, if the schedule has one.
pub fn next_run_after(schedule: &Schedule, after: DateTime<Utc>) -> Option<DateTime<Utc>> {
    schedule.after(&after).next()
}

/// One scheduled tick: fetch with upcoming games included, then notify when
/// a webhook is configured. Failures are logged and swallowed.
pub async fn run_scheduled_check(state: &AppState) {
    info!("Running scheduled free games check...");

    let params = FetchParams::from_config(&state.config, true);
    let games = match fetch_free_games(&state.catalog_client, &state.config, &params).await {
        Ok(games) => games,
        Err(e) if e.is_transient() => {
            warn!("Error fetching free games, retrying at the next scheduled run: {e}");
            return;
        }
        Err(e) => {
            error!("Error fetching free games: {e}");
            return;
        }
    };
    info!("Found {} free game(s)", games.len());

    if let Some(webhook_url) = state.webhook_url() {
        match send_discord_notification(&state.webhook_client, webhook_url, &games).await {
            Ok(()) => info!("Discord notification sent for {} games", games.len()),
            Err(e) => error!("Error sending Discord notification: {e}"),
        }
    }
}

/// Starts the scheduled checks on the tokio runtime.
///
/// # Errors
/// * `AppError::Schedule` - the expression does not parse
pub fn spawn_scheduled_checks(
    state: AppState,
    expression: &str,
) -> Result<JoinHandle<()>, AppError> {
    let schedule = parse_schedule(expression)?;

    if state.webhook_url().is_none() {
        warn!(
            "Discord webhook URL not configured. Scheduled checks will run but no notifications will be sent."
        );
    }
    info!("Setting up scheduled checks with schedule: {expression}");

    let handle = tokio::spawn(async move {
        loop {
            let Some(next) = next_run_after(&schedule, Utc::now()) else {
                warn!("Schedule has no upcoming runs, stopping scheduled checks");
                break;
            };
            let wait = (next - Utc::now()).to_std().unwrap_or_default();
            info!("Next scheduled check at {next}");
            tokio::time::sleep(wait).await;
            run_scheduled_check(&state).await;
        }
    });

    info!("Scheduler started");
    Ok(handle)
}
