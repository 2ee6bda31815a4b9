use crate::catalog::api::{FetchParams, create_http_client_with_timeout, fetch_free_games};
use crate::catalog::models::ApiResponse;
use crate::cli::Args;
use crate::config::Config;
use crate::error::AppError;
use crate::notify::send_discord_notification;
use tracing::{error, info, warn};

/// Handles the --once command.
///
/// Runs the pipeline a single time and prints the JSON envelope to stdout.
/// With --notify the result is also posted to the webhook. A fetch failure
/// prints the failure envelope and is returned as an error.
pub async fn handle_once_command(args: &Args, config: &Config) -> Result<(), AppError> {
    let client = create_http_client_with_timeout(config.http_timeout_seconds)?;
    let params = FetchParams::from_config(config, !args.no_upcoming);

    let games = match fetch_free_games(&client, config, &params).await {
        Ok(games) => games,
        Err(e) => {
            let response = ApiResponse::failure(format!("Error fetching games: {e}"));
            println!("{}", serde_json::to_string_pretty(&response)?);
            return Err(e);
        }
    };

    if args.notify {
        match config.discord_webhook_url.as_deref() {
            Some(webhook_url) if config.webhook_configured() => {
                let webhook_client =
                    create_http_client_with_timeout(config.webhook_timeout_seconds)?;
                match send_discord_notification(&webhook_client, webhook_url, &games).await {
                    Ok(()) => info!("Discord notification sent for {} games", games.len()),
                    Err(e) => error!("Error sending Discord notification: {e}"),
                }
            }
            _ => warn!("Discord webhook URL not configured, skipping notification"),
        }
    }

    println!(
        "{}",
        serde_json::to_string_pretty(&ApiResponse::success(games))?
    );
    Ok(())
}

/// Handles the --list-config command.
pub fn handle_list_config_command(config: &Config) -> Result<(), AppError> {
    config.display();
    Ok(())
}

/// Handles the --write-config command.
///
/// Persists the effective configuration (file, environment and flags merged)
/// to the default config location.
pub async fn handle_write_config_command(config: &Config) -> Result<(), AppError> {
    config.save().await?;
    println!("Config written to {}", Config::get_config_path());
    Ok(())
}
