// src/main.rs
use clap::Parser;
use epic_freebies::app::run_server;
use epic_freebies::cli::{Args, is_oneshot_mode};
use epic_freebies::commands::{
    handle_list_config_command, handle_once_command, handle_write_config_command,
};
use epic_freebies::config::Config;
use epic_freebies::error::AppError;
use epic_freebies::logging::setup_logging;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // A missing .env file is fine
    let dotenv_result = dotenv::dotenv();

    let args = Args::parse();

    let mut config = Config::load().await?;
    args.apply_to(&mut config);

    let (log_file_path, _guard) = setup_logging(&args, &config).await?;
    tracing::info!("Logs are being written to: {log_file_path}");
    if let Err(e) = dotenv_result {
        tracing::debug!("No .env file loaded: {e}");
    }

    // Handle configuration operations before validation so a broken
    // config can still be inspected
    if args.list_config {
        return handle_list_config_command(&config);
    }

    config.validate()?;

    if !is_oneshot_mode(&args) {
        return run_server(config).await;
    }

    if args.write_config {
        return handle_write_config_command(&config).await;
    }

    handle_once_command(&args, &config).await
}
