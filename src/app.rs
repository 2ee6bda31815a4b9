use crate::config::Config;
use crate::error::AppError;
use crate::scheduler::spawn_scheduled_checks;
use crate::server::{AppState, app_router};
use std::net::SocketAddr;
use tracing::info;

/// Run the HTTP service.
///
/// - Builds the shared state and router
/// - Starts the scheduled checks when enabled
/// - Serves until the process is stopped
pub async fn run_server(config: Config) -> Result<(), AppError> {
    let state = AppState::new(config)?;

    let scheduler = if state.config.enable_cron {
        Some(spawn_scheduled_checks(
            state.clone(),
            &state.config.cron_schedule,
        )?)
    } else {
        None
    };

    let addr = SocketAddr::from(([0, 0, 0, 0], state.config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Epic freebies server listening on {addr}");

    let result = axum::serve(listener, app_router(state)).await;

    if let Some(handle) = scheduler {
        handle.abort();
    }

    result.map_err(AppError::from)
}
