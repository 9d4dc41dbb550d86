pub mod utility;

pub use fanpix_primitives::error::ApiError;

use crate::utility::db_pool::create_db_pool;
use crate::utility::logging::setup_logging;
use crate::utility::settlement_tasks::spawn_background_tasks;
use crate::utility::shutdown::shutdown_signal;
use eyre::Report;
use fanpix_core::app_state::AppState;
use fanpix_primitives::models::app_config::AppConfig;
use tracing::info;

pub async fn run() -> Result<(), Report> {
    // 1. load environment variables (.env is optional outside local dev)
    let _ = dotenvy::dotenv();

    // 2. initialize logging first (so we can log everything else)
    setup_logging();

    info!("Starting fanpix settlement worker...");

    // 3. load configuration
    let config = AppConfig::from_env()?;

    // 4. create database connection pool
    let pool = create_db_pool()?;

    // 5. build application state
    let state = AppState::new(pool, config)?;

    // 6. start background settlement tasks
    spawn_background_tasks(state.clone());

    // 7. run until SIGINT/SIGTERM
    shutdown_signal().await;

    info!("fanpix settlement worker shut down gracefully");
    Ok(())
}
