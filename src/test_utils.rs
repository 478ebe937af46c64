use crate::config::initialize_app_state_with_url;
use crate::router::create_router;
use crate::schemas::AppState;
use axum::Router;
use migration::{Migrator, MigratorTrait};
use std::time::Duration;
use tracing_subscriber::EnvFilter;

/// Build state on a fresh, migrated in-memory SQLite database.
///
/// Every call gets its own database, so tests never see each other's rows.
pub async fn setup_test_app_state() -> AppState {
    let state = initialize_app_state_with_url("sqlite::memory:")
        .await
        .expect("Failed to connect to in-memory database");

    Migrator::up(&state.db, None)
        .await
        .expect("Failed to run migrations");

    state
}

/// Send logs to stderr so they show up for failing tests. Honours `RUST_LOG`,
/// defaulting to WARN.
fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .try_init();
}

/// Create axum app for testing
pub async fn setup_test_app() -> Router {
    init_test_tracing();

    let state = setup_test_app_state().await;
    create_router(state, Duration::from_secs(30))
}
