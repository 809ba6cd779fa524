pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::outreach::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/scenarios", get(handlers::handle_list_scenarios))
        .route("/api/v1/scripts", post(handlers::handle_generate_script))
        .route("/api/v1/scripts/latest", get(handlers::handle_latest_status))
        .with_state(state)
}
