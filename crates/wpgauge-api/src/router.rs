//! Axum router wiring.
//!
//! Gauge routes live under `/wP`; ops endpoints at the root.

use axum::{
    routing::{get, post},
    Router,
};

use crate::{app_state::AppState, http::handlers, ops};

pub fn build_router(state: AppState) -> Router {
    let gauges = Router::new()
        .route("/GetData", get(handlers::get_data))
        .route("/UpdateGauge", post(handlers::update_gauge))
        .route("/AddGauge", post(handlers::add_gauge))
        .route("/RemoveGauge", post(handlers::remove_gauge))
        .route("/DailyCycle", post(handlers::daily_cycle));

    Router::new()
        .nest("/wP", gauges)
        .route("/healthz", get(ops::healthz))
        .route("/metrics", get(ops::metrics))
        .with_state(state)
}
