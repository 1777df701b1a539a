use std::future::Future;
use std::time::Instant;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};

use wpgauge_core::{GaugeData, Result};

use crate::app_state::AppState;
use crate::http::error::ApiError;
use crate::http::extract::{GaugeName, NameBody};

/// Run one service call, recording latency and outcome.
async fn observed<T>(app: &AppState, op: &'static str, fut: impl Future<Output = Result<T>>) -> Result<T> {
    let started = Instant::now();
    let res = fut.await;
    let outcome = match &res {
        Ok(_) => "ok",
        Err(e) => e.client_code().as_str(),
    };
    app.metrics().record(op, outcome, started.elapsed());
    res
}

pub async fn get_data(State(app): State<AppState>) -> std::result::Result<Json<GaugeData>, ApiError> {
    let data = observed(&app, "get_data", app.service().get_all()).await?;
    Ok(Json(data))
}

pub async fn update_gauge(
    State(app): State<AppState>,
    Query(q): Query<GaugeName>,
) -> std::result::Result<StatusCode, ApiError> {
    observed(&app, "increase", app.service().increase_gauge(&q.name)).await?;
    Ok(StatusCode::OK)
}

pub async fn add_gauge(
    State(app): State<AppState>,
    NameBody(body): NameBody,
) -> std::result::Result<StatusCode, ApiError> {
    observed(&app, "add", app.service().add_gauge(&body.name)).await?;
    Ok(StatusCode::OK)
}

pub async fn remove_gauge(
    State(app): State<AppState>,
    NameBody(body): NameBody,
) -> std::result::Result<StatusCode, ApiError> {
    observed(&app, "remove", app.service().remove_gauge(&body.name)).await?;
    Ok(StatusCode::OK)
}

pub async fn daily_cycle(State(app): State<AppState>) -> std::result::Result<StatusCode, ApiError> {
    observed(&app, "daily_cycle", app.service().daily_cycle()).await?;
    Ok(StatusCode::OK)
}
