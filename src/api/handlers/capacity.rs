use crate::api::responses::{
    ApiResponse, ChartQuery, ChartResponse, SamplesResponse, SummaryResponse,
};
use crate::capacity::{node_capacities, render_config, CapacitySample};
use crate::state::SnapshotInfo;
use crate::AppState;
use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;

pub(crate) async fn put_samples(
    State(state): State<Arc<AppState>>,
    body: Result<Json<Vec<CapacitySample>>, JsonRejection>,
) -> Response {
    let Json(samples) = match body {
        Ok(body) => body,
        Err(e) => return bad_request(format!("Malformed snapshot: {}", e.body_text())),
    };

    match state.replace_snapshot(samples).await {
        Ok(info) => Json(ApiResponse::ok(info)).into_response(),
        Err(e) => Json(ApiResponse::<SnapshotInfo>::err(format!("Invalid snapshot: {e}")))
            .into_response(),
    }
}

pub(crate) async fn get_samples(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let snapshot = state.snapshot().await;
    Json(ApiResponse::ok(SamplesResponse {
        revision: snapshot.revision,
        received_at: snapshot.received_at,
        samples: &snapshot.samples,
    }))
    .into_response()
}

pub(crate) async fn get_chart(
    State(state): State<Arc<AppState>>,
    query: Result<Query<ChartQuery>, QueryRejection>,
) -> Response {
    let Query(query) = match query {
        Ok(query) => query,
        Err(e) => return bad_request(format!("Invalid chart query: {}", e.body_text())),
    };

    let snapshot = state.snapshot().await;
    let chart = state.chart_for(&snapshot);
    let viewport_height = query.viewport_height.unwrap_or(state.config.default_viewport_height);

    Json(ApiResponse::ok(ChartResponse {
        revision: snapshot.revision,
        chart: render_config(&chart, viewport_height, &state.config.sizing),
    }))
    .into_response()
}

pub(crate) async fn get_summary(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let snapshot = state.snapshot().await;
    Json(ApiResponse::ok(SummaryResponse {
        revision: snapshot.revision,
        nodes: node_capacities(&snapshot.samples),
    }))
}

/// Extractor rejections still answer with the usual envelope.
fn bad_request(message: String) -> Response {
    (StatusCode::BAD_REQUEST, Json(ApiResponse::<()>::err(message))).into_response()
}
