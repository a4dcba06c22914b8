use crate::api::responses::{ApiResponse, SettingsUpdateRequest};
use crate::AppState;
use axum::{extract::State, response::IntoResponse, Json};
use std::sync::Arc;

pub(crate) async fn get_settings(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(ApiResponse::ok(state.config.clone()))
}

pub(crate) async fn update_settings(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SettingsUpdateRequest>,
) -> impl IntoResponse {
    let mut config = state.config.clone();

    if let Some(v) = req.default_viewport_height {
        config.default_viewport_height = v;
    }
    if let Some(v) = req.tall_viewport_min {
        config.sizing.tall_viewport_min = v;
    }
    if let Some(v) = req.tall_chart_height {
        config.sizing.tall_chart_height = v;
    }
    if let Some(v) = req.short_chart_height {
        config.sizing.short_chart_height = v;
    }
    if let Some(v) = req.scroll_min_nodes {
        config.sizing.scroll_min_nodes = v;
    }
    if let Some(v) = req.category_width {
        config.sizing.category_width = v;
    }
    if let Some(v) = req.max_palette_colors {
        config.max_palette_colors = v;
    }
    if let Some(v) = req.max_samples {
        config.max_samples = v;
    }

    if let Err(e) = config.validate() {
        return Json(ApiResponse::<&str>::err(format!("Invalid settings: {e}")));
    }

    match config.save() {
        Ok(()) => Json(ApiResponse::ok("Settings saved (restart to apply)")),
        Err(e) => Json(ApiResponse::<&str>::err(format!("Failed to save settings: {e}"))),
    }
}
