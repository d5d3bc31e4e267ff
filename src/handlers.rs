use crate::errors::AppError;
use crate::models::{Metric, MetricOption, MetricsResponse};
use crate::selection::{Event, SelectionState};
use crate::shell::{Update, Views, dispatch, render_all};
use crate::state::AppState;
use crate::ui::render_index;
use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    response::Html,
};
use serde::{Deserialize, Serialize};
use tracing::warn;

#[derive(Debug, Deserialize)]
pub struct RenderRequest {
    #[serde(default)]
    pub selection: SelectionState,
}

#[derive(Debug, Serialize)]
pub struct RenderResponse {
    pub views: Views,
}

#[derive(Debug, Deserialize)]
pub struct EventRequest {
    #[serde(default)]
    pub selection: SelectionState,
    pub event: Event,
}

pub async fn index() -> Html<String> {
    Html(render_index())
}

pub async fn get_metrics(State(state): State<AppState>) -> Json<MetricsResponse> {
    Json(MetricsResponse {
        default: Metric::default(),
        metrics: Metric::ALL
            .into_iter()
            .map(|metric| MetricOption {
                value: metric,
                label: metric.label().to_string(),
            })
            .collect(),
        countries: state.dataset.len(),
    })
}

pub async fn render(
    State(state): State<AppState>,
    payload: Result<Json<RenderRequest>, JsonRejection>,
) -> Result<Json<RenderResponse>, AppError> {
    let Json(request) = payload.map_err(reject)?;
    let views = render_all(&state.dataset, &request.selection);
    Ok(Json(RenderResponse { views }))
}

pub async fn event(
    State(state): State<AppState>,
    payload: Result<Json<EventRequest>, JsonRejection>,
) -> Result<Json<Update>, AppError> {
    let Json(request) = payload.map_err(reject)?;
    Ok(Json(dispatch(
        &state.dataset,
        request.selection,
        request.event,
    )))
}

fn reject(rejection: JsonRejection) -> AppError {
    warn!("rejected request body: {}", rejection.body_text());
    AppError::from(rejection)
}
