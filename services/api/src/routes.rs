use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use footprint::engine::profile::CompanyProfile;
use footprint::engine::{FootprintEngine, FootprintResults, MethodologyReport};
use footprint::error::AppError;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;

#[derive(Debug, Deserialize)]
pub(crate) struct FootprintRequest {
    pub(crate) profile: serde_json::Value,
    /// Attach the methodology document to the response.
    #[serde(default)]
    pub(crate) include_methodology: bool,
}

#[derive(Debug, Serialize)]
pub(crate) struct FootprintResponse {
    pub(crate) results: FootprintResults,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) methodology: Option<MethodologyReport>,
}

pub(crate) fn with_footprint_routes(engine: Arc<FootprintEngine>) -> axum::Router {
    axum::Router::new()
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route(
            "/api/v1/footprint",
            axum::routing::post(footprint_endpoint),
        )
        .layer(Extension(engine))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn footprint_endpoint(
    Extension(engine): Extension<Arc<FootprintEngine>>,
    Json(payload): Json<FootprintRequest>,
) -> Result<Json<FootprintResponse>, AppError> {
    let FootprintRequest {
        profile,
        include_methodology,
    } = payload;

    // Profile validation errors map to 400; the calculation itself is total.
    let profile: CompanyProfile = serde_json::from_value(profile).map_err(AppError::Profile)?;

    let results = engine.calculate(&profile);
    let methodology = include_methodology.then(|| engine.methodology(&results));

    Ok(Json(FootprintResponse {
        results,
        methodology,
    }))
}
