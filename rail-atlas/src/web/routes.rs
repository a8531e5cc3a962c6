//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{Html, IntoResponse},
    routing::{get, post},
};
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

use crate::layers::LayerError;
use crate::map::MapError;
use crate::query::{FeatureKind, FeatureQuery, UnknownFeatureKind};

use super::dto::*;
use super::state::AppState;
use super::templates::*;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index_page))
        .route("/health", get(health))
        .route("/query/:kind", get(overpass_query))
        .route("/map", post(render_map))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Index page listing the endpoints.
async fn index_page() -> IndexTemplate {
    IndexTemplate::default()
}

/// Overpass query text for one feature kind in one country.
async fn overpass_query(
    Path(kind): Path<String>,
    Query(params): Query<QueryParams>,
) -> Result<impl IntoResponse, AppError> {
    let kind: FeatureKind = kind.parse()?;
    info!(%kind, country = %params.country, "built overpass query");

    let query = FeatureQuery::new(kind, params.country).to_string();
    Ok(([(header::CONTENT_TYPE, "text/plain; charset=utf-8")], query))
}

/// Render a map from posted datasets.
async fn render_map(
    State(state): State<AppState>,
    payload: Result<Json<MapRequest>, JsonRejection>,
) -> Result<Html<String>, AppError> {
    let Json(req) = payload?;
    let map = req.compose(&state.map_config)?;
    info!(layers = map.groups().len(), "rendering map");
    Ok(Html(map.render()?))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    Internal { message: String },
}

impl From<UnknownFeatureKind> for AppError {
    fn from(e: UnknownFeatureKind) -> Self {
        AppError::BadRequest {
            message: e.to_string(),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(e: JsonRejection) -> Self {
        AppError::BadRequest {
            message: e.body_text(),
        }
    }
}

impl From<LayerError> for AppError {
    fn from(e: LayerError) -> Self {
        AppError::BadRequest {
            message: e.to_string(),
        }
    }
}

impl From<MapError> for AppError {
    fn from(e: MapError) -> Self {
        AppError::Internal {
            message: e.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => {
                warn!(%message, "bad request");
                (StatusCode::BAD_REQUEST, message)
            }
            AppError::Internal { message } => {
                error!(%message, "internal error");
                (StatusCode::INTERNAL_SERVER_ERROR, message)
            }
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::FrameError;

    #[test]
    fn unknown_kind_is_bad_request() {
        let err = AppError::from("bus".parse::<FeatureKind>().unwrap_err());
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn layer_error_is_bad_request() {
        let err = AppError::from(LayerError::from(FrameError::MissingGeometry { row: 0 }));
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn unreadable_body_gets_json_error() {
        use axum::body::{Body, to_bytes};
        use axum::http::Request;
        use tower::ServiceExt;

        let app = create_router(AppState::new(Default::default()));
        let response = app
            .oneshot(
                Request::post("/map")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from("{not json"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert!(body["error"].as_str().unwrap().contains("JSON"));
    }

    #[test]
    fn render_error_is_internal() {
        let io = std::io::Error::other("disk full");
        let err = AppError::from(MapError::from(io));
        assert_eq!(
            err.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
