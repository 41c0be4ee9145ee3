//! HTTP route handlers.

use askama::Template;
use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
};
use tower_http::services::ServeDir;

use crate::gbfs::SnapshotError;

use super::dto::{ErrorResponse, StationsResponse};
use super::state::AppState;
use super::templates::{IndexTemplate, LegendTemplate};

/// Create the application router.
///
/// `static_dir` is the path to the static assets directory.
pub fn create_router(state: AppState, static_dir: &str) -> Router {
    Router::new()
        .route("/", get(index_page))
        .route("/health", get(health))
        .route("/api/stations", get(stations))
        .route("/legend", get(legend))
        .nest_service("/static", ServeDir::new(static_dir))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Map page.
async fn index_page() -> impl IntoResponse {
    Html(
        IndexTemplate
            .render()
            .unwrap_or_else(|e| format!("Template error: {}", e)),
    )
}

/// Stations API: classified markers, per-category counts, marker styles.
async fn stations(State(state): State<AppState>) -> Result<Response, AppError> {
    let snapshot = state.gbfs.snapshot().await?;

    Ok(Json(StationsResponse::from_snapshot(&snapshot)).into_response())
}

/// Legend fragment: formatted feed timestamp plus per-category counts.
async fn legend(State(state): State<AppState>) -> Result<Response, AppError> {
    let snapshot = state.gbfs.snapshot().await?;

    let html = LegendTemplate::from_snapshot(&snapshot)
        .render()
        .map_err(|e| AppError::Internal {
            message: format!("Template error: {}", e),
        })?;

    Ok(Html(html).into_response())
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    /// An upstream feed fetch failed
    Upstream { message: String },
    /// The feeds returned data we could not join
    BadData { message: String },
    /// Anything else
    Internal { message: String },
}

impl From<SnapshotError> for AppError {
    fn from(e: SnapshotError) -> Self {
        match e {
            SnapshotError::Fetch(inner) => AppError::Upstream {
                message: inner.to_string(),
            },
            SnapshotError::Convert(inner) => AppError::BadData {
                message: inner.to_string(),
            },
            SnapshotError::Shape(inner) => AppError::BadData {
                message: inner.to_string(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Upstream { message } => (StatusCode::BAD_GATEWAY, message.clone()),
            AppError::BadData { message } => (StatusCode::INTERNAL_SERVER_ERROR, message.clone()),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message.clone()),
        };

        tracing::warn!(%status, %message, "request failed");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gbfs::GbfsError;
    use crate::stations::{DataShapeError, StationId};

    #[test]
    fn fetch_errors_map_to_upstream() {
        let err = SnapshotError::Fetch(GbfsError::Api {
            status: 503,
            message: "down".into(),
        });

        match AppError::from(err) {
            AppError::Upstream { message } => assert!(message.contains("503")),
            other => panic!("expected Upstream, got {:?}", other),
        }
    }

    #[test]
    fn shape_errors_map_to_bad_data() {
        let err = SnapshotError::Shape(DataShapeError::MissingStatus(
            StationId::parse("72").unwrap(),
        ));

        match AppError::from(err) {
            AppError::BadData { message } => assert!(message.contains("72")),
            other => panic!("expected BadData, got {:?}", other),
        }
    }

    #[test]
    fn error_responses_carry_status_codes() {
        let response = AppError::Upstream {
            message: "feed down".into(),
        }
        .into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);

        let response = AppError::BadData {
            message: "bad join".into(),
        }
        .into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
