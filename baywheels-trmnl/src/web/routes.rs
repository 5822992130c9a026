//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::State,
    http::{Method, StatusCode, header},
    response::{IntoResponse, Response},
    routing::{MethodRouter, get},
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use crate::config::ConfigError;
use crate::report::{Envelope, build_report};

use super::dto::ErrorResponse;
use super::state::AppState;

/// Create the application router.
///
/// Every path except `/health` serves the report.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", report_methods())
        .route("/*path", report_methods())
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .layer(cors())
        .with_state(state)
}

/// `GET`/`POST` build the report and `OPTIONS` answers. Anything else,
/// `HEAD` included, is 405.
fn report_methods() -> MethodRouter<AppState> {
    get(station_report)
        .post(station_report)
        .options(preflight)
        .head(method_not_allowed)
        .fallback(method_not_allowed)
}

/// CORS policy for the display service: any origin, read-only methods.
fn cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Bare `OPTIONS` without CORS request headers.
///
/// Real preflights are answered by the CORS layer before reaching here.
async fn preflight() -> StatusCode {
    StatusCode::OK
}

async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}

/// Build the station report and wrap it for the display service.
async fn station_report(State(state): State<AppState>) -> Result<Json<Envelope>, AppError> {
    let report = build_report(state.feed.as_ref(), &state.station).await?;

    info!(
        bikes = %report.bikes_available,
        docks = %report.docks_available,
        degraded = report.is_degraded(),
        "responded with station report"
    );

    Ok(Json(Envelope::new(report)))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    /// Station identity is not configured
    Config(ConfigError),
    /// Route exists but not for this method
    MethodNotAllowed,
}

impl From<ConfigError> for AppError {
    fn from(e: ConfigError) -> Self {
        AppError::Config(e)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            AppError::Config(e) => {
                error!(error = %e, "cannot build report");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::new("Internal server error").with_message(e.to_string()),
                )
            }
            AppError::MethodNotAllowed => (
                StatusCode::METHOD_NOT_ALLOWED,
                ErrorResponse::new("Method not allowed"),
            ),
        };

        (status, Json(body)).into_response()
    }
}
