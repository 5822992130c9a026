//! HTTP server for the display service.
//!
//! Serves the TRMNL envelope for the configured station on `GET /` and
//! `POST /`, with permissive CORS so the display service can poll it
//! directly.

mod dto;
mod routes;
mod state;

pub use dto::ErrorResponse;
pub use routes::{AppError, create_router};
pub use state::AppState;
