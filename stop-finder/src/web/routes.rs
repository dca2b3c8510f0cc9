//! HTTP route handlers.
//!
//! Page templates are returned as-is; `askama_axum` turns them into
//! `text/html` responses, or a 500 if rendering fails.

use axum::{
    Form, Json, Router,
    extract::{Query, State},
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Redirect, Response},
    routing::get,
};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::error::{ErrorKind, LookupError};
use crate::fetch::FetchJson;

use super::dto::*;
use super::state::AppState;
use super::templates::*;

/// Create the application router.
///
/// `static_dir` is the path to the static assets directory.
pub fn create_router<F>(state: AppState<F>, static_dir: &str) -> Router
where
    F: FetchJson + Clone + 'static,
{
    Router::new()
        .route("/", get(index_page).post(submit_place))
        .route("/nearest", get(nearest_stop::<F>))
        .route("/error", get(error_page))
        .route("/health", get(health))
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Index page with the place name form.
async fn index_page() -> IndexTemplate {
    IndexTemplate { message: None }
}

/// Form submission: hand the place name on to the result page.
async fn submit_place(Form(form): Form<PlaceForm>) -> Response {
    match form.place_name.filter(|p| !p.trim().is_empty()) {
        Some(place_name) => Redirect::to(&nearest_url(&place_name)).into_response(),
        None => IndexTemplate {
            message: Some("Please enter a place name.".to_string()),
        }
        .into_response(),
    }
}

/// Result page URL for a place name.
fn nearest_url(place_name: &str) -> String {
    let query = url::form_urlencoded::Serializer::new(String::new())
        .append_pair("place_name", place_name)
        .finish();
    format!("/nearest?{query}")
}

/// Generic error page.
async fn error_page() -> ErrorTemplate {
    ErrorTemplate::default()
}

/// Check if request accepts HTML.
fn accepts_html(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|accept| accept.contains("text/html"))
}

/// Resolve a place name to its nearest stop.
///
/// Browsers get the result page, or a redirect to the error page whatever
/// went wrong. Other clients get JSON with the error kind preserved.
async fn nearest_stop<F>(
    State(state): State<AppState<F>>,
    headers: HeaderMap,
    Query(req): Query<NearestRequest>,
) -> Result<Response, AppError>
where
    F: FetchJson + Clone + 'static,
{
    let place_name = req.place_name.unwrap_or_default();
    let result = state.finder.find_stop_near(&place_name).await;

    if accepts_html(&headers) {
        let stop = match result {
            Ok(stop) => stop,
            Err(e) => {
                warn!(kind = %e.kind(), error = %e, place = %place_name, "lookup failed");
                return Ok(Redirect::to("/error").into_response());
            }
        };

        Ok(StationTemplate::new(place_name, stop).into_response())
    } else {
        let stop = result?;
        Ok(Json(NearestResponse::new(place_name, stop)).into_response())
    }
}

/// Application error type.
#[derive(Debug)]
pub struct AppError {
    status: StatusCode,
    kind: ErrorKind,
    message: String,
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl From<LookupError> for AppError {
    fn from(e: LookupError) -> Self {
        let kind = e.kind();
        let status = match kind {
            ErrorKind::InvalidInput => StatusCode::BAD_REQUEST,
            ErrorKind::NoMatch | ErrorKind::NoStopFound => StatusCode::NOT_FOUND,
            ErrorKind::Transport | ErrorKind::Parse => StatusCode::BAD_GATEWAY,
            ErrorKind::Configuration => StatusCode::INTERNAL_SERVER_ERROR,
        };

        AppError {
            status,
            kind,
            message: e.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        warn!(status = %self.status, kind = %self.kind, message = %self.message, "request failed");

        let body = Json(ErrorResponse {
            error: self.message,
            kind: self.kind,
        });
        (self.status, body).into_response()
    }
}
