use axum::{
    extract::{Query, Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
};
use std::sync::Arc;

use super::AppState;
use super::models::first_param;

pub const FUNCTION_KEY_HEADER: &str = "x-functions-key";

/// Gate for function-level routes. The key may come in the
/// `x-functions-key` header or the `code` query parameter.
pub async fn require_function_key(
    State(state): State<Arc<AppState>>,
    Query(params): Query<Vec<(String, String)>>,
    request: Request,
    next: Next,
) -> Response {
    let presented = request
        .headers()
        .get(FUNCTION_KEY_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
        .or_else(|| first_param(&params, "code"));

    match presented {
        Some(key) if state.accepts_key(&key) => next.run(request).await,
        Some(_) => {
            tracing::warn!(path = %request.uri().path(), "rejected request with unknown function key");
            StatusCode::UNAUTHORIZED.into_response()
        }
        None => {
            tracing::warn!(path = %request.uri().path(), "rejected request without function key");
            StatusCode::UNAUTHORIZED.into_response()
        }
    }
}
