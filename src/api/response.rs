use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::error::{FetchError, HandlerError};

use super::models::{ErrorBody, FETCH_ERROR_MESSAGE};

/// Handler failure rendered as `500 {"error": ...}`.
///
/// The underlying error is logged, never sent to the caller.
#[derive(Debug)]
pub struct JsonFailure(pub HandlerError);

/// Handler failure rendered as a plain `500` text body.
#[derive(Debug)]
pub struct PlainFailure(pub HandlerError);

impl From<HandlerError> for JsonFailure {
    fn from(err: HandlerError) -> Self {
        JsonFailure(err)
    }
}

impl From<FetchError> for JsonFailure {
    fn from(err: FetchError) -> Self {
        JsonFailure(HandlerError::Fetch(err))
    }
}

impl From<FetchError> for PlainFailure {
    fn from(err: FetchError) -> Self {
        PlainFailure(HandlerError::Fetch(err))
    }
}

impl IntoResponse for JsonFailure {
    fn into_response(self) -> Response {
        tracing::error!(error = %self.0, "error fetching data");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorBody::fetch_failed()),
        )
            .into_response()
    }
}

impl IntoResponse for PlainFailure {
    fn into_response(self) -> Response {
        tracing::error!(error = %self.0, "error fetching data");
        (StatusCode::INTERNAL_SERVER_ERROR, FETCH_ERROR_MESSAGE).into_response()
    }
}
