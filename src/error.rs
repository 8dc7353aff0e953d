use thiserror::Error;

/// Failure talking to the Chronicling America search API.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("upstream request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("upstream returned invalid JSON: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Anything that can go wrong inside a handler. All of it becomes a 500.
#[derive(Debug, Error)]
pub enum HandlerError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("request body is not valid JSON: {0}")]
    InvalidBody(#[source] serde_json::Error),

    #[error("`topics` must be an array, got {0}")]
    TopicsNotArray(serde_json::Value),
}

/// Failure calling a deployed multi-topic function.
#[derive(Debug, Error)]
pub enum FunctionClientError {
    #[error("function request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("function returned an unexpected payload: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("function reported an error: {0}")]
    Remote(String),
}
