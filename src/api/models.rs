use serde::{Deserialize, Serialize};

pub const FETCH_ERROR_MESSAGE: &str = "Error fetching news data. Please try again later.";

/// First value of a query parameter. Later repeats are ignored.
pub fn first_param(params: &[(String, String)], name: &str) -> Option<String> {
    params
        .iter()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.clone())
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn fetch_failed() -> ErrorBody {
        ErrorBody {
            error: FETCH_ERROR_MESSAGE.to_string(),
        }
    }
}
