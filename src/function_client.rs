use serde_json::{Value, json};

use crate::api::auth::FUNCTION_KEY_HEADER;
use crate::data_models::{TopicResult, topic_text};
use crate::error::FunctionClientError;

/// Calls a deployed `get-news-data` function.
#[derive(Debug, Clone)]
pub struct NewsFunctionClient {
    http: reqwest::Client,
    function_url: String,
    function_key: Option<String>,
}

impl NewsFunctionClient {
    pub fn new(function_url: impl Into<String>, function_key: Option<String>) -> NewsFunctionClient {
        NewsFunctionClient {
            http: reqwest::Client::new(),
            function_url: function_url.into(),
            function_key,
        }
    }

    /// Sends `{"topics": [...]}` and returns one result per topic, in order.
    pub async fn fetch_data(
        &self,
        topics: &[String],
    ) -> Result<Vec<TopicResult>, FunctionClientError> {
        let mut req = self
            .http
            .post(&self.function_url)
            .json(&json!({ "topics": topics }));
        if let Some(key) = &self.function_key {
            req = req.header(FUNCTION_KEY_HEADER, key);
        }

        let res = req.send().await?.error_for_status()?;
        let body: Value = res.json().await?;

        if let Some(err) = body.get("error") {
            return Err(FunctionClientError::Remote(topic_text(err)));
        }

        let results = serde_json::from_value(body)?;
        Ok(results)
    }
}

/// Splits topics into those with at least one hit and those without.
pub fn partition_by_hits(results: &[TopicResult]) -> (Vec<String>, Vec<String>) {
    let mut found = Vec::new();
    let mut not_found = Vec::new();

    for result in results {
        let topic = topic_text(&result.topic);
        if result.total_items() > 0 {
            found.push(topic);
        } else {
            not_found.push(topic);
        }
    }

    (found, not_found)
}
