use serde_json::Value;

use crate::error::FetchError;

/// Builds the title search URL for a topic.
///
/// The topic is interpolated as-is: spaces, `&` or `#` in it end up in the
/// query string unescaped.
pub fn topic_url(base_url: &str, topic: &str) -> String {
    format!(
        "{}/search/titles/results/?terms={}&format=json",
        base_url.trim_end_matches('/'),
        topic
    )
}

/// Thin client for the Chronicling America title search.
#[derive(Debug, Clone)]
pub struct ChroniclingClient {
    http: reqwest::Client,
    base_url: String,
}

impl ChroniclingClient {
    pub fn new(base_url: impl Into<String>) -> ChroniclingClient {
        ChroniclingClient {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetches the search results for `topic` and returns the body untouched.
    /// Non-2xx statuses are errors.
    pub async fn fetch_topic_raw(&self, topic: &str) -> Result<String, FetchError> {
        let url = topic_url(&self.base_url, topic);
        tracing::debug!(%url, "querying upstream");
        let res = self.http.get(&url).send().await?.error_for_status()?;
        let body = res.text().await?;
        Ok(body)
    }

    /// Same as [`fetch_topic_raw`](Self::fetch_topic_raw) but decodes the body as JSON.
    pub async fn fetch_topic(&self, topic: &str) -> Result<Value, FetchError> {
        let body = self.fetch_topic_raw(topic).await?;
        let data = serde_json::from_str(&body)?;
        Ok(data)
    }
}
