use axum::{
    Json,
    body::Bytes,
    extract::{OriginalUri, Query, State},
    http::Method,
};
use futures::future::try_join_all;
use serde_json::Value;
use std::sync::Arc;

use crate::data_models::{DEFAULT_TOPIC, TopicResult, is_truthy, topic_text};
use crate::error::{FetchError, HandlerError};

use super::AppState;
use super::models::first_param;
use super::response::{JsonFailure, PlainFailure};

/// `GET|POST /get-new-data`: search one topic, answer with the upstream JSON.
pub async fn get_new_data(
    State(state): State<Arc<AppState>>,
    method: Method,
    OriginalUri(uri): OriginalUri,
    Query(params): Query<Vec<(String, String)>>,
    body: Bytes,
) -> Result<Json<Value>, JsonFailure> {
    tracing::info!(%method, url = %uri, "processed request");

    let topic = resolve_topic(first_param(&params, "topic"), &body);
    let data = state.chronicling.fetch_topic(&topic).await?;
    log_upstream_response(&topic, &data);

    Ok(Json(data))
}

/// `GET|POST /get-new-data/raw`: same lookup, upstream body passed through as-is.
pub async fn get_new_data_raw(
    State(state): State<Arc<AppState>>,
    method: Method,
    OriginalUri(uri): OriginalUri,
    Query(params): Query<Vec<(String, String)>>,
    body: Bytes,
) -> Result<String, PlainFailure> {
    tracing::info!(%method, url = %uri, "processed request");

    let topic = resolve_topic(first_param(&params, "topic"), &body);
    let data = state.chronicling.fetch_topic_raw(&topic).await?;
    tracing::info!(topic = %topic, bytes = data.len(), "upstream response");
    tracing::debug!(topic = %topic, data = %data, "upstream payload");

    Ok(data)
}

/// `POST /get-news-data`: search every topic in `{"topics": [...]}` at once.
///
/// All lookups are started together. The first failure fails the whole
/// request and the lookups still in flight are dropped.
pub async fn get_news_data(
    State(state): State<Arc<AppState>>,
    method: Method,
    OriginalUri(uri): OriginalUri,
    body: Bytes,
) -> Result<Json<Vec<TopicResult>>, JsonFailure> {
    tracing::info!(%method, url = %uri, "processed request");

    let payload: Value = serde_json::from_slice(&body).map_err(HandlerError::InvalidBody)?;
    let topics = resolve_topics(&payload)?;

    let client = &state.chronicling;
    let lookups = topics.into_iter().map(move |topic| async move {
        let data = client.fetch_topic(&topic_text(&topic)).await?;
        log_upstream_response(&topic_text(&topic), &data);
        Ok::<_, FetchError>(TopicResult::new(topic, data))
    });
    let results = try_join_all(lookups).await?;

    Ok(Json(results))
}

/// Query parameter, then body text, then the default. Empty values are skipped.
///
/// The body is only decoded when the query parameter is missing; invalid
/// UTF-8 is replaced rather than rejected.
pub fn resolve_topic(query_topic: Option<String>, body: &[u8]) -> String {
    query_topic
        .filter(|t| !t.is_empty())
        .or_else(|| {
            Some(String::from_utf8_lossy(body).into_owned()).filter(|b| !b.is_empty())
        })
        .unwrap_or_else(|| DEFAULT_TOPIC.to_string())
}

/// Picks the topics out of a multi-topic request body.
///
/// A missing or falsy `topics` falls back to the default topic. Anything
/// truthy that is not an array is rejected.
pub fn resolve_topics(payload: &Value) -> Result<Vec<Value>, HandlerError> {
    match payload.get("topics").filter(|t| is_truthy(t)) {
        None => Ok(vec![Value::String(DEFAULT_TOPIC.to_string())]),
        Some(Value::Array(items)) => Ok(items.clone()),
        Some(other) => Err(HandlerError::TopicsNotArray(other.clone())),
    }
}

fn log_upstream_response(topic: &str, data: &Value) {
    let total_items = data.get("totalItems").and_then(Value::as_u64);
    tracing::info!(topic = %topic, total_items, "upstream response");
    tracing::debug!(topic = %topic, data = %data, "upstream payload");
}
