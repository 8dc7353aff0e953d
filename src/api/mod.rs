use axum::{
    Router, middleware,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use crate::chronicling::ChroniclingClient;
use crate::config::Config;

pub mod auth;
pub mod handlers;
pub mod models;
pub mod response;

/// Shared by every request. Nothing in here is mutated after startup.
#[derive(Debug, Clone)]
pub struct AppState {
    pub chronicling: ChroniclingClient,
    pub function_keys: Vec<String>,
}

impl AppState {
    pub fn new(chronicling: ChroniclingClient, function_keys: Vec<String>) -> AppState {
        AppState {
            chronicling,
            function_keys,
        }
    }

    pub fn from_config(config: &Config) -> AppState {
        AppState::new(
            ChroniclingClient::new(config.chronicling_base_url.clone()),
            config.function_keys.clone(),
        )
    }

    pub fn accepts_key(&self, key: &str) -> bool {
        self.function_keys.iter().any(|k| k == key)
    }
}

pub fn create_router(state: Arc<AppState>, route_prefix: &str) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Function-level routes
    let keyed = Router::new()
        .route("/get-news-data", post(handlers::get_news_data))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth::require_function_key,
        ));

    // Anonymous routes
    let routes = Router::new()
        .route(
            "/get-new-data",
            get(handlers::get_new_data).post(handlers::get_new_data),
        )
        .route(
            "/get-new-data/raw",
            get(handlers::get_new_data_raw).post(handlers::get_new_data_raw),
        )
        .merge(keyed)
        .with_state(state);

    let prefix = route_prefix.trim_matches('/');
    let app = if prefix.is_empty() {
        routes
    } else {
        Router::new().nest(&format!("/{prefix}"), routes)
    };

    app.layer(cors)
}
