use dotenvy::dotenv;
use once_cell::sync::Lazy;
use std::env;

pub static CONFIG: Lazy<Config> = Lazy::new(|| {
    dotenv().ok(); // Load .env file if present
    Config::from_env()
});

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:7071";
pub const DEFAULT_ROUTE_PREFIX: &str = "api";
pub const DEFAULT_CHRONICLING_BASE_URL: &str = "https://chroniclingamerica.loc.gov";

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: String,
    pub route_prefix: String,
    pub chronicling_base_url: String,
    /// Secrets accepted by the key-gated routes. Empty means nothing gets through.
    pub function_keys: Vec<String>,
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Config {
        Config {
            bind_addr: get_env_or_default("BIND_ADDR", DEFAULT_BIND_ADDR),
            route_prefix: get_env_or_default("ROUTE_PREFIX", DEFAULT_ROUTE_PREFIX),
            chronicling_base_url: get_env_or_default(
                "CHRONICLING_BASE_URL",
                DEFAULT_CHRONICLING_BASE_URL,
            ),
            function_keys: parse_key_list(&get_env_or_default("FUNCTION_KEYS", "")),
            log_level: get_env_or_default("LOG_LEVEL", "info"),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            route_prefix: DEFAULT_ROUTE_PREFIX.to_string(),
            chronicling_base_url: DEFAULT_CHRONICLING_BASE_URL.to_string(),
            function_keys: Vec::new(),
            log_level: "info".to_string(),
        }
    }
}

fn get_env_or_default(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Splits a comma separated list, dropping blank entries.
pub fn parse_key_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|k| k.trim())
        .filter(|k| !k.is_empty())
        .map(|k| k.to_string())
        .collect()
}
