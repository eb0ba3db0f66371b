//! Environment-driven configuration for both binaries.

use std::{env, fmt::Display, str::FromStr};

use tracing::{info, warn};

pub struct ServerConfig {
    pub port: u16,
}

impl ServerConfig {
    pub fn load() -> Self {
        Self {
            port: try_load("FLASHCARDS_PORT", "8088"),
        }
    }
}

pub struct ClientConfig {
    pub server_url: String,
}

impl ClientConfig {
    pub fn load() -> Self {
        Self {
            server_url: try_load("FLASHCARDS_SERVER_URL", "http://localhost:8088"),
        }
    }
}

fn try_load<T: FromStr>(key: &str, default: &str) -> T
where
    T::Err: Display,
{
    env::var(key)
        .unwrap_or_else(|_| {
            info!("{key} not set, using default: {default}");
            default.to_string()
        })
        .parse()
        .map_err(|e| {
            warn!("Invalid {key} value: {e}");
        })
        .expect("Environment misconfigured!")
}
