use std::{net::SocketAddr, time::Duration};

use anyhow::Context;
use axum::http::HeaderValue;

pub struct Config {
    pub listen_addr: SocketAddr,
    pub db_path: String,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
    pub static_dir: String,
    pub seed_demo_data: bool,
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parse_flag(key: &str, raw: &str) -> anyhow::Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => anyhow::bail!("Invalid {}: '{}' is not a boolean", key, other),
    }
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let listen_addr: SocketAddr = env_or("NESTEGG_LISTEN_ADDR", "0.0.0.0:5000")
            .parse()
            .context("Invalid NESTEGG_LISTEN_ADDR")?;
        let db_path = env_or("NESTEGG_DB_PATH", "./db/app.db");
        let cors_allow: Vec<String> = env_or("NESTEGG_CORS_ALLOW_ORIGINS", "*")
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        for origin in cors_allow.iter().filter(|o| o.as_str() != "*") {
            HeaderValue::from_str(origin)
                .with_context(|| format!("Invalid NESTEGG_CORS_ALLOW_ORIGINS entry '{}'", origin))?;
        }
        let timeout_ms: u64 = env_or("NESTEGG_REQUEST_TIMEOUT_MS", "30000")
            .trim()
            .parse()
            .context("Invalid NESTEGG_REQUEST_TIMEOUT_MS")?;
        let static_dir = env_or("NESTEGG_STATIC_DIR", "dist");
        let seed_demo_data = parse_flag(
            "NESTEGG_SEED_DEMO_DATA",
            &env_or("NESTEGG_SEED_DEMO_DATA", "true"),
        )?;
        Ok(Self {
            listen_addr,
            db_path,
            cors_allow,
            request_timeout: Duration::from_millis(timeout_ms),
            static_dir,
            seed_demo_data,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_accept_common_spellings() {
        assert!(parse_flag("X", "TRUE").unwrap());
        assert!(parse_flag("X", " 1 ").unwrap());
        assert!(!parse_flag("X", "off").unwrap());
        assert!(parse_flag("X", "maybe").is_err());
    }
}
