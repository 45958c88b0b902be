use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every variable has a default, so the server starts with no env at all.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    /// Maximum accepted upload size in bytes
    pub max_upload_bytes: usize,
    /// Requests admitted to wait for the render stage; beyond this the
    /// server answers busy immediately
    pub waiting_room: usize,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: env_or("PORT", "8080")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            max_upload_bytes: env_or("MAX_UPLOAD_BYTES", "26214400") // 25 MiB
                .parse::<usize>()
                .context("MAX_UPLOAD_BYTES must be a byte count")?,
            waiting_room: env_or("WAITING_ROOM", "4")
                .parse::<usize>()
                .context("WAITING_ROOM must be a request count")?,
            rust_log: env_or("RUST_LOG", "info"),
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
