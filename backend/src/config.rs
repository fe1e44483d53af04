//! Runtime settings for the static host, read from the environment.

use std::{env, fmt::Display, str::FromStr};

use log::{info, warn};

pub const HOST: &str = "BADGE_PORTAL_HOST";
pub const PORT: &str = "BADGE_PORTAL_PORT";
pub const OPEN_BROWSER: &str = "BADGE_PORTAL_OPEN_BROWSER";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub open_browser: bool,
}

impl ServerConfig {
    pub fn load() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            host: try_load(&lookup, HOST, "127.0.0.1"),
            port: try_load(&lookup, PORT, "8080"),
            open_browser: try_load(&lookup, OPEN_BROWSER, "false"),
        }
    }

    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

fn try_load<F, T>(lookup: &F, key: &str, default: &str) -> T
where
    F: Fn(&str) -> Option<String>,
    T: FromStr + Default,
    T::Err: Display,
{
    let raw = lookup(key)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| {
            info!("{key} not set, using default: {default}");
            default.to_string()
        });

    raw.parse().or_else(|e| {
        warn!("Invalid {key} value {raw:?}: {e}, using default: {default}");
        default.parse()
    })
    .unwrap_or_default()
}
