use roomsplit_domain::{SplitConfig, config::DEFAULT_MAX_ROUNDS};
use std::{borrow::Cow, env};
use tracing_subscriber::EnvFilter;

pub const MAX_ROUNDS_VAR: &str = "ROOMSPLIT_MAX_ROUNDS";
pub const SCALE_VAR: &str = "ROOMSPLIT_SCALE";
pub const DEFAULT_SCALE: u32 = 2;

/// Settings read from the environment (and a `.env` file, if present).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppConfig {
    pub split: SplitConfig,
    /// Decimal places used when printing costs.
    pub scale: u32,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, Cow<'static, str>> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, Cow<'static, str>> {
        let max_rounds = match lookup(MAX_ROUNDS_VAR) {
            Some(raw) => raw.trim().parse::<usize>().map_err(|err| {
                format!("{MAX_ROUNDS_VAR} must be a non-negative integer, got '{raw}': {err}")
            })?,
            None => DEFAULT_MAX_ROUNDS,
        };
        let scale = match lookup(SCALE_VAR) {
            Some(raw) => raw
                .trim()
                .parse::<u32>()
                .ok()
                .filter(|scale| *scale <= 28)
                .ok_or_else(|| format!("{SCALE_VAR} must be an integer from 0 to 28, got '{raw}'"))?,
            None => DEFAULT_SCALE,
        };

        Ok(Self {
            split: SplitConfig { max_rounds },
            scale,
        })
    }
}

/// Logs go to stderr so the printed split stays clean; `RUST_LOG` picks the level.
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}
