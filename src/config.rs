//! Runtime configuration read from the environment.

use std::path::PathBuf;

use tui_flappy_core::GameConfig;
use tui_flappy_types::TICK_MS;

pub const ENV_SEED: &str = "FLAPPY_SEED";
pub const ENV_TICK_MS: &str = "FLAPPY_TICK_MS";
pub const ENV_AUDIO_DISABLED: &str = "FLAPPY_AUDIO_DISABLED";
pub const ENV_LOG_PATH: &str = "FLAPPY_LOG_PATH";
pub const ENV_LOG: &str = "FLAPPY_LOG";

const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub game: GameConfig,
    /// Gap RNG seed; `None` picks a random one at startup.
    pub seed: Option<u64>,
    pub tick_ms: u32,
    pub audio_disabled: bool,
    /// Logging is off unless a file is given.
    pub log_path: Option<PathBuf>,
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            game: GameConfig::default(),
            seed: None,
            tick_ms: TICK_MS,
            audio_disabled: false,
            log_path: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key/value source. Unparseable values fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let seed = get(ENV_SEED).and_then(|s| s.parse().ok());

        let tick_ms = get(ENV_TICK_MS)
            .and_then(|s| s.parse().ok())
            .filter(|&ms: &u32| ms > 0)
            .unwrap_or(TICK_MS);

        let audio_disabled = get(ENV_AUDIO_DISABLED)
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        let log_path = get(ENV_LOG_PATH).map(PathBuf::from);
        let log_filter = get(ENV_LOG).unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        Self {
            game: GameConfig::default(),
            seed,
            tick_ms,
            audio_disabled,
            log_path,
            log_filter,
        }
    }
}
