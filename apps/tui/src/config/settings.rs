use base_bharat_core::reveal::DEFAULT_REVEAL_DELAY;
use base_bharat_core::site::SiteOptions;
use base_bharat_core::starfield::DEFAULT_STAR_COUNT;
use base_bharat_core::Category;
use dotenv::dotenv;
use std::env;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

const DEFAULT_TICK_MS: u64 = 50;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{name} must be a whole number, got {value:?}")]
    InvalidNumber { name: &'static str, value: String },
    #[error("unknown leaderboard category {0:?} (expected ev, quantum, space or ai)")]
    UnknownCategory(String),
}

/// Runtime settings, read from the environment after CLI overrides and
/// `.env` have been applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub start_route: String,
    pub category: Category,
    pub reveal_delay: Duration,
    pub tick_rate: Duration,
    pub star_count: usize,
    pub log_file: Option<PathBuf>,
    pub debug: bool,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load environment variables from .env file
        dotenv().ok();
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let number = |name: &'static str| -> Result<Option<u64>, ConfigError> {
            lookup(name)
                .map(|value| {
                    value
                        .trim()
                        .parse()
                        .map_err(|_| ConfigError::InvalidNumber { name, value })
                })
                .transpose()
        };

        let category = match lookup("BHARAT_CATEGORY") {
            Some(value) => Category::parse(&value).ok_or(ConfigError::UnknownCategory(value))?,
            None => Category::Ev,
        };

        Ok(Self {
            start_route: lookup("BHARAT_START_ROUTE").unwrap_or_else(|| "/".to_string()),
            category,
            reveal_delay: number("BHARAT_REVEAL_DELAY_MS")?
                .map_or(DEFAULT_REVEAL_DELAY, Duration::from_millis),
            tick_rate: Duration::from_millis(number("BHARAT_TICK_MS")?.unwrap_or(DEFAULT_TICK_MS).max(1)),
            star_count: number("BHARAT_STAR_COUNT")?
                .and_then(|count| usize::try_from(count).ok())
                .unwrap_or(DEFAULT_STAR_COUNT),
            log_file: lookup("BHARAT_LOG_FILE")
                .filter(|path| !path.trim().is_empty())
                .map(PathBuf::from),
            debug: lookup("DEBUG").is_some_and(|value| !matches!(value.as_str(), "" | "0" | "false")),
        })
    }

    pub const fn site_options(&self) -> SiteOptions {
        SiteOptions {
            reveal_delay: self.reveal_delay,
            star_count: self.star_count,
            star_seed: SiteOptions::DEFAULT_STAR_SEED,
            category: self.category,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        let options = SiteOptions::default();
        Self {
            start_route: "/".to_string(),
            category: options.category,
            reveal_delay: options.reveal_delay,
            tick_rate: Duration::from_millis(DEFAULT_TICK_MS),
            star_count: options.star_count,
            log_file: None,
            debug: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| ((*key).to_string(), (*value).to_string()))
            .collect();
        AppConfig::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn defaults_without_environment() -> Result<(), ConfigError> {
        let config = config_from(&[])?;
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.reveal_delay, Duration::from_millis(800));
        Ok(())
    }

    #[test]
    fn reads_overrides() -> Result<(), ConfigError> {
        let config = config_from(&[
            ("BHARAT_START_ROUTE", "/global-leaderboard"),
            ("BHARAT_CATEGORY", "Quantum"),
            ("BHARAT_REVEAL_DELAY_MS", "120"),
            ("BHARAT_TICK_MS", "0"),
            ("BHARAT_STAR_COUNT", "12"),
            ("BHARAT_LOG_FILE", "out.log"),
            ("DEBUG", "1"),
        ])?;

        assert_eq!(config.start_route, "/global-leaderboard");
        assert_eq!(config.category, Category::Quantum);
        assert_eq!(config.reveal_delay, Duration::from_millis(120));
        assert_eq!(config.tick_rate, Duration::from_millis(1));
        assert_eq!(config.star_count, 12);
        assert_eq!(config.log_file, Some(PathBuf::from("out.log")));
        assert!(config.debug);
        assert_eq!(config.site_options().star_count, 12);
        Ok(())
    }

    #[test]
    fn rejects_bad_values() {
        assert_eq!(
            config_from(&[("BHARAT_REVEAL_DELAY_MS", "soon")]),
            Err(ConfigError::InvalidNumber {
                name: "BHARAT_REVEAL_DELAY_MS",
                value: "soon".to_string(),
            })
        );
        assert_eq!(
            config_from(&[("BHARAT_CATEGORY", "biotech")]),
            Err(ConfigError::UnknownCategory("biotech".to_string()))
        );
    }

    #[test]
    fn debug_flag_accepts_falsy_values() -> Result<(), ConfigError> {
        assert!(!config_from(&[("DEBUG", "0")])?.debug);
        assert!(!config_from(&[("DEBUG", "false")])?.debug);
        Ok(())
    }
}
