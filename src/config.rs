use crate::error::{ConfigError, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_directory")]
    pub directory: String,
    #[serde(default = "default_log_filename")]
    pub filename: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Path of the paginated news listing; the page number is appended as `/{n}`.
    #[serde(default = "default_listing_path")]
    pub listing_path: String,

    #[serde(default)]
    pub start_page: u32,

    /// Exclusive upper bound for the interactive page count.
    #[serde(default = "default_max_page_count")]
    pub max_page_count: u32,

    /// Number of persisted entries to visit for tables; `0` visits all of them.
    #[serde(default)]
    pub article_limit: usize,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    #[serde(default = "default_chrome_impersonation")]
    pub chrome_impersonation: bool,

    #[serde(default = "default_results_dir")]
    pub results_dir: String,

    #[serde(default = "default_players_dir")]
    pub players_dir: String,

    #[serde(default)]
    pub logging: LogConfig,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            directory: default_log_directory(),
            filename: default_log_filename(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            listing_path: default_listing_path(),
            start_page: 0,
            max_page_count: default_max_page_count(),
            article_limit: 0,
            user_agent: default_user_agent(),
            chrome_impersonation: default_chrome_impersonation(),
            results_dir: default_results_dir(),
            players_dir: default_players_dir(),
            logging: LogConfig::default(),
        }
    }
}

impl Config {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::FileRead)?;
        Self::from_toml(&content)
    }

    /// Like [`Config::from_file`], but a missing file yields the defaults.
    pub fn from_file_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("No config file at {:?}, using defaults", path.as_ref());
            Ok(Self::default())
        }
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content).map_err(ConfigError::Parse)?;

        config.validate()?;
        info!("Configuration loaded successfully");
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.base_url.is_empty() {
            return Err(ConfigError::MissingField("base_url".to_string()).into());
        }
        if !self.base_url.starts_with("http") {
            return Err(ConfigError::InvalidValue(format!(
                "base_url must start with http(s): {}",
                self.base_url
            ))
            .into());
        }

        if self.listing_path.is_empty() {
            return Err(
                ConfigError::InvalidValue("listing_path cannot be empty".to_string()).into(),
            );
        }

        if self.max_page_count == 0 {
            return Err(ConfigError::InvalidValue(
                "max_page_count must be greater than 0".to_string(),
            )
            .into());
        }

        if self.user_agent.is_empty() {
            return Err(ConfigError::MissingField("user_agent".to_string()).into());
        }

        Ok(())
    }

    /// Full listing URL without the trailing page number.
    pub fn listing_url(&self) -> String {
        format!(
            "{}{}",
            self.base_url.trim_end_matches('/'),
            self.listing_path
        )
    }

    pub fn sorted_players_dir(&self) -> PathBuf {
        Path::new(&self.players_dir).join("sorted_players")
    }
}

fn default_base_url() -> String {
    "https://www.pokerfirma.com".to_string()
}

fn default_listing_path() -> String {
    "/tag/schenefeld/page".to_string()
}

fn default_max_page_count() -> u32 {
    50
}

fn default_user_agent() -> String {
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/107.0.0.0 Safari/537.36".to_string()
}

fn default_chrome_impersonation() -> bool {
    true
}

fn default_results_dir() -> String {
    "poker_scrape_results".to_string()
}

fn default_players_dir() -> String {
    "players".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_directory() -> String {
    "logs".to_string()
}

fn default_log_filename() -> String {
    "poker-winnings.log".to_string()
}
