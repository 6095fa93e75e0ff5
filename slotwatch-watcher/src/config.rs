//! Watcher configuration
//!
//! Loaded once from a JSON file at startup and immutable for the process
//! lifetime. Only the account- and alert-specific fields are required;
//! everything operational (URLs, intervals, timeouts) has defaults.

use std::path::Path;
use std::time::Duration;

use anyhow::Context;
use chrono::NaiveDate;
use serde::Deserialize;

use slotwatch_core::domain::location::Location;

/// How the earliest appointment is retrieved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckMode {
    /// Fetch the provider's appointments-by-day JSON endpoint directly
    #[default]
    Api,
    /// Click through the scheduling UI to the date-picker
    Ui,
}

/// Watcher configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Consular location to watch
    pub location: Location,

    /// Scheduling-site account credentials
    pub username: String,
    pub password: String,

    /// Schedule identifier from the account's appointment URL
    pub schedule_id: String,

    /// Alert on any appointment strictly before this date
    pub alert_before: NaiveDate,

    /// Telegram bot token
    pub bot_token: String,

    /// Chat identifiers to notify
    pub chat_ids: Vec<String>,

    /// Retrieval variant
    #[serde(default)]
    pub check_mode: CheckMode,

    /// Scheduling site base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// WebDriver endpoint the browser sessions are opened against
    #[serde(default = "default_webdriver_url")]
    pub webdriver_url: String,

    /// Delay between the end of one attempt and the start of the next
    #[serde(default = "default_poll_interval_secs")]
    pub poll_interval_secs: u64,

    /// Upper bound on a single attempt; a hung browser interaction must not
    /// stall the loop
    #[serde(default = "default_attempt_timeout_secs")]
    pub attempt_timeout_secs: u64,

    /// How many months the date-picker may be advanced before giving up
    #[serde(default = "default_max_month_advances")]
    pub max_month_advances: u32,

    /// Pause after navigations and clicks to let the UI settle
    #[serde(default = "default_settle_delay_ms")]
    pub settle_delay_ms: u64,
}

fn default_base_url() -> String {
    "https://ais.usvisa-info.com/es-cl/niv".to_string()
}

fn default_webdriver_url() -> String {
    "http://localhost:4444".to_string()
}

fn default_poll_interval_secs() -> u64 {
    600
}

fn default_attempt_timeout_secs() -> u64 {
    300
}

fn default_max_month_advances() -> u32 {
    18
}

fn default_settle_delay_ms() -> u64 {
    3000
}

impl Config {
    /// Loads and validates configuration from a JSON file
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;

        let config: Config = serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;

        config.validate()?;
        Ok(config)
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_secs)
    }

    pub fn attempt_timeout(&self) -> Duration {
        Duration::from_secs(self.attempt_timeout_secs)
    }

    pub fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_delay_ms)
    }

    /// Validates the configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.username.is_empty() {
            anyhow::bail!("username cannot be empty");
        }

        if self.password.is_empty() {
            anyhow::bail!("password cannot be empty");
        }

        if self.schedule_id.is_empty() {
            anyhow::bail!("schedule_id cannot be empty");
        }

        if self.bot_token.is_empty() {
            anyhow::bail!("bot_token cannot be empty");
        }

        if self.chat_ids.is_empty() {
            anyhow::bail!("chat_ids cannot be empty");
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            anyhow::bail!("base_url must start with http:// or https://");
        }

        if !self.webdriver_url.starts_with("http://") && !self.webdriver_url.starts_with("https://")
        {
            anyhow::bail!("webdriver_url must start with http:// or https://");
        }

        if self.poll_interval_secs == 0 {
            anyhow::bail!("poll_interval_secs must be greater than 0");
        }

        if self.attempt_timeout_secs == 0 {
            anyhow::bail!("attempt_timeout_secs must be greater than 0");
        }

        if self.max_month_advances == 0 {
            anyhow::bail!("max_month_advances must be greater than 0");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const MINIMAL: &str = r#"{
        "location": "santiago",
        "username": "user@example.com",
        "password": "hunter2",
        "schedule_id": "12345678",
        "alert_before": "2024-06-01",
        "bot_token": "123:abc",
        "chat_ids": ["1001", "1002"]
    }"#;

    #[test]
    fn test_minimal_config_gets_defaults() {
        let config: Config = serde_json::from_str(MINIMAL).unwrap();

        assert_eq!(config.location, Location::Santiago);
        assert_eq!(config.check_mode, CheckMode::Api);
        assert_eq!(config.poll_interval(), Duration::from_secs(600));
        assert_eq!(config.attempt_timeout(), Duration::from_secs(300));
        assert_eq!(config.max_month_advances, 18);
        assert_eq!(config.settle_delay(), Duration::from_millis(3000));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_check_mode_is_selectable() {
        let raw = MINIMAL.replacen('{', r#"{"check_mode": "ui","#, 1);
        let config: Config = serde_json::from_str(&raw).unwrap();
        assert_eq!(config.check_mode, CheckMode::Ui);
    }

    #[test]
    fn test_unknown_location_fails_to_parse() {
        let raw = MINIMAL.replace("santiago", "boston");
        assert!(serde_json::from_str::<Config>(&raw).is_err());
    }

    #[test]
    fn test_validation_rejects_empty_recipients() {
        let mut config: Config = serde_json::from_str(MINIMAL).unwrap();
        config.chat_ids.clear();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_bad_urls() {
        let mut config: Config = serde_json::from_str(MINIMAL).unwrap();
        config.base_url = "not-a-url".to_string();
        assert!(config.validate().is_err());

        let mut config: Config = serde_json::from_str(MINIMAL).unwrap();
        config.webdriver_url = "localhost:4444".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_zero_interval() {
        let mut config: Config = serde_json::from_str(MINIMAL).unwrap();
        config.poll_interval_secs = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_from_file_round_trip() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(MINIMAL.as_bytes()).unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.schedule_id, "12345678");
        assert_eq!(config.chat_ids, vec!["1001", "1002"]);
    }

    #[test]
    fn test_from_file_rejects_malformed_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"{not json").unwrap();
        assert!(Config::from_file(file.path()).is_err());
    }
}
