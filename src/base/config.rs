//! Load configuration via `config` crate with env-override support.

use std::{ops::Deref, sync::Arc};

use serde::Deserialize;

use super::types::Res;

/// Default callback ID of the global shortcut that starts a report.
fn default_shortcut_callback_id() -> String {
    "triage".to_string()
}

/// Default number of history messages fetched per report.
fn default_history_limit() -> u16 {
    100
}

/// Configuration for the triage-report application.
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// The shared configuration values.
    pub inner: Arc<ConfigInner>,
}

impl Deref for Config {
    type Target = ConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

/// Configuration values, read from the environment (prefixed with `TRIAGE_REPORT_`) or a TOML file.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct ConfigInner {
    /// Slack app token, used for Socket Mode (`SLACK_APP_TOKEN`).
    pub slack_app_token: String,
    /// Slack bot token, used for Web API calls (`SLACK_BOT_TOKEN`).
    pub slack_bot_token: String,
    /// Callback ID of the global shortcut that opens the channel picker (`SHORTCUT_CALLBACK_ID`).
    #[serde(default = "default_shortcut_callback_id")]
    pub shortcut_callback_id: String,
    /// Number of channel history messages to scan per report (`HISTORY_LIMIT`).
    /// Slack caps a single history page at 1000.
    #[serde(default = "default_history_limit")]
    pub history_limit: u16,
}

impl Config {
    /// Loads and validates the configuration.
    ///
    /// Values come from the environment, then from `explicit_path` or `.hidden/config.toml` if present.
    pub fn load(explicit_path: Option<&std::path::Path>) -> Res<Self> {
        let mut cfg = config::Config::builder().add_source(config::Environment::default().prefix("TRIAGE_REPORT"));

        if let Some(p) = explicit_path {
            cfg = cfg.add_source(config::File::from(p.to_path_buf()));
        } else if std::path::Path::new(".hidden/config.toml").exists() {
            cfg = cfg.add_source(config::File::with_name(".hidden/config.toml"));
        }

        let result = Config {
            inner: Arc::new(cfg.build()?.try_deserialize()?),
        };

        result.validate()?;

        Ok(result)
    }

    fn validate(&self) -> Res<()> {
        if self.history_limit < 1 || self.history_limit > 1000 {
            return Err(anyhow::anyhow!("History limit must be between 1 and 1000."));
        }

        if self.shortcut_callback_id.is_empty() {
            return Err(anyhow::anyhow!("Shortcut callback ID must not be empty."));
        }

        Ok(())
    }
}

// Tests.

#[cfg(test)]
mod tests {
    use super::*;

    fn config(history_limit: u16) -> Config {
        Config {
            inner: Arc::new(ConfigInner {
                slack_app_token: "xapp-test".to_string(),
                slack_bot_token: "xoxb-test".to_string(),
                shortcut_callback_id: default_shortcut_callback_id(),
                history_limit,
            }),
        }
    }

    #[test]
    fn test_history_limit_bounds() {
        assert!(config(0).validate().is_err());
        assert!(config(1).validate().is_ok());
        assert!(config(1000).validate().is_ok());
        assert!(config(1001).validate().is_err());
    }

    #[test]
    fn test_load_from_file_applies_defaults() {
        let path = std::env::temp_dir().join(format!("triage-report-config-{}.toml", std::process::id()));
        std::fs::write(&path, "slack_app_token = \"xapp-file\"\nslack_bot_token = \"xoxb-file\"\n").unwrap();

        let config = Config::load(Some(path.as_path())).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(config.slack_app_token, "xapp-file");
        assert_eq!(config.slack_bot_token, "xoxb-file");
        assert_eq!(config.shortcut_callback_id, "triage");
        assert_eq!(config.history_limit, 100);
    }
}
