//! Configuration management

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use crate::application::errors::ConfigError;

/// Discord REST API root used for command registration
pub const DEFAULT_API_BASE: &str = "https://discord.com/api/v10";

/// Bot configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub bot: BotConfig,
    pub discord: DiscordConfig,
    /// User ids allowed to run developer-only commands
    #[serde(default)]
    pub developers: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct BotConfig {
    pub name: String,
    pub prefix: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct DiscordConfig {
    pub token: Option<String>,
    pub client_id: Option<String>,
    #[serde(default = "default_api_base")]
    pub api_base: String,
}

fn default_api_base() -> String {
    DEFAULT_API_BASE.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bot: BotConfig {
                name: "slate-bot".to_string(),
                prefix: "!".to_string(),
            },
            discord: DiscordConfig {
                token: None,
                client_id: None,
                api_base: default_api_base(),
            },
            developers: Vec::new(),
        }
    }
}

impl Config {
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let path = path.into();
        let content = std::fs::read_to_string(&path)
            .map_err(|e| ConfigError::Parse(format!("Failed to read config: {}", e)))?;

        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(content)
            .map_err(|e| ConfigError::Parse(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn load_env() -> Result<Self, ConfigError> {
        let mut config = Config::default();
        config.apply_env()?;
        Ok(config)
    }

    /// Overlays `DISCORD_TOKEN`, `DISCORD_CLIENT_ID`, `BOT_PREFIX` and
    /// `BOT_DEVELOPERS` (comma separated) from the process environment
    pub fn apply_env(&mut self) -> Result<(), ConfigError> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Applies overrides from `lookup`, then validates the result
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<(), ConfigError> {
        if let Some(token) = lookup("DISCORD_TOKEN") {
            self.discord.token = Some(token);
        }

        if let Some(client_id) = lookup("DISCORD_CLIENT_ID") {
            self.discord.client_id = Some(client_id);
        }

        if let Some(prefix) = lookup("BOT_PREFIX") {
            self.bot.prefix = prefix;
        }

        if let Some(developers) = lookup("BOT_DEVELOPERS") {
            self.developers = developers
                .split(',')
                .map(str::trim)
                .filter(|id| !id.is_empty())
                .map(str::to_string)
                .collect();
        }

        self.validate()
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.bot.prefix.is_empty() {
            return Err(ConfigError::InvalidValue("bot.prefix must not be empty".to_string()));
        }
        if self.bot.prefix.chars().any(char::is_whitespace) {
            return Err(ConfigError::InvalidValue(format!(
                "bot.prefix must not contain whitespace: {:?}",
                self.bot.prefix
            )));
        }
        Ok(())
    }

    /// Application id the slash command batch is registered under
    pub fn client_id(&self) -> Result<&str, ConfigError> {
        self.discord
            .client_id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .ok_or_else(|| ConfigError::MissingField("discord.client-id".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_yaml() {
        let yaml = r#"
bot:
  name: test-bot
  prefix: "?"
discord:
  token: abc
  client-id: "1234"
developers:
  - "42"
"#;
        let config = Config::from_yaml(yaml).unwrap();
        assert_eq!(config.bot.prefix, "?");
        assert_eq!(config.discord.token.as_deref(), Some("abc"));
        assert_eq!(config.client_id().unwrap(), "1234");
        assert_eq!(config.discord.api_base, DEFAULT_API_BASE);
        assert_eq!(config.developers, vec!["42"]);
    }

    #[test]
    fn test_missing_client_id() {
        let mut config = Config::default();
        assert!(matches!(config.client_id(), Err(ConfigError::MissingField(_))));

        config.discord.client_id = Some("   ".to_string());
        assert!(config.client_id().is_err());
    }

    #[test]
    fn test_overrides() {
        let mut config = Config::default();
        config
            .apply_overrides(|key| match key {
                "DISCORD_CLIENT_ID" => Some("99".to_string()),
                "BOT_DEVELOPERS" => Some(" 1, 2 ,,3".to_string()),
                _ => None,
            })
            .unwrap();

        assert_eq!(config.client_id().unwrap(), "99");
        assert_eq!(config.developers, vec!["1", "2", "3"]);
        assert_eq!(config.bot.prefix, "!");
        assert!(config.discord.token.is_none());
    }

    #[test]
    fn test_prefix_with_whitespace_rejected() {
        let yaml = "bot:\n  name: x\n  prefix: \"! \"\ndiscord:\n  token: null\n  client-id: null\n";
        assert!(matches!(Config::from_yaml(yaml), Err(ConfigError::InvalidValue(_))));
    }

    #[test]
    fn test_overridden_prefix_is_validated() {
        for prefix in ["! ", ""] {
            let mut config = Config::default();
            let result = config.apply_overrides(|key| match key {
                "BOT_PREFIX" => Some(prefix.to_string()),
                _ => None,
            });
            assert!(matches!(result, Err(ConfigError::InvalidValue(_))), "prefix {prefix:?}");
        }
    }

    #[test]
    fn test_default_round_trips_through_yaml() {
        let yaml = serde_yaml::to_string(&Config::default()).unwrap();
        assert_eq!(Config::from_yaml(&yaml).unwrap(), Config::default());
    }
}
