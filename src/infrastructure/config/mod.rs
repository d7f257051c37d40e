//! Configuration management

use serde::{Deserialize, Serialize};
use crate::application::errors::ConfigError;
use crate::infrastructure::storage::DEFAULT_MODEL_PATH;

/// Bot configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub bot: BotConfig,
    pub model: ModelConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct BotConfig {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct ModelConfig {
    /// Where the builder writes the serialized model.
    pub path: String,
    pub vocab_size: usize,
    pub hidden_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bot: BotConfig {
                name: "hollow-bot".to_string(),
            },
            model: ModelConfig {
                path: DEFAULT_MODEL_PATH.to_string(),
                vocab_size: 256,
                hidden_size: 128,
            },
        }
    }
}

impl Config {
    pub fn load(path: impl AsRef<std::path::Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::Parse(format!("Failed to read config: {}", e)))?;

        serde_yaml::from_str(&content)
            .map_err(|e| ConfigError::Parse(format!("Failed to parse config: {}", e)))
    }

    pub fn load_env() -> Self {
        // Load from environment variables
        let mut config = Config::default();

        if let Ok(name) = std::env::var("BOT_NAME") {
            config.bot.name = name;
        }

        if let Ok(path) = std::env::var("MODEL_PATH") {
            config.model.path = path;
        }

        config
    }
}
