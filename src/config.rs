//! Configuration management for the resume screener

use crate::error::{Result, ScreenerError};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub llm: LlmConfig,
    pub location: LocationConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    pub model: String,
    pub endpoint: String,
    pub temperature: f32,
    pub max_output_tokens: usize,
    pub max_retries: u32,
}

/// Business rule table mapping region-name substrings to a score boost.
/// Kept in configuration so new regions can be added without touching
/// the scoring code.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationConfig {
    pub preferred_regions: Vec<RegionRule>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegionRule {
    pub substring: String,
    pub score: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub batch_label: String,
    pub color_output: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            llm: LlmConfig {
                model: "gemini-2.0-flash".to_string(),
                endpoint: "https://generativelanguage.googleapis.com/v1beta/models".to_string(),
                temperature: 0.4,
                max_output_tokens: 2000,
                max_retries: 2,
            },
            location: LocationConfig {
                preferred_regions: vec![
                    RegionRule {
                        substring: "telangana".to_string(),
                        score: 0.1,
                    },
                    RegionRule {
                        substring: "andhra pradesh".to_string(),
                        score: 0.1,
                    },
                ],
            },
            output: OutputConfig {
                batch_label: "Batch 1".to_string(),
                color_output: true,
            },
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = toml::from_str(&content).map_err(|e| {
                ScreenerError::Configuration(format!("Failed to parse config: {}", e))
            })?;
            Ok(config)
        } else {
            let config = Self::default();
            config.save()?;
            Ok(config)
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| {
            ScreenerError::Configuration(format!("Failed to serialize config: {}", e))
        })?;

        std::fs::write(&config_path, content)?;
        Ok(())
    }

    fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("resume-screener")
            .join("config.toml")
    }

    /// API key is deliberately not part of the config file; it comes from
    /// the environment (a .env file is honored via dotenvy in main).
    pub fn api_key() -> Result<String> {
        std::env::var("GOOGLE_API_KEY").map_err(|_| {
            ScreenerError::Configuration(
                "GOOGLE_API_KEY environment variable is not set".to_string(),
            )
        })
    }
}
