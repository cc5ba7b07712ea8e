use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};

use crate::date::check_target_year;
use crate::error::{NumerologyError, Result};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ReadingConfig {
    /// Year used for personal-year cycles instead of the current calendar year.
    pub target_year: Option<u32>,
    /// Pins narrative variant selection for every reading.
    pub variant_seed: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoveWeights {
    pub soul: f64,
    pub destiny: f64,
    pub chemistry: f64,
}

impl Default for LoveWeights {
    fn default() -> Self {
        Self {
            soul: 0.35,
            destiny: 0.30,
            chemistry: 0.35,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PromptConfig {
    pub model: String,
    pub history_limit: usize,
    pub previous_analysis_max_chars: usize,
    pub chat_temperature: f64,
    pub analysis_temperature: f64,
    pub chat_max_tokens: u32,
    pub short_max_tokens: u32,
    pub deep_max_tokens: u32,
}

impl Default for PromptConfig {
    fn default() -> Self {
        Self {
            model: "gpt-4o-mini".to_string(),
            history_limit: 10,
            previous_analysis_max_chars: 8000,
            chat_temperature: 0.9,
            analysis_temperature: 0.75,
            chat_max_tokens: 200,
            short_max_tokens: 500,
            deep_max_tokens: 4000,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub reading: ReadingConfig,
    pub love: LoveWeights,
    pub prompt: PromptConfig,
}

impl EngineConfig {
    pub fn load(path: Option<PathBuf>) -> Result<(Self, Option<PathBuf>)> {
        let config_path = path.or_else(default_config_path);
        let mut config = match config_path.as_ref() {
            Some(path) if path.exists() => {
                let contents =
                    std::fs::read_to_string(path).map_err(|source| NumerologyError::ConfigRead {
                        path: path.clone(),
                        source,
                    })?;
                toml::from_str(&contents)?
            }
            _ => EngineConfig::default(),
        };

        config.apply_env_overrides();
        if let Some(year) = config.reading.target_year {
            check_target_year(year)?;
        }
        Ok((config, config_path))
    }

    pub fn write(&self, path: &Path) -> Result<()> {
        let write_error = |source| NumerologyError::ConfigWrite {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(write_error)?;
            }
        }
        let payload = toml::to_string_pretty(self)?;
        std::fs::write(path, payload).map_err(write_error)?;
        Ok(())
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(year) = env::var("KADER_TARGET_YEAR") {
            match year.trim().parse::<u32>().map(check_target_year) {
                Ok(Ok(value)) => self.reading.target_year = Some(value),
                _ => tracing::warn!(value = %year, "ignoring KADER_TARGET_YEAR"),
            }
        }
        if let Ok(seed) = env::var("KADER_VARIANT_SEED") {
            if let Ok(value) = seed.trim().parse::<u64>() {
                self.reading.variant_seed = Some(value);
            }
        }
        if let Ok(model) = env::var("LLM_MODEL") {
            if !model.trim().is_empty() {
                self.prompt.model = model.trim().to_string();
            }
        }
        if let Ok(limit) = env::var("LLM_HISTORY_LIMIT") {
            if let Ok(value) = limit.trim().parse::<usize>() {
                self.prompt.history_limit = value;
            }
        }
    }
}

fn default_config_path() -> Option<PathBuf> {
    env::var("KADER_CONFIG_PATH")
        .ok()
        .filter(|value| !value.trim().is_empty())
        .map(PathBuf::from)
        .or_else(|| Some(PathBuf::from("config/kader.toml")))
}
