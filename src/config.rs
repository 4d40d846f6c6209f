//! Configuration management for skill-fit

use crate::error::{Result, SkillFitError};
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub engine: EngineConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Everything the matching engine itself is tuned by.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    #[serde(default)]
    pub scoring: ScoringConfig,
    #[serde(default)]
    pub classifier: ClassifierConfig,
}

/// Blend weights and acceptance thresholds for `quick_match`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub required_weight: f32,
    pub preferred_weight: f32,
    pub keyword_weight: f32,
    /// Share of the blended score kept when required coverage is zero.
    pub required_gate_floor: f32,
    /// Minimum credit for a requirement to count as matched.
    pub match_threshold: f32,
    pub max_top_gaps: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Characters inspected on each side of a skill's first occurrence for inline markers.
    pub context_window: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub detailed: bool,
    pub color_output: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Console,
    Json,
    Markdown,
    Html,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            required_weight: 0.60,
            preferred_weight: 0.25,
            keyword_weight: 0.15,
            required_gate_floor: 0.25,
            match_threshold: 0.5,
            max_top_gaps: 10,
        }
    }
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self { context_window: 50 }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Console,
            detailed: false,
            color_output: true,
        }
    }
}

impl Config {
    /// Load the config from the default location, writing defaults on first use.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            let config = Self::default();
            config.save_to(&config_path)?;
            Ok(config)
        }
    }

    /// Load an explicit config file. A missing file is an error here.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| SkillFitError::Configuration(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| {
                SkillFitError::Configuration(format!("Failed to serialize config: {}", e))
            })?;

        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("skill-fit")
            .join("config.toml")
    }

    pub fn validate(&self) -> Result<()> {
        let scoring = &self.engine.scoring;
        let weights = [
            ("scoring.required_weight", scoring.required_weight),
            ("scoring.preferred_weight", scoring.preferred_weight),
            ("scoring.keyword_weight", scoring.keyword_weight),
        ];

        for (key, weight) in weights {
            if !weight.is_finite() || weight < 0.0 {
                return Err(SkillFitError::Configuration(format!(
                    "{} must be a non-negative number, got {}",
                    key, weight
                )));
            }
        }

        if weights.iter().map(|(_, w)| w).sum::<f32>() <= 0.0 {
            return Err(SkillFitError::Configuration(
                "at least one scoring weight must be positive".to_string(),
            ));
        }

        for (key, value) in [
            ("scoring.required_gate_floor", scoring.required_gate_floor),
            ("scoring.match_threshold", scoring.match_threshold),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(SkillFitError::Configuration(format!(
                    "{} must be within 0.0..=1.0, got {}",
                    key, value
                )));
            }
        }

        Ok(())
    }

    /// Set a single dotted key, e.g. `scoring.match_threshold`.
    pub fn set_value(&mut self, key: &str, value: &str) -> Result<()> {
        let scoring = &mut self.engine.scoring;
        match key {
            "scoring.required_weight" => scoring.required_weight = parse_value(key, value)?,
            "scoring.preferred_weight" => scoring.preferred_weight = parse_value(key, value)?,
            "scoring.keyword_weight" => scoring.keyword_weight = parse_value(key, value)?,
            "scoring.required_gate_floor" => scoring.required_gate_floor = parse_value(key, value)?,
            "scoring.match_threshold" => scoring.match_threshold = parse_value(key, value)?,
            "scoring.max_top_gaps" => scoring.max_top_gaps = parse_value(key, value)?,
            "classifier.context_window" => {
                self.engine.classifier.context_window = parse_value(key, value)?
            }
            "output.format" => {
                self.output.format = crate::cli::parse_output_format(value)
                    .map_err(SkillFitError::Configuration)?
            }
            "output.detailed" => self.output.detailed = parse_value(key, value)?,
            "output.color_output" => self.output.color_output = parse_value(key, value)?,
            _ => {
                return Err(SkillFitError::Configuration(format!(
                    "Unknown configuration key: {}",
                    key
                )))
            }
        }
        self.validate()
    }
}

fn parse_value<T: std::str::FromStr>(key: &str, value: &str) -> Result<T> {
    value.parse::<T>().map_err(|_| {
        SkillFitError::Configuration(format!("Invalid value for {}: {}", key, value))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weights_favor_required() {
        let scoring = ScoringConfig::default();
        assert!(scoring.required_weight > scoring.preferred_weight);
        assert!(scoring.preferred_weight > scoring.keyword_weight);
        assert_eq!(scoring.match_threshold, 0.5);
        assert_eq!(ClassifierConfig::default().context_window, 50);
    }

    #[test]
    fn test_round_trip_through_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.engine.scoring.match_threshold = 0.6;
        config.output.format = OutputFormat::Json;
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[engine.scoring]\nkeyword_weight = 0.3\n").unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.engine.scoring.keyword_weight, 0.3);
        assert_eq!(loaded.engine.scoring.required_weight, 0.60);
        assert_eq!(loaded.engine.classifier.context_window, 50);
    }

    #[test]
    fn test_missing_explicit_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(Config::load_from(&dir.path().join("absent.toml")).is_err());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = Config::default();
        config.engine.scoring.match_threshold = 1.5;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.engine.scoring.required_weight = 0.0;
        config.engine.scoring.preferred_weight = 0.0;
        config.engine.scoring.keyword_weight = 0.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_set_value() {
        let mut config = Config::default();
        config.set_value("scoring.max_top_gaps", "3").unwrap();
        config.set_value("output.format", "md").unwrap();
        assert_eq!(config.engine.scoring.max_top_gaps, 3);
        assert_eq!(config.output.format, OutputFormat::Markdown);

        assert!(config.set_value("scoring.nope", "1").is_err());
        assert!(config.set_value("scoring.match_threshold", "abc").is_err());
    }
}
