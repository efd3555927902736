//! Configuration file support for text-joiner.
//!
//! Provides YAML-based configuration through `text-joiner.config.yml` files,
//! including data structures, file loading, validation, and merging with
//! command-line overrides.

use anyhow::Context;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use std::str::FromStr;

use crate::adapters::outbound::filesystem::ReadStrategy;
use crate::application::dto::OutputFormat;
use crate::joining::domain::Separators;
use crate::shared::error::JoinerError;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "text-joiner.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub separator: Option<String>,
    pub suffix: Option<String>,
    pub format: Option<String>,
    pub read_strategy: Option<String>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Values given on the command line; `None` means "not given".
#[derive(Debug, Default, Clone)]
pub struct SettingsOverrides {
    pub separator: Option<String>,
    pub suffix: Option<String>,
    pub format: Option<OutputFormat>,
    pub read_strategy: Option<ReadStrategy>,
}

/// Effective settings after merging CLI, config file and defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JoinSettings {
    pub separators: Separators,
    pub format: OutputFormat,
    pub read_strategy: ReadStrategy,
}

impl Default for JoinSettings {
    fn default() -> Self {
        Self {
            separators: Separators::default(),
            format: OutputFormat::default(),
            read_strategy: ReadStrategy::default(),
        }
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Merges settings with precedence: CLI flag > config file > default.
pub fn resolve_settings(
    overrides: SettingsOverrides,
    config: Option<&ConfigFile>,
) -> Result<JoinSettings> {
    let defaults = JoinSettings::default();
    let config_format = config.and_then(|c| c.format.as_deref());
    let config_strategy = config.and_then(|c| c.read_strategy.as_deref());

    let separator = overrides
        .separator
        .or_else(|| config.and_then(|c| c.separator.clone()))
        .unwrap_or_else(|| defaults.separators.separator().to_string());
    let suffix = overrides
        .suffix
        .or_else(|| config.and_then(|c| c.suffix.clone()))
        .unwrap_or_else(|| defaults.separators.suffix().to_string());

    let format = match (overrides.format, config_format) {
        (Some(format), _) => format,
        (None, Some(value)) => parse_config_value("format", value, "Use 'text' or 'json'.")?,
        (None, None) => defaults.format,
    };

    let read_strategy = match (overrides.read_strategy, config_strategy) {
        (Some(strategy), _) => strategy,
        (None, Some(value)) => {
            parse_config_value("read_strategy", value, "Use 'buffered' or 'staged'.")?
        }
        (None, None) => defaults.read_strategy,
    };

    Ok(JoinSettings {
        separators: Separators::new(separator, suffix),
        format,
        read_strategy,
    })
}

fn parse_config_value<T: FromStr>(field: &str, value: &str, hint: &str) -> Result<T> {
    value.parse::<T>().map_err(|_| {
        JoinerError::InvalidConfigValue {
            field: field.to_string(),
            value: value.to_string(),
            hint: hint.to_string(),
        }
        .into()
    })
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(ref format) = config.format {
        parse_config_value::<OutputFormat>("format", format, "Use 'text' or 'json'.")?;
    }
    if let Some(ref strategy) = config.read_strategy {
        parse_config_value::<ReadStrategy>("read_strategy", strategy, "Use 'buffered' or 'staged'.")?;
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}
