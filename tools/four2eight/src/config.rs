//! Layered converter configuration
//!
//! Priority (highest to lowest):
//! 1. Command-line flags
//! 2. Environment variables prefixed `FOUR2EIGHT_` (e.g. `FOUR2EIGHT_SWAP_INPUT=true`)
//! 3. Config file passed with `--config`
//! 4. Default values

use std::path::Path;

use anyhow::{bail, Context, Result};
use figment::{
    providers::{Env, Format, Json, Serialized, Toml, Yaml},
    Figment,
};
use four2eight_core::{ConvertError, ConverterConfig, ReadPolicy};
use serde::Serialize;

/// Environment variable prefix for converter settings
pub const ENV_PREFIX: &str = "FOUR2EIGHT_";

/// Settings given explicitly on the command line
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CliOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub swap_input: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub swap_output: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub read_policy: Option<ReadPolicy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verify_trailer: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diagnostics: Option<bool>,
}

/// Load the converter configuration from all layers
pub fn load_config(file: Option<&Path>, overrides: &CliOverrides) -> Result<ConverterConfig> {
    let mut figment = Figment::from(Serialized::defaults(ConverterConfig::default()));

    if let Some(path) = file {
        figment = merge_file(figment, path)?;
    }

    let config: ConverterConfig = figment
        .merge(Env::prefixed(ENV_PREFIX))
        .merge(Serialized::defaults(overrides))
        .extract()
        .map_err(|e| ConvertError::config(format!("Failed to load configuration: {}", e)))?;
    Ok(config)
}

/// Merge a config file, picking the format from its extension
fn merge_file(figment: Figment, path: &Path) -> Result<Figment> {
    if !path.is_file() {
        bail!("Config file not found: {}", path.display());
    }

    let extension = path
        .extension()
        .and_then(|s| s.to_str())
        .context("Config file must have an extension")?;

    let figment = match extension {
        "toml" => figment.merge(Toml::file(path)),
        "yaml" | "yml" => figment.merge(Yaml::file(path)),
        "json" => figment.merge(Json::file(path)),
        _ => bail!("Unsupported config file format: {}", extension),
    };
    Ok(figment)
}
