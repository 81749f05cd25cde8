//! Blend configuration file handling

use anyhow::{Context, Result};
use blend_cn::components::OverflowConfig;
use blend_monitor::PricingSchedule;
use blend_theme::{BreakpointWidths, ColorScheme};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Default config file name, looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "blend.toml";

/// Top-level Blend configuration (blend.toml)
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct BlendConfig {
    pub theme: ThemeConfig,
    pub breakpoints: BreakpointWidths,
    pub overflow: OverflowConfig,
    pub pricing: PricingSchedule,
    pub logging: LoggingConfig,
}

/// Theme selection
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// `light` or `dark`; anything else is light
    pub scheme: ColorScheme,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is unset, e.g. `"blend_cn=debug"`
    pub level: Option<String>,
}

impl BlendConfig {
    /// Load configuration from `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        Self::from_toml(&content).with_context(|| format!("Failed to parse {}", path.display()))
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).context("Invalid blend configuration")
    }
}
