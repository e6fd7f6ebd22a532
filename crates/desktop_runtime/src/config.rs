//! Widget configuration loaded from TOML.
//!
//! Every key is optional. A missing file section falls back to its defaults, so an empty file
//! is a valid configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use system_ui::{SliderKind, Theme, ThemePalette, ThemeTokens, DEFAULT_TOOLTIP_DELAY_MS};
use thiserror::Error;

/// Documented default configuration.
pub const DEFAULT_CONFIG_TOML: &str = r##"# Quick controls widget configuration.

[quick_sliders]
enable = true
show_brightness = true
show_volume = true
show_mic = true

[button]
tooltip_delay_ms = 400

[theme]
layer = "#211f26"
on_layer = "#e6e0e9"
primary = "#d0bcff"
on_primary = "#381e72"
secondary_container = "#4a4458"
on_secondary_container = "#e8def8"
outline = "#938f99"
"##;

const MAX_TOOLTIP_DELAY_MS: u64 = 10_000;

#[derive(Debug, Error)]
/// Errors produced while loading widget configuration.
pub enum ConfigError {
    /// The configuration file does not exist.
    #[error("config file not found: {0}")]
    NotFound(PathBuf),

    /// The configuration file could not be read.
    #[error("failed to read config file: {0}")]
    Read(#[from] std::io::Error),

    /// The configuration is not valid TOML or has wrongly typed values.
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// Values parsed but are out of range.
    #[error("config validation failed:\n{}", .0.join("\n"))]
    Validation(Vec<String>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
/// Which quick sliders the panel instantiates.
pub struct QuickSlidersConfig {
    /// Master switch for the whole panel.
    pub enable: bool,
    /// Screen brightness slider.
    pub show_brightness: bool,
    /// Output volume slider.
    pub show_volume: bool,
    /// Input (microphone) volume slider.
    pub show_mic: bool,
}

impl Default for QuickSlidersConfig {
    fn default() -> Self {
        Self {
            enable: true,
            show_brightness: true,
            show_volume: true,
            show_mic: true,
        }
    }
}

impl QuickSlidersConfig {
    /// Whether the slider for `kind` should exist.
    pub fn shows(&self, kind: SliderKind) -> bool {
        self.enable
            && match kind {
                SliderKind::Brightness => self.show_brightness,
                SliderKind::OutputVolume => self.show_volume,
                SliderKind::InputVolume => self.show_mic,
            }
    }

    /// Enabled kinds in panel order.
    pub fn enabled_kinds(&self) -> Vec<SliderKind> {
        SliderKind::ALL
            .into_iter()
            .filter(|kind| self.shows(*kind))
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
/// Button behavior shared by every themed button.
pub struct ButtonConfig {
    /// Continuous hover required before a tooltip shows.
    pub tooltip_delay_ms: u64,
}

impl Default for ButtonConfig {
    fn default() -> Self {
        Self {
            tooltip_delay_ms: DEFAULT_TOOLTIP_DELAY_MS,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
/// Root of the widget configuration file.
pub struct WidgetConfig {
    /// `[quick_sliders]` section.
    pub quick_sliders: QuickSlidersConfig,
    /// `[button]` section.
    pub button: ButtonConfig,
    /// `[theme]` section: palette overrides.
    pub theme: ThemePalette,
}

impl WidgetConfig {
    /// Parses and validates a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed TOML (including invalid hex colors) and
    /// [`ConfigError::Validation`] for out-of-range values.
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses, and validates a configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotFound`] when `path` does not exist, plus every error of
    /// [`WidgetConfig::from_toml_str`].
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }
        let raw = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&raw)?;
        tracing::info!(path = %path.display(), "loaded widget config");
        Ok(config)
    }

    /// Loads `path` when given, otherwise the defaults.
    ///
    /// # Errors
    ///
    /// Same as [`WidgetConfig::load`].
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => {
                tracing::debug!("no config path given; using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Checks value ranges.
    ///
    /// # Errors
    ///
    /// Returns every problem found in a single [`ConfigError::Validation`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut problems = Vec::new();
        let delay = self.button.tooltip_delay_ms;
        if delay == 0 {
            problems.push("button.tooltip_delay_ms must be greater than 0".to_string());
        } else if delay > MAX_TOOLTIP_DELAY_MS {
            problems.push(format!(
                "button.tooltip_delay_ms must be at most {MAX_TOOLTIP_DELAY_MS} (got {delay})"
            ));
        }
        if self.quick_sliders.enable && self.quick_sliders.enabled_kinds().is_empty() {
            tracing::warn!("quick_sliders.enable is set but every slider is hidden");
        }
        if problems.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(problems))
        }
    }

    /// Theme handed to primitives through context.
    pub fn theme(&self) -> Theme {
        Theme {
            palette: self.theme,
            tokens: ThemeTokens {
                tooltip_delay_ms: self.button.tooltip_delay_ms,
                ..ThemeTokens::default()
            },
        }
    }
}
