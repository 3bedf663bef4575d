use egui::Color32;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::brush::{
    BrushState, DEFAULT_COLOR, DEFAULT_THICKNESS, DEFAULT_THICKNESS_RANGE, is_valid_thickness_range,
};
use crate::error::{ConfigError, ConfigResult};

/// Environment variable the binary reads a JSON config path from
pub const CONFIG_ENV_VAR: &str = "INK_CANVAS_CONFIG";

/// Tunables for the drawing core
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)] // if we add new fields, give them default values when deserializing old config
pub struct CanvasConfig {
    pub min_thickness: f32,
    pub max_thickness: f32,
    pub default_thickness: f32,
    pub default_color: Color32,
    /// Drop moves that land exactly on the previous sample
    pub skip_zero_length: bool,
    /// Maximum number of history entries, unbounded when `None`
    pub history_limit: Option<usize>,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            min_thickness: *DEFAULT_THICKNESS_RANGE.start(),
            max_thickness: *DEFAULT_THICKNESS_RANGE.end(),
            default_thickness: DEFAULT_THICKNESS,
            default_color: DEFAULT_COLOR,
            skip_zero_length: true,
            history_limit: None,
        }
    }
}

impl CanvasConfig {
    /// Parse and validate a JSON config. Missing fields take their defaults.
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validated()
    }

    pub fn from_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Load from the path in [`CONFIG_ENV_VAR`], falling back to defaults
    pub fn from_env() -> Self {
        let Ok(path) = std::env::var(CONFIG_ENV_VAR) else {
            return Self::default();
        };
        match Self::from_file(&path) {
            Ok(config) => {
                log::info!("Loaded config from {path}");
                config
            }
            Err(err) => {
                log::warn!("Ignoring config at {path}: {err}");
                Self::default()
            }
        }
    }

    /// Check invariants, clamping the default thickness into range
    pub fn validated(mut self) -> ConfigResult<Self> {
        let (min, max) = (self.min_thickness, self.max_thickness);
        if !is_valid_thickness_range(&(min..=max)) {
            return Err(ConfigError::InvalidThicknessRange { min, max });
        }
        if self.history_limit == Some(0) {
            return Err(ConfigError::InvalidHistoryLimit);
        }
        if self.default_thickness.is_finite() {
            self.default_thickness = self.default_thickness.clamp(min, max);
        } else {
            self.default_thickness = min;
        }
        Ok(self)
    }

    /// Brush matching this config's defaults and range
    pub fn brush(&self) -> BrushState {
        BrushState::with_range(
            self.default_color,
            self.default_thickness,
            self.min_thickness..=self.max_thickness,
        )
    }
}
