//! Editor configuration.

use crate::grid::GridSettings;
use crate::history::DEFAULT_HISTORY_LIMIT;
use crate::shapes::{ItemSpec, PolylineStyle};
use crate::transform::ZoomLimits;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Document pixels per foot.
pub const DEFAULT_PIXELS_PER_UNIT: f64 = 10.0;
/// Wheel zoom factors.
pub const DEFAULT_ZOOM_IN_FACTOR: f64 = 1.1;
pub const DEFAULT_ZOOM_OUT_FACTOR: f64 = 0.9;
/// Pick distance in screen pixels.
pub const DEFAULT_HIT_TOLERANCE: f64 = 6.0;

/// Errors from reading or validating a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Invalid(String),
    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Tunable editor settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EditorConfig {
    /// World units (document pixels) per domain unit.
    pub pixels_per_unit: f64,
    pub zoom_limits: ZoomLimits,
    /// Snapshots kept for undo.
    pub history_limit: usize,
    pub zoom_in_factor: f64,
    pub zoom_out_factor: f64,
    /// Screen-pixel distance within which vertices and strokes are picked.
    pub hit_tolerance: f64,
    /// Initial viewport size.
    pub viewport_width: f64,
    pub viewport_height: f64,
    /// Defaults for items added from the toolbar.
    pub item_defaults: ItemSpec,
    /// Style for newly drawn polylines.
    pub polyline_style: PolylineStyle,
    /// Initial grid settings, also restored by clearing the canvas.
    pub grid: GridSettings,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            pixels_per_unit: DEFAULT_PIXELS_PER_UNIT,
            zoom_limits: ZoomLimits::default(),
            history_limit: DEFAULT_HISTORY_LIMIT,
            zoom_in_factor: DEFAULT_ZOOM_IN_FACTOR,
            zoom_out_factor: DEFAULT_ZOOM_OUT_FACTOR,
            hit_tolerance: DEFAULT_HIT_TOLERANCE,
            viewport_width: 800.0,
            viewport_height: 600.0,
            item_defaults: ItemSpec::default(),
            polyline_style: PolylineStyle::default(),
            grid: GridSettings::default(),
        }
    }
}

impl EditorConfig {
    /// Parse a (possibly partial) JSON configuration and validate it.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check every value is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = |name: &str, value: f64| {
            if value.is_finite() && value > 0.0 {
                Ok(())
            } else {
                Err(ConfigError::Invalid(format!("{name} must be a positive number, got {value}")))
            }
        };
        positive("pixelsPerUnit", self.pixels_per_unit)?;
        positive("zoomInFactor", self.zoom_in_factor)?;
        positive("zoomOutFactor", self.zoom_out_factor)?;
        if !self.zoom_limits.is_valid() {
            return Err(ConfigError::Invalid(format!(
                "zoomLimits must satisfy 0 < min <= max, got [{}, {}]",
                self.zoom_limits.min_scale, self.zoom_limits.max_scale
            )));
        }
        if self.history_limit == 0 {
            return Err(ConfigError::Invalid("historyLimit must be at least 1".to_string()));
        }
        if !(self.hit_tolerance.is_finite() && self.hit_tolerance >= 0.0) {
            return Err(ConfigError::Invalid(format!(
                "hitTolerance must be non-negative, got {}",
                self.hit_tolerance
            )));
        }
        if !(self.viewport_width.is_finite() && self.viewport_height.is_finite())
            || self.viewport_width < 0.0
            || self.viewport_height < 0.0
        {
            return Err(ConfigError::Invalid("viewport size must be non-negative".to_string()));
        }
        if !self.grid.is_valid() {
            return Err(ConfigError::Invalid(format!(
                "gridSize must be positive, got {}",
                self.grid.grid_size
            )));
        }
        Ok(())
    }
}
