//! Grid settings, snapping and grid line generation.

use crate::transform::Transform;
use kurbo::{Line, Point, Size, Vec2};
use serde::{Deserialize, Serialize};

/// Default grid spacing in domain units (feet).
pub const DEFAULT_GRID_SIZE: f64 = 5.0;
/// Default grid line opacity.
pub const DEFAULT_GRID_OPACITY: f64 = 0.5;
/// Default grid line color.
pub const DEFAULT_GRID_COLOR: &str = "#cccccc";
/// Upper bound on lines generated per axis.
pub const MAX_GRID_LINES: usize = 4096;

/// Convert domain units (feet) into world units (document pixels).
///
/// This is the only place the unit multiplier is applied.
pub fn units_to_pixels(units: f64, pixels_per_unit: f64) -> f64 {
    units * pixels_per_unit
}

fn usable_spacing(spacing: f64) -> bool {
    spacing.is_finite() && spacing > 0.0
}

/// Snap a point to the nearest grid intersection.
///
/// A spacing that is not a positive finite number leaves the point unchanged.
pub fn snap(point: Point, spacing: f64) -> Point {
    if !usable_spacing(spacing) {
        return point;
    }
    Point::new(
        (point.x / spacing).round() * spacing,
        (point.y / spacing).round() * spacing,
    )
}

/// Snap a displacement to whole grid steps.
pub fn snap_delta(delta: Vec2, spacing: f64) -> Vec2 {
    snap(delta.to_point(), spacing).to_vec2()
}

/// User-facing grid settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GridSettings {
    /// Whether grid lines are drawn.
    pub show_grid: bool,
    /// Whether committed positions snap to the grid.
    pub snap_to_grid: bool,
    /// Grid spacing in domain units.
    pub grid_size: f64,
    /// Line opacity in `[0, 1]`.
    pub grid_opacity: f64,
    /// Line color.
    pub grid_color: String,
}

impl Default for GridSettings {
    fn default() -> Self {
        Self {
            show_grid: true,
            snap_to_grid: true,
            grid_size: DEFAULT_GRID_SIZE,
            grid_opacity: DEFAULT_GRID_OPACITY,
            grid_color: DEFAULT_GRID_COLOR.to_string(),
        }
    }
}

impl GridSettings {
    pub fn toggle_grid(&mut self) {
        self.show_grid = !self.show_grid;
    }

    pub fn toggle_snap(&mut self) {
        self.snap_to_grid = !self.snap_to_grid;
    }

    /// Set the grid size. Non-positive or non-finite sizes are ignored.
    pub fn set_grid_size(&mut self, size: f64) -> bool {
        if !usable_spacing(size) {
            log::warn!("Ignoring invalid grid size {size}");
            return false;
        }
        self.grid_size = size;
        true
    }

    /// Set the line opacity, clamped to `[0, 1]`.
    pub fn set_grid_opacity(&mut self, opacity: f64) {
        if opacity.is_finite() {
            self.grid_opacity = opacity.clamp(0.0, 1.0);
        }
    }

    /// Grid spacing in world units.
    pub fn spacing(&self, pixels_per_unit: f64) -> f64 {
        units_to_pixels(self.grid_size, pixels_per_unit)
    }

    /// Snap `point` if snapping is enabled.
    pub fn snap_if_enabled(&self, point: Point, pixels_per_unit: f64) -> Point {
        if self.snap_to_grid {
            snap(point, self.spacing(pixels_per_unit))
        } else {
            point
        }
    }

    /// Snap a displacement if snapping is enabled.
    pub fn snap_delta_if_enabled(&self, delta: Vec2, pixels_per_unit: f64) -> Vec2 {
        if self.snap_to_grid {
            snap_delta(delta, self.spacing(pixels_per_unit))
        } else {
            delta
        }
    }

    /// Check the settings can be applied.
    pub fn is_valid(&self) -> bool {
        usable_spacing(self.grid_size) && self.grid_opacity.is_finite()
    }
}

/// Grid lines in world coordinates.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GridLines {
    /// Lines of constant x, left to right.
    pub vertical: Vec<Line>,
    /// Lines of constant y, top to bottom.
    pub horizontal: Vec<Line>,
}

impl GridLines {
    pub fn is_empty(&self) -> bool {
        self.vertical.is_empty() && self.horizontal.is_empty()
    }

    pub fn len(&self) -> usize {
        self.vertical.len() + self.horizontal.len()
    }
}

/// Generate grid lines covering the viewport.
///
/// The visible world rectangle is padded by one viewport size on every side
/// so fast pans do not reveal ungridded space before the next recompute.
pub fn grid_lines(viewport: Size, transform: &Transform, spacing: f64) -> GridLines {
    if !usable_spacing(spacing) || viewport.width <= 0.0 || viewport.height <= 0.0 {
        return GridLines::default();
    }

    let visible = transform.visible_rect(viewport);
    let padded = visible.inflate(visible.width(), visible.height());

    let first_col = (padded.x0 / spacing).floor();
    let last_col = (padded.x1 / spacing).ceil();
    let first_row = (padded.y0 / spacing).floor();
    let last_row = (padded.y1 / spacing).ceil();

    let columns = last_col - first_col + 1.0;
    let rows = last_row - first_row + 1.0;
    if !(columns.is_finite() && rows.is_finite())
        || columns > MAX_GRID_LINES as f64
        || rows > MAX_GRID_LINES as f64
    {
        log::debug!("Skipping grid: {columns} x {rows} lines at spacing {spacing}");
        return GridLines::default();
    }

    let (top, bottom) = (first_row * spacing, last_row * spacing);
    let (left, right) = (first_col * spacing, last_col * spacing);

    let vertical = (0..columns as usize)
        .map(|i| {
            let x = (first_col + i as f64) * spacing;
            Line::new((x, top), (x, bottom))
        })
        .collect();
    let horizontal = (0..rows as usize)
        .map(|i| {
            let y = (first_row + i as f64) * spacing;
            Line::new((left, y), (right, y))
        })
        .collect();

    GridLines {
        vertical,
        horizontal,
    }
}
