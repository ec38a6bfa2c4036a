//! Viewport transform for pan/zoom.

use kurbo::{Affine, Point, Rect, Size, Vec2};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default lower bound for the scale.
pub const DEFAULT_MIN_SCALE: f64 = 0.1;
/// Default upper bound for the scale.
pub const DEFAULT_MAX_SCALE: f64 = 10.0;
/// Fraction of the viewport the content occupies after fit-to-view.
pub const FIT_MARGIN: f64 = 0.9;

/// Transform errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TransformError {
    #[error("Invalid transform payload: scale={scale}, x={x}, y={y}")]
    InvalidPayload { scale: f64, x: f64, y: f64 },
    #[error("Invalid zoom limits: [{min}, {max}]")]
    InvalidLimits { min: f64, max: f64 },
}

/// Range the scale is clamped to.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoomLimits {
    pub min_scale: f64,
    pub max_scale: f64,
}

impl Default for ZoomLimits {
    fn default() -> Self {
        Self {
            min_scale: DEFAULT_MIN_SCALE,
            max_scale: DEFAULT_MAX_SCALE,
        }
    }
}

impl ZoomLimits {
    /// Create limits, rejecting empty, non-positive or non-finite ranges.
    pub fn new(min_scale: f64, max_scale: f64) -> Result<Self, TransformError> {
        let limits = Self {
            min_scale,
            max_scale,
        };
        if limits.is_valid() {
            Ok(limits)
        } else {
            Err(TransformError::InvalidLimits {
                min: min_scale,
                max: max_scale,
            })
        }
    }

    /// Effectively unclamped limits.
    ///
    /// The range is still finite so that screen/world conversions cannot
    /// overflow.
    pub fn unbounded() -> Self {
        Self {
            min_scale: 1e-12,
            max_scale: 1e12,
        }
    }

    /// Check the range is usable.
    pub fn is_valid(&self) -> bool {
        self.min_scale.is_finite()
            && self.max_scale.is_finite()
            && self.min_scale > 0.0
            && self.min_scale <= self.max_scale
    }

    /// Clamp a scale into the range.
    pub fn clamp(&self, scale: f64) -> f64 {
        scale.clamp(self.min_scale, self.max_scale)
    }
}

/// Maps between screen pixels and world coordinates.
///
/// `(x, y)` is the world point shown at the viewport origin and `scale` is
/// screen pixels per world unit, so `world = screen / scale + (x, y)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    scale: f64,
    x: f64,
    y: f64,
    #[serde(skip)]
    limits: ZoomLimits,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            scale: 1.0,
            x: 0.0,
            y: 0.0,
            limits: ZoomLimits::default(),
        }
    }
}

impl Transform {
    /// Create the identity transform with default limits.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a transform from raw values, validating them.
    pub fn from_parts(scale: f64, x: f64, y: f64) -> Result<Self, TransformError> {
        let mut transform = Self::default();
        transform.set(scale, x, y)?;
        Ok(transform)
    }

    /// Replace the zoom limits, clamping the current scale into them.
    pub fn with_limits(mut self, limits: ZoomLimits) -> Self {
        self.limits = limits;
        self.scale = limits.clamp(self.scale);
        self
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    /// World point at the viewport origin.
    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn limits(&self) -> ZoomLimits {
        self.limits
    }

    /// Set all three components at once.
    ///
    /// Non-finite values and non-positive scales are rejected and the
    /// transform is left unchanged. Valid scales are clamped to the limits.
    pub fn set(&mut self, scale: f64, x: f64, y: f64) -> Result<(), TransformError> {
        if !(scale.is_finite() && x.is_finite() && y.is_finite()) || scale <= 0.0 {
            log::warn!("Invalid transform payload: scale={scale}, x={x}, y={y}");
            return Err(TransformError::InvalidPayload { scale, x, y });
        }
        self.scale = self.limits.clamp(scale);
        self.x = x;
        self.y = y;
        Ok(())
    }

    /// Get the affine transform for rendering.
    ///
    /// This transform converts world coordinates to screen coordinates.
    pub fn affine(&self) -> Affine {
        Affine::scale(self.scale) * Affine::translate(-self.origin().to_vec2())
    }

    /// Get the inverse transform for input handling.
    ///
    /// This transform converts screen coordinates to world coordinates.
    pub fn inverse_affine(&self) -> Affine {
        Affine::translate(self.origin().to_vec2()) * Affine::scale(1.0 / self.scale)
    }

    /// Convert a screen point to world coordinates.
    pub fn screen_to_world(&self, screen_point: Point) -> Point {
        self.inverse_affine() * screen_point
    }

    /// Convert a world point to screen coordinates.
    pub fn world_to_screen(&self, world_point: Point) -> Point {
        self.affine() * world_point
    }

    /// Convert a screen-space distance to world units.
    pub fn screen_delta_to_world(&self, delta: Vec2) -> Vec2 {
        delta / self.scale
    }

    /// Pan by a delta in screen coordinates.
    ///
    /// Dragging the content right moves the viewport origin left in world space.
    pub fn pan(&mut self, screen_delta: Vec2) {
        if !(screen_delta.x.is_finite() && screen_delta.y.is_finite()) {
            return;
        }
        let world_delta = self.screen_delta_to_world(screen_delta);
        self.x -= world_delta.x;
        self.y -= world_delta.y;
    }

    /// Zoom by `factor`, keeping the given screen point fixed.
    ///
    /// Returns `false` when the scale did not change (bad factor or already at
    /// a limit).
    pub fn zoom_at(&mut self, screen_point: Point, factor: f64) -> bool {
        if !factor.is_finite() || factor <= 0.0 {
            return false;
        }
        let new_scale = self.limits.clamp(self.scale * factor);
        if (new_scale - self.scale).abs() < f64::EPSILON {
            return false;
        }

        let world_point = self.screen_to_world(screen_point);

        // Solve for the origin that maps world_point back onto screen_point.
        let x = world_point.x - screen_point.x / new_scale;
        let y = world_point.y - screen_point.y / new_scale;
        if !(x.is_finite() && y.is_finite()) {
            return false;
        }
        self.scale = new_scale;
        self.x = x;
        self.y = y;
        true
    }

    /// World rectangle visible in a viewport of the given size.
    pub fn visible_rect(&self, viewport: Size) -> Rect {
        Rect::from_points(
            self.screen_to_world(Point::ZERO),
            self.screen_to_world(Point::new(viewport.width, viewport.height)),
        )
    }

    /// Reset to the identity transform, keeping the limits.
    pub fn reset(&mut self) {
        self.scale = self.limits.clamp(1.0);
        self.x = 0.0;
        self.y = 0.0;
    }

    /// Fit the transform so `bounds` fills the viewport, centered.
    ///
    /// An axis with zero extent does not constrain the scale; if both do, the
    /// scale is kept and only the center moves. Returns `false` and leaves the
    /// transform untouched for an empty viewport or non-finite bounds.
    pub fn fit_to_bounds(&mut self, bounds: Rect, viewport: Size) -> bool {
        if viewport.width <= 0.0 || viewport.height <= 0.0 {
            return false;
        }
        if !(bounds.x0.is_finite()
            && bounds.y0.is_finite()
            && bounds.x1.is_finite()
            && bounds.y1.is_finite())
        {
            return false;
        }

        let bounds = bounds.abs();
        let scale_x = (bounds.width() > 0.0).then(|| viewport.width / bounds.width());
        let scale_y = (bounds.height() > 0.0).then(|| viewport.height / bounds.height());
        let fitted = match (scale_x, scale_y) {
            (Some(sx), Some(sy)) => Some(sx.min(sy)),
            (Some(s), None) | (None, Some(s)) => Some(s),
            (None, None) => None,
        };
        if let Some(scale) = fitted {
            self.scale = self.limits.clamp(scale * FIT_MARGIN);
        }

        let center = bounds.center();
        self.x = center.x - viewport.width / 2.0 / self.scale;
        self.y = center.y - viewport.height / 2.0 / self.scale;
        true
    }
}
