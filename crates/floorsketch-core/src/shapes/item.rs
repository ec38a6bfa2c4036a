//! Rectangular facility item.

use super::is_finite_point;
use crate::entity::{Entity, EntityId};
use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};

/// Default fill color for new items.
pub const DEFAULT_ITEM_COLOR: &str = "#4CAF50";
/// Default width and height for new items, in feet.
pub const DEFAULT_ITEM_SIZE: f64 = 5.0;

/// A placed rectangular object.
///
/// `x`/`y` are the world coordinates of the top-left corner. `width` and
/// `height` are domain units; the world-space size is obtained through
/// [`Item::rect`] with the editor's pixels-per-unit factor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub(crate) id: EntityId,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub name: String,
    pub color: String,
}

impl Item {
    /// Create an item at the origin with a fresh id and default color.
    pub fn new(name: impl Into<String>, width: f64, height: f64) -> Self {
        Self {
            id: EntityId::generate(),
            x: 0.0,
            y: 0.0,
            width,
            height,
            name: name.into(),
            color: DEFAULT_ITEM_COLOR.to_string(),
        }
    }

    /// Build an item from an add request.
    pub fn from_spec(spec: &ItemSpec, position: Point) -> Self {
        Self {
            id: EntityId::generate(),
            x: position.x,
            y: position.y,
            width: spec.width,
            height: spec.height,
            name: spec.name.clone(),
            color: spec.color.clone(),
        }
    }

    /// Set the position.
    pub fn with_position(mut self, position: Point) -> Self {
        self.x = position.x;
        self.y = position.y;
        self
    }

    /// Set the color.
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    /// Top-left corner.
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// World-space rectangle.
    pub fn rect(&self, pixels_per_unit: f64) -> Rect {
        Rect::from_origin_size(
            self.position(),
            (self.width * pixels_per_unit, self.height * pixels_per_unit),
        )
    }

    /// Check if a world point hits the item.
    pub fn hit_test(&self, point: Point, pixels_per_unit: f64, tolerance: f64) -> bool {
        self.rect(pixels_per_unit).inflate(tolerance, tolerance).contains(point)
    }

    /// Finite coordinates and non-negative size.
    pub fn is_valid(&self) -> bool {
        is_finite_point(self.position())
            && self.width.is_finite()
            && self.height.is_finite()
            && self.width >= 0.0
            && self.height >= 0.0
    }
}

impl Entity for Item {
    fn id(&self) -> &EntityId {
        &self.id
    }
}

/// Request to add a new item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ItemSpec {
    pub name: String,
    pub color: String,
    pub width: f64,
    pub height: f64,
}

impl Default for ItemSpec {
    fn default() -> Self {
        Self {
            name: String::new(),
            color: DEFAULT_ITEM_COLOR.to_string(),
            width: DEFAULT_ITEM_SIZE,
            height: DEFAULT_ITEM_SIZE,
        }
    }
}

impl ItemSpec {
    pub fn new(name: impl Into<String>, width: f64, height: f64) -> Self {
        Self {
            name: name.into(),
            width,
            height,
            ..Self::default()
        }
    }
}

/// Partial update applied by the item editor.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ItemUpdate {
    pub name: Option<String>,
    pub color: Option<String>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub x: Option<f64>,
    pub y: Option<f64>,
}

impl ItemUpdate {
    /// Apply to `item`. Returns whether anything changed.
    ///
    /// Non-finite numbers and negative sizes are skipped.
    pub fn apply(&self, item: &mut Item) -> bool {
        let mut changed = false;
        if let Some(name) = &self.name {
            changed |= replace(&mut item.name, name.clone());
        }
        if let Some(color) = &self.color {
            changed |= replace(&mut item.color, color.clone());
        }
        if let Some(width) = self.width.filter(|w| w.is_finite() && *w >= 0.0) {
            changed |= replace(&mut item.width, width);
        }
        if let Some(height) = self.height.filter(|h| h.is_finite() && *h >= 0.0) {
            changed |= replace(&mut item.height, height);
        }
        if let Some(x) = self.x.filter(|x| x.is_finite()) {
            changed |= replace(&mut item.x, x);
        }
        if let Some(y) = self.y.filter(|y| y.is_finite()) {
            changed |= replace(&mut item.y, y);
        }
        changed
    }
}

fn replace<T: PartialEq>(slot: &mut T, value: T) -> bool {
    if *slot == value {
        false
    } else {
        *slot = value;
        true
    }
}
