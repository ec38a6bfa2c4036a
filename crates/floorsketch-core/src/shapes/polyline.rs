//! Polylines and the in-progress polyline draft.

use super::{is_finite_point, point_to_segment_dist};
use crate::entity::{Entity, EntityId};
use kurbo::{Line, Point, Rect, Vec2};
use serde::{Deserialize, Serialize};

/// Fewest points a finalized polyline may have.
pub const MIN_POLYLINE_POINTS: usize = 2;
/// Default stroke color.
pub const DEFAULT_STROKE_COLOR: &str = "#0000FF";
/// Default stroke width.
pub const DEFAULT_STROKE_WIDTH: f64 = 2.0;
/// Default dash pattern (solid).
pub const DEFAULT_DASHARRAY: &str = "none";

/// Stroke properties of a polyline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PolylineStyle {
    pub stroke_color: String,
    pub stroke_width: f64,
    /// SVG-style dash pattern, `"none"` for solid.
    pub stroke_dasharray: String,
    /// Whether the last point connects back to the first.
    pub is_closed: bool,
}

impl Default for PolylineStyle {
    fn default() -> Self {
        Self {
            stroke_color: DEFAULT_STROKE_COLOR.to_string(),
            stroke_width: DEFAULT_STROKE_WIDTH,
            stroke_dasharray: DEFAULT_DASHARRAY.to_string(),
            is_closed: false,
        }
    }
}

/// A chain of connected line segments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Polyline {
    pub(crate) id: EntityId,
    pub points: Vec<Point>,
    #[serde(flatten)]
    pub style: PolylineStyle,
}

impl Polyline {
    /// Create a polyline with default style.
    pub fn new(points: Vec<Point>) -> Self {
        Self::with_style(points, PolylineStyle::default())
    }

    /// Create a polyline with the given style.
    pub fn with_style(points: Vec<Point>, style: PolylineStyle) -> Self {
        Self {
            id: EntityId::generate(),
            points,
            style,
        }
    }

    /// Bounding box of the points, `None` without points.
    pub fn bounds(&self) -> Option<Rect> {
        let (first, rest) = self.points.split_first()?;
        Some(rest.iter().fold(Rect::from_points(*first, *first), |r, p| r.union_pt(*p)))
    }

    /// Segments in drawing order, including the closing one if closed.
    pub fn segments(&self) -> Vec<Line> {
        let mut segments: Vec<Line> =
            self.points.windows(2).map(|w| Line::new(w[0], w[1])).collect();
        if self.style.is_closed && self.points.len() > 2 {
            if let (Some(&first), Some(&last)) = (self.points.first(), self.points.last()) {
                segments.push(Line::new(last, first));
            }
        }
        segments
    }

    /// Index of the vertex closest to `point` within `tolerance`.
    pub fn vertex_at(&self, point: Point, tolerance: f64) -> Option<usize> {
        self.points
            .iter()
            .enumerate()
            .map(|(i, p)| (i, p.distance(point)))
            .filter(|(_, d)| *d <= tolerance)
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(i, _)| i)
    }

    /// Check if a world point lies on the stroke.
    pub fn hit_test(&self, point: Point, tolerance: f64) -> bool {
        let reach = tolerance + self.style.stroke_width / 2.0;
        self.segments()
            .iter()
            .any(|segment| point_to_segment_dist(point, segment.p0, segment.p1) <= reach)
    }

    /// Move every point by `delta`.
    pub fn translate(&mut self, delta: Vec2) {
        for p in &mut self.points {
            *p += delta;
        }
    }

    /// Enough finite points to draw.
    pub fn is_valid(&self) -> bool {
        self.points.len() >= MIN_POLYLINE_POINTS
            && self.points.iter().all(|p| is_finite_point(*p))
            && self.style.stroke_width.is_finite()
    }
}

impl Entity for Polyline {
    fn id(&self) -> &EntityId {
        &self.id
    }
}

/// Partial style update.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PolylineUpdate {
    pub stroke_color: Option<String>,
    pub stroke_width: Option<f64>,
    pub stroke_dasharray: Option<String>,
    pub is_closed: Option<bool>,
}

impl PolylineUpdate {
    /// Apply to `polyline`. Returns whether anything changed.
    pub fn apply(&self, polyline: &mut Polyline) -> bool {
        let style = &mut polyline.style;
        let before = style.clone();
        if let Some(color) = &self.stroke_color {
            style.stroke_color = color.clone();
        }
        if let Some(width) = self.stroke_width.filter(|w| w.is_finite() && *w > 0.0) {
            style.stroke_width = width;
        }
        if let Some(dash) = &self.stroke_dasharray {
            style.stroke_dasharray = dash.clone();
        }
        if let Some(closed) = self.is_closed {
            style.is_closed = closed;
        }
        *style != before
    }
}

/// The polyline currently being drawn.
///
/// Points are placed one click at a time; the shadow point follows the
/// pointer. Point placement has its own undo/redo, separate from the scene
/// history, and is discarded together with the draft.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PolylineDraft {
    points: Vec<Point>,
    shadow_point: Option<Point>,
    style: PolylineStyle,
    /// Points removed by undo, most recent last.
    redo_stack: Vec<Point>,
}

impl PolylineDraft {
    pub fn new(style: PolylineStyle) -> Self {
        Self {
            style,
            ..Self::default()
        }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn shadow_point(&self) -> Option<Point> {
        self.shadow_point
    }

    pub fn style(&self) -> &PolylineStyle {
        &self.style
    }

    pub fn set_style(&mut self, style: PolylineStyle) {
        self.style = style;
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Enough points to become a polyline.
    pub fn is_complete(&self) -> bool {
        self.points.len() >= MIN_POLYLINE_POINTS
    }

    /// Append a point. Non-finite points are ignored.
    pub fn push_point(&mut self, point: Point) -> bool {
        if !is_finite_point(point) {
            return false;
        }
        self.redo_stack.clear();
        self.points.push(point);
        true
    }

    pub fn set_shadow_point(&mut self, point: Option<Point>) {
        self.shadow_point = point.filter(|p| is_finite_point(*p));
    }

    /// Undo the last point placement.
    pub fn undo(&mut self) -> bool {
        match self.points.pop() {
            Some(point) => {
                self.redo_stack.push(point);
                true
            }
            None => false,
        }
    }

    /// Redo an undone point placement.
    pub fn redo(&mut self) -> bool {
        match self.redo_stack.pop() {
            Some(point) => {
                self.points.push(point);
                true
            }
            None => false,
        }
    }

    pub fn can_undo(&self) -> bool {
        !self.points.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Segment from the last placed point to the shadow point.
    pub fn preview_segment(&self) -> Option<Line> {
        Some(Line::new(*self.points.last()?, self.shadow_point?))
    }

    /// Take the points out, resetting the draft but keeping its style.
    ///
    /// Returns a polyline when there were enough points.
    pub fn take(&mut self) -> Option<Polyline> {
        let points = std::mem::take(&mut self.points);
        self.clear();
        (points.len() >= MIN_POLYLINE_POINTS)
            .then(|| Polyline::with_style(points, self.style.clone()))
    }

    /// Drop all points and the shadow point.
    pub fn clear(&mut self) {
        self.points.clear();
        self.shadow_point = None;
        self.redo_stack.clear();
    }
}
