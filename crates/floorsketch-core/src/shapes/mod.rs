//! Scene entity definitions.

mod item;
mod polyline;

pub use item::{DEFAULT_ITEM_COLOR, DEFAULT_ITEM_SIZE, Item, ItemSpec, ItemUpdate};
pub use polyline::{
    DEFAULT_DASHARRAY, DEFAULT_STROKE_COLOR, DEFAULT_STROKE_WIDTH, MIN_POLYLINE_POINTS, Polyline,
    PolylineDraft, PolylineStyle, PolylineUpdate,
};

use kurbo::Point;

/// Distance from a point to a line segment (a→b).
pub fn point_to_segment_dist(point: Point, a: Point, b: Point) -> f64 {
    let seg = b - a;
    let pv = point - a;
    let len_sq = seg.hypot2();
    if len_sq < f64::EPSILON {
        return pv.hypot();
    }
    let t = (pv.dot(seg) / len_sq).clamp(0.0, 1.0);
    let proj = a + seg * t;
    (point - proj).hypot()
}

fn is_finite_point(point: Point) -> bool {
    point.x.is_finite() && point.y.is_finite()
}
