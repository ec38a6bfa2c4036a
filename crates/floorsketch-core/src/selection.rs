//! Selection pointers and hit testing.

use crate::entity::{Entity, EntityId};
use crate::scene::Scene;
use kurbo::Point;

/// Currently selected item and polyline, each optional.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    pub item: Option<EntityId>,
    pub polyline: Option<EntityId>,
}

impl Selection {
    pub fn is_empty(&self) -> bool {
        self.item.is_none() && self.polyline.is_none()
    }

    pub fn clear(&mut self) {
        self.item = None;
        self.polyline = None;
    }
}

/// What lies under a world point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HitTarget {
    Item(EntityId),
    PolylineVertex { polyline: EntityId, index: usize },
    PolylineSegment(EntityId),
    Empty,
}

/// Find what is under `point`.
///
/// Vertices win over everything else, starting with the selected polyline,
/// then items, then polyline strokes. Among overlapping entities the topmost
/// (last drawn) wins. `tolerance` is in world units.
pub fn hit_test(scene: &Scene, point: Point, tolerance: f64, pixels_per_unit: f64) -> HitTarget {
    let selected = scene
        .selection()
        .polyline
        .as_ref()
        .and_then(|id| scene.polylines().by_id(id));
    let candidates = selected.into_iter().chain(scene.polylines().all().rev());
    for polyline in candidates {
        if let Some(index) = polyline.vertex_at(point, tolerance) {
            return HitTarget::PolylineVertex {
                polyline: polyline.id().clone(),
                index,
            };
        }
    }

    if let Some(item) = scene
        .items()
        .all()
        .rev()
        .find(|item| item.hit_test(point, pixels_per_unit, 0.0))
    {
        return HitTarget::Item(item.id().clone());
    }

    if let Some(polyline) = scene
        .polylines()
        .all()
        .rev()
        .find(|polyline| polyline.hit_test(point, tolerance))
    {
        return HitTarget::PolylineSegment(polyline.id().clone());
    }

    HitTarget::Empty
}
