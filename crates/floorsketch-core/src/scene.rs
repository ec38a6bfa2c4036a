//! Scene content: items, polylines, selection, the polyline draft and history.

use crate::entity::{EntityId, EntityMap};
use crate::history::{DEFAULT_HISTORY_LIMIT, History};
use crate::selection::Selection;
use crate::shapes::{
    Item, ItemUpdate, MIN_POLYLINE_POINTS, Polyline, PolylineDraft, PolylineStyle, PolylineUpdate,
};
use kurbo::{Point, Rect, Vec2};

/// Deep copy of the scene content stored in history.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SceneSnapshot {
    pub items: EntityMap<Item>,
    pub polylines: EntityMap<Polyline>,
}

/// All placed entities plus the state that goes with them.
///
/// Every mutating operation that changes content commits one snapshot to
/// history. Operations on unknown ids or that change nothing return `false`
/// and leave history alone.
#[derive(Debug, Clone)]
pub struct Scene {
    items: EntityMap<Item>,
    polylines: EntityMap<Polyline>,
    selection: Selection,
    draft: PolylineDraft,
    history: History<SceneSnapshot>,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_LIMIT, PolylineStyle::default())
    }
}

impl Scene {
    /// Create an empty scene.
    pub fn new(history_limit: usize, draft_style: PolylineStyle) -> Self {
        Self {
            items: EntityMap::new(),
            polylines: EntityMap::new(),
            selection: Selection::default(),
            draft: PolylineDraft::new(draft_style),
            history: History::new(SceneSnapshot::default(), history_limit),
        }
    }

    pub fn items(&self) -> &EntityMap<Item> {
        &self.items
    }

    pub fn polylines(&self) -> &EntityMap<Polyline> {
        &self.polylines
    }

    pub fn item(&self, id: &EntityId) -> Option<&Item> {
        self.items.by_id(id)
    }

    pub fn polyline(&self, id: &EntityId) -> Option<&Polyline> {
        self.polylines.by_id(id)
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn draft(&self) -> &PolylineDraft {
        &self.draft
    }

    pub fn history(&self) -> &History<SceneSnapshot> {
        &self.history
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty() && self.polylines.is_empty()
    }

    /// Copy of the current content.
    pub fn snapshot(&self) -> SceneSnapshot {
        SceneSnapshot {
            items: self.items.clone(),
            polylines: self.polylines.clone(),
        }
    }

    fn commit(&mut self) {
        let snapshot = self.snapshot();
        self.history.commit(snapshot);
    }

    // --- Items ---

    /// Add an item. An id already in use is replaced with a fresh one.
    ///
    /// Returns `None` without committing when the item's geometry is not finite.
    pub fn add_item(&mut self, mut item: Item) -> Option<EntityId> {
        if !item.is_valid() {
            log::warn!("Rejecting item {} with invalid geometry", item.name);
            return None;
        }
        if self.items.contains(&item.id) {
            log::debug!("Item id {} already in use, generating a new one", item.id);
            item.id = EntityId::generate();
        }
        let id = item.id.clone();
        log::debug!("Adding item {} ({})", id, item.name);
        self.items.upsert(item);
        self.commit();
        Some(id)
    }

    /// Apply a partial update to an item.
    pub fn update_item(&mut self, id: &EntityId, update: &ItemUpdate) -> bool {
        let changed = self.items.by_id_mut(id).is_some_and(|item| update.apply(item));
        if changed {
            self.commit();
        }
        changed
    }

    /// Move an item's top-left corner to `(x, y)` and commit.
    pub fn move_item(&mut self, id: &EntityId, x: f64, y: f64) -> bool {
        if !(x.is_finite() && y.is_finite()) {
            return false;
        }
        let Some(item) = self.items.by_id_mut(id) else {
            return false;
        };
        if item.x == x && item.y == y {
            return false;
        }
        item.x = x;
        item.y = y;
        self.commit();
        true
    }

    /// Live position update during a drag; not recorded in history.
    pub(crate) fn set_item_position(&mut self, id: &EntityId, position: Point) -> bool {
        match self.items.by_id_mut(id) {
            Some(item) if position.x.is_finite() && position.y.is_finite() => {
                item.x = position.x;
                item.y = position.y;
                true
            }
            _ => false,
        }
    }

    /// Delete items, clearing the item selection if it was among them.
    pub fn delete_items(&mut self, ids: &[EntityId]) -> usize {
        let removed = self.items.remove_many(ids);
        if removed.is_empty() {
            return 0;
        }
        if self.selection.item.as_ref().is_some_and(|id| ids.contains(id)) {
            self.selection.item = None;
        }
        log::debug!("Deleted {} item(s)", removed.len());
        self.commit();
        removed.len()
    }

    // --- Polylines ---

    /// Add a finished polyline. Polylines with fewer than two finite points
    /// are rejected.
    pub fn add_polyline(&mut self, mut polyline: Polyline) -> Option<EntityId> {
        if !polyline.is_valid() {
            log::warn!("Rejecting polyline with {} point(s)", polyline.points.len());
            return None;
        }
        if self.polylines.contains(&polyline.id) {
            polyline.id = EntityId::generate();
        }
        let id = polyline.id.clone();
        self.polylines.upsert(polyline);
        self.commit();
        Some(id)
    }

    /// Apply a partial style update to a polyline.
    pub fn update_polyline(&mut self, id: &EntityId, update: &PolylineUpdate) -> bool {
        let changed = self
            .polylines
            .by_id_mut(id)
            .is_some_and(|polyline| update.apply(polyline));
        if changed {
            self.commit();
        }
        changed
    }

    /// Move one vertex and commit.
    pub fn move_polyline_point(&mut self, id: &EntityId, index: usize, point: Point) -> bool {
        let changed = self
            .polyline_point_mut(id, index)
            .is_some_and(|slot| finite(point) && std::mem::replace(slot, point) != point);
        if changed {
            self.commit();
        }
        changed
    }

    /// Live vertex update during a drag; not recorded in history.
    pub(crate) fn set_polyline_point(&mut self, id: &EntityId, index: usize, point: Point) -> bool {
        match self.polyline_point_mut(id, index) {
            Some(slot) if finite(point) => {
                *slot = point;
                true
            }
            _ => false,
        }
    }

    /// Live replacement of all points; not recorded in history.
    pub(crate) fn set_polyline_points(&mut self, id: &EntityId, points: Vec<Point>) -> bool {
        match self.polylines.by_id_mut(id) {
            Some(polyline) if points.len() == polyline.points.len() => {
                polyline.points = points;
                true
            }
            _ => false,
        }
    }

    fn polyline_point_mut(&mut self, id: &EntityId, index: usize) -> Option<&mut Point> {
        self.polylines.by_id_mut(id)?.points.get_mut(index)
    }

    /// Move a whole polyline by `delta` and commit.
    pub fn translate_polyline(&mut self, id: &EntityId, delta: Vec2) -> bool {
        if delta == Vec2::ZERO || !(delta.x.is_finite() && delta.y.is_finite()) {
            return false;
        }
        let Some(polyline) = self.polylines.by_id_mut(id) else {
            return false;
        };
        polyline.translate(delta);
        self.commit();
        true
    }

    /// Remove one vertex. A polyline left with fewer than two points is deleted.
    pub fn remove_polyline_point(&mut self, id: &EntityId, index: usize) -> bool {
        let Some(polyline) = self.polylines.by_id_mut(id) else {
            return false;
        };
        if index >= polyline.points.len() {
            return false;
        }
        polyline.points.remove(index);
        if polyline.points.len() < MIN_POLYLINE_POINTS {
            log::debug!("Polyline {id} dropped below two points, deleting it");
            self.polylines.remove(id);
            if self.selection.polyline.as_ref() == Some(id) {
                self.selection.polyline = None;
            }
        }
        self.commit();
        true
    }

    /// Delete polylines, clearing the polyline selection if it was among them.
    pub fn delete_polylines(&mut self, ids: &[EntityId]) -> usize {
        let removed = self.polylines.remove_many(ids);
        if removed.is_empty() {
            return 0;
        }
        if self.selection.polyline.as_ref().is_some_and(|id| ids.contains(id)) {
            self.selection.polyline = None;
        }
        self.commit();
        removed.len()
    }

    /// Remove all content, the selection and the draft. Commits if anything
    /// was removed.
    pub fn clear(&mut self) -> bool {
        let had_content = !self.is_empty();
        self.items.clear();
        self.polylines.clear();
        self.selection.clear();
        self.draft.clear();
        if had_content {
            self.commit();
        }
        had_content
    }

    // --- Draft ---

    /// Place a point on the draft.
    pub fn add_point(&mut self, point: Point) -> bool {
        self.draft.push_point(point)
    }

    pub fn set_shadow_point(&mut self, point: Option<Point>) {
        self.draft.set_shadow_point(point);
    }

    pub fn undo_point(&mut self) -> bool {
        self.draft.undo()
    }

    pub fn redo_point(&mut self) -> bool {
        self.draft.redo()
    }

    /// Style used for the next finalized polyline.
    pub fn set_draft_style(&mut self, style: PolylineStyle) {
        self.draft.set_style(style);
    }

    /// Turn the draft into a polyline. With fewer than two points the draft
    /// is discarded and nothing is added.
    pub fn finalize(&mut self) -> Option<EntityId> {
        let polyline = self.draft.take()?;
        log::debug!("Finalizing polyline with {} points", polyline.points.len());
        self.add_polyline(polyline)
    }

    /// Throw the draft away.
    pub fn discard(&mut self) {
        self.draft.clear();
    }

    // --- Selection ---

    /// Select an item. Unknown ids are ignored.
    pub fn select_item(&mut self, id: Option<EntityId>) -> bool {
        match id {
            Some(id) if !self.items.contains(&id) => false,
            id => {
                self.selection.item = id;
                true
            }
        }
    }

    /// Select a polyline. Unknown ids are ignored.
    pub fn select_polyline(&mut self, id: Option<EntityId>) -> bool {
        match id {
            Some(id) if !self.polylines.contains(&id) => false,
            id => {
                self.selection.polyline = id;
                true
            }
        }
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    fn prune_selection(&mut self) {
        if self.selection.item.as_ref().is_some_and(|id| !self.items.contains(id)) {
            self.selection.item = None;
        }
        if self.selection.polyline.as_ref().is_some_and(|id| !self.polylines.contains(id)) {
            self.selection.polyline = None;
        }
    }

    // --- History ---

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Restore the previous snapshot.
    pub fn undo(&mut self) -> bool {
        let Some(snapshot) = self.history.undo().cloned() else {
            return false;
        };
        self.restore(snapshot);
        true
    }

    /// Restore the next snapshot.
    pub fn redo(&mut self) -> bool {
        let Some(snapshot) = self.history.redo().cloned() else {
            return false;
        };
        self.restore(snapshot);
        true
    }

    fn restore(&mut self, snapshot: SceneSnapshot) {
        self.items = snapshot.items;
        self.polylines = snapshot.polylines;
        self.prune_selection();
    }

    /// Replace all content, e.g. after loading a file. History restarts from
    /// the new content and the draft is dropped.
    pub fn load_content(
        &mut self,
        items: EntityMap<Item>,
        polylines: EntityMap<Polyline>,
        selection: Selection,
    ) {
        self.items = items;
        self.polylines = polylines;
        self.selection = selection;
        self.prune_selection();
        self.draft.clear();
        let snapshot = self.snapshot();
        self.history.reset(snapshot);
    }

    /// Bounding box of all content in world units.
    pub fn bounds(&self, pixels_per_unit: f64) -> Option<Rect> {
        let items = self.items.all().map(|item| item.rect(pixels_per_unit));
        let polylines = self.polylines.all().filter_map(Polyline::bounds);
        items.chain(polylines).reduce(|a, b| a.union(b))
    }
}

fn finite(point: Point) -> bool {
    point.x.is_finite() && point.y.is_finite()
}
