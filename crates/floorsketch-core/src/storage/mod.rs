//! Saved-state layout and load/save.

pub mod file;

use crate::editor::{Editor, Notice};
use crate::entity::{EntityId, EntityMap};
use crate::grid::GridSettings;
use crate::selection::Selection;
use crate::shapes::{Item, Polyline};
use crate::transform::Transform;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

pub use file::{load_from_path, save_to_path};

/// Storage errors.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("File not found: {0}")]
    NotFound(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
    #[error("Invalid layout: {0}")]
    Invalid(String),
    #[error("IO error: {0}")]
    Io(String),
}

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Items and the selected item.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LayoutSection {
    pub items: Vec<Item>,
    pub selected_item_id: Option<EntityId>,
}

/// Polylines and the selected polyline.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PolylineSection {
    pub polylines: Vec<Polyline>,
    pub selected_polyline_id: Option<EntityId>,
}

/// Everything written to a layout file.
///
/// Only `layout` is required when reading; the other sections fall back to
/// their defaults and unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedState {
    pub layout: LayoutSection,
    #[serde(default)]
    pub polyline: PolylineSection,
    #[serde(default)]
    pub grid: GridSettings,
    #[serde(default)]
    pub transform: Transform,
}

impl SavedState {
    /// Capture the editor state.
    pub fn capture(editor: &Editor) -> Self {
        let scene = editor.scene();
        let selection = scene.selection();
        Self {
            layout: LayoutSection {
                items: scene.items().to_vec(),
                selected_item_id: selection.item.clone(),
            },
            polyline: PolylineSection {
                polylines: scene.polylines().to_vec(),
                selected_polyline_id: selection.polyline.clone(),
            },
            grid: editor.grid().clone(),
            transform: *editor.transform(),
        }
    }

    /// Parse and validate.
    pub fn from_json(json: &str) -> StorageResult<Self> {
        let state: Self =
            serde_json::from_str(json).map_err(|e| StorageError::Serialization(e.to_string()))?;
        state.validate()?;
        Ok(state)
    }

    /// Pretty-printed JSON.
    pub fn to_json(&self) -> StorageResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| StorageError::Serialization(e.to_string()))
    }

    /// Check ids are unique and all geometry is usable.
    pub fn validate(&self) -> StorageResult<()> {
        let mut ids = HashSet::new();
        for item in &self.layout.items {
            if !ids.insert(&item.id) {
                return Err(StorageError::Invalid(format!("Duplicate item id {}", item.id)));
            }
            if !item.is_valid() {
                return Err(StorageError::Invalid(format!("Item {} has invalid geometry", item.id)));
            }
        }

        let mut ids = HashSet::new();
        for polyline in &self.polyline.polylines {
            if !ids.insert(&polyline.id) {
                return Err(StorageError::Invalid(format!("Duplicate polyline id {}", polyline.id)));
            }
            if !polyline.is_valid() {
                return Err(StorageError::Invalid(format!(
                    "Polyline {} needs at least two finite points",
                    polyline.id
                )));
            }
        }

        if !self.grid.is_valid() {
            return Err(StorageError::Invalid(format!("Invalid grid size {}", self.grid.grid_size)));
        }

        let (scale, x, y) = (self.transform.scale(), self.transform.x(), self.transform.y());
        if !(scale.is_finite() && scale > 0.0 && x.is_finite() && y.is_finite()) {
            return Err(StorageError::Invalid(format!(
                "Invalid transform: scale={scale}, x={x}, y={y}"
            )));
        }
        Ok(())
    }
}

impl Editor {
    /// Serialize the layout to JSON and queue a notice with the outcome.
    pub fn save(&mut self) -> StorageResult<String> {
        let result = self.to_json();
        self.report_save(&result);
        result
    }

    /// Serialize the layout to JSON without queueing a notice.
    ///
    /// Fails if the layout would not load back.
    pub fn to_json(&self) -> StorageResult<String> {
        let state = SavedState::capture(self);
        state.validate()?;
        state.to_json()
    }

    pub(crate) fn report_save<T>(&mut self, result: &StorageResult<T>) {
        match result {
            Ok(_) => self.notify(Notice::info("Canvas saved successfully")),
            Err(err) => {
                log::warn!("Failed to save canvas: {err}");
                self.notify(Notice::error("Failed to save canvas"));
            }
        }
    }

    /// Replace the whole layout with one read from JSON.
    ///
    /// Nothing changes if the input cannot be parsed or fails validation; an
    /// error notice is queued instead. On success history restarts from the
    /// loaded content.
    pub fn load(&mut self, json: &str) -> StorageResult<()> {
        let result = SavedState::from_json(json).and_then(|state| self.apply(state));
        match &result {
            Ok(()) => self.notify(Notice::info("Canvas loaded successfully")),
            Err(err) => {
                log::warn!("Failed to load canvas: {err}");
                self.notify(Notice::error("Failed to load canvas"));
            }
        }
        result
    }

    fn apply(&mut self, state: SavedState) -> StorageResult<()> {
        let SavedState {
            layout,
            polyline,
            grid,
            transform,
        } = state;
        let mut next = *self.transform();
        next.set(transform.scale(), transform.x(), transform.y())
            .map_err(|e| StorageError::Invalid(e.to_string()))?;

        let items: EntityMap<Item> = layout.items.into_iter().collect();
        let polylines: EntityMap<Polyline> = polyline.polylines.into_iter().collect();
        log::info!("Loaded {} item(s) and {} polyline(s)", items.len(), polylines.len());

        self.cancel_drag();
        self.interaction = Default::default();
        self.clicks.reset();
        self.scene.load_content(
            items,
            polylines,
            Selection {
                item: layout.selected_item_id,
                polyline: polyline.selected_polyline_id,
            },
        );
        self.grid = grid;
        self.transform = next;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::NoticeLevel;
    use crate::shapes::ItemSpec;
    use kurbo::Point;

    fn populated() -> Editor {
        let mut editor = Editor::default();
        let desk = editor.add_item(ItemSpec::new("Desk", 5.0, 3.0)).unwrap();
        editor.add_item(ItemSpec::new("Shelf", 2.0, 8.0));
        let polyline = editor
            .scene_mut()
            .add_polyline(Polyline::new(vec![Point::new(0.0, 0.0), Point::new(30.0, 40.0)]))
            .unwrap();
        editor.scene_mut().select_item(Some(desk));
        editor.scene_mut().select_polyline(Some(polyline));
        editor.grid_mut().set_grid_size(2.0);
        editor.set_transform(1.5, -20.0, 10.0).unwrap();
        editor
    }

    #[test]
    fn test_round_trip() {
        let mut editor = populated();
        let json = editor.save().unwrap();

        let mut loaded = Editor::default();
        loaded.load(&json).unwrap();
        assert_eq!(loaded.scene().items(), editor.scene().items());
        assert_eq!(loaded.scene().polylines(), editor.scene().polylines());
        assert_eq!(loaded.scene().selection(), editor.scene().selection());
        assert_eq!(loaded.grid(), editor.grid());
        assert_eq!(loaded.transform(), editor.transform());
        assert!(!loaded.scene().can_undo());
    }

    #[test]
    fn test_saved_layout_shape() {
        let mut editor = populated();
        let value: serde_json::Value = serde_json::from_str(&editor.save().unwrap()).unwrap();
        assert!(value["layout"]["items"].is_array());
        assert!(value["layout"]["selectedItemId"].is_string());
        assert!(value["polyline"]["selectedPolylineId"].is_string());
        assert_eq!(value["grid"]["gridSize"], serde_json::json!(2.0));
        assert_eq!(value["transform"]["scale"], serde_json::json!(1.5));
        assert!(value["transform"].get("limits").is_none());
    }

    #[test]
    fn test_minimal_file_uses_defaults() {
        let json = r##"{
            "layout": {
                "items": [
                    {
                        "id": "1700000000000", "x": 10, "y": 20, "width": 5, "height": 5,
                        "name": "Desk", "color": "#4CAF50"
                    }
                ],
                "selectedItemId": null,
                "history": [],
                "historyIndex": 0
            }
        }"##;
        let mut editor = Editor::default();
        editor.load(json).unwrap();
        let item = editor.scene().item(&EntityId::from("1700000000000")).unwrap();
        assert_eq!(item.position(), Point::new(10.0, 20.0));
        assert!(editor.scene().polylines().is_empty());
        assert_eq!(editor.grid(), &GridSettings::default());
        assert!((editor.transform().scale() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_garbage_leaves_state_untouched() {
        let mut editor = populated();
        let before = editor.save().unwrap();
        editor.take_notices();

        assert!(matches!(editor.load("{ not json"), Err(StorageError::Serialization(_))));
        assert!(matches!(editor.load(r#"{ "grid": {} }"#), Err(StorageError::Serialization(_))));
        assert_eq!(editor.save().unwrap(), before);

        let notices = editor.take_notices();
        assert_eq!(notices[0].level, NoticeLevel::Error);
        assert_eq!(notices[1].level, NoticeLevel::Error);
    }

    #[test]
    fn test_rejects_invalid_content() {
        let duplicate = r#"{ "layout": { "items": [
            { "id": "a", "x": 0, "y": 0, "width": 1, "height": 1, "name": "", "color": "" },
            { "id": "a", "x": 5, "y": 5, "width": 1, "height": 1, "name": "", "color": "" }
        ] } }"#;
        assert!(matches!(SavedState::from_json(duplicate), Err(StorageError::Invalid(_))));

        let short = r#"{ "layout": {}, "polyline": { "polylines": [
            {
                "id": "p", "points": [{ "x": 0, "y": 0 }], "strokeColor": "", "strokeWidth": 2,
                "strokeDasharray": "none", "isClosed": false
            }
        ] } }"#;
        assert!(matches!(SavedState::from_json(short), Err(StorageError::Invalid(_))));

        let zero_scale = r#"{ "layout": {}, "transform": { "scale": 0, "x": 0, "y": 0 } }"#;
        assert!(matches!(SavedState::from_json(zero_scale), Err(StorageError::Invalid(_))));
    }

    #[test]
    fn test_load_drops_unknown_selection() {
        let json = r#"{ "layout": { "items": [], "selectedItemId": "ghost" } }"#;
        let mut editor = Editor::default();
        editor.load(json).unwrap();
        assert!(editor.scene().selection().is_empty());
    }
}
