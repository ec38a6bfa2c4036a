//! FloorSketch Core Library
//!
//! Headless model of a 2D facility-layout editor: items and polylines on a
//! pannable, zoomable canvas with grid snapping, undo/redo and JSON
//! save/load. A host UI feeds pointer and key events to [`Editor`] and draws
//! what it reports.

pub mod color;
pub mod config;
pub mod editor;
pub mod entity;
pub mod grid;
pub mod history;
pub mod input;
pub mod interaction;
pub mod scene;
pub mod selection;
pub mod shapes;
pub mod storage;
pub mod transform;

pub use color::{ColorError, PickerColor};
pub use config::{ConfigError, EditorConfig};
pub use editor::{Editor, Notice, NoticeLevel};
pub use entity::{Entity, EntityId, EntityMap};
pub use grid::{GridLines, GridSettings, grid_lines, snap, units_to_pixels};
pub use history::{DEFAULT_HISTORY_LIMIT, History};
pub use input::{Key, KeyEvent, Modifiers, MouseButton, PointerEvent};
pub use interaction::{DragSession, InteractionState};
pub use scene::{Scene, SceneSnapshot};
pub use selection::{HitTarget, Selection, hit_test};
pub use shapes::{
    Item, ItemSpec, ItemUpdate, Polyline, PolylineDraft, PolylineStyle, PolylineUpdate,
};
pub use storage::{SavedState, StorageError, StorageResult};
pub use transform::{Transform, TransformError, ZoomLimits};
