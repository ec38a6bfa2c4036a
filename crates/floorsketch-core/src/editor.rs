//! The editor: one owned value holding all layout state.

use crate::color::PickerColor;
use crate::config::EditorConfig;
use crate::entity::EntityId;
use crate::grid::{GridLines, GridSettings, grid_lines};
use crate::input::ClickTracker;
use crate::interaction::InteractionState;
use crate::scene::Scene;
use crate::shapes::{Item, ItemSpec, ItemUpdate};
use crate::transform::{Transform, TransformError};
use kurbo::{Line, Point, Rect, Size, Vec2};

/// Severity of a user-facing notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Warning,
    Error,
}

/// Transient message for the user, e.g. shown in a snackbar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Warning,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }
}

/// Facility layout editor.
///
/// Owns the scene, the viewport transform, grid settings and the interaction
/// state. Hosts feed it events through [`Editor::handle_pointer`] and
/// [`Editor::handle_key`], read geometry back for drawing, and drain
/// [`Editor::take_notices`] after each update.
#[derive(Debug, Clone)]
pub struct Editor {
    pub(crate) config: EditorConfig,
    pub(crate) scene: Scene,
    pub(crate) transform: Transform,
    pub(crate) grid: GridSettings,
    pub(crate) viewport: Size,
    pub(crate) interaction: InteractionState,
    pub(crate) clicks: ClickTracker,
    notices: Vec<Notice>,
}

impl Default for Editor {
    fn default() -> Self {
        Self::new(EditorConfig::default())
    }
}

impl Editor {
    /// Create an empty editor.
    pub fn new(config: EditorConfig) -> Self {
        let scene = Scene::new(config.history_limit, config.polyline_style.clone());
        let transform = Transform::new().with_limits(config.zoom_limits);
        let grid = config.grid.clone();
        let viewport = Size::new(config.viewport_width, config.viewport_height);
        Self {
            config,
            scene,
            transform,
            grid,
            viewport,
            interaction: InteractionState::Idle,
            clicks: ClickTracker::new(),
            notices: Vec::new(),
        }
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Direct access to scene operations.
    pub fn scene_mut(&mut self) -> &mut Scene {
        &mut self.scene
    }

    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    pub fn grid(&self) -> &GridSettings {
        &self.grid
    }

    pub fn grid_mut(&mut self) -> &mut GridSettings {
        &mut self.grid
    }

    pub fn viewport(&self) -> Size {
        self.viewport
    }

    pub fn interaction(&self) -> &InteractionState {
        &self.interaction
    }

    pub fn pixels_per_unit(&self) -> f64 {
        self.config.pixels_per_unit
    }

    /// Update the viewport size after the host resized.
    pub fn set_viewport_size(&mut self, size: Size) {
        if size.width.is_finite()
            && size.height.is_finite()
            && size.width >= 0.0
            && size.height >= 0.0
        {
            self.viewport = size;
        }
    }

    pub(crate) fn notify(&mut self, notice: Notice) {
        log::debug!("Notice ({:?}): {}", notice.level, notice.message);
        self.notices.push(notice);
    }

    /// Pending notices, oldest first.
    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    /// Drain pending notices.
    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    // --- Items ---

    /// Add an item centered in the current viewport.
    ///
    /// A non-finite or negative size is rejected and nothing is committed.
    pub fn add_item(&mut self, spec: ItemSpec) -> Option<EntityId> {
        let ppu = self.pixels_per_unit();
        let center = self
            .transform
            .screen_to_world(Point::new(self.viewport.width / 2.0, self.viewport.height / 2.0));
        let half = Vec2::new(spec.width * ppu, spec.height * ppu) / 2.0;
        let position = center - half;
        let item = Item::from_spec(&spec, position);
        self.scene.add_item(item)
    }

    /// Add an item using the configured defaults with the given name.
    pub fn add_default_item(&mut self, name: impl Into<String>) -> Option<EntityId> {
        let spec = ItemSpec {
            name: name.into(),
            ..self.config.item_defaults.clone()
        };
        self.add_item(spec)
    }

    pub fn update_item(&mut self, id: &EntityId, update: &ItemUpdate) -> bool {
        self.scene.update_item(id, update)
    }

    /// Set an item's color from a picker payload.
    pub fn set_item_color(&mut self, id: &EntityId, color: &PickerColor) -> bool {
        match color.to_hex_string() {
            Ok(hex) => {
                let update = ItemUpdate {
                    color: Some(hex),
                    ..ItemUpdate::default()
                };
                self.scene.update_item(id, &update)
            }
            Err(err) => {
                log::warn!("Ignoring color change: {err}");
                self.notify(Notice::warning(err.to_string()));
                false
            }
        }
    }

    /// World rectangle of an item.
    pub fn item_rect(&self, id: &EntityId) -> Option<Rect> {
        self.scene.item(id).map(|item| item.rect(self.pixels_per_unit()))
    }

    /// Delete the selected item and polyline.
    pub fn delete_selected(&mut self) -> bool {
        let selection = self.scene.selection().clone();
        let mut deleted = false;
        if let Some(id) = selection.item {
            deleted |= self.scene.delete_items(&[id]) > 0;
        }
        if let Some(id) = selection.polyline {
            deleted |= self.scene.delete_polylines(&[id]) > 0;
        }
        deleted
    }

    // --- History ---

    pub fn undo(&mut self) -> bool {
        let undone = self.scene.undo();
        if !undone {
            self.notify(Notice::info("Nothing to undo"));
        }
        undone
    }

    pub fn redo(&mut self) -> bool {
        let redone = self.scene.redo();
        if !redone {
            self.notify(Notice::info("Nothing to redo"));
        }
        redone
    }

    /// Remove all content and reset the grid and view.
    pub fn clear_canvas(&mut self) {
        self.cancel_drag();
        self.interaction = InteractionState::Idle;
        self.scene.clear();
        self.grid = self.config.grid.clone();
        self.transform.reset();
        log::info!("Canvas cleared");
    }

    // --- View ---

    /// Validated transform update from the host.
    pub fn set_transform(&mut self, scale: f64, x: f64, y: f64) -> Result<(), TransformError> {
        self.transform.set(scale, x, y)
    }

    /// Zoom about the viewport center.
    pub fn zoom_in(&mut self) -> bool {
        let center = Point::new(self.viewport.width / 2.0, self.viewport.height / 2.0);
        self.transform.zoom_at(center, self.config.zoom_in_factor)
    }

    /// Zoom about the viewport center.
    pub fn zoom_out(&mut self) -> bool {
        let center = Point::new(self.viewport.width / 2.0, self.viewport.height / 2.0);
        self.transform.zoom_at(center, self.config.zoom_out_factor)
    }

    pub fn reset_view(&mut self) {
        self.transform.reset();
    }

    /// Fit all content into the viewport.
    pub fn fit_to_view(&mut self) -> bool {
        let Some(bounds) = self.scene.bounds(self.pixels_per_unit()) else {
            self.notify(Notice::info("Nothing to fit"));
            return false;
        };
        self.transform.fit_to_bounds(bounds, self.viewport)
    }

    /// Grid lines to draw, empty when the grid is hidden.
    pub fn grid_lines(&self) -> GridLines {
        if !self.grid.show_grid {
            return GridLines::default();
        }
        grid_lines(self.viewport, &self.transform, self.grid.spacing(self.pixels_per_unit()))
    }

    /// Preview segment from the last draft point to the pointer.
    pub fn shadow_segment(&self) -> Option<Line> {
        if !self.is_polyline_mode() {
            return None;
        }
        self.scene.draft().preview_segment()
    }
}
