//! Pointer and keyboard interaction state machine.

use crate::editor::Editor;
use crate::entity::EntityId;
use crate::input::{Key, KeyEvent, MouseButton, PointerEvent};
use crate::selection::{HitTarget, hit_test};
use kurbo::{Point, Vec2};

/// An in-progress drag of one entity.
///
/// `origin` is the entity state when the drag started and `anchor` the screen
/// point where the button went down. `last` follows the pointer so a drag can
/// still be committed when the pointer leaves the viewport.
#[derive(Debug, Clone, PartialEq)]
pub struct DragSession<O> {
    pub id: EntityId,
    pub origin: O,
    pub anchor: Point,
    pub last: Point,
}

impl<O> DragSession<O> {
    fn new(id: EntityId, origin: O, anchor: Point) -> Self {
        Self {
            id,
            origin,
            anchor,
            last: anchor,
        }
    }

    fn screen_delta(&self) -> Vec2 {
        self.last - self.anchor
    }
}

/// What the pointer is currently doing.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum InteractionState {
    #[default]
    Idle,
    /// Middle-button pan. Returns to polyline drawing afterwards if it started there.
    PanningView { last: Point, return_to_drawing: bool },
    DraggingItem(DragSession<Point>),
    /// Whole-polyline move; the origin holds every point.
    DraggingPolyline(DragSession<Vec<Point>>),
    DraggingPolylinePoint { index: usize, session: DragSession<Point> },
    DrawingPolyline,
}

impl InteractionState {
    pub fn is_dragging(&self) -> bool {
        matches!(
            self,
            InteractionState::DraggingItem(_)
                | InteractionState::DraggingPolyline(_)
                | InteractionState::DraggingPolylinePoint { .. }
        )
    }
}

impl Editor {
    /// Whether polyline drawing mode is on.
    pub fn is_polyline_mode(&self) -> bool {
        matches!(
            self.interaction,
            InteractionState::DrawingPolyline
                | InteractionState::PanningView {
                    return_to_drawing: true,
                    ..
                }
        )
    }

    /// Whether the host must route all pointer moves and releases to the
    /// editor, even outside the viewport.
    pub fn captures_pointer(&self) -> bool {
        self.interaction.is_dragging()
            || matches!(self.interaction, InteractionState::PanningView { .. })
    }

    /// Enter or leave polyline drawing mode.
    ///
    /// Leaving keeps the draft as a polyline when it has at least two points
    /// and discards it otherwise.
    pub fn set_polyline_mode(&mut self, enabled: bool) {
        if enabled {
            if self.is_polyline_mode() {
                return;
            }
            self.cancel_drag();
            self.interaction = InteractionState::DrawingPolyline;
            log::debug!("Entered polyline mode");
            return;
        }

        match &mut self.interaction {
            InteractionState::DrawingPolyline => {
                self.finish_draft();
                self.interaction = InteractionState::Idle;
            }
            InteractionState::PanningView { return_to_drawing, .. } if *return_to_drawing => {
                *return_to_drawing = false;
                self.finish_draft();
            }
            _ => return,
        }
        log::debug!("Left polyline mode");
    }

    fn finish_draft(&mut self) {
        if self.scene.draft().is_complete() {
            self.scene.finalize();
        } else {
            self.scene.discard();
        }
    }

    /// Abort the current drag, restoring the dragged entity. Pans simply end.
    pub fn cancel_drag(&mut self) -> bool {
        let state = std::mem::take(&mut self.interaction);
        match state {
            InteractionState::DraggingItem(session) => {
                self.scene.set_item_position(&session.id, session.origin);
            }
            InteractionState::DraggingPolyline(session) => {
                self.scene.set_polyline_points(&session.id, session.origin);
            }
            InteractionState::DraggingPolylinePoint { index, session } => {
                self.scene.set_polyline_point(&session.id, index, session.origin);
            }
            InteractionState::PanningView { return_to_drawing, .. } => {
                if return_to_drawing {
                    self.interaction = InteractionState::DrawingPolyline;
                }
            }
            other => {
                self.interaction = other;
                return false;
            }
        }
        log::debug!("Drag cancelled");
        true
    }

    fn hit_tolerance(&self) -> f64 {
        self.config.hit_tolerance / self.transform.scale()
    }

    /// Feed a pointer event. Returns whether the editor reacted to it.
    pub fn handle_pointer(&mut self, event: PointerEvent) -> bool {
        match event {
            PointerEvent::Down { position, button } => self.pointer_down(position, button),
            PointerEvent::Move { position } => self.pointer_move(position),
            PointerEvent::Up { position, .. } => self.pointer_up(Some(position)),
            PointerEvent::Leave => {
                if matches!(self.interaction, InteractionState::DrawingPolyline) {
                    self.scene.set_shadow_point(None);
                    return true;
                }
                self.pointer_up(None)
            }
            PointerEvent::Wheel { position, delta_y } => self.wheel(position, delta_y),
        }
    }

    /// Zoom about the pointer. Scrolling up zooms in.
    pub fn wheel(&mut self, position: Point, delta_y: f64) -> bool {
        if self.captures_pointer() || delta_y == 0.0 || !delta_y.is_finite() {
            return false;
        }
        let factor = if delta_y < 0.0 {
            self.config.zoom_in_factor
        } else {
            self.config.zoom_out_factor
        };
        self.transform.zoom_at(position, factor)
    }

    fn pointer_down(&mut self, position: Point, button: MouseButton) -> bool {
        let drawing = matches!(self.interaction, InteractionState::DrawingPolyline);
        let idle = matches!(self.interaction, InteractionState::Idle);
        match button {
            MouseButton::Middle if idle || drawing => {
                self.interaction = InteractionState::PanningView {
                    last: position,
                    return_to_drawing: drawing,
                };
                true
            }
            MouseButton::Left if drawing => {
                let world = self.transform.screen_to_world(position);
                let point = self.grid.snap_if_enabled(world, self.pixels_per_unit());
                self.scene.add_point(point)
            }
            MouseButton::Left if idle => {
                self.begin_drag(position);
                true
            }
            _ => false,
        }
    }

    fn begin_drag(&mut self, position: Point) {
        let world = self.transform.screen_to_world(position);
        let double_click = self.clicks.register_click(position);
        let target = hit_test(&self.scene, world, self.hit_tolerance(), self.pixels_per_unit());
        log::debug!("Pointer down at {world:?}: {target:?}");

        self.interaction = match target {
            HitTarget::PolylineVertex { polyline, index } => {
                self.scene.select_polyline(Some(polyline.clone()));
                self.scene.select_item(None);
                if double_click {
                    self.scene.remove_polyline_point(&polyline, index);
                    InteractionState::Idle
                } else {
                    match self.scene.polyline(&polyline).and_then(|p| p.points.get(index)) {
                        Some(&origin) => InteractionState::DraggingPolylinePoint {
                            index,
                            session: DragSession::new(polyline, origin, position),
                        },
                        None => InteractionState::Idle,
                    }
                }
            }
            HitTarget::Item(id) => {
                self.scene.select_item(Some(id.clone()));
                self.scene.select_polyline(None);
                match self.scene.item(&id).map(|item| item.position()) {
                    Some(origin) => {
                        InteractionState::DraggingItem(DragSession::new(id, origin, position))
                    }
                    None => InteractionState::Idle,
                }
            }
            HitTarget::PolylineSegment(id) => {
                self.scene.select_polyline(Some(id.clone()));
                self.scene.select_item(None);
                match self.scene.polyline(&id).map(|p| p.points.clone()) {
                    Some(origin) => {
                        InteractionState::DraggingPolyline(DragSession::new(id, origin, position))
                    }
                    None => InteractionState::Idle,
                }
            }
            HitTarget::Empty => {
                self.scene.clear_selection();
                InteractionState::Idle
            }
        };
    }

    fn pointer_move(&mut self, position: Point) -> bool {
        let scale = self.transform.scale();
        let ppu = self.pixels_per_unit();
        match &mut self.interaction {
            InteractionState::PanningView { last, .. } => {
                let delta = position - *last;
                *last = position;
                self.transform.pan(delta);
                true
            }
            InteractionState::DraggingItem(session) => {
                session.last = position;
                let target = session.origin + session.screen_delta() / scale;
                self.scene.set_item_position(&session.id, target)
            }
            InteractionState::DraggingPolylinePoint { index, session } => {
                session.last = position;
                let target = session.origin + session.screen_delta() / scale;
                self.scene.set_polyline_point(&session.id, *index, target)
            }
            InteractionState::DraggingPolyline(session) => {
                session.last = position;
                let delta = session.screen_delta() / scale;
                let points = session.origin.iter().map(|p| *p + delta).collect();
                self.scene.set_polyline_points(&session.id, points)
            }
            InteractionState::DrawingPolyline => {
                let world = self.transform.screen_to_world(position);
                let shadow = self.grid.snap_if_enabled(world, ppu);
                self.scene.set_shadow_point(Some(shadow));
                true
            }
            InteractionState::Idle => false,
        }
    }

    /// End a pan or drag. `position` is `None` when the pointer left the
    /// viewport; the last known position is used instead.
    fn pointer_up(&mut self, position: Option<Point>) -> bool {
        let ppu = self.pixels_per_unit();
        let scale = self.transform.scale();
        let state = std::mem::take(&mut self.interaction);
        match state {
            InteractionState::PanningView { return_to_drawing, .. } => {
                if return_to_drawing {
                    self.interaction = InteractionState::DrawingPolyline;
                }
            }
            InteractionState::DraggingItem(mut session) => {
                session.last = position.unwrap_or(session.last);
                self.scene.set_item_position(&session.id, session.origin);
                let delta = session.screen_delta();
                if delta != Vec2::ZERO {
                    let target = self.grid.snap_if_enabled(session.origin + delta / scale, ppu);
                    self.scene.move_item(&session.id, target.x, target.y);
                }
            }
            InteractionState::DraggingPolylinePoint { index, mut session } => {
                session.last = position.unwrap_or(session.last);
                self.scene.set_polyline_point(&session.id, index, session.origin);
                let delta = session.screen_delta();
                if delta != Vec2::ZERO {
                    let target = self.grid.snap_if_enabled(session.origin + delta / scale, ppu);
                    self.scene.move_polyline_point(&session.id, index, target);
                }
            }
            InteractionState::DraggingPolyline(mut session) => {
                session.last = position.unwrap_or(session.last);
                let delta = session.screen_delta();
                let id = session.id.clone();
                self.scene.set_polyline_points(&id, session.origin);
                if delta != Vec2::ZERO {
                    let world_delta = self.grid.snap_delta_if_enabled(delta / scale, ppu);
                    self.scene.translate_polyline(&id, world_delta);
                }
            }
            other => {
                self.interaction = other;
                return false;
            }
        }
        true
    }

    /// Feed a key press. Returns whether the editor reacted to it.
    pub fn handle_key(&mut self, event: KeyEvent) -> bool {
        let command = event.modifiers.command();
        let undo = command && event.is_char('z') && !event.modifiers.shift;
        let redo = command && (event.is_char('y') || (event.is_char('z') && event.modifiers.shift));

        if self.captures_pointer() {
            return event.key == Key::Escape && self.cancel_drag();
        }

        match self.interaction {
            InteractionState::DrawingPolyline => {
                if undo {
                    return self.scene.undo_point();
                }
                if redo {
                    return self.scene.redo_point();
                }
                match event.key {
                    Key::Enter => {
                        self.scene.finalize();
                        self.interaction = InteractionState::Idle;
                        true
                    }
                    Key::Escape => {
                        self.scene.discard();
                        self.interaction = InteractionState::Idle;
                        true
                    }
                    _ => false,
                }
            }
            _ => {
                if undo {
                    return self.undo();
                }
                if redo {
                    return self.redo();
                }
                match event.key {
                    Key::Delete | Key::Backspace => self.delete_selected(),
                    Key::Escape if !self.scene.selection().is_empty() => {
                        self.scene.clear_selection();
                        true
                    }
                    _ => false,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EditorConfig;
    use crate::input::Modifiers;
    use crate::shapes::{Item, ItemSpec, Polyline};

    fn down(x: f64, y: f64) -> PointerEvent {
        PointerEvent::Down {
            position: Point::new(x, y),
            button: MouseButton::Left,
        }
    }

    fn up(x: f64, y: f64) -> PointerEvent {
        PointerEvent::Up {
            position: Point::new(x, y),
            button: MouseButton::Left,
        }
    }

    fn moved(x: f64, y: f64) -> PointerEvent {
        PointerEvent::Move {
            position: Point::new(x, y),
        }
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(Key::Character(c), Modifiers::CTRL)
    }

    #[test]
    fn test_drag_item_commits_once() {
        let mut editor = Editor::default();
        let id = editor.add_item(ItemSpec::new("Desk", 5.0, 5.0)).unwrap();
        let history_len = editor.scene().history().len();

        editor.handle_pointer(down(400.0, 300.0));
        assert!(editor.captures_pointer());
        assert_eq!(editor.scene().selection().item.as_ref(), Some(&id));

        editor.handle_pointer(moved(430.0, 340.0));
        editor.handle_pointer(moved(460.0, 380.0));
        // Live position is unsnapped and not in history yet.
        assert_eq!(editor.scene().item(&id).unwrap().position(), Point::new(435.0, 355.0));
        assert_eq!(editor.scene().history().len(), history_len);

        editor.handle_pointer(up(460.0, 380.0));
        assert!(!editor.captures_pointer());
        assert_eq!(editor.scene().item(&id).unwrap().position(), Point::new(450.0, 350.0));
        assert_eq!(editor.scene().history().len(), history_len + 1);

        assert!(editor.undo());
        assert_eq!(editor.scene().item(&id).unwrap().position(), Point::new(375.0, 275.0));
    }

    #[test]
    fn test_snap_on_drop() {
        let config = EditorConfig {
            pixels_per_unit: 1.0,
            ..EditorConfig::default()
        };
        let mut editor = Editor::new(config);
        let id = editor.scene_mut().add_item(Item::new("Desk", 5.0, 5.0)).unwrap();

        editor.handle_pointer(down(2.0, 2.0));
        editor.handle_pointer(moved(15.0, 15.0));
        editor.handle_pointer(up(15.0, 15.0));
        assert_eq!(editor.scene().item(&id).unwrap().position(), Point::new(15.0, 15.0));
    }

    #[test]
    fn test_leave_ends_drag_like_up() {
        let mut editor = Editor::default();
        let id = editor.add_item(ItemSpec::new("Desk", 5.0, 5.0)).unwrap();
        let history_len = editor.scene().history().len();

        editor.handle_pointer(down(400.0, 300.0));
        editor.handle_pointer(moved(460.0, 380.0));
        editor.handle_pointer(PointerEvent::Leave);
        assert!(matches!(editor.interaction(), InteractionState::Idle));
        assert_eq!(editor.scene().item(&id).unwrap().position(), Point::new(450.0, 350.0));
        assert_eq!(editor.scene().history().len(), history_len + 1);
    }

    #[test]
    fn test_click_without_move_commits_nothing() {
        let mut editor = Editor::default();
        let id = editor.add_item(ItemSpec::new("Desk", 5.0, 5.0)).unwrap();
        let history_len = editor.scene().history().len();

        editor.handle_pointer(down(400.0, 300.0));
        editor.handle_pointer(up(400.0, 300.0));
        assert_eq!(editor.scene().history().len(), history_len);
        assert_eq!(editor.scene().selection().item.as_ref(), Some(&id));
    }

    #[test]
    fn test_escape_cancels_drag() {
        let mut editor = Editor::default();
        let id = editor.add_item(ItemSpec::new("Desk", 5.0, 5.0)).unwrap();
        let history_len = editor.scene().history().len();

        editor.handle_pointer(down(400.0, 300.0));
        editor.handle_pointer(moved(500.0, 500.0));
        assert!(editor.handle_key(KeyEvent::plain(Key::Escape)));
        assert!(!editor.captures_pointer());
        assert_eq!(editor.scene().item(&id).unwrap().position(), Point::new(375.0, 275.0));
        assert_eq!(editor.scene().history().len(), history_len);

        // The release after a cancel is ignored.
        assert!(!editor.handle_pointer(up(500.0, 500.0)));
    }

    #[test]
    fn test_middle_button_pans() {
        let mut editor = Editor::default();
        editor.handle_pointer(PointerEvent::Down {
            position: Point::new(100.0, 100.0),
            button: MouseButton::Middle,
        });
        assert!(editor.captures_pointer());
        editor.handle_pointer(moved(150.0, 120.0));
        editor.handle_pointer(PointerEvent::Up {
            position: Point::new(150.0, 120.0),
            button: MouseButton::Middle,
        });
        assert!(!editor.captures_pointer());
        assert_eq!(editor.transform().origin(), Point::new(-50.0, -20.0));
        assert_eq!(editor.scene().history().len(), 1);
    }

    #[test]
    fn test_wheel_zooms_about_pointer() {
        let mut editor = Editor::default();
        let pointer = Point::new(200.0, 100.0);
        let before = editor.transform().screen_to_world(pointer);
        assert!(editor.handle_pointer(PointerEvent::Wheel {
            position: pointer,
            delta_y: -1.0
        }));
        assert!((editor.transform().scale() - 1.1).abs() < 1e-12);
        let after = editor.transform().screen_to_world(pointer);
        assert!((before - after).hypot() < 1e-9);

        editor.handle_pointer(PointerEvent::Wheel {
            position: pointer,
            delta_y: 1.0,
        });
        assert!((editor.transform().scale() - 0.99).abs() < 1e-12);
    }

    #[test]
    fn test_wheel_ignored_while_dragging() {
        let mut editor = Editor::default();
        editor.add_item(ItemSpec::new("Desk", 5.0, 5.0));
        editor.handle_pointer(down(400.0, 300.0));
        assert!(!editor.wheel(Point::new(400.0, 300.0), -1.0));
        assert!((editor.transform().scale() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_draw_polyline_with_enter() {
        let mut editor = Editor::default();
        editor.set_polyline_mode(true);
        assert!(editor.is_polyline_mode());

        for (x, y) in [(0.0, 0.0), (100.0, 0.0), (100.0, 100.0)] {
            editor.handle_pointer(down(x, y));
            editor.handle_pointer(up(x, y));
        }
        editor.handle_pointer(moved(140.0, 160.0));
        assert_eq!(editor.scene().draft().shadow_point(), Some(Point::new(150.0, 150.0)));
        assert!(editor.shadow_segment().is_some());

        assert!(editor.handle_key(KeyEvent::plain(Key::Enter)));
        assert!(!editor.is_polyline_mode());
        assert_eq!(editor.scene().polylines().len(), 1);
        let polyline = editor.scene().polylines().all().next().unwrap();
        assert_eq!(
            polyline.points,
            vec![Point::new(0.0, 0.0), Point::new(100.0, 0.0), Point::new(100.0, 100.0)]
        );
        assert!(editor.scene().draft().is_empty());
        assert!(editor.shadow_segment().is_none());
    }

    #[test]
    fn test_escape_discards_draft() {
        let mut editor = Editor::default();
        editor.set_polyline_mode(true);
        editor.handle_pointer(down(0.0, 0.0));
        editor.handle_pointer(down(100.0, 0.0));
        assert!(editor.handle_key(KeyEvent::plain(Key::Escape)));
        assert!(!editor.is_polyline_mode());
        assert!(editor.scene().polylines().is_empty());
        assert!(editor.scene().draft().is_empty());
    }

    #[test]
    fn test_ctrl_z_undoes_draft_points() {
        let mut editor = Editor::default();
        editor.add_item(ItemSpec::new("Desk", 5.0, 5.0));
        editor.set_polyline_mode(true);
        editor.handle_pointer(down(0.0, 0.0));
        editor.handle_pointer(down(100.0, 0.0));

        assert!(editor.handle_key(ctrl('z')));
        assert_eq!(editor.scene().draft().points().len(), 1);
        assert_eq!(editor.scene().items().len(), 1);
        assert!(editor.handle_key(ctrl('y')));
        assert_eq!(editor.scene().draft().points().len(), 2);
    }

    #[test]
    fn test_leaving_mode_keeps_complete_draft() {
        let mut editor = Editor::default();
        editor.set_polyline_mode(true);
        editor.handle_pointer(down(0.0, 0.0));
        editor.set_polyline_mode(false);
        assert!(editor.scene().polylines().is_empty());

        editor.set_polyline_mode(true);
        editor.handle_pointer(down(0.0, 0.0));
        editor.handle_pointer(down(50.0, 50.0));
        editor.set_polyline_mode(false);
        assert_eq!(editor.scene().polylines().len(), 1);
    }

    #[test]
    fn test_pan_from_drawing_returns_to_drawing() {
        let mut editor = Editor::default();
        editor.set_polyline_mode(true);
        editor.handle_pointer(PointerEvent::Down {
            position: Point::new(10.0, 10.0),
            button: MouseButton::Middle,
        });
        assert!(editor.is_polyline_mode());
        editor.handle_pointer(PointerEvent::Leave);
        assert!(matches!(editor.interaction(), InteractionState::DrawingPolyline));
    }

    #[test]
    fn test_keyboard_undo_redo() {
        let mut editor = Editor::default();
        let id = editor.add_item(ItemSpec::new("Desk", 5.0, 5.0)).unwrap();
        assert!(editor.handle_key(ctrl('z')));
        assert!(editor.scene().item(&id).is_none());
        let shift_ctrl = Modifiers {
            shift: true,
            ..Modifiers::CTRL
        };
        assert!(editor.handle_key(KeyEvent::new(Key::Character('Z'), shift_ctrl)));
        assert!(editor.scene().item(&id).is_some());
    }

    #[test]
    fn test_click_empty_clears_selection() {
        let mut editor = Editor::default();
        let id = editor.add_item(ItemSpec::new("Desk", 5.0, 5.0)).unwrap();
        editor.scene_mut().select_item(Some(id));
        editor.handle_pointer(down(10.0, 10.0));
        editor.handle_pointer(up(10.0, 10.0));
        assert!(editor.scene().selection().is_empty());
    }

    #[test]
    fn test_delete_key() {
        let mut editor = Editor::default();
        editor.add_item(ItemSpec::new("Desk", 5.0, 5.0));
        editor.handle_pointer(down(400.0, 300.0));
        editor.handle_pointer(up(400.0, 300.0));
        assert!(editor.handle_key(KeyEvent::plain(Key::Delete)));
        assert!(editor.scene().items().is_empty());
    }

    #[test]
    fn test_drag_polyline_point() {
        let mut editor = Editor::default();
        let id = editor
            .scene_mut()
            .add_polyline(Polyline::new(vec![Point::new(0.0, 0.0), Point::new(100.0, 0.0)]))
            .unwrap();
        editor.handle_pointer(down(101.0, 1.0));
        assert!(matches!(
            editor.interaction(),
            InteractionState::DraggingPolylinePoint { index: 1, .. }
        ));
        editor.handle_pointer(moved(141.0, 52.0));
        editor.handle_pointer(up(141.0, 52.0));
        assert_eq!(editor.scene().polyline(&id).unwrap().points[1], Point::new(150.0, 50.0));
        assert_eq!(editor.scene().selection().polyline.as_ref(), Some(&id));
    }

    #[test]
    fn test_drag_polyline_segment() {
        let mut editor = Editor::default();
        let id = editor
            .scene_mut()
            .add_polyline(Polyline::new(vec![Point::new(0.0, 0.0), Point::new(100.0, 0.0)]))
            .unwrap();
        let history_len = editor.scene().history().len();
        editor.handle_pointer(down(50.0, 1.0));
        editor.handle_pointer(moved(90.0, 61.0));
        assert_eq!(editor.scene().polyline(&id).unwrap().points[0], Point::new(40.0, 60.0));
        editor.handle_pointer(up(90.0, 61.0));
        assert_eq!(
            editor.scene().polyline(&id).unwrap().points,
            vec![Point::new(50.0, 50.0), Point::new(150.0, 50.0)]
        );
        assert_eq!(editor.scene().history().len(), history_len + 1);
    }

    #[test]
    fn test_double_click_removes_vertex() {
        let mut editor = Editor::default();
        let id = editor
            .scene_mut()
            .add_polyline(Polyline::new(vec![
                Point::new(0.0, 0.0),
                Point::new(100.0, 0.0),
                Point::new(100.0, 100.0),
            ]))
            .unwrap();
        editor.handle_pointer(down(100.0, 0.0));
        editor.handle_pointer(up(100.0, 0.0));
        editor.handle_pointer(down(100.0, 0.0));
        editor.handle_pointer(up(100.0, 0.0));
        assert_eq!(
            editor.scene().polyline(&id).unwrap().points,
            vec![Point::new(0.0, 0.0), Point::new(100.0, 100.0)]
        );
    }
}
