//! The editor context.
//!
//! `Editor` owns the scene and everything that views or edits it. Input
//! flows in through [`Editor::handle`] and the command methods; every
//! successful scene mutation is recorded in history and written to
//! storage before the call returns. Notifications for the host UI collect
//! in an outbox drained with [`Editor::take_events`].

use crate::config::EditorConfig;
use crate::export;
use crate::input::{InputEvent, Modifiers};
use crate::insights::{self, Stats};
use crate::share::{self, ShareError};
use crate::shortcuts::{ShortcutAction, ShortcutMap};
use crate::storage::Storage;
use crate::templates::Template;
use crate::tools::{Action, Interaction, Mode};
use cb_core::transform::minimap_to_world;
use cb_core::{
    History, ImportMode, ImportSummary, LineStyle, Point, Rgb, Scene, Selection, Size, Snapshot,
    SnapshotError, StarEdit, StarId, TagFilter, Viewport,
};
use cb_render::svg::render_svg;
use cb_render::{CanvasTheme, Frame, MinimapFrame};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::collections::BTreeSet;
use std::mem;

/// Notification for the host UI.
#[derive(Debug, Clone, PartialEq)]
pub enum EditorEvent {
    /// Play a particle burst (world space).
    Burst { at: Point, color: Rgb },
    /// Open the star editor dialog.
    EditStar(StarId),
    CloseDialogs,
    OpenSearch,
    ModeChanged(Mode),
    SelectionChanged,
    /// Scene content changed; refresh counters and the tag list.
    SceneChanged,
    /// Pan, zoom or tag visibility changed.
    ViewChanged,
}

/// Color and line style applied to new stars and connections.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Brush {
    pub color: Rgb,
    pub style: LineStyle,
}

pub struct Editor {
    scene: Scene,
    history: History,
    selection: Selection,
    tags: TagFilter,
    viewport: Viewport,
    interaction: Interaction,
    config: EditorConfig,
    storage: Box<dyn Storage>,
    canvas: Size,
    brush: Brush,
    /// Star open in the edit dialog.
    editing: Option<StarId>,
    /// Search hits.
    highlighted: BTreeSet<StarId>,
    rng: SmallRng,
    outbox: Vec<EditorEvent>,
}

impl Editor {
    /// An editor over an empty scene. Storage is only written, never read.
    pub fn new(config: EditorConfig, storage: Box<dyn Storage>, canvas: Size) -> Self {
        Self {
            scene: Scene::new(),
            history: History::new(config.history_capacity),
            selection: Selection::new(),
            tags: TagFilter::new(),
            viewport: Viewport::with_limits(config.min_zoom, config.max_zoom),
            interaction: Interaction::new(),
            brush: Brush {
                color: config.default_color(),
                style: LineStyle::default(),
            },
            rng: SmallRng::seed_from_u64(config.seed),
            storage,
            canvas,
            editing: None,
            highlighted: BTreeSet::new(),
            outbox: Vec::new(),
            config,
        }
    }

    /// Start up from the best available source: a share payload, then the
    /// stored scene, then nothing. Unreadable sources are logged and
    /// skipped. A scene loaded from a share link is saved to storage.
    pub fn load(
        config: EditorConfig,
        storage: Box<dyn Storage>,
        canvas: Size,
        share_payload: Option<&str>,
    ) -> Self {
        let mut editor = Self::new(config, storage, canvas);
        if !editor.hydrate_from_share(share_payload) {
            editor.hydrate_from_storage();
        }
        editor.history.reset_baseline(&editor.scene);
        editor
    }

    fn hydrate_from_share(&mut self, payload: Option<&str>) -> bool {
        let Some(payload) = payload else {
            return false;
        };
        match share::decode(payload) {
            Ok(snapshot) => {
                self.scene = Scene::from_snapshot(snapshot);
                log::info!(
                    "loaded {} stars from share link",
                    self.scene.star_count()
                );
                self.persist();
                true
            }
            Err(e) => {
                log::warn!("ignoring share link: {e}");
                false
            }
        }
    }

    fn hydrate_from_storage(&mut self) {
        let json = match self.storage.load(&self.config.storage_key) {
            Ok(Some(json)) => json,
            Ok(None) => return,
            Err(e) => {
                log::warn!("storage unavailable: {e}");
                return;
            }
        };
        match Snapshot::from_json(&json) {
            Ok(snapshot) => {
                self.scene = Scene::from_snapshot(snapshot);
                log::info!("restored {} stars from storage", self.scene.star_count());
            }
            Err(e) => log::warn!("ignoring stored scene: {e}"),
        }
    }

    // ─── Accessors ───────────────────────────────────────────────────────

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn tag_filter(&self) -> &TagFilter {
        &self.tags
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn mode(&self) -> Mode {
        self.interaction.mode()
    }

    pub fn interaction(&self) -> &Interaction {
        &self.interaction
    }

    pub fn brush(&self) -> Brush {
        self.brush
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn storage(&self) -> &dyn Storage {
        self.storage.as_ref()
    }

    pub fn canvas(&self) -> Size {
        self.canvas
    }

    pub fn editing(&self) -> Option<StarId> {
        self.editing
    }

    pub fn highlighted(&self) -> &BTreeSet<StarId> {
        &self.highlighted
    }

    /// Drain pending notifications.
    pub fn take_events(&mut self) -> Vec<EditorEvent> {
        mem::take(&mut self.outbox)
    }

    // ─── Input ───────────────────────────────────────────────────────────

    /// Process one input event and return the notifications it produced.
    pub fn handle(&mut self, event: &InputEvent) -> Vec<EditorEvent> {
        match event {
            InputEvent::Key {
                key,
                modifiers,
                in_text_field,
            } => {
                if !*in_text_field {
                    self.handle_key(key, *modifiers);
                }
            }
            InputEvent::Wheel { x, y, delta_y } => {
                let factor = if *delta_y > 0.0 {
                    self.config.wheel_zoom_out
                } else {
                    self.config.wheel_zoom_in
                };
                self.zoom_at(Point::new(*x, *y), factor);
            }
            _ => {
                if let Some(screen) = event.position() {
                    let world = self.viewport.world_from_screen(screen);
                    let hit = self
                        .scene
                        .find_star_within(world, self.config.hit_radius)
                        .map(|star| star.id);
                    for action in self.interaction.handle(event, world, hit) {
                        self.apply(action);
                    }
                }
            }
        }
        self.take_events()
    }

    fn handle_key(&mut self, key: &str, modifiers: Modifiers) {
        let Some(action) = ShortcutMap::resolve(
            key,
            modifiers.ctrl,
            modifiers.shift,
            modifiers.alt,
            modifiers.meta,
        ) else {
            return;
        };
        match action {
            ShortcutAction::CloseDialogs => self.close_dialogs(),
            ShortcutAction::Undo => {
                self.undo();
            }
            ShortcutAction::Redo => {
                self.redo();
            }
            ShortcutAction::OpenSearch => self.outbox.push(EditorEvent::OpenSearch),
            ShortcutAction::SetMode(mode) => self.set_mode(mode),
            ShortcutAction::AddRandomStar => self.add_random_star(),
        }
    }

    fn apply(&mut self, action: Action) {
        match action {
            Action::AddStar(at) => self.add_star_at(at),
            Action::DeleteStar(id) => {
                if self.scene.delete_star(id).is_some() {
                    self.commit("Delete star");
                }
            }
            Action::MoveStar { id, to } => {
                self.scene.move_star(id, to);
            }
            Action::FinishMove(_) => self.commit("Move star"),
            Action::Connect { from, to } => {
                let Brush { color, style } = self.brush;
                if self.scene.add_connection(from, to, color, style).is_none() {
                    return;
                }
                self.commit("Add connection");
                if let (Some(a), Some(b)) = (self.scene.star(from), self.scene.star(to)) {
                    let at = a.position().midpoint(b.position());
                    self.outbox.push(EditorEvent::Burst { at, color });
                }
            }
            Action::SelectOnly(id) => {
                self.selection.select_only(id);
                self.outbox.push(EditorEvent::SelectionChanged);
            }
            Action::ToggleSelected(id) => {
                self.selection.toggle(id);
                self.outbox.push(EditorEvent::SelectionChanged);
            }
            Action::SelectInRect { a, b } => {
                if self.selection.select_in_rect(&self.scene, a, b) > 0 {
                    self.outbox.push(EditorEvent::SelectionChanged);
                }
            }
            Action::PanBy(delta) => {
                self.viewport.pan_by(delta);
                self.outbox.push(EditorEvent::ViewChanged);
            }
            Action::EditStar(id) => self.open_editor(id),
        }
    }

    fn add_star_at(&mut self, at: Point) {
        let star = self.scene.add_star(at, self.brush.color);
        log::debug!("added {:?} at ({:.1}, {:.1})", star.id, at.x, at.y);
        self.commit("Add star");
        self.outbox.push(EditorEvent::Burst {
            at,
            color: star.color,
        });
        self.open_editor(star.id);
    }

    /// Place a star somewhere on screen, clear of the margin. A drag in
    /// progress is rolled back first.
    pub fn add_random_star(&mut self) {
        self.abandon_gesture();
        let margin = self.config.placement_margin;
        let span_x = (self.canvas.width - 2.0 * margin).max(0.0);
        let span_y = (self.canvas.height - 2.0 * margin).max(0.0);
        let screen = Point::new(
            margin + self.rng.random::<f64>() * span_x,
            margin + self.rng.random::<f64>() * span_y,
        );
        self.add_star_at(self.viewport.world_from_screen(screen));
    }

    // ─── Recording ───────────────────────────────────────────────────────

    /// Record the current scene as one undoable step and save it.
    fn commit(&mut self, label: &str) {
        self.prune_references();
        if self.scene == *self.history.baseline() {
            return;
        }
        self.history.record(label, &self.scene);
        self.persist();
        self.outbox.push(EditorEvent::SceneChanged);
    }

    /// Drop selection, highlight and dialog references to deleted stars.
    fn prune_references(&mut self) {
        let before = self.selection.len();
        self.selection.retain_existing(&self.scene);
        if self.selection.len() != before {
            self.outbox.push(EditorEvent::SelectionChanged);
        }
        self.highlighted.retain(|id| self.scene.contains(*id));
        if self.editing.is_some_and(|id| !self.scene.contains(id)) {
            self.editing = None;
            self.outbox.push(EditorEvent::CloseDialogs);
        }
    }

    fn persist(&mut self) {
        let json = match self.scene.serialize().to_json() {
            Ok(json) => json,
            Err(e) => {
                log::error!("failed to serialize constellation: {e}");
                return;
            }
        };
        if let Err(e) = self.storage.save(&self.config.storage_key, &json) {
            log::error!("failed to save constellation: {e}");
        }
    }

    /// Abandon the gesture in progress. A half-finished drag is rolled
    /// back to the last recorded state.
    fn abandon_gesture(&mut self) {
        if self.interaction.cancel() {
            self.scene = self.history.baseline().clone();
            log::debug!("drag abandoned, scene rolled back");
        }
    }

    // ─── History ─────────────────────────────────────────────────────────

    /// Undo the last step. Returns `false` when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        self.abandon_gesture();
        match self.history.undo(&mut self.scene) {
            Some(label) => {
                log::info!("undid \"{label}\"");
                self.after_restore();
                true
            }
            None => false,
        }
    }

    pub fn redo(&mut self) -> bool {
        self.abandon_gesture();
        match self.history.redo(&mut self.scene) {
            Some(label) => {
                log::info!("redid \"{label}\"");
                self.after_restore();
                true
            }
            None => false,
        }
    }

    fn after_restore(&mut self) {
        self.prune_references();
        self.persist();
        self.outbox.push(EditorEvent::SceneChanged);
    }

    // ─── Modes, brush & dialogs ──────────────────────────────────────────

    /// Switch modes. Leaving for anything but `select` clears the selection.
    pub fn set_mode(&mut self, mode: Mode) {
        if mode == self.interaction.mode() {
            return;
        }
        self.abandon_gesture();
        self.interaction.set_mode(mode);
        if mode != Mode::Select && !self.selection.is_empty() {
            self.selection.clear();
            self.outbox.push(EditorEvent::SelectionChanged);
        }
        log::debug!("mode: {}", mode.as_str());
        self.outbox.push(EditorEvent::ModeChanged(mode));
    }

    pub fn set_brush_color(&mut self, color: Rgb) {
        self.brush.color = color;
    }

    pub fn set_line_style(&mut self, style: LineStyle) {
        self.brush.style = style;
    }

    pub fn resize(&mut self, canvas: Size) {
        self.canvas = canvas;
        self.outbox.push(EditorEvent::ViewChanged);
    }

    pub fn open_editor(&mut self, id: StarId) {
        if self.scene.contains(id) {
            self.editing = Some(id);
            self.outbox.push(EditorEvent::EditStar(id));
        }
    }

    pub fn close_dialogs(&mut self) {
        self.editing = None;
        self.outbox.push(EditorEvent::CloseDialogs);
    }

    // ─── Commands ────────────────────────────────────────────────────────

    /// Apply the edit dialog and close it. Returns whether anything changed.
    pub fn save_star_edit(&mut self, id: StarId, edit: &StarEdit) -> bool {
        self.abandon_gesture();
        let changed = self.scene.update_star(id, edit);
        if changed {
            self.commit("Edit star");
        }
        if self.editing == Some(id) {
            self.close_dialogs();
        }
        changed
    }

    /// Delete every selected star and its connections.
    pub fn batch_delete_selected(&mut self) -> usize {
        self.abandon_gesture();
        let ids = self.selection.ids().clone();
        let removed = self.scene.delete_stars(&ids);
        if removed > 0 {
            self.commit(&format!("Delete {removed} stars"));
        }
        removed
    }

    pub fn batch_recolor_selected(&mut self, color: Rgb) -> usize {
        self.abandon_gesture();
        let changed = self.scene.recolor_stars(self.selection.ids(), color);
        if changed > 0 {
            self.commit(&format!("Recolor {changed} stars"));
        }
        changed
    }

    /// Remove everything. Undoable.
    pub fn clear_all(&mut self) -> bool {
        self.abandon_gesture();
        if !self.scene.clear() {
            return false;
        }
        self.commit("Clear all");
        true
    }

    /// Link stars sharing a tag with the current brush. Returns the number
    /// of connections created.
    pub fn connect_by_tag(&mut self) -> usize {
        self.abandon_gesture();
        let Brush { color, style } = self.brush;
        let created = self.scene.connect_by_tag(color, style);
        if created > 0 {
            log::info!("connected {created} pairs by tag");
            self.commit("Connect by tag");
        }
        created
    }

    /// Replace the scene with a starter layout. Undoable.
    pub fn apply_template(&mut self, template: Template) {
        self.abandon_gesture();
        self.scene = template.build(self.brush.style, &mut self.rng);
        log::info!("applied {} template", template.as_str());
        self.commit(&format!("Apply {} template", template.as_str()));
    }

    /// Highlight stars matching `query` and return them.
    pub fn search(&mut self, query: &str) -> Vec<StarId> {
        let hits = insights::search(&self.scene, query);
        self.highlighted = hits.iter().copied().collect();
        hits
    }

    pub fn clear_search(&mut self) {
        self.highlighted.clear();
    }

    pub fn stats(&self) -> Stats {
        Stats::compute(&self.scene)
    }

    // ─── View ────────────────────────────────────────────────────────────

    pub fn zoom_at(&mut self, anchor: Point, factor: f64) {
        let before = self.viewport;
        self.viewport.zoom_at(anchor, factor);
        if self.viewport != before {
            self.outbox.push(EditorEvent::ViewChanged);
        }
    }

    pub fn zoom_in(&mut self) {
        self.zoom_at(self.canvas_center(), self.config.button_zoom);
    }

    pub fn zoom_out(&mut self) {
        self.zoom_at(self.canvas_center(), 1.0 / self.config.button_zoom);
    }

    pub fn reset_view(&mut self) {
        self.viewport.reset();
        self.outbox.push(EditorEvent::ViewChanged);
    }

    /// Center the main view on a point clicked in the minimap.
    pub fn navigate_minimap(&mut self, minimap_point: Point) {
        let world = minimap_to_world(minimap_point, self.config.minimap_scale);
        self.viewport.center_on(world, self.canvas);
        self.outbox.push(EditorEvent::ViewChanged);
    }

    fn canvas_center(&self) -> Point {
        Point::new(self.canvas.width / 2.0, self.canvas.height / 2.0)
    }

    pub fn toggle_tag(&mut self, tag: &str) {
        self.tags.toggle_tag(tag, &self.scene);
        self.outbox.push(EditorEvent::ViewChanged);
    }

    pub fn show_all_tags(&mut self) {
        self.tags.show_all();
        self.outbox.push(EditorEvent::ViewChanged);
    }

    // ─── Import / export ─────────────────────────────────────────────────

    pub fn export_json(&self) -> Result<String, serde_json::Error> {
        export::export_json(&self.scene)
    }

    /// `None` for an empty scene.
    pub fn export_svg(&self, theme: &CanvasTheme) -> Option<String> {
        render_svg(&self.scene, theme)
    }

    /// Share payload for the current scene, `None` when it is empty.
    pub fn share_payload(&self) -> Result<Option<String>, ShareError> {
        if self.scene.is_empty() {
            return Ok(None);
        }
        share::encode(&self.scene.serialize()).map(Some)
    }

    /// Import a snapshot document read by the host. Invalid documents leave
    /// the editor untouched.
    pub fn apply_imported_snapshot(
        &mut self,
        json: &str,
        mode: ImportMode,
    ) -> Result<ImportSummary, SnapshotError> {
        let snapshot = Snapshot::from_json(json)?;
        self.abandon_gesture();
        let summary = self.scene.import_snapshot(snapshot, mode);
        log::info!(
            "imported {} stars and {} connections ({mode:?})",
            summary.stars,
            summary.connections
        );
        let label = match mode {
            ImportMode::Replace => "Import",
            ImportMode::Append => "Import (append)",
        };
        self.commit(label);
        Ok(summary)
    }

    // ─── Rendering ───────────────────────────────────────────────────────

    pub fn frame(&self) -> Frame {
        Frame::build(
            &self.scene,
            &self.selection,
            &self.tags,
            &self.viewport,
            self.canvas,
            &self.highlighted,
            self.interaction.overlay(&self.scene),
        )
    }

    pub fn minimap(&self) -> MinimapFrame {
        MinimapFrame::build(
            &self.scene,
            &self.viewport,
            self.canvas,
            self.config.minimap_scale,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;
    use pretty_assertions::assert_eq;

    fn editor() -> Editor {
        Editor::new(
            EditorConfig::default(),
            Box::new(MemoryStorage::new()),
            Size::new(800.0, 600.0),
        )
    }

    fn click(editor: &mut Editor, x: f64, y: f64) -> Vec<EditorEvent> {
        let mut events = editor.handle(&InputEvent::pointer_down(x, y));
        events.extend(editor.handle(&InputEvent::PointerUp { x, y }));
        events
    }

    #[test]
    fn add_click_creates_star_and_opens_editor() {
        let mut ed = editor();
        let events = click(&mut ed, 100.0, 120.0);
        assert_eq!(
            events,
            vec![
                EditorEvent::SceneChanged,
                EditorEvent::Burst {
                    at: Point::new(100.0, 120.0),
                    color: Rgb::WHITE
                },
                EditorEvent::EditStar(StarId(1)),
            ]
        );
        assert_eq!(ed.editing(), Some(StarId(1)));
        assert_eq!(ed.history().labels(), vec!["Add star"]);
    }

    #[test]
    fn click_maps_through_viewport() {
        let mut ed = editor();
        ed.handle(&InputEvent::Wheel {
            x: 0.0,
            y: 0.0,
            delta_y: -1.0,
        });
        click(&mut ed, 110.0, 55.0);
        let star = &ed.scene().stars()[0];
        assert!((star.x - 100.0).abs() < 1e-9);
        assert!((star.y - 50.0).abs() < 1e-9);
    }

    #[test]
    fn keys_are_ignored_in_text_fields() {
        let mut ed = editor();
        let typed = InputEvent::Key {
            key: "2".into(),
            modifiers: Modifiers::NONE,
            in_text_field: true,
        };
        assert!(ed.handle(&typed).is_empty());
        assert_eq!(ed.mode(), Mode::Add);
        assert_eq!(
            ed.handle(&InputEvent::key("2")),
            vec![EditorEvent::ModeChanged(Mode::Connect)]
        );
    }

    #[test]
    fn leaving_select_mode_clears_selection() {
        let mut ed = editor();
        click(&mut ed, 10.0, 10.0);
        ed.set_mode(Mode::Select);
        click(&mut ed, 10.0, 10.0);
        assert_eq!(ed.selection().len(), 1);
        ed.take_events();

        ed.set_mode(Mode::Move);
        assert!(ed.selection().is_empty());
        assert_eq!(
            ed.take_events(),
            vec![
                EditorEvent::SelectionChanged,
                EditorEvent::ModeChanged(Mode::Move)
            ]
        );
    }

    #[test]
    fn space_places_star_inside_margin() {
        let mut ed = editor();
        for _ in 0..20 {
            ed.handle(&InputEvent::key(" "));
        }
        assert_eq!(ed.scene().star_count(), 20);
        for star in ed.scene().stars().iter() {
            assert!((50.0..=750.0).contains(&star.x));
            assert!((50.0..=550.0).contains(&star.y));
        }
    }

    #[test]
    fn zoom_buttons_anchor_at_canvas_center() {
        let mut ed = editor();
        ed.zoom_in();
        assert_eq!(ed.viewport().zoom, 1.25);
        let center = ed.viewport().world_from_screen(Point::new(400.0, 300.0));
        assert!((center - Point::new(400.0, 300.0)).hypot() < 1e-9);
        ed.zoom_out();
        assert!((ed.viewport().zoom - 1.0).abs() < 1e-12);
    }

    #[test]
    fn minimap_click_centers_view() {
        let mut ed = editor();
        ed.navigate_minimap(Point::new(100.0, 50.0));
        let center = ed.viewport().world_from_screen(Point::new(400.0, 300.0));
        assert_eq!(center, Point::new(1000.0, 500.0));
    }

    #[test]
    fn failed_writes_keep_the_mutation() {
        let mut storage = MemoryStorage::new();
        storage.fail_writes = true;
        let mut ed = Editor::new(EditorConfig::default(), Box::new(storage), Size::new(800.0, 600.0));
        click(&mut ed, 10.0, 10.0);
        assert_eq!(ed.scene().star_count(), 1);
        assert!(ed.history().can_undo());
    }

    #[test]
    fn invalid_import_changes_nothing() {
        let mut ed = editor();
        click(&mut ed, 10.0, 10.0);
        let before = ed.scene().clone();
        assert!(matches!(
            ed.apply_imported_snapshot(r#"{"connections":[]}"#, ImportMode::Replace),
            Err(SnapshotError::MissingStars)
        ));
        assert!(matches!(
            ed.apply_imported_snapshot(r#"{"stars":{}}"#, ImportMode::Append),
            Err(SnapshotError::StarsNotArray)
        ));
        assert_eq!(ed.scene(), &before);
        assert_eq!(ed.history().undo_depth(), 1);
    }

    #[test]
    fn search_highlights_and_prunes_on_delete() {
        let mut ed = editor();
        click(&mut ed, 10.0, 10.0);
        click(&mut ed, 100.0, 10.0);
        assert_eq!(ed.search("star 2"), vec![StarId(2)]);
        assert!(ed.frame().stars[1].highlighted);

        ed.set_mode(Mode::Delete);
        click(&mut ed, 100.0, 10.0);
        assert!(ed.highlighted().is_empty());
    }

    #[test]
    fn share_payload_skips_empty_scene() {
        let mut ed = editor();
        assert_eq!(ed.share_payload().unwrap(), None);
        click(&mut ed, 10.0, 10.0);
        let payload = ed.share_payload().unwrap().unwrap();
        assert_eq!(share::decode(&payload).unwrap(), ed.scene().serialize());
    }

    #[test]
    fn templates_reset_ids_and_undo_in_one_step() {
        let mut ed = editor();
        for _ in 0..3 {
            ed.handle(&InputEvent::key(" "));
        }
        ed.apply_template(Template::FlowChart);
        assert_eq!(ed.scene().star_count(), 6);
        assert_eq!(ed.scene().next_star_id(), StarId(7));
        assert!(ed.undo());
        assert_eq!(ed.scene().star_count(), 3);
        assert_eq!(ed.scene().next_star_id(), StarId(4));
    }
}
