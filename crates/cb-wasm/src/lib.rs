//! WASM bridge for the constellation builder: exposes the editor to
//! JavaScript.
//!
//! Compiled via `wasm-pack build --target web`. The page forwards DOM
//! events to [`ConstellationCanvas`] and drives `tick` + `render` from
//! `requestAnimationFrame`. Event handlers return a JSON array of
//! notifications the page reacts to (open dialogs, refresh counters).

mod render2d;
mod storage;

use cb_core::{ImportMode, LineStyle, Rgb, Shape, Size, StarEdit, StarId};
use cb_editor::input::{InputEvent, Modifiers, PointerButton};
use cb_editor::share::{payload_from_query, share_url};
use cb_editor::{Editor, EditorConfig, EditorEvent, Mode, Storage, Template};
use cb_render::particles::{BackgroundStar, starfield};
use cb_render::{ParticleSystem, ThemeMode};
use kurbo::Point;
use log::Level;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use serde_json::{Value, json};
use std::sync::Once;
use wasm_bindgen::prelude::*;
use web_sys::CanvasRenderingContext2d;

use crate::storage::LocalStorage;

const BACKDROP_STARS: usize = 100;

static INIT: Once = Once::new();

fn init_logging() {
    INIT.call_once(|| {
        let _ = console_log::init_with_level(Level::Debug);
        console_error_panic_hook::set_once();
    });
}

/// The main WASM-facing canvas controller.
///
/// Holds the editor plus the purely visual state (particles, backdrop,
/// theme) that never reaches history or storage.
#[wasm_bindgen]
pub struct ConstellationCanvas {
    editor: Editor,
    particles: ParticleSystem,
    backdrop: Vec<BackgroundStar>,
    rng: SmallRng,
    theme: ThemeMode,
}

#[wasm_bindgen]
impl ConstellationCanvas {
    /// Create the controller for a canvas of the given size. `config_json`
    /// overrides [`EditorConfig`] fields; the scene comes from the share
    /// link in the page URL, then localStorage, then starts empty.
    #[wasm_bindgen(constructor)]
    pub fn new(width: f64, height: f64, config_json: Option<String>) -> Self {
        init_logging();

        let config = match config_json.as_deref().map(EditorConfig::from_json) {
            Some(Ok(config)) => config,
            Some(Err(e)) => {
                log::warn!("ignoring invalid editor config: {e}");
                random_seeded(EditorConfig::default())
            }
            None => random_seeded(EditorConfig::default()),
        };

        let query = web_sys::window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let payload = payload_from_query(&query, &config.share_param);

        let storage = LocalStorage;
        let theme = match storage.load(&config.theme_key) {
            Ok(Some(name)) => name.parse().unwrap_or_default(),
            Ok(None) => ThemeMode::default(),
            Err(e) => {
                log::warn!("could not read theme preference: {e}");
                ThemeMode::default()
            }
        };

        let canvas = Size::new(width, height);
        let mut rng = SmallRng::seed_from_u64(config.seed ^ 0xB4C6);
        let backdrop = starfield(canvas, BACKDROP_STARS, &mut rng);
        let editor = Editor::load(config, Box::new(storage), canvas, payload);

        Self {
            editor,
            particles: ParticleSystem::new(),
            backdrop,
            rng,
            theme,
        }
    }

    // ─── Rendering ───────────────────────────────────────────────────────

    /// Render the scene to a Canvas2D context.
    pub fn render(&self, ctx: &CanvasRenderingContext2d, time_ms: f64) {
        let canvas = self.editor.canvas();
        render2d::render_frame(
            ctx,
            &self.editor.frame(),
            &self.particles,
            &self.backdrop,
            &self.theme.palette(),
            canvas.width,
            canvas.height,
            time_ms,
        );
    }

    pub fn render_minimap(&self, ctx: &CanvasRenderingContext2d, width: f64, height: f64) {
        render2d::render_minimap(
            ctx,
            &self.editor.minimap(),
            &self.theme.palette(),
            width,
            height,
        );
    }

    /// Advance particle animation by one frame. Returns `true` while
    /// particles are still alive.
    pub fn tick(&mut self) -> bool {
        self.particles.step();
        !self.particles.is_empty()
    }

    /// Resize the canvas. The backdrop is regenerated to cover the new area.
    pub fn resize(&mut self, width: f64, height: f64) {
        let canvas = Size::new(width, height);
        self.editor.resize(canvas);
        self.backdrop = starfield(canvas, BACKDROP_STARS, &mut self.rng);
    }

    // ─── Input ───────────────────────────────────────────────────────────

    #[allow(clippy::too_many_arguments)]
    pub fn handle_pointer_down(
        &mut self,
        x: f64,
        y: f64,
        button: i16,
        shift: bool,
        ctrl: bool,
        alt: bool,
        meta: bool,
    ) -> String {
        self.dispatch(&InputEvent::PointerDown {
            x,
            y,
            button: PointerButton::from_dom(button),
            modifiers: Modifiers {
                shift,
                ctrl,
                alt,
                meta,
            },
        })
    }

    pub fn handle_pointer_move(&mut self, x: f64, y: f64) -> String {
        self.dispatch(&InputEvent::PointerMove { x, y })
    }

    pub fn handle_pointer_up(&mut self, x: f64, y: f64) -> String {
        self.dispatch(&InputEvent::PointerUp { x, y })
    }

    pub fn handle_double_click(&mut self, x: f64, y: f64) -> String {
        self.dispatch(&InputEvent::DoubleClick { x, y })
    }

    pub fn handle_wheel(&mut self, x: f64, y: f64, delta_y: f64) -> String {
        self.dispatch(&InputEvent::Wheel { x, y, delta_y })
    }

    /// Keyboard shortcut. `in_text_field` is true while focus is in an
    /// input or textarea; those keys are left to the browser.
    #[allow(clippy::too_many_arguments)]
    pub fn handle_key(
        &mut self,
        key: &str,
        ctrl: bool,
        shift: bool,
        alt: bool,
        meta: bool,
        in_text_field: bool,
    ) -> String {
        self.dispatch(&InputEvent::Key {
            key: key.to_string(),
            modifiers: Modifiers {
                shift,
                ctrl,
                alt,
                meta,
            },
            in_text_field,
        })
    }

    // ─── Toolbar ─────────────────────────────────────────────────────────

    /// Switch mode by name (`add`, `connect`, `move`, `delete`, `select`).
    /// Returns `false` for an unknown name.
    pub fn set_mode(&mut self, name: &str) -> bool {
        match name.parse::<Mode>() {
            Ok(mode) => {
                self.editor.set_mode(mode);
                self.editor.take_events();
                true
            }
            Err(_) => false,
        }
    }

    pub fn mode_name(&self) -> String {
        self.editor.mode().as_str().to_string()
    }

    /// CSS cursor for the active mode.
    pub fn cursor(&self) -> String {
        self.editor.mode().cursor().to_string()
    }

    /// Brush color as `#rrggbb`. Returns `false` for malformed input.
    pub fn set_color(&mut self, hex: &str) -> bool {
        match Rgb::from_hex(hex) {
            Some(color) => {
                self.editor.set_brush_color(color);
                true
            }
            None => false,
        }
    }

    pub fn set_line_style(&mut self, name: &str) -> bool {
        match name.parse::<LineStyle>() {
            Ok(style) => {
                self.editor.set_line_style(style);
                true
            }
            Err(_) => false,
        }
    }

    pub fn undo(&mut self) -> bool {
        let done = self.editor.undo();
        self.editor.take_events();
        done
    }

    pub fn redo(&mut self) -> bool {
        let done = self.editor.redo();
        self.editor.take_events();
        done
    }

    pub fn can_undo(&self) -> bool {
        self.editor.history().can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.editor.history().can_redo()
    }

    pub fn add_random_star(&mut self) -> String {
        self.editor.add_random_star();
        let events = self.editor.take_events();
        self.publish(events)
    }

    // ─── Star editor dialog ──────────────────────────────────────────────

    /// Star as JSON, or an empty string if it does not exist.
    pub fn star_json(&self, id: f64) -> String {
        self.editor
            .scene()
            .star(StarId(id as u64))
            .and_then(|s| serde_json::to_string(s).ok())
            .unwrap_or_default()
    }

    /// Apply the edit dialog. `tags` is the raw comma-separated text.
    pub fn save_star_edit(
        &mut self,
        id: f64,
        title: &str,
        description: &str,
        tags: &str,
        shape: &str,
    ) -> bool {
        let edit = StarEdit {
            title: Some(title.to_string()),
            description: Some(description.to_string()),
            tags: Some(tags.to_string()),
            shape: shape.parse::<Shape>().ok(),
        };
        let saved = self.editor.save_star_edit(StarId(id as u64), &edit);
        self.editor.take_events();
        saved
    }

    pub fn close_dialogs(&mut self) {
        self.editor.close_dialogs();
        self.editor.take_events();
    }

    // ─── Batch operations ────────────────────────────────────────────────

    pub fn batch_delete_selected(&mut self) -> usize {
        let n = self.editor.batch_delete_selected();
        self.editor.take_events();
        n
    }

    pub fn batch_recolor_selected(&mut self, hex: &str) -> usize {
        let Some(color) = Rgb::from_hex(hex) else {
            return 0;
        };
        let n = self.editor.batch_recolor_selected(color);
        self.editor.take_events();
        n
    }

    pub fn selected_count(&self) -> usize {
        self.editor.selection().len()
    }

    pub fn clear_all(&mut self) -> bool {
        let cleared = self.editor.clear_all();
        self.editor.take_events();
        cleared
    }

    pub fn connect_by_tag(&mut self) -> usize {
        let n = self.editor.connect_by_tag();
        self.editor.take_events();
        n
    }

    /// Replace the scene with a template (`mindmap`, `orgchart`,
    /// `flowchart`, `project`).
    pub fn apply_template(&mut self, name: &str) -> bool {
        match name.parse::<Template>() {
            Ok(template) => {
                self.editor.apply_template(template);
                self.editor.take_events();
                true
            }
            Err(_) => false,
        }
    }

    // ─── Search, stats, tags ─────────────────────────────────────────────

    /// Highlight matching stars and return their ids as a JSON array.
    pub fn search(&mut self, query: &str) -> String {
        let hits: Vec<u64> = self.editor.search(query).iter().map(|id| id.get()).collect();
        self.editor.take_events();
        json!(hits).to_string()
    }

    pub fn clear_search(&mut self) {
        self.editor.clear_search();
    }

    pub fn stats_json(&self) -> String {
        serde_json::to_string(&self.editor.stats()).unwrap_or_default()
    }

    /// All tags in the scene with their visibility, as JSON.
    pub fn tags_json(&self) -> String {
        let filter = self.editor.tag_filter();
        let tags: Vec<Value> = self
            .editor
            .scene()
            .all_tags()
            .into_iter()
            .map(|tag| json!({ "visible": filter.is_tag_visible(&tag), "tag": tag }))
            .collect();
        Value::Array(tags).to_string()
    }

    pub fn toggle_tag(&mut self, tag: &str) {
        self.editor.toggle_tag(tag);
        self.editor.take_events();
    }

    pub fn show_all_tags(&mut self) {
        self.editor.show_all_tags();
        self.editor.take_events();
    }

    // ─── View ────────────────────────────────────────────────────────────

    pub fn zoom_in(&mut self) {
        self.editor.zoom_in();
        self.editor.take_events();
    }

    pub fn zoom_out(&mut self) {
        self.editor.zoom_out();
        self.editor.take_events();
    }

    pub fn reset_view(&mut self) {
        self.editor.reset_view();
        self.editor.take_events();
    }

    pub fn zoom_percent(&self) -> u32 {
        (self.editor.viewport().zoom * 100.0).round() as u32
    }

    /// Center the view on the world point under a minimap click.
    pub fn navigate_minimap(&mut self, x: f64, y: f64) {
        self.editor.navigate_minimap(Point::new(x, y));
        self.editor.take_events();
    }

    pub fn toggle_theme(&mut self) -> String {
        self.theme = self.theme.toggled();
        let key = self.editor.config().theme_key.clone();
        if let Err(e) = LocalStorage.save(&key, self.theme.as_str()) {
            log::error!("could not save theme preference: {e}");
        }
        self.theme.as_str().to_string()
    }

    pub fn theme_name(&self) -> String {
        self.theme.as_str().to_string()
    }

    /// Page background for the active theme.
    pub fn page_background(&self) -> String {
        self.theme.palette().page_bg.to_string()
    }

    // ─── Import / export ─────────────────────────────────────────────────

    pub fn export_json(&self) -> Result<String, JsValue> {
        self.editor
            .export_json()
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// SVG document, or `undefined` for an empty scene.
    pub fn export_svg(&self) -> Option<String> {
        self.editor.export_svg(&self.theme.palette())
    }

    /// Share link for the current scene, or `undefined` when it is empty.
    pub fn share_url(&self, base: &str) -> Result<Option<String>, JsValue> {
        let payload = self
            .editor
            .share_payload()
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        let param = &self.editor.config().share_param;
        Ok(payload.map(|p| share_url(base, param, &p)))
    }

    /// Import a snapshot file (`replace` or `append`). Returns a JSON
    /// summary; invalid files leave the scene unchanged.
    pub fn import_json(&mut self, json: &str, mode: &str) -> Result<String, JsValue> {
        let mode: ImportMode = mode
            .parse()
            .map_err(|e: cb_core::SnapshotError| JsValue::from_str(&e.to_string()))?;
        let summary = self
            .editor
            .apply_imported_snapshot(json, mode)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        self.editor.take_events();
        Ok(json!({
            "stars": summary.stars,
            "connections": summary.connections,
            "remapped": summary.remapped,
            "dropped": summary.dropped,
        })
        .to_string())
    }

    // ─── Counters ────────────────────────────────────────────────────────

    pub fn star_count(&self) -> usize {
        self.editor.scene().star_count()
    }

    pub fn connection_count(&self) -> usize {
        self.editor.scene().connection_count()
    }
}

impl ConstellationCanvas {
    fn dispatch(&mut self, event: &InputEvent) -> String {
        let events = self.editor.handle(event);
        self.publish(events)
    }

    /// Start bursts locally and serialize the rest for the page.
    fn publish(&mut self, events: Vec<EditorEvent>) -> String {
        let mut out = Vec::with_capacity(events.len());
        for event in events {
            if let EditorEvent::Burst { at, color } = event {
                self.particles.burst(at, color, &mut self.rng);
                continue;
            }
            out.push(event_json(&event));
        }
        Value::Array(out).to_string()
    }
}

fn event_json(event: &EditorEvent) -> Value {
    match event {
        EditorEvent::Burst { at, color } => {
            json!({ "type": "burst", "x": at.x, "y": at.y, "color": color.to_hex() })
        }
        EditorEvent::EditStar(id) => json!({ "type": "editStar", "id": id.get() }),
        EditorEvent::CloseDialogs => json!({ "type": "closeDialogs" }),
        EditorEvent::OpenSearch => json!({ "type": "openSearch" }),
        EditorEvent::ModeChanged(mode) => json!({ "type": "modeChanged", "mode": mode.as_str() }),
        EditorEvent::SelectionChanged => json!({ "type": "selectionChanged" }),
        EditorEvent::SceneChanged => json!({ "type": "sceneChanged" }),
        EditorEvent::ViewChanged => json!({ "type": "viewChanged" }),
    }
}

/// Without an explicit config the layout randomness differs per page load.
fn random_seeded(mut config: EditorConfig) -> EditorConfig {
    config.seed = (js_sys::Math::random() * u64::MAX as f64) as u64;
    config
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn events_serialize_with_type_tags() {
        let event = EditorEvent::EditStar(StarId(7));
        assert_eq!(event_json(&event), json!({ "type": "editStar", "id": 7 }));

        let event = EditorEvent::ModeChanged(Mode::Connect);
        assert_eq!(event_json(&event)["mode"], "connect");
    }

    #[test]
    fn burst_carries_hex_color() {
        let event = EditorEvent::Burst {
            at: Point::new(1.0, 2.0),
            color: Rgb::new(0xff, 0xd7, 0x00),
        };
        assert_eq!(event_json(&event)["color"], "#ffd700");
    }
}
