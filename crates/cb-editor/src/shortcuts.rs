//! Keyboard shortcut mapping.
//!
//! Maps key + modifier combos to semantic `ShortcutAction`s. The map lives
//! in Rust so the wasm host and native tests share one binding table.

use crate::tools::Mode;

/// Actions that keyboard shortcuts can trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortcutAction {
    // ── Mode switching ──
    SetMode(Mode),

    // ── Edit ──
    Undo,
    Redo,
    /// Drop a star at a random on-canvas position.
    AddRandomStar,

    // ── UI ──
    CloseDialogs,
    OpenSearch,
}

/// Resolves key events into shortcut actions.
///
/// `ctrl` and `meta` are interchangeable so ⌘ works on macOS.
pub struct ShortcutMap;

impl ShortcutMap {
    /// Resolve a key event to an action.
    ///
    /// `key` is the `KeyboardEvent.key` value (e.g. `"z"`, `"Escape"`).
    /// Returns `None` if the key combo has no binding.
    pub fn resolve(
        key: &str,
        ctrl: bool,
        shift: bool,
        alt: bool,
        meta: bool,
    ) -> Option<ShortcutAction> {
        let cmd = ctrl || meta;

        // ── Modifier combos first (most specific) ──
        if cmd && shift {
            return match key {
                "z" | "Z" => Some(ShortcutAction::Redo),
                _ => None,
            };
        }

        if cmd {
            return match key {
                "z" | "Z" => Some(ShortcutAction::Undo),
                "y" | "Y" => Some(ShortcutAction::Redo),
                "f" | "F" => Some(ShortcutAction::OpenSearch),
                _ => None,
            };
        }

        if key == "Escape" {
            return Some(ShortcutAction::CloseDialogs);
        }

        if shift || alt {
            return None;
        }

        // ── Single keys (no modifiers) ──
        match key {
            "1" => Some(ShortcutAction::SetMode(Mode::Add)),
            "2" => Some(ShortcutAction::SetMode(Mode::Connect)),
            "3" => Some(ShortcutAction::SetMode(Mode::Move)),
            "4" => Some(ShortcutAction::SetMode(Mode::Delete)),
            " " => Some(ShortcutAction::AddRandomStar),
            _ => None,
        }
    }
}
