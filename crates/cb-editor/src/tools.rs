//! Mode-based pointer state machine.
//!
//! The active [`Mode`] decides what a click on the canvas means. A
//! [`Gesture`] tracks what the pointer is doing between down and up, and
//! is orthogonal to the mode: panning works the same in every mode and
//! suspends mode logic until release.
//!
//! `Interaction` never touches the scene. It translates input into
//! [`Action`]s that the editor applies, validates and records.
//!
//! | Input                         | Effect                               |
//! |-------------------------------|--------------------------------------|
//! | middle button / shift + left  | pan, any mode                        |
//! | left, `add`, empty space      | add star                             |
//! | left, `delete`, on star       | delete star                          |
//! | left drag, `connect`          | connect source to release target     |
//! | left drag, `move`             | move star                            |
//! | left, `select`                | select / ctrl-toggle / marquee       |

use crate::input::{InputEvent, PointerButton};
use cb_core::{Scene, StarId};
use cb_render::Overlay;
use kurbo::{Line, Point, Rect, Vec2};
use serde::{Deserialize, Serialize};
use std::mem;
use std::str::FromStr;

/// What a primary click on the canvas does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Add,
    Connect,
    Move,
    Delete,
    Select,
}

impl Mode {
    pub const ALL: [Mode; 5] = [Mode::Add, Mode::Connect, Mode::Move, Mode::Delete, Mode::Select];

    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Add => "add",
            Mode::Connect => "connect",
            Mode::Move => "move",
            Mode::Delete => "delete",
            Mode::Select => "select",
        }
    }

    /// CSS cursor shown over the canvas.
    pub fn cursor(self) -> &'static str {
        match self {
            Mode::Add => "crosshair",
            Mode::Connect => "alias",
            Mode::Move => "move",
            Mode::Delete => "pointer",
            Mode::Select => "cell",
        }
    }
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Mode::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| format!("unknown mode `{s}`"))
    }
}

/// Pointer activity between press and release.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum Gesture {
    #[default]
    Idle,
    DraggingStar {
        id: StarId,
        moved: bool,
    },
    DraggingConnection {
        from: StarId,
        /// Current pointer, world space.
        pointer: Point,
    },
    DraggingMarquee {
        start: Point,
        current: Point,
    },
    Panning {
        /// Last pointer, screen space.
        last: Point,
    },
}

/// A domain operation requested by the pointer. World coordinates unless
/// noted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    AddStar(Point),
    DeleteStar(StarId),
    /// Live drag update. Not recorded.
    MoveStar { id: StarId, to: Point },
    /// Drag released after moving; record the whole gesture.
    FinishMove(StarId),
    Connect { from: StarId, to: StarId },
    SelectOnly(StarId),
    ToggleSelected(StarId),
    SelectInRect { a: Point, b: Point },
    /// Screen-space pan delta.
    PanBy(Vec2),
    EditStar(StarId),
}

#[derive(Debug, Clone, Default)]
pub struct Interaction {
    mode: Mode,
    gesture: Gesture,
}

impl Interaction {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn gesture(&self) -> Gesture {
        self.gesture
    }

    /// Switch modes, abandoning any gesture in progress. Returns `false`
    /// if already in `mode`.
    pub fn set_mode(&mut self, mode: Mode) -> bool {
        if self.mode == mode {
            return false;
        }
        self.mode = mode;
        self.gesture = Gesture::Idle;
        true
    }

    /// Drop the current gesture. Returns `true` if a star drag was
    /// abandoned after moving, so the caller can roll the scene back.
    pub fn cancel(&mut self) -> bool {
        matches!(
            mem::take(&mut self.gesture),
            Gesture::DraggingStar { moved: true, .. }
        )
    }

    /// Translate a pointer event. `world` is the pointer in world space and
    /// `hit` the topmost star under it.
    pub fn handle(&mut self, event: &InputEvent, world: Point, hit: Option<StarId>) -> Vec<Action> {
        match event {
            InputEvent::PointerDown {
                x,
                y,
                button,
                modifiers,
            } => {
                if self.gesture != Gesture::Idle {
                    return Vec::new();
                }
                let pan = *button == PointerButton::Middle
                    || (*button == PointerButton::Primary && modifiers.shift);
                if pan {
                    self.gesture = Gesture::Panning {
                        last: Point::new(*x, *y),
                    };
                    log::debug!("gesture: panning");
                    return Vec::new();
                }
                if *button != PointerButton::Primary {
                    return Vec::new();
                }
                self.pointer_down(world, hit, modifiers.command())
            }

            InputEvent::PointerMove { x, y } => match &mut self.gesture {
                Gesture::Idle => Vec::new(),
                Gesture::Panning { last } => {
                    let screen = Point::new(*x, *y);
                    let delta = screen - *last;
                    *last = screen;
                    vec![Action::PanBy(delta)]
                }
                Gesture::DraggingStar { id, moved } => {
                    *moved = true;
                    vec![Action::MoveStar { id: *id, to: world }]
                }
                Gesture::DraggingMarquee { current, .. } => {
                    *current = world;
                    Vec::new()
                }
                Gesture::DraggingConnection { pointer, .. } => {
                    *pointer = world;
                    Vec::new()
                }
            },

            InputEvent::PointerUp { .. } => {
                let gesture = mem::take(&mut self.gesture);
                if gesture != Gesture::Idle {
                    log::debug!("gesture ended: {gesture:?}");
                }
                match gesture {
                    Gesture::Idle | Gesture::Panning { .. } => Vec::new(),
                    Gesture::DraggingStar { id, moved } => {
                        if moved {
                            vec![Action::FinishMove(id)]
                        } else {
                            Vec::new()
                        }
                    }
                    Gesture::DraggingMarquee { start, .. } => {
                        vec![Action::SelectInRect { a: start, b: world }]
                    }
                    Gesture::DraggingConnection { from, .. } => match hit {
                        Some(to) if to != from => vec![Action::Connect { from, to }],
                        _ => Vec::new(),
                    },
                }
            }

            InputEvent::DoubleClick { .. } => hit.map(Action::EditStar).into_iter().collect(),

            InputEvent::Wheel { .. } | InputEvent::Key { .. } => Vec::new(),
        }
    }

    fn pointer_down(&mut self, world: Point, hit: Option<StarId>, command: bool) -> Vec<Action> {
        match (self.mode, hit) {
            (Mode::Add, None) => vec![Action::AddStar(world)],
            (Mode::Delete, Some(id)) => vec![Action::DeleteStar(id)],
            (Mode::Connect, Some(from)) => {
                self.gesture = Gesture::DraggingConnection {
                    from,
                    pointer: world,
                };
                log::debug!("gesture: connecting from {from:?}");
                Vec::new()
            }
            (Mode::Move, Some(id)) => {
                self.gesture = Gesture::DraggingStar { id, moved: false };
                log::debug!("gesture: dragging {id:?}");
                Vec::new()
            }
            (Mode::Select, Some(id)) if command => vec![Action::ToggleSelected(id)],
            (Mode::Select, Some(id)) => vec![Action::SelectOnly(id)],
            (Mode::Select, None) => {
                self.gesture = Gesture::DraggingMarquee {
                    start: world,
                    current: world,
                };
                Vec::new()
            }
            _ => Vec::new(),
        }
    }

    /// Transient shapes for the renderer.
    pub fn overlay(&self, scene: &Scene) -> Overlay {
        match self.gesture {
            Gesture::DraggingMarquee { start, current } => Overlay {
                marquee: Some(Rect::from_points(start, current)),
                pending_link: None,
            },
            Gesture::DraggingConnection { from, pointer } => Overlay {
                marquee: None,
                pending_link: scene
                    .star(from)
                    .map(|star| Line::new(star.position(), pointer)),
            },
            _ => Overlay::default(),
        }
    }
}
