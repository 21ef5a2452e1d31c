//! Backend-independent rendering for constellations: the per-tick draw
//! list, connection curves, star glyphs, particle effects and SVG export.

pub mod curve;
pub mod frame;
pub mod particles;
pub mod shape;
pub mod svg;
pub mod theme;

pub use frame::{EdgeItem, Frame, MinimapFrame, Overlay, StarItem};
pub use particles::ParticleSystem;
pub use theme::{CanvasTheme, ThemeMode};
