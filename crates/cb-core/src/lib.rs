pub mod history;
pub mod id;
pub mod model;
pub mod scene;
pub mod selection;
pub mod snapshot;
pub mod transform;

pub use history::{History, HistoryEntry};
pub use id::{ConnectionId, StarId};
pub use model::*;
pub use scene::{HIT_RADIUS, ImportSummary, Scene};
pub use selection::{Selection, TagFilter};
pub use snapshot::{ImportMode, Snapshot, SnapshotError};
pub use transform::Viewport;

// Re-export kurbo geometry so downstream crates share one set of types
pub use kurbo::{Affine, Point, Rect, Size, Vec2};
