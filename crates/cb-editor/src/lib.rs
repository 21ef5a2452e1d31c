pub mod config;
pub mod editor;
pub mod export;
pub mod input;
pub mod insights;
pub mod share;
pub mod shortcuts;
pub mod storage;
pub mod templates;
pub mod tools;

pub use config::EditorConfig;
pub use editor::{Brush, Editor, EditorEvent};
pub use input::{InputEvent, Modifiers, PointerButton};
pub use insights::Stats;
pub use share::ShareError;
pub use storage::{FileStorage, MemoryStorage, Storage, StorageError};
pub use templates::Template;
pub use tools::{Interaction, Mode};
