//! Recruiter app runtime: wires the pure core to the engine, timers and the
//! host clipboard. Rendering is left to the embedding UI.
mod clipboard;
mod effects;
mod files;
mod runtime;
mod timer;

pub use clipboard::{Clipboard, ClipboardError, MemoryClipboard};
pub use effects::EffectRunner;
pub use files::{load_file, load_files};
pub use runtime::App;
pub use timer::NotificationTimer;
