mod environment;
mod godot;
mod manifest;
mod sources;

pub use environment::EnvFile;
pub use godot::{ExportPresets, GdExtension, GodotProject};
pub use manifest::Manifest;
pub use sources::{ExecutableSource, LibrarySource};

/// Symbol exported by the Swift library and looked up by Godot on load.
pub const ENTRY_SYMBOL: &str = "swift_entry_point";
