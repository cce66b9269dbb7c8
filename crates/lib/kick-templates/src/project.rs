use std::path::{Path, PathBuf};

/// Directory holding every Swift target of the generated package.
pub const SOURCES_DIRECTORY: &str = "Sources";

/// Directory holding the Godot sub-project.
pub const GODOT_DIRECTORY: &str = "godot";

/// Directory inside the executable target reserved for bundled assets.
pub const RESOURCES_DIRECTORY: &str = "Resources";

/// Everything a template needs to know about the project being generated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    /// Absolute path of the directory the project is generated into.
    pub root: PathBuf,
    /// Name of the library target, also used as the package name.
    pub name: String,
    /// Name of the executable target.
    pub executable_name: String,
    /// Path to the Godot executable on the developer machine.
    pub engine_path: PathBuf,
}

impl Project {
    pub fn new(
        root: impl Into<PathBuf>,
        name: impl Into<String>,
        executable_name: impl Into<String>,
        engine_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            root: root.into(),
            name: name.into(),
            executable_name: executable_name.into(),
            engine_path: engine_path.into(),
        }
    }

    pub fn sources_directory(&self) -> PathBuf {
        PathBuf::from(SOURCES_DIRECTORY)
    }

    pub fn library_directory(&self) -> PathBuf {
        self.sources_directory().join(&self.name)
    }

    pub fn executable_directory(&self) -> PathBuf {
        self.sources_directory().join(&self.executable_name)
    }

    pub fn executable_resources_directory(&self) -> PathBuf {
        self.executable_directory().join(RESOURCES_DIRECTORY)
    }

    pub fn godot_directory(&self) -> PathBuf {
        PathBuf::from(GODOT_DIRECTORY)
    }

    /// Resolve a project-relative path against the project root.
    pub fn absolute(&self, relative: &Path) -> PathBuf {
        self.root.join(relative)
    }
}
