use crate::{Project, Template};
use std::path::PathBuf;

/// `.env` file included by the Makefile.
///
/// Values referencing other variables use make syntax, so the file is only
/// meaningful when included from a Makefile, not when sourced by a shell.
pub struct EnvFile;

impl Template for EnvFile {
    fn name(&self) -> &'static str {
        "environment file"
    }

    fn path(&self, _project: &Project) -> PathBuf {
        PathBuf::from(".env")
    }

    fn render(&self, project: &Project) -> Vec<u8> {
        let godot_directory = project.absolute(&project.godot_directory());

        format!(
            "export PROJECT_NAME={name}
export GODOT={godot}
export GODOT_PROJECT_DIRECTORY={godot_directory}
export GODOT_PROJECT_FILE_PATH=$(GODOT_PROJECT_DIRECTORY)/project.godot
export GODOT_BIN_PATH=$(GODOT_PROJECT_DIRECTORY)/bin
export BUILD_PATH=./build
export LIBRARY_NAME=$(PROJECT_NAME)
export EXECUTABLE_NAME={executable}
",
            name = project.name,
            godot = project.engine_path.display(),
            godot_directory = godot_directory.display(),
            executable = project.executable_name,
        )
        .into_bytes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_file_points_at_project_godot_directory() {
        let project = Project::new("/tmp/demo", "Foo", "FooGame", "/usr/local/bin/godot");
        let rendered = String::from_utf8(EnvFile.render(&project)).unwrap();

        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "export PROJECT_NAME=Foo");
        assert_eq!(lines[1], "export GODOT=/usr/local/bin/godot");
        assert_eq!(lines[2], "export GODOT_PROJECT_DIRECTORY=/tmp/demo/godot");
        assert_eq!(lines.last(), Some(&"export EXECUTABLE_NAME=FooGame"));
    }
}
