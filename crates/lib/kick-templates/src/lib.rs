use std::path::PathBuf;

mod error;
pub mod generator;
pub mod project;
pub mod resources;

pub use crate::error::{TemplateError, TemplateResult};
pub use crate::project::Project;

/// Godot release the generated project is configured for.
pub const ENGINE_VERSION: &str = "4.2";

/// `swift-tools-version` declared at the top of the generated manifest.
pub const SWIFT_TOOLS_VERSION: &str = "5.9";

/// A rendered artifact, ready to be written under the project root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedFile {
    /// Path relative to the project root.
    pub path: PathBuf,
    pub content: Vec<u8>,
}

/// Trait defining the interface for project file templates
///
/// A template is a pure function of the [`Project`] it is rendered for: it
/// never touches the filesystem and never validates its input. Deciding where
/// and whether the output may be written is left to the caller.
///
/// # Examples
///
/// ```rust
/// use kick_templates::{Project, Template};
/// use std::path::PathBuf;
///
/// struct Notes;
///
/// impl Template for Notes {
///     fn name(&self) -> &'static str {
///         "notes"
///     }
///
///     fn path(&self, _project: &Project) -> PathBuf {
///         PathBuf::from("NOTES.txt")
///     }
///
///     fn render(&self, project: &Project) -> Vec<u8> {
///         format!("Notes for {}\n", project.name).into_bytes()
///     }
/// }
///
/// let project = Project::new("/tmp/demo", "Foo", "FooGame", "/usr/local/bin/godot");
/// let file = Notes.render_file(&project);
/// assert_eq!(file.path, PathBuf::from("NOTES.txt"));
/// assert_eq!(file.content, b"Notes for Foo\n");
/// ```
pub trait Template {
    /// Short, human readable name used when reporting progress.
    fn name(&self) -> &'static str;

    /// Where the rendered file lives, relative to the project root.
    fn path(&self, project: &Project) -> PathBuf;

    /// Render the file contents for the given project.
    fn render(&self, project: &Project) -> Vec<u8>;

    /// Render the template together with its destination path.
    fn render_file(&self, project: &Project) -> RenderedFile {
        RenderedFile {
            path: self.path(project),
            content: self.render(project),
        }
    }
}
