use crate::filesystem::PathStatus;
use crate::input::Input;
use kick_templates::TemplateError;
use std::path::PathBuf;
use thiserror::Error;

/// Nested executable inside a macOS application bundle.
const BUNDLE_EXECUTABLE: &str = "Contents/MacOS/Godot";

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("No value was provided for the {0}")]
    MissingInput(Input),

    #[error(
        "The executable name '{executable_name}' must differ from the project name '{project_name}'"
    )]
    DuplicateName {
        project_name: String,
        executable_name: String,
    },

    #[error("The Godot path points at an application bundle instead of an executable: {path}")]
    BundlePath { path: String },

    #[error("Could not change directory to: {}", .path.display())]
    ChangeDirectory {
        path: PathBuf,
        status: PathStatus,
        #[source]
        source: std::io::Error,
    },

    #[error("Directory at {} must be empty, but found: {}", .path.display(), .entries.join(", "))]
    DirectoryNotEmpty { path: PathBuf, entries: Vec<String> },

    #[error("Tried to create file at {} but the file already exists", .path.display())]
    FileAlreadyExists { path: PathBuf },

    #[error("Bundled resource not found: {resource}")]
    SourceNotFound { resource: String },

    #[error("Bundled resource is unusable: {0}")]
    Template(TemplateError),

    #[error("Filesystem error at {}: {source}", .path.display())]
    Filesystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Terminal IO error: {0}")]
    Terminal(#[from] std::io::Error),
}

/// Discriminant of [`GenerationError`], handy for matching without payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    MissingInput,
    DuplicateName,
    BundlePath,
    ChangeDirectory,
    DirectoryNotEmpty,
    FileAlreadyExists,
    SourceNotFound,
    Template,
    Filesystem,
    Terminal,
}

impl GenerationError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            GenerationError::MissingInput(_) => ErrorKind::MissingInput,
            GenerationError::DuplicateName { .. } => ErrorKind::DuplicateName,
            GenerationError::BundlePath { .. } => ErrorKind::BundlePath,
            GenerationError::ChangeDirectory { .. } => ErrorKind::ChangeDirectory,
            GenerationError::DirectoryNotEmpty { .. } => ErrorKind::DirectoryNotEmpty,
            GenerationError::FileAlreadyExists { .. } => ErrorKind::FileAlreadyExists,
            GenerationError::SourceNotFound { .. } => ErrorKind::SourceNotFound,
            GenerationError::Template(_) => ErrorKind::Template,
            GenerationError::Filesystem { .. } => ErrorKind::Filesystem,
            GenerationError::Terminal(_) => ErrorKind::Terminal,
        }
    }

    /// What the user can do about the error, if anything.
    pub fn recovery_suggestion(&self) -> Option<String> {
        match self {
            GenerationError::MissingInput(input) => Some(match input.flag() {
                Some(flag) => format!("Pass {flag} <value> or answer the prompt."),
                None => "Answer the prompt with y or n.".to_string(),
            }),
            GenerationError::DuplicateName { project_name, .. } => Some(format!(
                "Use a different executable name, for example {project_name}Game."
            )),
            GenerationError::BundlePath { path } => Some(format!(
                "Use the executable inside the bundle: {}/{BUNDLE_EXECUTABLE}",
                path.trim_end_matches('/')
            )),
            GenerationError::ChangeDirectory { path, status, .. } => {
                let path = path.display();
                Some(match status {
                    PathStatus::Missing => format!("{path} does not exist."),
                    PathStatus::File => format!(
                        "{path} is a file, not a directory. Please use a valid path to an existing directory."
                    ),
                    PathStatus::Directory => {
                        format!("Make sure you have permission to access {path}.")
                    }
                })
            }
            GenerationError::DirectoryNotEmpty { .. } => Some(
                "Choose an empty directory, or a path that does not exist yet.".to_string(),
            ),
            GenerationError::FileAlreadyExists { path } => Some(format!(
                "Remove {} or generate the project into a fresh directory.",
                path.display()
            )),
            GenerationError::SourceNotFound { .. } | GenerationError::Template(_) => {
                Some("The installation looks incomplete, reinstall swift-godot-kick.".to_string())
            }
            GenerationError::Filesystem { .. } | GenerationError::Terminal(_) => None,
        }
    }
}

impl From<TemplateError> for GenerationError {
    fn from(error: TemplateError) -> Self {
        match error {
            TemplateError::ResourceNotFound { path } => {
                GenerationError::SourceNotFound { resource: path }
            }
            other => GenerationError::Template(other),
        }
    }
}

pub type ScaffoldResult<T> = Result<T, GenerationError>;
