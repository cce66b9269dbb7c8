use crate::error::{TemplateError, TemplateResult};
use include_dir::{Dir, File, include_dir};
use std::fmt;
use std::path::Path;

static BUNDLE: Dir<'static> = include_dir!("$CARGO_MANIFEST_DIR/resources");

/// The resources embedded into the binary at compile time.
pub fn bundle() -> &'static Dir<'static> {
    &BUNDLE
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    File,
    Directory,
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceKind::File => write!(f, "file"),
            ResourceKind::Directory => write!(f, "directory"),
        }
    }
}

/// Static files copied into every generated project without modification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Readme,
    DesignDocument,
    GitIgnore,
    GodotDirectory,
    Makefile,
}

/// A resource as found inside a bundle.
#[derive(Debug, Clone, Copy)]
pub enum Bundled<'a> {
    File(&'a File<'a>),
    Directory(&'a Dir<'a>),
}

impl Resource {
    pub fn name(&self) -> &'static str {
        match self {
            Resource::Readme => "readme",
            Resource::DesignDocument => "game design document",
            Resource::GitIgnore => "ignore file",
            Resource::GodotDirectory => "godot directory",
            Resource::Makefile => "makefile",
        }
    }

    /// Path of the resource inside the bundle.
    ///
    /// The ignore file is stored without its leading dot so that it does not
    /// apply to the bundle directory itself.
    pub fn source(&self) -> &'static str {
        match self {
            Resource::Readme => "README.md",
            Resource::DesignDocument => "GDD.md",
            Resource::GitIgnore => "gitignore",
            Resource::GodotDirectory => "godot",
            Resource::Makefile => "Makefile",
        }
    }

    /// Path of the copy, relative to the project root.
    pub fn destination(&self) -> &'static Path {
        Path::new(match self {
            Resource::Readme => "README.md",
            Resource::DesignDocument => "GDD.md",
            Resource::GitIgnore => ".gitignore",
            Resource::GodotDirectory => "godot",
            Resource::Makefile => "Makefile",
        })
    }

    pub fn kind(&self) -> ResourceKind {
        match self {
            Resource::GodotDirectory => ResourceKind::Directory,
            _ => ResourceKind::File,
        }
    }

    /// Look the resource up in the embedded bundle.
    pub fn bundled(&self) -> TemplateResult<Bundled<'static>> {
        self.locate(bundle())
    }

    /// Look the resource up in `bundle`, checking it has the expected kind.
    pub fn locate<'a>(&self, bundle: &'a Dir<'a>) -> TemplateResult<Bundled<'a>> {
        let path = self.source();
        let found = match (bundle.get_file(path), bundle.get_dir(path)) {
            (Some(file), _) => Bundled::File(file),
            (None, Some(dir)) => Bundled::Directory(dir),
            (None, None) => {
                return Err(TemplateError::ResourceNotFound {
                    path: path.to_string(),
                });
            }
        };

        if found.kind() != self.kind() {
            return Err(TemplateError::UnexpectedKind {
                path: path.to_string(),
                expected: self.kind(),
                found: found.kind(),
            });
        }

        Ok(found)
    }
}

impl Bundled<'_> {
    pub fn kind(&self) -> ResourceKind {
        match self {
            Bundled::File(_) => ResourceKind::File,
            Bundled::Directory(_) => ResourceKind::Directory,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Resource; 5] = [
        Resource::Readme,
        Resource::DesignDocument,
        Resource::GitIgnore,
        Resource::GodotDirectory,
        Resource::Makefile,
    ];

    #[test]
    fn test_every_resource_is_bundled() {
        for resource in ALL {
            let bundled = resource.bundled().unwrap();
            assert_eq!(bundled.kind(), resource.kind());

            if let Bundled::File(file) = bundled {
                assert!(!file.contents().is_empty(), "{} is empty", resource.name());
            }
        }
    }

    #[test]
    fn test_godot_directory_has_content() {
        let Bundled::Directory(dir) = Resource::GodotDirectory.bundled().unwrap() else {
            panic!("godot resource should be a directory");
        };

        assert!(dir.get_file("godot/icon.svg").is_some());
        assert!(dir.get_file("godot/project.godot").is_none());
    }

    #[test]
    fn test_missing_resource() {
        let empty = Dir::new("", &[]);
        let result = Resource::Makefile.locate(&empty);

        assert_eq!(
            result.unwrap_err(),
            TemplateError::ResourceNotFound {
                path: "Makefile".to_string()
            }
        );
    }

    #[test]
    fn test_resource_of_wrong_kind() {
        static ENTRIES: &[include_dir::DirEntry<'static>] = &[include_dir::DirEntry::File(
            File::new("godot", b"not a directory"),
        )];
        let bundle = Dir::new("", ENTRIES);

        let result = Resource::GodotDirectory.locate(&bundle);

        assert_eq!(
            result.unwrap_err(),
            TemplateError::UnexpectedKind {
                path: "godot".to_string(),
                expected: ResourceKind::Directory,
                found: ResourceKind::File,
            }
        );
    }

    #[test]
    fn test_gitignore_lands_as_dotfile() {
        assert_eq!(Resource::GitIgnore.destination(), Path::new(".gitignore"));
    }
}
