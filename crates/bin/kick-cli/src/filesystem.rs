use crate::error::{GenerationError, ScaffoldResult};
use include_dir::{Dir, DirEntry};
use kick_templates::resources::{Bundled, Resource};
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

/// What, if anything, lives at a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathStatus {
    Missing,
    File,
    Directory,
}

/// Probe `path`, following symlinks.
///
/// Anything that cannot be inspected is reported as missing, the same way
/// [`Path::exists`] does.
pub fn path_status(path: &Path) -> PathStatus {
    match fs::metadata(path) {
        Ok(metadata) if metadata.is_dir() => PathStatus::Directory,
        Ok(_) => PathStatus::File,
        Err(_) => PathStatus::Missing,
    }
}

fn filesystem_error(path: &Path) -> impl FnOnce(io::Error) -> GenerationError + '_ {
    move |source| GenerationError::Filesystem {
        path: path.to_path_buf(),
        source,
    }
}

/// Write `bytes` to `path`.
///
/// Without `allow_overwrite` the file is created exclusively, so any existing
/// entry, file or directory, is left untouched.
pub fn create_file(path: &Path, bytes: &[u8], allow_overwrite: bool) -> ScaffoldResult<()> {
    if allow_overwrite {
        return fs::write(path, bytes).map_err(filesystem_error(path));
    }

    let mut file = match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(file) => file,
        Err(error) if error.kind() == io::ErrorKind::AlreadyExists => {
            return Err(GenerationError::FileAlreadyExists {
                path: path.to_path_buf(),
            });
        }
        Err(error) => return Err(filesystem_error(path)(error)),
    };

    file.write_all(bytes).map_err(filesystem_error(path))
}

pub fn create_directory(path: &Path, recursive: bool) -> ScaffoldResult<()> {
    let result = if recursive {
        fs::create_dir_all(path)
    } else {
        fs::create_dir(path)
    };

    result.map_err(filesystem_error(path))
}

/// Names of the entries in a directory, sorted.
pub fn list_directory(path: &Path) -> ScaffoldResult<Vec<String>> {
    let mut entries = Vec::new();
    for entry in fs::read_dir(path).map_err(filesystem_error(path))? {
        let entry = entry.map_err(filesystem_error(path))?;
        entries.push(entry.file_name().to_string_lossy().to_string());
    }
    entries.sort();

    Ok(entries)
}

/// Copy a bundled resource to `destination`, which must not exist yet.
pub fn copy_resource(resource: Resource, destination: &Path) -> ScaffoldResult<()> {
    let bundled = resource.bundled()?;
    copy_tree(bundled, destination)
}

/// Copy a bundled file or directory tree to `destination`.
///
/// Nothing is overwritten: an existing destination surfaces as the underlying
/// filesystem error.
pub fn copy_tree(source: Bundled<'_>, destination: &Path) -> ScaffoldResult<()> {
    match source {
        Bundled::File(file) => write_new(destination, file.contents()),
        Bundled::Directory(dir) => {
            create_directory(destination, false)?;
            extract_dir(dir, dir.path(), destination)
        }
    }
}

/// Recursively extracts an embedded directory, re-rooting entries from
/// `prefix` onto `destination`.
fn extract_dir(dir: &Dir<'_>, prefix: &Path, destination: &Path) -> ScaffoldResult<()> {
    for entry in dir.entries() {
        let relative = entry.path().strip_prefix(prefix).unwrap_or(entry.path());
        let target = destination.join(relative);

        match entry {
            DirEntry::File(file) => write_new(&target, file.contents())?,
            DirEntry::Dir(sub_dir) => {
                create_directory(&target, false)?;
                extract_dir(sub_dir, prefix, destination)?;
            }
        }
    }

    Ok(())
}

fn write_new(path: &Path, bytes: &[u8]) -> ScaffoldResult<()> {
    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .map_err(filesystem_error(path))?;

    file.write_all(bytes).map_err(filesystem_error(path))
}

/// Recursively delete `path`. A path that is already gone counts as removed.
pub fn remove_tree(path: &Path) -> io::Result<()> {
    match fs::remove_dir_all(path) {
        Ok(()) => Ok(()),
        Err(error) if error.kind() == io::ErrorKind::NotFound => {
            debug!(path = ?path, "Nothing to remove");
            Ok(())
        }
        Err(error) => Err(error),
    }
}

/// Absolute, symlink-free form of an existing directory.
pub fn canonical_directory(path: &Path) -> io::Result<PathBuf> {
    fs::canonicalize(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use tempfile::TempDir;

    #[test]
    fn test_path_status() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("file.txt");
        fs::write(&file_path, "content").unwrap();

        assert_eq!(path_status(temp_dir.path()), PathStatus::Directory);
        assert_eq!(path_status(&file_path), PathStatus::File);
        assert_eq!(
            path_status(&temp_dir.path().join("missing")),
            PathStatus::Missing
        );
    }

    #[test]
    fn test_create_file_refuses_to_overwrite() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("Foo.swift");

        create_file(&path, b"first", false).unwrap();
        let error = create_file(&path, b"second", false).unwrap_err();

        assert_eq!(error.kind(), ErrorKind::FileAlreadyExists);
        assert_eq!(fs::read(&path).unwrap(), b"first");
    }

    #[test]
    fn test_create_file_refuses_to_replace_directory() {
        let temp_dir = TempDir::new().unwrap();

        let error = create_file(temp_dir.path(), b"content", false).unwrap_err();

        assert_eq!(error.kind(), ErrorKind::FileAlreadyExists);
        assert_eq!(path_status(temp_dir.path()), PathStatus::Directory);
    }

    #[test]
    fn test_create_file_with_overwrite() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(".env");

        create_file(&path, b"first", true).unwrap();
        create_file(&path, b"second", true).unwrap();

        assert_eq!(fs::read(&path).unwrap(), b"second");
    }

    #[test]
    fn test_create_directory_recursive() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("a/b/c");

        let error = create_directory(&nested, false).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::Filesystem);

        create_directory(&nested, true).unwrap();
        assert_eq!(path_status(&nested), PathStatus::Directory);
    }

    #[test]
    fn test_copy_tree_extracts_godot_directory() {
        let temp_dir = TempDir::new().unwrap();
        let destination = temp_dir.path().join("godot");

        copy_resource(Resource::GodotDirectory, &destination).unwrap();

        assert_eq!(path_status(&destination.join("icon.svg")), PathStatus::File);
        assert_eq!(
            path_status(&destination.join("bin")),
            PathStatus::Directory
        );
    }

    #[test]
    fn test_copy_tree_fails_when_destination_exists() {
        let temp_dir = TempDir::new().unwrap();
        let destination = temp_dir.path().join("README.md");
        fs::write(&destination, "mine").unwrap();

        let error = copy_resource(Resource::Readme, &destination).unwrap_err();

        assert_eq!(error.kind(), ErrorKind::Filesystem);
        assert_eq!(fs::read_to_string(&destination).unwrap(), "mine");
    }

    #[test]
    fn test_list_directory_is_sorted() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("b"), "").unwrap();
        fs::write(temp_dir.path().join("a"), "").unwrap();

        assert_eq!(list_directory(temp_dir.path()).unwrap(), vec!["a", "b"]);
    }

    #[test]
    fn test_remove_tree_is_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("demo");
        create_directory(&target.join("Sources"), true).unwrap();

        remove_tree(&target).unwrap();
        remove_tree(&target).unwrap();

        assert_eq!(path_status(&target), PathStatus::Missing);
    }
}
