use std::fs;
use std::io;
use std::path::Path;

/// A single immediate child reported by a [`DirectoryLister`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DirectoryEntry {
    /// Whether this entry is a directory.
    pub is_dir: bool,
    /// File name without any leading path (e.g., `Documents`).
    pub name: String,
}

impl DirectoryEntry {
    /// Creates a directory entry named `name`.
    pub fn directory(name: impl Into<String>) -> Self {
        Self {
            is_dir: true,
            name: name.into(),
        }
    }

    /// Creates a non-directory entry named `name`.
    pub fn file(name: impl Into<String>) -> Self {
        Self {
            is_dir: false,
            name: name.into(),
        }
    }
}

/// Reasons a directory could not be listed.
#[derive(Debug, thiserror::Error)]
pub enum ListError {
    /// Opening or reading the directory failed.
    #[error("failed to read directory `{path}`: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },
    /// The path exists but does not name a directory.
    #[error("`{path}` is not a directory")]
    NotADirectory { path: String },
}

/// Capability that lists the immediate entries of one directory.
///
/// Production uses [`FsDirectoryLister`], while tests can inject
/// `MockDirectoryLister` to return fixed listings or failures.
#[cfg_attr(any(test, feature = "test-utils"), mockall::automock)]
pub trait DirectoryLister: Send + Sync {
    /// Returns the entries directly inside `directory`.
    ///
    /// # Errors
    /// Returns an error when `directory` is missing, is not a directory, or
    /// cannot be read.
    fn list_dir(&self, directory: &str) -> Result<Vec<DirectoryEntry>, ListError>;
}

/// [`DirectoryLister`] backed by [`std::fs::read_dir`].
///
/// Entries with non UTF-8 names or unreadable metadata are skipped. Symlinks
/// to directories are reported as directories.
#[derive(Clone, Copy, Debug, Default)]
pub struct FsDirectoryLister;

impl DirectoryLister for FsDirectoryLister {
    fn list_dir(&self, directory: &str) -> Result<Vec<DirectoryEntry>, ListError> {
        let path = Path::new(directory);
        let metadata = fs::metadata(path).map_err(|source| io_error(directory, source))?;
        if !metadata.is_dir() {
            return Err(ListError::NotADirectory {
                path: directory.to_string(),
            });
        }

        let read_dir = fs::read_dir(path).map_err(|source| io_error(directory, source))?;
        let entries = read_dir
            .filter_map(Result::ok)
            .filter_map(|entry| {
                let name = entry.file_name().into_string().ok()?;
                let is_dir = entry.path().is_dir();

                Some(DirectoryEntry { is_dir, name })
            })
            .collect();

        Ok(entries)
    }
}

fn io_error(directory: &str, source: io::Error) -> ListError {
    ListError::Io {
        path: directory.to_string(),
        source,
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    fn sorted_entries(mut entries: Vec<DirectoryEntry>) -> Vec<DirectoryEntry> {
        entries.sort_by(|first, second| first.name.cmp(&second.name));

        entries
    }

    #[test]
    fn test_fs_lister_empty_directory() {
        // Arrange
        let temp_dir = TempDir::new().expect("test expectation should hold");
        let directory = temp_dir.path().to_string_lossy().to_string();

        // Act
        let entries = FsDirectoryLister
            .list_dir(&directory)
            .expect("test expectation should hold");

        // Assert
        assert!(entries.is_empty());
    }

    #[test]
    fn test_fs_lister_marks_directories_and_files() {
        // Arrange
        let temp_dir = TempDir::new().expect("test expectation should hold");
        fs::create_dir(temp_dir.path().join("src")).expect("test expectation should hold");
        fs::write(temp_dir.path().join("Cargo.toml"), "").expect("test expectation should hold");
        let directory = temp_dir.path().to_string_lossy().to_string();

        // Act
        let entries = FsDirectoryLister
            .list_dir(&directory)
            .expect("test expectation should hold");

        // Assert
        assert_eq!(
            sorted_entries(entries),
            vec![
                DirectoryEntry::file("Cargo.toml"),
                DirectoryEntry::directory("src"),
            ]
        );
    }

    #[test]
    fn test_fs_lister_lists_only_immediate_children() {
        // Arrange
        let temp_dir = TempDir::new().expect("test expectation should hold");
        fs::create_dir_all(temp_dir.path().join("a/b/c")).expect("test expectation should hold");
        let directory = temp_dir.path().to_string_lossy().to_string();

        // Act
        let entries = FsDirectoryLister
            .list_dir(&directory)
            .expect("test expectation should hold");

        // Assert
        assert_eq!(entries, vec![DirectoryEntry::directory("a")]);
    }

    #[cfg(unix)]
    #[test]
    fn test_fs_lister_reports_directory_symlink_as_directory() {
        // Arrange
        let temp_dir = TempDir::new().expect("test expectation should hold");
        fs::create_dir(temp_dir.path().join("target")).expect("test expectation should hold");
        std::os::unix::fs::symlink(temp_dir.path().join("target"), temp_dir.path().join("link"))
            .expect("test expectation should hold");
        let directory = temp_dir.path().to_string_lossy().to_string();

        // Act
        let entries = FsDirectoryLister
            .list_dir(&directory)
            .expect("test expectation should hold");

        // Assert
        assert_eq!(
            sorted_entries(entries),
            vec![
                DirectoryEntry::directory("link"),
                DirectoryEntry::directory("target"),
            ]
        );
    }

    #[test]
    fn test_fs_lister_missing_directory_returns_io_error() {
        // Arrange
        let temp_dir = TempDir::new().expect("test expectation should hold");
        let missing = temp_dir.path().join("missing").to_string_lossy().to_string();

        // Act
        let result = FsDirectoryLister.list_dir(&missing);

        // Assert
        assert!(matches!(
            result,
            Err(ListError::Io { ref path, .. }) if *path == missing
        ));
    }

    #[test]
    fn test_fs_lister_file_returns_not_a_directory() {
        // Arrange
        let temp_dir = TempDir::new().expect("test expectation should hold");
        let file_path = temp_dir.path().join("notes.txt");
        fs::write(&file_path, "notes").expect("test expectation should hold");
        let file_path = file_path.to_string_lossy().to_string();

        // Act
        let result = FsDirectoryLister.list_dir(&file_path);

        // Assert
        assert!(matches!(result, Err(ListError::NotADirectory { .. })));
    }

    #[test]
    fn test_list_error_messages_name_the_path() {
        // Arrange
        let error = ListError::NotADirectory {
            path: "/etc/hosts".to_string(),
        };

        // Act
        let message = error.to_string();

        // Assert
        assert_eq!(message, "`/etc/hosts` is not a directory");
    }
}
