/// Path separator used by every path this crate builds or splits.
pub const SEPARATOR: char = '/';

const CURRENT_DIR: &str = ".";
const ROOT_DIR: &str = "/";

/// Directory to list and the name prefix to filter its entries by.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PathParts {
    /// Directory to query; never empty.
    pub directory: String,
    /// Text after the last separator; empty when the path ends in one.
    pub prefix: String,
}

/// Splits an already expanded path into [`PathParts`].
///
/// A trailing separator means the whole path names the directory and the
/// prefix is empty. Otherwise the path is split at its last separator, and a
/// path with no separator at all is treated as a prefix inside `.`. An empty
/// directory part always becomes the root.
pub fn decompose(expanded: &str) -> PathParts {
    if let Some(directory) = expanded.strip_suffix(SEPARATOR) {
        return PathParts {
            directory: root_if_empty(directory),
            prefix: String::new(),
        };
    }

    match expanded.rsplit_once(SEPARATOR) {
        Some((directory, prefix)) => PathParts {
            directory: root_if_empty(directory),
            prefix: prefix.to_string(),
        },
        None => PathParts {
            directory: CURRENT_DIR.to_string(),
            prefix: expanded.to_string(),
        },
    }
}

fn root_if_empty(directory: &str) -> String {
    if directory.is_empty() {
        return ROOT_DIR.to_string();
    }

    directory.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parts(directory: &str, prefix: &str) -> PathParts {
        PathParts {
            directory: directory.to_string(),
            prefix: prefix.to_string(),
        }
    }

    #[test]
    fn test_decompose_trailing_separator_lists_whole_path() {
        // Arrange
        let path = "/home/user/projects/";

        // Act
        let result = decompose(path);

        // Assert
        assert_eq!(result, parts("/home/user/projects", ""));
    }

    #[test]
    fn test_decompose_root_separator() {
        // Arrange
        let path = "/";

        // Act
        let result = decompose(path);

        // Assert
        assert_eq!(result, parts("/", ""));
    }

    #[test]
    fn test_decompose_splits_at_last_separator() {
        // Arrange
        let path = "/usr/lo";

        // Act
        let result = decompose(path);

        // Assert
        assert_eq!(result, parts("/usr", "lo"));
    }

    #[test]
    fn test_decompose_top_level_prefix_uses_root() {
        // Arrange
        let path = "/us";

        // Act
        let result = decompose(path);

        // Assert
        assert_eq!(result, parts("/", "us"));
    }

    #[test]
    fn test_decompose_without_separator_uses_current_directory() {
        // Arrange
        let path = "src";

        // Act
        let result = decompose(path);

        // Assert
        assert_eq!(result, parts(".", "src"));
    }

    #[test]
    fn test_decompose_relative_path_keeps_relative_directory() {
        // Arrange
        let path = "crates/path";

        // Act
        let result = decompose(path);

        // Assert
        assert_eq!(result, parts("crates", "path"));
    }

    #[test]
    fn test_decompose_never_returns_empty_directory() {
        // Arrange
        let paths = ["", "/", "/a", "a", "a/", "//", "/a/b/"];

        // Act
        let directories = paths
            .iter()
            .map(|path| decompose(path).directory)
            .collect::<Vec<_>>();

        // Assert
        assert!(directories.iter().all(|directory| !directory.is_empty()));
    }
}
