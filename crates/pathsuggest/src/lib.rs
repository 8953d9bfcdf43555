//! Directory-path suggestions for interactive line editors.
//!
//! [`list_suggestions`] turns partial input such as `~/pro` or `/usr/lo` into a
//! sorted, bounded list of directory completions. [`extract_dir`] computes the
//! directory a caller should associate with the current input so it can reuse
//! a previous listing until the user crosses into another directory.

/// Re-scan boundary computation for caller-side listing reuse.
pub mod boundary;
/// Splitting expanded paths into a directory and a name prefix.
pub mod decompose;
/// Directory listing capability and its filesystem implementation.
pub mod lister;
/// Home-directory `~/` expansion and contraction.
pub mod shorthand;
/// Suggestion pipeline built on top of a [`lister::DirectoryLister`].
pub mod suggest;

pub use boundary::extract_dir;
pub use decompose::{PathParts, SEPARATOR, decompose};
#[cfg(any(test, feature = "test-utils"))]
pub use lister::MockDirectoryLister;
pub use lister::{DirectoryEntry, DirectoryLister, FsDirectoryLister, ListError};
pub use shorthand::{HOME_SHORTHAND, contract_home_shorthand, expand_home_shorthand};
pub use suggest::list_suggestions;
