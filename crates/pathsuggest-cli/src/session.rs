//! Caller-side suggestion cache keyed by the re-scan boundary.

use pathsuggest::shorthand::uses_home_shorthand;
use pathsuggest::{DirectoryLister, SEPARATOR, extract_dir, list_suggestions};
use tracing::debug;

/// Input listed in place of the directory part when the input has no
/// separator yet.
const CURRENT_DIR_INPUT: &str = "./";

/// Identifies which listing the cached suggestions were built from.
///
/// The shorthand flag is part of the key because `~/a/` and `/home/user/a/`
/// share a boundary but format their suggestions differently.
#[derive(Clone, Debug, PartialEq, Eq)]
struct CacheKey {
    boundary: String,
    keep_shorthand: bool,
}

/// Suggestions for the text in one prompt, refreshed as the text changes.
///
/// The directory behind the current input is listed once per re-scan
/// boundary; further keystrokes inside the same directory only filter the
/// cached suggestions.
pub(crate) struct CompletionSession {
    cache_key: Option<CacheKey>,
    cached: Vec<String>,
    home: String,
    max_results: usize,
    refresh_count: usize,
    selected_index: Option<usize>,
    visible: Vec<String>,
}

impl CompletionSession {
    /// Creates an empty session expanding `~/` with `home`.
    pub(crate) fn new(home: String, max_results: usize) -> Self {
        Self {
            cache_key: None,
            cached: Vec::new(),
            home,
            max_results,
            refresh_count: 0,
            selected_index: None,
            visible: Vec::new(),
        }
    }

    /// Recomputes visible suggestions for `input`, listing through `lister`
    /// only when the boundary changed since the last listing.
    ///
    /// Clears the current selection.
    pub(crate) fn update(&mut self, input: &str, lister: &dyn DirectoryLister) {
        self.selected_index = None;
        if input.is_empty() {
            self.visible.clear();

            return;
        }

        let key = CacheKey {
            boundary: extract_dir(input, &self.home),
            keep_shorthand: uses_home_shorthand(input),
        };
        let (directory_input, prefix) = split_directory_input(input);
        if self.cache_key.as_ref() != Some(&key) {
            self.cached = list_suggestions(directory_input, &self.home, lister, usize::MAX);
            self.refresh_count += 1;
            debug!(
                boundary = %key.boundary,
                entries = self.cached.len(),
                refresh_count = self.refresh_count,
                "refreshed directory listing"
            );
            self.cache_key = Some(key);
        }

        self.visible = self
            .cached
            .iter()
            .filter(|suggestion| suggestion_name(suggestion).starts_with(prefix))
            .take(self.max_results)
            .cloned()
            .collect();
    }

    /// Returns the suggestions currently shown for the input.
    pub(crate) fn visible(&self) -> &[String] {
        &self.visible
    }

    /// Returns the highlighted suggestion index, if any.
    pub(crate) fn selected_index(&self) -> Option<usize> {
        self.selected_index
    }

    /// Returns the highlighted suggestion, if any.
    pub(crate) fn selected(&self) -> Option<&str> {
        self.selected_index
            .and_then(|index| self.visible.get(index))
            .map(String::as_str)
    }

    /// Moves the highlight down, wrapping to the first suggestion.
    pub(crate) fn select_next(&mut self) {
        if self.visible.is_empty() {
            return;
        }

        self.selected_index = Some(match self.selected_index {
            Some(index) if index + 1 < self.visible.len() => index + 1,
            _ => 0,
        });
    }

    /// Moves the highlight up, wrapping to the last suggestion.
    pub(crate) fn select_previous(&mut self) {
        if self.visible.is_empty() {
            return;
        }

        let last_index = self.visible.len() - 1;
        self.selected_index = Some(match self.selected_index {
            Some(index) if index > 0 => index - 1,
            _ => last_index,
        });
    }
}

/// Splits raw `input` into the part naming its directory (through the last
/// separator) and the partial name typed after it.
fn split_directory_input(input: &str) -> (&str, &str) {
    match input.rfind(SEPARATOR) {
        Some(index) => input.split_at(index + SEPARATOR.len_utf8()),
        None => (CURRENT_DIR_INPUT, input),
    }
}

/// Returns the final path segment of a suggestion such as `/usr/local/`.
fn suggestion_name(suggestion: &str) -> &str {
    let trimmed = suggestion.strip_suffix(SEPARATOR).unwrap_or(suggestion);

    trimmed
        .rsplit_once(SEPARATOR)
        .map_or(trimmed, |(_, name)| name)
}
