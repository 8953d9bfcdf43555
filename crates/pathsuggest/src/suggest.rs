use tracing::debug;

use crate::decompose::{PathParts, SEPARATOR, decompose};
use crate::lister::DirectoryLister;
use crate::shorthand::{contract_home_shorthand, expand_home_shorthand, uses_home_shorthand};

/// Lists directory completions for partially typed `input`.
///
/// `input` may start with `~/`, which is expanded with `home` for the lookup
/// and kept in the returned suggestions. The directory named by `input` is
/// listed once through `lister`; only subdirectories whose names start with
/// the typed prefix (case-sensitive) survive. Each suggestion ends with a
/// separator. Results are sorted ascending and truncated to `max_results`.
///
/// Empty input, a zero `max_results`, and any listing failure all produce an
/// empty list.
pub fn list_suggestions(
    input: &str,
    home: &str,
    lister: &dyn DirectoryLister,
    max_results: usize,
) -> Vec<String> {
    if input.is_empty() || max_results == 0 {
        return Vec::new();
    }

    let keep_shorthand = uses_home_shorthand(input);
    let expanded = expand_home_shorthand(input, home);
    let PathParts { directory, prefix } = decompose(&expanded);

    let entries = match lister.list_dir(&directory) {
        Ok(entries) => entries,
        Err(error) => {
            debug!(%directory, %error, "directory listing failed; returning no suggestions");

            return Vec::new();
        }
    };

    let directory_path = format!("{}{SEPARATOR}", directory.trim_end_matches(SEPARATOR));
    let mut suggestions = entries
        .into_iter()
        .filter(|entry| entry.is_dir && entry.name.starts_with(prefix.as_str()))
        .map(|entry| {
            let suggestion = format!("{directory_path}{}{SEPARATOR}", entry.name);
            if keep_shorthand {
                return contract_home_shorthand(&suggestion, home);
            }

            suggestion
        })
        .collect::<Vec<_>>();

    suggestions.sort();
    suggestions.truncate(max_results);
    debug!(
        %directory,
        %prefix,
        count = suggestions.len(),
        "built path suggestions"
    );

    suggestions
}
