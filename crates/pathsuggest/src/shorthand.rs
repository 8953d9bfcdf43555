use crate::decompose::SEPARATOR;

/// Leading marker that stands for the caller's home directory.
pub const HOME_SHORTHAND: &str = "~/";

/// Returns whether `input` starts with the [`HOME_SHORTHAND`] marker.
pub fn uses_home_shorthand(input: &str) -> bool {
    input.starts_with(HOME_SHORTHAND)
}

/// Replaces a leading `~/` in `input` with `home` followed by a separator.
///
/// Everything after the marker is kept verbatim, including trailing
/// separators. Input without the marker is returned unchanged.
pub fn expand_home_shorthand(input: &str, home: &str) -> String {
    match input.strip_prefix(HOME_SHORTHAND) {
        Some(rest) => format!("{home}{SEPARATOR}{rest}"),
        None => input.to_string(),
    }
}

/// Re-expresses `path` relative to `home` with the `~/` marker.
///
/// Paths outside `home` are returned unchanged.
pub fn contract_home_shorthand(path: &str, home: &str) -> String {
    let home_prefix = format!("{home}{SEPARATOR}");

    match path.strip_prefix(&home_prefix) {
        Some(rest) => format!("{HOME_SHORTHAND}{rest}"),
        None => path.to_string(),
    }
}
