use crate::decompose::SEPARATOR;
use crate::shorthand::expand_home_shorthand;

/// Returns the directory boundary a caller should associate with `input`.
///
/// The boundary is the expanded input up to and including its last
/// separator. Two inputs with the same boundary resolve to the same directory
/// listing, so a caller only needs a fresh [`crate::list_suggestions`] call
/// when the boundary changes. Empty input and input without any separator
/// both produce an empty string.
pub fn extract_dir(input: &str, home: &str) -> String {
    if input.is_empty() {
        return String::new();
    }

    let mut expanded = expand_home_shorthand(input, home);
    if expanded.ends_with(SEPARATOR) {
        return expanded;
    }

    match expanded.rfind(SEPARATOR) {
        Some(index) => {
            expanded.truncate(index + SEPARATOR.len_utf8());

            expanded
        }
        None => String::new(),
    }
}
