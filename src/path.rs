//! Path normalization for summary entries
//!
//! Istanbul writes absolute paths; git reports paths relative to the
//! repository root. Stripping the sources base path makes the two comparable.

fn is_separator(c: char) -> bool {
    c == '/' || c == '\\'
}

/// Strip `base_path` from `file_path`, returning a `/`-separated relative path
///
/// Returns `file_path` unchanged when `base_path` is empty or is not a prefix
/// of `file_path` on a component boundary.
pub fn normalize(file_path: &str, base_path: &str) -> String {
    if base_path.is_empty() {
        return file_path.to_string();
    }

    let base = base_path.trim_end_matches(is_separator);
    let rest = match file_path.strip_prefix(base) {
        Some(rest) => rest,
        None => return file_path.to_string(),
    };

    // "/repo" must not match "/repository/a.js"
    if !base.is_empty() && !rest.is_empty() && !rest.starts_with(is_separator) {
        return file_path.to_string();
    }
    if base.is_empty() && !rest.starts_with(is_separator) {
        return file_path.to_string();
    }

    rest.trim_start_matches(is_separator).replace('\\', "/")
}
