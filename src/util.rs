//! Small path and formatting helpers shared by both pipelines.

/// Formats a byte count as a human-readable size with two decimals,
/// e.g. `19.80 KB`.
pub fn format_bytes(bytes: u64) -> String {
    const UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

    let mut size = bytes as f64;
    let mut unit = 0;
    while size >= 1024.0 && unit < UNITS.len() - 1 {
        size /= 1024.0;
        unit += 1;
    }

    format!("{:.2} {}", size, UNITS[unit])
}

/// Returns the final path component of `path`.
///
/// Both `/` and `\` are treated as separators so that artifacts embedded on
/// one platform name their payload sensibly on another.
pub fn extract_filename(path: &str) -> &str {
    match path.rfind(['/', '\\']) {
        Some(pos) => &path[pos + 1..],
        None => path,
    }
}

/// Returns the extension of `name` with the leading dot, lowercased, or an
/// empty string when there is none.
pub fn file_extension(name: &str) -> String {
    match name.rfind('.') {
        Some(pos) => name[pos..].to_lowercase(),
        None => String::new(),
    }
}

/// Resolves the final output path from the caller-supplied path and the
/// name of the file the output derives from (the host's name when
/// embedding, the recovered payload name when extracting).
///
/// - empty path: `extracted_` is prefixed to the source name
/// - path that already has an extension: used verbatim
/// - path without one: the source name's extension is appended
///
/// A dot only counts as an extension when it comes after the last path
/// separator, so `./output` and `dir.d/output` are extension-less.
pub fn resolve_output_path(user_path: &str, source_name: &str) -> String {
    if user_path.is_empty() {
        return format!("extracted_{}", source_name);
    }

    let dot = user_path.rfind('.');
    let sep = user_path.rfind(['/', '\\']);
    let has_extension = match (dot, sep) {
        (Some(d), Some(s)) => d > s,
        (Some(_), None) => true,
        (None, _) => false,
    };

    if has_extension {
        user_path.to_string()
    } else {
        format!("{}{}", user_path, file_extension(source_name))
    }
}
