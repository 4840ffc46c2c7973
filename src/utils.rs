//! Utility functions for the Modrinth SDK

use crate::error::Result;
use serde::Serialize;
use std::path::Path;

/// JSON-encode an array-valued parameter so it fits in a single query value
pub fn json_param<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string(value)?)
}

/// Last path component of a server-provided file name, if it has one.
///
/// Strips directories and `..` so the result is safe to join onto a download directory.
pub fn safe_file_name(name: &str) -> Option<&str> {
    Path::new(name).file_name().and_then(|name| name.to_str())
}

/// Format file size in human-readable form
pub fn format_file_size(bytes: u64) -> String {
    const UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB"];
    const THRESHOLD: f64 = 1024.0;

    if bytes == 0 {
        return "0 B".to_string();
    }

    let mut size = bytes as f64;
    let mut unit_index = 0;

    while size >= THRESHOLD && unit_index < UNITS.len() - 1 {
        size /= THRESHOLD;
        unit_index += 1;
    }

    if unit_index == 0 {
        format!("{} {}", bytes, UNITS[unit_index])
    } else {
        format!("{:.1} {}", size, UNITS[unit_index])
    }
}

/// Truncate text to a maximum length with ellipsis, respecting char boundaries
pub fn truncate_text(text: &str, max_length: usize) -> String {
    if text.chars().count() <= max_length {
        text.to_string()
    } else {
        let kept: String = text.chars().take(max_length.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
