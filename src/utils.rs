use std::path::Path;
use std::sync::OnceLock;

use anyhow::Result;
use log::debug;
use regex::Regex;
use uuid::Uuid;

pub fn ensure_directory_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        std::fs::create_dir_all(path)?;
    }
    Ok(())
}

fn unsafe_chars() -> &'static Regex {
    static UNSAFE: OnceLock<Regex> = OnceLock::new();
    UNSAFE.get_or_init(|| Regex::new(r"[^a-zA-Z0-9_.-]").unwrap())
}

/// Splits a filename into base name and extension.
///
/// The extension starts at the last `.` of the final path component and keeps
/// the dot. Leading dots of that component never start an extension, so
/// `.bashrc` has none. `base + ext` always equals the input.
pub fn split_extension(filename: &str) -> (&str, &str) {
    let component_start = filename.rfind('/').map_or(0, |i| i + 1);
    let Some(dot) = filename.rfind('.') else {
        return (filename, "");
    };
    if dot < component_start || filename[component_start..dot].bytes().all(|b| b == b'.') {
        return (filename, "");
    }
    filename.split_at(dot)
}

/// Replaces every character of the base name outside `[a-zA-Z0-9_.-]` with `_`.
/// The extension is kept as-is.
pub fn sanitize_filename(filename: &str) -> String {
    let (base, ext) = split_extension(filename);
    let sanitized = format!("{}{}", unsafe_chars().replace_all(base, "_"), ext);
    debug!("sanitized {:?} -> {:?}", filename, sanitized);
    sanitized
}

/// Returns a random v4 UUID followed by the original extension.
pub fn generate_unique_filename(filename: &str) -> String {
    let (_, ext) = split_extension(filename);
    format!("{}{}", Uuid::new_v4(), ext)
}
