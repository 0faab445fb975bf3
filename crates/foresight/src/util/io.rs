//! I/O utility functions

use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Sibling path used while an atomic write is in flight (`results.json.tmp`)
fn temp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(OsString::from)
        .unwrap_or_else(|| OsString::from("output"));
    name.push(".tmp");
    path.with_file_name(name)
}

/// Write content to a file atomically using write-then-rename pattern.
///
/// The content is first written to a temporary file next to the target,
/// then renamed over it, so an interrupted export never leaves a truncated
/// file behind.
///
/// # Example
/// ```ignore
/// atomic_write(Path::new("results.json"), &json)?;
/// ```
pub fn atomic_write(path: &Path, content: &str) -> io::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let temp_path = temp_path(path);
    fs::write(&temp_path, content)?;
    fs::rename(&temp_path, path)?;

    Ok(())
}
