//! Study files on disk
//!
//! A study is stored as a single YAML document:
//!
//! ```yaml
//! title: My study
//! scenarios:
//!   - id: impatient-beta
//!     title: Variable beta
//!     case: AbsoluteImpatience
//!     base: { interest_factor: 1.03, discount_factor: 0.96, ... }
//!     sweep:
//!       primary: { parameter: DiscountFactor, min_value: 0.5, max_value: 0.97, step_count: 50 }
//! figures: []
//! ```

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use foresight_core::Study;

use crate::util::io::atomic_write;

/// Output path that means "write to stdout"
pub const STDOUT_PATH: &str = "-";

/// Error types for storage operations
#[derive(Debug)]
pub enum StorageError {
    Io(String),
    Parse(String),
    Serialize(String),
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageError::Io(msg) => write!(f, "IO error: {}", msg),
            StorageError::Parse(msg) => write!(f, "Parse error: {}", msg),
            StorageError::Serialize(msg) => write!(f, "Serialization error: {}", msg),
        }
    }
}

impl std::error::Error for StorageError {}

/// Parse a study from YAML
pub fn study_from_yaml(yaml: &str) -> Result<Study, StorageError> {
    serde_saphyr::from_str(yaml)
        .map_err(|e| StorageError::Parse(format!("Failed to parse study: {}", e)))
}

/// Serialize a study to YAML
pub fn study_to_yaml(study: &Study) -> Result<String, StorageError> {
    serde_saphyr::to_string(study)
        .map_err(|e| StorageError::Serialize(format!("Failed to serialize study: {}", e)))
}

/// Load a study file. The study is parsed but not validated.
pub fn load_study(path: &Path) -> Result<Study, StorageError> {
    let content = fs::read_to_string(path).map_err(|e| {
        StorageError::Io(format!("Failed to read study {}: {}", path.display(), e))
    })?;
    study_from_yaml(&content)
}

/// Write a study file
pub fn save_study(path: &Path, study: &Study) -> Result<(), StorageError> {
    write_output(path, &study_to_yaml(study)?)
}

/// Write content to `path`, or to stdout when `path` is `-`
pub fn write_output(path: &Path, content: &str) -> Result<(), StorageError> {
    if path.as_os_str() == STDOUT_PATH {
        let mut stdout = io::stdout().lock();
        return stdout
            .write_all(content.as_bytes())
            .and_then(|()| stdout.flush())
            .map_err(|e| StorageError::Io(format!("Failed to write to stdout: {}", e)));
    }

    atomic_write(path, content)
        .map_err(|e| StorageError::Io(format!("Failed to write {}: {}", path.display(), e)))
}
