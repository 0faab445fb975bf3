use std::fs::{self, File, OpenOptions};
use std::io::{self, Read, Seek, SeekFrom, Write};
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Log file name inside the data directory
pub const LOG_FILE: &str = "foresight.log";

/// Size-based trimming of the log file, applied once at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogRotation {
    /// Trim once the file grows past this many bytes
    pub max_bytes: u64,
    /// Most recent bytes kept after trimming
    pub keep_bytes: u64,
}

impl Default for LogRotation {
    fn default() -> Self {
        Self {
            max_bytes: 5 * 1024 * 1024,
            keep_bytes: 1024 * 1024,
        }
    }
}

impl LogRotation {
    /// Keep only whole lines from the tail of an oversized log.
    ///
    /// Returns whether the file was trimmed.
    pub fn apply(&self, log_path: &Path) -> io::Result<bool> {
        let file_size = match fs::metadata(log_path) {
            Ok(metadata) => metadata.len(),
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(false),
            Err(e) => return Err(e),
        };
        if file_size <= self.max_bytes {
            return Ok(false);
        }

        let tail = {
            let mut file = File::open(log_path)?;
            file.seek(SeekFrom::Start(file_size.saturating_sub(self.keep_bytes)))?;
            let mut tail = Vec::new();
            file.read_to_end(&mut tail)?;
            tail
        };
        let first_line = tail
            .iter()
            .position(|&b| b == b'\n')
            .map_or(0, |i| i + 1);

        let mut file = File::create(log_path)?;
        writeln!(file, "--- log trimmed to the last {} bytes ---", self.keep_bytes)?;
        file.write_all(&tail[first_line..])?;
        Ok(true)
    }
}

/// Filter used unless `RUST_LOG` is set: the app at `level`, the core quieter
fn default_directives(level: &str) -> String {
    format!("foresight={level},foresight_core=warn")
}

/// Initialize logging to a file in the data directory.
///
/// Logs go to `{data_dir}/foresight.log` so the chart viewer never shares the
/// terminal with log output. The file is trimmed per [`LogRotation`] before
/// it is opened. `RUST_LOG` overrides `level`.
pub fn init_logging(data_dir: &Path, level: &str) -> color_eyre::Result<()> {
    fs::create_dir_all(data_dir)?;

    let log_path = data_dir.join(LOG_FILE);
    let rotation = LogRotation::default();
    let trimmed = rotation.apply(&log_path).unwrap_or_else(|e| {
        eprintln!("Warning: Failed to trim log file: {}", e);
        false
    });

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)?;

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(level)));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false),
        )
        .init();

    tracing::info!(log_path = %log_path.display(), trimmed, "foresight logging initialized");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn small(max_bytes: u64, keep_bytes: u64) -> LogRotation {
        LogRotation {
            max_bytes,
            keep_bytes,
        }
    }

    #[test]
    fn test_small_log_is_left_alone() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(LOG_FILE);
        fs::write(&path, "one\ntwo\n").unwrap();

        assert!(!small(1024, 4).apply(&path).unwrap());
        assert_eq!(fs::read_to_string(&path).unwrap(), "one\ntwo\n");
    }

    #[test]
    fn test_missing_log_is_not_an_error() {
        let dir = tempdir().unwrap();
        assert!(!small(10, 5).apply(&dir.path().join(LOG_FILE)).unwrap());
    }

    #[test]
    fn test_trimming_keeps_whole_recent_lines() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(LOG_FILE);
        fs::write(&path, "first line\nsecond line\nthird line\n").unwrap();

        // The last 16 bytes start mid-way through "second line"
        assert!(small(20, 16).apply(&path).unwrap());

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("--- log trimmed to the last 16 bytes ---\n"));
        assert!(content.ends_with("third line\n"));
        assert!(!content.contains("first"));
        assert!(!content.contains("second"));
    }

    #[test]
    fn test_default_rotation_limits() {
        let rotation = LogRotation::default();
        assert_eq!(rotation.max_bytes, 5 * 1024 * 1024);
        assert_eq!(rotation.keep_bytes, 1024 * 1024);
    }

    #[test]
    fn test_default_directives_quiet_the_core() {
        assert_eq!(
            default_directives("debug"),
            "foresight=debug,foresight_core=warn"
        );
        assert!(EnvFilter::try_new(default_directives("info")).is_ok());
    }
}
