//! Append-only file event log
//!
//! One line per event: `<RFC3339 UTC timestamp> | <message>`. Logging
//! is fire-and-forget; a log that cannot be written must never take
//! the application down, so all I/O errors are dropped.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{SecondsFormat, Utc};

use crate::domain::ports::EventLog;

pub struct FileEventLog {
    path: PathBuf,
}

impl FileEventLog {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn append(&self, message: &str) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        let timestamp = Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true);
        writeln!(file, "{timestamp} | {message}")
    }
}

impl EventLog for FileEventLog {
    fn record(&self, message: &str) {
        let _ = self.append(message);
    }
}

/// Discards every event. Useful when wiring a registry that should
/// stay quiet, and in tests.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullEventLog;

impl EventLog for NullEventLog {
    fn record(&self, _message: &str) {}
}
