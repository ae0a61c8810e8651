//! Append-only, human-readable activity log.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

/// Append-mode activity log, held open for the catalog's lifetime and closed
/// when the catalog is dropped.
///
/// Every run appends a fresh `Inventory Log:` header, so the file reads as a
/// concatenation of per-run sections. Writes are best-effort: a log that
/// failed to open degrades to a no-op, and a failed write is reported as a
/// warning, never surfaced to the operator.
#[derive(Debug)]
pub struct ActivityLog {
    file: Option<File>,
}

impl ActivityLog {
    /// Open (or create) the log at `path` in append mode and write the
    /// per-run header line.
    pub fn open(path: impl AsRef<Path>) -> io::Result<Self> {
        let mut file = OpenOptions::new().create(true).append(true).open(path)?;
        writeln!(file, "Inventory Log:")?;
        Ok(Self { file: Some(file) })
    }

    /// A log that drops every entry. Used when the log file is unavailable.
    pub fn disabled() -> Self {
        Self { file: None }
    }

    pub fn is_enabled(&self) -> bool {
        self.file.is_some()
    }

    /// Append one entry line.
    pub(crate) fn record(&mut self, line: &str) {
        let Some(file) = self.file.as_mut() else {
            return;
        };
        if let Err(err) = writeln!(file, "{line}") {
            tracing::warn!(%err, "failed to append to activity log");
        }
    }
}
