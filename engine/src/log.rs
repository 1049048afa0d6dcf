use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Append-only sink for narrative lines (attacks, duel results, pickups).
///
/// Appending never fails from the caller's point of view.
pub trait Logger {
    fn append(&mut self, line: &str);
}

impl<L: Logger + ?Sized> Logger for &mut L {
    fn append(&mut self, line: &str) {
        (**self).append(line)
    }
}

/// Collects lines in memory.
impl Logger for Vec<String> {
    fn append(&mut self, line: &str) {
        self.push(line.to_string());
    }
}

/// Discards every line.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullLog;

impl Logger for NullLog {
    fn append(&mut self, _line: &str) {}
}

/// Plain-text log file, one line per entry.
#[derive(Debug)]
pub struct FileLog {
    path: PathBuf,
    file: File,
}

impl FileLog {
    /// Creates the file, truncating anything left from a previous game.
    pub fn create(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(&path)
            .with_context(|| format!("failed to create log file: {}", path.display()))?;
        tracing::debug!(path = %path.display(), "created narrative log");
        Ok(Self { path, file })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Logger for FileLog {
    fn append(&mut self, line: &str) {
        if let Err(e) = writeln!(self.file, "{}", line) {
            tracing::warn!(path = %self.path.display(), error = %e, "failed to append log line");
        }
    }
}
