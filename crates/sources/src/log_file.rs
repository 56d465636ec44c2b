//! Incremental reader for the append-only acquisition log
//!
//! The acquisition process appends one CSV row per sample. `LogCursor`
//! remembers how far it has read and only ever returns complete rows: a
//! trailing line without its newline stays in the file until the writer
//! finishes it.

use std::fs::File;
use std::io::{Read, Seek, SeekFrom};
use std::path::{Path, PathBuf};

use log::{debug, warn};
use raven_view_core::{RowSource, SourceError, SourceMetadata};

/// Byte cursor over the log file
pub struct LogCursor {
    metadata: SourceMetadata,
    path: PathBuf,
    /// Position just past the last complete row handed out
    offset: u64,
    /// Number of times the file shrank below `offset`
    resets: u64,
    available: bool,
}

impl LogCursor {
    pub fn new(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        Self {
            metadata: SourceMetadata {
                id: "log_file".to_string(),
                name: "Log file".to_string(),
                description: format!("Rows appended to {}", path.display()),
            },
            path,
            offset: 0,
            resets: 0,
            available: false,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn offset(&self) -> u64 {
        self.offset
    }

    pub fn resets(&self) -> u64 {
        self.resets
    }

    /// Read every complete row written since the previous call.
    ///
    /// A missing or unreadable file is reported as `SourceError::Unavailable`
    /// and leaves the offset untouched. A file shorter than the offset is
    /// treated as a fresh log: the offset drops to zero and reading restarts
    /// from the beginning within the same call.
    pub fn poll_new_rows(&mut self) -> Result<Vec<String>, SourceError> {
        let mut file = File::open(&self.path).map_err(|e| self.unavailable(e))?;
        let len = file.metadata().map_err(|e| self.unavailable(e))?.len();
        self.available = true;

        if len < self.offset {
            warn!(
                "{} shrank from {} to {} bytes, reading from the start",
                self.path.display(),
                self.offset,
                len
            );
            self.offset = 0;
            self.resets += 1;
        }
        if len == self.offset {
            return Ok(Vec::new());
        }

        file.seek(SeekFrom::Start(self.offset))
            .map_err(|e| self.unavailable(e))?;
        // Bound the read by the length observed above so a concurrent append
        // is picked up next tick instead of stretching this one.
        let mut buf = Vec::new();
        file.take(len - self.offset)
            .read_to_end(&mut buf)
            .map_err(|e| self.unavailable(e))?;

        let Some(last_newline) = buf.iter().rposition(|&b| b == b'\n') else {
            debug!("{}: partial row pending ({} bytes)", self.path.display(), buf.len());
            return Ok(Vec::new());
        };
        let consumed = last_newline + 1;

        let rows: Vec<String> = buf[..last_newline]
            .split(|&b| b == b'\n')
            .map(|line| line.strip_suffix(b"\r").unwrap_or(line))
            .filter(|line| !line.is_empty())
            .map(|line| String::from_utf8_lossy(line).into_owned())
            .collect();

        self.offset += consumed as u64;
        debug!(
            "{}: {} new rows, offset now {}",
            self.path.display(),
            rows.len(),
            self.offset
        );
        Ok(rows)
    }

    fn unavailable(&mut self, source: std::io::Error) -> SourceError {
        self.available = false;
        SourceError::Unavailable {
            path: self.path.clone(),
            source,
        }
    }
}

impl RowSource for LogCursor {
    fn metadata(&self) -> &SourceMetadata {
        &self.metadata
    }

    fn poll_rows(&mut self) -> Result<Vec<String>, SourceError> {
        self.poll_new_rows()
    }

    fn is_available(&self) -> bool {
        self.available
    }
}
