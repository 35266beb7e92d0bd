use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use serde::Serialize;

/// JSON-lines sink for resolution events (`--trace <path>`).
///
/// Opening or writing the file never fails resolution: problems are logged
/// once as warnings and the event is dropped.
pub struct TraceLogger {
    sink: Option<TraceSink>,
}

struct TraceSink {
    path: PathBuf,
    file: Mutex<File>,
}

impl TraceLogger {
    /// Append to `path`, creating it if needed.
    pub fn new(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match OpenOptions::new().create(true).append(true).open(path) {
            Ok(file) => Self {
                sink: Some(TraceSink {
                    path: path.to_path_buf(),
                    file: Mutex::new(file),
                }),
            },
            Err(e) => {
                tracing::warn!("could not open trace file '{}': {}", path.display(), e);
                Self::disabled()
            }
        }
    }

    pub fn disabled() -> Self {
        Self { sink: None }
    }

    pub fn is_enabled(&self) -> bool {
        self.sink.is_some()
    }

    pub fn path(&self) -> Option<&Path> {
        self.sink.as_ref().map(|s| s.path.as_path())
    }

    /// Write `event` as one JSON line.
    pub fn log<E: Serialize>(&self, event: &E) {
        let Some(sink) = &self.sink else {
            return;
        };
        if let Err(e) = sink.append(event) {
            tracing::warn!("dropped trace event for '{}': {}", sink.path.display(), e);
        }
    }
}

impl TraceSink {
    fn append<E: Serialize>(&self, event: &E) -> io::Result<()> {
        let mut line = serde_json::to_vec(event)?;
        line.push(b'\n');

        let mut file = self
            .file
            .lock()
            .map_err(|_| io::Error::other("trace file lock poisoned"))?;
        file.write_all(&line)
    }
}
