//! Append-only persistence for found results.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Durable store of found results.
///
/// Every find contributes one two-line record (address, then mnemonic),
/// appended under a single lock shared by all workers so records from
/// concurrent finds never interleave. The file is opened in append mode so a
/// prior run's results are preserved.
pub struct OutputSink {
    path: PathBuf,
    file: Mutex<File>,
}

impl OutputSink {
    /// Opens (or creates) the destination for appending.
    pub fn open(path: impl Into<PathBuf>) -> io::Result<Self> {
        let path = path.into();
        let file = OpenOptions::new().append(true).create(true).open(&path)?;

        Ok(Self {
            path,
            file: Mutex::new(file),
        })
    }

    /// Appends one two-line record and flushes it.
    pub fn append(&self, address: &str, mnemonic: &str) -> io::Result<()> {
        let mut file = self.file.lock().expect("output lock poisoned");
        writeln!(file, "{}", address)?;
        writeln!(file, "{}", mnemonic)?;
        file.flush()
    }

    /// Returns the destination path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Checks whether results could be appended to `path` without touching it.
///
/// An existing path must be a writable regular file; a missing path needs a
/// writable parent directory. Never creates or modifies the destination.
pub fn check_writable(path: &Path) -> bool {
    match fs::metadata(path) {
        Ok(meta) => meta.is_file() && !meta.permissions().readonly(),
        Err(_) => {
            let parent = match path.parent() {
                Some(dir) if !dir.as_os_str().is_empty() => dir,
                _ => Path::new("."),
            };
            fs::metadata(parent)
                .map(|meta| meta.is_dir() && !meta.permissions().readonly())
                .unwrap_or(false)
        }
    }
}
