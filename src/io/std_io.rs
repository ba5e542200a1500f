//! The two real destinations for `-file.content`: stdout and an
//! append-mode file.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use super::OutputTarget;

/// Permission bits for files created by `FileOutput` (rw-r--r--).
pub const FILE_MODE: u32 = 0o644;

/// The default `-output.file`: the process's standard output.
///
/// `open` hands out the shared `Stdout` stream. Dropping that handle is the
/// end-of-run "close" for this target and leaves descriptor 1 open.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutOutput;

impl StdoutOutput {
    pub const ID: &'static str = "-";

    pub const fn new() -> Self {
        StdoutOutput
    }
}

impl OutputTarget for StdoutOutput {
    fn id(&self) -> &str {
        Self::ID
    }

    fn open(&self) -> io::Result<Box<dyn Write + Send>> {
        Ok(Box::new(io::stdout()))
    }
}

/// A `-output.file` path. Each `open` appends to it and never truncates.
#[derive(Debug, Clone)]
pub struct FileOutput {
    id: String,
    path: PathBuf,
}

impl FileOutput {
    pub fn new(path: PathBuf) -> Self {
        let id = path.to_string_lossy().into_owned();
        Self { id, path }
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl OutputTarget for FileOutput {
    fn id(&self) -> &str {
        &self.id
    }

    /// Open in write-only append mode, creating the file with `FILE_MODE`
    /// if it does not exist yet. Existing content is never truncated.
    fn open(&self) -> io::Result<Box<dyn Write + Send>> {
        let mut options = OpenOptions::new();
        options.create(true).append(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(FILE_MODE);
        }
        let file = options.open(&self.path)?;
        Ok(Box::new(file))
    }
}
