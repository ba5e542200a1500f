//! A byte buffer standing in for an append-mode output file.

use std::io::{self, Write};
use std::sync::{Arc, Mutex, PoisonError};

use super::OutputTarget;

/// Output target backed by a shared buffer.
///
/// Every handle opened from the sink (or any clone of it) appends to the
/// same bytes, so several `WriteEngine` runs against one sink accumulate
/// exactly like runs against one `-output.file` path.
#[derive(Debug, Clone)]
pub struct InMemorySink {
    id: String,
    buf: Arc<Mutex<Vec<u8>>>,
}

impl InMemorySink {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            buf: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Everything written so far.
    pub fn contents(&self) -> Vec<u8> {
        self.buf
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Everything written so far, lossily decoded for assertions.
    pub fn contents_string(&self) -> String {
        String::from_utf8_lossy(&self.contents()).into_owned()
    }

    /// Check whether nothing has been written yet.
    pub fn is_empty(&self) -> bool {
        self.buf
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_empty()
    }
}

impl OutputTarget for InMemorySink {
    fn id(&self) -> &str {
        &self.id
    }

    fn open(&self) -> io::Result<Box<dyn Write + Send>> {
        Ok(Box::new(AppendHandle(Arc::clone(&self.buf))))
    }
}

/// One opened handle; writes land at the end of the shared buffer.
struct AppendHandle(Arc<Mutex<Vec<u8>>>);

impl Write for AppendHandle {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.0
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
