//! Synchronous engine performing the single write.

use std::io::Write;
use std::sync::Arc;

use tracing::debug;

use crate::config::WriteConfig;
use crate::error::{Error, SingleIoError};
use crate::io::OutputTarget;

/// Writes one piece of content to one output target.
///
/// The target is opened once per call to [`WriteEngine::run`] and the
/// handle is dropped before `run` returns, on success and on error alike.
#[derive(Debug, Clone)]
pub struct WriteEngine {
    content: Vec<u8>,
    target: Arc<dyn OutputTarget>,
}

impl WriteEngine {
    /// Create a new write engine.
    pub fn new(content: impl Into<Vec<u8>>, target: Arc<dyn OutputTarget>) -> Self {
        Self {
            content: content.into(),
            target,
        }
    }

    /// Create an engine for a validated configuration.
    pub fn from_config(config: &WriteConfig) -> Self {
        Self::new(config.content(), config.output().open_target())
    }

    /// Get the content that will be written.
    pub fn content(&self) -> &[u8] {
        &self.content
    }

    /// Get the output target.
    pub fn target(&self) -> &Arc<dyn OutputTarget> {
        &self.target
    }

    /// Open the output target.
    pub fn open(&self) -> Result<Box<dyn Write + Send>, SingleIoError> {
        let id = self.target.id();
        debug!(target_id = id, "opening output");
        self.target
            .open()
            .map_err(|e| SingleIoError::open(id, e))
    }

    /// Write the content to an already opened handle.
    ///
    /// The bytes go out in a single `write_all` followed by a flush. Nothing
    /// is added around the content and a failed write is not retried.
    pub fn write_to(&self, writer: &mut dyn Write) -> Result<usize, SingleIoError> {
        let bytes = self.content.as_slice();
        writer
            .write_all(bytes)
            .and_then(|()| writer.flush())
            .map_err(|e| SingleIoError::write(self.target.id(), e))?;
        debug!(target_id = self.target.id(), bytes = bytes.len(), "content written");
        Ok(bytes.len())
    }

    /// Open the target and write the content once.
    ///
    /// Returns the number of bytes written.
    pub fn run(&self) -> Result<usize, Error> {
        let mut writer = self.open()?;
        Ok(self.write_to(&mut *writer)?)
    }
}
