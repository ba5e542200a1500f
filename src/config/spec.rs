//! Output and write specifications.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::cli::Cli;
use crate::error::ValidationError;
use crate::io::{FileOutput, OutputTarget, StdoutOutput};

/// Specification for the output target.
///
/// This is plain data. `open_target` resolves it to an `OutputTarget`, and
/// the filesystem is not touched until that target is opened.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum OutputSpec {
    /// The process's standard output
    #[default]
    Stdout,
    /// A file opened in append mode, created if missing
    File(PathBuf),
}

impl OutputSpec {
    /// Build a spec from the optional `-output.file` value.
    pub fn from_arg(path: Option<PathBuf>) -> Self {
        match path {
            Some(path) => OutputSpec::File(path),
            None => OutputSpec::Stdout,
        }
    }

    /// The file path, if the target is a file.
    pub fn path(&self) -> Option<&Path> {
        match self {
            OutputSpec::Stdout => None,
            OutputSpec::File(path) => Some(path),
        }
    }

    /// Check if writing to stdout.
    pub fn is_stdout(&self) -> bool {
        matches!(self, OutputSpec::Stdout)
    }

    /// Resolve the spec into an output target implementation.
    pub fn open_target(&self) -> Arc<dyn OutputTarget> {
        match self {
            OutputSpec::Stdout => Arc::new(StdoutOutput::new()),
            OutputSpec::File(path) => Arc::new(FileOutput::new(path.clone())),
        }
    }
}

/// A validated request to write `content` to `output`.
///
/// The content is kept as the raw argument bytes. It is never decoded, so
/// text that is not valid UTF-8 is written exactly as it was passed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteConfig {
    content: Vec<u8>,
    output: OutputSpec,
}

impl WriteConfig {
    /// Create a write configuration, rejecting empty content.
    pub fn new(content: impl Into<Vec<u8>>, output: OutputSpec) -> Result<Self, ValidationError> {
        let content = content.into();
        if content.is_empty() {
            return Err(ValidationError::MissingContent);
        }
        Ok(Self { content, output })
    }

    /// The content to write.
    pub fn content(&self) -> &[u8] {
        &self.content
    }

    /// The output specification.
    pub fn output(&self) -> &OutputSpec {
        &self.output
    }
}

impl TryFrom<Cli> for WriteConfig {
    type Error = ValidationError;

    fn try_from(cli: Cli) -> Result<Self, Self::Error> {
        let content = cli.content.unwrap_or_default().into_encoded_bytes();
        WriteConfig::new(content, OutputSpec::from_arg(cli.output))
    }
}
