//! Error types for fileflag.
//!
//! This module provides:
//! - `Stage`: Indicates where an error occurred while producing the output
//! - `SingleIoError`: An I/O error with the stage and target it belongs to
//! - `ValidationError`: A configuration that parsed but cannot be used
//! - `Error`: The top-level error, mapped onto process exit codes

use std::fmt;
use std::process::ExitCode;

use thiserror::Error;

/// Exit status for a missing `-file.content` or a failed write.
pub const EXIT_FAILURE: u8 = 1;

/// Exit status used by the argument parser for usage and flag-value errors.
pub const EXIT_USAGE: u8 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Checking the parsed flags
    Validate,
    /// Opening the output target
    Open,
    /// Writing the content to the opened target
    Write,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Validate => write!(f, "Validate"),
            Stage::Open => write!(f, "Open"),
            Stage::Write => write!(f, "Write"),
        }
    }
}

#[derive(Debug)]
pub struct SingleIoError {
    /// Stage where the error occurred
    pub stage: Stage,
    /// Identifier of the target (file path, "-" for stdout)
    pub target: String,
    /// The underlying error
    pub error: std::io::Error,
}

impl SingleIoError {
    pub fn open(target: impl Into<String>, error: std::io::Error) -> Self {
        Self {
            stage: Stage::Open,
            target: target.into(),
            error,
        }
    }

    pub fn write(target: impl Into<String>, error: std::io::Error) -> Self {
        Self {
            stage: Stage::Write,
            target: target.into(),
            error,
        }
    }
}

impl fmt::Display for SingleIoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.stage, self.target, self.error)
    }
}

impl std::error::Error for SingleIoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}

/// Parsed flags that do not describe a usable write.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("'-file.content' is required")]
    MissingContent,
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Io(#[from] SingleIoError),
}

impl Error {
    /// Stage the error belongs to.
    pub fn stage(&self) -> Stage {
        match self {
            Error::Validation(_) => Stage::Validate,
            Error::Io(e) => e.stage,
        }
    }

    /// Process exit status for this error.
    ///
    /// Open failures share the parser's usage status since the output path
    /// is itself a flag value.
    pub fn exit_code(&self) -> u8 {
        match self.stage() {
            Stage::Open => EXIT_USAGE,
            Stage::Validate | Stage::Write => EXIT_FAILURE,
        }
    }
}

impl From<&Error> for ExitCode {
    fn from(e: &Error) -> Self {
        ExitCode::from(e.exit_code())
    }
}
