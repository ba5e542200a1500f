//! Output target trait definition.

use std::fmt::Debug;
use std::io::Write;

/// Trait for synchronous output targets.
///
/// Implementors provide a way to open a writable stream to a destination
/// such as a file, stdout, or an in-memory buffer. The returned handle is
/// released when it is dropped.
pub trait OutputTarget: Send + Sync + Debug {
    /// Returns a unique identifier for this output target.
    ///
    /// This is used for error messages and logging.
    /// Convention: "-" for stdout, file path for files.
    fn id(&self) -> &str;

    /// Open the target for appending to existing content.
    fn open(&self) -> std::io::Result<Box<dyn Write + Send>>;
}
