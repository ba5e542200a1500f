//! Output targets the content can be written to.
//!
//! This module provides:
//! - `OutputTarget`: Trait for output destinations
//! - Standard implementations for stdout and append-mode files
//! - An in-memory implementation for testing

mod memory;
mod output;
mod std_io;

pub use memory::InMemorySink;
pub use output::OutputTarget;
pub use std_io::{FILE_MODE, FileOutput, StdoutOutput};
