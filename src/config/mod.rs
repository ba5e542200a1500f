//! Configuration types for a single write.
//!
//! This module provides:
//! - `OutputSpec`: Where the content goes (stdout or an append-mode file)
//! - `WriteConfig`: The validated content plus its output specification

mod spec;

pub use spec::{OutputSpec, WriteConfig};
