//! # fileflag
//!
//! Write a required piece of text to standard output, or append it to a
//! file.
//!
//! ```text
//! fileflag -file.content <string> [-output.file <path>]
//! ```
//!
//! ## Overview
//!
//! A run goes through four explicit steps:
//! - **Parse**: Go-style flags are normalised and parsed with clap (`cli`)
//! - **Validate**: the content must be non-empty (`config`)
//! - **Open**: stdout, or the output file in append mode, created with
//!   mode `0644` if missing (`io`)
//! - **Write**: the content bytes are written once, with no framing
//!   (`engine`)
//!
//! ## Library usage
//!
//! ```rust,ignore
//! use fileflag::{OutputSpec, WriteConfig, WriteEngine};
//!
//! let config = WriteConfig::new("hello", OutputSpec::File("out.txt".into()))?;
//! WriteEngine::from_config(&config).run()?;
//! ```
//!
//! ## Exit codes
//!
//! - `0` on success
//! - `1` when `-file.content` is missing or empty, or the write fails
//! - `2` on unknown or malformed flags, or when the output file cannot be
//!   opened

pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod io;
pub mod logging;

pub use cli::Cli;
pub use config::{OutputSpec, WriteConfig};
pub use engine::WriteEngine;
pub use error::{Error, SingleIoError, Stage, ValidationError};
pub use io::{FileOutput, InMemorySink, OutputTarget, StdoutOutput};
