//! Command-line surface for fileflag.
//!
//! Flags follow Go's `flag` package conventions: long names take a single
//! dash (`-file.content`), `--name` is accepted as well, values may be given
//! as `-name value` or `-name=value`, and flag parsing stops at the first
//! non-flag argument or at `--`.
//!
//! clap only understands double-dash long flags, so arguments are passed
//! through [`normalize_args`] before parsing:
//!
//! ```rust,ignore
//! use clap::Parser;
//! use fileflag::cli::{Cli, normalize_args};
//!
//! let cli = Cli::parse_from(normalize_args(std::env::args_os()));
//! ```

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};

/// Name of the content flag.
pub const CONTENT_FLAG: &str = "file.content";

/// Name of the output flag.
pub const OUTPUT_FLAG: &str = "output.file";

/// Flags that consume the following argument when given without `=`.
const VALUE_FLAGS: &[&str] = &[CONTENT_FLAG, OUTPUT_FLAG];

/// Write a piece of text to standard output or append it to a file.
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "fileflag", args_override_self = true, disable_version_flag = true)]
pub struct Cli {
    /// content to write to the file
    #[arg(
        long = "file.content",
        value_name = "string",
        value_parser = clap::value_parser!(OsString),
        allow_hyphen_values = true
    )]
    pub content: Option<OsString>,

    /// output file (default /dev/stdout)
    #[arg(long = "output.file", value_name = "value", allow_hyphen_values = true)]
    pub output: Option<PathBuf>,

    /// Arguments following the first non-flag argument. They are accepted
    /// and ignored.
    #[arg(trailing_var_arg = true, hide = true)]
    pub args: Vec<OsString>,
}

impl Cli {
    /// Parse the process arguments, exiting with usage on error.
    pub fn parse_env() -> Self {
        Cli::parse_from(normalize_args(std::env::args_os()))
    }

    /// Parse the given arguments (including the program name).
    pub fn try_parse_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        Cli::try_parse_from(normalize_args(args))
    }
}

/// Rewrite Go-style single-dash long flags (`-file.content`) into the
/// double-dash form clap expects.
///
/// The first item is the program name and is kept as is. A value following
/// a value-taking flag is never rewritten, and everything from the first
/// non-flag argument (or `--`) onwards is passed through untouched.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut args = args.into_iter().map(Into::into);
    let mut out: Vec<OsString> = args.next().into_iter().collect();
    let mut expects_value = false;

    while let Some(arg) = args.next() {
        if expects_value {
            out.push(arg);
            expects_value = false;
            continue;
        }

        let token = arg.as_encoded_bytes();
        if token == b"--" || token == b"-" || !token.starts_with(b"-") {
            out.push(arg);
            out.extend(args.by_ref());
            break;
        }

        let dashes = token.iter().take_while(|&&b| b == b'-').count();
        let body = &token[dashes..];
        let (name, inline_value) = match body.iter().position(|&b| b == b'=') {
            Some(eq) => (&body[..eq], true),
            None => (body, false),
        };
        expects_value = !inline_value && VALUE_FLAGS.iter().any(|f| f.as_bytes() == name);

        if dashes == 1 && name.len() > 1 {
            let mut long = OsString::from("-");
            long.push(&arg);
            out.push(long);
        } else {
            out.push(arg);
        }
    }

    out
}

/// Render the flag defaults in Go's `PrintDefaults` layout:
///
/// ```text
///   -file.content string
///     	content to write to the file
///   -output.file value
///     	output file (default /dev/stdout)
/// ```
pub fn defaults() -> String {
    let cmd = Cli::command();
    let mut out = String::new();

    for arg in cmd.get_arguments() {
        if arg.is_positional() || arg.is_hide_set() {
            continue;
        }
        let Some(long) = arg.get_long() else {
            continue;
        };
        if long == "help" {
            continue;
        }

        out.push_str("  -");
        out.push_str(long);
        for name in arg.get_value_names().unwrap_or_default() {
            out.push(' ');
            out.push_str(name);
        }
        out.push('\n');

        if let Some(help) = arg.get_help() {
            out.push_str(&format!("    \t{help}\n"));
        }
    }

    out
}

/// Build the parser error reported when the `-output.file` path cannot be
/// opened. Exiting through it prints usage and uses the parser's usage
/// status.
pub fn open_error(path: &Path, err: &std::io::Error) -> clap::Error {
    let path = path.display();
    let mut cmd = Cli::command();
    cmd.error(
        ErrorKind::Io,
        format!("invalid value \"{path}\" for flag -{OUTPUT_FLAG}: open {path}: {err}"),
    )
}
