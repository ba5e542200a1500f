//! Tests for error display and exit status mapping.

use crate::error::{EXIT_FAILURE, EXIT_USAGE, Error, SingleIoError, Stage, ValidationError};
use std::error::Error as _;

#[test]
fn single_io_error_display_includes_stage_and_target() {
    let err = SingleIoError::open(
        "out.txt",
        std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
    );

    assert_eq!(err.to_string(), "[Open] out.txt: missing");
    assert!(err.source().is_some());
}

#[test]
fn validation_error_exits_with_failure() {
    let err: Error = ValidationError::MissingContent.into();

    assert_eq!(err.stage(), Stage::Validate);
    assert_eq!(err.exit_code(), EXIT_FAILURE);
    assert_eq!(err.to_string(), "'-file.content' is required");
}

#[test]
fn open_error_exits_with_usage_status() {
    let err: Error = SingleIoError::open(
        "out.txt",
        std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
    )
    .into();

    assert_eq!(err.exit_code(), EXIT_USAGE);
}

#[test]
fn write_error_exits_with_failure() {
    let err: Error = SingleIoError::write(
        "-",
        std::io::Error::new(std::io::ErrorKind::BrokenPipe, "broken pipe"),
    )
    .into();

    assert_eq!(err.stage(), Stage::Write);
    assert_eq!(err.exit_code(), EXIT_FAILURE);
}
