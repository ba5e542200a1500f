//! Tests for Go-style flag normalisation.

use crate::cli::normalize_args;
use std::ffi::OsString;

fn normalized(args: &[&str]) -> Vec<String> {
    normalize_args(args.iter().copied())
        .into_iter()
        .map(|a| a.into_string().unwrap())
        .collect()
}

#[test]
fn single_dash_long_flags_become_double_dash() {
    assert_eq!(
        normalized(&["fileflag", "-file.content=hi", "-output.file", "out.txt"]),
        ["fileflag", "--file.content=hi", "--output.file", "out.txt"]
    );
}

#[test]
fn double_dash_and_short_flags_are_untouched() {
    assert_eq!(
        normalized(&["fileflag", "--file.content", "hi", "-h"]),
        ["fileflag", "--file.content", "hi", "-h"]
    );
}

#[test]
fn flag_values_starting_with_dash_are_kept() {
    assert_eq!(
        normalized(&["fileflag", "-file.content", "-abc", "-output.file", "-out"]),
        ["fileflag", "--file.content", "-abc", "--output.file", "-out"]
    );
}

#[test]
fn normalisation_stops_at_first_non_flag() {
    assert_eq!(
        normalized(&["fileflag", "-file.content=a", "extra", "-output.file=x"]),
        ["fileflag", "--file.content=a", "extra", "-output.file=x"]
    );
}

#[test]
fn normalisation_stops_at_terminator() {
    assert_eq!(
        normalized(&["fileflag", "--", "-file.content=a"]),
        ["fileflag", "--", "-file.content=a"]
    );
}

#[test]
fn empty_argument_list_stays_empty() {
    let out: Vec<OsString> = normalize_args(Vec::<OsString>::new());
    assert!(out.is_empty());
}

#[cfg(unix)]
#[test]
fn non_utf8_inline_value_is_still_normalised() {
    use std::os::unix::ffi::OsStringExt;

    let out = normalize_args([
        OsString::from("fileflag"),
        OsString::from_vec(b"-output.file=\xffout".to_vec()),
        OsString::from("-file.content=x"),
    ]);

    assert_eq!(out[1], OsString::from_vec(b"--output.file=\xffout".to_vec()));
    assert_eq!(out[2], OsString::from("--file.content=x"));
}
