use super::parse;
use super::super::{Cli, CliCommand};
use clap::Parser;
use clap_complete::Shell;
use std::path::PathBuf;

#[test]
fn cli_parse_fetch_minimal() {
    match parse(&["artisum", "fetch", "https://repo.example/foo-1.0.jar"]) {
        CliCommand::Fetch {
            url,
            output,
            extractors,
        } => {
            assert_eq!(url, "https://repo.example/foo-1.0.jar");
            assert!(output.is_none());
            assert!(extractors.is_empty());
        }
        _ => panic!("expected Fetch"),
    }
}

#[test]
fn cli_parse_fetch_with_output_and_extractors() {
    match parse(&[
        "artisum",
        "fetch",
        "https://repo.example/foo-1.0.jar",
        "-o",
        "out.jar",
        "--extractor",
        "x-checksum",
        "--extractor",
        "digest",
    ]) {
        CliCommand::Fetch {
            output, extractors, ..
        } => {
            assert_eq!(output, Some(PathBuf::from("out.jar")));
            assert_eq!(extractors, ["x-checksum", "digest"]);
        }
        _ => panic!("expected Fetch"),
    }
}

#[test]
fn cli_parse_extract() {
    match parse(&["artisum", "extract", "--extractor", "nexus2"]) {
        CliCommand::Extract { extractors } => assert_eq!(extractors, ["nexus2"]),
        _ => panic!("expected Extract"),
    }
}

#[test]
fn cli_parse_completions() {
    match parse(&["artisum", "completions", "bash"]) {
        CliCommand::Completions { shell } => assert_eq!(shell, Shell::Bash),
        _ => panic!("expected Completions"),
    }
}

#[test]
fn cli_fetch_requires_url() {
    assert!(Cli::try_parse_from(["artisum", "fetch"]).is_err());
}
