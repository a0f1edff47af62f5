#![allow(dead_code)]

use std::path::{Path, PathBuf};

use clap::Parser;

use mxa::cli::args::Args;
use mxa::dataset::Dataset;

pub fn fixtures_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

pub fn fixture_path(name: &str) -> PathBuf {
    fixtures_dir().join(name)
}

pub fn read_fixture(name: &str) -> Vec<u8> {
    std::fs::read(fixture_path(name)).expect("fixture should be readable")
}

pub fn read_fixture_text(name: &str) -> String {
    String::from_utf8(read_fixture(name)).expect("fixture should be UTF-8")
}

/// Single-fixture dataset, aligned merge policy.
pub fn load_fixture(name: &str) -> Dataset {
    Dataset::from_csv_text(&read_fixture_text(name))
}

/// CLI args for fixture files plus extra flags.
pub fn fixture_args(files: &[&str], flags: &[&str]) -> Args {
    let mut argv: Vec<String> = vec!["mxa".to_string()];
    argv.extend(
        files
            .iter()
            .map(|name| fixture_path(name).to_string_lossy().to_string()),
    );
    argv.extend(flags.iter().map(|flag| flag.to_string()));
    Args::try_parse_from(argv).expect("fixture args should parse")
}
