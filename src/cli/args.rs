use std::path::PathBuf;

use clap::Parser;

use crate::cli::exit::OutputMode;
use crate::dataset::MergePolicy;
use crate::view::ViewMode;

/// CLI argument parsing & validation.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "mxa",
    about = "Rank products, creators and videos by quantity sold across e-commerce CSV exports.",
    override_usage = "mxa <FILE>... [--view product|creator|video] [--search <TERMS>] [--top <N>] [--json] [--export] [--out <PATH>] [--strict-headers]"
)]
pub struct Args {
    /// Export CSV paths, merged in the order given.
    #[arg(value_name = "FILE", required = true)]
    pub files: Vec<PathBuf>,

    /// Rollup to display: product, creator or video (default: creator).
    #[arg(long, value_name = "VIEW", default_value_t = ViewMode::Creator, value_parser = parse_view)]
    pub view: ViewMode,

    /// Whitespace-separated search tokens; every token must match.
    #[arg(long, value_name = "TERMS", default_value = "")]
    pub search: String,

    /// Show only the first N groups in human output.
    #[arg(long, value_name = "N", value_parser = parse_top)]
    pub top: Option<usize>,

    /// Emit JSON output (single object).
    #[arg(long, conflicts_with = "export")]
    pub json: bool,

    /// Emit the CSV report for the selected view.
    #[arg(long)]
    pub export: bool,

    /// Write the CSV report here (a directory gets a dated file name). Implies --export.
    #[arg(long, value_name = "PATH", conflicts_with = "json")]
    pub out: Option<PathBuf>,

    /// Refuse when a later file's headers differ from the first file's.
    #[arg(long)]
    pub strict_headers: bool,
}

impl Args {
    pub fn parse() -> Result<Self, clap::Error> {
        Self::try_parse()
    }

    pub fn exporting(&self) -> bool {
        self.export || self.out.is_some()
    }

    pub fn output_mode(&self) -> OutputMode {
        if self.json {
            OutputMode::Json
        } else if self.exporting() {
            OutputMode::Csv
        } else {
            OutputMode::Human
        }
    }

    pub fn merge_policy(&self) -> MergePolicy {
        if self.strict_headers {
            MergePolicy::Strict
        } else {
            MergePolicy::Align
        }
    }
}

fn parse_view(raw: &str) -> Result<ViewMode, String> {
    raw.parse::<ViewMode>().map_err(|err| err.to_string())
}

fn parse_top(raw: &str) -> Result<usize, String> {
    let value = raw
        .trim()
        .parse::<usize>()
        .map_err(|_| "top must be a whole number".to_string())?;
    if value == 0 {
        return Err("top must be >= 1".to_string());
    }
    Ok(value)
}
