//! Pipeline orchestration: read → decode → merge → rollups → output

use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use crate::cli::args::Args;
use crate::cli::exit::{Outcome, OutputMode};
use crate::csv::input::decode_input;
use crate::dashboard::Dashboard;
use crate::dataset::{Dataset, DatasetBuilder, MergePolicy};
use crate::export::report::report_file_name;
use crate::output::human::header::{SummaryHeader, render_refusal_header, render_summary_header};
use crate::output::human::refusal::render_refusal_body;
use crate::output::human::views::{ViewBody, render_view_body};
use crate::output::json::{Counts, JsonContext, JsonOutput, Refusal as JsonRefusal, Rows};
use crate::refusal::details::RefusalDetail;
use crate::view::ViewMode;

pub struct PipelineResult {
    pub outcome: Outcome,
    pub output: String,
}

pub fn run(args: &Args) -> Result<PipelineResult, Box<dyn Error>> {
    let dataset = match load_dataset(&args.files, args.merge_policy()) {
        Ok(dataset) => dataset,
        Err(refusal) => return Ok(render_refusal(&refusal, args)),
    };

    let mut dashboard = Dashboard::new(dataset);
    dashboard.set_view(args.view);
    dashboard.set_search(&args.search);

    let outcome = if dashboard.snapshot().matched_rows > 0 {
        Outcome::Report
    } else {
        Outcome::Empty
    };
    tracing::debug!(?outcome, view = %args.view, "pipeline finished");

    let output = match args.output_mode() {
        OutputMode::Json => render_json(&dashboard, args, outcome)?,
        OutputMode::Csv => emit_export(&dashboard, args.out.as_deref())?,
        OutputMode::Human => render_human(&dashboard, args.top),
    };
    Ok(PipelineResult { outcome, output })
}

/// Read, guard and merge every file in order.
pub fn load_dataset(paths: &[PathBuf], policy: MergePolicy) -> Result<Dataset, RefusalDetail> {
    let mut builder = DatasetBuilder::new(policy);
    for path in paths {
        let name = display_name(path);
        let bytes = fs::read(path).map_err(|err| RefusalDetail::io(&name, &err))?;
        let decoded = decode_input(&bytes).map_err(|issue| RefusalDetail::encoding(&name, issue))?;
        tracing::debug!(file = %name, bytes = bytes.len(), "read export");
        builder
            .add_text(&name, &decoded.text, decoded.lossy)
            .map_err(RefusalDetail::headers)?;
    }
    let dataset = builder.finish();
    tracing::debug!(
        rows = dataset.len(),
        columns = dataset.headers().len(),
        "dataset loaded"
    );
    Ok(dataset)
}

/// Where `--out` writes: a directory gets a dated report name.
pub fn resolve_out_path(out: &Path, view: ViewMode, date: &str) -> PathBuf {
    if out.is_dir() {
        out.join(report_file_name(view, date))
    } else {
        out.to_path_buf()
    }
}

fn today() -> String {
    chrono::Local::now().format("%Y-%m-%d").to_string()
}

fn emit_export(dashboard: &Dashboard, out: Option<&Path>) -> Result<String, Box<dyn Error>> {
    let report = dashboard.export();
    let Some(out) = out else {
        return Ok(report);
    };
    let path = resolve_out_path(out, dashboard.view(), &today());
    fs::write(&path, report.as_bytes())
        .map_err(|err| format!("cannot write {}: {err}", path.display()))?;
    tracing::info!(path = %path.display(), view = %dashboard.view(), "report written");
    Ok(format!("Wrote {} report to {}\n", dashboard.view(), path.display()))
}

fn render_human(dashboard: &Dashboard, top: Option<usize>) -> String {
    let snapshot = dashboard.snapshot();
    let report = dashboard.dataset().report();
    let header = SummaryHeader {
        view: dashboard.view(),
        files: &report.files,
        search: dashboard.search(),
        matched_rows: snapshot.matched_rows as u64,
        total_rows: dashboard.dataset().len() as u64,
        metrics: &snapshot.metrics,
        keys: dashboard.keys(),
        mismatches: &report.header_mismatches,
    };
    let mut lines = render_summary_header(&header);
    lines.push(String::new());
    lines.extend(render_view_body(&ViewBody {
        view: dashboard.view(),
        aggregates: &snapshot.aggregates,
        metrics: &snapshot.metrics,
        top,
    }));
    let mut output = lines.join("\n");
    output.push('\n');
    output
}

fn render_json(
    dashboard: &Dashboard,
    args: &Args,
    outcome: Outcome,
) -> Result<String, serde_json::Error> {
    let snapshot = dashboard.snapshot();
    let output = JsonOutput::report(
        json_context(args),
        outcome,
        dashboard.keys(),
        dashboard.dataset().report(),
        Counts {
            rows_total: dashboard.dataset().len() as u64,
            rows_matched: snapshot.matched_rows as u64,
        },
        snapshot.metrics,
        Rows::for_view(dashboard.view(), &snapshot.aggregates),
    );
    let mut text = output.to_string()?;
    text.push('\n');
    Ok(text)
}

fn render_refusal(refusal: &RefusalDetail, args: &Args) -> PipelineResult {
    tracing::debug!(code = %refusal.code(), file = refusal.file(), "refused");
    let output = if args.json {
        let json = JsonRefusal::new(refusal.code(), refusal.detail_json(), refusal.next.clone());
        let mut text = JsonOutput::refusal(json_context(args), json)
            .to_string()
            .unwrap_or_else(|_| "{}".to_string());
        text.push('\n');
        text
    } else {
        let files: Vec<String> = args.files.iter().map(|path| display_name(path)).collect();
        let mut lines = vec![format!("MXA ERROR ({})", refusal.code()), String::new()];
        lines.extend(render_refusal_header(&files));
        lines.push(String::new());
        lines.extend(render_refusal_body(refusal));
        let mut text = lines.join("\n");
        text.push('\n');
        text
    };
    PipelineResult {
        outcome: Outcome::Refusal,
        output,
    }
}

fn json_context(args: &Args) -> JsonContext<'_> {
    JsonContext {
        view: args.view,
        search: args.search.trim(),
        files: args
            .files
            .iter()
            .map(|path| path.to_string_lossy().to_string())
            .collect(),
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| path.to_string_lossy().to_string())
}
