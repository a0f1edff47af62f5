// Human output headers

use crate::aggregate::metrics::Metrics;
use crate::dataset::{FileReport, HeaderMismatch};
use crate::format::numbers::format_int_with_commas;
use crate::resolve::fields::FieldKeys;
use crate::view::ViewMode;

pub struct SummaryHeader<'a> {
    pub view: ViewMode,
    pub files: &'a [FileReport],
    pub search: &'a str,
    pub matched_rows: u64,
    pub total_rows: u64,
    pub metrics: &'a Metrics,
    pub keys: &'a FieldKeys,
    pub mismatches: &'a [HeaderMismatch],
}

pub fn render_summary_header(ctx: &SummaryHeader<'_>) -> Vec<String> {
    let mut lines = Vec::with_capacity(8);
    lines.push(format!("MXA {}", ctx.view.title()));
    lines.push(String::new());
    lines.push(format!("Files: {}", render_files(ctx.files)));
    lines.push(render_search(ctx.search, ctx.matched_rows, ctx.total_rows));
    lines.push(format!(
        "Metrics: orders={} creators={} contents={} qty={}",
        format_int_with_commas(ctx.metrics.orders),
        format_int_with_commas(ctx.metrics.creators),
        format_int_with_commas(ctx.metrics.contents),
        format_int_with_commas(ctx.metrics.qty)
    ));
    lines.push(format!("Fields: {}", render_fields(ctx.keys)));
    let unresolved = ctx.keys.unresolved();
    if !unresolved.is_empty() {
        let names: Vec<&str> = unresolved.iter().map(|field| field.as_str()).collect();
        lines.push(format!("Unresolved: {} (values read as empty)", names.join(", ")));
    }
    for mismatch in ctx.mismatches {
        lines.push(format!("Aligned: {mismatch}"));
    }
    lines
}

/// Header for refusals: only the inputs are known.
pub fn render_refusal_header(files: &[String]) -> Vec<String> {
    vec![format!("Files: {}", files.join(", "))]
}

fn render_files(files: &[FileReport]) -> String {
    if files.is_empty() {
        return "(none)".to_string();
    }
    files
        .iter()
        .map(render_file)
        .collect::<Vec<_>>()
        .join(", ")
}

fn render_file(file: &FileReport) -> String {
    let mut notes = vec![format!("{} rows", format_int_with_commas(file.rows))];
    if file.short_rows > 0 {
        notes.push(format!("{} padded", format_int_with_commas(file.short_rows)));
    }
    if file.long_rows > 0 {
        notes.push(format!("{} truncated", format_int_with_commas(file.long_rows)));
    }
    if file.lossy_utf8 {
        notes.push("invalid UTF-8 replaced".to_string());
    }
    format!("{} ({})", file.name, notes.join(", "))
}

fn render_search(search: &str, matched: u64, total: u64) -> String {
    let matched = format_int_with_commas(matched);
    let total = format_int_with_commas(total);
    if search.trim().is_empty() {
        format!("Search: (none), {matched} of {total} rows")
    } else {
        format!("Search: \"{}\", {matched} of {total} rows", search.trim())
    }
}

fn render_fields(keys: &FieldKeys) -> String {
    keys.iter()
        .map(|column| {
            if column.is_resolved() {
                format!("{}={}", column.field, column.header)
            } else {
                format!("{}=-", column.field)
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
