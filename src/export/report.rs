//! CSV report for the displayed view.
//!
//! One header row per view, one row per top-level group. Nested breakdowns
//! are flattened to `label(qty件)` joined by ` | `. The payload starts with a
//! UTF-8 BOM so spreadsheet tools pick the right encoding.

use std::fmt::Write;

use crate::aggregate::metrics::Metrics;
use crate::aggregate::{Aggregates, CreatorAggregate, ProductAggregate, VideoAggregate};
use crate::export::escape::escape_field;
use crate::format::numbers::format_share;
use crate::view::ViewMode;

pub const BOM: char = '\u{FEFF}';
pub const BREAKDOWN_SEPARATOR: &str = " | ";
/// Unit suffix for quantities inside breakdown cells.
pub const QTY_UNIT: &str = "件";

pub const PRODUCT_HEADER: &str = "product,quantity,share,sku_breakdown";
pub const CREATOR_HEADER: &str = "creator,quantity,share,video_count,top_skus,video_ids";
pub const VIDEO_HEADER: &str = "content_id,creator,quantity,share,date,sku_breakdown";

pub fn header_row(view: ViewMode) -> &'static str {
    match view {
        ViewMode::Product => PRODUCT_HEADER,
        ViewMode::Creator => CREATOR_HEADER,
        ViewMode::Video => VIDEO_HEADER,
    }
}

/// Render the report for `view`. Shares are taken against `metrics.qty`.
pub fn export_report(view: ViewMode, aggregates: &Aggregates, metrics: &Metrics) -> String {
    let mut out = String::new();
    out.push(BOM);
    out.push_str(header_row(view));
    out.push('\n');
    match view {
        ViewMode::Product => {
            for product in &aggregates.products {
                push_row(&mut out, &product_cells(product, metrics));
            }
        }
        ViewMode::Creator => {
            for creator in &aggregates.creators {
                push_row(&mut out, &creator_cells(creator, metrics));
            }
        }
        ViewMode::Video => {
            for video in &aggregates.videos {
                push_row(&mut out, &video_cells(video, metrics));
            }
        }
    }
    out
}

/// Suggested file name for a report written on `date` (`YYYY-MM-DD`).
pub fn report_file_name(view: ViewMode, date: &str) -> String {
    format!("Matrix_Analytics_{}_{}.csv", view.as_str(), date)
}

fn product_cells(product: &ProductAggregate, metrics: &Metrics) -> Vec<String> {
    let breakdown = join_breakdown(
        product
            .variants
            .iter()
            .map(|variant| (variant.sku_id.as_str(), variant.qty)),
    );
    vec![
        escape_field(&product.name).into_owned(),
        product.context_qty.to_string(),
        format_share(product.context_qty, metrics.qty),
        escape_field(&breakdown).into_owned(),
    ]
}

fn creator_cells(creator: &CreatorAggregate, metrics: &Metrics) -> Vec<String> {
    let skus = join_breakdown(creator.skus.iter().map(|sku| (sku.sku_id.as_str(), sku.qty)));
    let videos = creator
        .videos
        .iter()
        .map(|video| video.id.as_str())
        .collect::<Vec<_>>()
        .join(BREAKDOWN_SEPARATOR);
    vec![
        escape_field(&creator.id).into_owned(),
        creator.context_qty.to_string(),
        format_share(creator.context_qty, metrics.qty),
        creator.videos.len().to_string(),
        escape_field(&skus).into_owned(),
        escape_field(&videos).into_owned(),
    ]
}

fn video_cells(video: &VideoAggregate, metrics: &Metrics) -> Vec<String> {
    let skus = join_breakdown(video.skus.iter().map(|sku| (sku.name.as_str(), sku.qty)));
    vec![
        escape_field(&video.id).into_owned(),
        escape_field(&video.creator).into_owned(),
        video.context_qty.to_string(),
        format_share(video.context_qty, metrics.qty),
        escape_field(&video.date).into_owned(),
        escape_field(&skus).into_owned(),
    ]
}

/// `a(3件) | b(1件)`
pub fn join_breakdown<'a, I>(entries: I) -> String
where
    I: IntoIterator<Item = (&'a str, u64)>,
{
    let mut out = String::new();
    for (idx, (label, qty)) in entries.into_iter().enumerate() {
        if idx > 0 {
            out.push_str(BREAKDOWN_SEPARATOR);
        }
        let _ = write!(out, "{label}({qty}{QTY_UNIT})");
    }
    out
}

fn push_row(out: &mut String, cells: &[String]) {
    out.push_str(&cells.join(","));
    out.push('\n');
}
