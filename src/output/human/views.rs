// Human view bodies: one ranked block per top-level group.

use crate::aggregate::metrics::Metrics;
use crate::aggregate::{Aggregates, CreatorAggregate, ProductAggregate, VideoAggregate};
use crate::export::report::join_breakdown;
use crate::format::links::video_url;
use crate::format::numbers::{format_int_with_commas, format_share};
use crate::view::ViewMode;

const INDENT: &str = "      ";

#[derive(Debug, Clone, Copy)]
pub struct ViewBody<'a> {
    pub view: ViewMode,
    pub aggregates: &'a Aggregates,
    pub metrics: &'a Metrics,
    pub top: Option<usize>,
}

pub fn render_view_body(ctx: &ViewBody<'_>) -> Vec<String> {
    let (count, noun) = match ctx.view {
        ViewMode::Product => (ctx.aggregates.products.len(), "products"),
        ViewMode::Creator => (ctx.aggregates.creators.len(), "creators"),
        ViewMode::Video => (ctx.aggregates.videos.len(), "videos"),
    };
    if count == 0 {
        return vec!["No rows match.".to_string()];
    }
    let shown = ctx.top.map_or(count, |top| top.min(count));
    let mut lines = vec![format!(
        "{}:",
        plural(count, noun.trim_end_matches('s'), noun)
    )];
    match ctx.view {
        ViewMode::Product => {
            for (rank, product) in ctx.aggregates.products.iter().take(shown).enumerate() {
                render_product(&mut lines, rank + 1, product, ctx.metrics);
            }
        }
        ViewMode::Creator => {
            for (rank, creator) in ctx.aggregates.creators.iter().take(shown).enumerate() {
                render_creator(&mut lines, rank + 1, creator, ctx.metrics);
            }
        }
        ViewMode::Video => {
            for (rank, video) in ctx.aggregates.videos.iter().take(shown).enumerate() {
                render_video(&mut lines, rank + 1, video, ctx.metrics);
            }
        }
    }
    if shown < count {
        lines.push(format!("... {} more (raise --top to see them)", count - shown));
    }
    lines
}

fn render_product(lines: &mut Vec<String>, rank: usize, product: &ProductAggregate, metrics: &Metrics) {
    lines.push(format!(
        "{rank:>3}. {}  qty={} ({})",
        product.name,
        format_int_with_commas(product.context_qty),
        format_share(product.context_qty, metrics.qty)
    ));
    for variant in &product.variants {
        lines.push(format!(
            "{INDENT}{}  {}",
            variant.sku_id,
            format_int_with_commas(variant.qty)
        ));
    }
}

fn render_creator(lines: &mut Vec<String>, rank: usize, creator: &CreatorAggregate, metrics: &Metrics) {
    lines.push(format!(
        "{rank:>3}. {}  qty={} ({})  {}",
        creator.id,
        format_int_with_commas(creator.context_qty),
        format_share(creator.context_qty, metrics.qty),
        plural(creator.videos.len(), "video", "videos")
    ));
    lines.push(format!(
        "{INDENT}skus: {}",
        join_breakdown(creator.skus.iter().map(|sku| (sku.sku_id.as_str(), sku.qty)))
    ));
    for video in &creator.videos {
        let date = if video.date.is_empty() { "-" } else { video.date.as_str() };
        lines.push(format!(
            "{INDENT}{}  qty={}  {}  {}",
            video.id,
            format_int_with_commas(video.qty),
            date,
            join_breakdown(video.skus.iter().map(|sku| (sku.sku_id.as_str(), sku.qty)))
        ));
    }
}

fn render_video(lines: &mut Vec<String>, rank: usize, video: &VideoAggregate, metrics: &Metrics) {
    let date = if video.date.is_empty() { "-" } else { video.date.as_str() };
    lines.push(format!(
        "{rank:>3}. {}  by {}  qty={} ({})  {}",
        video.id,
        video.creator,
        format_int_with_commas(video.context_qty),
        format_share(video.context_qty, metrics.qty),
        date
    ));
    lines.push(format!(
        "{INDENT}{}",
        join_breakdown(video.skus.iter().map(|sku| (sku.name.as_str(), sku.qty)))
    ));
    lines.push(format!("{INDENT}{}", video_url(&video.id)));
}

fn plural(count: usize, one: &str, many: &str) -> String {
    if count == 1 {
        format!("1 {one}")
    } else {
        format!("{} {many}", format_int_with_commas(count as u64))
    }
}
