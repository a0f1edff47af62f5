//! Sales rollups by video, creator and product.
//!
//! One pass folds records into private accumulators; a second phase turns
//! every accumulator into ranked, immutable vectors (quantity descending,
//! ties in first-seen order). Blank keys are grouped under fixed labels.

pub mod metrics;
pub(crate) mod rank;

use serde::Serialize;

use crate::dataset::Record;
use crate::numeric::quantity::parse_quantity;
use crate::resolve::fields::FieldKeys;

use rank::Tally;

pub const UNKNOWN_ID: &str = "unknown id";
pub const UNKNOWN_CREATOR: &str = "unknown creator";
pub const NO_SKU: &str = "no sku";
pub const UNNAMED_PRODUCT: &str = "unnamed product";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkuQty {
    pub sku_id: String,
    pub qty: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NamedSkuQty {
    pub sku_id: String,
    pub name: String,
    pub qty: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VideoAggregate {
    pub id: String,
    /// Creator of the first row seen for this video.
    pub creator: String,
    /// Date of the first row seen for this video.
    pub date: String,
    pub context_qty: u64,
    pub skus: Vec<NamedSkuQty>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreatorVideo {
    pub id: String,
    pub qty: u64,
    pub date: String,
    pub skus: Vec<SkuQty>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreatorAggregate {
    pub id: String,
    pub context_qty: u64,
    pub videos: Vec<CreatorVideo>,
    pub skus: Vec<SkuQty>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductAggregate {
    pub name: String,
    pub context_qty: u64,
    pub variants: Vec<SkuQty>,
}

/// The three ranked views over one filtered record set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Aggregates {
    pub videos: Vec<VideoAggregate>,
    pub creators: Vec<CreatorAggregate>,
    pub products: Vec<ProductAggregate>,
}

impl Aggregates {
    pub fn is_empty(&self) -> bool {
        self.videos.is_empty() && self.creators.is_empty() && self.products.is_empty()
    }
}

struct NamedSkuAcc {
    name: String,
    qty: u64,
}

struct VideoAcc {
    creator: String,
    date: String,
    qty: u64,
    skus: Tally<NamedSkuAcc>,
}

struct CreatorVideoAcc {
    qty: u64,
    date: String,
    skus: Tally<u64>,
}

#[derive(Default)]
struct CreatorAcc {
    qty: u64,
    videos: Tally<CreatorVideoAcc>,
    skus: Tally<u64>,
}

#[derive(Default)]
struct ProductAcc {
    qty: u64,
    variants: Tally<u64>,
}

#[inline]
fn add(total: &mut u64, qty: u64) {
    *total = total.saturating_add(qty);
}

fn or_label<'a>(value: &'a str, label: &'a str) -> &'a str {
    let trimmed = value.trim();
    if trimmed.is_empty() { label } else { trimmed }
}

/// Fold `records` into the three ranked views.
pub fn aggregate<'a, I>(records: I, keys: &FieldKeys) -> Aggregates
where
    I: IntoIterator<Item = &'a Record>,
{
    let mut videos: Tally<VideoAcc> = Tally::default();
    let mut creators: Tally<CreatorAcc> = Tally::default();
    let mut products: Tally<ProductAcc> = Tally::default();

    for record in records {
        let vid = or_label(keys.id.value(record), UNKNOWN_ID);
        let creator = or_label(keys.creator.value(record), UNKNOWN_CREATOR);
        let sku_id = or_label(keys.sku_id.value(record), NO_SKU);
        let sku_name = or_label(keys.sku_name.value(record), UNNAMED_PRODUCT);
        let qty = parse_quantity(keys.qty.value(record));
        let date = keys.date.value(record);

        let video = videos.entry(vid, || VideoAcc {
            creator: creator.to_string(),
            date: date.to_string(),
            qty: 0,
            skus: Tally::default(),
        });
        add(&mut video.qty, qty);
        let sku = video.skus.entry(sku_id, || NamedSkuAcc {
            name: sku_name.to_string(),
            qty: 0,
        });
        add(&mut sku.qty, qty);

        let by_creator = creators.entry(creator, CreatorAcc::default);
        add(&mut by_creator.qty, qty);
        let creator_video = by_creator.videos.entry(vid, || CreatorVideoAcc {
            qty: 0,
            date: date.to_string(),
            skus: Tally::default(),
        });
        add(&mut creator_video.qty, qty);
        add(creator_video.skus.entry(sku_id, || 0), qty);
        add(by_creator.skus.entry(sku_id, || 0), qty);

        let product = products.entry(sku_name, ProductAcc::default);
        add(&mut product.qty, qty);
        add(product.variants.entry(sku_id, || 0), qty);
    }

    tracing::debug!(
        videos = videos.len(),
        creators = creators.len(),
        products = products.len(),
        "aggregated"
    );

    Aggregates {
        videos: videos.into_ranked(|v| v.qty, |id, v| VideoAggregate {
            id,
            creator: v.creator,
            date: v.date,
            context_qty: v.qty,
            skus: v.skus.into_ranked(|s| s.qty, |sku_id, s| NamedSkuQty {
                sku_id,
                name: s.name,
                qty: s.qty,
            }),
        }),
        creators: creators.into_ranked(|c| c.qty, |id, c| CreatorAggregate {
            id,
            context_qty: c.qty,
            videos: c.videos.into_ranked(|v| v.qty, |id, v| CreatorVideo {
                id,
                qty: v.qty,
                date: v.date,
                skus: ranked_skus(v.skus),
            }),
            skus: ranked_skus(c.skus),
        }),
        products: products.into_ranked(|p| p.qty, |name, p| ProductAggregate {
            name,
            context_qty: p.qty,
            variants: ranked_skus(p.variants),
        }),
    }
}

fn ranked_skus(skus: Tally<u64>) -> Vec<SkuQty> {
    skus.into_ranked(|qty| *qty, |sku_id, qty| SkuQty { sku_id, qty })
}
