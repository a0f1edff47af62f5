// JSON output schema assembly

use serde::Serialize;
use serde_json::Value;

use crate::aggregate::metrics::Metrics;
use crate::aggregate::{Aggregates, CreatorAggregate, ProductAggregate, VideoAggregate};
use crate::cli::exit::Outcome as ExitOutcome;
use crate::dataset::LoadReport;
use crate::format::links::{embed_url, video_url};
use crate::refusal::codes::RefusalCode;
use crate::resolve::fields::FieldKeys;
use crate::view::ViewMode;

pub const VERSION: &str = "mxa.v0";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Outcome {
    Report,
    Empty,
    Refusal,
}

impl From<ExitOutcome> for Outcome {
    fn from(outcome: ExitOutcome) -> Self {
        match outcome {
            ExitOutcome::Report => Outcome::Report,
            ExitOutcome::Empty => Outcome::Empty,
            ExitOutcome::Refusal => Outcome::Refusal,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct Counts {
    pub rows_total: u64,
    pub rows_matched: u64,
}

/// Video rollup plus its links.
#[derive(Debug, Clone, Serialize)]
pub struct VideoRow<'a> {
    #[serde(flatten)]
    pub video: &'a VideoAggregate,
    pub url: String,
    pub embed_url: String,
}

impl<'a> VideoRow<'a> {
    pub fn new(video: &'a VideoAggregate) -> Self {
        Self {
            video,
            url: video_url(&video.id),
            embed_url: embed_url(&video.id),
        }
    }
}

/// Rows of the selected view, in ranked order.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Rows<'a> {
    Product(&'a [ProductAggregate]),
    Creator(&'a [CreatorAggregate]),
    Video(Vec<VideoRow<'a>>),
}

impl<'a> Rows<'a> {
    pub fn for_view(view: ViewMode, aggregates: &'a Aggregates) -> Self {
        match view {
            ViewMode::Product => Rows::Product(&aggregates.products),
            ViewMode::Creator => Rows::Creator(&aggregates.creators),
            ViewMode::Video => Rows::Video(aggregates.videos.iter().map(VideoRow::new).collect()),
        }
    }

    pub fn empty() -> Self {
        Rows::Video(Vec::new())
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Refusal {
    pub code: String,
    pub message: String,
    pub detail: Value,
    pub next: String,
}

impl Refusal {
    pub fn new(code: RefusalCode, detail: Value, next: impl Into<String>) -> Self {
        Self {
            code: code.as_str().to_string(),
            message: code.reason().to_string(),
            detail,
            next: next.into(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct JsonContext<'a> {
    pub view: ViewMode,
    pub search: &'a str,
    pub files: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct JsonOutput<'a> {
    pub version: &'static str,
    pub outcome: Outcome,
    pub view: ViewMode,
    pub search: &'a str,
    pub files: Vec<String>,
    pub fields: Option<&'a FieldKeys>,
    pub load: Option<&'a LoadReport>,
    pub counts: Counts,
    pub metrics: Metrics,
    pub rows: Rows<'a>,
    pub refusal: Option<Refusal>,
}

impl<'a> JsonOutput<'a> {
    #[allow(clippy::too_many_arguments)]
    pub fn report(
        ctx: JsonContext<'a>,
        outcome: ExitOutcome,
        fields: &'a FieldKeys,
        load: &'a LoadReport,
        counts: Counts,
        metrics: Metrics,
        rows: Rows<'a>,
    ) -> Self {
        Self {
            version: VERSION,
            outcome: outcome.into(),
            view: ctx.view,
            search: ctx.search,
            files: ctx.files,
            fields: Some(fields),
            load: Some(load),
            counts,
            metrics,
            rows,
            refusal: None,
        }
    }

    pub fn refusal(ctx: JsonContext<'a>, refusal: Refusal) -> Self {
        Self {
            version: VERSION,
            outcome: Outcome::Refusal,
            view: ctx.view,
            search: ctx.search,
            files: ctx.files,
            fields: None,
            load: None,
            counts: Counts::default(),
            metrics: Metrics::default(),
            rows: Rows::empty(),
            refusal: Some(refusal),
        }
    }

    pub fn to_string(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::NamedSkuQty;
    use crate::resolve::fields::resolve_fields;
    use serde_json::json;

    fn context() -> JsonContext<'static> {
        JsonContext {
            view: ViewMode::Video,
            search: "alice",
            files: vec!["a.csv".to_string()],
        }
    }

    #[test]
    fn renders_report_shape() {
        let aggregates = Aggregates {
            videos: vec![VideoAggregate {
                id: "video_7301234567890123456".to_string(),
                creator: "alice".to_string(),
                date: String::new(),
                context_qty: 4,
                skus: vec![NamedSkuQty {
                    sku_id: "s1".to_string(),
                    name: "Widget".to_string(),
                    qty: 4,
                }],
            }],
            ..Aggregates::default()
        };
        let keys = resolve_fields(&["Content ID".to_string(), "Quantity".to_string()]);
        let load = LoadReport::default();
        let output = JsonOutput::report(
            context(),
            ExitOutcome::Report,
            &keys,
            &load,
            Counts {
                rows_total: 1,
                rows_matched: 1,
            },
            Metrics {
                orders: 0,
                creators: 1,
                contents: 1,
                qty: 4,
            },
            Rows::for_view(ViewMode::Video, &aggregates),
        );
        let value = serde_json::to_value(output).expect("json");
        assert_eq!(value["version"], "mxa.v0");
        assert_eq!(value["outcome"], "REPORT");
        assert_eq!(value["view"], "video");
        assert_eq!(value["fields"]["id"]["header"], "Content ID");
        assert_eq!(value["fields"]["order"]["alias"], Value::Null);
        assert_eq!(value["metrics"]["qty"], 4);
        let row = &value["rows"][0];
        assert_eq!(row["id"], "video_7301234567890123456");
        assert_eq!(row["skus"][0]["name"], "Widget");
        assert_eq!(
            row["url"],
            "https://www.tiktok.com/@/video/7301234567890123456"
        );
        assert_eq!(
            row["embed_url"],
            "https://www.tiktok.com/embed/v2/7301234567890123456"
        );
        assert_eq!(value["refusal"], Value::Null);
    }

    #[test]
    fn renders_refusal_with_empty_rows() {
        let refusal = Refusal::new(
            RefusalCode::Io,
            json!({"file": "a.csv", "error": "not found"}),
            "check file paths/permissions and rerun",
        );
        let output = JsonOutput::refusal(context(), refusal);
        let value = serde_json::to_value(output).expect("json");
        assert_eq!(value["outcome"], "REFUSAL");
        assert_eq!(value["refusal"]["code"], "E_IO");
        assert_eq!(value["refusal"]["message"], "file read error");
        assert_eq!(value["refusal"]["detail"]["file"], "a.csv");
        assert_eq!(value["fields"], Value::Null);
        assert!(value["rows"].as_array().expect("array").is_empty());
    }

    #[test]
    fn creator_rows_serialize_nested_videos() {
        let aggregates = Aggregates {
            creators: vec![CreatorAggregate {
                id: "alice".to_string(),
                context_qty: 2,
                videos: Vec::new(),
                skus: Vec::new(),
            }],
            ..Aggregates::default()
        };
        let value = serde_json::to_value(Rows::for_view(ViewMode::Creator, &aggregates))
            .expect("json");
        assert_eq!(value, json!([{"id": "alice", "context_qty": 2, "videos": [], "skus": []}]));
    }
}
