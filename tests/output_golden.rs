use mxa::aggregate::metrics::Metrics;
use mxa::aggregate::{Aggregates, NamedSkuQty, VideoAggregate};
use mxa::dataset::{FileReport, HeaderMismatch};
use mxa::output::human::header::{SummaryHeader, render_refusal_header, render_summary_header};
use mxa::output::human::refusal::render_refusal_body;
use mxa::output::human::views::{ViewBody, render_view_body};
use mxa::output::json::{JsonContext, JsonOutput, Refusal};
use mxa::refusal::details::RefusalDetail;
use mxa::resolve::fields::resolve_fields;
use mxa::view::ViewMode;

fn join_lines(lines: Vec<String>) -> String {
    lines.join("\n")
}

#[test]
fn golden_video_view_human_output() {
    let headers: Vec<String> = ["内容ID", "达人", "商品名称", "件数", "日期"]
        .iter()
        .map(|h| h.to_string())
        .collect();
    let keys = resolve_fields(&headers);
    let files = vec![FileReport {
        name: "orders.csv".to_string(),
        rows: 2,
        ..FileReport::default()
    }];
    let metrics = Metrics {
        orders: 0,
        creators: 1,
        contents: 1,
        qty: 4,
    };
    let aggregates = Aggregates {
        videos: vec![VideoAggregate {
            id: "7301234567890123456".to_string(),
            creator: "小红".to_string(),
            date: "2024-02-01".to_string(),
            context_qty: 4,
            skus: vec![NamedSkuQty {
                sku_id: "no sku".to_string(),
                name: "面霜".to_string(),
                qty: 4,
            }],
        }],
        ..Aggregates::default()
    };

    let mut lines = render_summary_header(&SummaryHeader {
        view: ViewMode::Video,
        files: &files,
        search: "",
        matched_rows: 2,
        total_rows: 2,
        metrics: &metrics,
        keys: &keys,
        mismatches: &[],
    });
    lines.push(String::new());
    lines.extend(render_view_body(&ViewBody {
        view: ViewMode::Video,
        aggregates: &aggregates,
        metrics: &metrics,
        top: None,
    }));

    let expected = [
        "MXA VIDEO VIEW",
        "",
        "Files: orders.csv (2 rows)",
        "Search: (none), 2 of 2 rows",
        "Metrics: orders=0 creators=1 contents=1 qty=4",
        "Fields: id=内容ID date=日期 order=- creator=达人 sku_name=商品名称 qty=件数 sku_id=-",
        "Unresolved: order, sku_id (values read as empty)",
        "",
        "1 video:",
        "  1. 7301234567890123456  by 小红  qty=4 (100.0%)  2024-02-01",
        "      面霜(4件)",
        "      https://www.tiktok.com/@/video/7301234567890123456",
    ]
    .join("\n");
    assert_eq!(join_lines(lines), expected);
}

#[test]
fn golden_headers_refusal_human_output() {
    let detail = RefusalDetail::headers(HeaderMismatch {
        file: "b.csv".to_string(),
        missing: Vec::new(),
        extra: Vec::new(),
        reordered: true,
    });
    let mut lines = render_refusal_header(&["a.csv".to_string(), "b.csv".to_string()]);
    lines.push(String::new());
    lines.extend(render_refusal_body(&detail));
    let expected = [
        "Files: a.csv, b.csv",
        "",
        "Cannot produce a report.",
        "Reason (E_HEADERS): export headers differ between files.",
        "Example: b.csv orders the columns differently.",
        "Next: re-export b.csv with the same columns as the first file, or rerun without --strict-headers",
    ]
    .join("\n");
    assert_eq!(join_lines(lines), expected);
}

#[test]
fn golden_refusal_json_output() {
    let detail = RefusalDetail::headers(HeaderMismatch {
        file: "b.csv".to_string(),
        missing: vec!["Date".to_string()],
        extra: Vec::new(),
        reordered: false,
    });
    let output = JsonOutput::refusal(
        JsonContext {
            view: ViewMode::Creator,
            search: "",
            files: vec!["a.csv".to_string(), "b.csv".to_string()],
        },
        Refusal::new(detail.code(), detail.detail_json(), detail.next.clone()),
    );
    let actual: serde_json::Value =
        serde_json::from_str(&output.to_string().expect("json")).expect("parse");
    let expected = serde_json::json!({
        "version": "mxa.v0",
        "outcome": "REFUSAL",
        "view": "creator",
        "search": "",
        "files": ["a.csv", "b.csv"],
        "fields": null,
        "load": null,
        "counts": {"rows_total": 0, "rows_matched": 0},
        "metrics": {"orders": 0, "creators": 0, "contents": 0, "qty": 0},
        "rows": [],
        "refusal": {
            "code": "E_HEADERS",
            "message": "export headers differ between files",
            "detail": {
                "file": "b.csv",
                "missing": ["Date"],
                "extra": [],
                "reordered": false
            },
            "next": "re-export b.csv with the same columns as the first file, or rerun without --strict-headers"
        }
    });
    assert_eq!(actual, expected);
}
