// Human REFUSAL output formatting

use crate::refusal::details::{RefusalDetail, RefusalKind};

pub fn render_refusal_body(detail: &RefusalDetail) -> Vec<String> {
    let code = detail.code();
    vec![
        "Cannot produce a report.".to_string(),
        format!("Reason ({}): {}.", code, code.reason()),
        render_example_line(detail),
        format!("Next: {}", detail.next),
    ]
}

fn render_example_line(detail: &RefusalDetail) -> String {
    match &detail.kind {
        RefusalKind::Io { file, error } => format!("Example: {file} file error: {error}."),
        RefusalKind::Encoding { file, issue } => {
            format!("Example: {file} contains {}.", issue.label())
        }
        RefusalKind::Headers { mismatch } => {
            let mut parts = Vec::new();
            if !mismatch.missing.is_empty() {
                parts.push(format!("lacks {}", quote_list(&mismatch.missing)));
            }
            if !mismatch.extra.is_empty() {
                parts.push(format!("adds {}", quote_list(&mismatch.extra)));
            }
            if mismatch.reordered {
                parts.push("orders the columns differently".to_string());
            }
            format!("Example: {} {}.", mismatch.file, parts.join(" and "))
        }
    }
}

fn quote_list(names: &[String]) -> String {
    names
        .iter()
        .map(|name| format!("\"{name}\""))
        .collect::<Vec<_>>()
        .join(", ")
}
