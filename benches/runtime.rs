// Opt-in runtime harness. Run with: cargo bench --bench runtime
use std::fmt::Write;
use std::hint::black_box;
use std::time::{Duration, Instant};

use mxa::dashboard::Dashboard;
use mxa::dataset::Dataset;
use mxa::view::ViewMode;

struct Case {
    name: &'static str,
    search: &'static str,
    view: ViewMode,
    export: bool,
}

fn main() {
    let iterations = env_u64("MXA_RUNTIME_ITERS", 20);
    let warmup = env_u64("MXA_RUNTIME_WARMUP", 2);
    let rows = env_u64("MXA_RUNTIME_ROWS", 20_000);
    let budget_ms = env_f64("MXA_RUNTIME_BUDGET_MS");

    println!("mxa runtime harness");
    println!("iterations={iterations} warmup={warmup} rows={rows}");
    if let Some(budget) = budget_ms {
        println!("budget_ms={budget}");
    }

    let text = synthetic_export(rows);
    let cases = [
        Case {
            name: "load_creator",
            search: "",
            view: ViewMode::Creator,
            export: false,
        },
        Case {
            name: "search_two_tokens",
            search: "creator_1 sku-",
            view: ViewMode::Video,
            export: false,
        },
        Case {
            name: "export_product",
            search: "",
            view: ViewMode::Product,
            export: true,
        },
    ];

    let mut failed = false;
    for case in &cases {
        let avg_ms = run_case(case, &text, iterations, warmup);
        if let Some(budget) = budget_ms
            && avg_ms > budget
        {
            eprintln!(
                "budget exceeded for {}: avg_ms={:.3} budget_ms={:.3}",
                case.name, avg_ms, budget
            );
            failed = true;
        }
    }

    if failed {
        std::process::exit(1);
    }
}

/// Chinese-header export with a realistic spread of creators, videos and skus.
fn synthetic_export(rows: u64) -> String {
    let mut text = String::from("订单,内容ID,达人,商品名称,SKU ID,件数,日期\n");
    for idx in 0..rows {
        let _ = writeln!(
            text,
            "o{idx},73{:017},creator_{},\"Product {}, size {}\",SKU-{},\"{}\",2024-01-{:02}",
            idx % 4_000,
            idx % 300,
            idx % 150,
            idx % 3,
            idx % 450,
            1 + idx % 1_200,
            1 + idx % 28
        );
    }
    text
}

fn run_case(case: &Case, text: &str, iterations: u64, warmup: u64) -> f64 {
    let run = || {
        let mut dashboard = Dashboard::new(Dataset::from_csv_text(text));
        dashboard.set_view(case.view);
        dashboard.set_search(case.search);
        if case.export {
            black_box(dashboard.export());
        }
        dashboard
    };

    for _ in 0..warmup {
        black_box(run());
    }

    let mut total = Duration::ZERO;
    for _ in 0..iterations {
        let start = Instant::now();
        black_box(run());
        total += start.elapsed();
    }

    let total_ms = total.as_secs_f64() * 1000.0;
    let avg_ms = if iterations == 0 {
        0.0
    } else {
        total_ms / iterations as f64
    };

    println!(
        "case {}: avg_ms={:.3} total_ms={:.3}",
        case.name, avg_ms, total_ms
    );

    avg_ms
}

fn env_u64(name: &str, default: u64) -> u64 {
    std::env::var(name)
        .ok()
        .and_then(|value| value.parse::<u64>().ok())
        .unwrap_or(default)
}

fn env_f64(name: &str) -> Option<f64> {
    std::env::var(name)
        .ok()
        .and_then(|value| value.parse::<f64>().ok())
        .filter(|value| *value > 0.0)
}
