#![forbid(unsafe_code)]

use std::process::ExitCode;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_env("MXA_LOG")
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match mxa::run() {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            eprintln!("mxa: {e}");
            ExitCode::from(2)
        }
    }
}
