#![forbid(unsafe_code)]

pub mod aggregate;
pub mod cli;
pub mod csv;
pub mod dashboard;
pub mod dataset;
pub mod export;
pub mod filter;
pub mod format;
pub mod normalize;
pub mod numeric;
pub mod orchestrator;
pub mod output;
pub mod refusal;
pub mod resolve;
pub mod view;

/// Run the mxa pipeline. Returns exit code (0, 1, or 2).
pub fn run() -> Result<u8, Box<dyn std::error::Error>> {
    use std::io::{self, Write};

    let args = match cli::args::Args::parse() {
        Ok(args) => args,
        Err(err) => {
            err.print()?;
            return Ok(match err.kind() {
                clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion => 0,
                _ => 2,
            });
        }
    };

    let result = orchestrator::run(&args)?;
    let stream = cli::exit::output_stream(result.outcome, args.output_mode());

    match stream {
        cli::exit::OutputStream::Stdout => {
            let mut stdout = io::stdout();
            stdout.write_all(result.output.as_bytes())?;
            stdout.flush()?;
        }
        cli::exit::OutputStream::Stderr => {
            let mut stderr = io::stderr();
            stderr.write_all(result.output.as_bytes())?;
            stderr.flush()?;
        }
    }

    Ok(cli::exit::exit_code(result.outcome))
}
