use clap::Parser;
use miette::{IntoDiagnostic, Result};
use payment_dispatch::application::processor::PaymentProcessor;
use payment_dispatch::domain::request::PaymentRequest;
use payment_dispatch::interfaces::csv::request_reader::RequestReader;
use payment_dispatch::samples::sample_requests;
use std::fs::File;
use std::io::IsTerminal;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Payment requests CSV file. Runs the built-in samples when omitted.
    input: Option<PathBuf>,

    /// Log filter used when RUST_LOG is not set (e.g. "info", "debug").
    #[arg(long, env = "PAYMENTS_LOG_LEVEL", default_value = "info")]
    log_level: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level)),
        )
        .with_ansi(std::io::stdout().is_terminal())
        .init();

    let requests = match cli.input {
        Some(path) => {
            tracing::info!(input = %path.display(), "Reading payment requests");
            let reader = RequestReader::open(&path).into_diagnostic()?;
            read_requests(reader)
        }
        None => sample_requests(),
    };

    let processor = PaymentProcessor::new();
    let results = processor.process_all(&requests);

    tracing::info!("Final Payment Results: {:?}", results);

    Ok(())
}

fn read_requests(reader: RequestReader<File>) -> Vec<PaymentRequest> {
    let mut requests = Vec::new();
    for (row, request) in reader.requests().enumerate() {
        match request {
            Ok(request) => requests.push(request),
            Err(e) => tracing::warn!(row = row + 1, "Skipping payment request: {e}"),
        }
    }
    requests
}
