mod dlq;
mod domain;
mod engine;
mod ingestion;
mod output_repository;

use std::{env, fs::File, path::Path};

use crate::dlq::StdErrDlq;
use crate::engine::Engine;
use crate::ingestion::CsvReader;
use crate::output_repository::InMemoryLedger;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr so stdout stays a machine-readable report.
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_writer(std::io::stderr)
        .init();

    let file_path = env::args()
        .nth(1)
        .ok_or("usage: ledger_engine <commands.csv>")?;
    let file = File::open(Path::new(&file_path))?;

    let ingestion = CsvReader::new(file);
    let mut engine = Engine::new(ingestion, InMemoryLedger::new(), StdErrDlq::default());

    engine.process().await?;
    engine.flush();

    Ok(())
}
