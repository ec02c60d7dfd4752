mod io;
mod processors;
mod screening;

use std::path::{Path, PathBuf};

use anyhow::Result;
use chrono::Duration;
use clap::Parser;
use env_logger::Env;
use rust_decimal::Decimal;
use tokio::io::AsyncRead;

use crate::io::{CsvAlertsReportWriter, CsvTransactionsReader};
use screening::{InMemoryScreeningEngine, ScreeningConfig};

/// Screen a batch of transactions against the fraud rules and write the
/// alert log as CSV to stdout.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
  /// Path to a transactions CSV file; reads from stdin when omitted
  input: Option<PathBuf>,

  /// Amounts strictly above this value raise an alert
  #[arg(long, default_value = "10000")]
  high_amount_threshold: Decimal,

  /// Two transactions from one user closer together than this raise an alert
  #[arg(long, default_value_t = 10_000)]
  rapid_interval_ms: i64,

  /// Accepted transactions per user at which a frequency alert fires
  #[arg(long, default_value_t = 5)]
  frequency_threshold: u64,
}

#[tokio::main]
async fn main() -> Result<()> {
  env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

  let cli = Cli::parse();

  let reader = get_transactions_async_read(cli.input.as_deref()).await?;
  let transactions_reader = CsvTransactionsReader::new(reader);
  let screening_engine = InMemoryScreeningEngine::with_config(ScreeningConfig {
    high_amount_threshold: cli.high_amount_threshold,
    rapid_interval: Duration::milliseconds(cli.rapid_interval_ms),
    frequency_threshold: cli.frequency_threshold,
  });
  let alerts_report_writer = CsvAlertsReportWriter::new(tokio::io::stdout());

  processors::simple::run(transactions_reader, screening_engine, alerts_report_writer).await
}

type TransactionsAsyncRead = Box<dyn AsyncRead + Unpin + Send + Sync>;

/// This allows to use either a file if the path is specified in the command line,
/// or the stdin otherwise, which might be more convenient for pipe the data.
async fn get_transactions_async_read(path: Option<&Path>) -> Result<TransactionsAsyncRead> {
  match path {
    Some(path) => tokio::fs::File::open(path)
      .await
      .map(|file| Box::new(file) as TransactionsAsyncRead)
      .map_err(anyhow::Error::from),
    None => Ok(Box::new(tokio::io::stdin()) as TransactionsAsyncRead),
  }
}
