use anyhow::Result;
use log::{info, warn};
use tokio_stream::StreamExt;

use crate::io::{AlertsReportWriter, TransactionsReader};
use crate::screening::ScreeningEngine;

/// This is a simple processor of transactions that
/// - reads candidates from a [`TransactionsReader`]
/// - screens them using a [`ScreeningEngine`]
/// - writes the full alert log using an [`AlertsReportWriter`]
///
/// The idea is that all those components can be replaced with different implementations.
///
/// This processor tries to be as resilient as possible, meaning that:
/// - rows that fail to parse or validate are logged and skipped
/// - candidates the engine refuses are logged and skipped
///
/// Screenings run strictly one at a time: each `screen` call is awaited to
/// completion before the next candidate is admitted. The engine indices are
/// read and then written non-atomically, so a processor that wanted to overlap
/// screenings would need explicit mutual exclusion around the engine.
///
/// It shouldn't be too difficult to write other kinds of processors, for example
/// an HTTP one where candidates arrive as requests and each screening outcome is
/// returned in the response while the alert log keeps accumulating in the engine.
pub async fn run<R, E, W>(
  mut transactions_reader: R,
  mut screening_engine: E,
  mut alerts_report_writer: W,
) -> Result<()>
where
  R: TransactionsReader,
  E: ScreeningEngine,
  W: AlertsReportWriter,
{
  let mut transactions = transactions_reader.read_transactions();

  while let Some(maybe_transaction) = transactions.next().await {
    match maybe_transaction {
      Ok(transaction) => match screening_engine.screen(transaction).await {
        Ok(screening) => {
          for alert in screening.alerts() {
            warn!(
              "Alert raised: txn={} user={} kind={:?}",
              alert.txn_id,
              alert.user_id,
              alert.kind()
            );
          }
        }
        Err(err) => warn!("Transaction refused by the engine: {}", err),
      },
      Err(err) => warn!("Skipping invalid transaction: {}", err),
    }
  }

  let stats = screening_engine.stats();
  info!(
    "Accepted {} transactions from {} users; {} alerts raised; {} high-risk transactions",
    stats.total_transactions, stats.monitored_users, stats.total_alerts, stats.high_risk_transactions
  );

  alerts_report_writer
    .write_alerts_report(screening_engine.alerts_report())
    .await
}
