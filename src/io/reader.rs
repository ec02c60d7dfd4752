use anyhow::Result;
use tokio::io::AsyncRead;
use tokio_stream::{Stream, StreamExt};

use crate::screening::Transaction;

/// Interface to read candidate transactions from an external source
pub trait TransactionsReader {
  /// Read transactions and return an [`Stream`] of possibly successful transactions.
  /// Each item yielded by the stream is either `Ok` if the transaction was read and
  /// validated successfully, or `Err` if there was any kind of problem (like wrong
  /// format or a malformed ID).
  fn read_transactions<'a>(
    &'a mut self,
  ) -> Box<dyn Stream<Item = Result<Transaction>> + Unpin + 'a>;
}

/// Implementation of [`TransactionsReader`] for the CSV format.
pub struct CsvTransactionsReader<R>(R);

impl<R> CsvTransactionsReader<R>
where
  R: AsyncRead + Unpin + Send + Sync,
{
  pub fn new(reader: R) -> Self {
    Self(reader)
  }
}

impl<R> TransactionsReader for CsvTransactionsReader<R>
where
  R: AsyncRead + Unpin + Send + Sync,
{
  fn read_transactions<'a>(
    &'a mut self,
  ) -> Box<dyn Stream<Item = Result<Transaction>> + Unpin + 'a> {
    Box::new(
      csv_async::AsyncReaderBuilder::new()
        .flexible(true)
        .create_reader(&mut self.0)
        .into_records()
        .map(|maybe_record| {
          maybe_record
            .and_then(|mut record| {
              record.trim();
              record.deserialize::<super::transaction::Transaction>(None)
            })
            .map_err(anyhow::Error::from)
            .and_then(|row| Transaction::try_from(row).map_err(anyhow::Error::from))
        }),
    )
  }
}
