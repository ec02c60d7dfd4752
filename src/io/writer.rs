use anyhow::Result;
use async_trait::async_trait;
use tokio::io::AsyncWrite;
use tokio_stream::StreamExt;

use crate::screening::Alert;

/// Interface for an alerts report writer
#[async_trait(?Send)]
pub trait AlertsReportWriter {
  /// Write the alerts provided by the [`Iterator`] and return whether the operation was successful or not.
  async fn write_alerts_report<'a, T>(&'a mut self, report: T) -> Result<()>
  where
    T: Iterator<Item = Alert> + 'a;
}

/// An implementation of [`AlertsReportWriter`] for the CSV format.
pub struct CsvAlertsReportWriter<W>(W);

impl<W> CsvAlertsReportWriter<W>
where
  W: AsyncWrite + Unpin + Send + Sync,
{
  pub fn new(writer: W) -> Self {
    Self(writer)
  }
}

#[async_trait(?Send)]
impl<W> AlertsReportWriter for CsvAlertsReportWriter<W>
where
  W: AsyncWrite + Unpin + Send + Sync,
{
  async fn write_alerts_report<'a, T>(&'a mut self, report: T) -> Result<()>
  where
    T: Iterator<Item = Alert> + 'a,
  {
    let mut report = Box::pin(tokio_stream::iter(
      report.map(super::alert::AlertRecord::from),
    ));

    let mut serializer = csv_async::AsyncSerializer::from_writer(&mut self.0);
    while let Some(alert_record) = report.next().await {
      serializer.serialize(alert_record).await?;
    }
    Ok(())
  }
}

#[cfg(test)]
mod tests {

  use chrono::{TimeZone, Utc};
  use rust_decimal_macros::dec;
  use std::io::Cursor;
  use std::iter;

  use super::*;
  use crate::screening::{AlertDetails, TxnId, UserId};

  fn alerts() -> Vec<Alert> {
    vec![
      Alert {
        txn_id: TxnId::parse("TXN101").unwrap(),
        user_id: UserId::parse("USER101").unwrap(),
        timestamp: Utc.timestamp_millis_opt(0).unwrap(),
        details: AlertDetails::HighAmount { amount: dec!(10001) },
      },
      Alert {
        txn_id: TxnId::parse("TXN102").unwrap(),
        user_id: UserId::parse("USER101").unwrap(),
        timestamp: Utc.timestamp_millis_opt(3_000).unwrap(),
        details: AlertDetails::RapidSuccession { elapsed_ms: 3_000 },
      },
    ]
  }

  #[tokio::test]
  async fn write_alerts_report_fails() {
    let buff: &mut [u8] = &mut [0u8, 0, 0, 0];
    let mut buffer = Cursor::new(buff);
    let mut writer = CsvAlertsReportWriter::new(&mut buffer);

    let result = writer.write_alerts_report(alerts().into_iter()).await;

    assert!(result.is_err());
  }

  #[tokio::test]
  async fn write_alerts_report_empty() {
    let mut buffer = Vec::<u8>::with_capacity(1024);
    let mut writer = CsvAlertsReportWriter::new(&mut buffer);

    let result = writer.write_alerts_report(iter::empty()).await;

    assert!(result.is_ok());
    assert_eq!(String::from_utf8_lossy(buffer.as_slice()), "".to_string())
  }

  #[tokio::test]
  async fn write_alerts_report_success() {
    let mut buffer = Vec::<u8>::with_capacity(1024);
    let mut writer = CsvAlertsReportWriter::new(&mut buffer);

    let result = writer.write_alerts_report(alerts().into_iter()).await;

    assert!(result.is_ok());
    assert_eq!(
      String::from_utf8_lossy(buffer.as_slice()),
      "txn,user,kind,high_risk,detail,timestamp\n\
       TXN101,USER101,amount,true,Amount 10001 exceeds the high-amount threshold,1970-01-01T00:00:00+00:00\n\
       TXN102,USER101,time,false,Only 3000ms since the previous transaction,1970-01-01T00:00:03+00:00\n"
        .to_string()
    )
  }
}
