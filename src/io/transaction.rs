use chrono::{TimeZone, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::screening::{self, InvalidTransaction, TxnId, UserId};

/// A deserializable transaction row
#[derive(Debug, Deserialize)]
pub struct Transaction {
  #[serde(rename = "txn")]
  txn_id: String,

  #[serde(rename = "user")]
  user_id: String,

  amount: Decimal,

  location: String,

  /// Milliseconds since the Unix epoch
  timestamp: i64,
}

impl TryFrom<Transaction> for screening::Transaction {
  type Error = InvalidTransaction;

  /// Conversion from a deserializable row into a validated domain transaction.
  /// ID format and numeric sanity checks happen here, so the engine only ever
  /// sees well-formed candidates.
  fn try_from(transaction: Transaction) -> Result<Self, Self::Error> {
    if transaction.amount <= Decimal::ZERO {
      return Err(InvalidTransaction::NonPositiveAmount(transaction.amount));
    }

    let timestamp = Utc
      .timestamp_millis_opt(transaction.timestamp)
      .single()
      .ok_or(InvalidTransaction::TimestampOutOfRange(transaction.timestamp))?;

    Ok(screening::Transaction {
      txn_id: TxnId::parse(&transaction.txn_id)?,
      user_id: UserId::parse(&transaction.user_id)?,
      amount: transaction.amount,
      location: transaction.location,
      timestamp,
    })
  }
}

#[cfg(test)]
mod tests {

  use rust_decimal_macros::dec;

  use super::*;

  fn row(txn_id: &str, user_id: &str, amount: Decimal, timestamp: i64) -> Transaction {
    Transaction {
      txn_id: txn_id.to_string(),
      user_id: user_id.to_string(),
      amount,
      location: "Mumbai".to_string(),
      timestamp,
    }
  }

  #[test]
  fn screening_transaction_try_from_success() {
    let result = screening::Transaction::try_from(row("TXN101", "USER101", dec!(100.5), 1_000));

    assert_eq!(
      result,
      Ok(screening::Transaction {
        txn_id: TxnId::parse("TXN101").unwrap(),
        user_id: UserId::parse("USER101").unwrap(),
        amount: dec!(100.5),
        location: "Mumbai".to_string(),
        timestamp: Utc.timestamp_millis_opt(1_000).unwrap(),
      })
    );
  }

  #[test]
  fn screening_transaction_try_from_failures() {
    let cases = vec![
      (
        row("TX101", "USER101", dec!(100), 0),
        InvalidTransaction::TransactionIdFormat("TX101".to_string()),
      ),
      (
        row("TXN101", "US101", dec!(100), 0),
        InvalidTransaction::UserIdFormat("US101".to_string()),
      ),
      (
        row("TXN101", "USER101", dec!(0), 0),
        InvalidTransaction::NonPositiveAmount(dec!(0)),
      ),
      (
        row("TXN101", "USER101", dec!(-5), 0),
        InvalidTransaction::NonPositiveAmount(dec!(-5)),
      ),
      (
        row("TXN101", "USER101", dec!(100), i64::MAX),
        InvalidTransaction::TimestampOutOfRange(i64::MAX),
      ),
    ];

    for (input, expected) in cases {
      assert_eq!(screening::Transaction::try_from(input), Err(expected));
    }
  }
}
