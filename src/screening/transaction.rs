use std::fmt;

use chrono::{DateTime, Utc};
use lazy_static::lazy_static;
use regex::Regex;
use rust_decimal::Decimal;
use thiserror::Error;

lazy_static! {
  static ref TXN_ID_FORMAT: Regex = Regex::new(r"^TXN\d{3,}$").unwrap();
  static ref USER_ID_FORMAT: Regex = Regex::new(r"^USER\d{3,}$").unwrap();
}

/// Validation failures for candidate transactions.
/// They are detected at the input boundary, so a transaction that fails any of
/// these checks never reaches the screening engine.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum InvalidTransaction {
  #[error("Transaction ID must be TXN followed by at least 3 digits: {0}")]
  TransactionIdFormat(String),

  #[error("User ID must be USER followed by at least 3 digits: {0}")]
  UserIdFormat(String),

  #[error("Amount must be positive: {0}")]
  NonPositiveAmount(Decimal),

  #[error("Timestamp out of range: {0}")]
  TimestampOutOfRange(i64),
}

/// Unique identifier of a transaction, `TXN` followed by at least 3 digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TxnId(String);

impl TxnId {
  pub fn parse(id: &str) -> Result<Self, InvalidTransaction> {
    if TXN_ID_FORMAT.is_match(id) {
      Ok(Self(id.to_string()))
    } else {
      Err(InvalidTransaction::TransactionIdFormat(id.to_string()))
    }
  }

  pub fn as_str(&self) -> &str {
    &self.0
  }
}

impl fmt::Display for TxnId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}

/// Identifier of the user submitting transactions, `USER` followed by at least 3 digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UserId(String);

impl UserId {
  pub fn parse(id: &str) -> Result<Self, InvalidTransaction> {
    if USER_ID_FORMAT.is_match(id) {
      Ok(Self(id.to_string()))
    } else {
      Err(InvalidTransaction::UserIdFormat(id.to_string()))
    }
  }

  pub fn as_str(&self) -> &str {
    &self.0
  }
}

impl fmt::Display for UserId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}

/// A candidate transaction as seen by the screening engine.
/// ID formats are enforced by the [`TxnId`] and [`UserId`] constructors, so the
/// engine can assume well-formed identifiers.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
  pub txn_id: TxnId,
  pub user_id: UserId,
  pub amount: Decimal,
  pub location: String,
  pub timestamp: DateTime<Utc>,
}
