use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use super::transaction::{Transaction, TxnId, UserId};

/// The closed set of alert categories, one per screening rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlertKind {
  Duplicate,
  Location,
  Amount,
  Time,
  Frequency,
}

impl AlertKind {
  /// `Amount` and `Frequency` alerts classify the transaction as high-risk.
  pub fn is_high_risk(&self) -> bool {
    matches!(self, AlertKind::Amount | AlertKind::Frequency)
  }
}

/// Structured data describing why a rule fired.
/// Rendering into human-readable text belongs to the report writers, not here.
#[derive(Debug, Clone, PartialEq)]
pub enum AlertDetails {
  Duplicate,
  LocationChange { previous: String, current: String },
  HighAmount { amount: Decimal },
  RapidSuccession { elapsed_ms: i64 },
  HighFrequency { count: u64 },
}

impl AlertDetails {
  pub fn kind(&self) -> AlertKind {
    match self {
      AlertDetails::Duplicate => AlertKind::Duplicate,
      AlertDetails::LocationChange { .. } => AlertKind::Location,
      AlertDetails::HighAmount { .. } => AlertKind::Amount,
      AlertDetails::RapidSuccession { .. } => AlertKind::Time,
      AlertDetails::HighFrequency { .. } => AlertKind::Frequency,
    }
  }
}

/// An alert raised while screening one transaction.
/// Alerts are notices, not rejections: an accepted transaction can carry several.
#[derive(Debug, Clone, PartialEq)]
pub struct Alert {
  pub txn_id: TxnId,
  pub user_id: UserId,
  pub timestamp: DateTime<Utc>,
  pub details: AlertDetails,
}

impl Alert {
  /// The alert carries the raising transaction's own timestamp, which keeps
  /// screening deterministic when a historical batch is replayed.
  pub fn raised_by(transaction: &Transaction, details: AlertDetails) -> Self {
    Self {
      txn_id: transaction.txn_id.clone(),
      user_id: transaction.user_id.clone(),
      timestamp: transaction.timestamp,
      details,
    }
  }

  pub fn kind(&self) -> AlertKind {
    self.details.kind()
  }
}
