use chrono::{DateTime, Utc};

use super::transaction::Transaction;

/// Per-user state derived from accepted transactions.
/// Maintained incrementally so screening never rescans the full history.
#[derive(Debug, Default, PartialEq)]
pub struct UserHistory {
  /// The location of the user's most recent accepted transaction.
  pub last_location: Option<String>,
  /// The timestamp of the user's most recent accepted transaction.
  pub last_seen_at: Option<DateTime<Utc>>,
  /// How many transactions have been accepted for the user so far.
  pub accepted_count: u64,
}

impl UserHistory {
  /// Fold an accepted transaction into the derived state.
  /// The most recent location always wins, alerted or not.
  pub fn record(&mut self, transaction: &Transaction) {
    self.last_location = Some(transaction.location.clone());
    self.last_seen_at = Some(transaction.timestamp);
    self.accepted_count += 1;
  }
}
