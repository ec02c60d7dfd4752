use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use rust_decimal::Decimal;
use thiserror::Error;

use super::{
  alert::{Alert, AlertDetails},
  config::ScreeningConfig,
  history::UserHistory,
  transaction::{Transaction, TxnId, UserId},
};

pub type Result<T> = core::result::Result<T, ScreeningError>;

/// Errors the engine can raise on its own.
/// Format validation already happened at the input boundary, so the only
/// engine-level failure is the numeric sanity backstop for callers that
/// bypass it. A failed screening leaves the engine state untouched.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ScreeningError {
  #[error("Invalid non-positive amount")]
  NonPositiveAmount,
}

/// The outcome of screening one candidate transaction.
#[derive(Debug, Clone, PartialEq)]
pub enum Screening {
  /// The transaction was appended to the history, possibly with alerts.
  Accepted { alerts: Vec<Alert> },
  /// The transaction ID was already seen. The transaction was dropped and
  /// only the duplicate alert was recorded.
  Rejected { alert: Alert },
}

impl Screening {
  pub fn is_accepted(&self) -> bool {
    matches!(self, Screening::Accepted { .. })
  }

  /// All alerts raised by this screening, whatever the outcome.
  pub fn alerts(&self) -> &[Alert] {
    match self {
      Screening::Accepted { alerts } => alerts,
      Screening::Rejected { alert } => std::slice::from_ref(alert),
    }
  }
}

/// Aggregate counters over the engine state, the numbers a monitoring
/// dashboard would display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineStats {
  pub total_transactions: usize,
  pub total_alerts: usize,
  pub monitored_users: usize,
  /// Distinct accepted transactions carrying at least one high-risk alert.
  pub high_risk_transactions: usize,
}

/// Interface implemented by screening engines
#[async_trait]
pub trait ScreeningEngine {
  /// Screen one candidate transaction against the accumulated history and
  /// indices. The operation is `async` to allow engines that consult
  /// external systems (reputation services, shared indices, ...).
  ///
  /// Callers must await completion before submitting the next candidate:
  /// the per-user indices are read and then written non-atomically, so
  /// overlapping screenings would race.
  async fn screen(&mut self, transaction: Transaction) -> Result<Screening>;

  /// An [`Iterator`] over the full alert log in insertion order, useful to
  /// generate alert reports.
  fn alerts_report(&self) -> AlertsReportIter;

  /// Aggregate counters, recomputed from the logs on each call.
  fn stats(&self) -> EngineStats;
}

/// Implementation of the [`ScreeningEngine`] that keeps the transaction
/// history, the alert log and the per-user indices in memory.
/// Everything starts empty and lives for the lifetime of the process.
#[derive(Debug)]
pub struct InMemoryScreeningEngine {
  config: ScreeningConfig,
  /// Append-only log of accepted transactions.
  transactions: Vec<Transaction>,
  /// Append-only log of every alert raised, duplicates included.
  alerts: Vec<Alert>,
  /// Every transaction ID ever accepted.
  seen_txn_ids: HashSet<TxnId>,
  users: HashMap<UserId, UserHistory>,
}

impl InMemoryScreeningEngine {
  pub fn new() -> Self {
    Self::with_config(ScreeningConfig::default())
  }

  pub fn with_config(config: ScreeningConfig) -> Self {
    Self {
      config,
      transactions: Vec::new(),
      alerts: Vec::new(),
      seen_txn_ids: HashSet::default(),
      users: HashMap::default(),
    }
  }

  // The four acceptance-path rules below are decided independently, each
  // against the pre-screening indices only. None of them mutates state.

  fn location_rule(&self, transaction: &Transaction) -> Option<Alert> {
    let previous = self.users.get(&transaction.user_id)?.last_location.as_deref()?;
    if previous != transaction.location {
      Some(Alert::raised_by(
        transaction,
        AlertDetails::LocationChange {
          previous: previous.to_string(),
          current: transaction.location.clone(),
        },
      ))
    } else {
      None
    }
  }

  fn amount_rule(&self, transaction: &Transaction) -> Option<Alert> {
    // Strict inequality: an amount exactly at the threshold is fine.
    (transaction.amount > self.config.high_amount_threshold).then(|| {
      Alert::raised_by(
        transaction,
        AlertDetails::HighAmount {
          amount: transaction.amount,
        },
      )
    })
  }

  fn time_rule(&self, transaction: &Transaction) -> Option<Alert> {
    let last_seen_at = self.users.get(&transaction.user_id)?.last_seen_at?;
    let elapsed = transaction.timestamp - last_seen_at;
    if elapsed < self.config.rapid_interval {
      Some(Alert::raised_by(
        transaction,
        AlertDetails::RapidSuccession {
          elapsed_ms: elapsed.num_milliseconds(),
        },
      ))
    } else {
      None
    }
  }

  fn frequency_rule(&self, transaction: &Transaction) -> Option<Alert> {
    // The count includes the candidate, so the threshold trips on the 5th
    // transaction overall, not the 6th.
    let prior = self
      .users
      .get(&transaction.user_id)
      .map(|history| history.accepted_count)
      .unwrap_or(0);
    let count = prior + 1;
    (count >= self.config.frequency_threshold)
      .then(|| Alert::raised_by(transaction, AlertDetails::HighFrequency { count }))
  }

  fn commit(&mut self, transaction: Transaction, alerts: Vec<Alert>) {
    self.seen_txn_ids.insert(transaction.txn_id.clone());
    self
      .users
      .entry(transaction.user_id.clone())
      .or_default()
      .record(&transaction);
    self.alerts.extend(alerts);
    self.transactions.push(transaction);
  }
}

#[async_trait]
impl ScreeningEngine for InMemoryScreeningEngine {
  async fn screen(&mut self, transaction: Transaction) -> Result<Screening> {
    if transaction.amount <= Decimal::ZERO {
      return Err(ScreeningError::NonPositiveAmount);
    }

    // Duplicate detection ranks first and short-circuits: the remaining
    // rules assume the transaction is legitimate and about to be committed.
    // The ID is already in the seen set, so no index is touched here.
    if self.seen_txn_ids.contains(&transaction.txn_id) {
      let alert = Alert::raised_by(&transaction, AlertDetails::Duplicate);
      self.alerts.push(alert.clone());
      return Ok(Screening::Rejected { alert });
    }

    let alerts: Vec<Alert> = [
      self.location_rule(&transaction),
      self.amount_rule(&transaction),
      self.time_rule(&transaction),
      self.frequency_rule(&transaction),
    ]
    .into_iter()
    .flatten()
    .collect();

    self.commit(transaction, alerts.clone());

    Ok(Screening::Accepted { alerts })
  }

  fn alerts_report(&self) -> AlertsReportIter {
    AlertsReportIter::new(self.alerts.iter().cloned())
  }

  fn stats(&self) -> EngineStats {
    let high_risk: HashSet<&TxnId> = self
      .alerts
      .iter()
      .filter(|alert| alert.kind().is_high_risk())
      .map(|alert| &alert.txn_id)
      .collect();

    EngineStats {
      total_transactions: self.transactions.len(),
      total_alerts: self.alerts.len(),
      monitored_users: self.users.len(),
      high_risk_transactions: high_risk.len(),
    }
  }
}

pub struct AlertsReportIter<'a>(Box<dyn Iterator<Item = Alert> + 'a>);

impl<'a> AlertsReportIter<'a> {
  pub(crate) fn new<T>(iter: T) -> Self
  where
    T: Iterator<Item = Alert> + 'a,
  {
    Self(Box::new(iter))
  }
}

impl<'a> Iterator for AlertsReportIter<'a> {
  type Item = Alert;

  fn next(&mut self) -> Option<Self::Item> {
    self.0.next()
  }
}
