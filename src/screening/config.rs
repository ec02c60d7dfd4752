use chrono::Duration;
use rust_decimal::Decimal;

/// Tunable thresholds for the screening rules.
/// The defaults match the values the rules were originally calibrated with.
#[derive(Debug, Clone, PartialEq)]
pub struct ScreeningConfig {
  /// Amounts strictly above this value raise an `Amount` alert.
  pub high_amount_threshold: Decimal,
  /// Two transactions from one user closer together than this raise a `Time` alert.
  pub rapid_interval: Duration,
  /// Accepted transactions per user, candidate included, at which a
  /// `Frequency` alert fires.
  pub frequency_threshold: u64,
}

impl Default for ScreeningConfig {
  fn default() -> Self {
    Self {
      high_amount_threshold: Decimal::from(10_000),
      rapid_interval: Duration::milliseconds(10_000),
      frequency_threshold: 5,
    }
  }
}
