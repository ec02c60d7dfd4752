use serde::Serialize;

use crate::screening::{self, AlertDetails, AlertKind};

/// One row of the alerts report, used to serialize into a CSV file
#[derive(Debug, PartialEq, Serialize)]
pub struct AlertRecord {
  txn: String,
  user: String,
  kind: &'static str,
  high_risk: bool,
  detail: String,
  timestamp: String,
}

impl From<screening::Alert> for AlertRecord {
  /// A conversion between the domain representation of an alert into a
  /// serializable row. The human-readable detail text and the high-risk
  /// classification are rendered here; the engine only emits structured data.
  fn from(alert: screening::Alert) -> Self {
    let kind = alert.kind();
    AlertRecord {
      txn: alert.txn_id.to_string(),
      user: alert.user_id.to_string(),
      kind: kind_label(kind),
      high_risk: kind.is_high_risk(),
      detail: detail_text(&alert.details),
      timestamp: alert.timestamp.to_rfc3339(),
    }
  }
}

fn kind_label(kind: AlertKind) -> &'static str {
  match kind {
    AlertKind::Duplicate => "duplicate",
    AlertKind::Location => "location",
    AlertKind::Amount => "amount",
    AlertKind::Time => "time",
    AlertKind::Frequency => "frequency",
  }
}

fn detail_text(details: &AlertDetails) -> String {
  match details {
    AlertDetails::Duplicate => "Transaction ID already seen".to_string(),
    AlertDetails::LocationChange { previous, current } => {
      format!("Location changed from {} to {}", previous, current)
    }
    AlertDetails::HighAmount { amount } => {
      format!("Amount {} exceeds the high-amount threshold", amount)
    }
    AlertDetails::RapidSuccession { elapsed_ms } => {
      format!("Only {}ms since the previous transaction", elapsed_ms)
    }
    AlertDetails::HighFrequency { count } => {
      format!("{} accepted transactions for this user", count)
    }
  }
}
