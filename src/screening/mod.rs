//! This module contains the domain logic to screen transactions
//!
//! The [`InMemoryScreeningEngine`] is an implementation of a [`ScreeningEngine`] that keeps the transaction history, the alert log and the per-user indices in memory.
//

mod alert;
mod config;
mod engine;
mod history;
mod transaction;

#[cfg(test)]
pub(crate) use engine::Result as EngineResult;

pub use alert::{Alert, AlertDetails, AlertKind};
pub use config::ScreeningConfig;
pub use engine::{
  AlertsReportIter, EngineStats, InMemoryScreeningEngine, Screening, ScreeningEngine,
  ScreeningError,
};
pub use transaction::{InvalidTransaction, Transaction, TxnId, UserId};
