//! This module contains all the components needed to read and write data from files (specifically CSV)
//!
//! The [`reader`] module contains a reader of candidate transactions from CSV and [`writer`] module contains an alerts report writer into CSV.
//! It would be possible to add new file formats by implementing the traits [`TransactionsReader`] and [`AlertsReportWriter`] respectively.
//!
//! The [`alert`] and [`transaction`] modules contain structs needed to serialize/deserialize data.
//! They are intentionally duplicated from the domain model to decouple the IO details from the domain logic and allow their evolution independently.
//! The transaction side also owns input validation (ID formats, numeric sanity), so the engine never sees a malformed candidate.
//

mod alert;
mod reader;
mod transaction;
mod writer;

pub use reader::{CsvTransactionsReader, TransactionsReader};
pub use writer::{AlertsReportWriter, CsvAlertsReportWriter};
