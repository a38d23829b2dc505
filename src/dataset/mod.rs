//! Dataset subsystem
//!
//! Loads the student performance file into an untyped [`Table`] (served
//! verbatim by the data service) and a typed [`Dataset`] of
//! [`StudentRecord`]s (consumed by the filter pipeline and views).
//!
//! The dataset is read-only: loaded once per request or session, never
//! mutated.

mod errors;
mod loader;
mod record;
mod table;

pub use errors::{DatasetError, DatasetErrorCode, DatasetResult};
pub use loader::{parse_table, DatasetLoader, DEFAULT_DELIMITER};
pub use record::{yes_no, Dataset, StudentRecord, REQUIRED_COLUMNS};
pub use table::{CellValue, ColumnType, Table, TableRow};
