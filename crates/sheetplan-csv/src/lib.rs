//! # sheetplan-csv
//!
//! A CSV file as a sheet: reads a delimited file into memory and serves
//! windows of it through [`SheetReader`](sheetplan_profile::SheetReader),
//! so local files can be profiled the same way as remote sheets.

mod error;
mod options;
mod reader;

pub use error::{CsvError, CsvResult};
pub use options::CsvReadOptions;
pub use reader::CsvSheet;
