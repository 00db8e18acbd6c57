//! Cell-related types and utilities
//!
//! This module contains:
//! - [`column_to_number`] / [`number_to_column`] - The column letter codec
//! - [`CellRef`] - A cell's location (e.g., "A1")
//! - [`ScalarValue`] - A typed value exchanged with the remote sheet

mod address;
mod value;

pub use address::{column_to_number, number_to_column, CellRef};
pub use value::{DataExtent, Grid, ScalarValue};
