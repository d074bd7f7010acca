//! End-to-end tests for budget-master-xlsx.
//!
//! Each test builds the workbook it needs in memory, writes it with
//! `XlsxWriter`, then opens the resulting package with `zip` and inspects
//! the XML parts with `quick-xml`.

mod common;
mod writing;

pub use common::*;
