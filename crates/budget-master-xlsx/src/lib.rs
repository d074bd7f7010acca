//! # budget-master-xlsx
//!
//! Serializes a [`budget_master_core::Workbook`] into an Office Open XML
//! (`.xlsx`) package. Output is deterministic: the same workbook always
//! produces the same bytes.

pub mod error;
pub mod writer;

mod styles;
mod xml;

pub use error::{XlsxError, XlsxResult};
pub use writer::XlsxWriter;
