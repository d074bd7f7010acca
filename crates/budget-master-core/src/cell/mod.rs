//! Cell-related types
//!
//! - [`CellValue`] - What a cell holds: text, a number, a formula string, or nothing
//! - [`CellAddress`] / [`CellRange`] - A1 notation
//! - [`CellData`] - Value plus style index, as kept in [`CellStorage`]

mod address;
mod storage;
mod value;

pub use address::{CellAddress, CellRange, CellRangeIterator};
pub use storage::{CellData, CellStorage};
pub use value::{CellValue, SharedString};
