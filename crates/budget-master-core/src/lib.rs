//! # budget-master-core
//!
//! In-memory document model for the budget-master workbook generator.
//!
//! This crate provides the types the sheet builders write into:
//! - [`CellValue`] - Literal text, numbers and opaque formula strings
//! - [`CellAddress`] and [`CellRange`] - A1-style addressing and merge ranges
//! - [`Style`] - Fonts, fills, borders, alignment and number formats
//! - [`Workbook`], [`Worksheet`] - The ordered sheet collection and its grids
//!
//! ## Example
//!
//! ```rust
//! use budget_master_core::{Style, Workbook, Worksheet};
//!
//! let mut sheet = Worksheet::new("Monthly Budget");
//! sheet.set_cell_value("A8", "Rent").unwrap();
//! sheet.set_cell_value("B8", 1815.0).unwrap();
//! sheet.set_cell_formula("B14", "=SUM(B8:B13)").unwrap();
//! sheet.set_cell_style("B14", &Style::new().bold(true)).unwrap();
//!
//! let mut workbook = Workbook::new();
//! workbook.add_existing_worksheet(sheet).unwrap();
//! assert_eq!(workbook.sheet_names(), vec!["Monthly Budget"]);
//! ```

pub mod cell;
pub mod error;
pub mod style;
pub mod workbook;
pub mod worksheet;

pub use cell::{CellAddress, CellData, CellRange, CellValue};
pub use error::{Error, Result};
pub use workbook::{Workbook, WorkbookSettings};
pub use worksheet::Worksheet;

pub use style::{
    Alignment, BorderEdge, BorderLineStyle, BorderStyle, Color, FillStyle, FontStyle,
    HorizontalAlignment, NumberFormat, Style, StylePool, VerticalAlignment,
};

/// Maximum number of rows in a worksheet (Excel limit)
pub const MAX_ROWS: u32 = 1_048_576;

/// Maximum number of columns in a worksheet (Excel limit)
pub const MAX_COLS: u16 = 16_384;

/// Maximum length of a sheet name
pub const MAX_SHEET_NAME_LEN: usize = 31;
