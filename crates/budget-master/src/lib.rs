//! # budget-master
//!
//! Builds the Budget Master workbook: eight worksheets of labels, sample
//! figures, formulas and formatting for tracking a salaried paycheck.
//!
//! The workbook is assembled in memory by [`budget::build_workbook`] and
//! written as an `.xlsx` package with [`WorkbookExt::save`]. Formulas are
//! stored as text; the spreadsheet application computes them on open.
//!
//! ## Example
//!
//! ```rust
//! use budget_master::prelude::*;
//!
//! let workbook = budget_master::budget::build_workbook().unwrap();
//! assert_eq!(workbook.sheet_count(), 8);
//!
//! let budget = workbook.worksheet_by_name("Monthly Budget").unwrap();
//! assert_eq!(budget.get_formula("B14").unwrap(), Some("=SUM(B8:B13)"));
//!
//! // workbook.save("Budget_Master.xlsx").unwrap();
//! ```

pub mod budget;
pub mod prelude;

// Re-export core types
pub use budget_master_core::{
    Alignment,
    BorderEdge,
    BorderLineStyle,
    BorderStyle,
    // Cell types
    CellAddress,
    CellData,
    CellRange,
    CellValue,
    Color,
    // Error types
    Error,
    FillStyle,
    FontStyle,
    HorizontalAlignment,
    NumberFormat,
    Result,
    // Style types
    Style,
    StylePool,
    VerticalAlignment,
    // Main types
    Workbook,
    WorkbookSettings,
    Worksheet,
    // Constants
    MAX_COLS,
    MAX_ROWS,
    MAX_SHEET_NAME_LEN,
};

// Re-export I/O types
pub use budget_master_xlsx::{XlsxError, XlsxWriter};

use std::path::Path;

/// Extension trait for Workbook to add file output
pub trait WorkbookExt {
    /// Save the workbook to a file, replacing any existing file
    fn save<P: AsRef<Path>>(&self, path: P) -> Result<()>;
}

impl WorkbookExt for Workbook {
    fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase());

        match extension.as_deref() {
            Some("xlsx") => {
                XlsxWriter::write_file(self, path).map_err(|e| Error::other(e.to_string()))
            }
            _ => Err(Error::other(format!(
                "Unsupported file format: {}",
                path.display()
            ))),
        }
    }
}
