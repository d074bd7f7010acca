//! Prelude module - common imports for budget-master users
//!
//! ```rust
//! use budget_master::prelude::*;
//! ```

pub use crate::{
    // Style types
    Alignment,
    BorderEdge,
    BorderLineStyle,
    BorderStyle,
    CellAddress,
    CellRange,
    // Cell types
    CellValue,
    Color,
    // Error types
    Error,
    FillStyle,
    FontStyle,
    HorizontalAlignment,
    NumberFormat,
    Result,
    Style,
    VerticalAlignment,
    // Main types
    Workbook,
    // Extension traits
    WorkbookExt,
    Worksheet,
    // I/O types
    XlsxWriter,
};
