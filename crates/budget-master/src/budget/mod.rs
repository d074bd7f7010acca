//! The Budget Master workbook.
//!
//! Each sheet has a builder in [`sheets`] that writes its labels, sample
//! figures, formulas and formatting through a [`SheetWriter`]. Sheets are
//! independent of each other and are assembled in a fixed order.
//!
//! Pay-calendar figures that appear inside formula text are kept here so
//! every sheet agrees on them.

pub mod presets;
pub mod sheets;
pub mod writer;

pub use presets::ValueKind;
pub use writer::SheetWriter;

use budget_master_core::{Result, Workbook, Worksheet};
use tracing::debug;

/// Annual gross salary
pub const GROSS_SALARY: u32 = 76_000;
pub const PAYCHECKS_PER_YEAR: u32 = 26;
pub const MONTHS_PER_YEAR: u32 = 12;
/// Month length used to project payoff and goal dates from `TODAY()`
pub const DAYS_PER_MONTH: u32 = 30;
/// Annual Roth IRA contribution limit
pub const ROTH_IRA_LIMIT: u32 = 7_000;
/// Employer 401(k) match as a share of gross salary
pub const EMPLOYER_MATCH_RATE: f64 = 0.08;

/// Default output file name
pub const DEFAULT_FILE_NAME: &str = "Budget_Master.xlsx";

type SheetBuilder = fn(&mut SheetWriter<'_>) -> Result<()>;

/// Sheet titles paired with their builders, in workbook order
const SHEETS: [(&str, SheetBuilder); 8] = [
    (sheets::dashboard::NAME, sheets::dashboard::build),
    (sheets::monthly_budget::NAME, sheets::monthly_budget::build),
    (sheets::roth_ira::NAME, sheets::roth_ira::build),
    (sheets::credit_card::NAME, sheets::credit_card::build),
    (sheets::work_expenses::NAME, sheets::work_expenses::build),
    (sheets::emergency_fund::NAME, sheets::emergency_fund::build),
    (sheets::paycheck::NAME, sheets::paycheck::build),
    (sheets::money_rules::NAME, sheets::money_rules::build),
];

/// Titles of the generated sheets, in order
pub fn sheet_names() -> impl Iterator<Item = &'static str> {
    SHEETS.iter().map(|(name, _)| *name)
}

/// Build the complete workbook in memory.
///
/// The result is the same on every call.
pub fn build_workbook() -> Result<Workbook> {
    let mut workbook = Workbook::new();
    for (name, build) in SHEETS {
        let mut sheet = Worksheet::new(name);
        build(&mut SheetWriter::new(&mut sheet))?;
        debug!(
            sheet = name,
            cells = sheet.cell_count(),
            merges = sheet.merged_regions().len(),
            "built sheet"
        );
        workbook.add_existing_worksheet(sheet)?;
    }
    Ok(workbook)
}
