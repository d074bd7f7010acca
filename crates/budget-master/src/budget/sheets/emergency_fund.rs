//! Emergency Fund: balance toward a fixed savings goal

use budget_master_core::{CellValue, Result};

use crate::budget::presets::{self, ValueKind};
use crate::budget::writer::{f, SheetWriter};
use crate::budget::DAYS_PER_MONTH;

pub const NAME: &str = "Emergency Fund";

const GOAL: u32 = 15_000;
const MONTHLY_CONTRIBUTION: u32 = 750;

/// Contribution table rows (1-based, inclusive)
const FIRST_TRACKING_ROW: u32 = 17;
const LAST_TRACKING_ROW: u32 = 36;

pub fn build(w: &mut SheetWriter<'_>) -> Result<()> {
    w.set("A1", "🏦 EMERGENCY FUND TRACKER")?;
    w.font("A1", presets::title())?;
    w.merge("A1:E1")?;

    w.set("A3", "Goal: $15,000 (About 6 months of essential expenses)")?;
    w.font("A3", presets::section(12.0))?;

    w.set("A5", "CURRENT STATUS")?;
    w.header("A5")?;
    w.merge("A5:C5")?;

    w.set("A6", "Current Balance:")?;
    w.set("B6", 0)?;
    w.value_cell("B6", ValueKind::Money)?;
    w.fill("B6", presets::YELLOW_FILL)?;

    w.set("A7", "Target:")?;
    w.set("B7", GOAL)?;
    w.value_cell("B7", ValueKind::Money)?;

    w.set("A8", "Remaining to Goal:")?;
    w.formula("B8", "=B7-B6")?;
    w.value_cell("B8", ValueKind::Money)?;

    w.set("A9", "Progress:")?;
    w.formula("B9", "=B6/B7")?;
    w.value_cell("B9", ValueKind::Percent)?;

    w.set("A11", "Monthly Contribution:")?;
    w.set("B11", MONTHLY_CONTRIBUTION)?;
    w.value_cell("B11", ValueKind::Money)?;

    w.set("A12", "Months to Goal:")?;
    w.formula("B12", "=CEILING(B8/B11,1)")?;

    w.set("A13", "Target Date:")?;
    w.formula("B13", &format!("=TODAY()+B12*{DAYS_PER_MONTH}"))?;
    w.number_format("B13", presets::MONTH_YEAR_FORMAT)?;

    w.set("A15", "MONTHLY CONTRIBUTIONS")?;
    w.header("A15")?;
    w.merge("A15:D15")?;

    w.subheader_row(
        FIRST_TRACKING_ROW - 2,
        0,
        &["Month", "Contribution", "Running Total", "% to Goal"],
    )?;

    for r in FIRST_TRACKING_ROW..=LAST_TRACKING_ROW {
        let running = if r == FIRST_TRACKING_ROW {
            format!("=$B$6+B{r}")
        } else {
            format!("=C{}+B{r}", r - 1)
        };
        let row = r - 1;
        w.row(
            row,
            0,
            vec![
                CellValue::Empty,
                0.into(),
                f(running),
                f(format!("=C{r}/$B$7")),
            ],
        )?;
        w.border_at(row, 0)?;
        w.value_cell_at(row, 1, ValueKind::Money)?;
        w.value_cell_at(row, 2, ValueKind::Money)?;
        w.value_cell_at(row, 3, ValueKind::Percent)?;
    }

    w.widths(&[("A", 20.0), ("B", 15.0), ("C", 15.0), ("D", 12.0)])
}
