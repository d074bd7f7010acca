//! Paycheck Tracker: standard split of each paycheck and a log of actual pay

use budget_master_core::{CellValue, Result};

use crate::budget::presets::{self, ValueKind};
use crate::budget::writer::SheetWriter;

pub const NAME: &str = "Paycheck Tracker";

/// How a typical net paycheck is divided
const ALLOCATIONS: [(&str, f64, &str); 6] = [
    (
        "Fixed Expenses (half monthly)",
        1110.0,
        "=($1815+$120+$51+$50)/2 + $145/2",
    ),
    ("Roth IRA", 291.67, "$583.33/2 per paycheck"),
    ("Emergency Fund", 425.0, "$850/2 per paycheck"),
    ("Brokerage", 50.0, "$100/2 per paycheck"),
    ("Fun Money", 75.0, "$150/2 per paycheck - HARD LIMIT"),
    ("Buffer/CC if applicable", 0.0, "Adjust as needed"),
];

const LOG_COLUMNS: [&str; 8] = [
    "Pay Date",
    "Gross",
    "Net",
    "Hours",
    "Roth IRA",
    "E-Fund",
    "Brokerage",
    "Notes",
];

/// Log columns shown as currency (0-based)
const MONEY_COLUMNS: [u16; 5] = [1, 2, 4, 5, 6];

/// Paycheck log rows (1-based, inclusive): one sample then blanks
const SAMPLE_ROW: u32 = 17;
const LAST_LOG_ROW: u32 = 29;

pub fn build(w: &mut SheetWriter<'_>) -> Result<()> {
    w.set("A1", "📅 PAYCHECK-BY-PAYCHECK TRACKER")?;
    w.font("A1", presets::title())?;
    w.merge("A1:H1")?;

    w.set("A3", "Track each paycheck and how you allocate it")?;
    w.font("A3", presets::note(presets::NOTE_GRAY))?;

    w.set("A5", "STANDARD PAYCHECK ALLOCATION (~$1,920 net)")?;
    w.header("A5")?;
    w.merge("A5:C5")?;

    w.subheader_row(5, 0, &["Category", "Amount", "Notes"])?;
    for (row, (category, amount, note)) in (6..).zip(ALLOCATIONS) {
        // The note reads like a formula but is an explanation
        w.row(row, 0, vec![category.into(), amount.into(), CellValue::string(note)])?;
        w.border_at(row, 0)?;
        w.value_cell_at(row, 1, ValueKind::Money)?;
        w.border_at(row, 2)?;
    }

    w.set("A13", "TOTAL:")?;
    w.formula("B13", "=SUM(B7:B12)")?;
    w.value_cell("B13", ValueKind::Money)?;
    w.font("B13", presets::bold())?;

    paycheck_log(w)?;

    w.widths(&[
        ("A", 12.0),
        ("B", 12.0),
        ("C", 12.0),
        ("D", 8.0),
        ("E", 12.0),
        ("F", 12.0),
        ("G", 12.0),
        ("H", 20.0),
    ])
}

fn paycheck_log(w: &mut SheetWriter<'_>) -> Result<()> {
    w.set("A15", "ACTUAL PAYCHECK LOG")?;
    w.header("A15")?;
    w.merge("A15:H15")?;

    w.subheader_row(SAMPLE_ROW - 2, 0, &LOG_COLUMNS)?;

    let sample_row = SAMPLE_ROW - 1;
    w.row(
        sample_row,
        0,
        vec![
            "01/24/2025".into(),
            3250.01.into(),
            2162.76.into(),
            96.into(),
            291.67.into(),
            375.into(),
            50.into(),
            "Extra hours".into(),
        ],
    )?;
    for col in MONEY_COLUMNS {
        w.number_format_at(sample_row, col, presets::MONEY_FORMAT)?;
    }

    for row in sample_row..LAST_LOG_ROW {
        for col in 0..LOG_COLUMNS.len() as u16 {
            w.border_at(row, col)?;
        }
    }
    Ok(())
}
