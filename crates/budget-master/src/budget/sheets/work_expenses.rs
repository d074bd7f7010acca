//! Work Expenses: out-of-pocket costs awaiting reimbursement

use budget_master_core::{CellValue, Result};

use crate::budget::presets::{self, ValueKind};
use crate::budget::writer::SheetWriter;

pub const NAME: &str = "Work Expenses";

const LOG_COLUMNS: [&str; 7] = [
    "Date",
    "Description",
    "Category",
    "Amount",
    "Receipt?",
    "Status",
    "Expected Reimb.",
];

/// Column holding the amount (0-based)
const AMOUNT_COL: u16 = 3;

/// Blank bordered rows left for new entries
const BLANK_ROWS: u32 = 3;

struct Expense {
    date: &'static str,
    description: &'static str,
    category: &'static str,
    amount: f64,
    receipt: &'static str,
    status: &'static str,
    expected: &'static str,
}

const SAMPLE_EXPENSES: [Expense; 2] = [
    Expense {
        date: "01/15/2025",
        description: "Client lunch - Project X",
        category: "Meals",
        amount: 45.0,
        receipt: "Yes",
        status: "Pending",
        expected: "02/01/2025",
    },
    Expense {
        date: "01/18/2025",
        description: "Uber to client site",
        category: "Travel",
        amount: 28.5,
        receipt: "Yes",
        status: "Pending",
        expected: "02/01/2025",
    },
];

pub fn build(w: &mut SheetWriter<'_>) -> Result<()> {
    w.set("A1", "🏢 WORK EXPENSE FLOAT TRACKER")?;
    w.font("A1", presets::title())?;
    w.merge("A1:G1")?;

    w.set("A3", "Track expenses you pay out-of-pocket for work reimbursement")?;
    w.font("A3", presets::note(presets::NOTE_GRAY))?;
    w.merge("A3:G3")?;

    w.set("A5", "CURRENT FLOAT SUMMARY")?;
    w.header("A5")?;
    w.merge("A5:C5")?;

    w.set("A6", "Total Outstanding:")?;
    w.formula("B6", r#"=SUMIF(F10:F100,"Pending",D10:D100)"#)?;
    w.value_cell("B6", ValueKind::Money)?;
    w.fill("B6", presets::YELLOW_FILL)?;

    w.set("A7", "Expected Reimbursement Date:")?;
    w.formula("B7", "=MIN(G10:G100)")?;
    w.number_format("B7", presets::SHORT_DATE_FORMAT)?;

    expense_log(w)?;

    w.set("A17", "FLOAT IMPACT ON BUDGET")?;
    w.header("A17")?;
    w.merge("A17:C17")?;

    w.set("A18", "Max Safe Float (1 paycheck):")?;
    w.set("B18", 1920)?;
    w.value_cell("B18", ValueKind::Money)?;

    w.set("A19", "Current Float:")?;
    w.formula("B19", "=B6")?;
    w.value_cell("B19", ValueKind::Money)?;

    w.set("A20", "Remaining Float Capacity:")?;
    w.formula("B20", "=B18-B19")?;
    w.value_cell("B20", ValueKind::Money)?;

    w.set(
        "A22",
        "⚠️ If float > 1 paycheck, delay non-essential spending until reimbursed",
    )?;
    w.font("A22", presets::note(presets::WARNING_RED))?;
    w.merge("A22:G22")?;

    w.widths(&[
        ("A", 15.0),
        ("B", 25.0),
        ("C", 12.0),
        ("D", 12.0),
        ("E", 10.0),
        ("F", 12.0),
        ("G", 18.0),
    ])
}

fn expense_log(w: &mut SheetWriter<'_>) -> Result<()> {
    w.header_row(8, 0, &LOG_COLUMNS)?;

    let samples = SAMPLE_EXPENSES.iter().map(|e| -> Vec<CellValue> {
        vec![
            e.date.into(),
            e.description.into(),
            e.category.into(),
            e.amount.into(),
            e.receipt.into(),
            e.status.into(),
            e.expected.into(),
        ]
    });
    let blanks = (0..BLANK_ROWS).map(|_| vec![CellValue::Empty; LOG_COLUMNS.len()]);

    for (row, values) in (9..).zip(samples.chain(blanks)) {
        let has_amount = values
            .get(usize::from(AMOUNT_COL))
            .is_some_and(|v| !v.is_empty());
        w.row(row, 0, values)?;
        for col in 0..LOG_COLUMNS.len() as u16 {
            w.border_at(row, col)?;
        }
        if has_amount {
            w.number_format_at(row, AMOUNT_COL, presets::MONEY_FORMAT)?;
        }
    }
    Ok(())
}
