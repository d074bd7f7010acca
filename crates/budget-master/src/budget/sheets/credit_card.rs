//! Credit Card Payoff: fixed monthly payments until the balance is gone

use budget_master_core::Result;

use crate::budget::presets::{self, ValueKind};
use crate::budget::writer::{f, SheetWriter};
use crate::budget::DAYS_PER_MONTH;

pub const NAME: &str = "Credit Card Payoff";

const TOTAL_DEBT: u32 = 920;
const MONTHLY_PAYMENT: u32 = 230;

/// Where the freed-up payment goes once the card is paid off
const REDIRECT_OPTIONS: [(&str, &str); 3] = [
    ("Emergency Fund", "Reach $15k faster"),
    ("Brokerage", "More investing power"),
    ("Fun Money", "Reward yourself!"),
];

pub fn build(w: &mut SheetWriter<'_>) -> Result<()> {
    w.set("A1", "💳 CREDIT CARD DEBT PAYOFF TRACKER")?;
    w.font("A1", presets::title())?;
    w.merge("A1:E1")?;

    w.set("A3", "DEBT SUMMARY")?;
    w.header("A3")?;
    w.merge("A3:C3")?;

    w.set("A4", "Total Debt (Enter Here):")?;
    w.set("B4", TOTAL_DEBT)?;
    w.value_cell("B4", ValueKind::Money)?;
    w.fill("B4", presets::YELLOW_FILL)?;

    w.set("A5", "Monthly Payment:")?;
    w.set("B5", MONTHLY_PAYMENT)?;
    w.value_cell("B5", ValueKind::Money)?;

    w.set("A6", "Months to Payoff:")?;
    w.formula("B6", "=CEILING(B4/B5,1)")?;
    w.value_cell("B6", ValueKind::Plain)?;

    w.set("A7", "Target Payoff Date:")?;
    w.formula("B7", &format!("=TODAY()+B6*{DAYS_PER_MONTH}"))?;
    w.number_format("B7", presets::MONTH_YEAR_FORMAT)?;

    schedule(w)?;

    w.set("A16", format!("🎉 AFTER PAYOFF - REDIRECT ${MONTHLY_PAYMENT}/MONTH TO:"))?;
    w.font("A16", presets::section_colored(12.0, presets::GOOD_GREEN))?;
    w.merge("A16:E16")?;

    for (row, (option, note)) in (16..).zip(REDIRECT_OPTIONS) {
        w.row(row, 0, vec![format!("• {option}").into(), note.into()])?;
        w.font_at(row, 1, presets::note(presets::NOTE_GRAY))?;
    }

    w.widths(&[
        ("A", 35.0),
        ("B", 15.0),
        ("C", 20.0),
        ("D", 10.0),
        ("E", 15.0),
    ])
}

/// One row per month until the debt is cleared
fn schedule(w: &mut SheetWriter<'_>) -> Result<()> {
    w.set("A9", "PAYMENT SCHEDULE")?;
    w.header("A9")?;
    w.merge("A9:E9")?;

    w.subheader_row(
        9,
        0,
        &["Month", "Payment", "Remaining Balance", "Paid?", "Date Paid"],
    )?;

    let months = TOTAL_DEBT.div_ceil(MONTHLY_PAYMENT);
    for month in 1..=months {
        let r = month + 10;
        let remaining = if month == 1 {
            format!("=$B$4-B{r}")
        } else {
            format!("=C{}-B{r}", r - 1)
        };
        let row = r - 1;
        w.row(
            row,
            0,
            vec![
                format!("Month {month}").into(),
                MONTHLY_PAYMENT.into(),
                f(remaining),
                "☐".into(),
                "".into(),
            ],
        )?;
        w.border_at(row, 0)?;
        w.value_cell_at(row, 1, ValueKind::Money)?;
        w.value_cell_at(row, 2, ValueKind::Money)?;
        w.border_at(row, 3)?;
        w.border_at(row, 4)?;
    }
    Ok(())
}
