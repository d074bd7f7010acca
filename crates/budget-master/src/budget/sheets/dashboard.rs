//! Dashboard: income, paycheck deductions, employer match and key ratios

use budget_master_core::{HorizontalAlignment, Result};

use crate::budget::presets::{self, ValueKind};
use crate::budget::writer::{f, SheetWriter};
use crate::budget::{EMPLOYER_MATCH_RATE, GROSS_SALARY, MONTHS_PER_YEAR, PAYCHECKS_PER_YEAR};

pub const NAME: &str = "Dashboard";

/// Per-paycheck amounts withheld before the net pay arrives
const DEDUCTIONS: [(&str, f64); 6] = [
    ("Roth 401(k) - Your 8%", 253.33),
    ("HSA", 126.67),
    ("Fed Withholding", 319.22),
    ("Fed Med/OASDI", 238.94),
    ("CA Withholding", 136.15),
    ("Disability Ins", 12.94),
];

pub fn build(w: &mut SheetWriter<'_>) -> Result<()> {
    w.merge("A1:H1")?;
    w.set("A1", "💰 BUDGET DASHBOARD - Joshua's Financial Command Center")?;
    w.font("A1", presets::title())?;
    w.align("A1", HorizontalAlignment::Center)?;

    income_summary(w)?;
    deductions(w)?;
    employer_match(w)?;
    key_stats(w)?;

    w.widths(&[
        ("A", 35.0),
        ("B", 15.0),
        ("C", 15.0),
        ("D", 15.0),
        ("F", 30.0),
        ("G", 15.0),
        ("H", 25.0),
    ])
}

fn income_summary(w: &mut SheetWriter<'_>) -> Result<()> {
    w.set("A3", "INCOME SUMMARY")?;
    w.font("A3", presets::section(14.0))?;
    w.merge("A3:D3")?;

    w.header_row(3, 0, &["Category", "Annual", "Monthly", "Per Paycheck"])?;

    let rows = [
        vec![
            "Gross Salary".into(),
            GROSS_SALARY.into(),
            f(format!("=B5/{MONTHS_PER_YEAR}")),
            f(format!("=B5/{PAYCHECKS_PER_YEAR}")),
        ],
        vec![
            "Net Pay (After Deductions)".into(),
            f(format!("=C6*{MONTHS_PER_YEAR}")),
            4160.into(),
            1920.into(),
        ],
    ];
    for (row, values) in (4..).zip(rows) {
        w.row(row, 0, values)?;
        bordered_money_row(w, row)?;
    }
    Ok(())
}

fn deductions(w: &mut SheetWriter<'_>) -> Result<()> {
    w.set("A8", "AUTOMATIC PAYCHECK DEDUCTIONS (Already Deducted)")?;
    w.font("A8", presets::section(14.0))?;
    w.merge("A8:D8")?;

    w.header_row(8, 0, &["Deduction", "Per Paycheck", "Monthly", "Annual"])?;

    for (row, (label, amount)) in (9..).zip(DEDUCTIONS) {
        let r = row + 1;
        w.row(
            row,
            0,
            vec![
                label.into(),
                amount.into(),
                f(format!("=B{r}*{PAYCHECKS_PER_YEAR}/{MONTHS_PER_YEAR}")),
                f(format!("=B{r}*{PAYCHECKS_PER_YEAR}")),
            ],
        )?;
        bordered_money_row(w, row)?;
    }

    w.row(
        15,
        0,
        vec![
            "TOTAL DEDUCTIONS".into(),
            f("=SUM(B10:B15)"),
            f("=SUM(C10:C15)"),
            f("=SUM(D10:D15)"),
        ],
    )?;
    bordered_money_row(w, 15)?;
    for col in 0..4 {
        w.font_at(15, col, presets::bold())?;
    }
    Ok(())
}

fn employer_match(w: &mut SheetWriter<'_>) -> Result<()> {
    w.set("A18", "🎁 FREE MONEY (Employer Contributions)")?;
    w.font("A18", presets::section_colored(14.0, presets::GOOD_GREEN))?;
    w.merge("A18:D18")?;

    w.header_row(18, 0, &["Benefit", "Per Paycheck", "Monthly", "Annual"])?;

    w.row(
        19,
        0,
        vec![
            "Employer 401(k) Match (8%)".into(),
            f(format!(
                "={GROSS_SALARY}*{EMPLOYER_MATCH_RATE}/{PAYCHECKS_PER_YEAR}"
            )),
            f(format!("=B20*{PAYCHECKS_PER_YEAR}/{MONTHS_PER_YEAR}")),
            f(format!("=B20*{PAYCHECKS_PER_YEAR}")),
        ],
    )?;
    bordered_money_row(w, 19)?;
    for col in 0..4 {
        w.fill_at(19, col, presets::GREEN_FILL)?;
    }
    Ok(())
}

fn key_stats(w: &mut SheetWriter<'_>) -> Result<()> {
    w.set("F3", "KEY STATS")?;
    w.font("F3", presets::section(14.0))?;
    w.merge("F3:H3")?;

    let stats = [
        (
            "Total Retirement Savings/Year",
            "=D10+D11+D20".to_string(),
            ValueKind::Money,
            "(401k + HSA + Employer)",
        ),
        (
            "Retirement % of Gross",
            format!("=F4/{GROSS_SALARY}"),
            ValueKind::Percent,
            "",
        ),
        (
            "Effective Tax Rate",
            format!("=(D12+D14)/{GROSS_SALARY}"),
            ValueKind::Percent,
            "",
        ),
        (
            "Take-Home Rate",
            format!("=C6*{MONTHS_PER_YEAR}/{GROSS_SALARY}"),
            ValueKind::Percent,
            "",
        ),
    ];
    for (row, (label, formula, kind, note)) in (3..).zip(stats) {
        w.row(row, 5, vec![label.into(), f(formula), note.into()])?;
        w.font_at(row, 5, presets::bold())?;
        w.value_cell_at(row, 6, kind)?;
        w.font_at(row, 7, presets::note(presets::NOTE_GRAY))?;
    }
    Ok(())
}

/// Bordered label in column A, money cells in B through D
fn bordered_money_row(w: &mut SheetWriter<'_>, row: u32) -> Result<()> {
    w.value_cell_at(row, 0, ValueKind::Plain)?;
    for col in 1..4 {
        w.value_cell_at(row, col, ValueKind::Money)?;
    }
    Ok(())
}
