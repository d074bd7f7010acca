//! Monthly Budget: fixed expenses and how the remainder is allocated

use budget_master_core::Result;

use crate::budget::presets::{self, ValueKind};
use crate::budget::writer::{f, SheetWriter};

pub const NAME: &str = "Monthly Budget";

const FIXED_EXPENSES: [(&str, f64, &str); 6] = [
    ("Rent", 1815.0, "Fixed"),
    ("Power", 120.0, "Estimate"),
    ("Internet", 51.16, "Fixed"),
    ("Gas (Utilities)", 50.0, "Estimate"),
    ("Groceries", 145.0, "Budget"),
    ("Credit Card Payment", 230.0, "4 months remaining"),
];

/// Monthly amounts drawn from what is left after fixed expenses
const ALLOCATIONS: [(&str, f64, &str); 5] = [
    ("Roth IRA", 583.33, "MAX IT - House + Retirement"),
    ("Emergency/House Fund", 850.0, "Target: $15k (faster!)"),
    ("Brokerage ($50 SPY/$50 QQQ)", 100.0, "Long-term wealth"),
    ("Fun/Variable Spending", 150.0, "HARD LIMIT"),
    ("Buffer (Unexpected)", 65.51, "Peace of mind"),
];

pub fn build(w: &mut SheetWriter<'_>) -> Result<()> {
    w.set("A1", "MONTHLY BUDGET PLANNER")?;
    w.font("A1", presets::title())?;
    w.merge("A1:E1")?;

    section_header(w, "A3", "MONTHLY INCOME", "A3:C3")?;
    w.set("A4", "Net Monthly Income (avg)")?;
    w.set("B4", 4160)?;
    w.set("C4", "Based on $1,920 x 26 / 12")?;
    w.value_cell("B4", ValueKind::Money)?;

    fixed_expenses(w)?;

    w.set("A16", "REMAINING AFTER FIXED")?;
    w.font("A16", presets::section_colored(12.0, presets::GOOD_GREEN))?;
    w.formula("B16", "=B4-B14")?;
    w.value_cell("B16", ValueKind::Money)?;
    w.font("B16", presets::section(12.0))?;
    w.fill("B16", presets::GREEN_FILL)?;

    allocations(w)?;

    w.set("A27", "BALANCE CHECK")?;
    w.font("A27", presets::section(12.0))?;
    w.formula("B27", "=B16-B25")?;
    w.value_cell("B27", ValueKind::Money)?;
    w.set("C27", "← Should be $0 or close to it")?;

    w.widths(&[("A", 35.0), ("B", 15.0), ("C", 18.0), ("D", 25.0)])
}

fn section_header(w: &mut SheetWriter<'_>, address: &str, text: &str, range: &str) -> Result<()> {
    w.set(address, text)?;
    w.header(address)?;
    w.merge(range)
}

fn fixed_expenses(w: &mut SheetWriter<'_>) -> Result<()> {
    section_header(w, "A6", "FIXED EXPENSES (Non-Negotiable)", "A6:C6")?;
    w.subheader_row(6, 0, &["Expense", "Amount", "Notes"])?;

    for (row, (expense, amount, note)) in (7..).zip(FIXED_EXPENSES) {
        w.row(row, 0, vec![expense.into(), amount.into(), note.into()])?;
        w.border_at(row, 0)?;
        w.value_cell_at(row, 1, ValueKind::Money)?;
        w.border_at(row, 2)?;
    }

    total(w, 14, "TOTAL FIXED", "=SUM(B8:B13)")
}

fn allocations(w: &mut SheetWriter<'_>) -> Result<()> {
    section_header(w, "A18", "SAVINGS ALLOCATION (From Remaining)", "A18:D18")?;
    w.subheader_row(18, 0, &["Category", "Monthly", "% of Remaining", "Purpose"])?;

    for (row, (category, amount, purpose)) in (19..).zip(ALLOCATIONS) {
        let r = row + 1;
        w.row(
            row,
            0,
            vec![
                category.into(),
                amount.into(),
                f(format!("=B{r}/$B$16")),
                purpose.into(),
            ],
        )?;
        w.border_at(row, 0)?;
        w.value_cell_at(row, 1, ValueKind::Money)?;
        w.value_cell_at(row, 2, ValueKind::Percent)?;
        w.border_at(row, 3)?;
    }

    total(w, 25, "TOTAL ALLOCATED", "=SUM(B20:B24)")
}

/// Bold label with a bold money total beside it, on a 1-based row
fn total(w: &mut SheetWriter<'_>, row: u32, label: &str, formula: &str) -> Result<()> {
    let (label_cell, total_cell) = (format!("A{row}"), format!("B{row}"));
    w.set(&label_cell, label)?;
    w.font(&label_cell, presets::bold())?;
    w.formula(&total_cell, formula)?;
    w.value_cell(&total_cell, ValueKind::Money)?;
    w.font(&total_cell, presets::bold())
}

#[cfg(test)]
mod tests {
    use super::*;
    use budget_master_core::{FillStyle, Worksheet};

    fn built() -> Worksheet {
        let mut sheet = Worksheet::new(NAME);
        build(&mut SheetWriter::new(&mut sheet)).unwrap();
        sheet
    }

    #[test]
    fn test_totals_and_balance() {
        let sheet = built();

        assert_eq!(sheet.get_formula("B14").unwrap(), Some("=SUM(B8:B13)"));
        assert_eq!(sheet.get_formula("B16").unwrap(), Some("=B4-B14"));
        assert_eq!(sheet.get_formula("B25").unwrap(), Some("=SUM(B20:B24)"));
        assert_eq!(sheet.get_formula("B27").unwrap(), Some("=B16-B25"));
    }

    #[test]
    fn test_allocation_shares_are_percent() {
        let sheet = built();

        for row in 20..=24 {
            let address = format!("C{row}");
            assert_eq!(
                sheet.get_formula(&address).unwrap(),
                Some(format!("=B{row}/$B$16").as_str())
            );
            assert!(sheet
                .cell_style(&address)
                .unwrap()
                .unwrap()
                .number_format
                .is_percent());
        }
    }

    #[test]
    fn test_remaining_highlight() {
        let sheet = built();
        let style = sheet.cell_style("B16").unwrap().unwrap();

        assert_eq!(style.fill, FillStyle::solid(presets::GREEN_FILL));
        assert!(style.font.bold);
        assert_eq!(style.font.size, 12.0);
        assert_eq!(style.number_format.format_string(), presets::MONEY_FORMAT);
    }

    #[test]
    fn test_section_header_box_spans_merge() {
        let sheet = built();

        // B3/C3 are covered by the merge and carry the header outline
        assert!(sheet.get_value("B3").unwrap().is_empty());
        let right = sheet.cell_style("C3").unwrap().unwrap();
        assert!(right.border.right.is_some());
        assert!(right.border.top.is_some());
        assert!(right.border.left.is_none());
    }
}
