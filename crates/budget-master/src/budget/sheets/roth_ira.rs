//! Roth IRA Tracker: monthly contributions toward the annual limit

use budget_master_core::Result;

use crate::budget::presets::{self, ValueKind};
use crate::budget::writer::{f, SheetWriter};
use crate::budget::{MONTHS_PER_YEAR, ROTH_IRA_LIMIT};

pub const NAME: &str = "Roth IRA Tracker";

const REASONS: [&str; 5] = [
    "✓ Tax-FREE growth forever - never pay taxes on gains",
    "✓ First $10k can go toward house (first-time homebuyer exception)",
    "✓ Can withdraw CONTRIBUTIONS anytime tax/penalty free",
    "✓ $7,000/year limit - USE IT OR LOSE IT (can't make up later)",
    "✓ At your age, compound growth is your superpower",
];

const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Contribution that reaches the limit in twelve equal months
const MONTHLY_TARGET: f64 = 583.33;

/// First month-table row (1-based)
const FIRST_MONTH_ROW: u32 = 12;

pub fn build(w: &mut SheetWriter<'_>) -> Result<()> {
    w.set("A1", "🎯 ROTH IRA TRACKER - MAX THAT ROTH!")?;
    w.font("A1", presets::title())?;
    w.merge("A1:E1")?;

    w.set("A3", "WHY MAXING ROTH IRA IS IMPORTANT:")?;
    w.font("A3", presets::section(12.0))?;
    w.merge("A3:E3")?;

    for (r, reason) in (4..).zip(REASONS) {
        w.set(&format!("A{r}"), reason)?;
        w.merge(&format!("A{r}:E{r}"))?;
    }

    w.set("A10", "2025 CONTRIBUTION PROGRESS")?;
    w.font("A10", presets::section(14.0))?;
    w.merge("A10:E10")?;

    w.header_row(
        FIRST_MONTH_ROW - 2,
        0,
        &["Month", "Contribution", "YTD Total", "Remaining", "% Complete"],
    )?;

    for (r, month) in (FIRST_MONTH_ROW..).zip(MONTHS) {
        let contribution = if r == FIRST_MONTH_ROW { MONTHLY_TARGET } else { 0.0 };
        let ytd = if r == FIRST_MONTH_ROW {
            format!("=B{r}")
        } else {
            format!("=C{}+B{r}", r - 1)
        };
        let row = r - 1;
        w.row(
            row,
            0,
            vec![
                month.into(),
                contribution.into(),
                f(ytd),
                f(format!("={ROTH_IRA_LIMIT}-C{r}")),
                f(format!("=C{r}/{ROTH_IRA_LIMIT}")),
            ],
        )?;
        w.border_at(row, 0)?;
        for col in 1..4 {
            w.value_cell_at(row, col, ValueKind::Money)?;
        }
        w.value_cell_at(row, 4, ValueKind::Percent)?;
    }

    let last_month_row = FIRST_MONTH_ROW + MONTHS_PER_YEAR - 1;

    w.set("A25", "Target Monthly Contribution:")?;
    w.set("B25", MONTHLY_TARGET)?;
    w.value_cell("B25", ValueKind::Money)?;
    w.set("C25", "= $7,000 / 12 months")?;

    w.set("A26", "Annual Limit (2025):")?;
    w.set("B26", ROTH_IRA_LIMIT)?;
    w.value_cell("B26", ValueKind::Money)?;

    w.set("A27", "Your Total Contributed:")?;
    w.formula("B27", &format!("=C{last_month_row}"))?;
    w.value_cell("B27", ValueKind::Money)?;
    w.font("B27", presets::bold())?;

    w.widths(&[
        ("A", 25.0),
        ("B", 15.0),
        ("C", 15.0),
        ("D", 15.0),
        ("E", 15.0),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use budget_master_core::{CellRange, CellValue, Worksheet};

    fn built() -> Worksheet {
        let mut sheet = Worksheet::new(NAME);
        build(&mut SheetWriter::new(&mut sheet)).unwrap();
        sheet
    }

    #[test]
    fn test_reasons_are_merged_rows() {
        let sheet = built();

        for r in 4..=8u32 {
            let range = CellRange::parse(&format!("A{r}:E{r}")).unwrap();
            assert!(sheet.merged_regions().contains(&range), "row {}", r);
        }
    }

    #[test]
    fn test_running_totals() {
        let sheet = built();

        assert_eq!(sheet.get_value("B12").unwrap(), CellValue::Number(583.33));
        assert_eq!(sheet.get_value("B13").unwrap(), CellValue::Number(0.0));
        assert_eq!(sheet.get_formula("C12").unwrap(), Some("=B12"));
        assert_eq!(sheet.get_formula("C13").unwrap(), Some("=C12+B13"));
        assert_eq!(sheet.get_formula("C23").unwrap(), Some("=C22+B23"));
        assert_eq!(sheet.get_formula("D23").unwrap(), Some("=7000-C23"));
        assert_eq!(sheet.get_formula("E23").unwrap(), Some("=C23/7000"));
        assert_eq!(sheet.get_value("A23").unwrap(), CellValue::string("December"));
    }

    #[test]
    fn test_summary_note_is_text() {
        let sheet = built();

        assert_eq!(
            sheet.get_value("C25").unwrap(),
            CellValue::string("= $7,000 / 12 months")
        );
        assert_eq!(sheet.get_formula("B27").unwrap(), Some("=C23"));
        assert_eq!(sheet.get_value("B26").unwrap(), CellValue::Number(7000.0));
    }
}
