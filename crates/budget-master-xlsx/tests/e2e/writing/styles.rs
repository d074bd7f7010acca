//! Style references from worksheet cells into styles.xml.

use crate::{cell_element, elements, read_part, workbook_with, write_to_bytes};
use budget_master_core::{
    BorderLineStyle, BorderStyle, Color, FontStyle, HorizontalAlignment, Style, VerticalAlignment,
    Worksheet,
};
use pretty_assertions::assert_eq;

fn header() -> Style {
    Style::new()
        .font(FontStyle::new().with_bold(true).with_size(12.0).with_color(Color::WHITE))
        .fill_color(Color::rgb(0x2E, 0x75, 0xB6))
        .horizontal_alignment(HorizontalAlignment::Center)
        .vertical_alignment(VerticalAlignment::Center)
        .border(BorderStyle::all(BorderLineStyle::Thin, Color::BLACK))
}

fn money() -> Style {
    Style::new()
        .border(BorderStyle::all(BorderLineStyle::Thin, Color::BLACK))
        .horizontal_alignment(HorizontalAlignment::Right)
        .vertical_alignment(VerticalAlignment::Center)
        .number_format("\"$\"#,##0.00")
}

#[test]
fn test_cells_reference_shared_formats() {
    let mut budget = Worksheet::new("Monthly Budget");
    budget.set_cell_value("A3", "Income Source").unwrap();
    budget.set_cell_style("A3", &header()).unwrap();
    budget.set_cell_value("B4", 2080).unwrap();
    budget.set_cell_style("B4", &money()).unwrap();

    let mut expenses = Worksheet::new("Work Expenses");
    expenses.set_cell_value("A9", "Date").unwrap();
    expenses.set_cell_style("A9", &header()).unwrap();

    let bytes = write_to_bytes(&workbook_with(vec![budget, expenses]));
    let first = read_part(&bytes, "xl/worksheets/sheet1.xml");
    let second = read_part(&bytes, "xl/worksheets/sheet2.xml");

    let header_xf = cell_element(&first, "A3").unwrap()["s"].clone();
    let money_xf = cell_element(&first, "B4").unwrap()["s"].clone();
    assert_ne!(header_xf, money_xf);
    assert_eq!(cell_element(&second, "A9").unwrap()["s"], header_xf);

    let styles = read_part(&bytes, "xl/styles.xml");
    assert_eq!(elements(&styles, "cellXfs")[0]["count"], "3");

    let xfs = elements(&styles, "xf");
    // cellStyleXfs holds one entry ahead of cellXfs
    let money_entry = &xfs[1 + money_xf.parse::<usize>().unwrap()];
    assert_eq!(money_entry["numFmtId"], "164");
    assert_eq!(money_entry["applyNumberFormat"], "1");

    let formats = elements(&styles, "numFmt");
    assert_eq!(formats.len(), 1);
    assert_eq!(formats[0]["formatCode"], "\"$\"#,##0.00");
}

#[test]
fn test_styles_part_is_well_formed() {
    let mut sheet = Worksheet::new("Dashboard");
    sheet.set_cell_value("A1", "title").unwrap();
    sheet
        .set_cell_style("A1", &Style::new().bold(true).font_size(18.0))
        .unwrap();
    sheet.set_cell_value("A2", "note").unwrap();
    sheet
        .set_cell_style("A2", &Style::new().italic(true).font_color(Color::rgb(0x66, 0x66, 0x66)))
        .unwrap();

    let bytes = write_to_bytes(&workbook_with(vec![sheet]));
    let styles = read_part(&bytes, "xl/styles.xml");

    assert_eq!(elements(&styles, "fonts")[0]["count"], "3");
    assert_eq!(elements(&styles, "font").len(), 3);
    assert_eq!(elements(&styles, "fills")[0]["count"], "2");
    let patterns: Vec<String> = elements(&styles, "patternFill")
        .into_iter()
        .map(|attrs| attrs["patternType"].clone())
        .collect();
    assert_eq!(patterns, vec!["none", "gray125"]);
}
