//! Worksheet parts: cells, formulas, column widths, merges.

use crate::{cell_element, elements, read_part, workbook_with, write_to_bytes};
use budget_master_core::{BorderLineStyle, BorderStyle, CellRange, Color, Style, Worksheet};
use pretty_assertions::assert_eq;

fn sheet_xml(sheet: Worksheet) -> String {
    let bytes = write_to_bytes(&workbook_with(vec![sheet]));
    read_part(&bytes, "xl/worksheets/sheet1.xml")
}

#[test]
fn test_values_and_formulas() {
    let mut sheet = Worksheet::new("Monthly Budget");
    sheet.set_cell_value("A4", "Paycheck 1").unwrap();
    sheet.set_cell_value("B4", 2080).unwrap();
    sheet.set_cell_value("B5", 0.6).unwrap();
    sheet.set_cell_formula("B16", "=SUM(B4:B15)").unwrap();
    sheet
        .set_cell_formula("D7", r#"=SUMIF(F10:F100,"Pending",D10:D100)"#)
        .unwrap();

    let xml = sheet_xml(sheet);

    assert!(xml.contains(r#"<c r="A4" t="inlineStr"><is><t>Paycheck 1</t></is></c>"#));
    assert!(xml.contains(r#"<c r="B4"><v>2080</v></c>"#));
    assert!(xml.contains(r#"<c r="B5"><v>0.6</v></c>"#));
    assert!(xml.contains(r#"<c r="B16"><f>SUM(B4:B15)</f></c>"#));
    assert!(xml.contains(r#"<f>SUMIF(F10:F100,&quot;Pending&quot;,D10:D100)</f>"#));
}

#[test]
fn test_rows_are_sparse_and_ordered() {
    let mut sheet = Worksheet::new("Sparse");
    sheet.set_cell_value("C9", "late").unwrap();
    sheet.set_cell_value("A2", "early").unwrap();
    sheet.set_cell_value("B2", "next").unwrap();

    let xml = sheet_xml(sheet);

    let rows: Vec<String> = elements(&xml, "row")
        .into_iter()
        .map(|attrs| attrs["r"].clone())
        .collect();
    assert_eq!(rows, vec!["2", "9"]);

    let cells: Vec<String> = elements(&xml, "c")
        .into_iter()
        .map(|attrs| attrs["r"].clone())
        .collect();
    assert_eq!(cells, vec!["A2", "B2", "C9"]);

    assert_eq!(elements(&xml, "dimension")[0]["ref"], "A2:C9");
}

#[test]
fn test_empty_sheet_dimension() {
    let xml = sheet_xml(Worksheet::new("Blank"));

    assert_eq!(elements(&xml, "dimension")[0]["ref"], "A1");
    assert!(elements(&xml, "c").is_empty());
    assert!(elements(&xml, "cols").is_empty());
}

#[test]
fn test_leading_whitespace_is_preserved() {
    let mut sheet = Worksheet::new("Notes");
    sheet.set_cell_value("A1", "  - indented").unwrap();

    let xml = sheet_xml(sheet);

    assert!(xml.contains(r#"<t xml:space="preserve">  - indented</t>"#));
}

#[test]
fn test_column_widths() {
    let mut sheet = Worksheet::new("Dashboard");
    sheet.set_column_width(0, 35.0).unwrap();
    sheet.set_column_width(1, 15.0).unwrap();
    sheet.set_column_width(4, 12.5).unwrap();

    let xml = sheet_xml(sheet);

    let cols = elements(&xml, "col");
    assert_eq!(cols.len(), 3);
    assert_eq!(cols[0]["min"], "1");
    assert_eq!(cols[0]["max"], "1");
    assert_eq!(cols[0]["width"], "35");
    assert_eq!(cols[0]["customWidth"], "1");
    assert_eq!(cols[1]["width"], "15");
    assert_eq!(cols[2]["min"], "5");
    assert_eq!(cols[2]["width"], "12.5");

    // cols must precede sheetData
    assert!(xml.find("<cols>").unwrap() < xml.find("<sheetData>").unwrap());
}

#[test]
fn test_merge_cells_written_with_both_corners() {
    let mut sheet = Worksheet::new("Money Rules");
    sheet.set_cell_value("A1", "MONEY RULES").unwrap();
    sheet.merge_cells(&CellRange::parse("A1:H1").unwrap()).unwrap();
    sheet.set_cell_value("A22", "note").unwrap();
    sheet.merge_cells(&CellRange::parse("A22:D22").unwrap()).unwrap();

    let xml = sheet_xml(sheet);

    let merges: Vec<String> = elements(&xml, "mergeCell")
        .into_iter()
        .map(|attrs| attrs["ref"].clone())
        .collect();
    assert_eq!(merges, vec!["A1:H1", "A22:D22"]);
    assert_eq!(elements(&xml, "mergeCells")[0]["count"], "2");
}

#[test]
fn test_merged_border_reaches_covered_cells() {
    let boxed = Style::new().border(BorderStyle::all(BorderLineStyle::Thin, Color::BLACK));
    let mut sheet = Worksheet::new("Boxed");
    sheet.set_cell_value("A2", "Roth IRA").unwrap();
    sheet.set_cell_style("A2", &boxed).unwrap();
    sheet.merge_cells(&CellRange::parse("A2:C2").unwrap()).unwrap();

    let xml = sheet_xml(sheet);

    // Covered cells carry a style but no value
    for cell_ref in ["B2", "C2"] {
        let attrs = cell_element(&xml, cell_ref).expect("style-only cell");
        assert!(attrs.contains_key("s"), "{} should be styled", cell_ref);
        assert!(!attrs.contains_key("t"), "{} should hold no value", cell_ref);
    }
    assert!(xml.contains(r#"<c r="C2" s="#));
}

#[test]
fn test_unstyled_empty_cells_are_skipped() {
    let mut sheet = Worksheet::new("Gaps");
    sheet.set_cell_value("A1", "x").unwrap();
    sheet.set_cell_style("B1", &Style::default()).unwrap();

    let xml = sheet_xml(sheet);

    assert!(cell_element(&xml, "B1").is_none());
}
