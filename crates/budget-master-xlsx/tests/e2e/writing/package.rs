//! Package structure: part list, workbook part, determinism and failures.

use crate::{elements, part_names, read_part, workbook_with, write_to_bytes};
use budget_master_core::{Workbook, Worksheet};
use budget_master_xlsx::{XlsxError, XlsxWriter};
use pretty_assertions::assert_eq;
use std::io::Cursor;

fn two_sheets() -> Workbook {
    let mut dashboard = Worksheet::new("Dashboard");
    dashboard.set_cell_value("A1", "Overview").unwrap();
    let mut rules = Worksheet::new("Money Rules");
    rules.set_cell_value("A3", "Rule").unwrap();
    workbook_with(vec![dashboard, rules])
}

#[test]
fn test_package_parts_in_order() {
    let bytes = write_to_bytes(&two_sheets());

    assert_eq!(
        part_names(&bytes),
        vec![
            "[Content_Types].xml",
            "_rels/.rels",
            "xl/workbook.xml",
            "xl/_rels/workbook.xml.rels",
            "xl/styles.xml",
            "xl/worksheets/sheet1.xml",
            "xl/worksheets/sheet2.xml",
        ]
    );
}

#[test]
fn test_content_types_list_every_sheet() {
    let bytes = write_to_bytes(&two_sheets());
    let xml = read_part(&bytes, "[Content_Types].xml");

    let overrides: Vec<String> = elements(&xml, "Override")
        .into_iter()
        .map(|attrs| attrs["PartName"].clone())
        .collect();
    assert_eq!(
        overrides,
        vec![
            "/xl/workbook.xml",
            "/xl/styles.xml",
            "/xl/worksheets/sheet1.xml",
            "/xl/worksheets/sheet2.xml",
        ]
    );
}

#[test]
fn test_workbook_part_sheet_order_and_rels() {
    let bytes = write_to_bytes(&two_sheets());
    let workbook_xml = read_part(&bytes, "xl/workbook.xml");

    let sheets = elements(&workbook_xml, "sheet");
    assert_eq!(sheets.len(), 2);
    assert_eq!(sheets[0]["name"], "Dashboard");
    assert_eq!(sheets[0]["sheetId"], "1");
    assert_eq!(sheets[0]["r:id"], "rId1");
    assert_eq!(sheets[1]["name"], "Money Rules");
    assert_eq!(sheets[1]["r:id"], "rId2");

    let rels_xml = read_part(&bytes, "xl/_rels/workbook.xml.rels");
    let targets: Vec<String> = elements(&rels_xml, "Relationship")
        .into_iter()
        .map(|attrs| format!("{}={}", attrs["Id"], attrs["Target"]))
        .collect();
    assert_eq!(
        targets,
        vec![
            "rId1=worksheets/sheet1.xml",
            "rId2=worksheets/sheet2.xml",
            "rId3=styles.xml",
        ]
    );
}

#[test]
fn test_sheet_names_are_escaped() {
    let wb = workbook_with(vec![Worksheet::new("Fun & Games")]);
    let bytes = write_to_bytes(&wb);
    let xml = read_part(&bytes, "xl/workbook.xml");

    assert!(xml.contains(r#"name="Fun &amp; Games""#));
    assert_eq!(elements(&xml, "sheet")[0]["name"], "Fun & Games");
}

#[test]
fn test_calc_on_open_flag() {
    let mut wb = two_sheets();
    let xml = read_part(&write_to_bytes(&wb), "xl/workbook.xml");
    let calc = elements(&xml, "calcPr");
    assert_eq!(calc.len(), 1);
    assert_eq!(calc[0]["fullCalcOnLoad"], "1");

    wb.settings_mut().calc_on_open = false;
    let xml = read_part(&write_to_bytes(&wb), "xl/workbook.xml");
    assert!(elements(&xml, "calcPr").is_empty());
}

#[test]
fn test_output_is_deterministic() {
    let wb = two_sheets();
    let first = write_to_bytes(&wb);
    let second = write_to_bytes(&wb);

    assert!(first.starts_with(b"PK"));
    assert_eq!(first, second);
}

#[test]
fn test_empty_workbook_is_rejected() {
    let mut buf = Cursor::new(Vec::new());
    let err = XlsxWriter::write(&Workbook::new(), &mut buf).unwrap_err();

    assert!(matches!(err, XlsxError::InvalidWorkbook(_)), "{:?}", err);
}

#[test]
fn test_write_file_round_trips_bytes() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("budget.xlsx");
    let wb = two_sheets();

    XlsxWriter::write_file(&wb, &path).unwrap();

    assert_eq!(std::fs::read(&path).unwrap(), write_to_bytes(&wb));
}

#[test]
fn test_write_file_overwrites_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("budget.xlsx");
    std::fs::write(&path, b"stale contents that are longer than nothing").unwrap();

    XlsxWriter::write_file(&two_sheets(), &path).unwrap();

    assert!(std::fs::read(&path).unwrap().starts_with(b"PK"));
}

#[test]
fn test_write_file_to_missing_directory() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("no-such-dir").join("budget.xlsx");

    let err = XlsxWriter::write_file(&two_sheets(), &path).unwrap_err();

    match err {
        XlsxError::Create { path: failed, .. } => assert_eq!(failed, path),
        other => panic!("expected a create error, got {:?}", other),
    }
    assert!(!path.exists());
}
