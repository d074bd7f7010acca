//! Common utilities for E2E tests.

use std::collections::HashMap;
use std::io::{Cursor, Read};

use budget_master_core::{Workbook, Worksheet};
use budget_master_xlsx::XlsxWriter;
use quick_xml::events::Event;
use quick_xml::Reader;

/// Workbook holding the given sheets, in order
pub fn workbook_with(sheets: Vec<Worksheet>) -> Workbook {
    let mut workbook = Workbook::new();
    for sheet in sheets {
        workbook
            .add_existing_worksheet(sheet)
            .expect("sheet should be accepted");
    }
    workbook
}

/// Serialize a workbook into an in-memory package
pub fn write_to_bytes(workbook: &Workbook) -> Vec<u8> {
    let mut buf = Cursor::new(Vec::new());
    XlsxWriter::write(workbook, &mut buf).expect("write should succeed");
    buf.into_inner()
}

/// Names of the package entries in archive order
pub fn part_names(bytes: &[u8]) -> Vec<String> {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).expect("valid zip");
    (0..archive.len())
        .map(|i| archive.by_index(i).expect("entry").name().to_string())
        .collect()
}

/// Text content of one package entry
pub fn read_part(bytes: &[u8], name: &str) -> String {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).expect("valid zip");
    let mut file = archive
        .by_name(name)
        .unwrap_or_else(|_| panic!("missing part {}", name));
    let mut text = String::new();
    file.read_to_string(&mut text).expect("utf-8 part");
    text
}

/// Attributes of every `tag` element in document order.
///
/// Parsing the whole document also checks that it is well-formed.
pub fn elements(xml: &str, tag: &str) -> Vec<HashMap<String, String>> {
    let mut reader = Reader::from_str(xml);
    let mut found = Vec::new();
    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) | Ok(Event::Empty(e)) if e.name().as_ref() == tag.as_bytes() => {
                let attrs = e
                    .attributes()
                    .map(|attr| {
                        let attr = attr.expect("attribute");
                        (
                            String::from_utf8_lossy(attr.key.as_ref()).into_owned(),
                            attr.unescape_value().expect("value").into_owned(),
                        )
                    })
                    .collect();
                found.push(attrs);
            }
            Ok(Event::Eof) => break,
            Err(e) => panic!("malformed XML at {}: {}", reader.buffer_position(), e),
            _ => {}
        }
    }
    found
}

/// Attributes of the `<c>` element for one cell reference
pub fn cell_element(xml: &str, cell_ref: &str) -> Option<HashMap<String, String>> {
    elements(xml, "c")
        .into_iter()
        .find(|attrs| attrs.get("r").map(String::as_str) == Some(cell_ref))
}
