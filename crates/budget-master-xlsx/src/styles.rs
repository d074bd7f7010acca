//! styles.xml generation

use std::collections::HashMap;

use budget_master_core::style::{
    Alignment, BorderEdge, BorderStyle, Color, FillStyle, FontStyle, NumberFormat, Style,
};
use budget_master_core::Workbook;

use crate::xml::escape;

/// First id available for custom number formats
const FIRST_CUSTOM_NUMFMT_ID: u32 = 164;

/// Fills 0 and 1 are reserved by the file format (none, gray125)
const RESERVED_FILL_COUNT: u32 = 2;

/// Workbook-wide cell formats.
///
/// Each worksheet pools its styles locally; this table merges them into one
/// deduplicated `cellXfs` list and remembers how to translate a sheet's local
/// style index into the global xf id.
#[derive(Debug)]
pub(crate) struct XlsxStyleTable {
    /// Index corresponds to the cellXfs index (xf id). Index 0 is the default style.
    styles: Vec<Style>,
    /// Per-worksheet mapping: local style index -> xf id
    sheet_maps: Vec<HashMap<u32, u32>>,
}

#[derive(Debug, Clone, Copy)]
struct ResolvedXfIds {
    font_id: u32,
    fill_id: u32,
    border_id: u32,
    num_fmt_id: u32,
}

/// Deduplicating list: insertion order is the id order
struct IdTable<T> {
    items: Vec<T>,
    ids: HashMap<T, u32>,
    offset: u32,
}

impl<T: Clone + Eq + std::hash::Hash> IdTable<T> {
    fn new(offset: u32) -> Self {
        Self {
            items: Vec::new(),
            ids: HashMap::new(),
            offset,
        }
    }

    fn id_of(&mut self, item: &T) -> u32 {
        if let Some(&id) = self.ids.get(item) {
            return id;
        }
        let id = self.offset + self.items.len() as u32;
        self.items.push(item.clone());
        self.ids.insert(item.clone(), id);
        id
    }
}

impl XlsxStyleTable {
    pub(crate) fn build(workbook: &Workbook) -> Self {
        let mut styles = IdTable::new(0);
        styles.id_of(&Style::default());

        let sheet_maps = workbook
            .worksheets()
            .map(|sheet| {
                let mut map = HashMap::from([(0, 0)]);
                for (_row, _col, cell) in sheet.iter_cells() {
                    let local_idx = cell.style_index;
                    if map.contains_key(&local_idx) {
                        continue;
                    }
                    let style = sheet.style_by_index(local_idx).cloned().unwrap_or_default();
                    map.insert(local_idx, styles.id_of(&style));
                }
                map
            })
            .collect();

        Self {
            styles: styles.items,
            sheet_maps,
        }
    }

    pub(crate) fn xf_id_for(&self, sheet_index: usize, local_style_index: u32) -> u32 {
        self.sheet_maps
            .get(sheet_index)
            .and_then(|m| m.get(&local_style_index).copied())
            .unwrap_or(0)
    }

    pub(crate) fn xf_count(&self) -> usize {
        self.styles.len()
    }

    pub(crate) fn to_styles_xml(&self) -> String {
        let mut fonts = IdTable::new(0);
        fonts.id_of(&FontStyle::default());

        let mut fills = IdTable::new(RESERVED_FILL_COUNT);

        let mut borders = IdTable::new(0);
        borders.id_of(&BorderStyle::default());

        let mut numfmts = IdTable::new(FIRST_CUSTOM_NUMFMT_ID);

        let resolved: Vec<ResolvedXfIds> = self
            .styles
            .iter()
            .map(|style| ResolvedXfIds {
                font_id: fonts.id_of(&style.font),
                fill_id: match style.fill {
                    FillStyle::None => 0,
                    solid => fills.id_of(&solid),
                },
                border_id: borders.id_of(&style.border),
                num_fmt_id: match &style.number_format {
                    NumberFormat::General => 0,
                    NumberFormat::Custom(code) => numfmts.id_of(code),
                },
            })
            .collect();

        let mut xml = String::from(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<styleSheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main">"#,
        );

        if !numfmts.items.is_empty() {
            xml.push_str(&format!("\n  <numFmts count=\"{}\">", numfmts.items.len()));
            for (i, code) in numfmts.items.iter().enumerate() {
                xml.push_str(&format!(
                    "\n    <numFmt numFmtId=\"{}\" formatCode=\"{}\"/>",
                    FIRST_CUSTOM_NUMFMT_ID + i as u32,
                    escape(code)
                ));
            }
            xml.push_str("\n  </numFmts>");
        }

        xml.push_str(&format!("\n  <fonts count=\"{}\">", fonts.items.len()));
        for font in &fonts.items {
            xml.push_str("\n    ");
            xml.push_str(&write_font(font));
        }
        xml.push_str("\n  </fonts>");

        xml.push_str(&format!(
            "\n  <fills count=\"{}\">",
            RESERVED_FILL_COUNT as usize + fills.items.len()
        ));
        xml.push_str("\n    <fill><patternFill patternType=\"none\"/></fill>");
        xml.push_str("\n    <fill><patternFill patternType=\"gray125\"/></fill>");
        for fill in &fills.items {
            xml.push_str("\n    ");
            xml.push_str(&write_fill(fill));
        }
        xml.push_str("\n  </fills>");

        xml.push_str(&format!("\n  <borders count=\"{}\">", borders.items.len()));
        for border in &borders.items {
            xml.push_str("\n    ");
            xml.push_str(&write_border(border));
        }
        xml.push_str("\n  </borders>");

        xml.push_str(
            r#"
  <cellStyleXfs count="1">
    <xf numFmtId="0" fontId="0" fillId="0" borderId="0"/>
  </cellStyleXfs>"#,
        );

        xml.push_str(&format!("\n  <cellXfs count=\"{}\">", self.styles.len()));
        for (style, ids) in self.styles.iter().zip(resolved) {
            xml.push_str("\n    ");
            xml.push_str(&write_xf(style, ids));
        }
        xml.push_str("\n  </cellXfs>");

        xml.push_str(
            r#"
  <cellStyles count="1">
    <cellStyle name="Normal" xfId="0" builtinId="0"/>
  </cellStyles>
  <dxfs count="0"/>
  <tableStyles count="0" defaultTableStyle="TableStyleMedium9" defaultPivotStyle="PivotStyleLight16"/>
</styleSheet>"#,
        );
        xml
    }
}

fn write_color(tag: &str, color: &Color) -> String {
    match color {
        Color::Auto => format!("<{tag} indexed=\"64\"/>"),
        other => format!("<{tag} rgb=\"{}\"/>", other.to_argb_hex()),
    }
}

fn write_font(font: &FontStyle) -> String {
    let mut s = String::from("<font>");
    if font.bold {
        s.push_str("<b/>");
    }
    if font.italic {
        s.push_str("<i/>");
    }
    s.push_str(&format!("<sz val=\"{}\"/>", font.size));
    if !font.color.is_auto() {
        s.push_str(&write_color("color", &font.color));
    }
    s.push_str(&format!("<name val=\"{}\"/>", escape(&font.name)));
    s.push_str("<family val=\"2\"/>");
    s.push_str("</font>");
    s
}

fn write_fill(fill: &FillStyle) -> String {
    match fill {
        FillStyle::None => "<fill><patternFill patternType=\"none\"/></fill>".to_string(),
        FillStyle::Solid { color } => format!(
            "<fill><patternFill patternType=\"solid\">{}<bgColor indexed=\"64\"/></patternFill></fill>",
            write_color("fgColor", color)
        ),
    }
}

fn write_border_edge(tag: &str, edge: Option<&BorderEdge>) -> String {
    match edge.and_then(|e| e.style.xlsx_name().map(|name| (name, e.color))) {
        None => format!("<{tag}/>"),
        Some((name, color)) => format!(
            "<{tag} style=\"{name}\">{}</{tag}>",
            write_color("color", &color)
        ),
    }
}

fn write_border(border: &BorderStyle) -> String {
    let mut s = String::from("<border>");
    s.push_str(&write_border_edge("left", border.left.as_ref()));
    s.push_str(&write_border_edge("right", border.right.as_ref()));
    s.push_str(&write_border_edge("top", border.top.as_ref()));
    s.push_str(&write_border_edge("bottom", border.bottom.as_ref()));
    s.push_str("<diagonal/>");
    s.push_str("</border>");
    s
}

fn write_alignment(al: &Alignment) -> Option<String> {
    let default = Alignment::default();
    if *al == default {
        return None;
    }

    let mut s = String::from("<alignment");
    if al.horizontal != default.horizontal {
        s.push_str(&format!(" horizontal=\"{}\"", al.horizontal.xlsx_name()));
    }
    if al.vertical != default.vertical {
        s.push_str(&format!(" vertical=\"{}\"", al.vertical.xlsx_name()));
    }
    s.push_str("/>");
    Some(s)
}

fn write_xf(style: &Style, ids: ResolvedXfIds) -> String {
    let mut attrs = String::new();
    if ids.num_fmt_id != 0 {
        attrs.push_str(" applyNumberFormat=\"1\"");
    }
    if style.font != FontStyle::default() {
        attrs.push_str(" applyFont=\"1\"");
    }
    if !style.fill.is_none() {
        attrs.push_str(" applyFill=\"1\"");
    }
    if !style.border.is_empty() {
        attrs.push_str(" applyBorder=\"1\"");
    }
    if style.alignment != Alignment::default() {
        attrs.push_str(" applyAlignment=\"1\"");
    }

    let head = format!(
        "<xf numFmtId=\"{}\" fontId=\"{}\" fillId=\"{}\" borderId=\"{}\" xfId=\"0\"{}",
        ids.num_fmt_id, ids.font_id, ids.fill_id, ids.border_id, attrs
    );

    match write_alignment(&style.alignment) {
        None => format!("{head}/>"),
        Some(alignment) => format!("{head}>{alignment}</xf>"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use budget_master_core::style::{BorderLineStyle, HorizontalAlignment, VerticalAlignment};
    use budget_master_core::Worksheet;

    fn header() -> Style {
        Style::new()
            .font(FontStyle::new().with_bold(true).with_size(12.0).with_color(Color::WHITE))
            .fill_color(Color::rgb(0x2E, 0x75, 0xB6))
            .horizontal_alignment(HorizontalAlignment::Center)
            .vertical_alignment(VerticalAlignment::Center)
            .border(BorderStyle::all(BorderLineStyle::Thin, Color::BLACK))
    }

    fn workbook_with(sheets: Vec<Worksheet>) -> Workbook {
        let mut wb = Workbook::new();
        for sheet in sheets {
            wb.add_existing_worksheet(sheet).unwrap();
        }
        wb
    }

    #[test]
    fn test_styles_shared_across_sheets_get_one_xf() {
        let mut first = Worksheet::new("Dashboard");
        first.set_cell_value("A4", "Category").unwrap();
        first.set_cell_style("A4", &header()).unwrap();

        let mut second = Worksheet::new("Work Expenses");
        second.set_cell_value("B1", "x").unwrap();
        second
            .set_cell_style("B1", &Style::new().italic(true))
            .unwrap();
        second.set_cell_value("A9", "Date").unwrap();
        second.set_cell_style("A9", &header()).unwrap();

        let table = XlsxStyleTable::build(&workbook_with(vec![first, second]));

        assert_eq!(table.xf_count(), 3);
        assert_eq!(table.xf_id_for(0, 1), 1);
        // Local index 2 on the second sheet is the header style
        assert_eq!(table.xf_id_for(1, 2), 1);
        assert_eq!(table.xf_id_for(1, 1), 2);
        assert_eq!(table.xf_id_for(1, 0), 0);
    }

    #[test]
    fn test_custom_number_formats_start_at_164() {
        let mut sheet = Worksheet::new("Monthly Budget");
        sheet.set_cell_value("B4", 4160.0).unwrap();
        sheet
            .set_cell_style("B4", &Style::new().number_format("\"$\"#,##0.00"))
            .unwrap();
        sheet.set_cell_formula("C20", "=B20/$B$16").unwrap();
        sheet
            .set_cell_style("C20", &Style::new().number_format("0.0%"))
            .unwrap();

        let xml = XlsxStyleTable::build(&workbook_with(vec![sheet])).to_styles_xml();

        assert!(xml.contains(r#"<numFmts count="2">"#));
        assert!(xml.contains(r#"<numFmt numFmtId="164" formatCode="&quot;$&quot;#,##0.00"/>"#));
        assert!(xml.contains(r#"<numFmt numFmtId="165" formatCode="0.0%"/>"#));
        assert!(xml.contains(r#"<xf numFmtId="165" fontId="0" fillId="0" borderId="0" xfId="0" applyNumberFormat="1"/>"#));
    }

    #[test]
    fn test_header_xf_components() {
        let mut sheet = Worksheet::new("Dashboard");
        sheet.set_cell_value("A4", "Category").unwrap();
        sheet.set_cell_style("A4", &header()).unwrap();

        let xml = XlsxStyleTable::build(&workbook_with(vec![sheet])).to_styles_xml();

        assert!(xml.contains(r#"<fills count="3">"#));
        assert!(xml.contains(r#"<fgColor rgb="FF2E75B6"/>"#));
        assert!(xml.contains(
            r#"<font><b/><sz val="12"/><color rgb="FFFFFFFF"/><name val="Calibri"/><family val="2"/></font>"#
        ));
        assert!(xml.contains(r#"<left style="thin"><color rgb="FF000000"/></left>"#));
        assert!(xml.contains(
            r#"<xf numFmtId="0" fontId="1" fillId="2" borderId="1" xfId="0" applyFont="1" applyFill="1" applyBorder="1" applyAlignment="1"><alignment horizontal="center" vertical="center"/></xf>"#
        ));
    }

    #[test]
    fn test_default_only_workbook() {
        let xml = XlsxStyleTable::build(&workbook_with(vec![Worksheet::new("Empty")]))
            .to_styles_xml();

        assert!(!xml.contains("<numFmts"));
        assert!(xml.contains(r#"<cellXfs count="1">"#));
        assert!(xml.contains(r#"<borders count="1">"#));
    }
}
