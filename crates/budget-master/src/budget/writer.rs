//! Sheet-writing helper used by the sheet builders

use budget_master_core::{
    Alignment, CellAddress, CellRange, CellValue, Color, FillStyle, FontStyle,
    HorizontalAlignment, NumberFormat, Result, Style, Worksheet,
};

use super::presets::{self, ValueKind};

/// Thin wrapper over a [`Worksheet`] with the operations the builders repeat.
///
/// Style helpers other than [`SheetWriter::style`] and
/// [`SheetWriter::header`] touch one attribute group and keep the rest of
/// the cell's style, so calls can be layered in any order.
pub struct SheetWriter<'a> {
    sheet: &'a mut Worksheet,
}

impl<'a> SheetWriter<'a> {
    pub fn new(sheet: &'a mut Worksheet) -> Self {
        Self { sheet }
    }

    /// Write a literal. An empty string leaves the cell empty.
    pub fn set<V: Into<CellValue>>(&mut self, address: &str, value: V) -> Result<()> {
        self.sheet.set_cell_value(address, literal(value.into()))
    }

    pub fn formula(&mut self, address: &str, formula: &str) -> Result<()> {
        self.sheet.set_cell_formula(address, formula)
    }

    /// Write consecutive cells of one row starting at `first` (0-based column)
    pub fn row(&mut self, row: u32, first: u16, values: Vec<CellValue>) -> Result<()> {
        for (col, value) in (first..).zip(values) {
            self.sheet.set_cell_value_at(row, col, literal(value))?;
        }
        Ok(())
    }

    pub fn merge(&mut self, range: &str) -> Result<()> {
        self.sheet.merge_cells(&CellRange::parse(range)?)
    }

    /// Replace the cell's whole style
    pub fn style(&mut self, address: &str, style: &Style) -> Result<()> {
        self.sheet.set_cell_style(address, style)
    }

    pub fn header(&mut self, address: &str) -> Result<()> {
        self.style(address, &presets::header())
    }

    /// Header style across one row, for column headings
    pub fn header_row(&mut self, row: u32, first: u16, labels: &[&str]) -> Result<()> {
        let header = presets::header();
        for (col, label) in (first..).zip(labels) {
            self.sheet.set_cell_value_at(row, col, *label)?;
            self.sheet.set_cell_style_at(row, col, &header)?;
        }
        Ok(())
    }

    /// Sub-header look across one row, for column headings inside a section
    pub fn subheader_row(&mut self, row: u32, first: u16, labels: &[&str]) -> Result<()> {
        for (col, label) in (first..).zip(labels) {
            self.sheet.set_cell_value_at(row, col, *label)?;
            self.sheet
                .update_cell_style_at(row, col, presets::apply_subheader)?;
        }
        Ok(())
    }

    /// Bordered value cell; see [`presets::apply_value_cell`]
    pub fn value_cell(&mut self, address: &str, kind: ValueKind) -> Result<()> {
        self.sheet
            .update_cell_style(address, |style| presets::apply_value_cell(style, kind))
    }

    pub fn value_cell_at(&mut self, row: u32, col: u16, kind: ValueKind) -> Result<()> {
        self.sheet
            .update_cell_style_at(row, col, |style| presets::apply_value_cell(style, kind))
    }

    pub fn font(&mut self, address: &str, font: FontStyle) -> Result<()> {
        self.sheet
            .update_cell_style(address, |style| style.font = font)
    }

    pub fn font_at(&mut self, row: u32, col: u16, font: FontStyle) -> Result<()> {
        self.sheet
            .update_cell_style_at(row, col, |style| style.font = font)
    }

    /// Replace the alignment with a horizontal one
    pub fn align(&mut self, address: &str, horizontal: HorizontalAlignment) -> Result<()> {
        self.sheet.update_cell_style(address, |style| {
            style.alignment = Alignment::new().with_horizontal(horizontal)
        })
    }

    pub fn fill(&mut self, address: &str, color: Color) -> Result<()> {
        self.sheet
            .update_cell_style(address, |style| style.fill = FillStyle::solid(color))
    }

    pub fn fill_at(&mut self, row: u32, col: u16, color: Color) -> Result<()> {
        self.sheet
            .update_cell_style_at(row, col, |style| style.fill = FillStyle::solid(color))
    }

    /// Thin box around one cell
    pub fn border(&mut self, address: &str) -> Result<()> {
        self.sheet
            .update_cell_style(address, |style| style.border = presets::thin_border())
    }

    pub fn border_at(&mut self, row: u32, col: u16) -> Result<()> {
        self.sheet
            .update_cell_style_at(row, col, |style| style.border = presets::thin_border())
    }

    pub fn number_format(&mut self, address: &str, format: &str) -> Result<()> {
        self.sheet.update_cell_style(address, |style| {
            style.number_format = NumberFormat::from_string(format)
        })
    }

    pub fn number_format_at(&mut self, row: u32, col: u16, format: &str) -> Result<()> {
        self.sheet.update_cell_style_at(row, col, |style| {
            style.number_format = NumberFormat::from_string(format)
        })
    }

    /// Column widths keyed by column letters
    pub fn widths(&mut self, widths: &[(&str, f64)]) -> Result<()> {
        for (letters, width) in widths {
            let col = CellAddress::letters_to_column(letters)?;
            self.sheet.set_column_width(col, *width)?;
        }
        Ok(())
    }
}

/// The empty string is stored as an empty cell so a style alone can stay
fn literal(value: CellValue) -> CellValue {
    match value {
        CellValue::String(s) if s.is_empty() => CellValue::Empty,
        other => other,
    }
}

/// Formula cell value for use in [`SheetWriter::row`]
pub fn f<S: AsRef<str>>(formula: S) -> CellValue {
    CellValue::formula(formula)
}
