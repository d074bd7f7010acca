//! Worksheet type

use std::collections::BTreeMap;

use crate::cell::{CellAddress, CellData, CellRange, CellStorage, CellValue};
use crate::error::{Error, Result};
use crate::style::{BorderStyle, Style};
use crate::{MAX_COLS, MAX_ROWS};

/// Widest column a spreadsheet application accepts, in characters
pub const MAX_COLUMN_WIDTH: f64 = 255.0;

/// A single named sheet: sparse cell grid, styles, merges and column widths
#[derive(Debug)]
pub struct Worksheet {
    name: String,
    cells: CellStorage,
}

impl Worksheet {
    /// Create a new worksheet with the given name
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            cells: CellStorage::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    // === Cell Access ===

    /// Stored data of a cell, if it holds a value or a style
    pub fn cell(&self, address: &str) -> Result<Option<&CellData>> {
        let addr = CellAddress::parse(address)?;
        Ok(self.cells.get(addr.row, addr.col))
    }

    pub fn get_value(&self, address: &str) -> Result<CellValue> {
        let addr = CellAddress::parse(address)?;
        Ok(self.get_value_at(addr.row, addr.col))
    }

    pub fn get_value_at(&self, row: u32, col: u16) -> CellValue {
        self.cells
            .get(row, col)
            .map(|c| c.value.clone())
            .unwrap_or_default()
    }

    /// Formula text of a cell (with the leading `=`), if it holds a formula
    pub fn get_formula(&self, address: &str) -> Result<Option<&str>> {
        let addr = CellAddress::parse(address)?;
        Ok(self
            .cells
            .get(addr.row, addr.col)
            .and_then(|c| c.value.formula_text()))
    }

    /// Style index of a cell, 0 for unstyled or missing cells
    pub fn cell_style_index_at(&self, row: u32, col: u16) -> u32 {
        self.cells.get(row, col).map_or(0, |c| c.style_index)
    }

    /// A style by its index in this worksheet's style pool
    pub fn style_by_index(&self, style_index: u32) -> Option<&Style> {
        self.cells.style_pool().get(style_index)
    }

    /// Non-default style applied to a cell, if any
    pub fn cell_style_at(&self, row: u32, col: u16) -> Option<&Style> {
        match self.cell_style_index_at(row, col) {
            0 => None,
            idx => self.style_by_index(idx),
        }
    }

    /// Non-default style applied to a cell by address, if any
    pub fn cell_style(&self, address: &str) -> Result<Option<&Style>> {
        let addr = CellAddress::parse(address)?;
        Ok(self.cell_style_at(addr.row, addr.col))
    }

    /// The style a cell renders with (the default style when unstyled)
    pub fn effective_style_at(&self, row: u32, col: u16) -> &Style {
        self.cells
            .style_pool()
            .resolve(self.cell_style_index_at(row, col))
    }

    // === Cell Modification ===

    /// Set a cell value by address string. The cell keeps its style.
    pub fn set_cell_value<V: Into<CellValue>>(&mut self, address: &str, value: V) -> Result<()> {
        let addr = CellAddress::parse(address)?;
        self.set_cell_value_at(addr.row, addr.col, value)
    }

    pub fn set_cell_value_at<V: Into<CellValue>>(
        &mut self,
        row: u32,
        col: u16,
        value: V,
    ) -> Result<()> {
        validate_cell_position(row, col)?;
        self.cells.set_value(row, col, value.into());
        Ok(())
    }

    /// Set a formula by address string; a missing leading `=` is added
    pub fn set_cell_formula(&mut self, address: &str, formula: &str) -> Result<()> {
        let addr = CellAddress::parse(address)?;
        self.set_cell_formula_at(addr.row, addr.col, formula)
    }

    pub fn set_cell_formula_at(&mut self, row: u32, col: u16, formula: &str) -> Result<()> {
        validate_cell_position(row, col)?;
        self.cells.set_value(row, col, CellValue::formula(formula));
        Ok(())
    }

    /// Replace a cell's whole style. The value is untouched.
    pub fn set_cell_style(&mut self, address: &str, style: &Style) -> Result<()> {
        let addr = CellAddress::parse(address)?;
        self.set_cell_style_at(addr.row, addr.col, style)
    }

    pub fn set_cell_style_at(&mut self, row: u32, col: u16, style: &Style) -> Result<()> {
        validate_cell_position(row, col)?;
        let style_index = self.cells.style_pool_mut().get_or_insert(style.clone());
        self.cells.set_style(row, col, style_index);
        Ok(())
    }

    /// Read-modify-write of one cell's style.
    ///
    /// The closure receives a copy of the current style; attributes it does not
    /// touch keep their values.
    pub fn update_cell_style<F>(&mut self, address: &str, update: F) -> Result<()>
    where
        F: FnOnce(&mut Style),
    {
        let addr = CellAddress::parse(address)?;
        self.update_cell_style_at(addr.row, addr.col, update)
    }

    pub fn update_cell_style_at<F>(&mut self, row: u32, col: u16, update: F) -> Result<()>
    where
        F: FnOnce(&mut Style),
    {
        validate_cell_position(row, col)?;
        let mut style = self.effective_style_at(row, col).clone();
        update(&mut style);
        let style_index = self.cells.style_pool_mut().get_or_insert(style);
        self.cells.set_style(row, col, style_index);
        Ok(())
    }

    // === Range Operations ===

    /// Bounds of all stored cells
    pub fn used_range(&self) -> Option<CellRange> {
        self.cells
            .used_bounds()
            .map(|(min_row, min_col, max_row, max_col)| {
                CellRange::from_indices(min_row, min_col, max_row, max_col)
            })
    }

    // === Columns ===

    pub fn column_width(&self, col: u16) -> f64 {
        self.cells.column_width(col)
    }

    /// Set a column width in characters
    pub fn set_column_width(&mut self, col: u16, width: f64) -> Result<()> {
        if col >= MAX_COLS {
            return Err(Error::ColumnOutOfBounds(col, MAX_COLS - 1));
        }
        if !(0.0..=MAX_COLUMN_WIDTH).contains(&width) {
            return Err(Error::InvalidColumnWidth { col, width });
        }
        self.cells.set_column_width(col, width);
        Ok(())
    }

    /// Column index → width in characters
    pub fn custom_column_widths(&self) -> &BTreeMap<u16, f64> {
        self.cells.custom_column_widths()
    }

    // === Merged Cells ===

    pub fn merged_regions(&self) -> &[CellRange] {
        self.cells.merged_regions()
    }

    /// Merge a rectangular block into one displayed cell.
    ///
    /// Only the top-left cell keeps its value and style. Every other covered
    /// cell is cleared, then receives the anchor's border edges that lie on
    /// the block's outline, so a bordered anchor renders as one box.
    /// Overlapping an existing merge is an error and leaves the sheet as is.
    pub fn merge_cells(&mut self, range: &CellRange) -> Result<()> {
        if !range.is_within_bounds() {
            return Err(Error::InvalidRange(format!("{} is outside the sheet", range)));
        }
        if let Some(existing) = self
            .cells
            .merged_regions()
            .iter()
            .find(|existing| range.overlaps(existing))
        {
            return Err(Error::MergedCellConflict(format!("{} ({})", range, existing)));
        }

        let anchor = range.start;
        let anchor_border = self.effective_style_at(anchor.row, anchor.col).border.clone();

        for addr in range.cells().filter(|addr| *addr != anchor) {
            self.cells.remove(addr.row, addr.col);

            let edges = outline_edges(&anchor_border, range, addr);
            if !edges.is_empty() {
                self.update_cell_style_at(addr.row, addr.col, |style| {
                    style.border.overlay(&edges)
                })?;
            }
        }

        self.cells.add_merged_region(*range);
        Ok(())
    }

    /// The merged region covering an address, if any
    pub fn merged_region_at(&self, row: u32, col: u16) -> Option<&CellRange> {
        self.cells.merged_region_at(row, col)
    }

    // === Iteration ===

    /// Get the number of stored cells
    pub fn cell_count(&self) -> usize {
        self.cells.cell_count()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Iterate over all stored cells in row-major order
    pub fn iter_cells(&self) -> impl Iterator<Item = (u32, u16, &CellData)> {
        self.cells.iter()
    }

    /// Iterate over all formula cells: (row, col, formula_text)
    pub fn formula_cells(&self) -> impl Iterator<Item = (u32, u16, &str)> {
        self.cells
            .iter()
            .filter_map(|(row, col, cell)| cell.value.formula_text().map(|f| (row, col, f)))
    }
}

fn validate_cell_position(row: u32, col: u16) -> Result<()> {
    if row >= MAX_ROWS {
        return Err(Error::RowOutOfBounds(row, MAX_ROWS - 1));
    }
    if col >= MAX_COLS {
        return Err(Error::ColumnOutOfBounds(col, MAX_COLS - 1));
    }
    Ok(())
}

/// The subset of `border` that applies to `addr` as part of `range`'s outline
fn outline_edges(border: &BorderStyle, range: &CellRange, addr: CellAddress) -> BorderStyle {
    BorderStyle {
        left: border.left.filter(|_| addr.col == range.start.col),
        right: border.right.filter(|_| addr.col == range.end.col),
        top: border.top.filter(|_| addr.row == range.start.row),
        bottom: border.bottom.filter(|_| addr.row == range.end.row),
    }
}
