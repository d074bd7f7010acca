//! Named style presets shared by every sheet

use budget_master_core::{
    BorderLineStyle, BorderStyle, Color, FillStyle, FontStyle, HorizontalAlignment, Style,
    VerticalAlignment,
};

/// Title text and header background
pub const BRAND_BLUE: Color = Color::rgb(0x2E, 0x75, 0xB6);
/// Column-heading background below a section header
pub const SUBHEADER_BLUE: Color = Color::rgb(0xBD, 0xD7, 0xEE);
/// Cells showing money that is coming in or left over
pub const GREEN_FILL: Color = Color::rgb(0xC6, 0xEF, 0xCE);
/// Cells the user is expected to edit
pub const YELLOW_FILL: Color = Color::rgb(0xFF, 0xEB, 0x9C);
/// Headings for good news
pub const GOOD_GREEN: Color = Color::rgb(0x22, 0x8B, 0x22);
pub const NOTE_GRAY: Color = Color::rgb(0x66, 0x66, 0x66);
pub const WARNING_RED: Color = Color::rgb(0xCC, 0x00, 0x00);
pub const RULE_GRAY: Color = Color::rgb(0xAA, 0xAA, 0xAA);

pub const MONEY_FORMAT: &str = "\"$\"#,##0.00";
pub const PERCENT_FORMAT: &str = "0.0%";
pub const MONTH_YEAR_FORMAT: &str = "MMM YYYY";
pub const SHORT_DATE_FORMAT: &str = "MM/DD/YYYY";

/// How a bordered value cell is aligned and formatted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// Centered, number format untouched
    Plain,
    /// Right-aligned currency
    Money,
    /// Centered percentage
    Percent,
}

impl ValueKind {
    fn horizontal(self) -> HorizontalAlignment {
        match self {
            ValueKind::Money => HorizontalAlignment::Right,
            ValueKind::Plain | ValueKind::Percent => HorizontalAlignment::Center,
        }
    }

    fn number_format(self) -> Option<&'static str> {
        match self {
            ValueKind::Plain => None,
            ValueKind::Money => Some(MONEY_FORMAT),
            ValueKind::Percent => Some(PERCENT_FORMAT),
        }
    }
}

pub fn thin_border() -> BorderStyle {
    BorderStyle::all(BorderLineStyle::Thin, Color::BLACK)
}

/// White bold text on the brand blue, centered and boxed
pub fn header() -> Style {
    Style::new()
        .font(
            FontStyle::new()
                .with_bold(true)
                .with_size(12.0)
                .with_color(Color::WHITE),
        )
        .fill_color(BRAND_BLUE)
        .horizontal_alignment(HorizontalAlignment::Center)
        .vertical_alignment(VerticalAlignment::Center)
        .border(thin_border())
}

/// Apply the bordered value-cell look on top of an existing style.
///
/// Font and fill are left alone; the number format only changes for money
/// and percent cells.
pub fn apply_value_cell(style: &mut Style, kind: ValueKind) {
    style.border = thin_border();
    style.alignment.horizontal = kind.horizontal();
    style.alignment.vertical = VerticalAlignment::Center;
    if let Some(format) = kind.number_format() {
        style.number_format = budget_master_core::NumberFormat::from_string(format);
    }
}

/// Bold column heading on the light blue band
pub fn apply_subheader(style: &mut Style) {
    style.fill = FillStyle::solid(SUBHEADER_BLUE);
    style.font = bold();
    style.border = thin_border();
}

pub fn bold() -> FontStyle {
    FontStyle::new().with_bold(true)
}

/// Bold text at a given size
pub fn section(size: f64) -> FontStyle {
    bold().with_size(size)
}

pub fn section_colored(size: f64, color: Color) -> FontStyle {
    section(size).with_color(color)
}

/// Large blue sheet title
pub fn title() -> FontStyle {
    section_colored(16.0, BRAND_BLUE)
}

/// Italic annotation
pub fn note(color: Color) -> FontStyle {
    FontStyle::new().with_italic(true).with_color(color)
}

#[cfg(test)]
mod tests {
    use super::*;
    use budget_master_core::NumberFormat;

    #[test]
    fn test_value_cell_keeps_font_and_fill() {
        let mut style = Style::new().bold(true).fill_color(GREEN_FILL);
        apply_value_cell(&mut style, ValueKind::Money);

        assert!(style.font.bold);
        assert_eq!(style.fill, FillStyle::solid(GREEN_FILL));
        assert_eq!(style.alignment.horizontal, HorizontalAlignment::Right);
        assert_eq!(style.alignment.vertical, VerticalAlignment::Center);
        assert_eq!(style.number_format, NumberFormat::from_string(MONEY_FORMAT));
        assert_eq!(style.border, thin_border());
    }

    #[test]
    fn test_plain_value_cell_keeps_number_format() {
        let mut style = Style::new().number_format(MONTH_YEAR_FORMAT);
        apply_value_cell(&mut style, ValueKind::Plain);

        assert_eq!(style.alignment.horizontal, HorizontalAlignment::Center);
        assert_eq!(style.number_format.format_string(), MONTH_YEAR_FORMAT);
    }

    #[test]
    fn test_percent_value_cell() {
        let mut style = Style::new();
        apply_value_cell(&mut style, ValueKind::Percent);

        assert!(style.number_format.is_percent());
        assert_eq!(style.alignment.horizontal, HorizontalAlignment::Center);
    }

    #[test]
    fn test_header_preset() {
        let style = header();

        assert!(style.font.bold);
        assert_eq!(style.font.size, 12.0);
        assert_eq!(style.font.color, Color::WHITE);
        assert_eq!(style.fill, FillStyle::solid(BRAND_BLUE));
        assert_eq!(style.alignment.horizontal, HorizontalAlignment::Center);
    }

    #[test]
    fn test_subheader_replaces_font() {
        let mut style = Style::new().italic(true).font_size(16.0);
        apply_subheader(&mut style);

        assert_eq!(style.font, bold());
        assert_eq!(style.fill, FillStyle::solid(SUBHEADER_BLUE));
    }
}
