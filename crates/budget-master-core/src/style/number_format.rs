//! Number format types

/// Display format for numeric cell content
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum NumberFormat {
    #[default]
    General,

    /// Custom format code, e.g. `"$"#,##0.00`
    Custom(String),
}

impl NumberFormat {
    pub fn from_string<S: Into<String>>(format: S) -> Self {
        NumberFormat::Custom(format.into())
    }

    /// The format code as it appears in a spreadsheet application
    pub fn format_string(&self) -> &str {
        match self {
            NumberFormat::General => "General",
            NumberFormat::Custom(s) => s,
        }
    }

    /// Whether values are rendered as percentages
    pub fn is_percent(&self) -> bool {
        let code = self.format_string();
        code.contains('%') && !code.contains("\"%\"")
    }
}
