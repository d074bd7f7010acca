//! Fill/background style types

use super::Color;

/// Cell background
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FillStyle {
    /// Transparent
    #[default]
    None,

    /// Solid color fill
    Solid { color: Color },
}

impl FillStyle {
    pub fn solid(color: Color) -> Self {
        FillStyle::Solid { color }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, FillStyle::None)
    }
}
