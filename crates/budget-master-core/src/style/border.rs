//! Border style types

use super::Color;

/// Border style for a cell
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct BorderStyle {
    pub left: Option<BorderEdge>,
    pub right: Option<BorderEdge>,
    pub top: Option<BorderEdge>,
    pub bottom: Option<BorderEdge>,
}

impl BorderStyle {
    /// No borders
    pub fn new() -> Self {
        Self::default()
    }

    /// The same edge on all four sides
    pub fn all(style: BorderLineStyle, color: Color) -> Self {
        let edge = Some(BorderEdge::new(style, color));
        Self {
            left: edge,
            right: edge,
            top: edge,
            bottom: edge,
        }
    }

    pub fn with_left(mut self, style: BorderLineStyle, color: Color) -> Self {
        self.left = Some(BorderEdge::new(style, color));
        self
    }

    pub fn with_right(mut self, style: BorderLineStyle, color: Color) -> Self {
        self.right = Some(BorderEdge::new(style, color));
        self
    }

    pub fn with_top(mut self, style: BorderLineStyle, color: Color) -> Self {
        self.top = Some(BorderEdge::new(style, color));
        self
    }

    pub fn with_bottom(mut self, style: BorderLineStyle, color: Color) -> Self {
        self.bottom = Some(BorderEdge::new(style, color));
        self
    }

    /// Copy every edge that `other` sets, leaving the rest untouched
    pub fn overlay(&mut self, other: &BorderStyle) {
        if other.left.is_some() {
            self.left = other.left;
        }
        if other.right.is_some() {
            self.right = other.right;
        }
        if other.top.is_some() {
            self.top = other.top;
        }
        if other.bottom.is_some() {
            self.bottom = other.bottom;
        }
    }

    pub fn is_empty(&self) -> bool {
        self.left.is_none() && self.right.is_none() && self.top.is_none() && self.bottom.is_none()
    }
}

/// A single border edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BorderEdge {
    pub style: BorderLineStyle,
    pub color: Color,
}

impl BorderEdge {
    pub fn new(style: BorderLineStyle, color: Color) -> Self {
        Self { style, color }
    }

    /// Thin black edge
    pub fn thin() -> Self {
        Self::new(BorderLineStyle::Thin, Color::BLACK)
    }
}

/// Border line styles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BorderLineStyle {
    #[default]
    None,
    Thin,
    Medium,
    Thick,
    Dashed,
    Dotted,
    Double,
}

impl BorderLineStyle {
    /// OOXML `style` attribute value, `None` for no line
    pub fn xlsx_name(self) -> Option<&'static str> {
        match self {
            BorderLineStyle::None => None,
            BorderLineStyle::Thin => Some("thin"),
            BorderLineStyle::Medium => Some("medium"),
            BorderLineStyle::Thick => Some("thick"),
            BorderLineStyle::Dashed => Some("dashed"),
            BorderLineStyle::Dotted => Some("dotted"),
            BorderLineStyle::Double => Some("double"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlay_only_copies_set_edges() {
        let mut border = BorderStyle::new().with_left(BorderLineStyle::Medium, Color::BLACK);
        let top_and_bottom = BorderStyle::new()
            .with_top(BorderLineStyle::Thin, Color::BLACK)
            .with_bottom(BorderLineStyle::Thin, Color::BLACK);

        border.overlay(&top_and_bottom);

        assert_eq!(
            border.left,
            Some(BorderEdge::new(BorderLineStyle::Medium, Color::BLACK))
        );
        assert_eq!(border.top, Some(BorderEdge::thin()));
        assert_eq!(border.bottom, Some(BorderEdge::thin()));
        assert!(border.right.is_none());
    }

    #[test]
    fn test_all_and_empty() {
        assert!(BorderStyle::new().is_empty());
        let boxed = BorderStyle::all(BorderLineStyle::Thin, Color::BLACK);
        assert!(!boxed.is_empty());
        assert_eq!(boxed.left, boxed.bottom);
    }
}
