use palette::Srgba;

/// How the renderer should draw the outline path.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PaintStyle {
    /// Fill the enclosed area.
    Fill,
    /// Stroke the boundary with the given width.
    Stroke { width: f32 },
}

/// Rendering configuration for a highlight shape.
///
/// This crate never interprets the paint itself; it travels alongside the
/// produced path to whatever surface draws it. `corner_radius` describes the
/// cosmetic corner-rounding effect the renderer applies while drawing — it
/// does not change the path geometry this crate emits.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HighlightPaint {
    pub color: Srgba,
    pub corner_radius: f32,
    pub style: PaintStyle,
}

impl Default for HighlightPaint {
    /// Opaque blue fill with square corners.
    fn default() -> Self {
        Self {
            color: Srgba::new(0.0, 0.0, 1.0, 1.0),
            corner_radius: 0.0,
            style: PaintStyle::Fill,
        }
    }
}

impl HighlightPaint {
    pub fn new(color: Srgba) -> Self {
        Self {
            color,
            ..Self::default()
        }
    }

    pub fn with_corner_radius(mut self, radius: f32) -> Self {
        self.corner_radius = radius;
        self
    }

    pub fn with_style(mut self, style: PaintStyle) -> Self {
        self.style = style;
        self
    }
}
