//! Shaped text run

/// A shaped glyph with its horizontal advance
#[derive(Debug, Clone, Copy)]
pub struct ShapedGlyph {
    /// Glyph ID in the font
    pub glyph_id: u16,
    /// Horizontal advance (in font units)
    pub x_advance: i32,
    /// Cluster index (original character position)
    pub cluster: u32,
}

/// A run of shaped glyphs
#[derive(Debug, Clone)]
pub struct ShapedRun {
    /// The shaped glyphs
    pub glyphs: Vec<ShapedGlyph>,
    /// Font size used for shaping
    pub font_size: f32,
    /// Units per em from the font
    pub units_per_em: u16,
}

impl ShapedRun {
    /// Create a new shaped run
    pub fn new(glyphs: Vec<ShapedGlyph>, font_size: f32, units_per_em: u16) -> Self {
        Self { glyphs, font_size, units_per_em }
    }

    /// Scale factor to convert font units to pixels
    pub fn scale(&self) -> f32 {
        if self.units_per_em == 0 {
            return 0.0;
        }
        self.font_size / self.units_per_em as f32
    }

    /// Total width in pixels
    pub fn width(&self) -> f32 {
        self.glyphs.iter()
            .map(|g| g.x_advance as f32 * self.scale())
            .sum()
    }

    /// Number of glyphs
    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }
}
