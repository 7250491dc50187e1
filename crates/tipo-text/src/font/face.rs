//! Font face with parsed metrics

use ttf_parser::Face;

/// Parsed font face with metrics
pub struct FontFace<'a> {
    face: Face<'a>,
}

impl<'a> FontFace<'a> {
    /// Parse a font face from data
    pub fn parse(data: &'a [u8], index: u32) -> Option<Self> {
        Face::parse(data, index).ok().map(|face| Self { face })
    }

    /// Units per em
    pub fn units_per_em(&self) -> u16 {
        self.face.units_per_em()
    }

    /// Ascender (above baseline)
    pub fn ascender(&self) -> i16 {
        self.face.ascender()
    }

    /// Descender (below baseline, usually negative)
    pub fn descender(&self) -> i16 {
        self.face.descender()
    }

    /// Line gap
    pub fn line_gap(&self) -> i16 {
        self.face.line_gap()
    }

    /// Vertical metrics scaled to `font_size` pixels
    pub fn vertical_metrics(&self, font_size: f32) -> VerticalMetrics {
        VerticalMetrics::from_units(
            self.ascender(),
            self.descender(),
            self.line_gap(),
            self.units_per_em(),
            font_size,
        )
    }
}

/// Ascent, descent and line gap in pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VerticalMetrics {
    /// Distance from baseline to the top of the em box
    pub ascent: f32,
    /// Distance from baseline to the bottom, positive downwards
    pub descent: f32,
    pub line_gap: f32,
}

impl VerticalMetrics {
    /// Scale font-unit metrics to pixels
    pub fn from_units(ascender: i16, descender: i16, line_gap: i16, units_per_em: u16, font_size: f32) -> Self {
        let scale = if units_per_em == 0 { 0.0 } else { font_size / units_per_em as f32 };
        Self {
            ascent: ascender as f32 * scale,
            descent: -(descender as f32) * scale,
            line_gap: line_gap as f32 * scale,
        }
    }

    /// Approximate metrics for when no face is available
    pub fn approximate(font_size: f32) -> Self {
        Self {
            ascent: font_size * 0.8,
            descent: font_size * 0.2,
            line_gap: 0.0,
        }
    }

    /// Natural line height (ascent + descent + gap)
    pub fn line_height(&self) -> f32 {
        self.ascent + self.descent + self.line_gap
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scaled_metrics() {
        let m = VerticalMetrics::from_units(800, -200, 100, 1000, 20.0);
        assert_eq!(m.ascent, 16.0);
        assert_eq!(m.descent, 4.0);
        assert_eq!(m.line_gap, 2.0);
        assert_eq!(m.line_height(), 22.0);
    }

    #[test]
    fn test_zero_units_per_em() {
        let m = VerticalMetrics::from_units(800, -200, 0, 0, 20.0);
        assert_eq!(m.line_height(), 0.0);
    }
}
