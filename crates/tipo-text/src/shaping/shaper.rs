//! Text shaper using rustybuzz

use rustybuzz::{Face, UnicodeBuffer, shape};
use crate::font::{FontDatabase, FontId};
use crate::{Result, TextError};
use super::{ShapedGlyph, ShapedRun};

/// Text shaper using HarfBuzz (via rustybuzz)
///
/// Shaping is left-to-right with script and language guessed from the
/// buffer contents, which is what horizontal balloon text needs.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextShaper;

impl TextShaper {
    /// Create a new text shaper
    pub fn new() -> Self {
        Self
    }

    /// Shape text using a font from the database
    pub fn shape(
        &self,
        db: &FontDatabase,
        font_id: FontId,
        text: &str,
        font_size: f32,
    ) -> Result<ShapedRun> {
        db.with_face_data(font_id, |data, index| {
            self.shape_with_data(data, index, text, font_size)
        }).ok_or_else(|| TextError::FontNotFound("Font not found in database".into()))?
    }

    /// Shape text with raw font data
    pub fn shape_with_data(
        &self,
        font_data: &[u8],
        face_index: u32,
        text: &str,
        font_size: f32,
    ) -> Result<ShapedRun> {
        let face = Face::from_slice(font_data, face_index)
            .ok_or_else(|| TextError::FontParsing("Failed to parse font".into()))?;

        if text.is_empty() {
            return Ok(ShapedRun::new(Vec::new(), font_size, face.units_per_em() as u16));
        }

        let mut buffer = UnicodeBuffer::new();
        buffer.push_str(text);
        buffer.set_direction(rustybuzz::Direction::LeftToRight);

        let output = shape(&face, &[], buffer);

        let glyphs: Vec<ShapedGlyph> = output.glyph_infos().iter()
            .zip(output.glyph_positions().iter())
            .map(|(info, pos)| ShapedGlyph {
                glyph_id: info.glyph_id as u16,
                x_advance: pos.x_advance,
                cluster: info.cluster,
            })
            .collect();

        Ok(ShapedRun::new(glyphs, font_size, face.units_per_em() as u16))
    }
}
