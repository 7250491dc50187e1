//! Layout requests and results

use serde::Serialize;
use tipo_text::FontSpec;

use crate::breaking::split_words;
use crate::shape::Shape;
use crate::{LayoutError, Result};

/// Default line pitch as a multiple of the font size
pub const DEFAULT_LINE_HEIGHT: f32 = 1.25;

/// One text/shape/font combination to lay out.
///
/// Built fresh for every edit and validated on construction, so the
/// solver can rely on a positive font size and line pitch.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutRequest {
    text: String,
    shape: Shape,
    font: FontSpec,
    line_height_factor: f32,
}

impl LayoutRequest {
    /// Create a request; fails on a non-positive font size or line pitch,
    /// or a pitch that overflows
    pub fn new(text: impl Into<String>, shape: Shape, font: FontSpec, line_height_factor: f32) -> Result<Self> {
        if !(font.size.is_finite() && font.size > 0.0) {
            return Err(LayoutError::InvalidFontSize(font.size));
        }
        if !(line_height_factor.is_finite() && line_height_factor > 0.0) {
            return Err(LayoutError::InvalidLineHeight(line_height_factor));
        }
        // The pitch itself must stay finite too
        if !(font.size * line_height_factor).is_finite() {
            return Err(LayoutError::InvalidLineHeight(line_height_factor));
        }
        Ok(Self {
            text: text.into(),
            shape,
            font,
            line_height_factor,
        })
    }

    /// Request in the default dialogue font at `font_size` pixels
    pub fn with_size(text: impl Into<String>, shape: Shape, font_size: f32) -> Result<Self> {
        Self::new(text, shape, FontSpec::default().size(font_size), DEFAULT_LINE_HEIGHT)
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn shape(&self) -> Shape {
        self.shape
    }

    pub fn font(&self) -> &FontSpec {
        &self.font
    }

    pub fn font_size(&self) -> f32 {
        self.font.size
    }

    pub fn line_height_factor(&self) -> f32 {
        self.line_height_factor
    }

    /// Distance between consecutive baselines in pixels
    pub fn line_height_px(&self) -> f32 {
        self.font.size * self.line_height_factor
    }
}

/// Wrapped lines positioned relative to the container centre
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineBlock {
    /// Lines in reading order
    pub lines: Vec<String>,
    /// Offset of the block's top edge from the container centre (down is positive)
    pub top_offset: f32,
    pub line_height: f32,
}

impl LineBlock {
    pub fn empty(line_height: f32) -> Self {
        Self {
            lines: Vec::new(),
            top_offset: 0.0,
            line_height,
        }
    }

    /// Block centred on the container's middle
    pub fn centred(lines: Vec<String>, line_height: f32) -> Self {
        let height = lines.len() as f32 * line_height;
        Self {
            lines,
            top_offset: -height / 2.0,
            line_height,
        }
    }

    pub fn height(&self) -> f32 {
        self.lines.len() as f32 * self.line_height
    }

    /// Vertical midpoint relative to the container centre
    pub fn midpoint(&self) -> f32 {
        self.top_offset + self.height() / 2.0
    }

    /// Vertical centre of each line, relative to the container centre
    pub fn line_centers(&self) -> impl Iterator<Item = f32> + '_ {
        (0..self.lines.len()).map(|i| self.top_offset + (i as f32 + 0.5) * self.line_height)
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// How the solver arrived at a result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum LayoutStatus {
    /// Nothing to lay out
    Empty,
    /// Every word fits; `attempts` sizes were tried
    Fitted { attempts: usize },
    /// Budget exhausted; the text is returned as a single line
    Degraded { attempts: usize },
}

/// Final layout handed to the renderer
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutResult {
    pub block: LineBlock,
    /// Half-extent of the container (radius for circles)
    pub radius: f32,
    pub status: LayoutStatus,
    /// Radii of every attempt, in order
    pub radii_tried: Vec<f32>,
}

impl LayoutResult {
    pub fn lines(&self) -> &[String] {
        &self.block.lines
    }

    /// Diameter or side length of the container
    pub fn side(&self) -> f32 {
        2.0 * self.radius
    }

    pub fn is_degraded(&self) -> bool {
        matches!(self.status, LayoutStatus::Degraded { .. })
    }

    /// Whether the lines hold exactly the words of `text`, in order
    pub fn all_words_consumed(&self, text: &str) -> bool {
        let laid_out = self.block.lines.iter().flat_map(|line| split_words(line));
        laid_out.eq(split_words(text))
    }
}
