//! Dialogue Lines
//!
//! The record the editor keeps for each line of dialogue, and its
//! conversion into a [`LayoutRequest`]. Decorative settings (alignment,
//! effects) ride along untouched for the renderer.

use serde::{Deserialize, Serialize};
use tipo_text::{FontSpec, FontWeight};
use tipo_text::font::DEFAULT_FAMILY;

use crate::request::{DEFAULT_LINE_HEIGHT, LayoutRequest};
use crate::shape::Shape;
use crate::Result;

/// Font sizes the editor accepts, in pixels
pub const FONT_SIZE_RANGE: std::ops::RangeInclusive<f32> = 8.0..=100.0;

/// Size used when the entered size is zero or not a number
pub const FALLBACK_FONT_SIZE: f32 = 18.0;

/// Decorations applied after layout
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Effects {
    pub stroke: bool,
    pub shadow: bool,
    pub glow: bool,
}

impl Effects {
    pub fn any(&self) -> bool {
        self.stroke || self.shadow || self.glow
    }
}

/// Horizontal alignment of each line inside the balloon
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    Left,
    #[default]
    Center,
    Right,
}

/// One line of dialogue as edited by the operator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DialogueLine {
    pub id: u32,
    pub text: String,
    pub style: Shape,
    pub font_size: f32,
    /// CSS-like family list; the dialogue default when absent
    pub font_family: Option<String>,
    /// Line pitch as a multiple of the font size
    pub line_height: f32,
    /// Vertical glyph stretch applied by the host
    pub vertical_scale: f32,
    pub alignment: Alignment,
    pub uppercase: bool,
    pub effects: Effects,
}

impl Default for DialogueLine {
    fn default() -> Self {
        Self {
            id: 0,
            text: String::new(),
            style: Shape::Circle,
            font_size: tipo_text::font::DEFAULT_SIZE,
            font_family: None,
            line_height: DEFAULT_LINE_HEIGHT,
            vertical_scale: 1.0,
            alignment: Alignment::Center,
            uppercase: false,
            effects: Effects::default(),
        }
    }
}

impl DialogueLine {
    pub fn new(id: u32, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            ..Default::default()
        }
    }

    /// Blank editor page: `count` empty circle lines numbered from 1
    pub fn blank_page(count: u32) -> Vec<DialogueLine> {
        (1..=count).map(|id| DialogueLine::new(id, "")).collect()
    }

    /// Whether there is anything to typeset
    pub fn has_text(&self) -> bool {
        !self.text.trim().is_empty()
    }

    /// Font size limited to what the editor accepts
    pub fn clamped_font_size(&self) -> f32 {
        let size = if self.font_size.is_finite() && self.font_size != 0.0 {
            self.font_size
        } else {
            FALLBACK_FONT_SIZE
        };
        size.clamp(*FONT_SIZE_RANGE.start(), *FONT_SIZE_RANGE.end())
    }

    /// Text as it will be set, after case transformation
    pub fn display_text(&self) -> String {
        if self.uppercase {
            self.text.to_uppercase()
        } else {
            self.text.clone()
        }
    }

    /// Font used to set this line
    pub fn font(&self) -> FontSpec {
        let family = self.font_family
            .as_deref()
            .filter(|f| !f.trim().is_empty())
            .unwrap_or(DEFAULT_FAMILY);
        FontSpec::new(family, self.clamped_font_size()).weight(FontWeight::BOLD)
    }

    /// Layout request for this line.
    ///
    /// Vertically scaled glyphs are taller, so the scale stretches the
    /// line pitch as well.
    pub fn to_request(&self) -> Result<LayoutRequest> {
        let scale = if self.vertical_scale.is_finite() && self.vertical_scale > 0.0 {
            self.vertical_scale
        } else {
            1.0
        };
        LayoutRequest::new(self.display_text(), self.style, self.font(), self.line_height * scale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LayoutError;

    #[test]
    fn test_defaults_from_sparse_json() {
        let line: DialogueLine = serde_json::from_str(r#"{ "id": 3, "text": "Hey!" }"#).unwrap();
        assert_eq!(line.id, 3);
        assert_eq!(line.style, Shape::Circle);
        assert_eq!(line.font_size, 15.0);
        assert_eq!(line.alignment, Alignment::Center);
        assert!(!line.effects.any());
    }

    #[test]
    fn test_full_json() {
        let line: DialogueLine = serde_json::from_str(r#"{
            "id": 1, "text": "wait", "style": "rounded", "fontSize": 24,
            "fontFamily": "Wild Words", "lineHeight": 1.1, "verticalScale": 1.2,
            "alignment": "left", "uppercase": true,
            "effects": { "stroke": true, "shadow": false, "glow": true }
        }"#).unwrap();
        assert_eq!(line.style, Shape::Rounded);
        assert_eq!(line.font().family, "Wild Words");
        assert!(line.effects.stroke && line.effects.glow && !line.effects.shadow);

        let request = line.to_request().unwrap();
        assert_eq!(request.text(), "WAIT");
        assert!((request.line_height_factor() - 1.32).abs() < 1e-5);
    }

    #[test]
    fn test_font_size_clamped() {
        let mut line = DialogueLine::new(1, "x");
        line.font_size = 2.0;
        assert_eq!(line.clamped_font_size(), 8.0);
        line.font_size = 400.0;
        assert_eq!(line.clamped_font_size(), 100.0);
        line.font_size = -3.0;
        assert_eq!(line.clamped_font_size(), 8.0);
    }

    #[test]
    fn test_unusable_font_size_falls_back() {
        let mut line = DialogueLine::new(1, "x");
        for size in [0.0, f32::NAN, f32::INFINITY] {
            line.font_size = size;
            assert_eq!(line.clamped_font_size(), FALLBACK_FONT_SIZE);
        }
        assert_eq!(line.font().size, 18.0);
    }

    #[test]
    fn test_overflowing_line_pitch_rejected() {
        let mut line = DialogueLine::new(1, "x");
        line.line_height = 1e37;
        line.vertical_scale = 10.0;
        assert!(matches!(line.to_request(), Err(LayoutError::InvalidLineHeight(_))));
    }

    #[test]
    fn test_blank_page() {
        let page = DialogueLine::blank_page(10);
        assert_eq!(page.len(), 10);
        assert_eq!(page[0].id, 1);
        assert!(page.iter().all(|l| !l.has_text()));
    }

    #[test]
    fn test_invalid_line_height_surfaces() {
        let mut line = DialogueLine::new(1, "x");
        line.line_height = 0.0;
        assert!(matches!(line.to_request(), Err(LayoutError::InvalidLineHeight(_))));
    }

    #[test]
    fn test_blank_family_uses_default() {
        let mut line = DialogueLine::new(1, "x");
        line.font_family = Some("  ".into());
        assert_eq!(line.font().family, DEFAULT_FAMILY);
    }
}
