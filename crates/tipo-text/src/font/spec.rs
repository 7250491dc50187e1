//! Font description used for measurement

use std::fmt;
use super::{FontStyle, FontWeight};

/// Family list used for dialogue when the caller does not pick one
pub const DEFAULT_FAMILY: &str = "\"Comic Sans MS\", \"Chalkboard SE\", cursive";

/// Default dialogue font size in pixels
pub const DEFAULT_SIZE: f32 = 15.0;

/// A font description: family list, weight, style and pixel size.
///
/// `family` follows the CSS `font-family` syntax: a comma-separated list
/// of names, optionally quoted, where generic families are allowed.
#[derive(Debug, Clone, PartialEq)]
pub struct FontSpec {
    pub family: String,
    pub weight: FontWeight,
    pub style: FontStyle,
    /// Size in pixels
    pub size: f32,
}

impl FontSpec {
    /// Bold font of the given family list and size
    pub fn new(family: impl Into<String>, size: f32) -> Self {
        Self {
            family: family.into(),
            weight: FontWeight::BOLD,
            style: FontStyle::Normal,
            size,
        }
    }

    /// Set font weight
    pub fn weight(mut self, weight: FontWeight) -> Self {
        self.weight = weight;
        self
    }

    /// Set font style
    pub fn style(mut self, style: FontStyle) -> Self {
        self.style = style;
        self
    }

    /// Set pixel size
    pub fn size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    /// Individual family names, unquoted, in preference order
    pub fn families(&self) -> Vec<String> {
        self.family
            .split(',')
            .map(|name| name.trim().trim_matches(|c| c == '"' || c == '\'').trim())
            .filter(|name| !name.is_empty())
            .map(str::to_string)
            .collect()
    }
}

impl Default for FontSpec {
    fn default() -> Self {
        Self::new(DEFAULT_FAMILY, DEFAULT_SIZE)
    }
}

/// CSS font shorthand, e.g. `700 15px "Comic Sans MS"`
impl fmt::Display for FontSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.style {
            FontStyle::Normal => {}
            FontStyle::Italic => f.write_str("italic ")?,
            FontStyle::Oblique => f.write_str("oblique ")?,
        }
        write!(f, "{} {}px {}", self.weight, self.size, self.family)
    }
}
