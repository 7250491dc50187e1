//! Balloon shapes and their interior geometry

use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::config::ShapeProfile;
use crate::LayoutError;

/// Balloon shape selected for a dialogue line
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shape {
    #[default]
    Circle,
    Square,
    Rounded,
}

impl Shape {
    pub const ALL: [Shape; 3] = [Shape::Circle, Shape::Square, Shape::Rounded];

    pub fn as_str(self) -> &'static str {
        match self {
            Shape::Circle => "circle",
            Shape::Square => "square",
            Shape::Rounded => "rounded",
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Shape {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "circle" => Ok(Shape::Circle),
            "square" => Ok(Shape::Square),
            "rounded" => Ok(Shape::Rounded),
            other => Err(LayoutError::UnknownShape(other.to_string())),
        }
    }
}

/// How the usable interior narrows away from the centre line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Contour {
    /// Chord of an ellipse with independently padded radii
    Ellipse,
    /// Constant width at every row
    Rect,
}

/// Interior geometry of one sizing attempt
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometry {
    /// Half-extent of the container (radius for circles)
    pub radius: f32,
    pub pad_x: f32,
    pub pad_y: f32,
    pub contour: Contour,
}

impl Geometry {
    /// Geometry for `radius`, padding resolved against that radius
    pub fn new(radius: f32, profile: &ShapeProfile) -> Self {
        let (pad_x, pad_y) = profile.padding.resolve(radius);
        Self {
            radius,
            pad_x,
            pad_y,
            contour: profile.contour,
        }
    }

    /// Horizontal room at vertical offset `y` from the centre.
    ///
    /// Never negative and never NaN.
    pub fn available_width(&self, y: f32) -> f32 {
        let width = match self.contour {
            Contour::Ellipse => {
                let rx = self.radius - self.pad_x;
                let ry = self.radius - self.pad_y;
                if !(rx > 0.0 && ry > 0.0) {
                    return 0.0;
                }
                let t = 1.0 - (y * y) / (ry * ry);
                if !(t > 0.0) {
                    return 0.0;
                }
                2.0 * rx * t.sqrt()
            }
            Contour::Rect => 2.0 * self.radius - 2.0 * self.pad_x,
        };

        if width.is_finite() && width > 0.0 { width } else { 0.0 }
    }

    /// Usable height between the top and bottom padding
    pub fn inner_height(&self) -> f32 {
        (2.0 * self.radius - 2.0 * self.pad_y).max(0.0)
    }

    /// Diameter or side length of the container
    pub fn side(&self) -> f32 {
        2.0 * self.radius
    }

    pub fn is_curved(&self) -> bool {
        self.contour == Contour::Ellipse
    }
}
