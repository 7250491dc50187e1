//! Decorations the host paints around a laid-out balloon

use serde::Serialize;
use tipo_layout::{Alignment, DialogueLine, LayoutResult, Shape};

/// Corner radius of rounded balloons
const ROUNDED_CORNER: f32 = 30.0;
/// Corner radius of square balloons
const SQUARE_CORNER: f32 = 4.0;
/// Balloon outline width
const BORDER_WIDTH: f32 = 3.0;

const ACCENT: &str = "#2680EB";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Stroke {
    pub width: f32,
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Shadow {
    pub offset_x: f32,
    pub offset_y: f32,
    pub opacity: f32,
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Glow {
    pub blur: f32,
    pub color: &'static str,
}

/// Everything the renderer needs besides the lines themselves
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderHints {
    pub corner_radius: f32,
    pub border_width: f32,
    pub alignment: Alignment,
    pub vertical_scale: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke: Option<Stroke>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shadow: Option<Shadow>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub glow: Option<Glow>,
}

impl RenderHints {
    pub fn new(line: &DialogueLine, result: &LayoutResult) -> Self {
        let corner_radius = match line.style {
            Shape::Circle => result.radius,
            Shape::Rounded => ROUNDED_CORNER,
            Shape::Square => SQUARE_CORNER,
        };
        let effects = line.effects;

        Self {
            corner_radius,
            border_width: BORDER_WIDTH,
            alignment: line.alignment,
            vertical_scale: line.vertical_scale,
            stroke: effects.stroke.then_some(Stroke { width: 1.5, color: "#000000" }),
            shadow: effects.shadow.then_some(Shadow {
                offset_x: 3.0,
                offset_y: 3.0,
                opacity: 0.3,
                color: "#000000",
            }),
            glow: effects.glow.then_some(Glow { blur: 8.0, color: ACCENT }),
        }
    }
}
