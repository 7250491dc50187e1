//! Per-balloon output handed to the host

use serde::Serialize;
use tipo_layout::{DialogueLine, LayoutRequest, LayoutResult, LayoutStatus, Shape};
use tipo_text::VerticalMetrics;

use crate::hints::RenderHints;

/// Vertical font metrics in pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsReport {
    pub ascent: f32,
    pub descent: f32,
    pub line_gap: f32,
}

impl From<VerticalMetrics> for MetricsReport {
    fn from(m: VerticalMetrics) -> Self {
        Self {
            ascent: m.ascent,
            descent: m.descent,
            line_gap: m.line_gap,
        }
    }
}

/// One laid-out balloon
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineReport {
    pub id: u32,
    pub shape: Shape,
    /// CSS font shorthand the lines were measured with
    pub font: String,
    pub lines: Vec<String>,
    pub radius: f32,
    pub side: f32,
    pub top_offset: f32,
    pub line_height: f32,
    pub status: LayoutStatus,
    pub degraded: bool,
    pub metrics: MetricsReport,
    pub hints: RenderHints,
}

impl LineReport {
    pub fn new(
        line: &DialogueLine,
        request: &LayoutRequest,
        result: &LayoutResult,
        metrics: VerticalMetrics,
    ) -> Self {
        Self {
            id: line.id,
            shape: request.shape(),
            font: request.font().to_string(),
            lines: result.lines().to_vec(),
            radius: result.radius,
            side: result.side(),
            top_offset: result.block.top_offset,
            line_height: result.block.line_height,
            status: result.status,
            degraded: result.is_degraded(),
            metrics: metrics.into(),
            hints: RenderHints::new(line, result),
        }
    }
}
