//! Tipo Preview
//!
//! Drives the balloon solver over a script of dialogue lines, the way the
//! editor's "apply" action does, and produces a report per balloon for the
//! host document to render.

mod script;
mod hints;
mod report;

pub use script::Script;
pub use hints::{Glow, RenderHints, Shadow, Stroke};
pub use report::{LineReport, MetricsReport};

use tipo_layout::{DialogueLine, LayoutSolver, SolverConfig};
use tipo_text::ShapingMeasurer;

/// Preview error types
#[derive(Debug, thiserror::Error)]
pub enum PreviewError {
    #[error("no text to apply")]
    NoText,

    #[error("Invalid script: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Layout error: {0}")]
    Layout(#[from] tipo_layout::LayoutError),

    #[error("Font error: {0}")]
    Font(#[from] tipo_text::TextError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PreviewError>;

/// Solver plus the measurer every balloon is measured with
pub struct Preview {
    solver: LayoutSolver,
    measurer: ShapingMeasurer,
}

impl Preview {
    /// Create a preview; fails if the configuration is invalid
    pub fn new(config: SolverConfig, measurer: ShapingMeasurer) -> Result<Self> {
        Ok(Self {
            solver: LayoutSolver::new(config)?,
            measurer,
        })
    }

    pub fn measurer(&self) -> &ShapingMeasurer {
        &self.measurer
    }

    /// Lay out one dialogue line
    pub fn render_line(&self, line: &DialogueLine) -> Result<LineReport> {
        let request = line.to_request()?;
        let result = self.solver.solve(&request, &self.measurer);
        let metrics = self.measurer.vertical_metrics(request.font());
        Ok(LineReport::new(line, &request, &result, metrics))
    }

    /// Lay out every line of a script that has text
    pub fn render_script(&self, script: &Script) -> Result<Vec<LineReport>> {
        let lines = script.active_lines()?;
        tracing::info!("Generating {} balloons...", lines.len());

        let reports = lines.into_iter()
            .map(|line| self.render_line(line))
            .collect::<Result<Vec<_>>>()?;

        let degraded = reports.iter().filter(|r| r.degraded).count();
        if degraded > 0 {
            tracing::warn!("{} of {} balloons could not be fitted", degraded, reports.len());
        }
        let stats = self.measurer.cache_stats();
        tracing::info!(
            "Done: {} balloons generated ({} widths cached, {:.0}% hit rate)",
            reports.len(), stats.size, stats.hit_rate * 100.0
        );
        Ok(reports)
    }
}
