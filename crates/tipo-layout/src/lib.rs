//! Tipo Layout Engine
//!
//! Typesets dialogue inside speech balloons. Given a string and a balloon
//! shape, the solver:
//! - word-wraps the text against the width available at each row of the
//!   shape (a chord for curved balloons, constant for square ones)
//! - picks the smallest container size, among the sizes it tries, that
//!   holds every word
//! - centres the wrapped block vertically inside the balloon
//!
//! Width measurement is injected through [`tipo_text::TextMeasurer`].

mod shape;
mod config;
mod request;
mod breaking;
mod solver;
pub mod dialogue;

pub use shape::{Contour, Geometry, Shape};
pub use config::{Growth, Padding, ShapeProfile, SolverConfig};
pub use request::{LayoutRequest, LayoutResult, LayoutStatus, LineBlock, DEFAULT_LINE_HEIGHT};
pub use breaking::{BreakOutcome, break_lines, split_words};
pub use solver::{Attempt, LayoutSolver};
pub use dialogue::{Alignment, DialogueLine, Effects};

/// Layout error types
///
/// Solving never fails; these are raised when building a request or a
/// solver from invalid parameters.
#[derive(Debug, thiserror::Error)]
pub enum LayoutError {
    #[error("Invalid font size: {0}")]
    InvalidFontSize(f32),

    #[error("Invalid line height factor: {0}")]
    InvalidLineHeight(f32),

    #[error("Invalid solver config: {0}")]
    InvalidConfig(String),

    #[error("Unknown balloon shape: {0}")]
    UnknownShape(String),
}

pub type Result<T> = std::result::Result<T, LayoutError>;

/// Solve a request with the default solver configuration
pub fn layout_balloon<M>(request: &LayoutRequest, measurer: &M) -> LayoutResult
where
    M: tipo_text::TextMeasurer + ?Sized,
{
    LayoutSolver::default().solve(request, measurer)
}
