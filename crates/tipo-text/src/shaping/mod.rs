//! Text shaping module

mod shaper;
mod run;

pub use shaper::TextShaper;
pub use run::{ShapedGlyph, ShapedRun};
