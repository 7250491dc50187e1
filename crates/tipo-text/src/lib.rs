//! Tipo Text - Font matching and text measurement
//!
//! This crate provides the metrics side of balloon typesetting:
//! - Font loading and matching (fontdb)
//! - Text shaping (rustybuzz - HarfBuzz port)
//! - Width measurement with a deterministic heuristic fallback
//! - A bounded width cache shared by measurement calls

pub mod font;
pub mod shaping;
pub mod metrics;
pub mod cache;

pub use font::{FontDatabase, FontFace, FontId, FontQuery, FontSpec, FontStyle, FontWeight, VerticalMetrics};
pub use shaping::{ShapedGlyph, ShapedRun, TextShaper};
pub use metrics::{HeuristicMeasurer, ShapingMeasurer, TextMeasurer};
pub use cache::{WidthCache, WidthCacheStats, WidthKey};

/// Text error types
#[derive(Debug, thiserror::Error)]
pub enum TextError {
    #[error("Font not found: {0}")]
    FontNotFound(String),

    #[error("Failed to parse font: {0}")]
    FontParsing(String),
}

pub type Result<T> = std::result::Result<T, TextError>;
