//! Solver Configuration
//!
//! Every empirically tuned constant of the solver lives here so one
//! implementation can reproduce the different balloon presets.

use serde::{Deserialize, Serialize};

use crate::shape::{Contour, Shape};
use crate::LayoutError;

/// Inner padding between the balloon outline and the text
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Padding {
    /// Fractions of the current radius
    Relative { x: f32, y: f32 },
    /// Pixels, independent of the radius
    Fixed { x: f32, y: f32 },
}

impl Padding {
    /// `(pad_x, pad_y)` in pixels for a container of half-extent `radius`
    pub fn resolve(&self, radius: f32) -> (f32, f32) {
        match *self {
            Padding::Relative { x, y } => (radius * x, radius * y),
            Padding::Fixed { x, y } => (x, y),
        }
    }

    fn validate(&self) -> Result<(), String> {
        match *self {
            Padding::Relative { x, y } => {
                for v in [x, y] {
                    if !(v.is_finite() && (0.0..0.5).contains(&v)) {
                        return Err(format!("relative padding {} must be in [0, 0.5)", v));
                    }
                }
            }
            Padding::Fixed { x, y } => {
                for v in [x, y] {
                    if !(v.is_finite() && v >= 0.0) {
                        return Err(format!("fixed padding {} must be non-negative", v));
                    }
                }
            }
        }
        Ok(())
    }
}

/// How the container grows after a failed attempt
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Growth {
    Multiplicative { factor: f32 },
    Additive { step: f32 },
}

impl Growth {
    /// Radius for the next attempt
    pub fn next(&self, radius: f32) -> f32 {
        match *self {
            Growth::Multiplicative { factor } => radius * factor,
            Growth::Additive { step } => radius + step,
        }
    }

    fn validate(&self) -> Result<(), String> {
        match *self {
            Growth::Multiplicative { factor } if factor.is_finite() && factor > 1.0 => Ok(()),
            Growth::Additive { step } if step.is_finite() && step > 0.0 => Ok(()),
            other => Err(format!("growth {:?} does not strictly increase the radius", other)),
        }
    }
}

impl Default for Growth {
    fn default() -> Self {
        Growth::Multiplicative { factor: 1.15 }
    }
}

/// Per-shape tuning
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShapeProfile {
    pub contour: Contour,
    /// Fraction of the container area text is expected to fill
    pub packing_efficiency: f32,
    pub padding: Padding,
}

impl ShapeProfile {
    /// Elliptical balloon with radius-relative padding
    pub fn curved() -> Self {
        Self {
            contour: Contour::Ellipse,
            packing_efficiency: 0.55,
            padding: Padding::Relative { x: 0.1, y: 0.15 },
        }
    }

    /// Rectangular balloon with fixed padding
    pub fn rectangular() -> Self {
        Self {
            contour: Contour::Rect,
            packing_efficiency: 0.85,
            padding: Padding::Fixed { x: 20.0, y: 20.0 },
        }
    }

    fn validate(&self) -> Result<(), String> {
        let e = self.packing_efficiency;
        if !(e.is_finite() && e > 0.0 && e <= 1.0) {
            return Err(format!("packing efficiency {} must be in (0, 1]", e));
        }
        self.padding.validate()
    }
}

/// Layout solver configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SolverConfig {
    pub circle: ShapeProfile,
    pub square: ShapeProfile,
    pub rounded: ShapeProfile,
    /// Average glyph advance (× font size) for the initial area estimate
    pub glyph_advance: f32,
    /// Smallest radius the initial estimate may produce
    pub min_radius: f32,
    /// Radius reported for empty text
    pub empty_radius: f32,
    /// Rows narrower than this (× font size) cannot hold text
    pub min_row_width: f32,
    /// Rows walked per breaking pass
    pub max_lines: usize,
    /// Centering passes per attempt
    pub refinement_passes: usize,
    /// Sizes tried before falling back to a single line
    pub max_attempts: usize,
    pub growth: Growth,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            circle: ShapeProfile::curved(),
            square: ShapeProfile::rectangular(),
            rounded: ShapeProfile::curved(),
            glyph_advance: 0.6,
            min_radius: 100.0,
            empty_radius: 100.0,
            min_row_width: 1.0,
            max_lines: 20,
            refinement_passes: 3,
            max_attempts: 5,
            growth: Growth::default(),
        }
    }
}

impl SolverConfig {
    /// Tuning for a shape
    pub fn profile(&self, shape: Shape) -> &ShapeProfile {
        match shape {
            Shape::Circle => &self.circle,
            Shape::Square => &self.square,
            Shape::Rounded => &self.rounded,
        }
    }

    /// Set the growth policy
    pub fn growth(mut self, growth: Growth) -> Self {
        self.growth = growth;
        self
    }

    /// Set the attempt budget
    pub fn max_attempts(mut self, attempts: usize) -> Self {
        self.max_attempts = attempts;
        self
    }

    /// Check every tunable is usable
    pub fn validate(&self) -> crate::Result<()> {
        self.check().map_err(LayoutError::InvalidConfig)
    }

    fn check(&self) -> Result<(), String> {
        for shape in Shape::ALL {
            self.profile(shape).validate()
                .map_err(|e| format!("{}: {}", shape, e))?;
        }
        positive("glyphAdvance", self.glyph_advance)?;
        positive("minRadius", self.min_radius)?;
        non_negative("emptyRadius", self.empty_radius)?;
        non_negative("minRowWidth", self.min_row_width)?;
        for (name, count) in [
            ("maxLines", self.max_lines),
            ("refinementPasses", self.refinement_passes),
            ("maxAttempts", self.max_attempts),
        ] {
            if count == 0 {
                return Err(format!("{} must be at least 1", name));
            }
        }
        self.growth.validate()
    }
}

fn positive(name: &str, value: f32) -> Result<(), String> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(format!("{} must be positive, got {}", name, value))
    }
}

fn non_negative(name: &str, value: f32) -> Result<(), String> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(format!("{} must be non-negative, got {}", name, value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(SolverConfig::default().validate().is_ok());
    }

    #[test]
    fn test_growth_must_increase() {
        let shrinking = SolverConfig::default().growth(Growth::Multiplicative { factor: 0.9 });
        assert!(matches!(shrinking.validate(), Err(LayoutError::InvalidConfig(_))));

        let stalled = SolverConfig::default().growth(Growth::Additive { step: 0.0 });
        assert!(stalled.validate().is_err());

        let additive = SolverConfig::default().growth(Growth::Additive { step: 8.0 });
        assert!(additive.validate().is_ok());
        assert_eq!(Growth::Additive { step: 8.0 }.next(100.0), 108.0);
    }

    #[test]
    fn test_zero_budget_rejected() {
        assert!(SolverConfig::default().max_attempts(0).validate().is_err());

        let config = SolverConfig { refinement_passes: 0, ..Default::default() };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_bad_profile_rejected() {
        let mut config = SolverConfig::default();
        config.circle.packing_efficiency = 1.5;
        assert!(config.validate().is_err());

        let mut config = SolverConfig::default();
        config.rounded.padding = Padding::Relative { x: 0.6, y: 0.1 };
        let err = config.validate().unwrap_err().to_string();
        assert!(err.starts_with("Invalid solver config: rounded:"), "{}", err);
    }

    #[test]
    fn test_padding_resolve() {
        assert_eq!(Padding::Fixed { x: 20.0, y: 20.0 }.resolve(500.0), (20.0, 20.0));
        assert_eq!(Padding::Relative { x: 0.5, y: 0.25 }.resolve(100.0), (50.0, 25.0));
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config: SolverConfig = serde_json::from_str(
            r#"{ "maxAttempts": 8, "growth": { "kind": "additive", "step": 6.0 } }"#,
        ).unwrap();
        assert_eq!(config.max_attempts, 8);
        assert_eq!(config.growth, Growth::Additive { step: 6.0 });
        assert_eq!(config.circle, ShapeProfile::curved());
        assert_eq!(config.refinement_passes, 3);
    }

    #[test]
    fn test_profile_from_json() {
        let config: SolverConfig = serde_json::from_str(
            r#"{ "rounded": { "contour": "rect", "packingEfficiency": 0.8,
                 "padding": { "kind": "fixed", "x": 24.0, "y": 18.0 } } }"#,
        ).unwrap();
        assert_eq!(config.profile(Shape::Rounded).contour, Contour::Rect);
        assert_eq!(config.profile(Shape::Rounded).padding.resolve(300.0), (24.0, 18.0));
    }
}
