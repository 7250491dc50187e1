//! Balloon Layout Solver
//!
//! Breaking and centring depend on each other: the rows available to the
//! text depend on where the block starts, and where it starts depends on
//! how many rows it needs. Each attempt resolves this with a few centring
//! passes at a fixed container size; attempts grow the container until
//! the text fits or the attempt budget runs out.

use tipo_text::TextMeasurer;

use crate::breaking::{BreakOutcome, break_lines, split_words};
use crate::config::SolverConfig;
use crate::request::{LayoutRequest, LayoutResult, LayoutStatus, LineBlock};
use crate::shape::Geometry;
use crate::Result;

/// Allowed drift of a block's midpoint from the container centre
const CENTRE_EPSILON: f32 = 1e-3;

/// Outcome of one sizing attempt
#[derive(Debug, Clone, PartialEq)]
pub enum Attempt {
    /// Every word fits, centred, at the attempted radius
    Fitted(LineBlock),
    /// The text does not fit; try again at `next_radius`
    Retry { next_radius: f32 },
}

/// Shape-constrained layout solver.
///
/// Holds only its configuration, so one solver can serve any number of
/// requests, from any number of threads.
#[derive(Debug, Clone, Default)]
pub struct LayoutSolver {
    config: SolverConfig,
}

impl LayoutSolver {
    /// Create a solver after validating its configuration
    pub fn new(config: SolverConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Lay out a request. Never fails: empty text gives an empty block and
    /// an exhausted budget gives a single-line degraded layout.
    pub fn solve<M>(&self, request: &LayoutRequest, measurer: &M) -> LayoutResult
    where
        M: TextMeasurer + ?Sized,
    {
        let words = split_words(request.text());
        let line_height = request.line_height_px();

        if words.is_empty() {
            return LayoutResult {
                block: LineBlock::empty(line_height),
                radius: self.config.empty_radius,
                status: LayoutStatus::Empty,
                radii_tried: Vec::new(),
            };
        }

        let mut radius = self.initial_radius(request);
        let mut radii_tried = Vec::with_capacity(self.config.max_attempts);

        for attempt in 1..=self.config.max_attempts {
            radii_tried.push(radius);

            match self.attempt(request, &words, radius, measurer) {
                Attempt::Fitted(block) => {
                    tracing::debug!(
                        "{} balloon fitted {} lines at R={:.1} after {} attempts",
                        request.shape(), block.lines.len(), radius, attempt
                    );
                    return LayoutResult {
                        block,
                        radius,
                        status: LayoutStatus::Fitted { attempts: attempt },
                        radii_tried,
                    };
                }
                Attempt::Retry { next_radius } => {
                    if attempt == self.config.max_attempts
                        || !(next_radius.is_finite() && next_radius > radius)
                    {
                        break;
                    }
                    radius = next_radius;
                }
            }
        }

        tracing::warn!(
            "{} balloon: no fit after {} attempts (R={:.1}), using a single line",
            request.shape(), radii_tried.len(), radius
        );

        LayoutResult {
            block: LineBlock::centred(vec![request.text().trim().to_string()], line_height),
            radius,
            status: LayoutStatus::Degraded { attempts: radii_tried.len() },
            radii_tried,
        }
    }

    /// First radius to try, from the area the text is expected to cover
    pub fn initial_radius(&self, request: &LayoutRequest) -> f32 {
        let profile = self.config.profile(request.shape());
        let chars = request.text().trim().chars().count() as f32;
        let glyph_area = request.font_size() * self.config.glyph_advance * request.line_height_px();
        let area = chars * glyph_area / profile.packing_efficiency;
        let estimate = area.sqrt();

        if estimate.is_finite() {
            estimate.max(self.config.min_radius)
        } else {
            self.config.min_radius
        }
    }

    /// Try to fit `words` in a container of half-extent `radius`.
    ///
    /// Runs up to `refinement_passes` breaking passes, each starting the
    /// block at minus half the height the previous pass produced, and
    /// stops early once a pass starts exactly where its own block is
    /// centred. The attempt fits only at such a fixed point, with every
    /// word placed, no skipped rows, and the block within the padded
    /// height, so each line was broken against the row it is reported at.
    pub fn attempt<M>(&self, request: &LayoutRequest, words: &[&str], radius: f32, measurer: &M) -> Attempt
    where
        M: TextMeasurer + ?Sized,
    {
        let geometry = Geometry::new(radius, self.config.profile(request.shape()));
        let line_height = request.line_height_px();
        let min_row_width = self.config.min_row_width * request.font_size();
        let font = request.font();

        let mut y_start = 0.0;
        let mut last: Option<BreakOutcome> = None;

        for _ in 0..self.config.refinement_passes {
            let outcome = break_lines(
                words,
                &geometry,
                y_start,
                line_height,
                min_row_width,
                self.config.max_lines,
                |s| measurer.measure(s, font),
            );
            let centred_start = -outcome.block_height(line_height) / 2.0;
            let converged = outcome.is_complete(words.len()) && outcome.y_start == centred_start;

            y_start = centred_start;
            last = Some(outcome);
            if converged {
                break;
            }
        }

        let fitted = last.filter(|outcome| {
            let height = outcome.block_height(line_height);
            outcome.is_complete(words.len())
                && outcome.skipped_rows == 0
                && height <= geometry.inner_height()
                && (outcome.top_offset(line_height) + height / 2.0).abs() <= CENTRE_EPSILON
        });

        match fitted {
            Some(outcome) => Attempt::Fitted(LineBlock {
                top_offset: outcome.top_offset(line_height),
                lines: outcome.lines,
                line_height,
            }),
            None => {
                tracing::debug!(
                    "{} balloon does not fit at R={:.1}, growing",
                    request.shape(), radius
                );
                Attempt::Retry { next_radius: self.config.growth.next(radius) }
            }
        }
    }
}
