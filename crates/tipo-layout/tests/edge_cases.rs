//! Edge case and property tests for tipo-layout
//!
//! All layouts use the heuristic measurer so widths are exact and
//! reproducible on any machine.

use tipo_layout::*;
use tipo_text::{FontDatabase, FontSpec, HeuristicMeasurer, ShapingMeasurer, TextMeasurer};

const SENTENCE: &str = "one two three four five six seven eight nine ten";

const SPEECH: &str = "I told you already, we can't stay here tonight. \
    The storm is coming and the bridge will be gone by morning, so pack what you can carry.";

fn request(text: &str, shape: Shape, size: f32) -> LayoutRequest {
    LayoutRequest::with_size(text, shape, size).unwrap()
}

fn solve(text: &str, shape: Shape, size: f32) -> LayoutResult {
    layout_balloon(&request(text, shape, size), &HeuristicMeasurer::default())
}

// ============================================================================
// SCENARIOS
// ============================================================================

#[test]
fn test_empty_text_any_shape() {
    for shape in Shape::ALL {
        let result = solve("", shape, 15.0);
        assert!(result.lines().is_empty());
        assert_eq!(result.radius, 100.0);
        assert_eq!(result.status, LayoutStatus::Empty);
    }
}

#[test]
fn test_whitespace_only_is_empty() {
    let result = solve(" \t\n  ", Shape::Rounded, 15.0);
    assert!(result.lines().is_empty());
    assert_eq!(result.status, LayoutStatus::Empty);
}

#[test]
fn test_single_word_circle() {
    let result = solve("HELLO", Shape::Circle, 15.0);
    assert_eq!(result.lines(), &["HELLO".to_string()]);
    assert!(result.radius >= 100.0);
    assert_eq!(result.status, LayoutStatus::Fitted { attempts: 1 });
    assert!(result.block.midpoint().abs() < 1e-3);
}

#[test]
fn test_sentence_in_square() {
    let result = solve(SENTENCE, Shape::Square, 12.0);
    let measurer = HeuristicMeasurer::default();
    let font = FontSpec::default().size(12.0);

    assert!(!result.is_degraded());
    assert!(result.lines().len() > 1);
    assert_eq!(result.lines(), &["one two three four", "five six seven eight", "nine ten"]);
    for line in result.lines() {
        assert!(measurer.measure(line, &font) <= result.side() - 40.0);
    }
    assert!(result.all_words_consumed(SENTENCE));
}

#[test]
fn test_unbreakable_giant_word() {
    let config = SolverConfig::default();
    let result = solve("SUPERCALIFRAGILISTIC", Shape::Circle, 200.0);

    assert_eq!(result.lines(), &["SUPERCALIFRAGILISTIC".to_string()]);
    assert!(result.radii_tried.len() <= config.max_attempts);
    let largest = result.radii_tried.iter().cloned().fold(f32::MIN, f32::max);
    assert_eq!(result.radius, largest);
}

#[test]
fn test_fits_after_one_growth_step() {
    // At the first size the block flips between two and three lines
    // without settling, so the solver grows once.
    let text = "Give back the crown or everybody will regret it";
    let measurer = HeuristicMeasurer::default();
    let config = SolverConfig::default();
    let req = request(text, Shape::Circle, 15.0);
    let result = layout_balloon(&req, &measurer);

    assert_eq!(result.status, LayoutStatus::Fitted { attempts: 2 });
    assert_eq!(result.radii_tried.len(), 2);
    assert!((result.radii_tried[1] - result.radii_tried[0] * 1.15).abs() < 1e-3);
    assert_eq!(result.radius, result.radii_tried[1]);
    assert_eq!(result.lines(), &["Give back the crown or", "everybody will regret it"]);
    assert!(result.all_words_consumed(text));
    assert!(result.block.midpoint().abs() < 1e-3);

    let geometry = Geometry::new(result.radius, config.profile(Shape::Circle));
    assert!(result.block.height() <= geometry.inner_height());
    for (line, center) in result.lines().iter().zip(result.block.line_centers()) {
        assert!(measurer.measure(line, req.font()) <= geometry.available_width(center));
    }
}

#[test]
fn test_circle_not_smaller_than_square() {
    for text in ["HELLO", SENTENCE, SPEECH] {
        let circle = solve(text, Shape::Circle, 15.0);
        let square = solve(text, Shape::Square, 15.0);
        assert!(
            circle.radius >= square.radius,
            "{:?}: circle {} < square {}", text, circle.radius, square.radius
        );
    }
    assert!(solve(SPEECH, Shape::Circle, 15.0).radius > solve(SPEECH, Shape::Square, 15.0).radius);
}

// ============================================================================
// PROPERTIES
// ============================================================================

#[test]
fn test_deterministic() {
    for shape in Shape::ALL {
        assert_eq!(solve(SPEECH, shape, 15.0), solve(SPEECH, shape, 15.0));
    }
}

#[test]
fn test_word_preservation() {
    for shape in Shape::ALL {
        for text in [SENTENCE, SPEECH, "a", "  spaced   out\ttext  "] {
            let result = solve(text, shape, 15.0);
            if !result.is_degraded() {
                assert!(result.all_words_consumed(text), "{} {:?}", shape, result.lines());
            }
        }
    }
}

#[test]
fn test_lines_are_contiguous_word_runs() {
    let result = solve(SPEECH, Shape::Circle, 15.0);
    assert!(!result.is_degraded());
    for line in result.lines() {
        assert_eq!(line.trim(), line);
        assert!(!line.contains("  "));
        assert!(SPEECH.split_whitespace().collect::<Vec<_>>().join(" ").contains(line.as_str()));
    }
}

#[test]
fn test_containment_in_curved_shapes() {
    let measurer = HeuristicMeasurer::default();
    let config = SolverConfig::default();

    for shape in [Shape::Circle, Shape::Rounded] {
        let req = request(SPEECH, shape, 15.0);
        let result = layout_balloon(&req, &measurer);
        assert!(!result.is_degraded());

        let geometry = Geometry::new(result.radius, config.profile(shape));
        for (line, center) in result.lines().iter().zip(result.block.line_centers()) {
            let width = measurer.measure(line, req.font());
            let available = geometry.available_width(center);
            let lone_word = !line.contains(' ');
            assert!(
                lone_word || width <= available + 1e-3,
                "{:?} is {}px in a {}px row", line, width, available
            );
        }
    }
}

#[test]
fn test_block_fits_vertically() {
    let config = SolverConfig::default();
    for shape in Shape::ALL {
        let result = solve(SPEECH, shape, 15.0);
        let geometry = Geometry::new(result.radius, config.profile(shape));
        assert!(result.block.height() <= geometry.inner_height());
    }
}

#[test]
fn test_vertically_centred() {
    for shape in Shape::ALL {
        for text in ["HELLO", SENTENCE, SPEECH] {
            let result = solve(text, shape, 15.0);
            assert!(result.block.midpoint().abs() < 1e-3, "{} {:?}", shape, result.block);
        }
    }
}

#[test]
fn test_radii_strictly_increase() {
    let config = SolverConfig {
        max_lines: 3,
        ..SolverConfig::default()
    };
    let solver = LayoutSolver::new(config).unwrap();
    let result = solver.solve(&request(SPEECH, Shape::Square, 15.0), &HeuristicMeasurer::default());

    assert!(result.radii_tried.len() > 1);
    for pair in result.radii_tried.windows(2) {
        assert!(pair[1] > pair[0], "{:?}", result.radii_tried);
    }
}

#[test]
fn test_additive_growth() {
    let config = SolverConfig {
        max_lines: 2,
        ..SolverConfig::default().growth(Growth::Additive { step: 8.0 })
    };
    let solver = LayoutSolver::new(config).unwrap();
    let result = solver.solve(&request(SPEECH, Shape::Square, 15.0), &HeuristicMeasurer::default());

    for pair in result.radii_tried.windows(2) {
        assert!((pair[1] - pair[0] - 8.0).abs() < 1e-3);
    }
}

// ============================================================================
// TERMINATION AND DEGRADED LAYOUTS
// ============================================================================

#[test]
fn test_ten_thousand_char_word_terminates() {
    let word = "A".repeat(10_000);
    let result = solve(&word, Shape::Circle, 15.0);
    assert_eq!(result.lines(), &[word]);
    assert!(result.radii_tried.len() <= 5);
}

#[test]
fn test_huge_text_respects_budget() {
    let text = "blah ".repeat(2_000);
    for shape in Shape::ALL {
        let result = solve(&text, shape, 15.0);
        assert!(result.radii_tried.len() <= 5);
        if result.is_degraded() {
            assert_eq!(result.lines(), &[text.trim().to_string()]);
            assert!(!result.block.lines.is_empty());
        } else {
            assert!(result.all_words_consumed(&text));
        }
    }
}

#[test]
fn test_degraded_result_is_flagged() {
    let config = SolverConfig {
        max_lines: 1,
        ..SolverConfig::default().max_attempts(2)
    };
    let solver = LayoutSolver::new(config).unwrap();
    let result = solver.solve(&request(SPEECH, Shape::Circle, 15.0), &HeuristicMeasurer::default());

    assert_eq!(result.status, LayoutStatus::Degraded { attempts: 2 });
    assert_eq!(result.lines().len(), 1);
    assert_eq!(result.radius, result.radii_tried[1]);
}

#[test]
fn test_huge_font_stays_finite() {
    let result = solve("HELLO", Shape::Circle, 1e20);
    assert!(result.radius.is_finite());
    assert!(result.block.top_offset.is_finite());
    assert!(result.block.line_height.is_finite());
    assert!(result.block.midpoint().is_finite());
}

#[test]
fn test_overflowing_pitch_rejected() {
    let font = FontSpec::default().size(1e20);
    assert!(matches!(
        LayoutRequest::new("HELLO", Shape::Circle, font, 1e20),
        Err(LayoutError::InvalidLineHeight(_))
    ));
}

#[test]
fn test_no_nan_for_tiny_fonts() {
    let result = solve(SPEECH, Shape::Circle, 0.01);
    assert!(result.radius.is_finite());
    assert!(result.block.top_offset.is_finite());
}

// ============================================================================
// MEASUREMENT AND CONCURRENCY
// ============================================================================

#[test]
fn test_missing_fonts_fall_back_to_heuristic() {
    let shaping = ShapingMeasurer::new(FontDatabase::new());
    let req = request(SPEECH, Shape::Circle, 15.0);
    assert_eq!(layout_balloon(&req, &shaping), layout_balloon(&req, &HeuristicMeasurer::default()));
}

#[test]
fn test_parallel_solves_share_measurer() {
    let solver = LayoutSolver::default();
    let measurer = ShapingMeasurer::new(FontDatabase::new());
    let texts = [SENTENCE, SPEECH, "HELLO", "wait... what?"];

    let serial: Vec<LayoutResult> = texts.iter()
        .map(|t| solver.solve(&request(t, Shape::Rounded, 15.0), &measurer))
        .collect();

    let parallel: Vec<LayoutResult> = std::thread::scope(|s| {
        let handles: Vec<_> = texts.iter()
            .map(|t| {
                let solver = &solver;
                let measurer = &measurer;
                s.spawn(move || solver.solve(&request(t, Shape::Rounded, 15.0), measurer))
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(serial, parallel);
}

// ============================================================================
// DIALOGUE INPUT
// ============================================================================

#[test]
fn test_dialogue_line_to_layout() {
    let mut line = DialogueLine::new(1, "where are you going?");
    line.uppercase = true;
    line.style = Shape::Square;

    let result = layout_balloon(&line.to_request().unwrap(), &HeuristicMeasurer::default());
    assert!(result.all_words_consumed("WHERE ARE YOU GOING?"));
}

#[test]
fn test_result_serializes_for_renderer() {
    let result = solve("HELLO", Shape::Circle, 15.0);
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["status"]["kind"], "fitted");
    assert_eq!(json["block"]["lines"][0], "HELLO");
    assert!(json["radiiTried"].is_array());
}
