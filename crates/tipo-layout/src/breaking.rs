//! Greedy line breaking against a shape's row widths

use crate::shape::Geometry;

/// Split text into words on any whitespace. Words are never split further.
pub fn split_words(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

/// Result of one breaking pass at a fixed container size
#[derive(Debug, Clone, PartialEq)]
pub struct BreakOutcome {
    /// Lines in reading order
    pub lines: Vec<String>,
    /// Number of words placed on `lines`
    pub consumed: usize,
    /// Unusable rows skipped above the first line
    pub skipped_rows: usize,
    /// Offset of the first row's top edge that the pass started from
    pub y_start: f32,
}

impl BreakOutcome {
    /// Whether every one of `word_count` words was placed
    pub fn is_complete(&self, word_count: usize) -> bool {
        self.consumed == word_count
    }

    pub fn block_height(&self, line_height: f32) -> f32 {
        self.lines.len() as f32 * line_height
    }

    /// Top edge of the first placed line
    pub fn top_offset(&self, line_height: f32) -> f32 {
        self.y_start + self.skipped_rows as f32 * line_height
    }
}

/// Break `words` into rows starting at `y_start`, one row every
/// `line_height` pixels.
///
/// Each row takes as many words as fit in the width available at the
/// row's centre. The first word of a row is always placed, even when it is
/// wider than the row on its own.
///
/// Rows narrower than `min_row_width` cannot hold text. On a curved
/// contour such rows are skipped while they lie above the centre and no
/// line has been placed yet; anywhere else they end the pass, leaving the
/// remaining words unconsumed. At most `max_rows` rows are visited.
pub fn break_lines(
    words: &[&str],
    geometry: &Geometry,
    y_start: f32,
    line_height: f32,
    min_row_width: f32,
    max_rows: usize,
    mut measure: impl FnMut(&str) -> f32,
) -> BreakOutcome {
    let mut lines = Vec::new();
    let mut next = 0;
    let mut skipped_rows = 0;

    for row in 0..max_rows {
        if next >= words.len() {
            break;
        }

        let center_y = y_start + (row as f32 + 0.5) * line_height;
        let available = geometry.available_width(center_y);

        if available < min_row_width {
            if geometry.is_curved() && lines.is_empty() && center_y < 0.0 {
                skipped_rows += 1;
                continue;
            }
            break;
        }

        let mut line = words[next].to_string();
        next += 1;

        while next < words.len() {
            let candidate = format!("{} {}", line, words[next]);
            if measure(&candidate) <= available {
                line = candidate;
                next += 1;
            } else {
                break;
            }
        }

        lines.push(line);
    }

    BreakOutcome {
        lines,
        consumed: next,
        skipped_rows,
        y_start,
    }
}
