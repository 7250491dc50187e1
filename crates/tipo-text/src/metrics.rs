//! Text measurement
//!
//! The layout solver only ever asks one question: how wide is this string
//! in this font? [`TextMeasurer`] is that capability. [`ShapingMeasurer`]
//! answers it with real font data and [`HeuristicMeasurer`] answers it
//! from character counts, which is also what the shaping measurer falls
//! back to when a font cannot be found or shaped.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::cache::{WidthCache, WidthCacheStats, WidthKey};
use crate::font::{FontDatabase, FontFace, FontId, FontQuery, FontSpec, FontStyle, FontWeight, VerticalMetrics};
use crate::shaping::TextShaper;

/// Measures the rendered width of a string.
///
/// Implementations must be deterministic for fixed inputs and return a
/// finite, non-negative width; the empty string measures 0.
pub trait TextMeasurer {
    /// Width of `text` in pixels when set in `font`
    fn measure(&self, text: &str, font: &FontSpec) -> f32;
}

/// Average glyph advance as a fraction of the font size
pub const DEFAULT_ADVANCE: f32 = 0.6;

/// Character-count width estimate: `chars × advance × size`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeuristicMeasurer {
    pub advance: f32,
}

impl HeuristicMeasurer {
    pub fn new(advance: f32) -> Self {
        Self { advance }
    }
}

impl Default for HeuristicMeasurer {
    fn default() -> Self {
        Self::new(DEFAULT_ADVANCE)
    }
}

impl TextMeasurer for HeuristicMeasurer {
    fn measure(&self, text: &str, font: &FontSpec) -> f32 {
        let width = text.chars().count() as f32 * self.advance * font.size;
        sanitize(width)
    }
}

type FaceKey = (String, FontWeight, FontStyle);

/// Measures text by shaping it with the best matching installed font.
///
/// Owns its font database and a width cache. The cache and the font
/// resolution table sit behind mutexes, so one measurer can be shared by
/// several solver threads.
pub struct ShapingMeasurer {
    db: FontDatabase,
    shaper: TextShaper,
    fallback: HeuristicMeasurer,
    cache: Mutex<WidthCache>,
    faces: Mutex<HashMap<FaceKey, Option<FontId>>>,
}

impl ShapingMeasurer {
    /// Create a measurer over an existing font database
    pub fn new(db: FontDatabase) -> Self {
        Self {
            db,
            shaper: TextShaper::new(),
            fallback: HeuristicMeasurer::default(),
            cache: Mutex::new(WidthCache::default()),
            faces: Mutex::new(HashMap::new()),
        }
    }

    /// Create a measurer with system fonts loaded
    pub fn with_system_fonts() -> Self {
        Self::new(FontDatabase::with_system_fonts())
    }

    /// Set the estimator used when shaping is unavailable
    pub fn with_fallback(mut self, fallback: HeuristicMeasurer) -> Self {
        self.fallback = fallback;
        self
    }

    /// Set the width cache capacity
    pub fn with_cache_capacity(mut self, max_entries: usize) -> Self {
        self.cache = Mutex::new(WidthCache::new(max_entries));
        self
    }

    /// The underlying font database
    pub fn database(&self) -> &FontDatabase {
        &self.db
    }

    /// Width cache statistics
    pub fn cache_stats(&self) -> WidthCacheStats {
        lock(&self.cache).stats()
    }

    /// Drop all cached widths
    pub fn clear_cache(&self) {
        lock(&self.cache).clear();
    }

    /// Resolve the face used for a font description
    pub fn resolve(&self, font: &FontSpec) -> Option<FontId> {
        let key = (font.family.clone(), font.weight, font.style);
        let mut faces = lock(&self.faces);
        *faces.entry(key).or_insert_with(|| {
            self.db.require(&FontQuery::from_spec(font))
                .map_err(|err| tracing::debug!("{}, using estimated widths for {}", err, font))
                .ok()
        })
    }

    /// Pixel vertical metrics of the face used for `font`
    pub fn vertical_metrics(&self, font: &FontSpec) -> VerticalMetrics {
        self.resolve(font)
            .and_then(|id| {
                self.db.with_face_data(id, |data, index| {
                    FontFace::parse(data, index).map(|face| face.vertical_metrics(font.size))
                }).flatten()
            })
            .unwrap_or_else(|| VerticalMetrics::approximate(font.size))
    }

    fn shaped_width(&self, text: &str, font: &FontSpec) -> Option<f32> {
        let id = self.resolve(font)?;
        match self.shaper.shape(&self.db, id, text, font.size) {
            Ok(run) => Some(run.width()).filter(|w| w.is_finite() && *w >= 0.0),
            Err(err) => {
                tracing::debug!("Shaping {:?} in {} failed: {}", text, font, err);
                None
            }
        }
    }
}

impl TextMeasurer for ShapingMeasurer {
    fn measure(&self, text: &str, font: &FontSpec) -> f32 {
        if text.is_empty() || !(font.size.is_finite() && font.size > 0.0) {
            return 0.0;
        }

        let key = WidthKey::new(font, text);
        if let Some(width) = lock(&self.cache).get(&key) {
            return width;
        }

        let width = self.shaped_width(text, font)
            .unwrap_or_else(|| self.fallback.measure(text, font));
        lock(&self.cache).insert(key, width);
        width
    }
}

/// Poisoning only means another measurement panicked; the cached data is
/// still valid widths.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

fn sanitize(width: f32) -> f32 {
    if width.is_finite() && width > 0.0 { width } else { 0.0 }
}
