//! Font database for loading and matching fonts

use fontdb::{Database, Family};
use super::{FontId, FontQuery};
use crate::{Result, TextError};

/// Installed and explicitly loaded font faces
pub struct FontDatabase {
    db: Database,
}

impl FontDatabase {
    /// Create a new empty font database
    pub fn new() -> Self {
        Self {
            db: Database::new(),
        }
    }

    /// Create a font database with system fonts loaded
    pub fn with_system_fonts() -> Self {
        let mut db = Database::new();
        db.load_system_fonts();
        tracing::debug!("Loaded {} system font faces", db.len());
        Self { db }
    }

    /// Load a font file, e.g. a lettering font shipped with a script
    pub fn load_font_file(&mut self, path: &std::path::Path) -> Result<()> {
        self.db.load_font_file(path)
            .map_err(|e| TextError::FontParsing(format!("{}: {}", path.display(), e)))
    }

    /// Best face for the query, trying its families in order
    pub fn query(&self, query: &FontQuery) -> Option<FontId> {
        let families: Vec<Family> = query.families
            .iter()
            .map(|f| generic_or_named(f))
            .collect();

        self.db.query(&fontdb::Query {
            families: &families,
            weight: fontdb::Weight(query.weight.0),
            stretch: fontdb::Stretch::Normal,
            style: query.style.into(),
        }).map(FontId)
    }

    /// Like [`query`](Self::query), failing with the family list
    pub fn require(&self, query: &FontQuery) -> Result<FontId> {
        self.query(query)
            .ok_or_else(|| TextError::FontNotFound(query.families.join(", ")))
    }

    /// Run `f` over the raw data and face index of a loaded face
    pub fn with_face_data<R>(&self, id: FontId, f: impl FnOnce(&[u8], u32) -> R) -> Option<R> {
        self.db.with_face_data(id.0, f)
    }

    /// Number of loaded faces
    pub fn len(&self) -> usize {
        self.db.len()
    }

    pub fn is_empty(&self) -> bool {
        self.db.len() == 0
    }
}

impl Default for FontDatabase {
    fn default() -> Self {
        Self::new()
    }
}

fn generic_or_named(name: &str) -> Family<'_> {
    match name.to_lowercase().as_str() {
        "serif" => Family::Serif,
        "sans-serif" => Family::SansSerif,
        "monospace" => Family::Monospace,
        "cursive" => Family::Cursive,
        "fantasy" => Family::Fantasy,
        _ => Family::Name(name),
    }
}
