//! Font matching and query

use super::{FontSpec, FontStyle, FontWeight};

/// Font query for matching
#[derive(Debug, Clone)]
pub struct FontQuery {
    /// Font families to try (in order)
    pub families: Vec<String>,
    /// Desired weight
    pub weight: FontWeight,
    /// Desired style
    pub style: FontStyle,
}

impl FontQuery {
    /// Build a query from a font description.
    ///
    /// Generic families are expanded in place to their usual system
    /// families, followed by the generic name itself so the database can
    /// still apply its own default for it.
    pub fn from_spec(spec: &FontSpec) -> Self {
        let mut families = Vec::new();
        for family in spec.families() {
            for concrete in resolve_generic_family(&family) {
                families.push(concrete.to_string());
            }
            families.push(family);
        }

        Self {
            families,
            weight: spec.weight,
            style: spec.style,
        }
    }
}

/// Resolve generic font family to system families
pub fn resolve_generic_family(family: &str) -> &'static [&'static str] {
    match family.to_lowercase().as_str() {
        "serif" => &["Times New Roman", "Times", "DejaVu Serif", "Noto Serif"],
        "sans-serif" => &["Arial", "Helvetica", "DejaVu Sans", "Noto Sans", "Liberation Sans"],
        "monospace" => &["Courier New", "Consolas", "DejaVu Sans Mono", "Noto Sans Mono"],
        "cursive" => &["Comic Sans MS", "Chalkboard SE", "Comic Neue", "Brush Script MT"],
        "fantasy" => &["Impact", "Papyrus"],
        "system-ui" => &["Segoe UI", "San Francisco", "Ubuntu", "Cantarell"],
        _ => &[],
    }
}
