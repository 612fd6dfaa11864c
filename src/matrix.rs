//! Feature-comparison matrix
//!
//! The matrix is structured data (support level per feature row and version
//! column) rather than a baked string, so the one table renders in either
//! display language through the same [`LanguagePack`] the renderer uses.
//! Output per language is a deterministic constant: a markdown table with
//! one feature column, three version columns, and five body rows.

use strum::IntoEnumIterator;

use crate::content::Catalog;
use crate::error::Result;
use crate::types::{Language, Version};

/// Support level of one feature in one version column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Support {
    /// Fully supported
    Full,
    /// Not supported
    None,
    /// Supported with a qualifier shown next to the marker
    Qualified(Qualifier),
}

/// Qualifier attached to a [`Support::Qualified`] cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Qualifier {
    /// Tool chains may run concurrently
    Concurrent,
    /// Planning is driven by a finite state machine
    StateMachine,
}

impl Qualifier {
    fn label(self, language: Language) -> &'static str {
        match (self, language) {
            (Self::Concurrent, Language::Zh) => "并发",
            (Self::Concurrent, Language::En) => "concurrent",
            // The FSM abbreviation is kept verbatim in both languages
            (Self::StateMachine, _) => "FSM",
        }
    }
}

impl Support {
    /// Cell marker for a display language.
    ///
    /// Qualified markers use fullwidth parentheses in Chinese and spaced
    /// ASCII parentheses in English.
    pub fn marker(self, language: Language) -> String {
        match self {
            Self::Full => "✅".to_string(),
            Self::None => "❌".to_string(),
            Self::Qualified(q) => match language {
                Language::Zh => format!("✅（{}）", q.label(language)),
                Language::En => format!("✅ ({})", q.label(language)),
            },
        }
    }
}

/// Fixed support table: five feature rows × three version columns.
///
/// Row labels live in the language packs; this holds only the
/// language-independent support levels. Row order matches
/// `LanguagePack::matrix_rows`, column order matches `Version` order.
#[derive(Debug, Clone)]
pub struct FeatureMatrix {
    pub(crate) cells: [[Support; 3]; 5],
}

impl FeatureMatrix {
    /// The number of feature rows.
    pub const ROWS: usize = 5;

    /// The standard product comparison table.
    pub fn standard() -> Self {
        use Support::{Full, None, Qualified};
        Self {
            cells: [
                // Single-turn execution
                [Full, Full, Full],
                // Contextual memory
                [None, Full, Full],
                // Tool chaining
                [None, Full, Qualified(Qualifier::Concurrent)],
                // Multi-agent collaboration
                [None, None, Full],
                // Autonomous planning
                [None, None, Qualified(Qualifier::StateMachine)],
            ],
        }
    }
}

/// Render the feature matrix as a markdown table for a display language.
///
/// Constant, deterministic output per language. No side effects.
pub fn render_matrix(catalog: &Catalog, language: Language) -> Result<String> {
    let pack = catalog.pack(language)?;
    let matrix = catalog.matrix();

    let mut header = vec![pack.matrix_corner.to_string()];
    for version in Version::iter() {
        header.push(pack.stage_label(version)?.to_string());
    }

    let mut lines = Vec::with_capacity(FeatureMatrix::ROWS + 2);
    lines.push(format!("| {} |", header.join(" | ")));
    lines.push(format!("|{}|", vec![" --- "; header.len()].join("|")));

    for (label, row) in pack.matrix_rows.iter().zip(matrix.cells.iter()) {
        let markers: Vec<String> = row.iter().map(|s| s.marker(language)).collect();
        lines.push(format!("| {} | {} |", label, markers.join(" | ")));
    }

    Ok(lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body_rows(table: &str) -> Vec<&str> {
        table.lines().skip(2).collect()
    }

    #[test]
    fn matrix_has_three_version_columns_and_five_rows() {
        let catalog = Catalog::new();
        for language in Language::iter() {
            let table = render_matrix(&catalog, language).unwrap();
            let header = table.lines().next().unwrap();
            // feature column + 3 version columns
            let cells: Vec<&str> = header
                .trim_matches('|')
                .split('|')
                .map(str::trim)
                .collect();
            assert_eq!(cells.len(), 4, "header: {header}");
            assert_eq!(body_rows(&table).len(), FeatureMatrix::ROWS);
        }
    }

    #[test]
    fn matrix_is_constant_per_language() {
        let catalog = Catalog::new();
        let first = render_matrix(&catalog, Language::En).unwrap();
        let second = render_matrix(&catalog, Language::En).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn matrix_localizes_labels_and_qualifiers() {
        let catalog = Catalog::new();

        let zh = render_matrix(&catalog, Language::Zh).unwrap();
        assert!(zh.contains("| 功能模块 | 基础版 | 高级版 | 进阶版 |"));
        assert!(zh.contains("✅（并发）"));
        assert!(zh.contains("✅（FSM）"));

        let en = render_matrix(&catalog, Language::En).unwrap();
        assert!(en.contains("| Feature | Basic | Advanced | Pro |"));
        assert!(en.contains("✅ (concurrent)"));
        assert!(en.contains("✅ (FSM)"));
    }

    #[test]
    fn basic_column_only_supports_single_turn() {
        let matrix = FeatureMatrix::standard();
        let basic: Vec<Support> = matrix.cells.iter().map(|row| row[0]).collect();
        assert_eq!(basic[0], Support::Full);
        assert!(basic[1..].iter().all(|s| *s == Support::None));
    }
}
