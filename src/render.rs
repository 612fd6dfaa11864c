//! Roadmap document renderer
//!
//! Pure composition of catalog lookups into a markdown-flavored document.
//! Same inputs always produce byte-identical output; no I/O, no logging.

use crate::content::Catalog;
use crate::error::Result;
use crate::types::{Audience, Language, Version};

/// Render the roadmap document for a (version, audience, language) triple.
///
/// Layout is fixed across languages: title line, vision paragraph, feature
/// bullet list, inline scenario list, separator, audience recommendation.
/// Only the content and section labels are localized. Fails with a lookup
/// error (and returns no partial output) when a key is absent.
pub fn render(
    catalog: &Catalog,
    version: Version,
    audience: Audience,
    language: Language,
) -> Result<String> {
    let pack = catalog.pack(language)?;
    let entry = catalog.entry(version)?;
    let title = catalog.stage_title(version, language)?;
    let recommendation = pack.recommendation(audience)?;

    let features = entry
        .features
        .iter()
        .map(|f| format!("- {f}"))
        .collect::<Vec<_>>()
        .join("\n");
    let scenarios = entry.scenarios.join(", ");

    Ok(format!(
        "# {title}\n\n{vision}\n\n## {features_label}\n\n{features}\n\n## {scenarios_label}\n\n{scenarios}\n\n---\n\n## {recommendation_label}\n\n{recommendation}\n",
        vision = pack.vision,
        features_label = pack.features_label,
        scenarios_label = pack.scenarios_label,
        recommendation_label = pack.recommendation_label,
    ))
}
