// Integration tests for agentmap
//
// Exercises the full presentation pipeline the way the shell drives it:
// catalog -> renderer -> exporter, plus the matrix view and the saved
// session flow.

use std::fs;

use strum::IntoEnumIterator;

use agentmap::config_file::SessionConfig;
use agentmap::content::Catalog;
use agentmap::export::export;
use agentmap::matrix::render_matrix;
use agentmap::render::render;
use agentmap::types::{Audience, Language, Version};

#[test]
fn test_every_selection_renders() {
    let catalog = Catalog::new();

    for version in Version::iter() {
        for audience in Audience::iter() {
            for language in Language::iter() {
                let doc = render(&catalog, version, audience, language)
                    .expect("valid selection should render");
                assert!(!doc.is_empty());
                assert!(doc.starts_with("# "), "document should open with a title");
                assert!(doc.contains("---"), "document should contain the separator");
            }
        }
    }
}

#[test]
fn test_english_developer_scenario() {
    let catalog = Catalog::new();
    let doc = render(&catalog, Version::Basic, Audience::Developer, Language::En).unwrap();

    assert!(doc.contains("Focus on modularity and quick integration."));
    assert!(doc.contains("# Basic Release"));
    assert!(!doc.contains("基础版"));
}

#[test]
fn test_chinese_leader_scenario() {
    let catalog = Catalog::new();
    let doc = render(&catalog, Version::Pro, Audience::Leader, Language::Zh).unwrap();

    let features = ["多Agent协作", "链式执行", "知识图谱", "环境交互"];
    let mut last = 0;
    for feature in features {
        let pos = doc.find(feature).unwrap_or_else(|| panic!("missing {feature}"));
        assert!(pos > last, "{feature} out of order");
        last = pos;
    }
}

#[test]
fn test_matrix_shape_is_stable() {
    let catalog = Catalog::new();

    for language in Language::iter() {
        let table = render_matrix(&catalog, language).unwrap();
        let lines: Vec<&str> = table.lines().collect();
        // header + separator + 5 feature rows
        assert_eq!(lines.len(), 7);
        let header_cells = lines[0].trim_matches('|').split('|').count();
        assert_eq!(header_cells, 4, "feature column plus 3 version columns");
        assert_eq!(render_matrix(&catalog, language).unwrap(), table);
    }
}

#[test]
fn test_render_then_export_round_trip() {
    let catalog = Catalog::new();
    let dir = tempfile::tempdir().unwrap();

    let doc = render(&catalog, Version::Advanced, Audience::Business, Language::En).unwrap();
    let path = export(&doc, dir.path()).unwrap();

    let written = fs::read_to_string(&path).unwrap();
    assert_eq!(written, doc, "exported file must be byte-identical");

    let name = path.file_name().unwrap().to_string_lossy().into_owned();
    assert!(name.starts_with("Agent_Roadmap_"));
    assert!(name.ends_with(".md"));
    // Agent_Roadmap_YYYYMMDD_HHMM.md
    assert_eq!(name.len(), "Agent_Roadmap_".len() + 13 + ".md".len());
}

#[test]
fn test_session_drives_the_show_flow() {
    let catalog = Catalog::new();
    let dir = tempfile::tempdir().unwrap();
    let session_path = dir.path().join("session.json");

    let session = SessionConfig {
        language: Language::En,
        version: Version::Pro,
        audience: Audience::Leader,
        export_dir: dir.path().to_path_buf(),
    };
    session.save_to_file(&session_path).unwrap();

    let loaded = SessionConfig::load_from_file(&session_path).unwrap();
    loaded.validate().unwrap();

    let doc = render(&catalog, loaded.version, loaded.audience, loaded.language).unwrap();
    assert!(doc.contains("# Pro Release"));
    assert!(doc.contains("Highlight delivery milestones and team efficiency."));
}
