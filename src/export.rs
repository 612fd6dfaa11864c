//! Markdown export
//!
//! Writes rendered text to `Agent_Roadmap_<YYYYMMDD_HHMM>.md` in a target
//! directory. The write is staged through a temp file and renamed into
//! place, so a failed write never leaves a truncated file where a previous
//! export was. Same-minute collisions replace the earlier file whole
//! (last write wins); that is accepted behavior, not an error. Single
//! attempt, fail fast.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};

use crate::error::Result;

/// Export filename for a timestamp, minute granularity.
pub fn export_filename(now: &DateTime<Local>) -> String {
    format!("Agent_Roadmap_{}.md", now.format("%Y%m%d_%H%M"))
}

/// Write `text` to a timestamped file under `dir` and return its path.
pub fn export(text: &str, dir: &Path) -> Result<PathBuf> {
    export_at(text, dir, Local::now())
}

/// Like [`export`], with the clock injected. Used by callers and tests that
/// need a fixed timestamp.
pub fn export_at(text: &str, dir: &Path, now: DateTime<Local>) -> Result<PathBuf> {
    let path = dir.join(export_filename(&now));
    let tmp_path = path.with_extension("md.tmp");

    fs::write(&tmp_path, text)?;
    if let Err(e) = fs::rename(&tmp_path, &path) {
        let _ = fs::remove_file(&tmp_path);
        return Err(e.into());
    }

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn filename_matches_the_fixed_pattern() {
        let at = Local.with_ymd_and_hms(2025, 7, 4, 9, 30, 0).unwrap();
        assert_eq!(export_filename(&at), "Agent_Roadmap_20250704_0930.md");
    }

    #[test]
    fn same_minute_exports_share_a_filename() {
        let first = Local.with_ymd_and_hms(2025, 7, 4, 9, 30, 5).unwrap();
        let second = Local.with_ymd_and_hms(2025, 7, 4, 9, 30, 55).unwrap();
        assert_eq!(export_filename(&first), export_filename(&second));

        let next_minute = Local.with_ymd_and_hms(2025, 7, 4, 9, 31, 0).unwrap();
        assert_ne!(export_filename(&first), export_filename(&next_minute));
    }

    #[test]
    fn export_round_trips_content() {
        let dir = tempfile::tempdir().unwrap();
        let text = "# 进阶版 v3.0（2025 Q4）\n\nbody\n";
        let path = export(text, dir.path()).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), text);
        assert!(path.file_name().unwrap().to_string_lossy().starts_with("Agent_Roadmap_"));
    }

    #[test]
    fn unwritable_directory_fails_with_io_error() {
        let missing = Path::new("/nonexistent-agentmap-export-dir");
        let err = export("text", missing).unwrap_err();
        assert!(matches!(err, crate::error::AgentmapError::Io(_)));
    }
}
