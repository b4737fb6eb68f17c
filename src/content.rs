//! Graceful-degradation content file loading.
//!
//! Entity metadata names its content files by paths relative to the entity's
//! own directory. Loading one of those files never fails the aggregation: an
//! unset path is silently empty, an unreadable file is reported and empty.

use crate::logger::{Issue, Reporter};
use std::fs;
use std::path::Path;

/// Resolve `relative` against `dir` and return the file's raw text.
///
/// Returns `""` when `relative` is `None` or empty, with no filesystem access
/// and no report. Returns `""` and reports [`Issue::MissingContent`] when the
/// resolved file cannot be read. The text is returned untransformed; trailing
/// whitespace and final newlines are part of the content.
pub fn load_content(
    dir: &Path,
    relative: Option<&str>,
    owner: &str,
    reporter: &dyn Reporter,
) -> String {
    let Some(relative) = relative.filter(|rel| !rel.is_empty()) else {
        return String::new();
    };

    match fs::read_to_string(dir.join(relative)) {
        Ok(text) => text,
        Err(_) => {
            reporter.report(Issue::MissingContent {
                owner: owner.to_string(),
                relative: relative.to_string(),
            });
            String::new()
        }
    }
}

/// Label used to attribute load failures: the entity's declared name when it
/// has one, its directory path otherwise.
pub fn owner_label(name: Option<&str>, dir: &Path) -> String {
    match name {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => dir.display().to_string(),
    }
}
