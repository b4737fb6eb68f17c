//! Convention-based entity discovery.
//!
//! Every entity family in a project is discovered the same way: enumerate the
//! immediate child directories of a base directory, keep the ones carrying the
//! family's marker file, and validate the marker against the family's metadata
//! shape. The one generic function here replaces a per-family scanner; the
//! assemblers only differ in marker name and in how they enrich survivors.
//!
//! A broken marker never fails the scan as a whole. The directory is dropped,
//! an [`Issue::InvalidMetadata`] is reported, and siblings are unaffected.

use crate::logger::{Issue, Reporter};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

// ============================================================================
// On-disk conventions
// ============================================================================
//
// <base>/package.json
// <base>/src/<collection>/collection.json
// <base>/src/<collection>/<fragment>/fragment.json
// <base>/src/<collection>/<composition>/fragment-composition.json
// <base>/src/<template>/page-template.json
// <base>/src/<template>/page-definition.json

/// Required project metadata at the project root.
pub const PACKAGE_DESCRIPTOR: &str = "package.json";

/// Directory under the project root that holds all entities.
pub const SRC_DIR: &str = "src";

/// Marker identifying a collection directory.
pub const COLLECTION_MARKER: &str = "collection.json";

/// Marker identifying a fragment directory.
pub const FRAGMENT_MARKER: &str = "fragment.json";

/// Marker identifying a fragment composition directory.
pub const COMPOSITION_MARKER: &str = "fragment-composition.json";

/// Marker identifying a page template directory.
pub const PAGE_TEMPLATE_MARKER: &str = "page-template.json";

/// Mandatory definition file next to a page template marker.
pub const PAGE_DEFINITION: &str = "page-definition.json";

// ============================================================================
// Scanner
// ============================================================================

/// A directory that passed discovery: it carries the marker and the marker
/// parsed as the family's metadata shape.
#[derive(Debug, Clone)]
pub struct Discovered<M> {
    /// The entity's directory.
    pub dir: PathBuf,
    /// Directory basename, the entity's identifier.
    pub slug: String,
    /// Parsed marker contents.
    pub metadata: M,
}

/// Find each immediate child directory of `base` containing `marker`, parse
/// the marker as `M`, and yield the survivors in encounter order.
///
/// The order is whatever the filesystem hands back, not alphabetical; it is
/// preserved as-is so repeated scans of an unchanged tree agree. Zero matches
/// and an unreadable or missing `base` both yield an empty vec.
pub fn scan_entities<M: DeserializeOwned>(
    base: &Path,
    marker: &'static str,
    reporter: &dyn Reporter,
) -> Vec<Discovered<M>> {
    let mut found = Vec::new();

    for entry in WalkDir::new(base)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .filter_map(Result::ok)
    {
        if !entry.file_type().is_dir() {
            continue;
        }
        let dir = entry.into_path();
        let marker_path = dir.join(marker);
        if !marker_path.is_file() {
            continue;
        }

        match read_marker::<M>(&marker_path) {
            Ok(metadata) => {
                let slug = dir
                    .file_name()
                    .map(|name| name.to_string_lossy().into_owned())
                    .unwrap_or_default();
                found.push(Discovered {
                    dir,
                    slug,
                    metadata,
                });
            }
            Err(detail) => reporter.report(Issue::InvalidMetadata {
                dir,
                marker,
                detail,
            }),
        }
    }

    found
}

/// Read and parse a marker file. IO and parse failures collapse into a
/// human-readable detail string for the issue report.
fn read_marker<M: DeserializeOwned>(path: &Path) -> Result<M, String> {
    let text = fs::read_to_string(path).map_err(|err| err.to_string())?;
    serde_json::from_str(&text).map_err(|err| err.to_string())
}

// ============================================================================
// Tests
// ============================================================================
