//! Top-level project aggregation.

use crate::assemble::{collect_collections, collect_page_templates};
use crate::data::Project;
use crate::error::ProjectError;
use crate::logger::Reporter;
use crate::scan::{PACKAGE_DESCRIPTOR, SRC_DIR};
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};

/// Aggregate the project rooted at `base_path` into an in-memory [`Project`].
///
/// Reads the package descriptor (required; failure is fatal), then assembles
/// collections and page templates from `<base_path>/src`. Stateless: every
/// call re-scans the filesystem from scratch, so repeated calls over an
/// unchanged tree return identical projects.
///
/// Non-fatal problems (broken markers, missing referenced content) go to
/// `reporter` and degrade per entity; see [`crate::logger::Issue`].
pub fn aggregate(
    base_path: impl AsRef<Path>,
    reporter: &dyn Reporter,
) -> Result<Project, ProjectError> {
    let base_path = normalize(base_path.as_ref())?;
    let project = read_project_metadata(&base_path)?;

    let src = base_path.join(SRC_DIR);
    let collections = collect_collections(&src, reporter);
    let page_templates = collect_page_templates(&src, reporter)?;

    Ok(Project {
        base_path,
        project,
        collections,
        page_templates,
    })
}

/// The model promises an absolute base path; resolve a relative one against
/// the current directory up front.
fn normalize(base: &Path) -> Result<PathBuf, ProjectError> {
    std::path::absolute(base).map_err(|err| ProjectError::Io(base.to_path_buf(), err))
}

/// Read and parse the project's package descriptor. Fails loudly: a missing
/// or malformed descriptor aborts the run.
fn read_project_metadata(base: &Path) -> Result<Map<String, Value>, ProjectError> {
    let path = base.join(PACKAGE_DESCRIPTOR);
    let text = fs::read_to_string(&path).map_err(|err| ProjectError::Io(path.clone(), err))?;
    serde_json::from_str(&text).map_err(|err| ProjectError::Json(path, err))
}

// ============================================================================
// Tests
// ============================================================================
