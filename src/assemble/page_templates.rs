//! Page template assembly.
//!
//! Page templates are the one family whose content is not allowed to degrade:
//! a valid `page-template.json` marker promises a sibling
//! `page-definition.json`, and a missing or malformed definition aborts the
//! whole aggregation run instead of emptying a field.

use crate::data::{PageTemplate, PageTemplateMarker, PageTemplateMetadata};
use crate::error::ProjectError;
use crate::logger::Reporter;
use crate::scan::{Discovered, PAGE_DEFINITION, PAGE_TEMPLATE_MARKER, scan_entities};
use rayon::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Assemble every page template one level below `src`, in scan order.
pub fn collect_page_templates(
    src: &Path,
    reporter: &dyn Reporter,
) -> Result<Vec<PageTemplate>, ProjectError> {
    let results: Vec<Result<PageTemplate, ProjectError>> =
        scan_entities::<PageTemplateMarker>(src, PAGE_TEMPLATE_MARKER, reporter)
            .into_par_iter()
            .map(build_page_template)
            .collect();

    let mut templates = Vec::with_capacity(results.len());
    for result in results {
        templates.push(result?);
    }
    Ok(templates)
}

fn build_page_template(
    entity: Discovered<PageTemplateMarker>,
) -> Result<PageTemplate, ProjectError> {
    let Discovered {
        dir,
        slug,
        metadata,
    } = entity;

    // The definition path is derived from the directory, never read from the
    // marker.
    let definition_path = dir.join(PAGE_DEFINITION);

    let text = fs::read_to_string(&definition_path)
        .map_err(|err| ProjectError::Io(definition_path.clone(), err))?;
    let parsed: Value = serde_json::from_str(&text)
        .map_err(|err| ProjectError::Json(definition_path.clone(), err))?;
    let definition_data = serde_json::to_string(&parsed)
        .map_err(|err| ProjectError::Json(definition_path.clone(), err))?;

    Ok(PageTemplate {
        slug,
        metadata: PageTemplateMetadata {
            name: metadata.name,
            page_template_definition_path: definition_path,
        },
        definition_data,
    })
}
