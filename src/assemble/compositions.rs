//! Fragment composition assembly.

use crate::content::{load_content, owner_label};
use crate::data::{CompositionMetadata, FragmentComposition};
use crate::logger::Reporter;
use crate::scan::{COMPOSITION_MARKER, Discovered, scan_entities};
use rayon::prelude::*;
use std::path::Path;

/// Assemble every fragment composition one level below `base`, in scan order.
pub fn collect_compositions(base: &Path, reporter: &dyn Reporter) -> Vec<FragmentComposition> {
    scan_entities::<CompositionMetadata>(base, COMPOSITION_MARKER, reporter)
        .into_par_iter()
        .map(|entity| build_composition(entity, reporter))
        .collect()
}

fn build_composition(
    entity: Discovered<CompositionMetadata>,
    reporter: &dyn Reporter,
) -> FragmentComposition {
    let Discovered {
        dir,
        slug,
        metadata,
    } = entity;
    let owner = owner_label(metadata.name.as_deref(), &dir);

    let definition_data = load_content(
        &dir,
        metadata.fragment_composition_definition_path.as_deref(),
        &owner,
        reporter,
    );

    FragmentComposition {
        slug,
        metadata,
        definition_data,
    }
}
