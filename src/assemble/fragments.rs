//! Fragment assembly.

use crate::content::{load_content, owner_label};
use crate::data::{Fragment, FragmentMetadata};
use crate::logger::Reporter;
use crate::scan::{Discovered, FRAGMENT_MARKER, scan_entities};
use rayon::prelude::*;
use std::path::Path;

/// Assemble every fragment one level below `base`, in scan order.
pub fn collect_fragments(base: &Path, reporter: &dyn Reporter) -> Vec<Fragment> {
    scan_entities::<FragmentMetadata>(base, FRAGMENT_MARKER, reporter)
        .into_par_iter()
        .map(|entity| build_fragment(entity, reporter))
        .collect()
}

fn build_fragment(entity: Discovered<FragmentMetadata>, reporter: &dyn Reporter) -> Fragment {
    let Discovered {
        dir,
        slug,
        metadata,
    } = entity;
    let owner = owner_label(metadata.name.as_deref(), &dir);

    let html = load_content(&dir, metadata.html_path.as_deref(), &owner, reporter);
    let css = load_content(&dir, metadata.css_path.as_deref(), &owner, reporter);
    let js = load_content(&dir, metadata.js_path.as_deref(), &owner, reporter);

    // The configuration file is optional by convention: read it only when it
    // is already on disk, and stay silent when it is not. html/css/js absence
    // is reported; configuration absence is not.
    let configuration = match metadata.configuration_path.as_deref() {
        Some(rel) if !rel.is_empty() && dir.join(rel).exists() => {
            load_content(&dir, Some(rel), &owner, reporter)
        }
        _ => String::new(),
    };

    Fragment {
        slug,
        metadata,
        html,
        css,
        js,
        configuration,
    }
}
