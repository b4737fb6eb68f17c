//! Collection assembly.

use super::{collect_compositions, collect_fragments};
use crate::data::{Collection, CollectionMetadata};
use crate::logger::Reporter;
use crate::scan::{COLLECTION_MARKER, Discovered, scan_entities};
use rayon::prelude::*;
use std::path::Path;

/// Assemble every collection one level below `src`, in scan order.
///
/// Each collection recursively assembles the compositions and fragments found
/// inside its own directory. Collections are independent subtrees, so they
/// enrich in parallel without affecting each other's output order.
pub fn collect_collections(src: &Path, reporter: &dyn Reporter) -> Vec<Collection> {
    scan_entities::<CollectionMetadata>(src, COLLECTION_MARKER, reporter)
        .into_par_iter()
        .map(|entity| build_collection(entity, reporter))
        .collect()
}

fn build_collection(entity: Discovered<CollectionMetadata>, reporter: &dyn Reporter) -> Collection {
    let Discovered {
        dir,
        slug,
        metadata,
    } = entity;

    let fragment_compositions = collect_compositions(&dir, reporter);
    let fragments = collect_fragments(&dir, reporter);

    Collection {
        slug,
        metadata,
        fragment_compositions,
        fragments,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logger::MemoryReporter;
    use std::fs;
    use tempfile::TempDir;

    fn write_json(path: &Path, contents: &str) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, contents).unwrap();
    }

    #[test]
    fn test_collect_collections_nests_fragments_and_compositions() {
        let src = TempDir::new().unwrap();
        let collection = src.path().join("basic");
        write_json(&collection.join("collection.json"), r#"{"name": "Basic"}"#);

        let card = collection.join("card");
        write_json(
            &card.join("fragment.json"),
            r#"{"name": "Card", "htmlPath": "index.html"}"#,
        );
        fs::write(card.join("index.html"), "<div></div>").unwrap();

        let hero = collection.join("hero");
        write_json(
            &hero.join("fragment-composition.json"),
            r#"{"name": "Hero", "fragmentCompositionDefinitionPath": "definition.json"}"#,
        );
        fs::write(hero.join("definition.json"), "{}").unwrap();

        let reporter = MemoryReporter::new();
        let collections = collect_collections(src.path(), &reporter);

        assert_eq!(collections.len(), 1);
        let collection = &collections[0];
        assert_eq!(collection.slug, "basic");
        assert_eq!(collection.fragment_collection_id(), "basic");
        assert_eq!(collection.metadata.name.as_deref(), Some("Basic"));
        assert_eq!(collection.fragments.len(), 1);
        assert_eq!(collection.fragments[0].html, "<div></div>");
        assert_eq!(collection.fragment_compositions.len(), 1);
        assert_eq!(collection.fragment_compositions[0].definition_data, "{}");
        assert!(reporter.is_empty());
    }

    #[test]
    fn test_broken_collection_marker_drops_only_that_collection() {
        let src = TempDir::new().unwrap();
        write_json(
            &src.path().join("good/collection.json"),
            r#"{"name": "Good"}"#,
        );
        write_json(&src.path().join("bad/collection.json"), "{broken");

        let reporter = MemoryReporter::new();
        let collections = collect_collections(src.path(), &reporter);

        assert_eq!(collections.len(), 1);
        assert_eq!(collections[0].slug, "good");
        assert_eq!(reporter.issues().len(), 1);
    }

    #[test]
    fn test_collection_without_children_is_empty_not_missing() {
        let src = TempDir::new().unwrap();
        write_json(&src.path().join("bare/collection.json"), "{}");

        let reporter = MemoryReporter::new();
        let collections = collect_collections(src.path(), &reporter);

        assert_eq!(collections.len(), 1);
        assert!(collections[0].fragments.is_empty());
        assert!(collections[0].fragment_compositions.is_empty());
    }

    #[test]
    fn test_fragments_outside_collections_are_not_picked_up() {
        // A fragment directory directly under src, with no collection marker
        // anywhere, belongs to no collection and no scan scope.
        let src = TempDir::new().unwrap();
        write_json(
            &src.path().join("stray/fragment.json"),
            r#"{"name": "Stray"}"#,
        );

        let reporter = MemoryReporter::new();
        let collections = collect_collections(src.path(), &reporter);

        assert!(collections.is_empty());
        assert!(reporter.is_empty());
    }
}
