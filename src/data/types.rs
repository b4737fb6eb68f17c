//! Data types for the aggregated project tree.
//!
//! Everything here is plain data: built by the assemblers, serialized to JSON
//! on demand for downstream consumers. Metadata stays an opaque mapping; the
//! keys this crate acts on are lifted into typed fields and the rest ride
//! along in a flattened `extra` map.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::PathBuf;

/// The complete aggregated project tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Project {
    /// Absolute path of the project root.
    pub base_path: PathBuf,

    /// Opaque project metadata, read from the package descriptor.
    pub project: Map<String, Value>,

    /// Collections found under `src/`, in filesystem scan order.
    pub collections: Vec<Collection>,

    /// Page templates found under `src/`, in filesystem scan order.
    pub page_templates: Vec<PageTemplate>,
}

/// A fragment collection directory and everything inside it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Collection {
    /// Directory basename, also used as the collection id.
    pub slug: String,

    /// Parsed `collection.json` contents.
    pub metadata: CollectionMetadata,

    /// Compositions found one level below the collection directory.
    pub fragment_compositions: Vec<FragmentComposition>,

    /// Fragments found one level below the collection directory.
    pub fragments: Vec<Fragment>,
}

impl Collection {
    /// The collection id exposed to consumers. Always equals the slug.
    pub fn fragment_collection_id(&self) -> &str {
        &self.slug
    }
}

/// A single fragment with its loaded content.
///
/// Content fields hold the raw file text. A missing source file degrades the
/// field to `""` rather than failing the aggregation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Fragment {
    /// Directory basename.
    pub slug: String,

    /// Parsed `fragment.json` contents.
    pub metadata: FragmentMetadata,

    /// Raw contents of the file named by `metadata.html_path`, or `""`.
    pub html: String,

    /// Raw contents of the file named by `metadata.css_path`, or `""`.
    pub css: String,

    /// Raw contents of the file named by `metadata.js_path`, or `""`.
    pub js: String,

    /// Raw contents of the optional configuration file, or `""`.
    pub configuration: String,
}

/// A fragment composition with its loaded definition.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FragmentComposition {
    /// Directory basename.
    pub slug: String,

    /// Parsed `fragment-composition.json` contents.
    pub metadata: CompositionMetadata,

    /// Raw contents of the referenced definition file, or `""`.
    pub definition_data: String,
}

/// A page template with its loaded definition.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageTemplate {
    /// Directory basename.
    pub slug: String,

    /// Derived template metadata, see [`PageTemplateMetadata`].
    pub metadata: PageTemplateMetadata,

    /// JSON re-stringification of the sibling `page-definition.json`.
    /// Unlike every other content field this one is mandatory; a missing or
    /// malformed definition aborts the aggregation run.
    pub definition_data: String,
}

// ============================================================================
// Metadata shapes
// ============================================================================

/// Parsed `collection.json` contents.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CollectionMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Keys this crate does not act on, preserved verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Parsed `fragment.json` contents.
///
/// The four path fields are relative to the fragment's own directory.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FragmentMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub html_path: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub css_path: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub js_path: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub configuration_path: Option<String>,

    /// Keys this crate does not act on, preserved verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Parsed `fragment-composition.json` contents.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CompositionMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub fragment_composition_definition_path: Option<String>,

    /// Keys this crate does not act on, preserved verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// On-disk shape of `page-template.json`.
///
/// Only `name` survives into the model; the definition path is derived from
/// the directory, not read from the marker.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PageTemplateMarker {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Metadata carried by an assembled [`PageTemplate`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageTemplateMetadata {
    /// Name copied from the marker file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Absolute path of the sibling `page-definition.json`. Always derived,
    /// never read from the marker.
    pub page_template_definition_path: PathBuf,
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fragment_metadata_empty_object() {
        let meta: FragmentMetadata = serde_json::from_str("{}").unwrap();
        assert_eq!(meta.name, None);
        assert_eq!(meta.html_path, None);
        assert!(meta.extra.is_empty());
    }

    #[test]
    fn test_fragment_metadata_camel_case_keys() {
        let meta: FragmentMetadata = serde_json::from_str(
            r#"{
                "name": "Card",
                "htmlPath": "index.html",
                "cssPath": "styles.css",
                "jsPath": "main.js",
                "configurationPath": "configuration.json"
            }"#,
        )
        .unwrap();

        assert_eq!(meta.name.as_deref(), Some("Card"));
        assert_eq!(meta.html_path.as_deref(), Some("index.html"));
        assert_eq!(meta.css_path.as_deref(), Some("styles.css"));
        assert_eq!(meta.js_path.as_deref(), Some("main.js"));
        assert_eq!(meta.configuration_path.as_deref(), Some("configuration.json"));
    }

    #[test]
    fn test_fragment_metadata_preserves_unknown_keys() {
        let meta: FragmentMetadata = serde_json::from_str(
            r#"{"name": "Card", "type": "component", "sortOrder": 3}"#,
        )
        .unwrap();

        assert_eq!(meta.extra.get("type"), Some(&Value::from("component")));
        assert_eq!(meta.extra.get("sortOrder"), Some(&Value::from(3)));
    }

    #[test]
    fn test_fragment_metadata_rejects_non_object() {
        assert!(serde_json::from_str::<FragmentMetadata>("[]").is_err());
        assert!(serde_json::from_str::<FragmentMetadata>("\"card\"").is_err());
        assert!(serde_json::from_str::<FragmentMetadata>("3").is_err());
    }

    #[test]
    fn test_composition_metadata_definition_path_key() {
        let meta: CompositionMetadata = serde_json::from_str(
            r#"{"name": "Hero", "fragmentCompositionDefinitionPath": "definition.json"}"#,
        )
        .unwrap();
        assert_eq!(
            meta.fragment_composition_definition_path.as_deref(),
            Some("definition.json")
        );
    }

    #[test]
    fn test_fragment_collection_id_is_slug() {
        let collection = Collection {
            slug: "basic-components".to_string(),
            metadata: CollectionMetadata::default(),
            fragment_compositions: vec![],
            fragments: vec![],
        };
        assert_eq!(collection.fragment_collection_id(), "basic-components");
    }

    #[test]
    fn test_page_template_metadata_serializes_camel_case() {
        let meta = PageTemplateMetadata {
            name: Some("Landing".to_string()),
            page_template_definition_path: PathBuf::from("/p/src/landing/page-definition.json"),
        };
        let json = serde_json::to_value(&meta).unwrap();
        assert_eq!(json["name"], "Landing");
        assert!(json["pageTemplateDefinitionPath"]
            .as_str()
            .unwrap()
            .ends_with("page-definition.json"));
    }
}
