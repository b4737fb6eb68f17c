//! The in-memory project model.
//!
//! A [`Project`](types::Project) is built once per aggregation call, handed to
//! the downstream builder/renderer, and discarded. It owns everything beneath
//! it exclusively and has no update operations.

mod types;

pub use types::{
    Collection, CollectionMetadata, CompositionMetadata, Fragment, FragmentComposition,
    FragmentMetadata, PageTemplate, PageTemplateMarker, PageTemplateMetadata, Project,
};
