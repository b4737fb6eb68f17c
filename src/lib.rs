//! Fragkit - a convention-based project loader for fragment collection
//! workspaces.
//!
//! Given a project root laid out as
//!
//! ```text
//! <base>/package.json
//! <base>/src/<collection>/collection.json
//! <base>/src/<collection>/<fragment>/fragment.json
//! <base>/src/<collection>/<composition>/fragment-composition.json
//! <base>/src/<template>/page-template.json
//! <base>/src/<template>/page-definition.json
//! ```
//!
//! [`aggregate`] scans the tree and returns a typed [`Project`] for a
//! downstream builder or renderer. Broken entities degrade rather than fail:
//! a directory with an unparsable marker is dropped, a missing content file
//! becomes an empty string, and each such problem is handed to an injected
//! [`Reporter`] sink. Only the package descriptor and a page template's
//! definition file are allowed to abort the run.
//!
//! ```no_run
//! use fragkit::{ConsoleReporter, aggregate};
//!
//! let project = aggregate("path/to/project", &ConsoleReporter)?;
//! for collection in &project.collections {
//!     println!("{}: {} fragments", collection.slug, collection.fragments.len());
//! }
//! # Ok::<(), fragkit::ProjectError>(())
//! ```

pub mod assemble;
pub mod content;
pub mod data;
pub mod error;
pub mod logger;
pub mod project;
pub mod scan;

pub use data::{
    Collection, CollectionMetadata, CompositionMetadata, Fragment, FragmentComposition,
    FragmentMetadata, PageTemplate, PageTemplateMarker, PageTemplateMetadata, Project,
};
pub use error::ProjectError;
pub use logger::{ConsoleReporter, Issue, MemoryReporter, Reporter};
pub use project::aggregate;
