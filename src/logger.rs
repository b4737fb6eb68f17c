//! Issue reporting with colored output.
//!
//! Discovery and content loading never abort the run over a single broken
//! entity; they hand a typed [`Issue`] to an injected [`Reporter`] sink and
//! carry on. The sink is a constructor argument rather than process-global
//! state, so the aggregator stays unit-testable without capturing stderr.
//!
//! # Example
//!
//! ```ignore
//! let reporter = ConsoleReporter;
//! reporter.report(Issue::MissingContent {
//!     owner: "Card".into(),
//!     relative: "index.html".into(),
//! });
//! // prints: [content] `index.html` referenced by `Card` could not be read
//! ```

use colored::{ColoredString, Colorize};
use std::fmt;
use std::path::PathBuf;
use std::sync::Mutex;

// ============================================================================
// Issue
// ============================================================================

/// A non-fatal problem found while assembling a project.
///
/// Issues are an observability side channel; callers must not branch on them.
/// The entity they describe is either dropped (`InvalidMetadata`) or kept with
/// an empty content field (`MissingContent`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Issue {
    /// A marker file was missing, unreadable, or failed to parse as the
    /// family's metadata shape. The directory is excluded from the scan.
    InvalidMetadata {
        /// Directory that carried the marker.
        dir: PathBuf,
        /// Marker filename (e.g. `fragment.json`).
        marker: &'static str,
        /// Parse or IO failure detail.
        detail: String,
    },

    /// A referenced content file could not be read. The owning entity is kept
    /// and the field degrades to an empty string.
    MissingContent {
        /// Owning entity, by declared name or directory path.
        owner: String,
        /// The relative path that failed to resolve.
        relative: String,
    },
}

impl Issue {
    /// Scope label used as the colored log prefix.
    fn scope(&self) -> &'static str {
        match self {
            Issue::InvalidMetadata { .. } => "scan",
            Issue::MissingContent { .. } => "content",
        }
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Issue::InvalidMetadata {
                dir,
                marker,
                detail,
            } => {
                write!(f, "invalid `{marker}` in `{}`: {detail}", dir.display())
            }
            Issue::MissingContent { owner, relative } => {
                write!(f, "`{relative}` referenced by `{owner}` could not be read")
            }
        }
    }
}

// ============================================================================
// Reporter
// ============================================================================

/// Sink for non-fatal issues.
///
/// `Send + Sync` because enrichment fans out across a rayon pool; report order
/// may interleave across entities, but each issue still names its owner.
pub trait Reporter: Send + Sync {
    fn report(&self, issue: Issue);
}

/// Reporter that prints colored `[scope]`-prefixed lines to stderr.
pub struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn report(&self, issue: Issue) {
        eprintln!("{} {issue}", colorize_prefix(issue.scope()));
    }
}

/// Reporter that keeps issues in memory, for assertions in tests.
#[derive(Default)]
pub struct MemoryReporter {
    issues: Mutex<Vec<Issue>>,
}

impl MemoryReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything reported so far.
    pub fn issues(&self) -> Vec<Issue> {
        self.issues.lock().map(|issues| issues.clone()).unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.issues.lock().map(|issues| issues.is_empty()).unwrap_or(true)
    }
}

impl Reporter for MemoryReporter {
    fn report(&self, issue: Issue) {
        if let Ok(mut issues) = self.issues.lock() {
            issues.push(issue);
        }
    }
}

/// Apply color to a scope prefix. Issues are error-severity, so every scope
/// renders red; the scope name keeps entries attributable when interleaved.
#[inline]
fn colorize_prefix(scope: &str) -> ColoredString {
    format!("[{scope}]").bright_red().bold()
}

// ============================================================================
// Tests
// ============================================================================
