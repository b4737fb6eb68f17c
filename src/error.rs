//! Aggregation error types.

use std::path::PathBuf;
use thiserror::Error;

/// Fatal aggregation errors.
///
/// Only two files are allowed to abort a run: the project's package descriptor
/// and a page template's definition file. Per-entity marker and content
/// problems never surface here; they are reported through the
/// [`Reporter`](crate::logger::Reporter) sink instead.
#[derive(Debug, Error)]
pub enum ProjectError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("JSON parsing error in `{0}`")]
    Json(PathBuf, #[source] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};

    #[test]
    fn test_project_error_display() {
        let io_err = ProjectError::Io(
            PathBuf::from("package.json"),
            Error::new(ErrorKind::NotFound, "file not found"),
        );
        let display = format!("{io_err}");
        assert!(display.contains("IO error"));
        assert!(display.contains("package.json"));

        let json_err = ProjectError::Json(
            PathBuf::from("page-definition.json"),
            serde_json::from_str::<serde_json::Value>("{").unwrap_err(),
        );
        let display = format!("{json_err}");
        assert!(display.contains("JSON parsing error"));
        assert!(display.contains("page-definition.json"));
    }
}
