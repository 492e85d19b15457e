use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Course code must not be empty")]
    EmptyIdentity,

    #[error("I/O error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("PDF operation failed: {0}")]
    Pdf(String),
}

impl ReportError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ReportError::Io {
            path: path.into(),
            source,
        }
    }
}

impl From<lopdf::Error> for ReportError {
    fn from(e: lopdf::Error) -> Self {
        ReportError::Pdf(e.to_string())
    }
}

/// Why a document slot could not be filled with copied pages.
///
/// Never surfaced to callers; it picks the text of the placeholder page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceIssue {
    NotSpecified,
    Missing(PathBuf),
    Unreadable { path: PathBuf, reason: String },
    NoPages,
}

impl SourceIssue {
    /// Human-readable reason printed on the placeholder page
    pub fn reason(&self) -> String {
        match self {
            SourceIssue::NotSpecified => "Source document not specified.".to_string(),
            SourceIssue::Missing(path) => format!("File not found: {}", file_label(path)),
            SourceIssue::Unreadable { path, reason } => {
                format!("Error loading {}: {}", file_label(path), reason)
            }
            SourceIssue::NoPages => "No matching pages found in source document.".to_string(),
        }
    }
}

fn file_label(path: &std::path::Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_reason_uses_file_name() {
        let issue = SourceIssue::Missing(PathBuf::from("/data/syllabi/Ece.pdf"));
        assert_eq!(issue.reason(), "File not found: Ece.pdf");
    }

    #[test]
    fn test_not_specified_reason() {
        assert!(SourceIssue::NotSpecified
            .reason()
            .contains("not specified"));
    }

    #[test]
    fn test_io_error_display_includes_path() {
        let err = ReportError::io(
            "out/report.pdf",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        let text = err.to_string();
        assert!(text.contains("out/report.pdf"));
        assert!(text.contains("denied"));
    }
}
