//! Opening source documents
//!
//! Every failure here is recoverable: the caller substitutes a placeholder
//! page carrying the [`SourceIssue`] reason.

use crate::error::SourceIssue;
use lopdf::Document;
use std::path::Path;

/// Load the document at `path`, which must already be resolved.
///
/// The returned document owns its data; no file handle stays open.
pub fn open_document(path: &Path) -> Result<Document, SourceIssue> {
    if !path.is_file() {
        return Err(SourceIssue::Missing(path.to_path_buf()));
    }
    Document::load(path).map_err(|e| SourceIssue::Unreadable {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}
