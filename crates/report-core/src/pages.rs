//! Page resolution
//!
//! Turns a [`PageSelection`] into the concrete list of zero-indexed pages to
//! copy from an opened document. Resolution is forgiving: indices past the end
//! of the document are dropped and reported, never treated as errors, since
//! source documents change length between runs.

use crate::record::PageSelection;
use lopdf::content::Content;
use lopdf::{Document, Object, ObjectId};

/// Default number of pages taken once the locator finds a match
pub const DEFAULT_LOCATE_WINDOW: usize = 5;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Resolution {
    /// Pages to copy, in copy order
    pub pages: Vec<u32>,
    /// Requested indices that do not exist in the document
    pub skipped: Vec<u32>,
}

impl Resolution {
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}

/// Resolve `selection` against `doc`.
///
/// `needles` are only consulted for [`PageSelection::Locate`], which is a
/// best-effort text search and may resolve to nothing.
pub fn resolve_pages(
    doc: &Document,
    selection: &PageSelection,
    needles: &[&str],
    window: usize,
) -> Resolution {
    let page_count = doc.get_pages().len() as u32;
    match selection {
        PageSelection::Explicit(requested) => {
            let (pages, skipped) = requested
                .iter()
                .partition(|&&index| index < page_count);
            Resolution { pages, skipped }
        }
        PageSelection::All => Resolution {
            pages: (0..page_count).collect(),
            skipped: Vec::new(),
        },
        PageSelection::Locate => Resolution {
            pages: locate_pages(doc, needles, window),
            skipped: Vec::new(),
        },
    }
}

/// Find the first page whose text mentions any needle and take a run of up
/// to `window` pages starting there.
pub fn locate_pages(doc: &Document, needles: &[&str], window: usize) -> Vec<u32> {
    let needles: Vec<String> = needles
        .iter()
        .map(|needle| normalize_for_search(needle))
        .filter(|needle| !needle.is_empty())
        .collect();
    if needles.is_empty() || window == 0 {
        return Vec::new();
    }

    let page_ids: Vec<ObjectId> = doc.get_pages().into_values().collect();

    for (index, &page_id) in page_ids.iter().enumerate() {
        let text = normalize_for_search(&page_text(doc, page_id));
        if needles.iter().any(|needle| text.contains(needle.as_str())) {
            let end = index.saturating_add(window).min(page_ids.len());
            return (index..end).map(|i| i as u32).collect();
        }
    }
    Vec::new()
}

/// Lowercase and collapse whitespace so line breaks inside a course title
/// still match.
fn normalize_for_search(text: &str) -> String {
    text.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Best-effort text of one page, read from its text-showing operators.
///
/// Pages whose content cannot be decoded yield an empty string.
pub fn page_text(doc: &Document, page_id: ObjectId) -> String {
    let mut text = String::new();
    let Ok(content) = doc.get_page_content(page_id) else {
        return text;
    };
    let Ok(content) = Content::decode(&content) else {
        return text;
    };

    for op in content.operations {
        match op.operator.as_str() {
            "Tj" | "TJ" | "'" | "\"" => {
                for operand in &op.operands {
                    collect_strings(operand, &mut text);
                }
            }
            "ET" | "T*" | "Td" | "TD" => {
                if !text.ends_with(' ') && !text.is_empty() {
                    text.push(' ');
                }
            }
            _ => {}
        }
    }
    text.trim_end().to_string()
}

fn collect_strings(operand: &Object, out: &mut String) {
    match operand {
        Object::String(bytes, _) => out.push_str(&decode_pdf_string(bytes)),
        Object::Array(items) => {
            for item in items {
                collect_strings(item, out);
            }
        }
        _ => {}
    }
}

/// UTF-16BE with a byte order mark, otherwise Latin-1
fn decode_pdf_string(bytes: &[u8]) -> String {
    if bytes.len() >= 2 && bytes[0] == 0xFE && bytes[1] == 0xFF {
        let units: Vec<u16> = bytes[2..]
            .chunks_exact(2)
            .map(|chunk| u16::from_be_bytes([chunk[0], chunk[1]]))
            .collect();
        return String::from_utf16_lossy(&units);
    }
    bytes.iter().map(|&b| b as char).collect()
}
