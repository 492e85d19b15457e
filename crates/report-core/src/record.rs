//! Course mapping records
//!
//! A record pairs one home-university course with the MOOC proposed as its
//! equivalent. Records are deserialized once from configuration and only ever
//! borrowed afterwards.

use crate::error::ReportError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Overlap at or above this percentage counts as a passing match.
pub const PASSING_OVERLAP: u32 = 70;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CourseMapping {
    /// Home course code, also the key of the output file name
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub category: Option<String>,
    /// Home-university syllabus document
    #[serde(default)]
    pub source: Option<DocumentRef>,
    pub target: TargetCourse,
    /// Extra label/value rows for the cover page, rendered in order
    #[serde(default)]
    pub details: Vec<Detail>,
    #[serde(default)]
    pub comparison: Vec<TopicPair>,
    /// Overall overlap, display only
    #[serde(default)]
    pub overlap: Option<String>,
    #[serde(default)]
    pub note: Option<String>,
}

impl CourseMapping {
    /// Reject records whose code cannot produce a usable file name
    pub fn validate(&self) -> Result<(), ReportError> {
        if normalize_identity(&self.code).is_empty() {
            return Err(ReportError::EmptyIdentity);
        }
        Ok(())
    }

    pub fn normalized_code(&self) -> String {
        normalize_identity(&self.code)
    }

    pub fn overlap_label(&self) -> &str {
        self.overlap.as_deref().unwrap_or(">= 70%")
    }

    /// Strings the page locator searches for when no explicit pages are given
    pub fn locate_needles(&self) -> Vec<&str> {
        [self.code.as_str(), self.name.as_str()]
            .into_iter()
            .filter(|needle| !needle.trim().is_empty())
            .collect()
    }
}

/// The external course proposed as an equivalent
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TargetCourse {
    pub name: String,
    pub institute: String,
    pub duration: String,
    #[serde(default)]
    pub course_id: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub instructor: Option<String>,
    #[serde(default)]
    pub document: Option<DocumentRef>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DocumentRef {
    /// Relative paths resolve against the configured base directory
    pub path: PathBuf,
    /// When absent, sources are auto-located and targets are copied whole
    #[serde(default)]
    pub pages: Option<PageSelection>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Detail {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TopicPair {
    pub left: String,
    pub right: String,
    #[serde(default)]
    pub matched: MatchIndicator,
}

/// Which pages of a document to copy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawSelection", into = "RawSelection")]
pub enum PageSelection {
    /// Zero-indexed pages, copied in list order
    Explicit(Vec<u32>),
    All,
    /// Best-effort search of page text for the course code or name
    Locate,
}

#[derive(Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum RawSelection {
    List(Vec<u32>),
    Keyword(SelectionKeyword),
}

#[derive(Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
enum SelectionKeyword {
    All,
    Locate,
}

impl From<RawSelection> for PageSelection {
    fn from(raw: RawSelection) -> Self {
        match raw {
            RawSelection::List(pages) => PageSelection::Explicit(pages),
            RawSelection::Keyword(SelectionKeyword::All) => PageSelection::All,
            RawSelection::Keyword(SelectionKeyword::Locate) => PageSelection::Locate,
        }
    }
}

impl From<PageSelection> for RawSelection {
    fn from(selection: PageSelection) -> Self {
        match selection {
            PageSelection::Explicit(pages) => RawSelection::List(pages),
            PageSelection::All => RawSelection::Keyword(SelectionKeyword::All),
            PageSelection::Locate => RawSelection::Keyword(SelectionKeyword::Locate),
        }
    }
}

/// Per-row match marker: either a percentage like `"85%"` or a plain yes/no
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MatchIndicator {
    Flag(bool),
    Percent(String),
}

impl Default for MatchIndicator {
    fn default() -> Self {
        MatchIndicator::Flag(true)
    }
}

impl MatchIndicator {
    pub fn label(&self) -> &str {
        match self {
            MatchIndicator::Flag(true) => "Yes",
            MatchIndicator::Flag(false) => "No",
            MatchIndicator::Percent(value) => value.as_str(),
        }
    }

    /// Whether the row meets the overlap bar. Unparseable percentages do not.
    pub fn passes(&self) -> bool {
        match self {
            MatchIndicator::Flag(flag) => *flag,
            MatchIndicator::Percent(value) => parse_percent(value)
                .map(|pct| pct >= PASSING_OVERLAP)
                .unwrap_or(false),
        }
    }
}

fn parse_percent(value: &str) -> Option<u32> {
    let digits: String = value
        .trim()
        .trim_start_matches(|c: char| !c.is_ascii_digit())
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().ok()
}

/// Make a course code safe to embed in a file name.
///
/// Spaces and path separators become underscores; surrounding whitespace is
/// dropped first so a blank code normalizes to the empty string.
pub fn normalize_identity(code: &str) -> String {
    code.trim()
        .chars()
        .map(|c| match c {
            ' ' | '/' | '\\' => '_',
            c if c.is_whitespace() => '_',
            c => c,
        })
        .collect()
}
