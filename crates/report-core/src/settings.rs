//! Run-wide settings shared by the composer and the proposal builder

use crate::pages::DEFAULT_LOCATE_WINDOW;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Settings {
    /// Semester label printed on cover pages
    #[serde(default = "default_semester")]
    pub semester: String,
    /// Directory that relative document paths resolve against
    #[serde(default = "default_base_dir")]
    pub base_dir: PathBuf,
    /// Insert a divider page before each section
    #[serde(default = "default_include_dividers")]
    pub include_dividers: bool,
    /// Pages taken after an auto-located match
    #[serde(default = "default_locate_window")]
    pub locate_window: usize,
    /// Fixed issue date. When absent, today's date is printed.
    #[serde(default)]
    pub issued_on: Option<String>,
    #[serde(default)]
    pub labels: Labels,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            semester: default_semester(),
            base_dir: default_base_dir(),
            include_dividers: default_include_dividers(),
            locate_window: default_locate_window(),
            issued_on: None,
            labels: Labels::default(),
        }
    }
}

impl Settings {
    /// Date string stamped on generated pages
    pub fn issue_date(&self) -> String {
        match &self.issued_on {
            Some(date) => date.clone(),
            None => chrono::Local::now().format("%B %d, %Y").to_string(),
        }
    }

    pub fn resolve_path(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.base_dir.join(path)
        }
    }
}

/// Names of the bodies involved, used in headings and boilerplate
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Labels {
    /// The university whose course is being substituted
    pub home: String,
    /// The MOOC provider
    pub provider: String,
    pub regulation: String,
    pub platform: String,
    pub submitted_to: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            home: "KTU".to_string(),
            provider: "NPTEL".to_string(),
            regulation: "KTU B.Tech Regulations 2024, Section 17".to_string(),
            platform: "NPTEL/SWAYAM (AICTE Approved)".to_string(),
            submitted_to: "The Registrar, KTU".to_string(),
        }
    }
}

fn default_semester() -> String {
    "Jan-Apr 2026".to_string()
}

fn default_base_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_include_dividers() -> bool {
    true
}

fn default_locate_window() -> usize {
    DEFAULT_LOCATE_WINDOW
}
