//! Run configuration loaded from TOML
//!
//! One `[settings]` table shared by every report and a `[[mappings]]` array
//! with one entry per course. Relative paths in `[settings]` resolve against
//! the directory holding the configuration file.

use anyhow::{bail, Context};
use report_core::{CourseMapping, Settings};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub settings: SettingsSection,
    #[serde(default)]
    pub mappings: Vec<CourseMapping>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SettingsSection {
    /// Where reports and the proposal are written (default: "Final Output")
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    /// Everything the report builders consume
    #[serde(flatten)]
    pub report: Settings,
}

impl Default for SettingsSection {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            report: Settings::default(),
        }
    }
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("Final Output")
}

impl Config {
    /// Load configuration from a TOML file
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read
    /// - The TOML is malformed
    /// - A mapping has an empty or duplicated course code
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let mut config = Self::from_str(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))?;

        let config_dir = path.parent().unwrap_or_else(|| Path::new(""));
        config.anchor_paths(config_dir);
        Ok(config)
    }

    /// Parse and validate configuration from a TOML string.
    ///
    /// Paths are left as written.
    pub fn from_str(s: &str) -> anyhow::Result<Self> {
        let config: Config = toml::from_str(s).context("Failed to parse TOML configuration")?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> anyhow::Result<()> {
        let mut seen = HashSet::new();
        for (index, mapping) in self.mappings.iter().enumerate() {
            mapping
                .validate()
                .with_context(|| format!("Mapping #{} ({:?})", index + 1, mapping.name))?;
            if !seen.insert(mapping.normalized_code()) {
                bail!(
                    "Mapping #{}: course code {:?} is used more than once",
                    index + 1,
                    mapping.code
                );
            }
        }
        Ok(())
    }

    /// Resolve relative `output_dir` and `base_dir` against `config_dir`
    fn anchor_paths(&mut self, config_dir: &Path) {
        let settings = &mut self.settings;
        if settings.output_dir.is_relative() {
            settings.output_dir = config_dir.join(&settings.output_dir);
        }
        if settings.report.base_dir.is_relative() {
            settings.report.base_dir = config_dir.join(&settings.report.base_dir);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use report_core::PageSelection;

    const SAMPLE: &str = r#"
        [settings]
        output_dir = "out"
        semester = "Jul-Nov 2026"
        include_dividers = false
        issued_on = "January 05, 2026"

        [settings.labels]
        provider = "SWAYAM"

        [[mappings]]
        code = "PECST745"
        name = "Computer Vision"
        category = "PE4"
        overlap = "85%"

        [mappings.source]
        path = "Computer Science and Engineering.pdf"
        pages = [329, 330, 331, 332]

        [mappings.target]
        name = "Computer Vision and Image Processing"
        institute = "IIT Guwahati"
        duration = "12 Weeks"
        document = { path = "108103174.pdf" }

        [[mappings.comparison]]
        left = "Module 1: Camera Calibration"
        right = "Weeks 1-3: Image Formation"
        matched = "90%"
    "#;

    #[test]
    fn test_parse_sample() {
        let config = Config::from_str(SAMPLE).unwrap();
        let settings = &config.settings;
        assert_eq!(settings.output_dir, PathBuf::from("out"));
        assert_eq!(settings.report.semester, "Jul-Nov 2026");
        assert!(!settings.report.include_dividers);
        assert_eq!(settings.report.labels.provider, "SWAYAM");
        assert_eq!(settings.report.labels.home, "KTU");

        assert_eq!(config.mappings.len(), 1);
        let mapping = &config.mappings[0];
        assert_eq!(
            mapping.source.as_ref().unwrap().pages,
            Some(PageSelection::Explicit(vec![329, 330, 331, 332]))
        );
        assert_eq!(mapping.target.document.as_ref().unwrap().pages, None);
        assert_eq!(mapping.comparison.len(), 1);
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = Config::from_str("").unwrap();
        assert_eq!(config.settings.output_dir, PathBuf::from("Final Output"));
        assert_eq!(config.settings.report, Settings::default());
        assert!(config.mappings.is_empty());
    }

    #[test]
    fn test_blank_code_rejected() {
        let toml = SAMPLE.replace("code = \"PECST745\"", "code = \"  \"");
        let err = Config::from_str(&toml).unwrap_err();
        assert!(format!("{:#}", err).contains("must not be empty"));
    }

    #[test]
    fn test_duplicate_code_rejected() {
        let body = SAMPLE.split_once("[[mappings]]").unwrap().1;
        let toml = format!("{}[[mappings]]{}", SAMPLE, body);
        let err = Config::from_str(&toml).unwrap_err();
        assert!(err.to_string().contains("used more than once"));
    }

    #[test]
    fn test_from_file_anchors_relative_paths() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mappings.toml");
        fs::write(&path, SAMPLE).unwrap();

        let config = Config::from_file(&path).unwrap();
        assert_eq!(config.settings.output_dir, dir.path().join("out"));
        assert_eq!(config.settings.report.base_dir, dir.path().join("."));
    }

    #[test]
    fn test_shipped_config_parses() {
        let config = Config::from_str(include_str!("../../../config/mappings.toml")).unwrap();
        assert_eq!(config.mappings.len(), 3);
        assert_eq!(config.mappings[2].source, None);
        assert_eq!(config.settings.report.base_dir, PathBuf::from(".."));
    }

    #[test]
    fn test_missing_file_error_names_path() {
        let err = Config::from_file("/nonexistent/mappings.toml").unwrap_err();
        assert!(err.to_string().contains("/nonexistent/mappings.toml"));
    }
}
