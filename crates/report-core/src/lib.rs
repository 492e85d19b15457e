//! MOOC approval report composition
//!
//! Builds one PDF per course mapping (cover, copied syllabus pages from two
//! source documents, comparison table) plus a summary proposal for the whole
//! set, using lopdf for both page import and page generation.
//!
//! - [`Composer`]: one report per [`CourseMapping`]
//! - [`ProposalBuilder`]: one summary document per run

pub mod canvas;
pub mod composer;
pub mod document;
pub mod error;
pub mod import;
pub mod pages;
pub mod proposal;
pub mod record;
pub mod render;
pub mod settings;
pub mod source;
pub mod style;
pub mod text;

#[cfg(test)]
mod test_support;

pub use composer::Composer;
pub use error::{ReportError, SourceIssue};
pub use proposal::{ProposalBuilder, PROPOSAL_FILE_NAME};
pub use record::{
    normalize_identity, CourseMapping, Detail, DocumentRef, MatchIndicator, PageSelection,
    TargetCourse, TopicPair,
};
pub use settings::{Labels, Settings};

/// File name of the report for `record`, e.g. `MOOC_PECST745_Report.pdf`
pub fn report_file_name(record: &CourseMapping) -> String {
    format!("MOOC_{}_Report.pdf", record.normalized_code())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_file_name_is_filesystem_safe() {
        let record: CourseMapping = toml::from_str(
            r#"
            code = "EC 401/A"
            name = "Digital Systems"
            [target]
            name = "Digital Circuits"
            institute = "IIT Kharagpur"
            duration = "12 Weeks"
            "#,
        )
        .unwrap();
        assert_eq!(report_file_name(&record), "MOOC_EC_401_A_Report.pdf");
    }
}
