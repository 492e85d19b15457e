//! Per-course report composition
//!
//! A report is, in order: cover, source syllabus pages, MOOC syllabus pages
//! and the comparison page, with optional divider pages before each of the
//! three sections. Any section whose document cannot be copied gets a single
//! placeholder page instead, so every report has the same shape.

use crate::document::OutputDocument;
use crate::error::{ReportError, SourceIssue};
use crate::import::import_pages;
use crate::pages::resolve_pages;
use crate::record::{CourseMapping, DocumentRef, PageSelection};
use crate::render::placeholder::Remark;
use crate::render::{comparison, cover, divider, placeholder};
use crate::report_file_name;
use crate::settings::Settings;
use crate::source::open_document;
use crate::style::Rgb;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument, warn};

pub struct Composer {
    settings: Settings,
}

impl Composer {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Build the report for `record` and write it into `output_dir`.
    ///
    /// Unavailable source documents never fail the call; they turn into
    /// placeholder pages. Returns the path of the written file.
    #[instrument(skip_all, fields(code = %record.code))]
    pub fn compose(
        &self,
        record: &CourseMapping,
        output_dir: &Path,
    ) -> Result<PathBuf, ReportError> {
        record.validate()?;
        fs::create_dir_all(output_dir).map_err(|e| ReportError::io(output_dir, e))?;

        let labels = &self.settings.labels;
        let mut out = OutputDocument::new();

        let cover_pages = cover::render(&mut out, record, &self.settings, &self.settings.issue_date())?;
        debug!(pages = cover_pages, "Cover rendered");

        self.divider(
            &mut out,
            &format!("{} COURSE SYLLABUS", labels.home),
            &format!("{} - {}", record.code, record.name),
        )?;
        match self.copy_section(
            &mut out,
            record.source.as_ref(),
            PageSelection::Locate,
            &record.locate_needles(),
        ) {
            Ok(copied) => info!(pages = copied, "Copied {} syllabus pages", labels.home),
            Err(issue) => {
                warn!(reason = %issue.reason(), "{} syllabus unavailable", labels.home);
                placeholder::render(
                    &mut out,
                    &format!("{} SYLLABUS NOT AVAILABLE", labels.home),
                    &issue.reason(),
                    &[Remark::new(
                        format!("Course: {} - {}", record.code, record.name),
                        Rgb::MUTED,
                    )],
                )?;
            }
        }

        let target = &record.target;
        self.divider(
            &mut out,
            &format!("{} COURSE SYLLABUS", labels.provider),
            &target.name,
        )?;
        match self.copy_section(
            &mut out,
            target.document.as_ref(),
            PageSelection::All,
            &[target.name.as_str()],
        ) {
            Ok(copied) => info!(pages = copied, "Copied {} syllabus pages", labels.provider),
            Err(issue) => {
                warn!(reason = %issue.reason(), "{} syllabus unavailable", labels.provider);
                let mut remarks = vec![Remark::new(format!("Course: {}", target.name), Rgb::MUTED)];
                if issue == SourceIssue::NotSpecified {
                    if let Some(url) = &target.url {
                        remarks.push(Remark::new(format!("Course URL: {}", url), Rgb::LINK));
                    }
                    if let Some(note) = &record.note {
                        remarks.push(Remark::new(note.clone(), Rgb::MUTED));
                    }
                }
                placeholder::render(
                    &mut out,
                    &format!("{} SYLLABUS NOT AVAILABLE", labels.provider),
                    &issue.reason(),
                    &remarks,
                )?;
            }
        }

        self.divider(
            &mut out,
            "SYLLABUS COMPARISON",
            "Content Overlap Verification Report",
        )?;
        let stats = comparison::render(&mut out, record, &self.settings)?;
        debug!(rows = stats.rows, pages = stats.pages, "Comparison rendered");

        let total_pages = out.page_count();
        let path = output_dir.join(report_file_name(record));
        out.save_atomic(&path)?;
        info!(path = %path.display(), pages = total_pages, "Report written");
        Ok(path)
    }

    fn divider(
        &self,
        out: &mut OutputDocument,
        title: &str,
        subtitle: &str,
    ) -> Result<(), ReportError> {
        if self.settings.include_dividers {
            divider::render(out, title, subtitle)?;
        }
        Ok(())
    }

    /// Copy the selected pages of `doc_ref` into `out`.
    ///
    /// The source document lives only for the duration of this call.
    fn copy_section(
        &self,
        out: &mut OutputDocument,
        doc_ref: Option<&DocumentRef>,
        default_selection: PageSelection,
        needles: &[&str],
    ) -> Result<usize, SourceIssue> {
        let doc_ref = doc_ref.ok_or(SourceIssue::NotSpecified)?;
        let path = self.settings.resolve_path(&doc_ref.path);
        let source = open_document(&path)?;

        let selection = doc_ref.pages.as_ref().unwrap_or(&default_selection);
        let resolution = resolve_pages(&source, selection, needles, self.settings.locate_window);
        if !resolution.skipped.is_empty() {
            debug!(
                path = %path.display(),
                skipped = ?resolution.skipped,
                "Ignoring out-of-range page indices"
            );
        }
        if resolution.is_empty() {
            return Err(SourceIssue::NoPages);
        }

        import_pages(out, &source, &resolution.pages).map_err(|e| SourceIssue::Unreadable {
            path,
            reason: e.to_string(),
        })
    }
}
