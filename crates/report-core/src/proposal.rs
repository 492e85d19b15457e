//! Summary proposal listing every mapping in one table

use crate::canvas::PageCanvas;
use crate::document::OutputDocument;
use crate::error::ReportError;
use crate::record::CourseMapping;
use crate::render::FlowingCanvas;
use crate::settings::Settings;
use crate::style::{Rgb, TextStyle};
use crate::text::clip;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, instrument};

pub const PROPOSAL_FILE_NAME: &str = "MOOC_Principal_Proposal.pdf";

const TABLE_LEFT: f32 = 30.0;
const TABLE_WIDTH: f32 = 535.0;
const HEADER_HEIGHT: f32 = 22.0;
const ROW_HEIGHT: f32 = 28.0;
const HEADER_FILL: Rgb = Rgb(0.2, 0.4, 0.6);

const HOME_NAME_CHARS: usize = 28;
const TARGET_NAME_CHARS: usize = 35;

/// Column x offsets: No., code, home name, MOOC name, duration
const COLUMNS: [f32; 5] = [35.0, 55.0, 120.0, 280.0, 500.0];

pub struct ProposalBuilder {
    settings: Settings,
}

impl ProposalBuilder {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    /// Write the proposal for `records` into `output_dir` and return its path.
    ///
    /// An empty slice still produces the cover and an empty table.
    #[instrument(skip_all, fields(records = records.len()))]
    pub fn build(
        &self,
        records: &[CourseMapping],
        output_dir: &Path,
    ) -> Result<PathBuf, ReportError> {
        fs::create_dir_all(output_dir).map_err(|e| ReportError::io(output_dir, e))?;

        let mut out = OutputDocument::new();
        self.cover(&mut out)?;
        let table_pages = self.table(&mut out, records)?;

        let path = output_dir.join(PROPOSAL_FILE_NAME);
        out.save_atomic(&path)?;
        info!(path = %path.display(), table_pages, "Proposal written");
        Ok(path)
    }

    fn cover(&self, out: &mut OutputDocument) -> Result<(), ReportError> {
        let labels = &self.settings.labels;
        let mut canvas = PageCanvas::a4();
        canvas.centered_text(200.0, "MOOC APPROVAL PROPOSAL", TextStyle::sized(22.0).bold());
        canvas.centered_text(
            240.0,
            &format!("Semester: {}", self.settings.semester),
            TextStyle::sized(14.0),
        );
        canvas.centered_text(
            280.0,
            &format!("As per {}", labels.regulation),
            TextStyle::sized(11.0).color(Rgb::MUTED),
        );

        canvas.centered_text(400.0, "[INSTITUTION NAME]", TextStyle::sized(14.0));
        canvas.centered_text(425.0, "[ADDRESS]", TextStyle::sized(11.0));

        canvas.text(260.0, 500.0, "Submitted to:", TextStyle::sized(10.0));
        canvas.text(260.0, 520.0, &labels.submitted_to, TextStyle::sized(10.0));

        canvas.centered_text(
            700.0,
            &format!("Date: {}", self.settings.issue_date()),
            TextStyle::sized(10.0),
        );
        out.add_page(canvas)?;
        Ok(())
    }

    fn table(
        &self,
        out: &mut OutputDocument,
        records: &[CourseMapping],
    ) -> Result<usize, ReportError> {
        let labels = &self.settings.labels;
        let headers = [
            "No.".to_string(),
            format!("{} Code", labels.home),
            format!("{} Course", labels.home),
            format!("{} Course", labels.provider),
            "Duration".to_string(),
        ];

        let mut flow = FlowingCanvas::new(out, 70.0);
        flow.canvas.centered_text(
            40.0,
            "PROPOSED MOOC MAPPINGS",
            TextStyle::sized(14.0).bold(),
        );
        header_row(&mut flow, &headers);

        for (index, record) in records.iter().enumerate() {
            let y = flow.y;
            let fill = if index % 2 == 0 { Rgb::ROW_ALT } else { Rgb::WHITE };
            flow.canvas
                .fill_stroke_rect(TABLE_LEFT, y, TABLE_WIDTH, ROW_HEIGHT, fill, Rgb::GRID, 0.5);

            let cells = [
                (index + 1).to_string(),
                record.code.clone(),
                clip(&record.name, HOME_NAME_CHARS),
                clip(&record.target.name, TARGET_NAME_CHARS),
                record.target.duration.clone(),
            ];
            for (x, cell) in COLUMNS.iter().zip(&cells) {
                flow.canvas.text(*x, y + 18.0, cell, TextStyle::sized(8.0));
            }
            flow.y += ROW_HEIGHT;

            let more_rows = index + 1 < records.len();
            if more_rows && flow.break_if_needed()? {
                header_row(&mut flow, &headers);
            }
        }

        flow.finish()
    }
}

fn header_row(flow: &mut FlowingCanvas<'_>, headers: &[String; 5]) {
    let y = flow.y;
    flow.canvas
        .fill_rect(TABLE_LEFT, y, TABLE_WIDTH, HEADER_HEIGHT, HEADER_FILL);
    for (x, header) in COLUMNS.iter().zip(headers) {
        flow.canvas.text(
            *x,
            y + 15.0,
            header,
            TextStyle::sized(8.0).bold().color(Rgb::WHITE),
        );
    }
    flow.y += HEADER_HEIGHT;
}
