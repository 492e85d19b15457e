//! Syllabus comparison page
//!
//! A three-column grid with one row per topic pair, followed by a summary
//! panel with the overall overlap and a recommendation paragraph. Rows that do
//! not fit continue on a new page under a repeated header row.

use super::FlowingCanvas;
use crate::document::OutputDocument;
use crate::error::ReportError;
use crate::record::CourseMapping;
use crate::settings::Settings;
use crate::style::{Rgb, TextStyle};
use crate::text::{truncate, wrap_text};

const LEFT: f32 = 50.0;
const WIDTH: f32 = 495.0;
const COLUMN_WIDTHS: [f32; 3] = [210.0, 210.0, 60.0];
const HEADER_COLORS: [Rgb; 3] = [Rgb(0.2, 0.3, 0.5), Rgb(0.2, 0.4, 0.3), Rgb(0.4, 0.4, 0.4)];
const HEADER_HEIGHT: f32 = 25.0;
const ROW_HEIGHT: f32 = 55.0;
const BOTTOM_MARGIN: f32 = 40.0;

/// Characters per line in a topic cell
pub const TOPIC_WRAP_CHARS: usize = 38;
/// Lines kept per topic cell; the rest are dropped
pub const TOPIC_MAX_LINES: usize = 3;

const INFO_CHARS: usize = 85;
const PARAGRAPH_CHARS: usize = 95;
const SUMMARY_HEIGHT: f32 = 90.0;

/// Shape of the rendered comparison section
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComparisonStats {
    pub rows: usize,
    pub pages: usize,
}

pub fn render(
    out: &mut OutputDocument,
    record: &CourseMapping,
    settings: &Settings,
) -> Result<ComparisonStats, ReportError> {
    let labels = &settings.labels;
    let headers = [
        format!("{} SYLLABUS CONTENT", labels.home),
        format!("{} SYLLABUS CONTENT", labels.provider),
        "MATCH".to_string(),
    ];
    let mut flow = FlowingCanvas::new(out, 85.0);

    flow.canvas.fill_rect(LEFT, 30.0, WIDTH, 35.0, Rgb::FOREST);
    flow.canvas.centered_text(
        52.0,
        "SYLLABUS COMPARISON REPORT",
        TextStyle::sized(14.0).bold().color(Rgb::WHITE),
    );

    let y = flow.y;
    flow.canvas
        .fill_stroke_rect(LEFT, y, WIDTH, 55.0, Rgb::ROW_ALT, Rgb::GRID, 0.5);
    flow.canvas.text(
        60.0,
        y + 20.0,
        &truncate(
            &format!("{} Course: {} - {}", labels.home, record.code, record.name),
            INFO_CHARS,
        ),
        TextStyle::sized(10.0),
    );
    flow.canvas.text(
        60.0,
        y + 40.0,
        &truncate(
            &format!("{} Course: {}", labels.provider, record.target.name),
            INFO_CHARS,
        ),
        TextStyle::sized(10.0),
    );
    flow.y += 70.0;

    header_row(&mut flow, &headers);

    let mut rows = 0;
    for (index, pair) in record.comparison.iter().enumerate() {
        if flow.ensure_room(ROW_HEIGHT, BOTTOM_MARGIN)? {
            header_row(&mut flow, &headers);
        }
        let y = flow.y;
        let fill = if index % 2 == 0 { Rgb::WHITE } else { Rgb::ROW_ALT };

        let mut x = LEFT;
        for (topic, width) in [(&pair.left, COLUMN_WIDTHS[0]), (&pair.right, COLUMN_WIDTHS[1])] {
            flow.canvas
                .fill_stroke_rect(x, y, width, ROW_HEIGHT, fill, Rgb::GRID_LIGHT, 0.5);
            let mut line_y = y + 15.0;
            for line in topic_lines(topic) {
                flow.canvas.text(x + 5.0, line_y, &line, TextStyle::sized(8.0));
                line_y += 12.0;
            }
            x += width;
        }

        let passes = pair.matched.passes();
        let match_fill = if passes { Rgb::PASS_FILL } else { fill };
        flow.canvas.fill_stroke_rect(
            x,
            y,
            COLUMN_WIDTHS[2],
            ROW_HEIGHT,
            match_fill,
            Rgb::GRID_LIGHT,
            0.5,
        );
        let match_color = if passes { Rgb::PASS_TEXT } else { Rgb::MUTED };
        flow.canvas.text(
            x + 15.0,
            y + 30.0,
            pair.matched.label(),
            TextStyle::sized(10.0).color(match_color),
        );

        flow.y += ROW_HEIGHT;
        rows += 1;
    }

    flow.y += 20.0;
    flow.ensure_room(SUMMARY_HEIGHT + 80.0, BOTTOM_MARGIN)?;
    let y = flow.y;
    flow.canvas.fill_stroke_rect(
        LEFT,
        y,
        WIDTH,
        SUMMARY_HEIGHT,
        Rgb::PASS_PANEL,
        Rgb::PASS_TEXT,
        2.0,
    );
    flow.canvas.text(
        60.0,
        y + 25.0,
        &format!("OVERALL CONTENT OVERLAP: {}", record.overlap_label()),
        TextStyle::sized(14.0).bold().color(Rgb(0.0, 0.4, 0.0)),
    );
    flow.canvas.text(
        60.0,
        y + 50.0,
        &format!(
            "VERIFICATION: The {} course content meets the minimum 70% overlap requirement",
            labels.provider
        ),
        TextStyle::sized(10.0),
    );
    flow.canvas.text(
        60.0,
        y + 68.0,
        &format!("as mandated by {}", labels.regulation),
        TextStyle::sized(10.0),
    );
    flow.y += SUMMARY_HEIGHT + 20.0;

    let y = flow.y;
    flow.canvas
        .text(LEFT, y, "RECOMMENDATION:", TextStyle::sized(11.0).bold());
    let paragraph = recommendation(record, settings);
    let mut line_y = y + 20.0;
    for line in wrap_text(&paragraph, PARAGRAPH_CHARS) {
        flow.canvas.text(LEFT, line_y, &line, TextStyle::sized(9.0));
        line_y += 15.0;
    }

    let pages = flow.finish()?;
    Ok(ComparisonStats { rows, pages })
}

/// Boilerplate recommendation naming both courses and the offering institute
pub fn recommendation(record: &CourseMapping, settings: &Settings) -> String {
    format!(
        "The {} course '{}' offered by {} is recommended as an equivalent MOOC for the {} course {} - {}.",
        settings.labels.provider,
        record.target.name,
        record.target.institute,
        settings.labels.home,
        record.code,
        record.name
    )
}

/// Wrapped topic text, capped at [`TOPIC_MAX_LINES`]
pub fn topic_lines(topic: &str) -> Vec<String> {
    let mut lines = wrap_text(topic, TOPIC_WRAP_CHARS);
    lines.truncate(TOPIC_MAX_LINES);
    lines
}

fn header_row(flow: &mut FlowingCanvas<'_>, headers: &[String; 3]) {
    let y = flow.y;
    let mut x = LEFT;
    for ((header, width), color) in headers.iter().zip(COLUMN_WIDTHS).zip(HEADER_COLORS) {
        flow.canvas.fill_rect(x, y, width, HEADER_HEIGHT, color);
        flow.canvas.text(
            x + 5.0,
            y + 17.0,
            header,
            TextStyle::sized(8.0).bold().color(Rgb::WHITE),
        );
        x += width;
    }
    flow.y += HEADER_HEIGHT;
}
