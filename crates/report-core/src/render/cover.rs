//! Summary cover page
//!
//! Header band, then label/value tables for the home course, the MOOC and the
//! regulation checks, and a footer with the issue date.

use super::FlowingCanvas;
use crate::document::OutputDocument;
use crate::error::ReportError;
use crate::record::CourseMapping;
use crate::settings::Settings;
use crate::style::{Rgb, TextStyle};
use crate::text::truncate;

const LEFT: f32 = 50.0;
const RIGHT: f32 = 545.0;
const ROW_HEIGHT: f32 = 20.0;
const TABLE_LEFT: f32 = 60.0;
const TABLE_RIGHT: f32 = 535.0;

/// Characters shown in a home-course value cell
const HOME_VALUE_CHARS: usize = 55;
/// Characters shown in a MOOC value cell before falling back to a smaller font
const DETAIL_VALUE_CHARS: usize = 60;

const NOT_AVAILABLE: &str = "N/A";

/// Append the cover page(s) for `record`. Returns the number of pages written.
pub fn render(
    out: &mut OutputDocument,
    record: &CourseMapping,
    settings: &Settings,
    issued_on: &str,
) -> Result<usize, ReportError> {
    let labels = &settings.labels;
    let mut flow = FlowingCanvas::new(out, 135.0);

    flow.canvas.fill_rect(LEFT, 30.0, RIGHT - LEFT, 50.0, Rgb::NAVY);
    flow.canvas.centered_text(
        62.0,
        "MOOC APPROVAL REQUEST",
        TextStyle::sized(22.0).bold().color(Rgb::WHITE),
    );
    flow.canvas.centered_text(
        100.0,
        &format!("As per {} (MOOC)", labels.regulation),
        TextStyle::sized(10.0).color(Rgb::MUTED),
    );
    flow.canvas.line(LEFT, 115.0, RIGHT, 115.0, Rgb::BLACK, 1.0);

    section_heading(&mut flow, &format!("{} COURSE DETAILS", labels.home), 12.0);
    let home_rows = [
        ("Course Category", record.category.as_deref().unwrap_or(NOT_AVAILABLE)),
        ("Course Code", record.code.as_str()),
        ("Course Name", record.name.as_str()),
    ];
    for (label, value) in home_rows {
        flow.break_if_needed()?;
        let y = flow.y;
        label_cell(&mut flow, y, 200.0, label, 9.0);
        flow.canvas.text(
            205.0,
            y + 14.0,
            &truncate(value, HOME_VALUE_CHARS),
            TextStyle::sized(9.0),
        );
        flow.y += ROW_HEIGHT;
    }

    flow.y += 20.0;
    flow.break_if_needed()?;
    section_heading(&mut flow, &format!("{} COURSE DETAILS", labels.provider), 12.0);

    let target = &record.target;
    let mut detail_rows: Vec<(&str, &str)> = vec![
        ("Course Name", target.name.as_str()),
        ("Course ID", target.course_id.as_deref().unwrap_or(NOT_AVAILABLE)),
        ("Course URL", target.url.as_deref().unwrap_or(NOT_AVAILABLE)),
        ("Coordinator(s)", target.instructor.as_deref().unwrap_or(NOT_AVAILABLE)),
        ("Offering Institute", target.institute.as_str()),
        ("Duration", target.duration.as_str()),
    ];
    detail_rows.extend(
        record
            .details
            .iter()
            .map(|detail| (detail.label.as_str(), detail.value.as_str())),
    );
    detail_rows.push(("Semester", settings.semester.as_str()));
    detail_rows.push(("Platform", labels.platform.as_str()));

    for (label, value) in detail_rows {
        let y = flow.y;
        label_cell(&mut flow, y, 200.0, label, 8.0);
        if value.chars().count() > DETAIL_VALUE_CHARS {
            flow.canvas.text(
                205.0,
                y + 14.0,
                &truncate(value, DETAIL_VALUE_CHARS),
                TextStyle::sized(7.0),
            );
        } else {
            flow.canvas.text(205.0, y + 14.0, value, TextStyle::sized(8.0));
        }
        flow.y += ROW_HEIGHT;
        flow.break_if_needed()?;
    }

    flow.y += 15.0;
    flow.break_if_needed()?;
    section_heading(
        &mut flow,
        &format!("COMPLIANCE WITH {} REGULATIONS", labels.home),
        11.0,
    );
    let compliance_rows = [
        (
            "Minimum Duration".to_string(),
            format!("{} (minimum 8 Weeks)", target.duration),
        ),
        (
            "Content Overlap".to_string(),
            format!("{} (minimum 70%)", record.overlap_label()),
        ),
        ("Approved Agency".to_string(), labels.platform.clone()),
        (
            "Examination Mode".to_string(),
            "Proctored End Semester Examination".to_string(),
        ),
    ];
    for (label, value) in compliance_rows {
        flow.break_if_needed()?;
        let y = flow.y;
        flow.canvas.fill_stroke_rect(
            TABLE_LEFT,
            y,
            250.0 - TABLE_LEFT,
            ROW_HEIGHT,
            Rgb::SHADE,
            Rgb::GRID,
            0.5,
        );
        flow.canvas.fill_stroke_rect(
            250.0,
            y,
            TABLE_RIGHT - 250.0,
            ROW_HEIGHT,
            Rgb::PASS_PANEL,
            Rgb::GRID,
            0.5,
        );
        flow.canvas.text(
            TABLE_LEFT + 5.0,
            y + 14.0,
            &label,
            TextStyle::sized(8.0).color(Rgb::LABEL),
        );
        flow.canvas.text(
            255.0,
            y + 14.0,
            &truncate(&value, DETAIL_VALUE_CHARS),
            TextStyle::sized(8.0).color(Rgb::PASS_TEXT),
        );
        flow.y += ROW_HEIGHT;
    }

    flow.canvas.centered_text(
        810.0,
        &format!("Generated: {}", issued_on),
        TextStyle::sized(9.0).color(Rgb::FOOTER),
    );
    flow.finish()
}

fn section_heading(flow: &mut FlowingCanvas<'_>, title: &str, size: f32) {
    let y = flow.y;
    flow.canvas
        .text(LEFT, y, title, TextStyle::sized(size).bold());
    flow.y += 18.0;
}

/// Shaded label cell plus the empty bordered value cell to its right
fn label_cell(flow: &mut FlowingCanvas<'_>, y: f32, split: f32, label: &str, size: f32) {
    flow.canvas.fill_stroke_rect(
        TABLE_LEFT,
        y,
        split - TABLE_LEFT,
        ROW_HEIGHT,
        Rgb::SHADE,
        Rgb::GRID,
        0.5,
    );
    flow.canvas
        .stroke_rect(split, y, TABLE_RIGHT - split, ROW_HEIGHT, Rgb::GRID, 0.5);
    flow.canvas.text(
        TABLE_LEFT + 5.0,
        y + 14.0,
        label,
        TextStyle::sized(size).color(Rgb::LABEL),
    );
}
