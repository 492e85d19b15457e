//! Placeholder page standing in for content that could not be copied

use crate::canvas::PageCanvas;
use crate::document::OutputDocument;
use crate::error::ReportError;
use crate::style::{Rgb, TextStyle};
use crate::text::wrap_text;

const LEFT: f32 = 100.0;
const WRAP_CHARS: usize = 70;

/// A secondary line under the reason, e.g. a course URL or a note
#[derive(Debug, Clone)]
pub struct Remark {
    pub text: String,
    pub color: Rgb,
}

impl Remark {
    pub fn new(text: impl Into<String>, color: Rgb) -> Self {
        Self {
            text: text.into(),
            color,
        }
    }
}

pub fn render(
    out: &mut OutputDocument,
    title: &str,
    reason: &str,
    remarks: &[Remark],
) -> Result<(), ReportError> {
    let mut canvas = PageCanvas::a4();
    canvas.text(LEFT, 350.0, title, TextStyle::sized(14.0).bold());

    let mut y = 380.0;
    for line in wrap_text(reason, WRAP_CHARS) {
        canvas.text(LEFT, y, &line, TextStyle::sized(12.0));
        y += 16.0;
    }

    y += 14.0;
    for remark in remarks {
        for line in wrap_text(&remark.text, WRAP_CHARS) {
            canvas.text(LEFT, y, &line, TextStyle::sized(10.0).color(remark.color));
            y += 14.0;
        }
        y += 10.0;
    }

    out.add_page(canvas)?;
    Ok(())
}
