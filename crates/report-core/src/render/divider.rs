//! Section divider page: a dark band across the middle with a centered title

use crate::canvas::PageCanvas;
use crate::document::OutputDocument;
use crate::error::ReportError;
use crate::style::{Rgb, TextStyle};
use crate::text::truncate;

const SUBTITLE_CHARS: usize = 80;

pub fn render(out: &mut OutputDocument, title: &str, subtitle: &str) -> Result<(), ReportError> {
    let mut canvas = PageCanvas::a4();
    canvas.fill_rect(50.0, 380.0, 495.0, 70.0, Rgb::NAVY);
    canvas.centered_text(
        421.0,
        title,
        TextStyle::sized(18.0).bold().color(Rgb::WHITE),
    );
    if !subtitle.is_empty() {
        canvas.centered_text(
            470.0,
            &truncate(subtitle, SUBTITLE_CHARS),
            TextStyle::sized(12.0).color(Rgb::MUTED),
        );
    }
    out.add_page(canvas)?;
    Ok(())
}
