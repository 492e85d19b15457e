//! Generated pages
//!
//! Each submodule draws one kind of page with fixed absolute coordinates on
//! an A4 canvas and appends it to the output document.

pub mod comparison;
pub mod cover;
pub mod divider;
pub mod placeholder;

use crate::canvas::{PageCanvas, PAGE_BREAK_Y};
use crate::document::OutputDocument;
use crate::error::ReportError;

/// Top offset used when a table continues on a new page
pub(crate) const CONTINUATION_Y: f32 = 50.0;

/// A canvas that spills onto fresh pages once the cursor passes the break line
pub(crate) struct FlowingCanvas<'a> {
    out: &'a mut OutputDocument,
    pub canvas: PageCanvas,
    pub y: f32,
    pages: usize,
}

impl<'a> FlowingCanvas<'a> {
    pub fn new(out: &'a mut OutputDocument, start_y: f32) -> Self {
        Self {
            out,
            canvas: PageCanvas::a4(),
            y: start_y,
            pages: 1,
        }
    }

    /// Start a new page when the cursor has passed the break line.
    /// Returns true when a page was started.
    pub fn break_if_needed(&mut self) -> Result<bool, ReportError> {
        if self.y > PAGE_BREAK_Y {
            self.new_page()?;
            return Ok(true);
        }
        Ok(false)
    }

    /// Start a new page unless `height` more points fit above the bottom margin
    pub fn ensure_room(&mut self, height: f32, bottom: f32) -> Result<bool, ReportError> {
        if self.y + height > self.canvas.height() - bottom {
            self.new_page()?;
            return Ok(true);
        }
        Ok(false)
    }

    pub fn new_page(&mut self) -> Result<(), ReportError> {
        let full = std::mem::replace(&mut self.canvas, PageCanvas::a4());
        self.out.add_page(full)?;
        self.y = CONTINUATION_Y;
        self.pages += 1;
        Ok(())
    }

    /// Append the last page and return how many pages were written
    pub fn finish(self) -> Result<usize, ReportError> {
        self.out.add_page(self.canvas)?;
        Ok(self.pages)
    }
}
