//! Fixed-layout page drawing
//!
//! Layout code is written top-down: `y` grows downward from the top edge of
//! the page. The canvas flips to PDF user space (origin bottom-left) while
//! emitting operators:
//!
//! ```text
//! pdf_y = page_height - y
//! ```

use crate::style::{text_width, Rgb, TextStyle};
use crate::text::encode_win_ansi;
use lopdf::content::{Content, Operation};
use lopdf::{Object, StringFormat};

/// A4 in PDF points
pub const A4_WIDTH: f32 = 595.0;
pub const A4_HEIGHT: f32 = 842.0;

/// Below this offset, tables continue on a fresh page
pub const PAGE_BREAK_Y: f32 = 750.0;

pub struct PageCanvas {
    width: f32,
    height: f32,
    operations: Vec<Operation>,
}

impl PageCanvas {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            operations: Vec::new(),
        }
    }

    pub fn a4() -> Self {
        Self::new(A4_WIDTH, A4_HEIGHT)
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    /// Draw one line of text with its baseline at `(x, y)`
    pub fn text(&mut self, x: f32, y: f32, text: &str, style: TextStyle) {
        let [r, g, b] = style.color.components();
        self.operations.extend([
            Operation::new("BT", vec![]),
            Operation::new(
                "Tf",
                vec![
                    Object::Name(style.font.resource_name().to_vec()),
                    Object::Real(style.font_size),
                ],
            ),
            Operation::new(
                "rg",
                vec![Object::Real(r), Object::Real(g), Object::Real(b)],
            ),
            Operation::new(
                "Td",
                vec![Object::Real(x), Object::Real(self.height - y)],
            ),
            Operation::new(
                "Tj",
                vec![Object::String(encode_win_ansi(text), StringFormat::Literal)],
            ),
            Operation::new("ET", vec![]),
        ]);
    }

    /// Draw text horizontally centered on the page
    pub fn centered_text(&mut self, y: f32, text: &str, style: TextStyle) {
        let x = ((self.width - text_width(text, &style)) / 2.0).max(0.0);
        self.text(x, y, text, style);
    }

    pub fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, fill: Rgb) {
        self.rect(x, y, w, h, Some(fill), None);
    }

    pub fn stroke_rect(&mut self, x: f32, y: f32, w: f32, h: f32, stroke: Rgb, line_width: f32) {
        self.rect(x, y, w, h, None, Some((stroke, line_width)));
    }

    #[allow(clippy::too_many_arguments)]
    pub fn fill_stroke_rect(
        &mut self,
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        fill: Rgb,
        stroke: Rgb,
        line_width: f32,
    ) {
        self.rect(x, y, w, h, Some(fill), Some((stroke, line_width)));
    }

    pub fn line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, stroke: Rgb, line_width: f32) {
        let [r, g, b] = stroke.components();
        self.operations.extend([
            Operation::new("q", vec![]),
            Operation::new("w", vec![Object::Real(line_width)]),
            Operation::new(
                "RG",
                vec![Object::Real(r), Object::Real(g), Object::Real(b)],
            ),
            Operation::new(
                "m",
                vec![Object::Real(x1), Object::Real(self.height - y1)],
            ),
            Operation::new(
                "l",
                vec![Object::Real(x2), Object::Real(self.height - y2)],
            ),
            Operation::new("S", vec![]),
            Operation::new("Q", vec![]),
        ]);
    }

    fn rect(
        &mut self,
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        fill: Option<Rgb>,
        stroke: Option<(Rgb, f32)>,
    ) {
        self.operations.push(Operation::new("q", vec![]));
        if let Some(fill) = fill {
            let [r, g, b] = fill.components();
            self.operations.push(Operation::new(
                "rg",
                vec![Object::Real(r), Object::Real(g), Object::Real(b)],
            ));
        }
        if let Some((stroke, line_width)) = stroke {
            let [r, g, b] = stroke.components();
            self.operations
                .push(Operation::new("w", vec![Object::Real(line_width)]));
            self.operations.push(Operation::new(
                "RG",
                vec![Object::Real(r), Object::Real(g), Object::Real(b)],
            ));
        }
        // PDF rectangles are anchored at their bottom-left corner
        self.operations.push(Operation::new(
            "re",
            vec![
                Object::Real(x),
                Object::Real(self.height - y - h),
                Object::Real(w),
                Object::Real(h),
            ],
        ));
        let paint = match (fill.is_some(), stroke.is_some()) {
            (true, true) => "B",
            (true, false) => "f",
            (false, true) => "S",
            (false, false) => "n",
        };
        self.operations.push(Operation::new(paint, vec![]));
        self.operations.push(Operation::new("Q", vec![]));
    }

    pub(crate) fn into_content(self) -> Content {
        Content {
            operations: self.operations,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::TextStyle;

    fn operators(canvas: PageCanvas) -> Vec<String> {
        canvas
            .into_content()
            .operations
            .into_iter()
            .map(|op| op.operator)
            .collect()
    }

    #[test]
    fn test_text_emits_text_object() {
        let mut canvas = PageCanvas::a4();
        canvas.text(50.0, 60.0, "MOOC", TextStyle::default());
        assert_eq!(operators(canvas), vec!["BT", "Tf", "rg", "Td", "Tj", "ET"]);
    }

    #[test]
    fn test_text_flips_y_axis() {
        let mut canvas = PageCanvas::a4();
        canvas.text(50.0, 42.0, "x", TextStyle::default());
        let content = canvas.into_content();
        let td = &content.operations[3];
        assert_eq!(td.operands[1].as_float().unwrap(), A4_HEIGHT - 42.0);
    }

    #[test]
    fn test_rect_paint_operators() {
        let mut canvas = PageCanvas::a4();
        canvas.fill_rect(0.0, 0.0, 10.0, 10.0, Rgb::SHADE);
        canvas.stroke_rect(0.0, 0.0, 10.0, 10.0, Rgb::GRID, 0.5);
        canvas.fill_stroke_rect(0.0, 0.0, 10.0, 10.0, Rgb::SHADE, Rgb::GRID, 1.0);
        let ops = operators(canvas);
        assert!(ops.contains(&"f".to_string()));
        assert!(ops.contains(&"S".to_string()));
        assert!(ops.contains(&"B".to_string()));
    }

    #[test]
    fn test_rect_anchored_at_bottom_left() {
        let mut canvas = PageCanvas::new(100.0, 200.0);
        canvas.fill_rect(10.0, 20.0, 30.0, 40.0, Rgb::BLACK);
        let content = canvas.into_content();
        let re = content
            .operations
            .iter()
            .find(|op| op.operator == "re")
            .unwrap();
        assert_eq!(re.operands[1].as_float().unwrap(), 200.0 - 20.0 - 40.0);
    }

    #[test]
    fn test_centered_text_is_symmetric() {
        let mut canvas = PageCanvas::a4();
        let style = TextStyle::sized(18.0);
        canvas.centered_text(100.0, "SECTION", style);
        let content = canvas.into_content();
        let x = content.operations[3].operands[0].as_float().unwrap();
        let width = text_width("SECTION", &style);
        assert!((x + width / 2.0 - A4_WIDTH / 2.0).abs() < 0.01);
    }
}
