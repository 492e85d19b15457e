//! Fonts, colors and text styles shared by every generated page
//!
//! Generated pages only use the PDF standard 14 Helvetica family so that no
//! font program has to be embedded.

/// RGB color with components in the 0-1 range
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb(pub f32, pub f32, pub f32);

impl Rgb {
    pub const BLACK: Rgb = Rgb(0.0, 0.0, 0.0);
    pub const WHITE: Rgb = Rgb(1.0, 1.0, 1.0);
    pub const NAVY: Rgb = Rgb(0.1, 0.2, 0.4);
    pub const FOREST: Rgb = Rgb(0.1, 0.4, 0.2);
    pub const LABEL: Rgb = Rgb(0.3, 0.3, 0.3);
    pub const MUTED: Rgb = Rgb(0.4, 0.4, 0.4);
    pub const FOOTER: Rgb = Rgb(0.5, 0.5, 0.5);
    pub const GRID: Rgb = Rgb(0.8, 0.8, 0.8);
    pub const GRID_LIGHT: Rgb = Rgb(0.85, 0.85, 0.85);
    pub const SHADE: Rgb = Rgb(0.95, 0.95, 0.95);
    pub const ROW_ALT: Rgb = Rgb(0.97, 0.97, 0.97);
    pub const PASS_FILL: Rgb = Rgb(0.9, 1.0, 0.9);
    pub const PASS_PANEL: Rgb = Rgb(0.95, 1.0, 0.95);
    pub const PASS_TEXT: Rgb = Rgb(0.0, 0.5, 0.0);
    pub const LINK: Rgb = Rgb(0.0, 0.0, 0.8);

    pub(crate) fn components(self) -> [f32; 3] {
        [self.0, self.1, self.2]
    }
}

/// Font faces available on a generated page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Font {
    Regular,
    Bold,
}

impl Font {
    /// Resource name used inside content streams
    pub fn resource_name(self) -> &'static [u8] {
        match self {
            Font::Regular => b"F1",
            Font::Bold => b"F2",
        }
    }

    /// Standard 14 base font
    pub fn base_font(self) -> &'static str {
        match self {
            Font::Regular => "Helvetica",
            Font::Bold => "Helvetica-Bold",
        }
    }

    pub const ALL: [Font; 2] = [Font::Regular, Font::Bold];
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub font_size: f32,
    pub font: Font,
    pub color: Rgb,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            font_size: 11.0,
            font: Font::Regular,
            color: Rgb::BLACK,
        }
    }
}

impl TextStyle {
    pub fn sized(font_size: f32) -> Self {
        Self {
            font_size,
            ..Self::default()
        }
    }

    pub fn bold(mut self) -> Self {
        self.font = Font::Bold;
        self
    }

    pub fn color(mut self, color: Rgb) -> Self {
        self.color = color;
        self
    }
}

/// Helvetica advance widths (1/1000 em) for printable ASCII, starting at space.
const HELVETICA_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // ' '..'/'
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556, // '0'..'?'
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778, // '@'..'O'
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556, // 'P'..'_'
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556, // '`'..'o'
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584, // 'p'..'~'
];

/// Approximate rendered width of `text` in points.
///
/// Bold glyphs are slightly wider than regular ones; a flat 5% widening is
/// close enough for centering headings.
pub fn text_width(text: &str, style: &TextStyle) -> f32 {
    let units: u32 = text
        .chars()
        .map(|c| {
            let code = c as u32;
            if (32..127).contains(&code) {
                HELVETICA_WIDTHS[(code - 32) as usize] as u32
            } else {
                556
            }
        })
        .sum();
    let scale = match style.font {
        Font::Regular => 1.0,
        Font::Bold => 1.05,
    };
    units as f32 / 1000.0 * style.font_size * scale
}
