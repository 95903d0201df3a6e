//! Text-mode navigation bar that renders header items onto a single line.
use std::collections::BTreeMap;

use tessera_paging::{
    HeaderContent, LayoutHost, PageIndicator,
    units::{Color, Rect, Size},
};

/// Width of one rendered glyph, in points.
const GLYPH_WIDTH: f32 = 8.0;
const GLYPH_HEIGHT: f32 = 17.0;

#[derive(Debug, Default)]
pub struct TextBar {
    frame: Rect,
    background: Color,
    items: BTreeMap<usize, (String, Rect)>,
    indicator: Option<PageIndicator>,
}

impl TextBar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Renders the bar as one line of `columns` characters. Items are
    /// clipped at the bar edges.
    pub fn render(&self, columns: usize) -> String {
        let mut line = vec![' '; columns];
        let width = self.frame.size.width;
        if width <= 0.0 || columns == 0 {
            return String::new();
        }
        let scale = columns as f32 / width;
        for (label, frame) in self.items.values() {
            let start = (frame.min_x() * scale).round() as i64;
            for (i, ch) in label.chars().enumerate() {
                let column = start + i as i64;
                if (0..columns as i64).contains(&column) {
                    line[column as usize] = ch;
                }
            }
        }
        let mut rendered: String = line.into_iter().collect();
        if let Some(indicator) = &self.indicator {
            rendered.push_str("  ");
            for page in 0..indicator.number_of_pages {
                rendered.push(if page == indicator.current_page {
                    '●'
                } else {
                    '○'
                });
            }
        }
        rendered
    }

    pub fn background(&self) -> Color {
        self.background
    }
}

impl LayoutHost for TextBar {
    fn set_frame(&mut self, frame: Rect) {
        self.frame = frame;
    }

    fn set_background(&mut self, color: Color) {
        self.background = color;
    }

    fn place_item(&mut self, index: usize, content: &HeaderContent, frame: Rect) {
        let label = match content {
            HeaderContent::Title(title) => title.clone(),
            HeaderContent::View(view) => format!("[{}]", view.0),
        };
        self.items.insert(index, (label, frame));
    }

    fn update_indicator(&mut self, indicator: &PageIndicator) {
        self.indicator = Some(indicator.clone());
    }

    fn measure_text(&self, text: &str) -> Size {
        Size::new(text.chars().count() as f32 * GLYPH_WIDTH, GLYPH_HEIGHT)
    }
}
