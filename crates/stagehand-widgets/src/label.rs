//! Static text.

use kurbo::Point;
use stagehand_core::{Frame, StyleColor, Widget};

/// A line of dark text.
#[derive(Debug, Clone)]
pub struct Label {
    text: String,
}

impl Label {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl Widget for Label {
    fn update(&mut self, position: Point, _width: f64, frame: &mut Frame<'_>) {
        frame.draw_text(position, &self.text, StyleColor::TextDark);
    }
}
