//! Paint capability consumed by widgets.
//!
//! Widgets issue primitive draw calls; the backend decides how they reach
//! the screen. [`DisplayList`] records the calls instead, for tests and
//! headless runs.

use kurbo::{Point, Rect};
use peniko::Color;

/// Immediate-mode drawing backend.
pub trait Painter {
    /// Clear the whole frame to `color`.
    fn clear(&mut self, color: Color);

    /// Draw a single line of text with its top-left corner at `position`.
    fn draw_text(&mut self, position: Point, text: &str, size: f64, color: Color);

    /// Outline a rectangle. The stroke is drawn inside `rect`.
    fn stroke_rect(&mut self, rect: Rect, line_width: f64, color: Color);

    /// Fill a rectangle.
    fn fill_rect(&mut self, rect: Rect, color: Color);
}

/// A recorded draw call.
#[derive(Debug, Clone)]
pub enum DrawCommand {
    Clear(Color),
    Text {
        position: Point,
        text: String,
        size: f64,
        color: Color,
    },
    StrokeRect {
        rect: Rect,
        line_width: f64,
        color: Color,
    },
    FillRect {
        rect: Rect,
        color: Color,
    },
}

/// Painter that records every call in order.
#[derive(Debug, Clone, Default)]
pub struct DisplayList {
    commands: Vec<DrawCommand>,
}

impl DisplayList {
    /// Create an empty display list.
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded commands, oldest first.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Drop all recorded commands.
    pub fn reset(&mut self) {
        self.commands.clear();
    }

    /// Texts drawn so far, in draw order.
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Outlined rectangles drawn so far, in draw order.
    pub fn stroked_rects(&self) -> Vec<Rect> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::StrokeRect { rect, .. } => Some(*rect),
                _ => None,
            })
            .collect()
    }
}

impl Painter for DisplayList {
    fn clear(&mut self, color: Color) {
        // Everything before a clear is invisible
        self.commands.clear();
        self.commands.push(DrawCommand::Clear(color));
    }

    fn draw_text(&mut self, position: Point, text: &str, size: f64, color: Color) {
        self.commands.push(DrawCommand::Text {
            position,
            text: text.to_string(),
            size,
            color,
        });
    }

    fn stroke_rect(&mut self, rect: Rect, line_width: f64, color: Color) {
        self.commands.push(DrawCommand::StrokeRect {
            rect,
            line_width,
            color,
        });
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::FillRect { rect, color });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clear_discards_previous_commands() {
        let mut list = DisplayList::new();
        list.draw_text(Point::ZERO, "stale", 10.0, Color::BLACK);
        list.clear(Color::WHITE);
        list.draw_text(Point::ZERO, "fresh", 10.0, Color::BLACK);

        assert_eq!(list.commands().len(), 2);
        assert_eq!(list.texts(), vec!["fresh"]);
    }

    #[test]
    fn test_records_in_order() {
        let mut list = DisplayList::new();
        let rect = Rect::new(0.0, 0.0, 10.0, 10.0);
        list.stroke_rect(rect, 2.0, Color::BLACK);
        list.fill_rect(rect, Color::WHITE);

        assert!(matches!(list.commands()[0], DrawCommand::StrokeRect { .. }));
        assert!(matches!(list.commands()[1], DrawCommand::FillRect { .. }));
        assert_eq!(list.stroked_rects(), vec![rect]);
    }
}
