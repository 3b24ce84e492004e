//! Editable text boxes.

use kurbo::Point;
use peniko::Color;
use stagehand_core::input::PRINTABLE;
use stagehand_core::{
    ColorValue, FormField, FormValue, Frame, MouseButton, StyleColor, Widget, WidgetId,
    new_widget_id,
};

use crate::sizing;

const BACKSPACE: &str = "Backspace";

/// Single-line text entry.
///
/// A left click selects the box when the pointer owns it and deselects it
/// otherwise. While selected, printable characters are appended and
/// Backspace removes the last one.
#[derive(Debug, Clone)]
pub struct Textbox {
    id: WidgetId,
    /// Empty for an anonymous box.
    name: String,
    value: String,
    selected: bool,
}

impl Textbox {
    /// An anonymous text box.
    pub fn new(value: impl Into<String>) -> Self {
        Self::named("", value)
    }

    /// A text box readable by name from other scenes.
    pub fn named(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            id: new_widget_id(),
            name: name.into(),
            value: value.into(),
            selected: false,
        }
    }

    pub fn id(&self) -> WidgetId {
        self.id
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    fn edit(&mut self, frame: &Frame<'_>) {
        let input = frame.input();
        for c in input.typed_chars() {
            if PRINTABLE.contains(&u32::from(*c)) {
                self.value.push(*c);
            }
        }
        if input.is_key_pressed_or_repeated(BACKSPACE) {
            self.value.pop();
        }
    }
}

impl Widget for Textbox {
    fn update(&mut self, position: Point, width: f64, frame: &mut Frame<'_>) {
        let mouse_over = frame.is_mouse_over(self.id);
        if frame.input().is_button_just_pressed(MouseButton::Left) {
            self.selected = mouse_over;
        }
        if self.selected {
            self.edit(frame);
        }

        let border = if self.selected {
            StyleColor::SelectedBorder
        } else {
            StyleColor::DeSelectedBorder
        };
        let rect = frame.rect_border(position, width, border);
        frame.set_rect(self.id, rect);
        frame.draw_text(position, &self.value, StyleColor::TextLight);
    }

    fn as_form(&self) -> Option<&dyn FormField> {
        Some(self)
    }
}

impl FormField for Textbox {
    fn name(&self) -> &str {
        &self.name
    }

    fn value(&self) -> FormValue {
        FormValue::Text(self.value.clone())
    }
}

/// Four channel boxes (r, g, b, a) editing a normalised color.
///
/// Channels that do not parse keep their last valid value.
#[derive(Debug, Clone)]
pub struct Colorbox {
    channels: [Textbox; sizing::COLOR_CHANNELS],
    last_valid: [f32; sizing::COLOR_CHANNELS],
}

impl Default for Colorbox {
    fn default() -> Self {
        Self::new()
    }
}

impl Colorbox {
    /// Opaque black.
    pub fn new() -> Self {
        Self {
            channels: [
                Textbox::new("0"),
                Textbox::new("0"),
                Textbox::new("0"),
                Textbox::new("1"),
            ],
            last_valid: [0.0, 0.0, 0.0, 1.0],
        }
    }

    /// The channel boxes, red first.
    pub fn channels(&self) -> &[Textbox] {
        &self.channels
    }

    /// Current color.
    pub fn color(&self) -> ColorValue {
        ColorValue::from(Color::new(self.last_valid))
    }

    fn reparse(&mut self) {
        for (channel, last) in self.channels.iter().zip(self.last_valid.iter_mut()) {
            if let Ok(value) = channel.value().trim().parse::<f32>() {
                *last = value.clamp(0.0, 1.0);
            }
        }
    }
}

impl Widget for Colorbox {
    fn update(&mut self, position: Point, width: f64, frame: &mut Frame<'_>) {
        let w = width / sizing::COLOR_CHANNELS as f64;
        for (i, channel) in self.channels.iter_mut().enumerate() {
            let x = position.x + w * i as f64;
            channel.update(Point::new(x, position.y), w, frame);
        }
        self.reparse();
    }
}
