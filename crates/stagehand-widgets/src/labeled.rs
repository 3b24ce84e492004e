//! Named form fields: a dark label followed by an input.
//!
//! The label takes the left [`sizing::LABEL_FRACTION`] of the row and the
//! input the remaining [`sizing::INPUT_FRACTION`].

use kurbo::{Point, Rect};
use stagehand_core::{
    ColorValue, FormField, FormValue, Frame, MouseButton, Style, StyleColor, Widget, WidgetId,
    new_widget_id,
};

use crate::sizing;
use crate::textbox::{Colorbox, Textbox};

/// Draw the label and return where the input goes and how wide it is.
fn label_row(frame: &mut Frame<'_>, position: Point, width: f64, name: &str) -> (Point, f64) {
    frame.draw_text(position, name, StyleColor::TextDark);
    let input = Point::new(position.x + width * sizing::LABEL_FRACTION, position.y);
    (input, width * sizing::INPUT_FRACTION)
}

/// Named text field.
#[derive(Debug, Clone)]
pub struct LabeledTextbox {
    name: String,
    textbox: Textbox,
}

impl LabeledTextbox {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            textbox: Textbox::new(value),
        }
    }
}

impl Widget for LabeledTextbox {
    fn update(&mut self, position: Point, width: f64, frame: &mut Frame<'_>) {
        let (input, input_width) = label_row(frame, position, width, &self.name);
        self.textbox.update(input, input_width, frame);
    }

    fn as_form(&self) -> Option<&dyn FormField> {
        Some(self)
    }
}

impl FormField for LabeledTextbox {
    fn name(&self) -> &str {
        &self.name
    }

    fn value(&self) -> FormValue {
        FormValue::Text(self.textbox.value().to_string())
    }
}

/// Named integer field. Text that does not parse leaves the last valid
/// integer in place.
#[derive(Debug, Clone)]
pub struct LabeledIntbox {
    name: String,
    textbox: Textbox,
    last_valid: i64,
}

impl LabeledIntbox {
    pub fn new(name: impl Into<String>, value: i64) -> Self {
        Self {
            name: name.into(),
            textbox: Textbox::new(value.to_string()),
            last_valid: value,
        }
    }
}

impl Widget for LabeledIntbox {
    fn update(&mut self, position: Point, width: f64, frame: &mut Frame<'_>) {
        let (input, input_width) = label_row(frame, position, width, &self.name);
        self.textbox.update(input, input_width, frame);
        if let Ok(value) = self.textbox.value().trim().parse() {
            self.last_valid = value;
        }
    }

    fn as_form(&self) -> Option<&dyn FormField> {
        Some(self)
    }
}

impl FormField for LabeledIntbox {
    fn name(&self) -> &str {
        &self.name
    }

    fn value(&self) -> FormValue {
        FormValue::Integer(self.last_valid)
    }
}

/// Named color field.
#[derive(Debug, Clone)]
pub struct LabeledColorbox {
    name: String,
    colorbox: Colorbox,
}

impl LabeledColorbox {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            colorbox: Colorbox::new(),
        }
    }

    pub fn color(&self) -> ColorValue {
        self.colorbox.color()
    }
}

impl Widget for LabeledColorbox {
    fn update(&mut self, position: Point, width: f64, frame: &mut Frame<'_>) {
        let (input, input_width) = label_row(frame, position, width, &self.name);
        self.colorbox.update(input, input_width, frame);
    }

    fn as_form(&self) -> Option<&dyn FormField> {
        Some(self)
    }
}

impl FormField for LabeledColorbox {
    fn name(&self) -> &str {
        &self.name
    }

    fn value(&self) -> FormValue {
        FormValue::Color(self.colorbox.color())
    }
}

/// Named checkbox, toggled by clicking the square while the pointer owns it.
#[derive(Debug, Clone)]
pub struct LabeledBoolbox {
    id: WidgetId,
    name: String,
    checked: bool,
}

impl LabeledBoolbox {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: new_widget_id(),
            name: name.into(),
            checked: false,
        }
    }

    pub fn is_checked(&self) -> bool {
        self.checked
    }
}

impl Widget for LabeledBoolbox {
    fn update(&mut self, position: Point, width: f64, frame: &mut Frame<'_>) {
        let (input, _) = label_row(frame, position, width, &self.name);
        if frame.is_mouse_over(self.id) && frame.input().is_button_just_pressed(MouseButton::Left) {
            self.checked = !self.checked;
        }

        let square = Rect::from_origin_size(input, (Style::FONT_SIZE, Style::FONT_SIZE));
        let fill = if self.checked {
            StyleColor::Check1
        } else {
            StyleColor::Check2
        };
        let color = frame.style().color(fill);
        frame.painter().fill_rect(square, color);
        let border = frame.rect_border(input, Style::FONT_SIZE, StyleColor::DeSelectedBorder);
        frame.set_rect(self.id, border);
    }

    fn as_form(&self) -> Option<&dyn FormField> {
        Some(self)
    }
}

impl FormField for LabeledBoolbox {
    fn name(&self) -> &str {
        &self.name
    }

    fn value(&self) -> FormValue {
        FormValue::Boolean(self.checked)
    }
}
