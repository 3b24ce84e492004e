//! Named, typed values widgets expose for cross-scene data passing.

use std::fmt;

use peniko::Color;
use serde::{Deserialize, Serialize};

/// RGBA8 color carried by color form fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColorValue {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl ColorValue {
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn black() -> Self {
        Self::new(0, 0, 0, 255)
    }
}

impl From<Color> for ColorValue {
    fn from(color: Color) -> Self {
        let rgba = color.to_rgba8();
        Self {
            r: rgba.r,
            g: rgba.g,
            b: rgba.b,
            a: rgba.a,
        }
    }
}

impl From<ColorValue> for Color {
    fn from(color: ColorValue) -> Self {
        Color::from_rgba8(color.r, color.g, color.b, color.a)
    }
}

/// The closed set of form value kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormKind {
    Text,
    Integer,
    Boolean,
    Color,
}

impl fmt::Display for FormKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            FormKind::Text => "text",
            FormKind::Integer => "an integer",
            FormKind::Boolean => "a boolean",
            FormKind::Color => "a color",
        })
    }
}

/// A form field's current value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormValue {
    Text(String),
    Integer(i64),
    Boolean(bool),
    Color(ColorValue),
}

impl FormValue {
    /// The kind of this value.
    pub fn kind(&self) -> FormKind {
        match self {
            FormValue::Text(_) => FormKind::Text,
            FormValue::Integer(_) => FormKind::Integer,
            FormValue::Boolean(_) => FormKind::Boolean,
            FormValue::Color(_) => FormKind::Color,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            FormValue::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            FormValue::Integer(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_boolean(&self) -> Option<bool> {
        match self {
            FormValue::Boolean(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_color(&self) -> Option<ColorValue> {
        match self {
            FormValue::Color(value) => Some(*value),
            _ => None,
        }
    }
}

impl From<&str> for FormValue {
    fn from(text: &str) -> Self {
        FormValue::Text(text.to_string())
    }
}

impl From<i64> for FormValue {
    fn from(value: i64) -> Self {
        FormValue::Integer(value)
    }
}

impl From<bool> for FormValue {
    fn from(value: bool) -> Self {
        FormValue::Boolean(value)
    }
}

impl From<ColorValue> for FormValue {
    fn from(value: ColorValue) -> Self {
        FormValue::Color(value)
    }
}

/// A widget that exposes a named value.
///
/// The name must stay the same for the widget's whole lifetime. An empty
/// name marks an anonymous field that lookups never match.
pub trait FormField {
    /// Field name, matched case-sensitively.
    fn name(&self) -> &str;

    /// Current value.
    fn value(&self) -> FormValue;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_value_round_trips_through_peniko() {
        let value = ColorValue::new(255, 0, 255, 0);
        let color: Color = value.into();
        assert_eq!(ColorValue::from(color), value);
    }

    #[test]
    fn test_typed_accessors() {
        let text = FormValue::from("cave");
        assert_eq!(text.as_text(), Some("cave"));
        assert_eq!(text.as_integer(), None);
        assert_eq!(text.kind(), FormKind::Text);

        assert_eq!(FormValue::from(7_i64).as_integer(), Some(7));
        assert_eq!(FormValue::from(true).as_boolean(), Some(true));
        assert_eq!(
            FormValue::from(ColorValue::black()).as_color(),
            Some(ColorValue::black())
        );
    }
}
