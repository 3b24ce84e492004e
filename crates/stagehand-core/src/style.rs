//! Style provider: named colors and the primitive shapes widgets are drawn with.
//!
//! A style file has one color per line:
//!
//! ```text
//! Background 0.95 0.95 0.95
//! SelectedBorder 0.2 0.5 1 0.8
//! ```
//!
//! Channels are normalised floats and alpha defaults to 1.

use std::collections::HashMap;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use kurbo::{Point, Rect};
use peniko::Color;

use crate::error::LoadError;
use crate::paint::Painter;

/// Color roles a style file can assign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleColor {
    Background,
    TextDark,
    TextLight,
    SelectedBorder,
    DeSelectedBorder,
    Check1,
    Check2,
}

impl StyleColor {
    /// Every role, in declaration order.
    pub const ALL: [StyleColor; 7] = [
        StyleColor::Background,
        StyleColor::TextDark,
        StyleColor::TextLight,
        StyleColor::SelectedBorder,
        StyleColor::DeSelectedBorder,
        StyleColor::Check1,
        StyleColor::Check2,
    ];

    /// The name used for this role in style files.
    pub fn name(self) -> &'static str {
        match self {
            StyleColor::Background => "Background",
            StyleColor::TextDark => "TextDark",
            StyleColor::TextLight => "TextLight",
            StyleColor::SelectedBorder => "SelectedBorder",
            StyleColor::DeSelectedBorder => "DeSelectedBorder",
            StyleColor::Check1 => "Check1",
            StyleColor::Check2 => "Check2",
        }
    }
}

impl fmt::Display for StyleColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for StyleColor {
    type Err = ();

    /// Names match case-sensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL.into_iter().find(|c| c.name() == s).ok_or(())
    }
}

/// Channel `index` of a style line, or `default` when absent or unparsable.
fn channel(parts: &[&str], index: usize, default: f32) -> f32 {
    match parts.get(index) {
        Some(text) => match text.parse::<f32>() {
            Ok(value) => value.clamp(0.0, 1.0),
            Err(_) => {
                log::warn!("Unparsable color channel `{}`, using {}", text, default);
                default
            }
        },
        None => default,
    }
}

/// Color table parsed from a style file.
#[derive(Debug, Clone, Default)]
pub struct StyleColors {
    colors: HashMap<StyleColor, Color>,
}

impl StyleColors {
    /// Parse style lines. Unknown color names are skipped.
    pub fn parse(source: &str) -> Self {
        let mut colors = HashMap::new();
        for line in source.lines() {
            let parts: Vec<&str> = line.split_whitespace().collect();
            let Some(first) = parts.first() else {
                continue;
            };
            let Ok(role) = first.parse::<StyleColor>() else {
                log::warn!("Ignoring unknown style color `{}`", first);
                continue;
            };
            let r = channel(&parts, 1, 0.0);
            let g = channel(&parts, 2, 0.0);
            let b = channel(&parts, 3, 0.0);
            let a = channel(&parts, 4, 1.0);
            log::debug!("Style color {} = ({}, {}, {}, {})", role, r, g, b, a);
            if colors.insert(role, Color::new([r, g, b, a])).is_some() {
                log::warn!("Style color {} defined twice, keeping the last", role);
            }
        }
        Self { colors }
    }

    /// Look up a color. Missing entries fall back to opaque black.
    pub fn get(&self, role: StyleColor) -> Color {
        self.colors.get(&role).copied().unwrap_or(Color::BLACK)
    }

    /// Override a single color.
    pub fn set(&mut self, role: StyleColor, color: Color) {
        self.colors.insert(role, color);
    }
}

/// Colors plus the fixed metrics widgets are drawn with.
#[derive(Debug, Clone, Default)]
pub struct Style {
    colors: StyleColors,
}

impl Style {
    /// Text size and the height of bordered boxes.
    pub const FONT_SIZE: f64 = 40.0;
    /// Vertical advance between stacked widgets.
    pub const LINE_SIZE: f64 = 60.0;
    /// Width of box outlines.
    pub const BORDER_WIDTH: f64 = 2.0;

    /// Build a style from an already parsed color table.
    pub fn new(colors: StyleColors) -> Self {
        Self { colors }
    }

    /// Build a style from the text of a style file.
    pub fn parse(source: &str) -> Self {
        Self::new(StyleColors::parse(source))
    }

    /// Load a style file.
    pub fn load(path: &Path) -> Result<Self, LoadError> {
        let source = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::parse(&source))
    }

    /// The color table.
    pub fn colors(&self) -> &StyleColors {
        &self.colors
    }

    /// Shorthand for `colors().get(role)`.
    pub fn color(&self, role: StyleColor) -> Color {
        self.colors.get(role)
    }

    /// Clear the frame to the background color.
    pub fn clear(&self, painter: &mut dyn Painter) {
        painter.clear(self.color(StyleColor::Background));
    }

    /// Draw text at the style's font size.
    pub fn draw_text(
        &self,
        painter: &mut dyn Painter,
        position: Point,
        text: &str,
        role: StyleColor,
    ) {
        painter.draw_text(position, text, Self::FONT_SIZE, self.color(role));
    }

    /// Outline a one-line box starting at `position` and return its rectangle.
    pub fn rect_border(
        &self,
        painter: &mut dyn Painter,
        position: Point,
        width: f64,
        role: StyleColor,
    ) -> Rect {
        let rect = Rect::from_origin_size(position, (width, Self::FONT_SIZE));
        painter.stroke_rect(rect, Self::BORDER_WIDTH, self.color(role));
        rect
    }
}
