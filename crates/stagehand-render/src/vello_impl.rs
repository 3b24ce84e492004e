//! Vello-based painter.

use kurbo::{Affine, Point, Rect, Stroke};
use parley::layout::PositionedLayoutItem;
use parley::{FontContext, LayoutContext, StyleProperty};
use peniko::{Brush, Color, Fill};
use stagehand_core::Painter;
use vello::Scene;

/// Family requested for every text run; resolved against system fonts.
const FONT_FAMILY: &str = "sans-serif";

/// Records widget draw calls into a [`Scene`].
///
/// The scene is rebuilt every frame: [`Painter::clear`] resets it and stores
/// the clear color as [`VelloPainter::base_color`], which the surface uses as
/// its background.
pub struct VelloPainter {
    /// The Vello scene being built.
    scene: Scene,
    /// Background for the current frame.
    base_color: Color,
    /// Font context for text rendering (cached to avoid rescanning fonts).
    font_cx: FontContext,
    /// Layout context for text rendering.
    layout_cx: LayoutContext<Brush>,
}

impl Default for VelloPainter {
    fn default() -> Self {
        Self::new()
    }
}

impl VelloPainter {
    pub fn new() -> Self {
        Self {
            scene: Scene::new(),
            base_color: Color::WHITE,
            font_cx: FontContext::new(),
            layout_cx: LayoutContext::new(),
        }
    }

    /// Get the built scene for rendering.
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Take ownership of the scene (resets internal scene).
    pub fn take_scene(&mut self) -> Scene {
        std::mem::take(&mut self.scene)
    }

    /// Background color set by the last clear.
    pub fn base_color(&self) -> Color {
        self.base_color
    }
}

impl Painter for VelloPainter {
    fn clear(&mut self, color: Color) {
        self.scene.reset();
        self.base_color = color;
    }

    fn draw_text(&mut self, position: Point, text: &str, size: f64, color: Color) {
        if text.is_empty() {
            return;
        }
        let brush = Brush::Solid(color);

        let mut builder = self.layout_cx.ranged_builder(&mut self.font_cx, text, 1.0, false);
        builder.push_default(StyleProperty::FontSize(size as f32));
        builder.push_default(StyleProperty::Brush(brush.clone()));
        builder.push_default(StyleProperty::FontStack(parley::FontStack::from(FONT_FAMILY)));
        let mut layout = builder.build(text);
        layout.break_all_lines(None);
        layout.align(None, parley::Alignment::Start, parley::AlignmentOptions::default());

        // Parley puts y=0 at the top of the first line
        let transform = Affine::translate((position.x, position.y));
        let mut glyph_count = 0;

        for line in layout.lines() {
            for item in line.items() {
                let PositionedLayoutItem::GlyphRun(glyph_run) = item else {
                    continue;
                };
                let mut x = glyph_run.offset();
                let y = glyph_run.baseline();
                let run = glyph_run.run();
                let font = run.font();
                let glyph_xform = run
                    .synthesis()
                    .skew()
                    .map(|angle| Affine::skew(angle.to_radians().tan() as f64, 0.0));

                let glyphs: Vec<vello::Glyph> = glyph_run
                    .glyphs()
                    .map(|glyph| {
                        let gx = x + glyph.x;
                        let gy = y - glyph.y;
                        x += glyph.advance;
                        vello::Glyph { id: glyph.id, x: gx, y: gy }
                    })
                    .collect();
                glyph_count += glyphs.len();

                if !glyphs.is_empty() {
                    self.scene
                        .draw_glyphs(font)
                        .brush(&brush)
                        .hint(true)
                        .transform(transform)
                        .glyph_transform(glyph_xform)
                        .font_size(run.font_size())
                        .normalized_coords(run.normalized_coords())
                        .draw(Fill::NonZero, glyphs.into_iter());
                }
            }
        }

        if glyph_count == 0 {
            log::warn!("No glyphs for `{}`; is a {} font installed?", text, FONT_FAMILY);
        }
    }

    fn stroke_rect(&mut self, rect: Rect, line_width: f64, color: Color) {
        // Kurbo strokes are centered on the path
        let inset = rect.inset(-line_width / 2.0);
        let stroke = Stroke::new(line_width);
        self.scene.stroke(&stroke, Affine::IDENTITY, color, None, &inset);
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.scene.fill(Fill::NonZero, Affine::IDENTITY, color, None, &rect);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clear_sets_base_color() {
        let mut painter = VelloPainter::new();
        assert_eq!(painter.base_color(), Color::WHITE);

        let color = Color::from_rgba8(10, 20, 30, 255);
        painter.clear(color);

        assert_eq!(painter.base_color(), color);
    }

    #[test]
    fn test_clear_discards_previous_frame() {
        let mut painter = VelloPainter::new();
        painter.fill_rect(Rect::new(0.0, 0.0, 10.0, 10.0), Color::BLACK);
        assert!(!painter.scene().encoding().is_empty());

        painter.clear(Color::WHITE);

        assert!(painter.scene().encoding().is_empty());
    }

    #[test]
    fn test_take_scene_leaves_empty_scene() {
        let mut painter = VelloPainter::new();
        painter.stroke_rect(Rect::new(0.0, 0.0, 10.0, 10.0), 2.0, Color::BLACK);

        let scene = painter.take_scene();

        assert!(!scene.encoding().is_empty());
        assert!(painter.scene().encoding().is_empty());
    }

    #[test]
    fn test_empty_text_draws_nothing() {
        let mut painter = VelloPainter::new();
        painter.draw_text(Point::new(20.0, 20.0), "", 40.0, Color::BLACK);
        assert!(painter.scene().encoding().is_empty());
    }
}
