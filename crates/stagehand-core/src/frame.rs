//! Per-frame context threaded through scene and widget updates.

use kurbo::{Point, Rect};

use crate::input::InputState;
use crate::mouse_over::MouseOver;
use crate::paint::Painter;
use crate::scene::SceneSnapshot;
use crate::style::{Style, StyleColor};
use crate::widget::WidgetId;

/// Everything a widget may touch while it updates.
pub struct Frame<'a> {
    input: &'a InputState,
    painter: &'a mut dyn Painter,
    style: &'a Style,
    mouse_over: &'a mut MouseOver,
    /// Form values of the updating scene, captured before its widgets run.
    scene: SceneSnapshot,
    pending_scene: Option<String>,
}

impl<'a> Frame<'a> {
    pub fn new(
        input: &'a InputState,
        painter: &'a mut dyn Painter,
        style: &'a Style,
        mouse_over: &'a mut MouseOver,
    ) -> Self {
        Self {
            input,
            painter,
            style,
            mouse_over,
            scene: SceneSnapshot::default(),
            pending_scene: None,
        }
    }

    pub fn input(&self) -> &InputState {
        self.input
    }

    pub fn style(&self) -> &Style {
        self.style
    }

    pub fn painter(&mut self) -> &mut dyn Painter {
        &mut *self.painter
    }

    /// Whether `id` owned the pointer when the previous frame ended.
    pub fn is_mouse_over(&self, id: WidgetId) -> bool {
        self.mouse_over.is_mouse_over(id)
    }

    /// Register `id` as a fallback pointer candidate.
    pub fn set_default(&mut self, id: WidgetId) {
        self.mouse_over.set_default(id);
    }

    /// Register `id` as pointer candidate if the pointer is inside `rect`.
    pub fn set_rect(&mut self, id: WidgetId, rect: Rect) {
        self.mouse_over.set_rect(id, rect, self.input.pointer_position);
    }

    /// Ask for a transition once the current scene has finished updating.
    /// A later request in the same frame replaces an earlier one.
    pub fn request_scene(&mut self, name: impl Into<String>) {
        let name = name.into();
        if let Some(previous) = self.pending_scene.replace(name.clone()) {
            log::debug!("Scene request `{}` replaced by `{}`", previous, name);
        }
    }

    /// The pending transition, if any, leaving none behind.
    pub fn take_scene_request(&mut self) -> Option<String> {
        self.pending_scene.take()
    }

    /// Install the form values of the scene about to update.
    pub fn set_scene(&mut self, scene: SceneSnapshot) {
        self.scene = scene;
    }

    /// Form values of the updating scene.
    pub fn scene(&self) -> &SceneSnapshot {
        &self.scene
    }

    /// Clear the frame to the style's background.
    pub fn clear(&mut self) {
        self.style.clear(&mut *self.painter);
    }

    /// Draw text in the style's font.
    pub fn draw_text(&mut self, position: Point, text: &str, role: StyleColor) {
        self.style.draw_text(&mut *self.painter, position, text, role);
    }

    /// Outline a one-line box and return its rectangle.
    pub fn rect_border(&mut self, position: Point, width: f64, role: StyleColor) -> Rect {
        self.style.rect_border(&mut *self.painter, position, width, role)
    }
}
