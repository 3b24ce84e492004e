//! Drives single widgets through frames without a window.

use kurbo::Point;
use stagehand_core::{
    DisplayList, Frame, InputState, KeyEvent, MouseButton, MouseOver, PointerEvent, SceneSnapshot,
    Style, Widget,
};

pub struct Harness {
    pub input: InputState,
    pub mouse: MouseOver,
    pub style: Style,
    pub painter: DisplayList,
    /// Form values the widget sees as its own scene's.
    pub scene: SceneSnapshot,
}

impl Harness {
    pub fn new() -> Self {
        Self {
            input: InputState::new(),
            mouse: MouseOver::new(),
            style: Style::default(),
            painter: DisplayList::new(),
            scene: SceneSnapshot::default(),
        }
    }

    /// Run one frame of `widget` at the usual scene origin and width.
    /// Returns the scene transition it requested, if any.
    pub fn frame(&mut self, widget: &mut dyn Widget) -> Option<String> {
        self.frame_at(widget, Point::new(20.0, 20.0), 800.0)
    }

    pub fn frame_at(
        &mut self,
        widget: &mut dyn Widget,
        position: Point,
        width: f64,
    ) -> Option<String> {
        self.painter.reset();
        let request = {
            let mut frame =
                Frame::new(&self.input, &mut self.painter, &self.style, &mut self.mouse);
            frame.set_scene(self.scene.clone());
            widget.update(position, width, &mut frame);
            frame.take_scene_request()
        };
        self.mouse.end_frame();
        self.input.begin_frame();
        request
    }

    pub fn point_at(&mut self, x: f64, y: f64) {
        self.input.handle_pointer_event(PointerEvent::Move {
            position: Point::new(x, y),
        });
    }

    pub fn press(&mut self, button: MouseButton) {
        let position = self.input.pointer_position;
        self.input.handle_pointer_event(PointerEvent::Down { position, button });
    }

    pub fn release(&mut self, button: MouseButton) {
        let position = self.input.pointer_position;
        self.input.handle_pointer_event(PointerEvent::Up { position, button });
    }

    /// Press and release `button` within the coming frame.
    pub fn click(&mut self, button: MouseButton) {
        self.press(button);
        self.release(button);
    }

    /// Press and release a named key within the coming frame.
    pub fn tap_key(&mut self, key: &str) {
        self.input.handle_key_event(KeyEvent::Pressed(key.to_string()));
        self.input.handle_key_event(KeyEvent::Released(key.to_string()));
    }

    pub fn type_text(&mut self, text: &str) {
        self.input.handle_text(text);
    }
}
