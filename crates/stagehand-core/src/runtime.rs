//! Frame loop state owned by the window shell.

use crate::catalog::SceneCatalog;
use crate::error::RuntimeError;
use crate::frame::Frame;
use crate::input::InputState;
use crate::mouse_over::MouseOver;
use crate::paint::Painter;
use crate::style::Style;

/// The catalog plus the frame-scoped state threaded through every update.
#[derive(Debug)]
pub struct Runtime {
    catalog: SceneCatalog,
    style: Style,
    mouse_over: MouseOver,
    input: InputState,
}

impl Runtime {
    pub fn new(catalog: SceneCatalog, style: Style) -> Self {
        Self {
            catalog,
            style,
            mouse_over: MouseOver::new(),
            input: InputState::new(),
        }
    }

    pub fn catalog(&self) -> &SceneCatalog {
        &self.catalog
    }

    pub fn style(&self) -> &Style {
        &self.style
    }

    pub fn mouse_over(&self) -> &MouseOver {
        &self.mouse_over
    }

    /// Input state the shell feeds events into between frames.
    pub fn input_mut(&mut self) -> &mut InputState {
        &mut self.input
    }

    /// Run one frame: update the active scene into `painter`, commit pointer
    /// ownership, then drop this frame's transient input.
    pub fn frame(&mut self, painter: &mut dyn Painter) -> Result<(), RuntimeError> {
        let result = {
            let mut frame = Frame::new(&self.input, painter, &self.style, &mut self.mouse_over);
            self.catalog.update(&mut frame)
        };
        self.mouse_over.end_frame();
        self.input.begin_frame();
        result
    }
}
