//! Clickable buttons.

use kurbo::Point;
use stagehand_core::{
    FormField, FormValue, Frame, MouseButton, StyleColor, Widget, WidgetId, new_widget_id,
};

/// What a button does when clicked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ButtonAction {
    /// Only the form value reports the click.
    None,
    /// Request a transition to the named scene.
    ChangeScene(String),
}

/// A bordered, named button.
///
/// Its form value is `true` only during the frame in which it was clicked.
#[derive(Debug, Clone)]
pub struct Button {
    id: WidgetId,
    name: String,
    action: ButtonAction,
    clicked: bool,
}

impl Button {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: new_widget_id(),
            name: name.into(),
            action: ButtonAction::None,
            clicked: false,
        }
    }

    /// A button that moves to `scene` when clicked.
    pub fn scene(name: impl Into<String>, scene: impl Into<String>) -> Self {
        Self {
            action: ButtonAction::ChangeScene(scene.into()),
            ..Self::new(name)
        }
    }

    pub fn action(&self) -> &ButtonAction {
        &self.action
    }

    pub fn clicked(&self) -> bool {
        self.clicked
    }
}

impl Widget for Button {
    fn update(&mut self, position: Point, width: f64, frame: &mut Frame<'_>) {
        let mouse_over = frame.is_mouse_over(self.id);
        self.clicked = mouse_over && frame.input().is_button_just_pressed(MouseButton::Left);
        if self.clicked {
            if let ButtonAction::ChangeScene(scene) = &self.action {
                frame.request_scene(scene.clone());
            }
        }

        let border = if mouse_over {
            StyleColor::SelectedBorder
        } else {
            StyleColor::DeSelectedBorder
        };
        let rect = frame.rect_border(position, width, border);
        frame.set_rect(self.id, rect);
        frame.draw_text(position, &self.name, StyleColor::TextDark);
    }

    fn as_form(&self) -> Option<&dyn FormField> {
        Some(self)
    }
}

impl FormField for Button {
    fn name(&self) -> &str {
        &self.name
    }

    fn value(&self) -> FormValue {
        FormValue::Boolean(self.clicked)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::harness::Harness;
    use stagehand_core::DrawCommand;

    #[test]
    fn test_click_true_for_one_frame() {
        let mut harness = Harness::new();
        let mut button = Button::new("Save");
        harness.point_at(30.0, 30.0);

        harness.frame(&mut button);
        assert!(!button.clicked());

        harness.click(MouseButton::Left);
        harness.frame(&mut button);
        assert_eq!(button.value(), FormValue::Boolean(true));

        harness.frame(&mut button);
        assert_eq!(button.value(), FormValue::Boolean(false));
    }

    #[test]
    fn test_first_frame_click_ignored() {
        let mut harness = Harness::new();
        let mut button = Button::new("Save");
        harness.point_at(30.0, 30.0);
        harness.click(MouseButton::Left);

        harness.frame(&mut button);

        assert!(!button.clicked());
    }

    #[test]
    fn test_border_highlights_when_owned() {
        let mut harness = Harness::new();
        harness.style =
            stagehand_core::Style::parse("SelectedBorder 1 0 0\nDeSelectedBorder 0 0 1\n");
        let mut button = Button::new("Save");
        harness.point_at(30.0, 30.0);

        let border_color = |harness: &Harness| match &harness.painter.commands()[0] {
            DrawCommand::StrokeRect { color, .. } => color.to_rgba8().to_u8_array(),
            other => panic!("unexpected {:?}", other),
        };

        harness.frame(&mut button);
        assert_eq!(border_color(&harness), [0, 0, 255, 255]);

        harness.frame(&mut button);
        assert_eq!(border_color(&harness), [255, 0, 0, 255]);
    }

    #[test]
    fn test_scene_button_requests_transition() {
        let mut harness = Harness::new();
        let mut button = Button::scene("Play", "Game");
        harness.point_at(30.0, 30.0);

        assert_eq!(harness.frame(&mut button), None);

        harness.click(MouseButton::Left);
        assert_eq!(harness.frame(&mut button), Some("Game".to_string()));
        assert!(button.clicked());
    }

    #[test]
    fn test_plain_button_requests_nothing() {
        let mut harness = Harness::new();
        let mut button = Button::new("Play");
        harness.point_at(30.0, 30.0);

        harness.frame(&mut button);
        harness.click(MouseButton::Left);

        assert_eq!(harness.frame(&mut button), None);
        assert_eq!(button.action(), &ButtonAction::None);
    }
}
