//! Minimal widgets for exercising scenes and the catalog in tests.

use std::cell::RefCell;
use std::rc::Rc;

use kurbo::{Point, Rect};

use crate::error::RuntimeError;
use crate::factory::{ParamKind, WidgetRegistry};
use crate::frame::Frame;
use crate::scene::SceneView;
use crate::style::StyleColor;
use crate::widget::{Awake, FormField, FormValue, Widget, WidgetId, new_widget_id};

/// Draws its text.
pub struct Caption {
    pub text: String,
}

impl Widget for Caption {
    fn update(&mut self, position: Point, _width: f64, frame: &mut Frame<'_>) {
        frame.draw_text(position, &self.text, StyleColor::TextDark);
    }
}

/// Named text field.
pub struct Field {
    pub name: String,
    pub value: String,
}

impl Widget for Field {
    fn update(&mut self, position: Point, _width: f64, frame: &mut Frame<'_>) {
        frame.draw_text(position, &self.value, StyleColor::TextLight);
    }

    fn as_form(&self) -> Option<&dyn FormField> {
        Some(self)
    }
}

impl FormField for Field {
    fn name(&self) -> &str {
        &self.name
    }

    fn value(&self) -> FormValue {
        FormValue::Text(self.value.clone())
    }
}

/// Shared record of awake calls: the previous scene's name per call.
pub type AwakeLog = Rc<RefCell<Vec<String>>>;

/// Records every awake it receives.
pub struct Sentinel {
    pub log: AwakeLog,
}

impl Widget for Sentinel {
    fn update(&mut self, _position: Point, _width: f64, _frame: &mut Frame<'_>) {}

    fn as_awake(&mut self) -> Option<&mut dyn Awake> {
        Some(self)
    }
}

impl Awake for Sentinel {
    fn awake(&mut self, previous: &dyn SceneView) -> Result<(), RuntimeError> {
        self.log.borrow_mut().push(previous.name().to_string());
        Ok(())
    }
}

/// Fixed-size hit region that requests a transition when clicked.
pub struct Region {
    pub id: WidgetId,
    pub size: f64,
    pub target: Option<String>,
}

impl Region {
    pub fn new(size: f64) -> Self {
        Self {
            id: new_widget_id(),
            size,
            target: None,
        }
    }
}

impl Widget for Region {
    fn update(&mut self, position: Point, _width: f64, frame: &mut Frame<'_>) {
        let rect = Rect::from_origin_size(position, (self.size, self.size));
        frame.set_rect(self.id, rect);
        if let Some(target) = &self.target {
            if frame.is_mouse_over(self.id)
                && frame.input().is_button_just_pressed(crate::input::MouseButton::Left)
            {
                frame.request_scene(target.clone());
            }
        }
    }
}

/// Registry with `Label text`, `Textbox value` and `Textbox name value`.
pub fn registry() -> WidgetRegistry {
    let mut registry = WidgetRegistry::new();
    registry
        .register("Label", &[ParamKind::Text], |args| {
            Ok(Box::new(Caption {
                text: args.text(0)?.to_string(),
            }))
        })
        .register("Textbox", &[ParamKind::Text], |args| {
            Ok(Box::new(Field {
                name: String::new(),
                value: args.text(0)?.to_string(),
            }))
        })
        .register("Textbox", &[ParamKind::Text, ParamKind::Text], |args| {
            Ok(Box::new(Field {
                name: args.text(0)?.to_string(),
                value: args.text(1)?.to_string(),
            }))
        });
    registry
}

/// `registry()` plus a `Sentinel` type whose instances append to `log`.
pub fn registry_with_sentinel(log: &AwakeLog) -> WidgetRegistry {
    let mut registry = registry();
    let log = log.clone();
    registry.register("Sentinel", &[], move |_| Ok(Box::new(Sentinel { log: log.clone() })));
    registry
}
