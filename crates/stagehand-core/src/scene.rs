//! Scenes: ordered widget lists loaded from descriptor files.
//!
//! A descriptor has one widget per line, `TypeName arg1 arg2 ...`, split on
//! whitespace. Blank lines are ignored. Widgets are laid out as a single
//! left-aligned vertical stack in declaration order.

use std::collections::HashSet;
use std::fmt;
use std::path::Path;

use kurbo::Point;

use crate::error::{LoadError, LookupError, RuntimeError};
use crate::factory::{FactoryError, WidgetRegistry};
use crate::frame::Frame;
use crate::style::Style;
use crate::widget::{ColorValue, FormKind, FormValue, Widget};

/// Read-only view of a scene, as handed to [`crate::widget::Awake`].
pub trait SceneView {
    /// Scene name.
    fn name(&self) -> &str;

    /// First form field named `name`, in declaration order.
    fn get_value(&self, name: &str) -> Result<FormValue, LookupError>;

    fn get_text(&self, name: &str) -> Result<String, LookupError> {
        match self.get_value(name)? {
            FormValue::Text(text) => Ok(text),
            other => Err(wrong_kind(name, FormKind::Text, &other)),
        }
    }

    fn get_integer(&self, name: &str) -> Result<i64, LookupError> {
        match self.get_value(name)? {
            FormValue::Integer(value) => Ok(value),
            other => Err(wrong_kind(name, FormKind::Integer, &other)),
        }
    }

    fn get_boolean(&self, name: &str) -> Result<bool, LookupError> {
        match self.get_value(name)? {
            FormValue::Boolean(value) => Ok(value),
            other => Err(wrong_kind(name, FormKind::Boolean, &other)),
        }
    }

    fn get_color(&self, name: &str) -> Result<ColorValue, LookupError> {
        match self.get_value(name)? {
            FormValue::Color(value) => Ok(value),
            other => Err(wrong_kind(name, FormKind::Color, &other)),
        }
    }
}

/// Attach the descriptor location to a factory failure.
fn load_error(scene: &str, line: usize, error: FactoryError) -> LoadError {
    let scene = scene.to_string();
    match error {
        FactoryError::UnknownType(name) => LoadError::UnknownWidgetType { scene, line, name },
        FactoryError::NoMatchingConstructor { type_name, args } => {
            LoadError::NoMatchingConstructor {
                scene,
                line,
                type_name,
                args,
            }
        }
        FactoryError::Build { type_name, source } => LoadError::Construct {
            scene,
            line,
            type_name,
            reason: source.reason,
        },
    }
}

fn wrong_kind(name: &str, expected: FormKind, found: &FormValue) -> LookupError {
    LookupError::WrongKind {
        name: name.to_string(),
        expected,
        found: found.kind(),
    }
}

/// Form values of a scene captured at one point in time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SceneSnapshot {
    name: String,
    fields: Vec<(String, FormValue)>,
}

impl SceneSnapshot {
    pub fn new(name: impl Into<String>, fields: Vec<(String, FormValue)>) -> Self {
        Self {
            name: name.into(),
            fields,
        }
    }

    /// Captured fields in declaration order.
    pub fn fields(&self) -> &[(String, FormValue)] {
        &self.fields
    }
}

impl SceneView for SceneSnapshot {
    fn name(&self) -> &str {
        &self.name
    }

    fn get_value(&self, name: &str) -> Result<FormValue, LookupError> {
        self.fields
            .iter()
            .find(|(field, _)| !field.is_empty() && field == name)
            .map(|(_, value)| value.clone())
            .ok_or_else(|| LookupError::FieldNotFound(name.to_string()))
    }
}

/// A named, ordered collection of widgets.
pub struct Scene {
    name: String,
    widgets: Vec<Box<dyn Widget>>,
}

impl fmt::Debug for Scene {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scene")
            .field("name", &self.name)
            .field("widgets", &self.widgets.len())
            .finish()
    }
}

impl Scene {
    /// Y coordinate of the first widget.
    pub const TOP_OFFSET: f64 = 20.0;
    /// X coordinate of every widget.
    pub const LEFT_OFFSET: f64 = 20.0;
    /// Width handed to every widget.
    pub const WIDTH: f64 = 800.0;

    /// Build a scene directly from widgets.
    pub fn new(name: impl Into<String>, widgets: Vec<Box<dyn Widget>>) -> Self {
        Self {
            name: name.into(),
            widgets,
        }
    }

    /// Parse descriptor text, building each line's widget through `registry`.
    pub fn parse(name: &str, source: &str, registry: &WidgetRegistry) -> Result<Self, LoadError> {
        let mut widgets = Vec::new();
        for (index, line) in source.lines().enumerate() {
            let mut parts = line.split_whitespace();
            let Some(type_name) = parts.next() else {
                continue;
            };
            let args: Vec<&str> = parts.collect();
            let line = index + 1;

            let widget = registry
                .build(type_name, &args)
                .map_err(|e| load_error(name, line, e))?;
            log::debug!("{}:{}: built {} {:?}", name, line, type_name, args);
            widgets.push(widget);
        }

        let scene = Self::new(name, widgets);
        scene.warn_duplicate_fields();
        Ok(scene)
    }

    /// Load a descriptor file.
    pub fn load(name: &str, path: &Path, registry: &WidgetRegistry) -> Result<Self, LoadError> {
        let source = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(name, &source, registry)
    }

    fn warn_duplicate_fields(&self) {
        let mut seen = HashSet::new();
        for field in self.widgets.iter().filter_map(|w| w.as_form()) {
            let field_name = field.name();
            if !field_name.is_empty() && !seen.insert(field_name) {
                log::warn!(
                    "Scene `{}` declares form field `{}` more than once; lookups use the first",
                    self.name,
                    field_name
                );
            }
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn widgets(&self) -> &[Box<dyn Widget>] {
        &self.widgets
    }

    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }

    /// Capture every named form value, in declaration order.
    pub fn snapshot(&self) -> SceneSnapshot {
        let fields = self
            .widgets
            .iter()
            .filter_map(|w| w.as_form())
            .map(|field| (field.name().to_string(), field.value()))
            .collect();
        SceneSnapshot::new(self.name.clone(), fields)
    }

    /// Notify every awakable widget that this scene was entered from `previous`.
    pub fn awake(&mut self, previous: &dyn SceneView) -> Result<(), RuntimeError> {
        for widget in &mut self.widgets {
            if let Some(awake) = widget.as_awake() {
                awake.awake(previous)?;
            }
        }
        Ok(())
    }

    /// Lay out and update every widget.
    pub fn update(&mut self, frame: &mut Frame<'_>) {
        // Widgets are borrowed mutably below, so siblings read a copy.
        // Scenes hold a handful of short fields.
        frame.set_scene(self.snapshot());
        let mut position = Point::new(Self::LEFT_OFFSET, Self::TOP_OFFSET);
        for widget in &mut self.widgets {
            widget.update(position, Self::WIDTH, frame);
            position.y += Style::LINE_SIZE;
        }
    }
}

impl SceneView for Scene {
    fn name(&self) -> &str {
        &self.name
    }

    fn get_value(&self, name: &str) -> Result<FormValue, LookupError> {
        self.widgets
            .iter()
            .filter_map(|w| w.as_form())
            .find(|field| !field.name().is_empty() && field.name() == name)
            .map(|field| field.value())
            .ok_or_else(|| LookupError::FieldNotFound(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::InputState;
    use crate::mouse_over::MouseOver;
    use crate::paint::DisplayList;
    use crate::testing::{self, AwakeLog};
    use crate::widget::Awake;

    #[test]
    fn test_parse_label_and_textbox() {
        let registry = testing::registry();
        let scene = Scene::parse("Main", "Label Hello\nTextbox World\n", &registry).unwrap();

        assert_eq!(scene.len(), 2);
        assert!(scene.widgets()[0].as_form().is_none());
        let field = scene.widgets()[1].as_form().unwrap();
        assert_eq!(field.value(), FormValue::Text("World".to_string()));
    }

    #[test]
    fn test_blank_lines_skipped() {
        let registry = testing::registry();
        let scene = Scene::parse("Main", "\n   \nLabel A\n\n\tLabel B\n", &registry).unwrap();
        assert_eq!(scene.len(), 2);
    }

    #[test]
    fn test_unknown_type_fails_load() {
        let registry = testing::registry();
        let result = Scene::parse("Main", "Label Hi\nSlider 1 2\nLabel Bye", &registry);

        match result {
            Err(LoadError::UnknownWidgetType { scene, line, name }) => {
                assert_eq!(scene, "Main");
                assert_eq!(line, 2);
                assert_eq!(name, "Slider");
            }
            other => panic!("expected UnknownWidgetType, got {:?}", other),
        }
    }

    #[test]
    fn test_wrong_arity_fails_load() {
        let registry = testing::registry();
        let result = Scene::parse("Main", "Label", &registry);
        assert!(matches!(result, Err(LoadError::NoMatchingConstructor { line: 1, .. })));
    }

    #[test]
    fn test_get_value_first_match_wins() {
        let registry = testing::registry();
        let scene = Scene::parse(
            "Menu",
            "Textbox Name first\nTextbox Name second\nTextbox anonymous",
            &registry,
        )
        .unwrap();

        assert_eq!(scene.get_text("Name"), Ok("first".to_string()));
        assert_eq!(scene.snapshot().get_text("Name"), Ok("first".to_string()));
    }

    #[test]
    fn test_get_value_missing_and_unnamed() {
        let registry = testing::registry();
        let scene = Scene::parse("Menu", "Textbox anonymous", &registry).unwrap();

        assert_eq!(
            scene.get_value("Name"),
            Err(LookupError::FieldNotFound("Name".to_string()))
        );
        assert!(scene.get_value("").is_err());
    }

    #[test]
    fn test_typed_accessor_wrong_kind() {
        let registry = testing::registry();
        let scene = Scene::parse("Menu", "Textbox Width wide", &registry).unwrap();

        assert_eq!(
            scene.get_integer("Width"),
            Err(LookupError::WrongKind {
                name: "Width".to_string(),
                expected: FormKind::Integer,
                found: FormKind::Text,
            })
        );
    }

    #[test]
    fn test_update_stacks_widgets_vertically() {
        let registry = testing::registry();
        let mut scene = Scene::parse("Main", "Label A\nLabel B\nLabel C", &registry).unwrap();
        let input = InputState::new();
        let style = Style::default();
        let mut painter = DisplayList::new();
        let mut mouse = MouseOver::new();

        {
            let mut frame = Frame::new(&input, &mut painter, &style, &mut mouse);
            scene.update(&mut frame);
        }

        let positions: Vec<Point> = painter
            .commands()
            .iter()
            .filter_map(|c| match c {
                crate::paint::DrawCommand::Text { position, .. } => Some(*position),
                _ => None,
            })
            .collect();
        assert_eq!(
            positions,
            vec![Point::new(20.0, 20.0), Point::new(20.0, 80.0), Point::new(20.0, 140.0)]
        );
    }

    #[test]
    fn test_awake_in_declaration_order() {
        let log: AwakeLog = Default::default();
        let registry = testing::registry_with_sentinel(&log);
        let mut scene = Scene::parse("Game", "Sentinel\nLabel x\nSentinel", &registry).unwrap();

        scene.awake(&SceneSnapshot::new("Editor", Vec::new())).unwrap();

        assert_eq!(*log.borrow(), vec!["Editor".to_string(), "Editor".to_string()]);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Main");
        std::fs::write(&path, "Label Hello\nTextbox Name cave\n").unwrap();

        let scene = Scene::load("Main", &path, &testing::registry()).unwrap();

        assert_eq!(scene.name(), "Main");
        assert_eq!(scene.get_text("Name"), Ok("cave".to_string()));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = Scene::load("Main", &dir.path().join("Main"), &testing::registry());
        assert!(matches!(result, Err(LoadError::Io { .. })));
    }

    struct Failing;

    impl Widget for Failing {
        fn update(&mut self, _position: Point, _width: f64, _frame: &mut Frame<'_>) {}

        fn as_awake(&mut self) -> Option<&mut dyn Awake> {
            Some(self)
        }
    }

    impl Awake for Failing {
        fn awake(&mut self, previous: &dyn SceneView) -> Result<(), RuntimeError> {
            previous.get_text("Name")?;
            Ok(())
        }
    }

    #[test]
    fn test_awake_propagates_lookup_failure() {
        let mut scene = Scene::new("Game", vec![Box::new(Failing)]);
        let result = scene.awake(&SceneSnapshot::new("Main", Vec::new()));
        assert!(matches!(
            result,
            Err(RuntimeError::Lookup(LookupError::FieldNotFound(name))) if name == "Name"
        ));
    }
}
