//! World widgets: a tile-map editor and a read-only viewer.
//!
//! Both claim the pointer as a fallback with `set_default`, so any widget
//! declared after them with a hit rectangle takes priority.

use std::sync::Arc;

use kurbo::Point;
use stagehand_core::{
    Awake, FormField, FormValue, Frame, MouseButton, RuntimeError, SceneView, Widget, WidgetId,
    WorldStore, new_widget_id,
};

use crate::world::Tilemap;

/// Tile painted by a left drag when the scene has no `Tile` field.
const DEFAULT_TILE: u8 = 1;

/// Load and decode the map stored under `name`.
fn load_map(store: &dyn WorldStore, name: &str) -> Result<Tilemap, RuntimeError> {
    let bytes = store.load(name)?;
    Tilemap::decode(&bytes).map_err(|e| RuntimeError::CorruptWorld {
        name: name.to_string(),
        reason: e.to_string(),
    })
}

/// Paints tiles into a named map and saves after every change.
///
/// On entry it reads `Name` from the previous scene. An existing map of that
/// name is loaded; otherwise a blank `Width` x `Height` map is created and
/// saved, so a viewer entered straight away can load it.
/// Exposes the map name as the `Editor` field.
pub struct Editor {
    id: WidgetId,
    store: Arc<dyn WorldStore>,
    name: String,
    map: Option<Tilemap>,
}

impl Editor {
    pub fn new(store: Arc<dyn WorldStore>) -> Self {
        Self {
            id: new_widget_id(),
            store,
            name: String::new(),
            map: None,
        }
    }

    pub fn map(&self) -> Option<&Tilemap> {
        self.map.as_ref()
    }

    fn paint(&mut self, frame: &Frame<'_>) {
        let input = frame.input();
        let value = if input.is_button_pressed(MouseButton::Left) {
            let tile = frame.scene().get_integer("Tile").unwrap_or(i64::from(DEFAULT_TILE));
            u8::try_from(tile).unwrap_or(DEFAULT_TILE)
        } else if input.is_button_pressed(MouseButton::Right) {
            0
        } else {
            return;
        };

        let Some(map) = self.map.as_mut() else {
            return;
        };
        let (x, y) = Tilemap::cell_at(input.pointer_position);
        if map.set_cell(x, y, value) {
            if let Err(e) = self.store.save(&self.name, &map.encode()) {
                log::error!("Failed to save map `{}`: {}", self.name, e);
            }
        }
    }
}

impl Widget for Editor {
    fn update(&mut self, _position: Point, _width: f64, frame: &mut Frame<'_>) {
        frame.set_default(self.id);
        if frame.is_mouse_over(self.id) {
            self.paint(frame);
        }
        if let Some(map) = &self.map {
            map.draw(frame);
        }
    }

    fn as_awake(&mut self) -> Option<&mut dyn Awake> {
        Some(self)
    }

    fn as_form(&self) -> Option<&dyn FormField> {
        Some(self)
    }
}

impl Awake for Editor {
    fn awake(&mut self, previous: &dyn SceneView) -> Result<(), RuntimeError> {
        let name = previous.get_text("Name")?;
        let map = if self.store.exists(&name)? {
            load_map(self.store.as_ref(), &name)?
        } else {
            let width = previous.get_integer("Width")?;
            let height = previous.get_integer("Height")?;
            let map = Tilemap::new(width, height).map_err(|_| RuntimeError::InvalidWorldSize {
                name: name.clone(),
                width,
                height,
            })?;
            log::info!("Creating map `{}` ({}x{})", name, width, height);
            self.store.save(&name, &map.encode())?;
            map
        };
        self.name = name;
        self.map = Some(map);
        Ok(())
    }
}

impl FormField for Editor {
    fn name(&self) -> &str {
        "Editor"
    }

    fn value(&self) -> FormValue {
        FormValue::Text(self.name.clone())
    }
}

/// Shows the map named by the previous scene's `Editor` field.
///
/// Exposes the map name as the `Name` field, so an editor scene entered from
/// here reopens the same map.
pub struct Game {
    id: WidgetId,
    store: Arc<dyn WorldStore>,
    name: String,
    map: Option<Tilemap>,
}

impl Game {
    pub fn new(store: Arc<dyn WorldStore>) -> Self {
        Self {
            id: new_widget_id(),
            store,
            name: String::new(),
            map: None,
        }
    }

    pub fn map(&self) -> Option<&Tilemap> {
        self.map.as_ref()
    }
}

impl Widget for Game {
    fn update(&mut self, _position: Point, _width: f64, frame: &mut Frame<'_>) {
        frame.set_default(self.id);
        if let Some(map) = &self.map {
            map.draw(frame);
        }
    }

    fn as_awake(&mut self) -> Option<&mut dyn Awake> {
        Some(self)
    }

    fn as_form(&self) -> Option<&dyn FormField> {
        Some(self)
    }
}

impl Awake for Game {
    fn awake(&mut self, previous: &dyn SceneView) -> Result<(), RuntimeError> {
        let name = previous.get_text("Editor")?;
        self.map = Some(load_map(self.store.as_ref(), &name)?);
        self.name = name;
        Ok(())
    }
}

impl FormField for Game {
    fn name(&self) -> &str {
        "Name"
    }

    fn value(&self) -> FormValue {
        FormValue::Text(self.name.clone())
    }
}
