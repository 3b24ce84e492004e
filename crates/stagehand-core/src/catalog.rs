//! Scene catalog: every scene by name, and the active one.

use std::collections::HashMap;
use std::path::Path;

use crate::error::{LoadError, LookupError, RuntimeError};
use crate::factory::WidgetRegistry;
use crate::frame::Frame;
use crate::scene::Scene;

/// Name of the scene active after startup.
pub const MAIN_SCENE: &str = "Main";

/// Owns all scenes and tracks which one is updating.
#[derive(Debug)]
pub struct SceneCatalog {
    scenes: HashMap<String, Scene>,
    active: String,
}

impl SceneCatalog {
    /// Load one scene per file in `dir`, named by the file stem, and make
    /// `Main` active. Nothing is awoken.
    pub fn load_dir(dir: &Path, registry: &WidgetRegistry) -> Result<Self, LoadError> {
        let io_error = |source: std::io::Error| LoadError::Io {
            path: dir.to_path_buf(),
            source,
        };

        let mut paths = Vec::new();
        for entry in std::fs::read_dir(dir).map_err(io_error)? {
            let path = entry.map_err(io_error)?.path();
            if path.is_file() {
                paths.push(path);
            }
        }
        paths.sort();

        let mut scenes = Vec::with_capacity(paths.len());
        for path in paths {
            let Some(name) = path.file_stem().and_then(|s| s.to_str()) else {
                log::warn!("Skipping scene file with unusable name: {}", path.display());
                continue;
            };
            scenes.push(Scene::load(name, &path, registry)?);
        }

        let catalog = Self::from_scenes(scenes).map_err(|e| match e {
            LoadError::MissingMainScene(_) => LoadError::MissingMainScene(dir.to_path_buf()),
            other => other,
        })?;
        log::info!("Loaded {} scenes from {}", catalog.len(), dir.display());
        Ok(catalog)
    }

    /// Build a catalog from already constructed scenes.
    pub fn from_scenes(scenes: Vec<Scene>) -> Result<Self, LoadError> {
        let mut by_name = HashMap::with_capacity(scenes.len());
        for scene in scenes {
            let name = scene.name().to_string();
            if by_name.insert(name.clone(), scene).is_some() {
                return Err(LoadError::DuplicateScene(name));
            }
        }
        if !by_name.contains_key(MAIN_SCENE) {
            return Err(LoadError::MissingMainScene(Default::default()));
        }
        Ok(Self {
            scenes: by_name,
            active: MAIN_SCENE.to_string(),
        })
    }

    pub fn len(&self) -> usize {
        self.scenes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scenes.is_empty()
    }

    /// Scene names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.scenes.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn get(&self, name: &str) -> Option<&Scene> {
        self.scenes.get(name)
    }

    pub fn active_name(&self) -> &str {
        &self.active
    }

    /// The active scene.
    pub fn active(&self) -> Result<&Scene, LookupError> {
        self.scenes
            .get(&self.active)
            .ok_or_else(|| LookupError::SceneNotFound(self.active.clone()))
    }

    fn active_mut(&mut self) -> Result<&mut Scene, LookupError> {
        self.scenes
            .get_mut(&self.active)
            .ok_or_else(|| LookupError::SceneNotFound(self.active.clone()))
    }

    /// Make `name` active and awake it with the scene that was active before.
    ///
    /// The previous scene is seen through a snapshot of its form values, so
    /// changing to the already active scene is allowed.
    pub fn change_scene(&mut self, name: &str) -> Result<(), RuntimeError> {
        if !self.scenes.contains_key(name) {
            return Err(LookupError::SceneNotFound(name.to_string()).into());
        }
        let previous = self.active()?.snapshot();

        log::info!("Changing scene: {} -> {}", self.active, name);
        self.active = name.to_string();
        self.active_mut()?.awake(&previous)
    }

    /// Clear the frame, update the active scene, then apply any transition
    /// a widget requested during the update.
    pub fn update(&mut self, frame: &mut Frame<'_>) -> Result<(), RuntimeError> {
        frame.clear();
        self.active_mut()?.update(frame);
        if let Some(target) = frame.take_scene_request() {
            self.change_scene(&target)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{InputState, MouseButton, PointerEvent};
    use crate::mouse_over::MouseOver;
    use crate::paint::{DisplayList, DrawCommand};
    use crate::scene::SceneView;
    use crate::style::Style;
    use crate::testing::{self, AwakeLog, Region};
    use kurbo::Point;

    fn write_scenes(dir: &Path, scenes: &[(&str, &str)]) {
        for (name, source) in scenes {
            std::fs::write(dir.join(name), source).unwrap();
        }
    }

    #[test]
    fn test_load_dir_names_scenes_by_stem() {
        let dir = tempfile::tempdir().unwrap();
        write_scenes(
            dir.path(),
            &[("Main", "Label Title\nTextbox Name cave"), ("Editor.txt", "Label Editing")],
        );

        let catalog = SceneCatalog::load_dir(dir.path(), &testing::registry()).unwrap();

        assert_eq!(catalog.names(), vec!["Editor", "Main"]);
        assert_eq!(catalog.active_name(), "Main");
        assert_eq!(catalog.active().unwrap().get_text("Name"), Ok("cave".to_string()));
    }

    #[test]
    fn test_load_dir_requires_main() {
        let dir = tempfile::tempdir().unwrap();
        write_scenes(dir.path(), &[("Menu", "Label Title")]);

        let result = SceneCatalog::load_dir(dir.path(), &testing::registry());
        assert!(matches!(result, Err(LoadError::MissingMainScene(path)) if path == dir.path()));
    }

    #[test]
    fn test_load_dir_rejects_duplicate_stems() {
        let dir = tempfile::tempdir().unwrap();
        write_scenes(dir.path(), &[("Main", "Label A"), ("Main.txt", "Label B")]);

        let result = SceneCatalog::load_dir(dir.path(), &testing::registry());
        assert!(matches!(result, Err(LoadError::DuplicateScene(name)) if name == "Main"));
    }

    #[test]
    fn test_load_dir_propagates_descriptor_errors() {
        let dir = tempfile::tempdir().unwrap();
        write_scenes(dir.path(), &[("Main", "Label A\nSprite tree.png")]);

        let result = SceneCatalog::load_dir(dir.path(), &testing::registry());
        assert!(matches!(result, Err(LoadError::UnknownWidgetType { line: 2, .. })));
    }

    #[test]
    fn test_load_missing_dir() {
        let dir = tempfile::tempdir().unwrap();
        let result = SceneCatalog::load_dir(&dir.path().join("scenes"), &testing::registry());
        assert!(matches!(result, Err(LoadError::Io { .. })));
    }

    #[test]
    fn test_initial_load_awakes_nothing() {
        let log: AwakeLog = Default::default();
        let dir = tempfile::tempdir().unwrap();
        write_scenes(dir.path(), &[("Main", "Sentinel")]);

        SceneCatalog::load_dir(dir.path(), &testing::registry_with_sentinel(&log)).unwrap();

        assert!(log.borrow().is_empty());
    }

    #[test]
    fn test_change_scene_awakes_once_with_previous_name() {
        let log: AwakeLog = Default::default();
        let registry = testing::registry_with_sentinel(&log);
        let main = Scene::parse("Main", "Textbox Name cave", &registry).unwrap();
        let game = Scene::parse("Game", "Sentinel\nLabel x\nSentinel", &registry).unwrap();
        let mut catalog = SceneCatalog::from_scenes(vec![main, game]).unwrap();

        catalog.change_scene("Game").unwrap();

        assert_eq!(catalog.active_name(), "Game");
        assert_eq!(*log.borrow(), vec!["Main".to_string(), "Main".to_string()]);
    }

    #[test]
    fn test_change_to_active_scene_awakes_it() {
        let log: AwakeLog = Default::default();
        let registry = testing::registry_with_sentinel(&log);
        let main = Scene::parse("Main", "Sentinel", &registry).unwrap();
        let mut catalog = SceneCatalog::from_scenes(vec![main]).unwrap();

        catalog.change_scene("Main").unwrap();

        assert_eq!(*log.borrow(), vec!["Main".to_string()]);
    }

    #[test]
    fn test_change_to_unknown_scene_fails() {
        let registry = testing::registry();
        let main = Scene::parse("Main", "Label A", &registry).unwrap();
        let mut catalog = SceneCatalog::from_scenes(vec![main]).unwrap();

        let result = catalog.change_scene("Options");

        assert!(matches!(
            result,
            Err(RuntimeError::Lookup(LookupError::SceneNotFound(name))) if name == "Options"
        ));
        assert_eq!(catalog.active_name(), "Main");
    }

    #[test]
    fn test_update_clears_then_draws_active_scene() {
        let registry = testing::registry();
        let main = Scene::parse("Main", "Label Hello", &registry).unwrap();
        let other = Scene::parse("Other", "Label Elsewhere", &registry).unwrap();
        let mut catalog = SceneCatalog::from_scenes(vec![main, other]).unwrap();
        let input = InputState::new();
        let style = Style::default();
        let mut painter = DisplayList::new();
        let mut mouse = MouseOver::new();

        {
            let mut frame = Frame::new(&input, &mut painter, &style, &mut mouse);
            catalog.update(&mut frame).unwrap();
        }

        assert!(matches!(painter.commands()[0], DrawCommand::Clear(_)));
        assert_eq!(painter.texts(), vec!["Hello"]);
    }

    #[test]
    fn test_requested_transition_applies_after_update() {
        let log: AwakeLog = Default::default();
        let mut region = Region::new(40.0);
        region.target = Some("Game".to_string());
        let region_id = region.id;
        let main = Scene::new(
            "Main",
            vec![
                Box::new(region),
                Box::new(testing::Caption {
                    text: "after".to_string(),
                }),
            ],
        );
        let game = Scene::new("Game", vec![Box::new(testing::Sentinel { log: log.clone() })]);
        let mut catalog = SceneCatalog::from_scenes(vec![main, game]).unwrap();

        let mut input = InputState::new();
        input.handle_pointer_event(PointerEvent::Move {
            position: Point::new(30.0, 30.0),
        });
        let style = Style::default();
        let mut painter = DisplayList::new();
        let mut mouse = MouseOver::new();

        // Frame 1: the region becomes the candidate owner
        {
            let mut frame = Frame::new(&input, &mut painter, &style, &mut mouse);
            catalog.update(&mut frame).unwrap();
        }
        mouse.end_frame();
        assert!(mouse.is_mouse_over(region_id));

        // Frame 2: click on the owned region
        input.handle_pointer_event(PointerEvent::Down {
            position: Point::new(30.0, 30.0),
            button: MouseButton::Left,
        });
        {
            let mut frame = Frame::new(&input, &mut painter, &style, &mut mouse);
            catalog.update(&mut frame).unwrap();
        }

        // The rest of Main still updated before the switch
        assert_eq!(painter.texts(), vec!["after"]);
        assert_eq!(catalog.active_name(), "Game");
        assert_eq!(*log.borrow(), vec!["Main".to_string()]);
    }
}
