//! Stagehand Core Library
//!
//! Platform-agnostic scene composition for the Stagehand shell: the widget
//! protocol, descriptor loading, scene transitions and pointer ownership.

pub mod catalog;
pub mod error;
pub mod factory;
pub mod frame;
pub mod input;
pub mod mouse_over;
pub mod paint;
pub mod runtime;
pub mod scene;
pub mod storage;
pub mod style;
pub mod widget;

#[cfg(test)]
mod testing;

pub use catalog::{MAIN_SCENE, SceneCatalog};
pub use error::{LoadError, LookupError, RuntimeError};
pub use factory::{
    Args, BuildError, BuildResult, CoercionError, FactoryError, ParamKind, WidgetRegistry,
};
pub use frame::Frame;
pub use input::{InputState, KeyEvent, MouseButton, PointerEvent};
pub use mouse_over::MouseOver;
pub use paint::{DisplayList, DrawCommand, Painter};
pub use runtime::Runtime;
pub use scene::{Scene, SceneSnapshot, SceneView};
pub use storage::{FileStorage, MemoryStorage, StorageError, StorageResult, WorldStore};
pub use style::{Style, StyleColor, StyleColors};
pub use widget::{
    Awake, ColorValue, FormField, FormKind, FormValue, Widget, WidgetId, new_widget_id,
};
