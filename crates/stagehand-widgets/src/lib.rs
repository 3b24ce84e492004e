//! Builtin descriptor widgets for the Stagehand shell.
//!
//! - **Text**: labels, text boxes, color boxes
//! - **Labeled fields**: named text/int/color/bool form fields
//! - **Buttons**: plain buttons and scene transition buttons
//! - **World**: tile-map editor and viewer backed by a [`WorldStore`]
//!
//! [`register_builtins`] installs every type under its descriptor name.

pub mod button;
pub mod editor;
pub mod label;
pub mod labeled;
pub mod textbox;
pub mod world;

#[cfg(test)]
mod harness;

use std::sync::Arc;

use stagehand_core::{ParamKind, WidgetRegistry, WorldStore};

pub use button::Button;
pub use editor::{Editor, Game};
pub use label::Label;
pub use labeled::{LabeledBoolbox, LabeledColorbox, LabeledIntbox, LabeledTextbox};
pub use textbox::{Colorbox, Textbox};
pub use world::{TILE_SIZE, Tilemap, WorldError};

/// Layout proportions shared by composite widgets.
pub mod sizing {
    /// Share of the row taken by a field's label.
    pub const LABEL_FRACTION: f64 = 0.3;
    /// Share of the row taken by a field's input.
    pub const INPUT_FRACTION: f64 = 0.7;
    /// Number of channel boxes in a color box.
    pub const COLOR_CHANNELS: usize = 4;
}

/// Register every builtin widget type.
///
/// World widgets persist through `store`.
pub fn register_builtins(registry: &mut WidgetRegistry, store: Arc<dyn WorldStore>) {
    use ParamKind::{Integer, Text};

    registry
        .register("Label", &[Text], |args| Ok(Box::new(Label::new(args.text(0)?))))
        .register("Textbox", &[Text], |args| Ok(Box::new(Textbox::new(args.text(0)?))))
        .register("Textbox", &[Text, Text], |args| {
            Ok(Box::new(Textbox::named(args.text(0)?, args.text(1)?)))
        })
        .register("Colorbox", &[], |_| Ok(Box::new(Colorbox::new())))
        .register("LabeledTextbox", &[Text, Text], |args| {
            Ok(Box::new(LabeledTextbox::new(args.text(0)?, args.text(1)?)))
        })
        .register("LabeledIntbox", &[Text, Integer], |args| {
            Ok(Box::new(LabeledIntbox::new(args.text(0)?, args.integer(1)?)))
        })
        .register("LabeledColorbox", &[Text], |args| {
            Ok(Box::new(LabeledColorbox::new(args.text(0)?)))
        })
        .register("LabeledBoolbox", &[Text], |args| {
            Ok(Box::new(LabeledBoolbox::new(args.text(0)?)))
        })
        .register("Button", &[Text], |args| Ok(Box::new(Button::new(args.text(0)?))))
        .register("SceneButton", &[Text, Text], |args| {
            Ok(Box::new(Button::scene(args.text(0)?, args.text(1)?)))
        });

    let editor_store = store.clone();
    registry.register("Editor", &[], move |_| {
        Ok(Box::new(Editor::new(editor_store.clone())))
    });
    registry.register("Game", &[], move |_| Ok(Box::new(Game::new(store.clone()))));
}

/// A registry holding only the builtin widgets.
pub fn builtin_registry(store: Arc<dyn WorldStore>) -> WidgetRegistry {
    let mut registry = WidgetRegistry::new();
    register_builtins(&mut registry, store);
    registry
}
