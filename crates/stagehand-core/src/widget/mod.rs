//! Widget protocol.
//!
//! Every widget is renderable: it is updated once per frame with its
//! position and the width available to it. A widget may additionally
//! declare two capabilities:
//!
//! - [`Awake`]: notified once each time its scene is entered
//! - [`FormField`]: exposes a named value other scenes can read
//!
//! Capabilities are declared explicitly through [`Widget::as_awake`] and
//! [`Widget::as_form`] rather than discovered at runtime.

mod form;

pub use form::{ColorValue, FormField, FormKind, FormValue};

use kurbo::Point;
use uuid::Uuid;

use crate::error::RuntimeError;
use crate::frame::Frame;
use crate::scene::SceneView;

/// Identity used for pointer ownership.
pub type WidgetId = Uuid;

/// Allocate a fresh widget identity.
pub fn new_widget_id() -> WidgetId {
    Uuid::new_v4()
}

/// A unit of the scene graph.
pub trait Widget {
    /// Per-frame update: read input, register pointer candidacy, draw.
    fn update(&mut self, position: Point, width: f64, frame: &mut Frame<'_>);

    /// The widget's scene-entry capability, if it has one.
    fn as_awake(&mut self) -> Option<&mut dyn Awake> {
        None
    }

    /// The widget's form-field capability, if it has one.
    fn as_form(&self) -> Option<&dyn FormField> {
        None
    }
}

/// Scene-entry notification.
pub trait Awake {
    /// Called when the owning scene becomes active, with the scene that was
    /// active immediately before.
    fn awake(&mut self, previous: &dyn SceneView) -> Result<(), RuntimeError>;
}
