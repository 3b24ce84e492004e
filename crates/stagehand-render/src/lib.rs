//! Stagehand Render Library
//!
//! Paint backends for the Stagehand shell. The default backend records
//! widget draw calls into a Vello scene for GPU rendering.

mod renderer;

#[cfg(feature = "vello-renderer")]
mod vello_impl;

pub use renderer::{RenderResult, RendererError};

#[cfg(feature = "vello-renderer")]
pub use vello_impl::VelloPainter;
