// src/backend/mod.rs

//! Render backends for the canvas engine.
//!
//! - `image`: persists the committed plane to an uncompressed raster file.
//! - `widget`: forwards the committed plane to a host-supplied drawable
//!   handle for embedding inside a GUI window.
//!
//! The active backend is a tagged variant fixed at canvas creation, so an
//! image-only operation can never be invoked on a widget canvas by mistake.

pub mod image;
pub mod widget;

pub use image::ImageBackend;
pub use widget::{FrameRef, HeadlessWidget, HostWidget, WidgetBackend};

/// The mode-specific payload of a canvas, fixed at creation.
#[derive(Debug)]
pub enum Backend {
    /// Offscreen rendering to an image file.
    Image(ImageBackend),
    /// Rendering into a host-owned drawable region.
    Widget(WidgetBackend),
}

impl Backend {
    /// Short human-readable mode name for logs.
    pub fn mode_name(&self) -> &'static str {
        match self {
            Backend::Image(_) => "image",
            Backend::Widget(_) => "widget",
        }
    }
}
