// src/canvas.rs

//! The canvas engine: one surface, one render backend, one update cycle.
//!
//! A [`Canvas`] is created in a fixed mode (image or widget), composed via
//! [`Canvas::update`], flushed via [`Canvas::render`], and released via
//! [`Canvas::free`]. A host run loop typically alternates `update` and
//! `render` on a timer tick; both run to completion on the calling thread
//! with no internal locking, so access to one canvas must stay
//! single-writer, single-reader-at-a-time.

use crate::backend::{Backend, HostWidget, ImageBackend, WidgetBackend};
use crate::coord::Coord2;
use crate::error::CanvasError;
use crate::pixel::Pixel;
use crate::surface::Surface;
use log::{debug, info};
use std::path::PathBuf;
use std::rc::Weak;

/// Lifecycle of a canvas. Constructors return an already-configured
/// canvas; the first `update` moves it to `Running`; `free` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CanvasState {
    Configured,
    Running,
    Freed,
}

/// The engine object coordinating a [`Surface`] and a render backend.
#[derive(Debug)]
pub struct Canvas {
    state: CanvasState,
    surface: Option<Surface>,
    backend: Backend,
}

impl Canvas {
    /// Creates an image-mode canvas with a surface of the given dimensions.
    /// The output path starts unset; see [`Canvas::set_output_path`].
    pub fn image(dim: Coord2) -> Result<Self, CanvasError> {
        let surface = Surface::new(dim)?;
        info!("created image-mode canvas at {}", dim);
        Ok(Self {
            state: CanvasState::Configured,
            surface: Some(surface),
            backend: Backend::Image(ImageBackend::new()),
        })
    }

    /// Creates a widget-mode canvas with a surface of the given dimensions.
    /// No host handle is bound yet; see [`Canvas::bind_widget_handle`].
    pub fn widget(dim: Coord2) -> Result<Self, CanvasError> {
        let surface = Surface::new(dim)?;
        info!("created widget-mode canvas at {}", dim);
        Ok(Self {
            state: CanvasState::Configured,
            surface: Some(surface),
            backend: Backend::Widget(WidgetBackend::new()),
        })
    }

    /// Current lifecycle state.
    pub fn state(&self) -> CanvasState {
        self.state
    }

    /// Short mode name, for logs and diagnostics.
    pub fn mode_name(&self) -> &'static str {
        self.backend.mode_name()
    }

    fn live_surface(&self) -> Result<&Surface, CanvasError> {
        self.surface
            .as_ref()
            .ok_or_else(|| CanvasError::InvalidState("canvas has been freed".into()))
    }

    fn live_surface_mut(&mut self) -> Result<&mut Surface, CanvasError> {
        self.surface
            .as_mut()
            .ok_or_else(|| CanvasError::InvalidState("canvas has been freed".into()))
    }

    /// The canvas's surface. Fails with `InvalidState` after [`Canvas::free`].
    pub fn surface(&self) -> Result<&Surface, CanvasError> {
        self.live_surface()
    }

    /// Mutable access to the surface, for hosts composing the pending plane
    /// directly. Fails with `InvalidState` after [`Canvas::free`].
    pub fn surface_mut(&mut self) -> Result<&mut Surface, CanvasError> {
        self.live_surface_mut()
    }

    /// The surface's dimensions. Fails with `InvalidState` after free.
    pub fn dimensions(&self) -> Result<Coord2, CanvasError> {
        Ok(self.live_surface()?.dimensions())
    }

    /// Attaches the host's non-owning drawable handle (widget mode only).
    ///
    /// Fails with `InvalidState` on an image-mode canvas, when a handle is
    /// already bound, or after free.
    pub fn bind_widget_handle(
        &mut self,
        handle: Weak<dyn HostWidget>,
    ) -> Result<(), CanvasError> {
        self.live_surface()?;
        match &mut self.backend {
            Backend::Widget(widget) => {
                widget.bind(handle)?;
                debug!("widget handle bound");
                Ok(())
            }
            Backend::Image(_) => Err(CanvasError::InvalidState(
                "cannot bind a widget handle to an image-mode canvas".into(),
            )),
        }
    }

    /// Sets the destination file for renders (image mode only).
    ///
    /// Fails with `InvalidState` on a widget-mode canvas or after free.
    pub fn set_output_path(&mut self, path: impl Into<PathBuf>) -> Result<(), CanvasError> {
        self.live_surface()?;
        match &mut self.backend {
            Backend::Image(image) => {
                let path = path.into();
                debug!("output path set to {}", path.display());
                image.set_path(path);
                Ok(())
            }
            Backend::Widget(_) => Err(CanvasError::InvalidState(
                "cannot set an output path on a widget-mode canvas".into(),
            )),
        }
    }

    /// Runs one paint pass: enumerates every surface coordinate via
    /// [`Coord2::step`], writes `paint(pos)` into the pending plane, then
    /// commits the frame. The first call moves the canvas to `Running`.
    pub fn update<F>(&mut self, mut paint: F) -> Result<(), CanvasError>
    where
        F: FnMut(Coord2) -> Pixel,
    {
        let surface = self
            .surface
            .as_mut()
            .ok_or_else(|| CanvasError::InvalidState("canvas has been freed".into()))?;

        let bound = surface.dimensions();
        let mut pos = Coord2::zeroed();
        loop {
            surface.set_pending(pos, paint(pos))?;
            if !pos.step(&bound) {
                break;
            }
        }
        surface.commit();

        if self.state == CanvasState::Configured {
            self.state = CanvasState::Running;
            debug!("canvas running");
        }
        Ok(())
    }

    /// Flushes the committed plane to the active backend: writes the image
    /// file in image mode, or requests a repaint of the bound host handle
    /// in widget mode.
    pub fn render(&self) -> Result<(), CanvasError> {
        let surface = self.live_surface()?;
        match &self.backend {
            Backend::Image(image) => image.write(surface),
            Backend::Widget(widget) => widget.repaint(surface),
        }
    }

    /// Releases the surface and clears (never destroys) any bound widget
    /// handle. Idempotent: calling `free` again is a no-op.
    pub fn free(&mut self) {
        if self.state == CanvasState::Freed {
            return;
        }
        self.surface = None;
        if let Backend::Widget(widget) = &mut self.backend {
            widget.clear();
        }
        self.state = CanvasState::Freed;
        debug!("canvas freed");
    }
}
