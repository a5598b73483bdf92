// src/backend/widget.rs

//! Widget render backend: the bridge to a hosting GUI.
//!
//! The engine never owns a drawable region. The host implements
//! [`HostWidget`] for whatever it draws with, keeps the owning `Rc`, and
//! binds a `Weak` handle to the canvas. On render the engine upgrades the
//! handle and hands over a borrowed view of the committed plane; copying
//! those pixels into the display is the host's business. Dropping the
//! host's `Rc` invalidates the binding without any engine involvement.

use crate::error::CanvasError;
use crate::pixel::Pixel;
use crate::surface::Surface;
use log::trace;
use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// A borrowed view of one committed frame, exactly as of the most recent
/// commit.
#[derive(Debug, Clone, Copy)]
pub struct FrameRef<'a> {
    /// Frame width in pixels.
    pub width: usize,
    /// Frame height in pixels.
    pub height: usize,
    /// Row-major committed plane.
    pub pixels: &'a [Pixel],
}

impl FrameRef<'_> {
    /// Serializes the frame as row-major, top-to-bottom R,G,B,A bytes.
    pub fn to_rgba_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 4);
        for px in self.pixels {
            bytes.extend_from_slice(&px.to_bytes());
        }
        bytes
    }
}

/// The capability a hosting windowing layer supplies: repaint a drawable
/// region from a committed frame.
///
/// `repaint` is fire-and-forget from the engine's point of view. The host
/// must make the frame's pixel data visible in its own display surface
/// before returning, or copy the data out if it defers the blit.
pub trait HostWidget {
    fn repaint(&self, frame: FrameRef<'_>);
}

/// Backend state for widget mode: a non-owning reference to the host's
/// drawable handle.
#[derive(Debug, Default)]
pub struct WidgetBackend {
    handle: Option<Weak<dyn HostWidget>>,
}

impl WidgetBackend {
    /// A backend with no handle bound yet.
    pub fn new() -> Self {
        Self { handle: None }
    }

    /// Attaches the host's handle. Fails with `InvalidState` if a handle is
    /// already bound.
    pub fn bind(&mut self, handle: Weak<dyn HostWidget>) -> Result<(), CanvasError> {
        if self.handle.is_some() {
            return Err(CanvasError::InvalidState(
                "a widget handle is already bound".into(),
            ));
        }
        self.handle = Some(handle);
        Ok(())
    }

    /// Whether a handle is currently bound (it may still be dead).
    pub fn is_bound(&self) -> bool {
        self.handle.is_some()
    }

    /// Drops the non-owning reference. The host's widget itself is
    /// untouched.
    pub fn clear(&mut self) {
        self.handle = None;
    }

    /// Requests a repaint of the bound handle from the surface's committed
    /// plane.
    ///
    /// Fails with `InvalidState` if no handle is bound or the host has
    /// already dropped the widget behind the handle.
    pub fn repaint(&self, surface: &Surface) -> Result<(), CanvasError> {
        let weak = self.handle.as_ref().ok_or_else(|| {
            CanvasError::InvalidState("no widget handle bound".into())
        })?;
        let host = weak.upgrade().ok_or_else(|| {
            CanvasError::InvalidState("bound widget handle is no longer alive".into())
        })?;
        trace!(
            "repaint request: {}x{} committed plane",
            surface.width(),
            surface.height()
        );
        host.repaint(FrameRef {
            width: surface.width(),
            height: surface.height(),
            pixels: surface.committed_plane(),
        });
        Ok(())
    }
}

/// A host widget that records every frame it is asked to paint.
///
/// Stands in for a real toolkit widget in tests and headless hosts, the way
/// a headless display driver stands in for a real window.
#[derive(Debug, Default)]
pub struct HeadlessWidget {
    frames: RefCell<Vec<Vec<u8>>>,
}

impl HeadlessWidget {
    /// A fresh recorder, owned by the host via `Rc`.
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    /// Number of repaint requests observed so far.
    pub fn frame_count(&self) -> usize {
        self.frames.borrow().len()
    }

    /// The most recently painted frame as RGBA bytes.
    pub fn last_frame(&self) -> Option<Vec<u8>> {
        self.frames.borrow().last().cloned()
    }
}

impl HostWidget for HeadlessWidget {
    fn repaint(&self, frame: FrameRef<'_>) {
        trace!("headless widget repaint: {}x{}", frame.width, frame.height);
        self.frames.borrow_mut().push(frame.to_rgba_bytes());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coord::Coord2;
    use crate::pixel::Pixel;
    use test_log::test;

    #[test]
    fn test_repaint_unbound_is_invalid_state() {
        let backend = WidgetBackend::new();
        let surface = Surface::new(Coord2::new(2, 2)).unwrap();
        assert!(matches!(
            backend.repaint(&surface),
            Err(CanvasError::InvalidState(_))
        ));
    }

    #[test]
    fn test_bind_twice_is_invalid_state() {
        let mut backend = WidgetBackend::new();
        assert!(!backend.is_bound());
        let widget = HeadlessWidget::new();
        let handle: Weak<dyn HostWidget> = Rc::<HeadlessWidget>::downgrade(&widget);
        backend.bind(handle.clone()).unwrap();
        assert!(backend.is_bound());
        assert!(matches!(
            backend.bind(handle),
            Err(CanvasError::InvalidState(_))
        ));
    }

    #[test]
    fn test_repaint_delivers_committed_plane() {
        let mut backend = WidgetBackend::new();
        let widget = HeadlessWidget::new();
        backend.bind(Rc::<HeadlessWidget>::downgrade(&widget)).unwrap();

        let mut surface = Surface::new(Coord2::new(2, 1)).unwrap();
        surface
            .set_final(Coord2::new(1, 0), Pixel::new(5, 6, 7, 8))
            .unwrap();
        backend.repaint(&surface).unwrap();

        assert_eq!(widget.frame_count(), 1);
        assert_eq!(widget.last_frame().unwrap(), vec![0, 0, 0, 0, 5, 6, 7, 8]);
    }

    #[test]
    fn test_repaint_after_host_drop_is_invalid_state() {
        let mut backend = WidgetBackend::new();
        let widget = HeadlessWidget::new();
        backend.bind(Rc::<HeadlessWidget>::downgrade(&widget)).unwrap();
        drop(widget);

        let surface = Surface::new(Coord2::new(1, 1)).unwrap();
        assert!(matches!(
            backend.repaint(&surface),
            Err(CanvasError::InvalidState(_))
        ));
    }
}
