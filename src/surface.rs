// src/surface.rs

//! The owned pixel buffer and its pending/final planes.
//!
//! A [`Surface`] stores two contiguous planes of [`Pixel`] cells addressed
//! by [`Coord2`]: the *pending* plane that drawing code composes into, and
//! the *final* (committed) plane that renderers read from. [`Surface::commit`]
//! publishes pending over final in one pass, so a renderer never observes a
//! partially drawn frame. This is the same discipline a back-buffer provides
//! in double-buffered rendering.

use crate::coord::Coord2;
use crate::error::CanvasError;
use crate::pixel::Pixel;
use log::trace;

/// A 2-D buffer of pixels with a pending draw plane and a committed
/// final plane. Buffer size is fixed at creation.
#[derive(Debug, Clone)]
pub struct Surface {
    width: usize,
    height: usize,
    pending: Vec<Pixel>,
    committed: Vec<Pixel>,
}

impl Surface {
    /// Allocates a `dim.x() * dim.y()` surface with every cell of both
    /// planes set to fully transparent black.
    ///
    /// Fails with `InvalidArg` if either component of `dim` is not positive.
    pub fn new(dim: Coord2) -> Result<Self, CanvasError> {
        let (w, h) = (dim.x(), dim.y());
        if w <= 0 || h <= 0 {
            return Err(CanvasError::InvalidArg(format!(
                "surface dimensions must be positive, got {}x{}",
                w, h
            )));
        }
        let cells = (w as usize) * (h as usize);
        trace!("allocating {}x{} surface ({} cells)", w, h, cells);
        Ok(Self {
            width: w as usize,
            height: h as usize,
            pending: vec![Pixel::TRANSPARENT; cells],
            committed: vec![Pixel::TRANSPARENT; cells],
        })
    }

    /// Width in cells.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height in cells.
    pub fn height(&self) -> usize {
        self.height
    }

    /// The surface's dimensions as a coordinate vector.
    pub fn dimensions(&self) -> Coord2 {
        Coord2::new(self.width as i64, self.height as i64)
    }

    /// Total number of cells per plane.
    pub fn cell_count(&self) -> usize {
        self.width * self.height
    }

    /// Row-major cell index for `pos`, bounds-checked against the half-open
    /// box `[0, dim)`.
    fn index(&self, pos: Coord2) -> Result<usize, CanvasError> {
        let (x, y) = (pos.x(), pos.y());
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return Err(CanvasError::OutOfRange(format!(
                "coordinate {} outside {}x{} surface",
                pos, self.width, self.height
            )));
        }
        Ok(y as usize * self.width + x as usize)
    }

    /// Writes into the pending (draw) plane.
    pub fn set_pending(&mut self, pos: Coord2, pixel: Pixel) -> Result<(), CanvasError> {
        let idx = self.index(pos)?;
        self.pending[idx] = pixel;
        Ok(())
    }

    /// Reads from the pending (draw) plane.
    pub fn get_pending(&self, pos: Coord2) -> Result<Pixel, CanvasError> {
        Ok(self.pending[self.index(pos)?])
    }

    /// Writes directly into the committed (final) plane, bypassing the
    /// pending stage.
    pub fn set_final(&mut self, pos: Coord2, pixel: Pixel) -> Result<(), CanvasError> {
        let idx = self.index(pos)?;
        self.committed[idx] = pixel;
        Ok(())
    }

    /// Reads from the committed (final) plane.
    pub fn get_final(&self, pos: Coord2) -> Result<Pixel, CanvasError> {
        Ok(self.committed[self.index(pos)?])
    }

    /// Publishes the pending plane over the final plane in a single pass.
    ///
    /// From a single-threaded caller's point of view this is atomic: the
    /// final plane holds either the previous frame or the new one, never a
    /// mix. The pending plane keeps its contents, so the next frame can be
    /// composed incrementally on top of the last.
    pub fn commit(&mut self) {
        self.committed.copy_from_slice(&self.pending);
        trace!("committed {}x{} pending plane", self.width, self.height);
    }

    /// The committed plane as a flat row-major slice.
    pub fn committed_plane(&self) -> &[Pixel] {
        &self.committed
    }

    /// The committed plane serialized as row-major, top-to-bottom R,G,B,A
    /// bytes, the layout both render backends consume.
    pub fn committed_rgba(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.committed.len() * 4);
        for px in &self.committed {
            bytes.extend_from_slice(&px.to_bytes());
        }
        bytes
    }
}
