//! GenBrush: a minimal 2-D raster canvas engine.
//!
//! A caller builds an addressable pixel [`Surface`](surface::Surface),
//! paints into it through [`CoordVector`](coord::CoordVector) addressing,
//! and flushes it through a [`Canvas`](canvas::Canvas) to either a
//! persisted image file or a live region embedded in a host GUI window.

/// Render backends (image file, host widget).
pub mod backend;
/// The canvas engine and its lifecycle.
pub mod canvas;
/// Host configuration loading.
pub mod config;
/// Fixed-rank coordinate vectors and grid enumeration.
pub mod coord;
/// Engine error types.
pub mod error;
/// RGBA pixel values.
pub mod pixel;
/// The pending/final dual-plane pixel buffer.
pub mod surface;
