// src/backend/image.rs

//! Image-file render backend.
//!
//! Encodes the committed plane as an uncompressed true-color file in TGA
//! layout: an 18-byte header (image type 2, 32 bits per pixel, top-left
//! origin) followed by row-major, top-to-bottom pixels of 4 bytes each in
//! R,G,B,A order. Every render overwrites the previous file.

use crate::error::CanvasError;
use crate::surface::Surface;
use log::debug;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Length of the fixed-size header preceding the pixel data.
const HEADER_LEN: usize = 18;
/// Uncompressed true-color image type.
const IMAGE_TYPE_TRUECOLOR: u8 = 2;
/// 32 bits per pixel, four 8-bit channels.
const BITS_PER_PIXEL: u8 = 32;
/// Descriptor byte: top-left origin (bit 5), 8 attribute (alpha) bits.
const DESCRIPTOR: u8 = 0b0010_1000;

/// Backend state for image mode: the destination file path.
#[derive(Debug, Default)]
pub struct ImageBackend {
    path: Option<PathBuf>,
}

impl ImageBackend {
    /// A backend with no destination configured yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the destination file path for subsequent writes.
    pub fn set_path(&mut self, path: impl Into<PathBuf>) {
        self.path = Some(path.into());
    }

    /// The configured destination, if any.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Encodes the surface's committed plane and writes it to the
    /// configured path, replacing any previous file.
    ///
    /// Fails with `Io` when no path is configured or the file cannot be
    /// written, and with `InvalidArg` when a dimension exceeds the header's
    /// 16-bit capacity.
    pub fn write(&self, surface: &Surface) -> Result<(), CanvasError> {
        let path = self.path.as_ref().ok_or_else(|| {
            CanvasError::Io(io::Error::other("no output path configured"))
        })?;
        let bytes = encode(surface)?;
        fs::write(path, &bytes)?;
        debug!(
            "wrote {}x{} frame ({} bytes) to {}",
            surface.width(),
            surface.height(),
            bytes.len(),
            path.display()
        );
        Ok(())
    }
}

/// Serializes a surface's committed plane into the file format.
pub fn encode(surface: &Surface) -> Result<Vec<u8>, CanvasError> {
    let (w, h) = (surface.width(), surface.height());
    if w > u16::MAX as usize || h > u16::MAX as usize {
        return Err(CanvasError::InvalidArg(format!(
            "{}x{} exceeds the {} pixel per-axis encoding limit",
            w,
            h,
            u16::MAX
        )));
    }

    let mut out = Vec::with_capacity(HEADER_LEN + surface.cell_count() * 4);
    out.push(0); // id field length
    out.push(0); // no color map
    out.push(IMAGE_TYPE_TRUECOLOR);
    out.extend_from_slice(&[0; 5]); // color map specification, unused
    out.extend_from_slice(&0u16.to_le_bytes()); // x origin
    out.extend_from_slice(&0u16.to_le_bytes()); // y origin
    out.extend_from_slice(&(w as u16).to_le_bytes());
    out.extend_from_slice(&(h as u16).to_le_bytes());
    out.push(BITS_PER_PIXEL);
    out.push(DESCRIPTOR);
    out.extend_from_slice(&surface.committed_rgba());
    Ok(out)
}

/// Parses bytes produced by [`encode`] back into `(width, height, rgba)`.
///
/// Hosts use this to read a rendered file back; the integration tests use
/// it to verify round-trips.
pub fn decode(bytes: &[u8]) -> Result<(u32, u32, Vec<u8>), CanvasError> {
    if bytes.len() < HEADER_LEN {
        return Err(CanvasError::Io(io::Error::other(
            "image truncated before header end",
        )));
    }
    if bytes[2] != IMAGE_TYPE_TRUECOLOR || bytes[16] != BITS_PER_PIXEL {
        return Err(CanvasError::Io(io::Error::other(
            "unsupported image type or depth",
        )));
    }
    let w = u16::from_le_bytes([bytes[12], bytes[13]]) as u32;
    let h = u16::from_le_bytes([bytes[14], bytes[15]]) as u32;
    let expected = HEADER_LEN + (w as usize) * (h as usize) * 4;
    if bytes.len() != expected {
        return Err(CanvasError::Io(io::Error::other(format!(
            "expected {} bytes for {}x{} image, got {}",
            expected,
            w,
            h,
            bytes.len()
        ))));
    }
    Ok((w, h, bytes[HEADER_LEN..].to_vec()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coord::Coord2;
    use crate::pixel::Pixel;
    use test_log::test;

    #[test]
    fn test_write_without_path_is_io_error() {
        let backend = ImageBackend::new();
        assert!(backend.path().is_none());
        let surface = Surface::new(Coord2::new(2, 2)).unwrap();
        assert!(matches!(
            backend.write(&surface),
            Err(CanvasError::Io(_))
        ));
    }

    #[test]
    fn test_encode_header_and_payload() {
        let mut surface = Surface::new(Coord2::new(3, 2)).unwrap();
        surface
            .set_final(Coord2::new(0, 1), Pixel::new(9, 8, 7, 6))
            .unwrap();
        let bytes = encode(&surface).unwrap();
        assert_eq!(bytes.len(), HEADER_LEN + 3 * 2 * 4);
        assert_eq!(bytes[2], IMAGE_TYPE_TRUECOLOR);
        assert_eq!(u16::from_le_bytes([bytes[12], bytes[13]]), 3);
        assert_eq!(u16::from_le_bytes([bytes[14], bytes[15]]), 2);
        // (0, 1) is the first cell of the second row.
        let offset = HEADER_LEN + 3 * 4;
        assert_eq!(&bytes[offset..offset + 4], &[9, 8, 7, 6]);
    }

    #[test]
    fn test_decode_rejects_truncated_payload() {
        let surface = Surface::new(Coord2::new(2, 2)).unwrap();
        let mut bytes = encode(&surface).unwrap();
        bytes.pop();
        assert!(matches!(decode(&bytes), Err(CanvasError::Io(_))));
    }

    #[test]
    fn test_encode_decode_roundtrip() {
        let mut surface = Surface::new(Coord2::new(5, 4)).unwrap();
        surface
            .set_final(Coord2::new(4, 3), Pixel::new(255, 0, 127, 255))
            .unwrap();
        let (w, h, rgba) = decode(&encode(&surface).unwrap()).unwrap();
        assert_eq!((w, h), (5, 4));
        assert_eq!(rgba, surface.committed_rgba());
    }
}
