/// Pixel sinks the rasterizer draws into.
///
/// The core never clips: every generated point is handed to the [`Surface`],
/// which decides what to do with coordinates outside its canvas.
use std::collections::BTreeSet;

use crate::error::{Error, Result};
use crate::geometry::{Color, Point2};

/// Anything that can commit a single pixel.
pub trait Surface {
    /// Commit one pixel. Out-of-canvas coordinates must be ignored or clamped
    /// by the implementation.
    fn draw_pixel(&mut self, point: Point2, color: Color);
}

impl<S: Surface + ?Sized> Surface for &mut S {
    fn draw_pixel(&mut self, point: Point2, color: Color) {
        (**self).draw_pixel(point, color);
    }
}

// ============================================================================
// Framebuffer
// ============================================================================

/// RGBA8 pixel buffer in row-major order.
#[derive(Debug, Clone)]
pub struct Framebuffer {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Framebuffer {
    /// Create a framebuffer cleared to opaque black.
    ///
    /// # Errors
    ///
    /// Returns an error if width or height is zero.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions { width, height });
        }

        let mut fb = Self {
            width,
            height,
            pixels: vec![0; width as usize * height as usize * 4],
        };
        fb.clear(Color::BLACK);
        Ok(fb)
    }

    pub const fn width(&self) -> u32 {
        self.width
    }

    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGBA bytes, ready for an `ImageData` blit.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Fill the whole buffer with one color.
    pub fn clear(&mut self, color: Color) {
        for px in self.pixels.chunks_exact_mut(4) {
            px.copy_from_slice(&[color.r, color.g, color.b, 255]);
        }
    }

    /// Read back a pixel, or `None` outside the buffer.
    pub fn pixel(&self, point: Point2) -> Option<Color> {
        let idx = self.index(point)?;
        let px = &self.pixels[idx..idx + 4];
        Some(Color::rgb(px[0], px[1], px[2]))
    }

    #[inline]
    fn index(&self, point: Point2) -> Option<usize> {
        let x = u32::try_from(point.x).ok()?;
        let y = u32::try_from(point.y).ok()?;
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize * self.width as usize + x as usize) * 4)
    }
}

impl Surface for Framebuffer {
    fn draw_pixel(&mut self, point: Point2, color: Color) {
        if let Some(idx) = self.index(point) {
            self.pixels[idx..idx + 4].copy_from_slice(&[color.r, color.g, color.b, 255]);
        }
    }
}

// ============================================================================
// PixelLog
// ============================================================================

/// Records every pixel write, in order. Nothing is discarded.
#[derive(Debug, Clone, Default)]
pub struct PixelLog {
    writes: Vec<(Point2, Color)>,
}

impl PixelLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn writes(&self) -> &[(Point2, Color)] {
        &self.writes
    }

    /// Written points in order, duplicates included.
    pub fn points(&self) -> Vec<Point2> {
        self.writes.iter().map(|(p, _)| *p).collect()
    }

    pub fn unique_points(&self) -> BTreeSet<Point2> {
        self.writes.iter().map(|(p, _)| *p).collect()
    }

    pub fn len(&self) -> usize {
        self.writes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.writes.is_empty()
    }

    pub fn clear(&mut self) {
        self.writes.clear();
    }
}

impl Surface for PixelLog {
    fn draw_pixel(&mut self, point: Point2, color: Color) {
        self.writes.push((point, color));
    }
}
