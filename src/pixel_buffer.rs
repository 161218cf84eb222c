use alloc::vec;
use alloc::vec::Vec;

use crate::error::{Error, Result};
use crate::point2::PixelPoint;

/// 8-bit per channel RGB color
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    pub const RED: Rgb = Rgb::new(255, 0, 0);
    pub const GREEN: Rgb = Rgb::new(0, 255, 0);
    pub const BLUE: Rgb = Rgb::new(0, 0, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb { r, g, b }
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Rgb { r, g, b }
    }
}

/// Row-major grid of RGB pixels. Coordinate (0, 0) is the top left corner,
/// x grows to the right and y grows downwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: usize,
    height: usize,
    pixels: Vec<Rgb>,
}

/// A captured camera frame is just a pixel buffer the rasterizer can draw into.
pub type Frame = PixelBuffer;

impl PixelBuffer {
    /// Creates a `width` x `height` buffer with every pixel set to black.
    pub fn new(width: usize, height: usize) -> Self {
        Self::filled(width, height, Rgb::BLACK)
    }

    pub fn filled(width: usize, height: usize, color: Rgb) -> Self {
        PixelBuffer {
            width,
            height,
            pixels: vec![color; width * height],
        }
    }

    /// Wraps existing row-major pixel data.
    pub fn from_pixels(width: usize, height: usize, pixels: Vec<Rgb>) -> Result<Self> {
        let expected = width * height;
        if pixels.len() != expected {
            return Err(Error::BufferSizeMismatch {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(PixelBuffer {
            width,
            height,
            pixels,
        })
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Whether `p` addresses a pixel inside of the buffer.
    #[inline]
    pub fn contains(&self, p: PixelPoint) -> bool {
        self.index_of(p).is_some()
    }

    #[inline]
    fn index_of(&self, p: PixelPoint) -> Option<usize> {
        let x = usize::try_from(p.x).ok()?;
        let y = usize::try_from(p.y).ok()?;
        if x < self.width && y < self.height {
            Some(y * self.width + x)
        } else {
            None
        }
    }

    pub fn get(&self, x: usize, y: usize) -> Option<Rgb> {
        if x < self.width && y < self.height {
            Some(self.pixels[y * self.width + x])
        } else {
            None
        }
    }

    /// Color at pixel coordinate `p`, `None` outside of the buffer.
    pub fn pixel(&self, p: PixelPoint) -> Option<Rgb> {
        self.index_of(p).map(|i| self.pixels[i])
    }

    /// Overwrites the pixel at `p` with `color`.
    pub fn set(&mut self, p: PixelPoint, color: Rgb) -> Result<()> {
        match self.index_of(p) {
            Some(i) => {
                self.pixels[i] = color;
                Ok(())
            }
            None => Err(self.out_of_bounds(p)),
        }
    }

    /// Writes `color` at `p` if it lies inside of the buffer, returns whether it did.
    pub(crate) fn set_if_inside(&mut self, p: PixelPoint, color: Rgb) -> bool {
        match self.index_of(p) {
            Some(i) => {
                self.pixels[i] = color;
                true
            }
            None => false,
        }
    }

    pub(crate) fn out_of_bounds(&self, p: PixelPoint) -> Error {
        Error::OutOfBoundsCoordinate {
            x: p.x,
            y: p.y,
            width: self.width,
            height: self.height,
        }
    }

    pub fn fill(&mut self, color: Rgb) {
        self.pixels.fill(color);
    }

    /// Row-major pixel slice
    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }

    /// Packed 8-bit RGB bytes, three per pixel in row-major order.
    pub fn to_rgb_bytes(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(|p| [p.r, p.g, p.b]).collect()
    }
}
