use image::RgbaImage;
use serde::{Deserialize, Serialize};

/// A decoded input image together with the identifier it is listed under.
#[derive(Debug, Clone)]
pub struct SourceImage {
    id: String,
    pixels: RgbaImage,
}

impl SourceImage {
    pub fn new(id: impl Into<String>, pixels: RgbaImage) -> Self {
        Self {
            id: id.into(),
            pixels,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }
}

/// Axis-aligned rectangle in canvas pixels.
///
/// Serializes as `{"x":..,"y":..,"w":..,"h":..}`, which is the per-entry
/// layout of the mapping document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    #[serde(rename = "w")]
    pub width: u32,
    #[serde(rename = "h")]
    pub height: u32,
}

impl Rect {
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub const fn right(&self) -> u32 {
        self.x + self.width
    }

    pub const fn bottom(&self) -> u32 {
        self.y + self.height
    }

    /// True when the two rectangles share at least one pixel.
    pub const fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    /// True when `self` lies entirely inside a `width` x `height` area at the origin.
    pub const fn fits_within(&self, width: u32, height: u32) -> bool {
        self.right() <= width && self.bottom() <= height
    }
}
