//! Rendering a [`LayoutPlan`] into a sprite sheet.

use image::{RgbaImage, SubImage, imageops};
#[cfg(feature = "rayon")]
use rayon::prelude::*;

use crate::mapping::Mapping;
use crate::planner::{LayoutPlan, PlacedImage};

const BYTES_PER_PIXEL: usize = 4;

/// Pixel buffer under construction. Only [`composite`] writes to it; it is
/// frozen into a [`Sheet`] once every placement has been copied.
#[derive(Debug)]
struct Canvas {
    pixels: RgbaImage,
}

impl Canvas {
    /// Fully transparent canvas.
    fn new(width: u32, height: u32) -> Self {
        Self {
            pixels: RgbaImage::new(width, height),
        }
    }

    /// Copies every placement into the canvas, replacing destination pixels
    /// (alpha included) without blending.
    ///
    /// Each grid row owns a disjoint horizontal band of the buffer, so bands
    /// are filled independently and, with the `rayon` feature, in parallel.
    fn paint(&mut self, plan: &LayoutPlan<'_>) {
        let (width, height) = plan.canvas_size();
        let stride = width as usize * BYTES_PER_PIXEL;
        let band_len = plan.row_pitch() as usize * stride;
        if band_len == 0 || plan.placements().is_empty() {
            return;
        }

        let mut rows: Vec<Vec<&PlacedImage<'_>>> = vec![Vec::new(); plan.grid().rows];
        for placed in plan.placements() {
            debug_assert!(
                placed.rect().fits_within(width, height),
                "{} placed at {:?} outside {width}x{height} canvas",
                placed.id(),
                placed.rect()
            );
            rows[placed.row()].push(placed);
        }

        let buf: &mut [u8] = &mut self.pixels;
        #[cfg(feature = "rayon")]
        buf.par_chunks_mut(band_len)
            .zip(rows.par_iter())
            .for_each(|(band, row)| paint_band(band, stride, row));
        #[cfg(not(feature = "rayon"))]
        buf.chunks_mut(band_len)
            .zip(rows.iter())
            .for_each(|(band, row)| paint_band(band, stride, row));
    }

    fn finish(self) -> RgbaImage {
        self.pixels
    }
}

/// Copies one grid row of images into `band`, which starts at the top of
/// that row.
fn paint_band(band: &mut [u8], stride: usize, row: &[&PlacedImage<'_>]) {
    for placed in row {
        let source = placed.image().pixels();
        let rect = placed.rect();
        let src_stride = rect.width as usize * BYTES_PER_PIXEL;
        if src_stride == 0 {
            continue;
        }
        let x = rect.x as usize * BYTES_PER_PIXEL;
        for (line, src) in source.as_raw().chunks_exact(src_stride).enumerate() {
            let start = line * stride + x;
            band[start..start + src_stride].copy_from_slice(src);
        }
    }
}

/// Finished sprite sheet: the composite raster and where each sprite is.
#[derive(Debug, Clone)]
pub struct Sheet {
    image: RgbaImage,
    mapping: Mapping,
}

impl Sheet {
    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn mapping(&self) -> &Mapping {
        &self.mapping
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// View of the region the mapping records for `id`.
    pub fn sprite(&self, id: &str) -> Option<SubImage<&RgbaImage>> {
        let rect = self.mapping.get(id)?;
        Some(imageops::crop_imm(
            &self.image,
            rect.x,
            rect.y,
            rect.width,
            rect.height,
        ))
    }

    pub fn into_parts(self) -> (RgbaImage, Mapping) {
        (self.image, self.mapping)
    }
}

/// Renders `plan` into a new canvas and records each placement in the
/// mapping, in placement order, so the last image with a repeated identifier
/// is the one the mapping points at.
pub fn composite(plan: &LayoutPlan<'_>) -> Sheet {
    let (width, height) = plan.canvas_size();
    let mut canvas = Canvas::new(width, height);
    canvas.paint(plan);

    let mapping = plan
        .placements()
        .iter()
        .map(|placed| (placed.id(), placed.rect()))
        .collect();

    Sheet {
        image: canvas.finish(),
        mapping,
    }
}
