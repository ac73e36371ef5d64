//! Uniform-grid layout planning.
//!
//! Every image gets a cell sized to the largest width and the largest height
//! in the set. Cells are filled in row-major order after sorting the images
//! by `(height, width, id)`, which makes the output depend only on the input
//! set and not on the order files were listed or decoded in.

use log::info;

use crate::error::{Error, Result};
use crate::types::{Rect, SourceImage};

/// Pixels left empty between neighbouring cells.
pub const PADDING: u32 = 2;

/// Column and row count of the placement grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Grid {
    pub columns: usize,
    pub rows: usize,
}

impl Grid {
    /// Grid for `count` images: `floor(sqrt(count)) + 1` columns and as many
    /// rows as needed to hold every image (at least one).
    ///
    /// # Panics
    ///
    /// Panics if the grid cannot hold `count` cells, which would be a bug in
    /// the formula rather than a property of the input.
    pub fn for_count(count: usize) -> Self {
        let columns = count.isqrt() + 1;
        let rows = count.div_ceil(columns).max(1);
        let grid = Self { columns, rows };
        assert!(
            grid.cells() >= count,
            "{columns}x{rows} grid cannot hold {count} images"
        );
        grid
    }

    pub fn cells(&self) -> usize {
        self.columns * self.rows
    }
}

/// An image assigned to a grid cell.
#[derive(Debug, Clone, Copy)]
pub struct PlacedImage<'a> {
    image: &'a SourceImage,
    row: usize,
    column: usize,
    rect: Rect,
}

impl<'a> PlacedImage<'a> {
    pub fn image(&self) -> &'a SourceImage {
        self.image
    }

    pub fn id(&self) -> &'a str {
        self.image.id()
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn column(&self) -> usize {
        self.column
    }

    /// Where the image lands on the canvas; its size is the image's own size.
    pub fn rect(&self) -> Rect {
        self.rect
    }
}

/// Grid geometry plus the placement of every image, in placement order.
#[derive(Debug, Clone)]
pub struct LayoutPlan<'a> {
    grid: Grid,
    cell_width: u32,
    cell_height: u32,
    padding: u32,
    canvas_width: u32,
    canvas_height: u32,
    placements: Vec<PlacedImage<'a>>,
}

impl<'a> LayoutPlan<'a> {
    pub fn grid(&self) -> Grid {
        self.grid
    }

    pub fn cell_size(&self) -> (u32, u32) {
        (self.cell_width, self.cell_height)
    }

    pub fn padding(&self) -> u32 {
        self.padding
    }

    pub fn canvas_size(&self) -> (u32, u32) {
        (self.canvas_width, self.canvas_height)
    }

    /// Placements in processing order (row-major over the sorted images).
    pub fn placements(&self) -> &[PlacedImage<'a>] {
        &self.placements
    }

    /// Vertical distance between the tops of two consecutive grid rows.
    pub(crate) fn row_pitch(&self) -> u32 {
        self.cell_height + self.padding
    }
}

/// Orders images by ascending height, then width, then identifier.
///
/// Images equal in all three keys keep their relative input order.
pub fn placement_order(images: &[SourceImage]) -> Vec<&SourceImage> {
    let mut order: Vec<&SourceImage> = images.iter().collect();
    order.sort_by(|a, b| {
        (a.height(), a.width(), a.id()).cmp(&(b.height(), b.width(), b.id()))
    });
    order
}

/// Lays `images` out on a uniform grid.
///
/// An empty input yields a 1x1 grid of empty cells and a 0x0 canvas. Fails
/// only when the canvas would not fit in `u32` pixel coordinates.
pub fn plan(images: &[SourceImage]) -> Result<LayoutPlan<'_>> {
    let grid = Grid::for_count(images.len());
    let cell_width = images.iter().map(SourceImage::width).max().unwrap_or(0);
    let cell_height = images.iter().map(SourceImage::height).max().unwrap_or(0);

    let width = span(grid.columns, cell_width, PADDING);
    let height = span(grid.rows, cell_height, PADDING);
    let (canvas_width, canvas_height) = match (u32::try_from(width), u32::try_from(height)) {
        (Ok(w), Ok(h)) => (w, h),
        _ => return Err(Error::CanvasTooLarge { width, height }),
    };

    info!(
        "Generating {}x{} grid of {}x{} with {} padding = {}x{}",
        grid.columns, grid.rows, cell_width, cell_height, PADDING, canvas_width, canvas_height
    );

    let column_pitch = u64::from(cell_width + PADDING);
    let row_pitch = u64::from(cell_height + PADDING);
    let placements = placement_order(images)
        .into_iter()
        .enumerate()
        .map(|(i, image)| {
            let (row, column) = (i / grid.columns, i % grid.columns);
            // Offsets are bounded by the canvas size, which fits in u32.
            let x = (column as u64 * column_pitch) as u32;
            let y = (row as u64 * row_pitch) as u32;
            PlacedImage {
                image,
                row,
                column,
                rect: Rect::new(x, y, image.width(), image.height()),
            }
        })
        .collect();

    Ok(LayoutPlan {
        grid,
        cell_width,
        cell_height,
        padding: PADDING,
        canvas_width,
        canvas_height,
        placements,
    })
}

/// Length of `count` cells of `cell` pixels with `padding` between them.
fn span(count: usize, cell: u32, padding: u32) -> u64 {
    match count {
        0 => 0,
        n => n as u64 * u64::from(cell) + (n as u64 - 1) * u64::from(padding),
    }
}
