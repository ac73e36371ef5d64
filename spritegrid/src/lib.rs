//! Uniform-grid sprite sheet packing.
//!
//! Images are laid out on a grid of equally sized cells (as large as the
//! widest and the tallest input), composited into one RGBA canvas, and
//! described by a [`Mapping`] from identifier to rectangle:
//! - [`plan`] computes the grid, the placement order, and every offset.
//! - [`composite`] copies pixels into a fresh canvas and yields a [`Sheet`].
//! - [`load_images`] and [`IdNaming`] turn file paths into named
//!   [`SourceImage`]s, skipping files that fail to decode.
//! - [`write_png`] and [`write_mapping`] write outputs atomically.
//!
//! [`pack_files`] runs the whole pipeline for a [`Config`]; the
//! `spritegrid-pack` CLI is a thin wrapper around it.

mod compositor;
mod config;
mod error;
mod ident;
mod loader;
mod mapping;
mod output;
mod pipeline;
mod planner;
mod types;

pub use compositor::{Sheet, composite};
pub use config::{Config, DEFAULT_OUTPUT};
pub use error::{Error, Result};
pub use ident::IdNaming;
pub use loader::{LoadReport, load_image, load_images};
pub use mapping::Mapping;
pub use output::{with_suffix, write_atomic, write_mapping, write_png};
pub use pipeline::{Packed, build_sheet, pack_files};
pub use planner::{Grid, LayoutPlan, PADDING, PlacedImage, placement_order, plan};
pub use types::{Rect, SourceImage};
