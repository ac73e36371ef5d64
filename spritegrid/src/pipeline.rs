use std::path::{Path, PathBuf};

use crate::compositor::{Sheet, composite};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::loader::load_images;
use crate::output::{write_mapping, write_png};
use crate::planner::plan;
use crate::types::SourceImage;

/// Plans and composites already decoded images.
pub fn build_sheet(images: &[SourceImage]) -> Result<Sheet> {
    let plan = plan(images)?;
    Ok(composite(&plan))
}

/// Result of [`pack_files`].
#[derive(Debug)]
pub struct Packed {
    pub sheet: Sheet,
    /// Inputs that were skipped because they could not be read or decoded.
    pub failures: Vec<Error>,
    pub png_path: PathBuf,
    pub json_path: Option<PathBuf>,
}

/// Decodes `paths`, packs what decoded, and writes the sheet (and, when
/// configured, the mapping file). Printing the mapping is left to the caller.
pub fn pack_files<P>(config: &Config, paths: &[P]) -> Result<Packed>
where
    P: AsRef<Path> + Sync,
{
    let report = load_images(paths, &config.naming());
    let sheet = build_sheet(&report.images)?;

    let png_path = config.png_path();
    write_png(&png_path, sheet.image())?;

    let json_path = config.json_path();
    if let Some(path) = &json_path {
        write_mapping(path, sheet.mapping())?;
    }

    Ok(Packed {
        sheet,
        failures: report.failures,
        png_path,
        json_path,
    })
}
