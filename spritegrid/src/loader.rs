use std::path::Path;

use image::{ImageFormat, ImageReader};
use log::{info, warn};
#[cfg(feature = "rayon")]
use rayon::prelude::*;

use crate::error::{Error, Result};
use crate::ident::IdNaming;
use crate::types::SourceImage;

/// Outcome of decoding a batch of input files.
#[derive(Debug, Default)]
pub struct LoadReport {
    /// Decoded images, in the order their paths were given.
    pub images: Vec<SourceImage>,
    /// Inputs that could not be read or decoded and were left out.
    pub failures: Vec<Error>,
}

impl LoadReport {
    pub fn requested(&self) -> usize {
        self.images.len() + self.failures.len()
    }
}

/// Reads and decodes one file into RGBA8, naming it with `naming`.
///
/// The format is sniffed from the file contents, falling back to the
/// extension when the contents are not recognized.
pub fn load_image(path: &Path, naming: &IdNaming) -> Result<SourceImage> {
    let reader = ImageReader::open(path)
        .and_then(ImageReader::with_guessed_format)
        .map_err(|e| Error::read(path, e))?;
    let format = reader.format();
    let decoded = reader.decode().map_err(|e| Error::decode(path, e))?;

    let id = naming.identify(path);
    info!(
        "{id}: {} {}x{}",
        format_label(format),
        decoded.width(),
        decoded.height()
    );
    Ok(SourceImage::new(id, decoded.into_rgba8()))
}

/// Decodes every path, skipping (and logging) the ones that fail.
///
/// With the `rayon` feature files are decoded in parallel; the report keeps
/// the input order either way.
pub fn load_images<P>(paths: &[P], naming: &IdNaming) -> LoadReport
where
    P: AsRef<Path> + Sync,
{
    #[cfg(feature = "rayon")]
    let results: Vec<Result<SourceImage>> = paths
        .par_iter()
        .map(|p| load_image(p.as_ref(), naming))
        .collect();
    #[cfg(not(feature = "rayon"))]
    let results: Vec<Result<SourceImage>> = paths
        .iter()
        .map(|p| load_image(p.as_ref(), naming))
        .collect();

    let mut report = LoadReport::default();
    for result in results {
        match result {
            Ok(image) => report.images.push(image),
            Err(err) => {
                warn!("{err}");
                report.failures.push(err);
            }
        }
    }

    info!("Read {} of {} images.", report.images.len(), paths.len());
    report
}

fn format_label(format: Option<ImageFormat>) -> String {
    format
        .map(|f| format!("{f:?}").to_ascii_lowercase())
        .unwrap_or_else(|| "unknown".to_string())
}
