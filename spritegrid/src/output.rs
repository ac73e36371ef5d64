//! Writing sheet outputs without leaving partial files behind.

use std::ffi::OsString;
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder, RgbaImage};
use log::info;

use crate::error::{Error, Result};
use crate::mapping::Mapping;

/// `<base>.<ext>`, keeping any dots already present in `base`.
pub fn with_suffix(base: &Path, ext: &str) -> PathBuf {
    let mut name = base.as_os_str().to_os_string();
    name.push(".");
    name.push(ext);
    PathBuf::from(name)
}

/// Writes `path` through a temporary sibling that is renamed into place
/// once `fill` succeeds. On failure the temporary file is removed and
/// `path` is left untouched.
pub fn write_atomic<F>(path: &Path, fill: F) -> Result<()>
where
    F: FnOnce(&mut BufWriter<File>) -> Result<()>,
{
    let tmp = temp_sibling(path);
    let result = File::create(&tmp)
        .map_err(|e| Error::write(path, e))
        .and_then(|file| {
            let mut writer = BufWriter::new(file);
            fill(&mut writer)?;
            let file = writer
                .into_inner()
                .map_err(|e| Error::write(path, e.into_error()))?;
            file.sync_all().map_err(|e| Error::write(path, e))
        })
        .and_then(|()| fs::rename(&tmp, path).map_err(|e| Error::write(path, e)));

    if result.is_err() {
        let _ = fs::remove_file(&tmp);
    }
    result
}

/// Encodes `image` as an RGBA PNG at `path`.
///
/// PNG cannot hold a zero-sized image, so an empty sheet is written as a
/// single transparent pixel.
pub fn write_png(path: &Path, image: &RgbaImage) -> Result<()> {
    let placeholder;
    let image = if image.width() == 0 || image.height() == 0 {
        info!("Empty sheet, writing 1x1 transparent placeholder");
        placeholder = RgbaImage::new(1, 1);
        &placeholder
    } else {
        image
    };

    write_atomic(path, |writer| {
        PngEncoder::new(writer)
            .write_image(
                image.as_raw(),
                image.width(),
                image.height(),
                ExtendedColorType::Rgba8,
            )
            .map_err(|source| Error::Encode {
                path: path.to_path_buf(),
                source,
            })
    })?;
    info!("Wrote {}", path.display());
    Ok(())
}

/// Writes the mapping document to `path`.
pub fn write_mapping(path: &Path, mapping: &Mapping) -> Result<()> {
    write_atomic(path, |writer| mapping.write_json(writer))?;
    info!("Wrote {}", path.display());
    Ok(())
}

fn temp_sibling(path: &Path) -> PathBuf {
    let mut name = OsString::from(".");
    name.push(path.file_name().unwrap_or_else(|| path.as_os_str()));
    name.push(format!(".tmp{}", std::process::id()));
    path.with_file_name(name)
}
