//! PNG export of rendered identicons

use crate::io::configuration::{FILE_NAME_HEX_WIDTH, OUTPUT_EXTENSION};
use crate::io::error::{IdenticonError, Result};
use image::RgbImage;
use std::path::{Path, PathBuf};

/// File name for a code: zero-padded lowercase hex plus extension
pub fn output_file_name(code: u64) -> String {
    format!("{code:0width$x}.{OUTPUT_EXTENSION}", width = FILE_NAME_HEX_WIDTH)
}

/// Path inside `output_dir` where a code's identicon is written
pub fn output_path(output_dir: &Path, code: u64) -> PathBuf {
    output_dir.join(output_file_name(code))
}

/// Save a rendered identicon as PNG under its code-derived name
///
/// Returns the path that was written.
///
/// # Errors
///
/// Returns an error if:
/// - The output directory cannot be created
/// - The image cannot be encoded or written
pub fn save_identicon(image: &RgbImage, code: u64, output_dir: &Path) -> Result<PathBuf> {
    let path = output_path(output_dir, code);
    export_png(image, &path)?;
    Ok(path)
}

/// Write an RGB raster to a PNG file, creating parent directories
///
/// # Errors
///
/// Returns an error if the parent directory cannot be created or the image
/// cannot be saved to the specified path
pub fn export_png(image: &RgbImage, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| IdenticonError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    image
        .save_with_format(path, image::ImageFormat::Png)
        .map_err(|e| IdenticonError::ImageExport {
            path: path.to_path_buf(),
            source: e,
        })?;

    Ok(())
}
