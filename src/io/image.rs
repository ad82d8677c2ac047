//! PNG loading and saving with path-aware errors

use crate::io::error::{AssetError, Result};
use image::{DynamicImage, ImageError, ImageFormat, ImageReader, RgbaImage};
use std::path::Path;

/// Open an image in whatever format and color type it is stored in
///
/// The format is identified from the file contents, falling back to the
/// extension, so sources without a `.png` suffix still decode.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or decoded
pub fn load_image(path: &Path) -> Result<DynamicImage> {
    let load_error = |source| AssetError::ImageLoad {
        path: path.to_path_buf(),
        source,
    };

    ImageReader::open(path)
        .and_then(ImageReader::with_guessed_format)
        .map_err(|e| load_error(ImageError::IoError(e)))?
        .decode()
        .map_err(load_error)
}

/// Open an image and convert it to 8-bit RGBA
///
/// Palette, grayscale and RGB sources are all expanded; sources without an
/// alpha channel come back fully opaque.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or decoded
pub fn load_rgba(path: &Path) -> Result<RgbaImage> {
    load_image(path).map(|img| img.to_rgba8())
}

/// Encode an image as PNG at `path`, replacing any existing file
///
/// The format is always PNG regardless of the path's extension.
///
/// # Errors
///
/// Returns an error if the file cannot be created or the encoder fails
pub fn save_png(image: &DynamicImage, path: &Path) -> Result<()> {
    image
        .save_with_format(path, ImageFormat::Png)
        .map_err(|source| AssetError::ImageSave {
            path: path.to_path_buf(),
            source,
        })
}
