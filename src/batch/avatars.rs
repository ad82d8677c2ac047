//! Splitting a composite image into four numbered avatar files
//!
//! Unlike the badge pass there is no per-file isolation: the first error
//! ends the run and is returned to the caller.

use crate::io::configuration::{
    AVATAR_FILE_PREFIX, DEFAULT_AVATAR_OUTPUT_DIR, DEFAULT_AVATAR_SOURCE, MIN_SPLIT_DIMENSION,
    PNG_EXTENSION,
};
use crate::io::error::{AssetError, Result};
use crate::io::image::{load_image, save_png};
use crate::split::{Quadrant, split_into_quadrants};
use image::GenericImageView;
use std::path::{Path, PathBuf};

/// Where the composite comes from and where the avatars go
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvatarConfig {
    /// Composite image to split
    pub source_path: PathBuf,
    /// Directory the avatars are written into, created if absent
    pub output_dir: PathBuf,
}

impl Default for AvatarConfig {
    fn default() -> Self {
        Self {
            source_path: PathBuf::from(DEFAULT_AVATAR_SOURCE),
            output_dir: PathBuf::from(DEFAULT_AVATAR_OUTPUT_DIR),
        }
    }
}

/// Output path of the avatar cut from `quadrant`
pub fn avatar_path(output_dir: &Path, quadrant: Quadrant) -> PathBuf {
    output_dir.join(format!(
        "{AVATAR_FILE_PREFIX}{}.{PNG_EXTENSION}",
        quadrant.index()
    ))
}

/// Splits one composite image into `avatar_1.png` through `avatar_4.png`
pub struct AvatarSplitter {
    config: AvatarConfig,
}

impl AvatarSplitter {
    /// Create a splitter for the given paths
    pub const fn new(config: AvatarConfig) -> Self {
        Self { config }
    }

    /// Create the output directory, crop the source and save each quadrant
    ///
    /// Existing avatars are overwritten. Returns the written paths in
    /// quadrant order.
    ///
    /// # Errors
    ///
    /// Returns the first failure among:
    /// - The output directory cannot be created
    /// - The source image cannot be opened or decoded
    /// - The source is smaller than 2x2 pixels
    /// - An avatar cannot be saved
    pub fn split(&self) -> Result<Vec<PathBuf>> {
        let AvatarConfig {
            source_path,
            output_dir,
        } = &self.config;

        std::fs::create_dir_all(output_dir).map_err(|source| AssetError::FileSystem {
            path: output_dir.clone(),
            operation: "create directory",
            source,
        })?;

        let source = load_image(source_path)?;
        let (width, height) = source.dimensions();
        if width < MIN_SPLIT_DIMENSION || height < MIN_SPLIT_DIMENSION {
            return Err(AssetError::InvalidSourceData {
                path: source_path.clone(),
                reason: format!(
                    "{width}x{height} is too small to split into quadrants \
                     (minimum {MIN_SPLIT_DIMENSION}x{MIN_SPLIT_DIMENSION})"
                ),
            });
        }
        tracing::debug!("Splitting {} ({width}x{height})", source_path.display());

        let mut written = Vec::with_capacity(Quadrant::ALL.len());
        for (quadrant, avatar) in split_into_quadrants(&source) {
            let output_path = avatar_path(output_dir, quadrant);
            save_png(&avatar, &output_path)?;
            tracing::info!("Saved {}", output_path.display());
            written.push(output_path);
        }

        Ok(written)
    }
}
