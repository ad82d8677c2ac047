//! Folder-wide transparency pass with per-file failure isolation
//!
//! Every `*.png` directly inside the folder is opened, filtered and written
//! back to the same path. A file that fails is logged and skipped; the run
//! itself never fails.

use crate::filter::make_transparent;
use crate::io::configuration::{DEFAULT_BADGE_FOLDER, PNG_EXTENSION, WHITE_THRESHOLD};
use crate::io::error::{AssetError, Result, invalid_parameter};
use crate::io::image::{load_rgba, save_png};
use crate::io::progress::ProgressManager;
use image::DynamicImage;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// Settings for one transparency pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BadgeConfig {
    /// Folder whose PNG files are rewritten
    pub folder: PathBuf,
    /// Channel value red, green and blue must all exceed
    pub threshold: u8,
}

impl Default for BadgeConfig {
    fn default() -> Self {
        Self {
            folder: PathBuf::from(DEFAULT_BADGE_FOLDER),
            threshold: WHITE_THRESHOLD,
        }
    }
}

impl BadgeConfig {
    /// Reject settings under which no pixel could ever match
    ///
    /// # Errors
    ///
    /// Returns an error if the threshold is 255
    pub fn validate(&self) -> Result<()> {
        if self.threshold == u8::MAX {
            return Err(invalid_parameter(
                "threshold",
                &self.threshold,
                &"no channel value can exceed 255",
            ));
        }
        Ok(())
    }
}

/// Outcome of a transparency pass
#[derive(Debug, Default)]
pub struct BatchReport {
    /// Files rewritten successfully, in processing order
    pub processed: Vec<PathBuf>,
    /// Files that failed, with the error that stopped them
    pub failed: Vec<(PathBuf, AssetError)>,
}

impl BatchReport {
    /// Total number of files attempted
    pub fn attempted(&self) -> usize {
        self.processed.len() + self.failed.len()
    }

    /// Whether every attempted file succeeded
    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Check whether a file name matches `*.png`
///
/// Like shell globbing, a leading `.` is never matched by `*`.
/// Names are compared as raw `OsStr`, so names that are not valid UTF-8
/// still match.
pub fn matches_png_glob(path: &Path) -> bool {
    let Some(name) = path.file_name() else {
        return false;
    };
    name.as_encoded_bytes().first() != Some(&b'.')
        && path.extension() == Some(OsStr::new(PNG_EXTENSION))
}

/// List `*.png` entries directly inside `folder`, sorted by path
///
/// A folder that is missing or cannot be read yields an empty listing.
pub fn collect_png_files(folder: &Path) -> Vec<PathBuf> {
    let entries = match std::fs::read_dir(folder) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::warn!("Cannot read folder {}: {e}", folder.display());
            return Vec::new();
        }
    };

    let mut files: Vec<PathBuf> = entries
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry.path()),
            Err(e) => {
                tracing::warn!("Skipping unreadable entry in {}: {e}", folder.display());
                None
            }
        })
        .filter(|path| matches_png_glob(path))
        .collect();
    files.sort();
    files
}

/// Rewrite one badge in place and return how many pixels changed
///
/// # Errors
///
/// Returns an error if the file cannot be decoded or written back
pub fn process_badge(path: &Path, threshold: u8) -> Result<usize> {
    let mut rgba = load_rgba(path)?;
    let rewritten = make_transparent(&mut rgba, threshold);
    save_png(&DynamicImage::ImageRgba8(rgba), path)?;
    Ok(rewritten)
}

/// Runs the transparency pass over a folder
pub struct BadgeProcessor {
    config: BadgeConfig,
    progress_manager: Option<ProgressManager>,
}

impl BadgeProcessor {
    /// Create a processor, optionally with a progress bar
    pub fn new(config: BadgeConfig, show_progress: bool) -> Self {
        let progress_manager = show_progress.then(ProgressManager::new);
        Self {
            config,
            progress_manager,
        }
    }

    /// Process every matching file, logging each outcome
    pub fn process(&self) -> BatchReport {
        let files = collect_png_files(&self.config.folder);
        let mut report = BatchReport::default();

        if files.is_empty() {
            tracing::debug!("No PNG files in {}", self.config.folder.display());
            return report;
        }

        if let Some(ref pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        for file in files {
            if let Some(ref pm) = self.progress_manager {
                pm.start_file(&file);
            }

            let outcome = process_badge(&file, self.config.threshold);
            self.log(|| match &outcome {
                Ok(rewritten) => {
                    tracing::info!("Processed {}", file.display());
                    tracing::debug!("{rewritten} pixels made transparent in {}", file.display());
                }
                Err(e) => tracing::error!("Failed {}: {e}", file.display()),
            });

            match outcome {
                Ok(_) => report.processed.push(file),
                Err(e) => report.failed.push((file, e)),
            }

            if let Some(ref pm) = self.progress_manager {
                pm.complete_file();
            }
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        tracing::debug!(
            "{} of {} files processed, {} failed",
            report.processed.len(),
            report.attempted(),
            report.failed.len()
        );

        report
    }

    fn log<F: FnOnce()>(&self, f: F) {
        match self.progress_manager {
            Some(ref pm) => pm.suspend(f),
            None => f(),
        }
    }
}
