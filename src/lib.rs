//! Batch preparation of PNG assets
//!
//! Two independent tools share this library: a transparency pass that clears
//! near-white pixels from every badge in a folder, and a splitter that cuts
//! one composite image into four quadrant avatars.

#![forbid(unsafe_code)]

/// Folder and file level runners for both tools
pub mod batch;
/// Per-pixel transparency rules
pub mod filter;
/// Input/output operations, configuration and error handling
pub mod io;
/// 2x2 grid geometry and cropping
pub mod split;

pub use io::error::{AssetError, Result};
