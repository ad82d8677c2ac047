//! Command-line interfaces of the two binaries

use crate::batch::{AvatarConfig, BadgeConfig};
use crate::io::configuration::{
    DEFAULT_AVATAR_OUTPUT_DIR, DEFAULT_AVATAR_SOURCE, DEFAULT_BADGE_FOLDER, WHITE_THRESHOLD,
};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "make-transparent")]
#[command(
    author,
    version,
    about = "Turn near-white pixels of every PNG in a folder transparent, in place"
)]
/// Command-line arguments for the transparency pass
pub struct TransparencyCli {
    /// Folder containing the PNG files to rewrite
    #[arg(value_name = "FOLDER", default_value = DEFAULT_BADGE_FOLDER)]
    pub folder: PathBuf,

    /// Red, green and blue must all exceed this value for a pixel to be cleared
    #[arg(short, long, default_value_t = WHITE_THRESHOLD)]
    pub threshold: u8,

    /// Suppress the progress bar
    #[arg(short, long)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl TransparencyCli {
    /// Check if the progress bar should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Settings for the transparency pass
    pub fn config(&self) -> BadgeConfig {
        BadgeConfig {
            folder: self.folder.clone(),
            threshold: self.threshold,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "split-avatars")]
#[command(
    author,
    version,
    about = "Split a composite image into four quadrant avatars"
)]
/// Command-line arguments for the quadrant splitter
pub struct SplitCli {
    /// Composite image to split
    #[arg(short, long, value_name = "PATH", default_value = DEFAULT_AVATAR_SOURCE)]
    pub source: PathBuf,

    /// Directory to write avatar_1.png through avatar_4.png into
    #[arg(short, long, value_name = "DIR", default_value = DEFAULT_AVATAR_OUTPUT_DIR)]
    pub output_dir: PathBuf,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl SplitCli {
    /// Settings for the splitter
    pub fn config(&self) -> AvatarConfig {
        AvatarConfig {
            source_path: self.source.clone(),
            output_dir: self.output_dir.clone(),
        }
    }
}
