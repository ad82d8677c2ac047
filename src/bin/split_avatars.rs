//! Splits one composite image into four quadrant avatars

use clap::Parser;
use pngprep::batch::AvatarSplitter;
use pngprep::io::cli::SplitCli;
use pngprep::io::logging::init_logging;

fn main() {
    let cli = SplitCli::parse();
    init_logging(cli.verbose);

    if let Err(e) = AvatarSplitter::new(cli.config()).split() {
        tracing::error!("Error: {e}");
    }
}
