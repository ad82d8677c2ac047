//! Processing constants and runtime configuration defaults

// Transparency filter settings
/// Channel value each of red, green and blue must exceed to count as near-white
pub const WHITE_THRESHOLD: u8 = 240;

/// Replacement written over near-white pixels (fully transparent white)
pub const TRANSPARENT_WHITE: [u8; 4] = [255, 255, 255, 0];

/// Folder scanned for badge images when none is given
pub const DEFAULT_BADGE_FOLDER: &str = "./public/assets/badges";

// Quadrant splitter settings
/// Composite image split into avatars when no source is given
pub const DEFAULT_AVATAR_SOURCE: &str = "/tmp/pixel_avatars_set.png";

/// Directory the four avatars are written into when none is given
pub const DEFAULT_AVATAR_OUTPUT_DIR: &str = "public/assets/avatars";

/// File name prefix of each avatar, followed by its 1-based quadrant index
pub const AVATAR_FILE_PREFIX: &str = "avatar_";

// Smallest source edge that still yields four non-empty quadrants
/// Minimum source width and height accepted by the splitter
pub const MIN_SPLIT_DIMENSION: u32 = 2;

/// Extension matched when listing badge images (case-sensitive)
pub const PNG_EXTENSION: &str = "png";

// Progress bar display settings
/// Width of the file progress bar in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;

// Logging defaults
/// Default log level when `RUST_LOG` is unset
pub const DEFAULT_LOG_LEVEL: &str = "info";
/// Log level selected by `--verbose`
pub const VERBOSE_LOG_LEVEL: &str = "debug";
