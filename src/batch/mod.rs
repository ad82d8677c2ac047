/// Quadrant splitting of one composite image into avatar files
pub mod avatars;
/// In-place transparency pass over a folder of badge images
pub mod badges;

pub use avatars::{AvatarConfig, AvatarSplitter};
pub use badges::{BadgeConfig, BadgeProcessor, BatchReport};
