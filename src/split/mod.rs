/// Quadrant geometry and cropping
pub mod quadrants;

pub use quadrants::{CropRect, Quadrant, split_into_quadrants};
