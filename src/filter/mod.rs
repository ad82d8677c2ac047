/// Near-white to transparent pixel rewriting
pub mod transparency;

pub use transparency::{is_near_white, make_transparent};
