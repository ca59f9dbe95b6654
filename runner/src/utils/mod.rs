pub mod geometry;
pub mod mask;
pub mod text;

pub use geometry::{manhattan_distance, BoundingBox, Point};
pub use mask::mask_sensitive;
pub use text::{matches_all_keywords, normalize};
