pub mod geometry;
pub mod ids;

pub use geometry::{Offset, Point, Rect, Size};
pub use ids::ElementId;
