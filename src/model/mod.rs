mod bounding_box;
pub mod graph;
mod netclip_error;

pub use bounding_box::BoundingBox;
pub use netclip_error::NetclipError;
