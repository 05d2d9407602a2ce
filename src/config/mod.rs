mod truncation;

pub use truncation::{DistanceStage, TruncationConfig};
