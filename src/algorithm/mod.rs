pub mod connected_components;
pub mod shortest_path;
pub mod spatial_index;
pub mod truncation;
