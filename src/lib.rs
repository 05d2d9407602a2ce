//! truncate spatial network graphs by network distance, bounding box, or
//! polygon while preserving connectivity.
//!
//! the [`model::graph::SpatialGraph`] type is a directed multigraph of
//! spatially located nodes. the operations in [`algorithm::truncation`]
//! take a graph by reference and return a truncated copy, so a single
//! source graph can be clipped many ways. [`config::TruncationConfig`]
//! composes the operations into a declarative pipeline loadable from TOML
//! or JSON.
//!
//! ```
//! use netclip::algorithm::truncation;
//! use netclip::model::graph::{example, EdgeData, NodeId};
//!
//! let graph = example::corridor_graph(&[100.0, 50.0, 25.0]).unwrap();
//! let nearby = truncation::truncate_graph_dist(
//!     &graph,
//!     &NodeId(1),
//!     150.0,
//!     EdgeData::LENGTH_ATTRIBUTE,
//!     false,
//! )
//! .unwrap();
//! assert_eq!(nearby.n_nodes(), 3);
//! assert_eq!(graph.n_nodes(), 4);
//! ```
//!
//! this library logs through the [`log`] facade and never installs a
//! logger; binaries choose their own.

pub mod algorithm;
pub mod config;
pub mod model;
