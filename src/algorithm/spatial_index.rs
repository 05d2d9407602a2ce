use crate::model::graph::NodeId;
use geo::{BoundingRect, Geometry, Intersects, Point};
use rayon::prelude::*;
use rstar::{primitives::GeomWithData, RTree, AABB};
use std::collections::{HashMap, HashSet};

type IndexedPoint = GeomWithData<[f64; 2], NodeId>;

/// returns the ids of every point that lies within `extent`, boundary
/// points included. candidates are prefiltered through an r-tree against
/// the extent envelope, then confirmed with an exact intersection test.
pub fn points_within(points: &HashMap<NodeId, Point>, extent: &Geometry) -> HashSet<NodeId> {
    let Some(bounds) = extent.bounding_rect() else {
        return HashSet::new();
    };

    let entries: Vec<IndexedPoint> = points
        .iter()
        .map(|(node_id, point)| GeomWithData::new([point.x(), point.y()], *node_id))
        .collect();
    let tree: RTree<IndexedPoint> = RTree::bulk_load(entries);

    let envelope: AABB<[f64; 2]> = AABB::from_corners(
        [bounds.min().x, bounds.min().y],
        [bounds.max().x, bounds.max().y],
    );
    let candidates: Vec<&IndexedPoint> = tree.locate_in_envelope_intersecting(&envelope).collect();

    candidates
        .into_par_iter()
        .filter_map(|entry| {
            let point = Point::new(entry.geom()[0], entry.geom()[1]);
            if extent.intersects(&point) {
                Some(entry.data)
            } else {
                None
            }
        })
        .collect()
}
