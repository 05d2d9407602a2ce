use super::remove_and_repair;
use crate::{
    algorithm::spatial_index,
    model::{
        graph::{NodeId, SpatialGraph},
        BoundingBox, NetclipError,
    },
};
use geo::Geometry;
use std::collections::HashSet;

/// returns a copy of the graph truncated to the nodes lying within the
/// polygon or multipolygon `extent`, boundary included. with
/// `truncate_by_edge` set, an outside node survives when at least one of
/// its neighbors (in either edge direction) lies inside, so edges crossing
/// the boundary keep both endpoints. unless `retain_all` is set, isolated
/// nodes are then dropped and only the largest weakly connected component
/// is kept.
///
/// the input graph is never modified. fails when no node lies within the
/// extent.
pub fn truncate_graph_polygon(
    graph: &SpatialGraph,
    extent: &Geometry,
    retain_all: bool,
    truncate_by_edge: bool,
) -> Result<SpatialGraph, NetclipError> {
    match extent {
        Geometry::Polygon(_) | Geometry::MultiPolygon(_) => {}
        _ => {
            return Err(NetclipError::ConfigurationError(String::from(
                "truncation extent must be a POLYGON or MULTIPOLYGON",
            )))
        }
    }

    log::info!("identifying all nodes that lie outside the polygon");
    let node_points = graph.node_points();
    let inside = spatial_index::points_within(&node_points, extent);
    if inside.is_empty() {
        return Err(NetclipError::EmptyTruncation);
    }
    let outside: HashSet<NodeId> = graph
        .node_ids()
        .filter(|node_id| !inside.contains(node_id))
        .copied()
        .collect();

    let removal_set: HashSet<NodeId> = if truncate_by_edge {
        // an outside node survives when any neighbor lies inside. the test
        // runs against the original partition, so a node retained this way
        // does not rescue its own outside neighbors.
        outside
            .iter()
            .filter(|node_id| {
                graph
                    .node_neighbors(node_id)
                    .unwrap_or_default()
                    .is_subset(&outside)
            })
            .copied()
            .collect()
    } else {
        outside
    };

    let n_before = graph.n_nodes();
    let out = remove_and_repair(graph, &removal_set, retain_all)?;
    log::info!("removed {} nodes outside polygon", removal_set.len());
    log::info!(
        "truncated graph by polygon ({} -> {} nodes)",
        n_before,
        out.n_nodes()
    );
    Ok(out)
}

/// returns a copy of the graph truncated to the nodes lying within `bbox`,
/// a thin adapter that converts the box to its rectangular polygon and
/// delegates to [`truncate_graph_polygon`].
pub fn truncate_graph_bbox(
    graph: &SpatialGraph,
    bbox: &BoundingBox,
    truncate_by_edge: bool,
    retain_all: bool,
) -> Result<SpatialGraph, NetclipError> {
    let extent = Geometry::Polygon(bbox.to_polygon());
    let out = truncate_graph_polygon(graph, &extent, retain_all, truncate_by_edge)?;
    log::info!("truncated graph by bounding box {}", bbox);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::graph::{example, NodeData};
    use geo::{polygon, MultiPolygon, Point};

    fn init_test_logger() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    /// rectangle spanning the given x range, tall enough to cover y = 0
    fn x_band(x_min: f64, x_max: f64) -> geo::Polygon {
        polygon![
            (x: x_min, y: -1.0),
            (x: x_max, y: -1.0),
            (x: x_max, y: 1.0),
            (x: x_min, y: 1.0),
        ]
    }

    #[test]
    fn test_polygon_truncation_drops_outside_nodes() {
        init_test_logger();
        let graph = example::two_component_graph().unwrap();
        let before = graph.clone();
        // the unit square's nodes sit exactly on this polygon boundary
        let extent = Geometry::Polygon(polygon![
            (x: 0.0, y: 0.0),
            (x: 1.0, y: 0.0),
            (x: 1.0, y: 1.0),
            (x: 0.0, y: 1.0),
        ]);
        let out = truncate_graph_polygon(&graph, &extent, false, false).unwrap();
        assert_eq!(
            out.node_id_set(),
            HashSet::from([NodeId(1), NodeId(2), NodeId(3), NodeId(4)])
        );
        assert_eq!(out.n_edges(), 8);
        assert_eq!(graph, before, "input graph must not be modified");
    }

    #[test]
    fn test_empty_interior_fails() {
        let graph = example::two_component_graph().unwrap();
        let extent = Geometry::Polygon(x_band(100.0, 101.0));
        let result = truncate_graph_polygon(&graph, &extent, false, false);
        assert!(matches!(result, Err(NetclipError::EmptyTruncation)));
    }

    #[test]
    fn test_non_polygon_extent_fails() {
        let graph = example::two_component_graph().unwrap();
        let extent = Geometry::Point(Point::new(0.5, 0.5));
        let result = truncate_graph_polygon(&graph, &extent, false, false);
        assert!(matches!(
            result,
            Err(NetclipError::ConfigurationError(_))
        ));
    }

    #[test]
    fn test_truncate_by_edge_keeps_boundary_crossing_neighbors() {
        // corridor nodes at x = 0, 1, 2, 3; the band covers the first two.
        // node 3 neighbors node 2 inside and survives; node 4 only touches
        // outside nodes and is removed.
        let graph = example::corridor_graph(&[1.0, 1.0, 1.0]).unwrap();
        let extent = Geometry::Polygon(x_band(-0.5, 1.5));

        let strict = truncate_graph_polygon(&graph, &extent, false, false).unwrap();
        assert_eq!(strict.node_id_set(), HashSet::from([NodeId(1), NodeId(2)]));

        let by_edge = truncate_graph_polygon(&graph, &extent, false, true).unwrap();
        assert_eq!(
            by_edge.node_id_set(),
            HashSet::from([NodeId(1), NodeId(2), NodeId(3)])
        );
        assert!(by_edge.get_edges(&NodeId(2), &NodeId(3)).is_ok());
    }

    #[test]
    fn test_truncate_by_edge_still_drops_isolated_outside_nodes() {
        let mut graph = example::corridor_graph(&[1.0]).unwrap();
        graph
            .add_node(NodeId(10), NodeData::new(50.0, 0.0))
            .unwrap();
        let extent = Geometry::Polygon(x_band(-0.5, 1.5));
        let out = truncate_graph_polygon(&graph, &extent, true, true).unwrap();
        assert!(!out.contains_node(&NodeId(10)));
    }

    #[test]
    fn test_retain_all_keeps_every_surviving_component() {
        // corridor nodes at x = 0..5; the multipolygon covers nodes 1, 2
        // and nodes 4, 5, 6, leaving node 3 outside. removing it splits the
        // corridor in two.
        let graph = example::corridor_graph(&[1.0, 1.0, 1.0, 1.0, 1.0]).unwrap();
        let extent = Geometry::MultiPolygon(MultiPolygon(vec![
            x_band(-0.5, 1.5),
            x_band(2.5, 5.5),
        ]));

        let retained = truncate_graph_polygon(&graph, &extent, true, false).unwrap();
        assert_eq!(
            retained.node_id_set(),
            HashSet::from([NodeId(1), NodeId(2), NodeId(4), NodeId(5), NodeId(6)])
        );

        let repaired = truncate_graph_polygon(&graph, &extent, false, false).unwrap();
        assert_eq!(
            repaired.node_id_set(),
            HashSet::from([NodeId(4), NodeId(5), NodeId(6)]),
            "connectivity repair keeps only the largest component"
        );
    }

    #[test]
    fn test_bbox_adapter_matches_polygon_result() {
        let graph = example::corridor_graph(&[1.0, 1.0, 1.0]).unwrap();
        let bbox = BoundingBox::new(1.0, -1.0, 1.5, -0.5).unwrap();
        let via_bbox = truncate_graph_bbox(&graph, &bbox, false, false).unwrap();
        let extent = Geometry::Polygon(bbox.to_polygon());
        let via_polygon = truncate_graph_polygon(&graph, &extent, false, false).unwrap();
        assert_eq!(via_bbox, via_polygon);
        assert_eq!(via_bbox.node_id_set(), HashSet::from([NodeId(1), NodeId(2)]));
    }
}
