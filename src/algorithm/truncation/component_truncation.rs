use super::ComponentFilter;
use crate::{
    algorithm::connected_components,
    model::{
        graph::{NodeId, SpatialGraph},
        NetclipError,
    },
};
use std::collections::HashSet;

/// returns the subgraph induced by the largest weakly (or, when `strongly`
/// is set, strongly) connected component of the graph. the input is never
/// modified; an already-connected graph comes back as a plain copy. when
/// several components share the maximum size, the first one found in
/// enumeration order wins.
///
/// fails on an empty graph, where connectivity is undefined.
pub fn largest_component(
    graph: &SpatialGraph,
    strongly: bool,
) -> Result<SpatialGraph, NetclipError> {
    let (kind, connected) = if strongly {
        (
            "strongly",
            connected_components::is_strongly_connected(graph)?,
        )
    } else {
        ("weakly", connected_components::is_weakly_connected(graph)?)
    };
    if connected {
        return Ok(graph.clone());
    }

    let components = if strongly {
        connected_components::strongly_connected_components(graph)
    } else {
        connected_components::weakly_connected_components(graph)
    };
    let mut largest: Option<&HashSet<NodeId>> = None;
    for component in components.iter() {
        let is_larger = largest.map_or(true, |best| component.len() > best.len());
        if is_larger {
            largest = Some(component);
        }
    }
    let keep = largest.ok_or_else(|| {
        NetclipError::InternalError(String::from(
            "non-empty graph produced no connected components",
        ))
    })?;

    let out = graph.subgraph(keep);
    log::info!(
        "got largest {} connected component ({} of {} total nodes)",
        kind,
        out.n_nodes(),
        graph.n_nodes()
    );
    Ok(out)
}

/// retains the connected components selected by `filter` and returns the
/// subgraph induced by their union. the input is never modified.
///
/// fails on an empty graph, where connectivity is undefined.
pub fn filter_components(
    graph: &SpatialGraph,
    filter: &ComponentFilter,
    strongly: bool,
) -> Result<SpatialGraph, NetclipError> {
    if graph.is_empty() {
        return Err(NetclipError::EmptyGraph(String::from(
            "component filtering is undefined for a graph with no nodes",
        )));
    }
    if matches!(filter, ComponentFilter::KeepAll) {
        return Ok(graph.clone());
    }

    let components = if strongly {
        connected_components::strongly_connected_components(graph)
    } else {
        connected_components::weakly_connected_components(graph)
    };
    let n_components = components.len();
    let filtered = filter.assign_components(components);
    log::info!(
        "retaining {} of {} graph components under the '{}' filter",
        filtered.len(),
        n_components,
        filter
    );

    let keep: HashSet<NodeId> = filtered.into_iter().flatten().collect();
    let out = graph.subgraph(&keep);
    log::info!(
        "after filtering components, graph has {} nodes and {} edges",
        out.n_nodes(),
        out.n_edges()
    );
    Ok(out)
}
