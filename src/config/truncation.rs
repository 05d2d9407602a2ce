use crate::{
    algorithm::truncation::{self, ComponentFilter},
    model::{
        graph::{EdgeData, NodeId, SpatialGraph},
        BoundingBox, NetclipError,
    },
};
use geo::Geometry;
use serde::{Deserialize, Serialize};
use std::ffi::OsStr;
use std::path::Path;
use wkt::TryFromWkt;

/// declarative description of a truncation pipeline: an optional spatial
/// clip (WKT extent file or bounding box), an optional network distance
/// bound, and a component filter applied last.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct TruncationConfig {
    /// path to a file containing the WKT polygon or multipolygon to clip
    /// against
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extent_wkt_file: Option<String>,
    /// keep outside nodes that neighbor the clipped interior
    #[serde(default)]
    pub truncate_by_edge: bool,
    /// skip isolated-node removal and largest-component repair
    #[serde(default)]
    pub retain_all: bool,
    /// bounding box to clip against
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bbox: Option<BoundingBox>,
    /// network distance bound applied after the spatial clip
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dist: Option<DistanceStage>,
    /// component selection applied as the final stage
    #[serde(default)]
    pub component_filter: ComponentFilter,
}

/// network distance stage of a [`TruncationConfig`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistanceStage {
    pub source_node: NodeId,
    pub dist: f64,
    /// edge attribute to measure distance with, "length" when omitted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<String>,
}

impl DistanceStage {
    pub fn weight_attribute(&self) -> &str {
        self.weight.as_deref().unwrap_or(EdgeData::LENGTH_ATTRIBUTE)
    }
}

impl TruncationConfig {
    /// loads the configured WKT extent file, if one is set
    pub fn get_extent(&self) -> Result<Option<Geometry>, NetclipError> {
        match &self.extent_wkt_file {
            None => Ok(None),
            Some(filepath) => {
                let wkt_str = std::fs::read_to_string(filepath).map_err(|e| {
                    NetclipError::ConfigurationError(format!(
                        "unable to read file {filepath}: {e}"
                    ))
                })?;
                let geometry = Geometry::try_from_wkt_str(wkt_str.trim()).map_err(|e| {
                    NetclipError::ConfigurationError(format!(
                        "failure reading wkt contents of file {filepath}: {e}"
                    ))
                })?;
                Ok(Some(geometry))
            }
        }
    }

    /// runs the configured pipeline against a graph, returning the truncated
    /// copy. stages run in order: spatial clip, distance bound, component
    /// filter. the input graph is never modified.
    pub fn apply(&self, graph: &SpatialGraph) -> Result<SpatialGraph, NetclipError> {
        if self.extent_wkt_file.is_some() && self.bbox.is_some() {
            return Err(NetclipError::ConfigurationError(String::from(
                "extent_wkt_file and bbox are mutually exclusive, provide at most one",
            )));
        }

        let extent = self.get_extent()?;
        let clipped = match (&extent, &self.bbox) {
            (Some(geometry), _) => {
                log::info!("  (((1))) truncating graph to the configured extent");
                truncation::truncate_graph_polygon(
                    graph,
                    geometry,
                    self.retain_all,
                    self.truncate_by_edge,
                )?
            }
            (None, Some(bbox)) => {
                log::info!("  (((1))) truncating graph to the configured bounding box");
                truncation::truncate_graph_bbox(
                    graph,
                    bbox,
                    self.truncate_by_edge,
                    self.retain_all,
                )?
            }
            (None, None) => {
                log::info!("  (((1))) no spatial extent configured, skipping clip");
                graph.clone()
            }
        };

        let bounded = match &self.dist {
            Some(stage) => {
                log::info!("  (((2))) truncating graph by network distance");
                truncation::truncate_graph_dist(
                    &clipped,
                    &stage.source_node,
                    stage.dist,
                    stage.weight_attribute(),
                    self.retain_all,
                )?
            }
            None => {
                log::info!("  (((2))) no distance bound configured, skipping");
                clipped
            }
        };

        log::info!("  (((3))) filtering graph components");
        truncation::filter_components(&bounded, &self.component_filter, false)
    }
}

impl TryFrom<&String> for TruncationConfig {
    type Error = NetclipError;

    /// loads a configuration from a TOML or JSON file, dispatching on the
    /// file extension
    fn try_from(config_file: &String) -> Result<Self, Self::Error> {
        let path = Path::new(config_file);
        let extension = path.extension().and_then(OsStr::to_str).ok_or_else(|| {
            NetclipError::ConfigurationError(format!(
                "configuration file {config_file} has no file extension"
            ))
        })?;
        let contents = std::fs::read_to_string(path).map_err(|e| {
            NetclipError::ConfigurationError(format!("unable to read file {config_file}: {e}"))
        })?;
        match extension {
            "toml" => toml::from_str(&contents).map_err(|e| {
                NetclipError::ConfigurationError(format!(
                    "failure reading toml contents of file {config_file}: {e}"
                ))
            }),
            "json" => serde_json::from_str(&contents).map_err(|e| {
                NetclipError::ConfigurationError(format!(
                    "failure reading json contents of file {config_file}: {e}"
                ))
            }),
            other => Err(NetclipError::ConfigurationError(format!(
                "unknown configuration file extension '{other}', expected toml or json"
            ))),
        }
    }
}
