/*!
Validate-then-compute entry point.

`SolveConfig` carries what a caller chooses per run: the algorithm, an optional
start station (frontier growth only) and the scale used to report the cost in
display units.
*/

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    algorithms::{
        mst::{Algorithm, MstResult, compute},
        validate::{InvalidReason, validate_for_mst, validate_for_mst_strict},
    },
    geometry::{DEFAULT_DISTANCE_SCALE, to_display_units},
    network::{node::NodeId, snapshot::GraphSnapshot},
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolveConfig {
    algorithm: Algorithm,
    start_node: Option<NodeId>,
    distance_scale: f64,
    /// Also reject required routes that form a cycle among themselves.
    strict_required: bool,
}

impl Default for SolveConfig {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::Kruskal,
            start_node: None,
            distance_scale: DEFAULT_DISTANCE_SCALE,
            strict_required: false,
        }
    }
}

impl SolveConfig {
    pub fn new(algorithm: Algorithm) -> Self {
        Self {
            algorithm,
            ..Self::default()
        }
    }

    pub fn with_start_node(mut self, start_node: Option<NodeId>) -> Self {
        self.start_node = start_node;
        self
    }

    pub fn with_distance_scale(mut self, distance_scale: f64) -> Self {
        self.distance_scale = distance_scale;
        self
    }

    pub fn with_strict_required(mut self, strict_required: bool) -> Self {
        self.strict_required = strict_required;
        self
    }

    pub fn get_algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn set_algorithm(&mut self, algorithm: Algorithm) {
        self.algorithm = algorithm;
    }

    pub fn get_start_node(&self) -> Option<NodeId> {
        self.start_node
    }

    pub fn get_distance_scale(&self) -> f64 {
        self.distance_scale
    }

    pub fn is_strict_required(&self) -> bool {
        self.strict_required
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolveError {
    #[error("Graph is not eligible for a spanning tree: {0}")]
    Invalid(#[from] InvalidReason),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Solution {
    pub algorithm: Algorithm,
    pub result: MstResult,
    /// `result.total_cost` converted with the configured scale.
    pub display_cost: f64,
}

/// Validates `snapshot` and computes its spanning tree with the configured algorithm.
pub fn solve(snapshot: &GraphSnapshot, config: &SolveConfig) -> Result<Solution, SolveError> {
    let (nodes, edges) = (&snapshot.nodes, &snapshot.edges);
    let validation = if config.strict_required {
        validate_for_mst_strict(nodes, edges)
    } else {
        validate_for_mst(nodes, edges)
    };
    if let Err(reason) = validation.into_result() {
        log::debug!("Rejected graph with {} stations: {}", nodes.len(), reason);
        return Err(reason.into());
    }

    let result = compute(config.algorithm, nodes, edges, config.start_node);
    let display_cost = to_display_units(result.total_cost, config.distance_scale);
    Ok(Solution {
        algorithm: config.algorithm,
        result,
        display_cost,
    })
}
