/*!
Eligibility checks run before a spanning tree is computed.

`validate_for_mst` reports the first failing check in a fixed order: empty
graph, single node, no edges, too few edges, disconnected. The cheap counting
checks short-circuit before the connectivity scan.

`validate_for_mst_strict` additionally rejects required routes that close a
cycle among themselves, which no spanning tree can honour.
*/

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    algorithms::{connectivity::count_connected_components, union_find::UnionFind},
    network::{
        edge::Edge,
        node::{Node, NodeId},
        snapshot::NodeIndexMap,
    },
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
pub enum InvalidReason {
    #[error("The graph is empty: add at least two stations")]
    Empty,
    #[error("The graph has only 1 station: at least 2 stations are needed")]
    SingleNode,
    #[error("The graph has no routes connecting its stations")]
    NoEdges,
    #[error("Not enough routes to connect every station: at least {required} needed, found {actual}")]
    InsufficientEdges { required: usize, actual: usize },
    #[error("The graph is not connected: it has {components} separate components")]
    Disconnected { components: usize },
    #[error("Required routes form a cycle: route {from} - {to} closes it")]
    RequiredCycle { from: NodeId, to: NodeId },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Validation {
    Valid,
    Invalid(InvalidReason),
}

impl Validation {
    pub fn is_valid(&self) -> bool {
        matches!(self, Validation::Valid)
    }

    pub fn reason(&self) -> Option<&InvalidReason> {
        match self {
            Validation::Valid => None,
            Validation::Invalid(reason) => Some(reason),
        }
    }

    pub fn into_result(self) -> Result<(), InvalidReason> {
        match self {
            Validation::Valid => Ok(()),
            Validation::Invalid(reason) => Err(reason),
        }
    }
}

pub fn validate_for_mst(nodes: &[Node], edges: &[Edge]) -> Validation {
    let n = nodes.len();
    if n == 0 {
        return Validation::Invalid(InvalidReason::Empty);
    }
    if n == 1 {
        return Validation::Invalid(InvalidReason::SingleNode);
    }
    if edges.is_empty() {
        return Validation::Invalid(InvalidReason::NoEdges);
    }
    if edges.len() < n - 1 {
        return Validation::Invalid(InvalidReason::InsufficientEdges {
            required: n - 1,
            actual: edges.len(),
        });
    }

    let components = count_connected_components(nodes, edges);
    if components > 1 {
        return Validation::Invalid(InvalidReason::Disconnected { components });
    }
    Validation::Valid
}

/// A required route that closes a cycle with required routes listed before it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequiredConflict {
    pub from: NodeId,
    pub to: NodeId,
}

/// Replays required routes, in input order, through a fresh disjoint-set and
/// returns the first one whose endpoints are already joined.
pub fn find_required_conflict(nodes: &[Node], edges: &[Edge]) -> Option<RequiredConflict> {
    let index = NodeIndexMap::new(nodes);
    let mut uf = UnionFind::new(nodes.len());

    edges
        .iter()
        .filter(|edge| edge.is_required)
        .find_map(|edge| {
            let (u, v) = (index.index(edge.from)?, index.index(edge.to)?);
            if uf.union(u, v) {
                None
            } else {
                Some(RequiredConflict {
                    from: edge.from,
                    to: edge.to,
                })
            }
        })
}

/// `validate_for_mst` followed by the required-route cycle check.
pub fn validate_for_mst_strict(nodes: &[Node], edges: &[Edge]) -> Validation {
    let validation = validate_for_mst(nodes, edges);
    if !validation.is_valid() {
        return validation;
    }
    match find_required_conflict(nodes, edges) {
        Some(RequiredConflict { from, to }) => {
            log::warn!("Required routes conflict at {} - {}", from, to);
            Validation::Invalid(InvalidReason::RequiredCycle { from, to })
        }
        None => Validation::Valid,
    }
}
