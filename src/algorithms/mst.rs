/*!
Minimum spanning tree / forest over a station snapshot.

Two interchangeable strategies are provided:
- `kruskal`: sort every route once, then add routes through a disjoint-set.
- `prim`: grow a tree from a start station across the cheapest frontier route,
  restarting at the next unreached station when the frontier runs dry.

Both honour `Edge::is_required`: required routes are considered before any
optional one, so they end up in the tree unless they close a cycle. On a
disconnected snapshot both return a spanning forest instead of an error.
*/

use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
    algorithms::{kruskal, prim},
    network::{
        edge::Edge,
        node::{Node, NodeId},
        snapshot::NodeIndexMap,
    },
};

/// A route accepted into the tree, with its weight resolved.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SelectedEdge {
    pub from: NodeId,
    pub to: NodeId,
    pub weight: f64,
    #[serde(rename = "isRequired")]
    pub is_required: bool,
}

impl SelectedEdge {
    /// The same route seen from the other endpoint.
    pub fn reversed(&self) -> Self {
        SelectedEdge {
            from: self.to,
            to: self.from,
            ..*self
        }
    }
}

/// Edges in the order they were selected, plus the sum of their weights.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MstResult {
    pub selected_edges: Vec<SelectedEdge>,
    pub total_cost: f64,
}

impl MstResult {
    pub(crate) fn push(&mut self, edge: SelectedEdge) {
        self.total_cost += edge.weight;
        self.selected_edges.push(edge);
    }

    pub fn len(&self) -> usize {
        self.selected_edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected_edges.is_empty()
    }

    /// Whether the result spans all `node_count` nodes, i.e. holds `node_count - 1` edges.
    pub fn is_spanning(&self, node_count: usize) -> bool {
        node_count < 2 || self.len() == node_count - 1
    }

    pub fn contains(&self, a: NodeId, b: NodeId) -> bool {
        self.selected_edges
            .iter()
            .any(|e| (e.from == a && e.to == b) || (e.from == b && e.to == a))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    #[default]
    Kruskal,
    Prim,
}

impl Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Algorithm::Kruskal => write!(f, "kruskal"),
            Algorithm::Prim => write!(f, "prim"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown algorithm: {0}")]
pub struct UnknownAlgorithm(pub String);

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "kruskal" => Ok(Algorithm::Kruskal),
            "prim" => Ok(Algorithm::Prim),
            _ => Err(UnknownAlgorithm(s.to_string())),
        }
    }
}

/// Runs the chosen algorithm without validating the snapshot first.
/// `start` is only used by `Algorithm::Prim`.
pub fn compute(algorithm: Algorithm, nodes: &[Node], edges: &[Edge], start: Option<NodeId>) -> MstResult {
    let result = match algorithm {
        Algorithm::Kruskal => kruskal::kruskal(nodes, edges),
        Algorithm::Prim => prim::prim(nodes, edges, start),
    };
    log::debug!(
        "{} selected {} of {} edges, total cost {}",
        algorithm,
        result.len(),
        edges.len(),
        result.total_cost
    );
    if nodes.len() >= 2 && !result.is_spanning(nodes.len()) {
        log::debug!(
            "{} produced a spanning forest ({} edges for {} nodes)",
            algorithm,
            result.len(),
            nodes.len()
        );
    }
    result
}

/// Resolves one route's weight: the explicit weight if set, otherwise the distance between its endpoints.
/// Returns `None` when an endpoint is not part of the snapshot.
pub(crate) fn resolve_edge(index: &NodeIndexMap, edge: &Edge) -> Option<SelectedEdge> {
    let (Some(from), Some(to)) = (index.node(edge.from), index.node(edge.to)) else {
        log::debug!("Skipping edge {} - {}: unknown endpoint", edge.from, edge.to);
        return None;
    };
    let weight = edge
        .weight
        .unwrap_or_else(|| from.position.distance_to(&to.position));
    Some(SelectedEdge {
        from: edge.from,
        to: edge.to,
        weight,
        is_required: edge.is_required,
    })
}

pub(crate) fn resolve_edges(index: &NodeIndexMap, edges: &[Edge]) -> Vec<SelectedEdge> {
    edges
        .iter()
        .filter_map(|edge| resolve_edge(index, edge))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{algorithms::union_find::UnionFind, geometry::Position};

    fn unit_square() -> (Vec<Node>, Vec<Edge>) {
        let json = include_str!("../../test_data/test_unit_square.json");
        let snapshot = crate::network::snapshot::GraphSnapshot::from_json(json).unwrap();
        (snapshot.nodes, snapshot.edges)
    }

    #[test]
    fn test_both_algorithms_agree_on_unit_square() {
        let (nodes, edges) = unit_square();
        for algorithm in [Algorithm::Kruskal, Algorithm::Prim] {
            let result = compute(algorithm, &nodes, &edges, None);
            assert_eq!(result.len(), 3, "{algorithm}");
            assert_eq!(result.total_cost, 45.0, "{algorithm}");
            let mut weights: Vec<f64> = result.selected_edges.iter().map(|e| e.weight).collect();
            weights.sort_by(f64::total_cmp);
            assert_eq!(weights, vec![10.0, 15.0, 20.0]);
        }
    }

    #[test]
    fn test_selection_never_closes_a_cycle() {
        let (nodes, edges) = unit_square();
        for algorithm in [Algorithm::Kruskal, Algorithm::Prim] {
            let result = compute(algorithm, &nodes, &edges, Some(2));
            let index = NodeIndexMap::new(&nodes);
            let mut uf = UnionFind::new(nodes.len());
            for edge in &result.selected_edges {
                let u = index.index(edge.from).unwrap();
                let v = index.index(edge.to).unwrap();
                assert!(uf.union(u, v));
            }
        }
    }

    #[test]
    fn test_missing_weight_falls_back_to_distance() {
        let nodes = vec![
            Node::new(0, Position::new(0.0, 0.0), "a"),
            Node::new(1, Position::new(3.0, 4.0), "b"),
        ];
        let index = NodeIndexMap::new(&nodes);
        assert_eq!(resolve_edge(&index, &Edge::new(0, 1)).map(|e| e.weight), Some(5.0));
        assert_eq!(resolve_edge(&index, &Edge::weighted(0, 1, 2.0)).map(|e| e.weight), Some(2.0));
        assert_eq!(resolve_edge(&index, &Edge::new(0, 9)), None);
    }

    #[test]
    fn test_algorithm_names() {
        assert_eq!("Prim".parse::<Algorithm>(), Ok(Algorithm::Prim));
        assert_eq!(" kruskal ".parse::<Algorithm>(), Ok(Algorithm::Kruskal));
        assert_eq!(
            " Boruvka".parse::<Algorithm>(),
            Err(UnknownAlgorithm(" Boruvka".to_string()))
        );
        assert_eq!(Algorithm::Prim.to_string(), "prim");
        assert_eq!(serde_json::to_string(&Algorithm::Kruskal).unwrap(), "\"kruskal\"");
    }

    #[test]
    fn test_result_queries() {
        let mut result = MstResult::default();
        assert!(result.is_spanning(1));
        assert!(!result.is_spanning(2));
        result.push(SelectedEdge { from: 1, to: 2, weight: 4.5, is_required: false });
        assert!(result.is_spanning(2));
        assert!(result.contains(2, 1));
        assert_eq!(result.total_cost, 4.5);
        assert_eq!(result.selected_edges[0].reversed().from, 2);
    }
}
