/*!
Immutable node/edge snapshots handed to the algorithms.

A snapshot is taken from a `NetworkGraph` (or deserialized from JSON) and never
changes afterwards; every algorithm call works on its own copy of the data.
*/

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::network::{
    edge::Edge,
    node::{Node, NodeId},
};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphSnapshot {
    pub nodes: Vec<Node>,
    #[serde(default)]
    pub edges: Vec<Edge>,
}

impl GraphSnapshot {
    pub fn new(nodes: Vec<Node>, edges: Vec<Edge>) -> Self {
        GraphSnapshot { nodes, edges }
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.iter().find(|node| node.id == id)
    }
}

/// Maps node ids to dense indices `0..n` in node-sequence order.
///
/// Algorithms use this instead of treating ids as positions, so sparse or
/// non-zero-based ids are handled the same as `0..n`.
pub(crate) struct NodeIndexMap<'a> {
    nodes: &'a [Node],
    index_of: HashMap<NodeId, usize>,
}

impl<'a> NodeIndexMap<'a> {
    pub(crate) fn new(nodes: &'a [Node]) -> Self {
        let mut index_of = HashMap::with_capacity(nodes.len());
        for (index, node) in nodes.iter().enumerate() {
            index_of.entry(node.id).or_insert(index);
        }
        NodeIndexMap { nodes, index_of }
    }

    pub(crate) fn index(&self, id: NodeId) -> Option<usize> {
        self.index_of.get(&id).copied()
    }

    pub(crate) fn node(&self, id: NodeId) -> Option<&'a Node> {
        self.index(id).map(|index| &self.nodes[index])
    }

    pub(crate) fn contains(&self, id: NodeId) -> bool {
        self.index_of.contains_key(&id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Position;

    #[test]
    fn test_snapshot_deserialization() {
        let json = include_str!("../../test_data/test_unit_square.json");
        let snapshot = GraphSnapshot::from_json(json).expect("Failed to deserialize snapshot");

        assert_eq!(snapshot.node_count(), 4);
        assert_eq!(snapshot.edge_count(), 5);
        assert_eq!(snapshot.node(2).map(|n| n.label.as_str()), Some("C"));
        assert_eq!(snapshot.edges[4].weight, Some(30.0));
    }

    #[test]
    fn test_snapshot_json_round_trip_keeps_edge_flags() {
        let snapshot = GraphSnapshot::new(
            vec![
                Node::new(10, Position::new(0.0, 0.0), "a"),
                Node::new(20, Position::new(1.0, 0.0), "b"),
            ],
            vec![Edge::new(10, 20).required()],
        );
        let json = snapshot.to_json().unwrap();
        assert!(json.contains("\"isRequired\": true"));
        assert_eq!(GraphSnapshot::from_json(&json).unwrap(), snapshot);
    }

    #[test]
    fn test_index_map_is_positional_in_node_order() {
        let nodes = vec![
            Node::new(7, Position::default(), "x"),
            Node::new(3, Position::default(), "y"),
        ];
        let map = NodeIndexMap::new(&nodes);
        assert_eq!(map.index(7), Some(0));
        assert_eq!(map.index(3), Some(1));
        assert_eq!(map.index(0), None);
        assert_eq!(map.node(3).map(|n| n.label.as_str()), Some("y"));
    }
}
