use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::geometry::Position;

/// Stable identifier of a station. Never reused within one graph instance.
pub type NodeId = u32;

/// Represents a station in the route network.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,
    #[serde(flatten)]
    pub position: Position,
    #[serde(default)]
    pub label: String,
}

impl Node {
    pub fn new(id: NodeId, position: Position, label: impl Into<String>) -> Self {
        Self {
            id,
            position,
            label: label.into(),
        }
    }

    /// Creates a node labelled `V{id}`, the label an editor gives freshly placed stations.
    pub fn with_default_label(id: NodeId, position: Position) -> Self {
        Self::new(id, position, default_label(id))
    }
}

pub fn default_label(id: NodeId) -> String {
    format!("V{}", id)
}

impl Display for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} (#{}) at ({:.1}, {:.1})",
            self.label, self.id, self.position.x, self.position.y
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_deserialization() {
        let json = include_str!("../../test_data/test_node_deserialization.json");
        let node: Node = serde_json::from_str(json).expect("Failed to deserialize node");

        assert_eq!(node.id, 4);
        assert_eq!(node.position, Position::new(500.0, 220.0));
        assert_eq!(node.label, "Đà Nẵng");
    }

    #[test]
    fn test_missing_label_defaults_to_empty() {
        let node: Node = serde_json::from_str(r#"{"id": 1, "x": 2.0, "y": 3.0}"#).unwrap();
        assert_eq!(node.label, "");
        assert_eq!(Node::with_default_label(7, node.position).label, "V7");
    }
}
