use serde::{Deserialize, Serialize};

use crate::network::node::NodeId;

/// A candidate route between two stations.
///
/// The weight is optional: when absent it is derived from the endpoint positions.
/// `curve` is editor metadata and is carried along untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub from: NodeId,
    pub to: NodeId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(default, rename = "isRequired")]
    pub is_required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub curve: Option<CurveControl>,
}

/// Control point of a curved route as placed by an editor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurveControl {
    pub x: f64,
    pub y: f64,
}

impl Edge {
    pub fn new(from: NodeId, to: NodeId) -> Self {
        Edge {
            from,
            to,
            weight: None,
            is_required: false,
            curve: None,
        }
    }

    pub fn weighted(from: NodeId, to: NodeId, weight: f64) -> Self {
        Edge {
            weight: Some(weight),
            ..Edge::new(from, to)
        }
    }

    pub fn required(mut self) -> Self {
        self.is_required = true;
        self
    }

    pub fn key(&self) -> UndirectedEdgeKey {
        UndirectedEdgeKey::new(self.from, self.to)
    }

    pub fn connects(&self, a: NodeId, b: NodeId) -> bool {
        self.key() == UndirectedEdgeKey::new(a, b)
    }

    pub fn touches(&self, id: NodeId) -> bool {
        self.from == id || self.to == id
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UndirectedEdgeKey {
    pub a: NodeId,
    pub b: NodeId,
}

impl UndirectedEdgeKey {
    pub fn new(a: NodeId, b: NodeId) -> Self {
        let (a, b) = if a < b { (a, b) } else { (b, a) };
        UndirectedEdgeKey { a, b }
    }

    pub fn endpoints(&self) -> (NodeId, NodeId) {
        (self.a, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_ignores_direction() {
        assert_eq!(UndirectedEdgeKey::new(3, 1), UndirectedEdgeKey::new(1, 3));
        assert_eq!(UndirectedEdgeKey::new(3, 1).endpoints(), (1, 3));
        assert!(Edge::new(2, 5).connects(5, 2));
        assert!(!Edge::new(2, 5).connects(2, 4));
    }

    #[test]
    fn test_edge_json_shape() {
        let edge: Edge = serde_json::from_str(r#"{"from": 0, "to": 1, "weight": 10, "isRequired": true}"#).unwrap();
        assert_eq!(edge, Edge::weighted(0, 1, 10.0).required());

        let bare: Edge = serde_json::from_str(r#"{"from": 2, "to": 3}"#).unwrap();
        assert_eq!(bare.weight, None);
        assert!(!bare.is_required);
        assert_eq!(serde_json::to_string(&bare).unwrap(), r#"{"from":2,"to":3,"isRequired":false}"#);
    }
}
