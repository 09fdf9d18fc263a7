use std::cmp::Ordering;

use crate::{
    algorithms::{
        mst::{MstResult, SelectedEdge, resolve_edges},
        union_find::UnionFind,
    },
    network::{edge::Edge, node::Node, snapshot::NodeIndexMap},
};

/// Required routes first, then ascending weight.
#[inline(always)]
fn cmp_candidate(a: &SelectedEdge, b: &SelectedEdge) -> Ordering {
    b.is_required
        .cmp(&a.is_required)
        .then_with(|| a.weight.total_cmp(&b.weight))
}

/// Sort-and-union spanning tree. Yields a spanning forest when the snapshot is disconnected.
pub fn kruskal(nodes: &[Node], edges: &[Edge]) -> MstResult {
    let mut result = MstResult::default();
    if nodes.len() < 2 {
        return result;
    }

    let index = NodeIndexMap::new(nodes);
    let mut candidates = resolve_edges(&index, edges);
    // stable: equal keys keep their input order
    candidates.sort_by(cmp_candidate);

    let target = nodes.len() - 1;
    let mut uf = UnionFind::new(nodes.len());

    for edge in candidates {
        let (Some(u), Some(v)) = (index.index(edge.from), index.index(edge.to)) else {
            continue;
        };
        if uf.union(u, v) {
            result.push(edge);
            if result.len() == target {
                break;
            }
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Position;

    fn line_nodes(n: u32) -> Vec<Node> {
        (0..n)
            .map(|i| Node::with_default_label(i, Position::new(f64::from(i) * 100.0, 0.0)))
            .collect()
    }

    #[test]
    fn test_fewer_than_two_nodes_gives_empty_result() {
        assert_eq!(kruskal(&[], &[]), MstResult::default());
        let one = line_nodes(1);
        assert_eq!(kruskal(&one, &[Edge::weighted(0, 0, 1.0)]), MstResult::default());
    }

    #[test]
    fn test_edges_are_selected_in_ascending_weight_order() {
        let nodes = line_nodes(4);
        let edges = [
            Edge::weighted(2, 3, 20.0),
            Edge::weighted(0, 1, 10.0),
            Edge::weighted(3, 0, 25.0),
            Edge::weighted(1, 2, 15.0),
        ];
        let result = kruskal(&nodes, &edges);
        let weights: Vec<f64> = result.selected_edges.iter().map(|e| e.weight).collect();
        assert_eq!(weights, vec![10.0, 15.0, 20.0]);
    }

    #[test]
    fn test_equal_weights_triangle_keeps_two_edges() {
        let nodes = line_nodes(3);
        let edges = [
            Edge::weighted(0, 1, 5.0),
            Edge::weighted(1, 2, 5.0),
            Edge::weighted(2, 0, 5.0),
        ];
        let result = kruskal(&nodes, &edges);
        assert_eq!(result.len(), 2);
        assert_eq!(result.total_cost, 10.0);
        // stable sort: the first two in input order win
        assert!(result.contains(0, 1));
        assert!(result.contains(1, 2));
    }

    #[test]
    fn test_required_edge_is_taken_before_cheaper_ones() {
        let nodes = line_nodes(3);
        let edges = [
            Edge::weighted(0, 1, 1.0),
            Edge::weighted(1, 2, 1.0),
            Edge::weighted(0, 2, 50.0).required(),
        ];
        let result = kruskal(&nodes, &edges);
        assert_eq!(result.selected_edges[0], SelectedEdge { from: 0, to: 2, weight: 50.0, is_required: true });
        assert_eq!(result.len(), 2);
        assert_eq!(result.total_cost, 51.0);
    }

    #[test]
    fn test_custom_weight_overrides_distance() {
        let nodes = line_nodes(2);
        let result = kruskal(&nodes, &[Edge::weighted(0, 1, 5.0)]);
        assert_eq!(result.len(), 1);
        assert_eq!(result.total_cost, 5.0);
    }

    #[test]
    fn test_disconnected_graph_yields_forest() {
        let nodes = line_nodes(5);
        let edges = [Edge::new(0, 1), Edge::new(1, 2), Edge::new(3, 4)];
        let result = kruskal(&nodes, &edges);
        // 5 nodes, 2 components
        assert_eq!(result.len(), 3);
        assert_eq!(result.total_cost, 300.0);
    }

    #[test]
    fn test_edges_to_unknown_nodes_are_dropped() {
        let nodes = line_nodes(3);
        let edges = [Edge::weighted(0, 9, 0.5), Edge::new(0, 1), Edge::new(1, 2)];
        let result = kruskal(&nodes, &edges);
        assert_eq!(result.len(), 2);
        assert!(!result.contains(0, 9));
    }
}
