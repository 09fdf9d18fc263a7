/*!
Connectivity queries over a node/edge snapshot.

Edges naming a node that is not in the node set are ignored, the same way the
spanning-tree algorithms skip them.
*/

use std::collections::HashSet;

use petgraph::{graphmap::UnGraphMap, visit::Bfs};

use crate::network::{
    edge::Edge,
    node::{Node, NodeId},
};

/// Undirected adjacency over the ids of `nodes`, keeping only edges whose endpoints both exist.
fn adjacency(nodes: &[Node], edges: &[Edge]) -> UnGraphMap<NodeId, ()> {
    let mut graph = UnGraphMap::with_capacity(nodes.len(), edges.len());
    for node in nodes {
        graph.add_node(node.id);
    }
    for edge in edges {
        if graph.contains_node(edge.from) && graph.contains_node(edge.to) {
            graph.add_edge(edge.from, edge.to, ());
        }
    }
    graph
}

/// Whether every node is reachable from the first one. Graphs with 0 or 1 nodes are connected.
pub fn is_connected(nodes: &[Node], edges: &[Edge]) -> bool {
    let Some(start) = nodes.first() else {
        return true;
    };
    if nodes.len() == 1 {
        return true;
    }

    let graph = adjacency(nodes, edges);
    let mut bfs = Bfs::new(&graph, start.id);
    let mut reached = 0;
    while bfs.next(&graph).is_some() {
        reached += 1;
    }
    reached == graph.node_count()
}

pub fn count_connected_components(nodes: &[Node], edges: &[Edge]) -> usize {
    let graph = adjacency(nodes, edges);
    let mut visited: HashSet<NodeId> = HashSet::with_capacity(nodes.len());
    let mut components = 0;

    for node in nodes {
        if visited.contains(&node.id) {
            continue;
        }
        components += 1;
        let mut bfs = Bfs::new(&graph, node.id);
        while let Some(reached) = bfs.next(&graph) {
            visited.insert(reached);
        }
    }
    components
}

pub fn is_self_loop(from: NodeId, to: NodeId) -> bool {
    from == to
}

/// Whether `edges` already holds a route between `from` and `to` in either direction.
pub fn is_duplicate_edge(from: NodeId, to: NodeId, edges: &[Edge]) -> bool {
    edges.iter().any(|edge| edge.connects(from, to))
}

/// Upper bound on undirected simple edges for `n` nodes.
pub fn max_edges(n: usize) -> usize {
    n * n.saturating_sub(1) / 2
}

pub fn degree(edges: &[Edge], id: NodeId) -> usize {
    edges.iter().filter(|edge| edge.touches(id)).count()
}
