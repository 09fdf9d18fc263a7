use std::collections::{HashMap, HashSet};

use crate::{
    algorithms::mst::{MstResult, SelectedEdge, resolve_edge},
    network::{
        edge::Edge,
        node::{Node, NodeId},
        snapshot::NodeIndexMap,
    },
};

/// Whether `candidate` should replace the current best frontier route.
/// A required route beats any optional one; otherwise the lighter route wins.
fn beats(candidate: &SelectedEdge, best: &SelectedEdge) -> bool {
    match (candidate.is_required, best.is_required) {
        (true, false) => true,
        (false, true) => false,
        _ => candidate.weight < best.weight,
    }
}

/// Frontier-growth spanning tree starting at `start` (or the first node if `start`
/// is absent or unknown). When the frontier runs dry with stations left over, growth
/// restarts from the first unreached station, so a disconnected snapshot yields a
/// spanning forest with one tree per component. This deliberately replaces an
/// early exit, so both strategies return `n - components` edges.
///
/// Each scan is over all (visited, unvisited) pairs, so a run is `O(V^2)` lookups
/// per selected edge.
pub fn prim(nodes: &[Node], edges: &[Edge], start: Option<NodeId>) -> MstResult {
    let mut result = MstResult::default();
    if nodes.len() < 2 {
        return result;
    }

    let index = NodeIndexMap::new(nodes);

    // Both orientations resolve to the same route, oriented away from the lookup's first id.
    let mut lookup: HashMap<(NodeId, NodeId), SelectedEdge> = HashMap::with_capacity(edges.len() * 2);
    for edge in edges {
        if let Some(resolved) = resolve_edge(&index, edge) {
            lookup.insert((resolved.from, resolved.to), resolved);
            lookup.insert((resolved.to, resolved.from), resolved.reversed());
        }
    }

    let start = match start {
        Some(id) if index.contains(id) => id,
        Some(id) => {
            log::debug!("Start node {} not in snapshot, starting from first node", id);
            nodes[0].id
        }
        None => nodes[0].id,
    };

    // Insertion order of `tree` fixes the scan order, so ties go to the earliest reached node.
    let mut tree: Vec<NodeId> = vec![start];
    let mut visited: HashSet<NodeId> = HashSet::from([start]);

    while visited.len() < nodes.len() {
        let mut best: Option<SelectedEdge> = None;
        for from in &tree {
            for node in nodes {
                if visited.contains(&node.id) {
                    continue;
                }
                let Some(candidate) = lookup.get(&(*from, node.id)) else {
                    continue;
                };
                if best.is_none_or(|current| beats(candidate, &current)) {
                    best = Some(*candidate);
                }
            }
        }

        let Some(edge) = best else {
            match nodes.iter().find(|node| !visited.contains(&node.id)) {
                Some(next) => {
                    visited.insert(next.id);
                    tree.push(next.id);
                    continue;
                }
                None => break,
            }
        };
        result.push(edge);
        visited.insert(edge.to);
        tree.push(edge.to);
    }
    result
}
