use std::collections::HashMap;

use petgraph::stable_graph::{EdgeIndex, NodeIndex, StableUnGraph};
use rand::Rng;
use thiserror::Error;

use crate::{
    geometry::{Position, euclidean_distance},
    network::{
        edge::{Edge, UndirectedEdgeKey},
        node::{Node, NodeId, default_label},
        snapshot::GraphSnapshot,
    },
};

/// Drawn radius of a station.
pub const NODE_RADIUS: f64 = 20.0;
/// Minimum distance between two station centres.
pub const MIN_NODE_DISTANCE: f64 = NODE_RADIUS * 2.5;
/// Stations a single graph may hold.
pub const MAX_NODES: usize = 50;
/// Random placement attempts before giving up on a station.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 100;
/// Margin kept free at the top of the placement area.
pub const PLACEMENT_PADDING_TOP: f64 = 80.0;
/// Margin kept free at the left, right and bottom of the placement area.
pub const PLACEMENT_PADDING_SIDE: f64 = 60.0;

#[derive(Debug, Error)]
pub enum GraphError {
    #[error("Route {0} - {0} would connect a station to itself")]
    SelfLoop(NodeId),
    #[error("Route {0} - {1} already exists")]
    Duplicate(NodeId, NodeId),
    #[error("Station not found: {0}")]
    UnknownNode(NodeId),
    #[error("Route not found: {0} - {1}")]
    UnknownEdge(NodeId, NodeId),
    #[error("Duplicate station id: {0}")]
    DuplicateNode(NodeId),
    #[error("Position ({x:.1}, {y:.1}) is too close to station {existing}")]
    TooClose { x: f64, y: f64, existing: NodeId },
    #[error("No free position found for a new station")]
    NoFreeSpace,
    #[error("Only {available} more stations can be added ({current}/{max})")]
    CapacityExceeded { available: usize, current: usize, max: usize },
    #[error("Every station id has been handed out")]
    IdSpaceExhausted,
    #[error("Invalid graph JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Editable station/route graph.
///
/// Station ids come from a counter that only grows, so an id is never handed out
/// twice even after its station is removed. `node_id_to_index_map` maps those ids
/// to petgraph indices.
#[derive(Debug, Clone, Default)]
pub struct NetworkGraph {
    graph: StableUnGraph<Node, Edge>,
    node_id_to_index_map: HashMap<NodeId, NodeIndex>,
    // Wider than `NodeId` so the counter can step past `NodeId::MAX`.
    next_id: u64,
}

impl NetworkGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds a graph from a snapshot, applying the same route rules as `add_edge`.
    /// Station spacing is not enforced, `rearrange` can fix it afterwards.
    pub fn from_snapshot(snapshot: GraphSnapshot) -> Result<Self, GraphError> {
        let mut graph = NetworkGraph::new();
        for node in snapshot.nodes {
            if graph.node_id_to_index_map.contains_key(&node.id) {
                return Err(GraphError::DuplicateNode(node.id));
            }
            graph.next_id = graph.next_id.max(u64::from(node.id) + 1);
            graph.insert_node(node);
        }
        for edge in snapshot.edges {
            graph.add_edge(edge)?;
        }
        Ok(graph)
    }

    pub fn from_json(json: &str) -> Result<Self, GraphError> {
        Self::from_snapshot(GraphSnapshot::from_json(json)?)
    }

    /// Nodes ordered by id, edges in storage order.
    pub fn snapshot(&self) -> GraphSnapshot {
        let mut nodes: Vec<Node> = self.graph.node_weights().cloned().collect();
        nodes.sort_by_key(|node| node.id);
        let edges = self.graph.edge_weights().cloned().collect();
        GraphSnapshot::new(nodes, edges)
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.node_id_to_index_map
            .get(&id)
            .and_then(|&index| self.graph.node_weight(index))
    }

    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.graph.node_weights()
    }

    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.graph.edge_weights()
    }

    pub fn edge(&self, a: NodeId, b: NodeId) -> Option<&Edge> {
        self.edge_index(a, b)
            .and_then(|index| self.graph.edge_weight(index))
    }

    /// Id the next added station will receive, `None` once ids have run out.
    pub fn next_id(&self) -> Option<NodeId> {
        NodeId::try_from(self.next_id).ok()
    }

    fn index_of(&self, id: NodeId) -> Result<NodeIndex, GraphError> {
        self.node_id_to_index_map
            .get(&id)
            .copied()
            .ok_or(GraphError::UnknownNode(id))
    }

    fn edge_index(&self, a: NodeId, b: NodeId) -> Option<EdgeIndex> {
        let (a, b) = (*self.node_id_to_index_map.get(&a)?, *self.node_id_to_index_map.get(&b)?);
        self.graph.find_edge(a, b)
    }

    fn insert_node(&mut self, node: Node) -> NodeId {
        let id = node.id;
        let index = self.graph.add_node(node);
        self.node_id_to_index_map.insert(id, index);
        id
    }

    fn allocate_id(&mut self) -> Result<NodeId, GraphError> {
        let id = NodeId::try_from(self.next_id).map_err(|_| GraphError::IdSpaceExhausted)?;
        self.next_id += 1;
        Ok(id)
    }

    fn nearest_conflict(&self, position: &Position) -> Option<NodeId> {
        self.graph
            .node_weights()
            .find(|node| euclidean_distance(&node.position, position) < MIN_NODE_DISTANCE)
            .map(|node| node.id)
    }

    fn check_capacity(&self, requested: usize) -> Result<(), GraphError> {
        let current = self.node_count();
        let available = MAX_NODES.saturating_sub(current);
        if requested > available {
            return Err(GraphError::CapacityExceeded {
                available,
                current,
                max: MAX_NODES,
            });
        }
        Ok(())
    }

    /// Adds a station at `position`. Without a label it is named `V{id}`.
    pub fn add_node(&mut self, position: Position, label: Option<String>) -> Result<NodeId, GraphError> {
        self.check_capacity(1)?;
        if let Some(existing) = self.nearest_conflict(&position) {
            log::warn!(
                "Refusing station at ({:.1}, {:.1}): too close to station {}",
                position.x,
                position.y,
                existing
            );
            return Err(GraphError::TooClose {
                x: position.x,
                y: position.y,
                existing,
            });
        }
        let id = self.allocate_id()?;
        let label = label.unwrap_or_else(|| default_label(id));
        Ok(self.insert_node(Node::new(id, position, label)))
    }

    /// Adds a station at a random free position inside a `width` x `height` area.
    pub fn add_random_node<R: Rng + ?Sized>(
        &mut self,
        width: f64,
        height: f64,
        label: Option<String>,
        rng: &mut R,
    ) -> Result<NodeId, GraphError> {
        let position = self
            .find_free_position(width, height, rng)
            .ok_or(GraphError::NoFreeSpace)?;
        self.add_node(position, label)
    }

    /// Adds `count` randomly placed stations, or one per name when `names` is given.
    /// Generated labels continue the `Station k` numbering from the current station count.
    ///
    /// Fails up front if the batch would exceed `MAX_NODES`; otherwise stops at the
    /// first station that cannot be placed, keeping the ones already added.
    pub fn add_random_nodes<R: Rng + ?Sized>(
        &mut self,
        count: usize,
        names: Option<&[String]>,
        width: f64,
        height: f64,
        rng: &mut R,
    ) -> Result<Vec<NodeId>, GraphError> {
        let count = names.map_or(count, <[String]>::len);
        self.check_capacity(count)?;

        let first_number = self.node_count() + 1;
        let mut added = Vec::with_capacity(count);
        for i in 0..count {
            let label = match names {
                Some(names) => names[i].clone(),
                None => format!("Station {}", first_number + i),
            };
            match self.add_random_node(width, height, Some(label), rng) {
                Ok(id) => added.push(id),
                Err(e) => {
                    log::warn!("Placed {} of {} stations: {}", added.len(), count, e);
                    return Err(e);
                }
            }
        }
        Ok(added)
    }

    fn find_free_position<R: Rng + ?Sized>(&self, width: f64, height: f64, rng: &mut R) -> Option<Position> {
        let (min_x, max_x) = (PLACEMENT_PADDING_SIDE, width - PLACEMENT_PADDING_SIDE);
        let (min_y, max_y) = (PLACEMENT_PADDING_TOP, height - PLACEMENT_PADDING_SIDE);
        if min_x >= max_x || min_y >= max_y {
            return None;
        }

        (0..MAX_PLACEMENT_ATTEMPTS)
            .map(|_| Position::new(rng.random_range(min_x..max_x), rng.random_range(min_y..max_y)))
            .find(|candidate| self.nearest_conflict(candidate).is_none())
    }

    /// Removes a station and every route touching it. Its id is not reused.
    pub fn remove_node(&mut self, id: NodeId) -> Result<Node, GraphError> {
        let index = self.index_of(id)?;
        self.node_id_to_index_map.remove(&id);
        self.graph
            .remove_node(index)
            .ok_or(GraphError::UnknownNode(id))
    }

    pub fn move_node(&mut self, id: NodeId, position: Position) -> Result<(), GraphError> {
        let index = self.index_of(id)?;
        if let Some(node) = self.graph.node_weight_mut(index) {
            node.position = position;
        }
        Ok(())
    }

    pub fn rename_node(&mut self, id: NodeId, label: impl Into<String>) -> Result<(), GraphError> {
        let index = self.index_of(id)?;
        if let Some(node) = self.graph.node_weight_mut(index) {
            node.label = label.into();
        }
        Ok(())
    }

    /// Adds a route. Self-loops, routes to unknown stations and duplicates (in either direction) are rejected.
    pub fn add_edge(&mut self, edge: Edge) -> Result<(), GraphError> {
        if edge.from == edge.to {
            return Err(GraphError::SelfLoop(edge.from));
        }
        let from = self.index_of(edge.from)?;
        let to = self.index_of(edge.to)?;
        if self.graph.find_edge(from, to).is_some() {
            let (a, b) = UndirectedEdgeKey::new(edge.from, edge.to).endpoints();
            log::warn!("Refusing duplicate route {} - {}", a, b);
            return Err(GraphError::Duplicate(edge.from, edge.to));
        }
        self.graph.add_edge(from, to, edge);
        Ok(())
    }

    pub fn remove_edge(&mut self, a: NodeId, b: NodeId) -> Option<Edge> {
        let index = self.edge_index(a, b)?;
        self.graph.remove_edge(index)
    }

    fn edge_mut(&mut self, a: NodeId, b: NodeId) -> Result<&mut Edge, GraphError> {
        self.index_of(a)?;
        self.index_of(b)?;
        let index = self.edge_index(a, b).ok_or(GraphError::UnknownEdge(a, b))?;
        self.graph
            .edge_weight_mut(index)
            .ok_or(GraphError::UnknownEdge(a, b))
    }

    /// Sets an explicit weight, or clears it with `None` so the distance is used again.
    pub fn set_edge_weight(&mut self, a: NodeId, b: NodeId, weight: Option<f64>) -> Result<(), GraphError> {
        self.edge_mut(a, b)?.weight = weight;
        Ok(())
    }

    pub fn set_edge_required(&mut self, a: NodeId, b: NodeId, required: bool) -> Result<(), GraphError> {
        self.edge_mut(a, b)?.is_required = required;
        Ok(())
    }

    /// Pushes stations apart so no pair is closer than `MIN_NODE_DISTANCE`.
    ///
    /// Stations are visited in id order; a later station that sits too close to an
    /// earlier one is moved out along the line joining them. A single pass is made,
    /// so a moved station may end up close to a third one.
    pub fn rearrange(&mut self) {
        let mut ids: Vec<NodeId> = self.node_id_to_index_map.keys().copied().collect();
        ids.sort_unstable();
        let mut positions: Vec<Position> = ids
            .iter()
            .filter_map(|id| self.node(*id).map(|node| node.position))
            .collect();

        for i in 0..positions.len() {
            for j in (i + 1)..positions.len() {
                let dx = positions[i].x - positions[j].x;
                let dy = positions[i].y - positions[j].y;
                if (dx * dx + dy * dy).sqrt() < MIN_NODE_DISTANCE {
                    let angle = dy.atan2(dx);
                    positions[j] = Position::new(
                        positions[i].x - angle.cos() * MIN_NODE_DISTANCE,
                        positions[i].y - angle.sin() * MIN_NODE_DISTANCE,
                    );
                }
            }
        }

        for (id, position) in ids.into_iter().zip(positions) {
            if let Some(&index) = self.node_id_to_index_map.get(&id) {
                if let Some(node) = self.graph.node_weight_mut(index) {
                    node.position = position;
                }
            }
        }
    }

    /// Removes every station and route. The id counter keeps running.
    pub fn clear(&mut self) {
        self.graph.clear();
        self.node_id_to_index_map.clear();
    }
}
