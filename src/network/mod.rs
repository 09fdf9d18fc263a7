/*
 * This module defines the station/route graph model.
 * It provides the editable graph, the node and edge records, and immutable snapshots for the algorithms.
 */

pub mod edge;
pub mod network_graph;
pub mod node;
pub mod snapshot;
