/*!
Minimum spanning trees over station/route graphs.

Structure:
- `network`: station and route records, the editable `NetworkGraph` and immutable `GraphSnapshot`s.
- `algorithms`: disjoint-set, connectivity, eligibility validation and the two spanning-tree strategies.
- `geometry`: distances between stations and conversion to display units.
- `samples`: ready-made station layouts.
- `solver`: `solve`, which validates a snapshot and then computes its tree.

Everything is synchronous and works on snapshots passed in by the caller; no
state is shared between calls.
*/

pub mod algorithms;
pub mod geometry;
pub mod network;
pub mod samples;
pub mod solver;

pub use algorithms::{Algorithm, InvalidReason, MstResult, SelectedEdge, Validation, compute, validate_for_mst};
pub use geometry::{DEFAULT_DISTANCE_SCALE, Position, euclidean_distance, to_display_units};
pub use network::{
    edge::Edge,
    network_graph::{GraphError, NetworkGraph},
    node::{Node, NodeId},
    snapshot::GraphSnapshot,
};
pub use solver::{Solution, SolveConfig, SolveError, solve};
