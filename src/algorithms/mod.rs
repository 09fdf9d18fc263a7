/*!
Pure graph algorithms over node/edge snapshots.

- `union_find`: disjoint-set forest used for cycle detection.
- `connectivity`: BFS connectivity and component counting, plus small edge helpers.
- `validate`: eligibility checks gating spanning-tree computation.
- `mst`: result types and algorithm dispatch; `kruskal` and `prim` hold the two strategies.
*/

pub mod connectivity;
pub mod kruskal;
pub mod mst;
pub mod prim;
pub mod union_find;
pub mod validate;

pub use mst::{Algorithm, MstResult, SelectedEdge, compute};
pub use validate::{InvalidReason, Validation, validate_for_mst, validate_for_mst_strict};
