//! Route engine implementations
//!
//! - `dijkstra`: exact shortest path
//! - `astar`: heuristic-guided exact search
//! - `greedy`: nearest-heuristic walk
//! - `waypoints`: best visiting order over intermediate stops
//! - `shared`: frontier, path reconstruction and validation helpers

pub mod astar;
pub mod dijkstra;
pub mod greedy;
pub mod shared;
pub mod waypoints;

pub use astar::{astar, AStarEngine};
pub use dijkstra::{dijkstra, DijkstraEngine};
pub use greedy::{greedy, GreedyEngine};
pub use shared::{best_first, path_cost, reconstruct_path, validate_endpoints, HeapEntry, SearchStats};
pub use waypoints::{waypoints, BruteForceOrdering, StopOrdering, WaypointEngine, DEFAULT_MAX_WAYPOINTS};
