//! Road graph model and route engines
//!
//! - `model`: directed graph with traffic-adjusted edge weights
//! - `weight`: pluggable edge weighting
//! - `engine`: route query, engine trait and strategy selection
//! - `algos`: Dijkstra, A*, greedy and waypoint engines

pub mod algos;
pub mod engine;
pub mod model;
pub mod types;
pub mod weight;

pub use algos::{
    astar, dijkstra, greedy, waypoints, AStarEngine, BruteForceOrdering, DijkstraEngine,
    GreedyEngine, StopOrdering, WaypointEngine, DEFAULT_MAX_WAYPOINTS,
};
pub use engine::{RouteEngine, RouteQuery, Strategy};
pub use model::Graph;
pub use types::{Edge, EdgeAttributes, HeuristicTable, NodeId, PathResult};
pub use weight::{WeightKind, WeightResolver};
