use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::weight::{WeightKind, WeightResolver};
use super::{Graph, PathResult};
use crate::error::{Result, RouteError};

/// Endpoints and weight of a single route query
#[derive(Clone, Copy)]
pub struct RouteQuery<'a> {
    pub start: &'a str,
    pub end: &'a str,
    pub weight: &'a dyn WeightResolver,
}

impl<'a> RouteQuery<'a> {
    /// Query weighted by traffic-adjusted distance
    pub fn new(start: &'a str, end: &'a str) -> Self {
        RouteQuery {
            start,
            end,
            weight: &WeightKind::AdjustedDistance,
        }
    }

    pub fn with_weight(mut self, weight: &'a dyn WeightResolver) -> Self {
        self.weight = weight;
        self
    }
}

impl fmt::Debug for RouteQuery<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteQuery")
            .field("start", &self.start)
            .field("end", &self.end)
            .finish_non_exhaustive()
    }
}

/// A pathfinding strategy over a [`Graph`].
///
/// Implementations validate the query endpoints (and any auxiliary nodes)
/// before searching, returning `UnknownNode` for nodes absent from the
/// graph. Every other failure to reach `end` is reported as
/// [`PathResult::none`], never as an error.
pub trait RouteEngine {
    fn name(&self) -> &'static str;
    fn solve(&self, graph: &Graph, query: &RouteQuery<'_>) -> Result<PathResult>;
}

/// The available route engines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Exact shortest path
    #[default]
    Dijkstra,
    /// Heuristic-guided exact search (admissible heuristic required)
    #[serde(alias = "a_star")]
    AStar,
    /// Nearest-heuristic walk, no optimality guarantee
    Greedy,
    /// Best visiting order over required intermediate stops
    #[serde(alias = "tsp")]
    Waypoints,
}

impl Strategy {
    pub const ALL: [Strategy; 4] = [
        Strategy::Dijkstra,
        Strategy::AStar,
        Strategy::Greedy,
        Strategy::Waypoints,
    ];

    /// Human-facing label
    pub fn label(&self) -> &'static str {
        match self {
            Strategy::Dijkstra => "Dijkstra",
            Strategy::AStar => "A*",
            Strategy::Greedy => "Greedy",
            Strategy::Waypoints => "Waypoints",
        }
    }
}

impl FromStr for Strategy {
    type Err = RouteError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "dijkstra" => Ok(Strategy::Dijkstra),
            "astar" | "a_star" | "a-star" | "a*" => Ok(Strategy::AStar),
            "greedy" => Ok(Strategy::Greedy),
            "waypoints" | "tsp" => Ok(Strategy::Waypoints),
            other => Err(RouteError::UnknownStrategy(other.to_string())),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Dijkstra => write!(f, "dijkstra"),
            Strategy::AStar => write!(f, "astar"),
            Strategy::Greedy => write!(f, "greedy"),
            Strategy::Waypoints => write!(f, "waypoints"),
        }
    }
}
