//! Strategy dispatch over the current graph snapshot

use serde::Serialize;

use crate::config::PlannerConfig;
use crate::error::Result;
use crate::graph::{
    AStarEngine, DijkstraEngine, Graph, GreedyEngine, HeuristicTable, NodeId, PathResult,
    RouteEngine, RouteQuery, Strategy, WaypointEngine, WeightKind, DEFAULT_MAX_WAYPOINTS,
};
use crate::snapshot::{GraphSnapshot, SnapshotStore};

/// Everything needed to run one engine
#[derive(Debug, Clone, Copy)]
pub struct RouteRequest<'a> {
    pub strategy: Strategy,
    pub start: &'a str,
    pub end: &'a str,
    /// Only read by [`Strategy::Waypoints`]
    pub waypoints: &'a [NodeId],
    pub weight: WeightKind,
    pub max_waypoints: usize,
}

impl<'a> RouteRequest<'a> {
    pub fn new(start: &'a str, end: &'a str) -> Self {
        RouteRequest {
            strategy: Strategy::default(),
            start,
            end,
            waypoints: &[],
            weight: WeightKind::default(),
            max_waypoints: DEFAULT_MAX_WAYPOINTS,
        }
    }

    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_waypoints(mut self, waypoints: &'a [NodeId]) -> Self {
        self.waypoints = waypoints;
        self
    }

    pub fn with_weight(mut self, weight: WeightKind) -> Self {
        self.weight = weight;
        self
    }
}

/// Outcome of a request, labelled with what was asked
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteReport {
    pub strategy: Strategy,
    pub start: NodeId,
    pub end: NodeId,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub waypoints: Vec<NodeId>,
    pub weight: WeightKind,
    pub found: bool,
    #[serde(flatten)]
    pub result: PathResult,
}

impl RouteReport {
    fn new(request: &RouteRequest<'_>, result: PathResult) -> Self {
        let waypoints = match request.strategy {
            Strategy::Waypoints => request.waypoints.to_vec(),
            _ => Vec::new(),
        };
        RouteReport {
            strategy: request.strategy,
            start: request.start.to_string(),
            end: request.end.to_string(),
            waypoints,
            weight: request.weight,
            found: result.is_found(),
            result,
        }
    }
}

/// Run the engine `request.strategy` names
pub fn plan(graph: &Graph, heuristics: &HeuristicTable, request: &RouteRequest<'_>) -> Result<PathResult> {
    let query = RouteQuery::new(request.start, request.end).with_weight(&request.weight);
    if request.strategy != Strategy::Waypoints && !request.waypoints.is_empty() {
        tracing::warn!(strategy = %request.strategy, "waypoints are ignored by this strategy");
    }

    match request.strategy {
        Strategy::Dijkstra => DijkstraEngine.solve(graph, &query),
        Strategy::AStar => AStarEngine::new(heuristics).solve(graph, &query),
        Strategy::Greedy => GreedyEngine::new(heuristics).solve(graph, &query),
        Strategy::Waypoints => WaypointEngine::new(request.waypoints)
            .with_max_waypoints(request.max_waypoints)
            .solve(graph, &query),
    }
}

/// Answers route requests against the published snapshot
#[derive(Debug)]
pub struct Planner {
    snapshots: SnapshotStore,
    config: PlannerConfig,
}

impl Planner {
    pub fn new(snapshot: GraphSnapshot, config: PlannerConfig) -> Self {
        Planner {
            snapshots: SnapshotStore::new(snapshot),
            config,
        }
    }

    pub fn snapshots(&self) -> &SnapshotStore {
        &self.snapshots
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// A request seeded with the configured strategy, weight and waypoint limit
    pub fn request<'a>(&self, start: &'a str, end: &'a str) -> RouteRequest<'a> {
        RouteRequest {
            strategy: self.config.strategy,
            weight: self.config.weight,
            max_waypoints: self.config.max_waypoints,
            ..RouteRequest::new(start, end)
        }
    }

    #[tracing::instrument(skip(self, request), fields(strategy = %request.strategy, start = %request.start, end = %request.end))]
    pub fn route(&self, request: &RouteRequest<'_>) -> Result<RouteReport> {
        let snapshot = self.snapshots.current();
        let result = plan(&snapshot.graph, &snapshot.heuristics, request)?;
        Ok(RouteReport::new(request, result))
    }

    /// Run every strategy on the same snapshot.
    ///
    /// The waypoint engine only runs when the request has waypoints.
    pub fn compare(&self, request: &RouteRequest<'_>) -> Result<Vec<RouteReport>> {
        let snapshot = self.snapshots.current();
        let mut reports = Vec::new();
        for strategy in Strategy::ALL {
            let waypoints: &[NodeId] = match strategy {
                Strategy::Waypoints if request.waypoints.is_empty() => continue,
                Strategy::Waypoints => request.waypoints,
                _ => &[],
            };
            let request = RouteRequest {
                strategy,
                waypoints,
                ..*request
            };
            let result = plan(&snapshot.graph, &snapshot.heuristics, &request)?;
            reports.push(RouteReport::new(&request, result));
        }
        Ok(reports)
    }
}
