//! Multi-stop routing over an engine-chosen visiting order.
//!
//! The only ordering implemented is exhaustive: every permutation of the
//! stops is tried, so the work grows as `k!` in the number of stops `k`.
//! That is fine up to roughly 8 stops and impractical past 10, which is why
//! [`WaypointEngine`] refuses more than `max_waypoints` up front. A
//! Held-Karp ordering (`O(2^k * k^2)`) can replace it behind
//! [`StopOrdering`] without changing the engine's contract.

use std::collections::HashMap;

use crate::error::{Result, RouteError};
use crate::graph::algos::dijkstra::DijkstraEngine;
use crate::graph::algos::shared::validate_endpoints;
use crate::graph::engine::{RouteEngine, RouteQuery};
use crate::graph::{Graph, NodeId, PathResult};

/// Upper bound on intermediate stops unless configured otherwise
pub const DEFAULT_MAX_WAYPOINTS: usize = 10;

/// Chooses the order in which intermediate stops are visited
pub trait StopOrdering {
    /// Cheapest route `query.start -> stops (some order) -> query.end`.
    ///
    /// `stops` is already validated, deduplicated and sorted.
    fn best_route(&self, graph: &Graph, query: &RouteQuery<'_>, stops: &[&str]) -> Result<PathResult>;
}

/// Shortest-path legs between stop pairs, computed once per pair
struct LegCache<'q, 'g> {
    graph: &'g Graph,
    query: &'q RouteQuery<'q>,
    legs: HashMap<(String, String), PathResult>,
}

impl<'q, 'g> LegCache<'q, 'g> {
    fn new(graph: &'g Graph, query: &'q RouteQuery<'q>) -> Self {
        LegCache {
            graph,
            query,
            legs: HashMap::new(),
        }
    }

    fn leg(&mut self, from: &str, to: &str) -> Result<PathResult> {
        let key = (from.to_string(), to.to_string());
        if let Some(leg) = self.legs.get(&key) {
            return Ok(leg.clone());
        }
        let leg_query = RouteQuery {
            start: from,
            end: to,
            weight: self.query.weight,
        };
        let leg = DijkstraEngine.solve(self.graph, &leg_query)?;
        self.legs.insert(key, leg.clone());
        Ok(leg)
    }

    fn len(&self) -> usize {
        self.legs.len()
    }
}

/// Tries every permutation of the stops
#[derive(Debug, Clone, Copy, Default)]
pub struct BruteForceOrdering;

impl BruteForceOrdering {
    /// Join the legs of one visiting order; `None` if any leg is unreachable
    fn compose(
        legs: &mut LegCache<'_, '_>,
        start: &str,
        end: &str,
        stops: &[&str],
        order: &[usize],
    ) -> Result<Option<PathResult>> {
        let sequence: Vec<&str> = std::iter::once(start)
            .chain(order.iter().map(|&i| stops[i]))
            .chain(std::iter::once(end))
            .collect();

        let mut path: Vec<NodeId> = Vec::new();
        let mut cost = 0.0;
        for pair in sequence.windows(2) {
            let leg = legs.leg(pair[0], pair[1])?;
            if !leg.is_found() {
                return Ok(None);
            }
            // the junction node already ends the previous leg
            let skip = usize::from(!path.is_empty());
            path.extend(leg.path.into_iter().skip(skip));
            cost += leg.cost;
        }
        Ok(Some(PathResult::new(path, cost)))
    }
}

impl StopOrdering for BruteForceOrdering {
    fn best_route(&self, graph: &Graph, query: &RouteQuery<'_>, stops: &[&str]) -> Result<PathResult> {
        let mut legs = LegCache::new(graph, query);
        let mut order: Vec<usize> = (0..stops.len()).collect();
        let mut best = PathResult::none();
        let mut permutations = 0usize;

        loop {
            permutations += 1;
            if let Some(candidate) = Self::compose(&mut legs, query.start, query.end, stops, &order)? {
                if candidate.cost < best.cost {
                    tracing::trace!(order = ?candidate.path, cost = candidate.cost, "new best ordering");
                    best = candidate;
                }
            }
            if !next_permutation(&mut order) {
                break;
            }
        }

        tracing::debug!(
            permutations,
            legs = legs.len(),
            found = best.is_found(),
            cost = best.cost,
            "waypoints_complete"
        );
        Ok(best)
    }
}

/// Rearrange `items` into the next lexicographic permutation.
/// Returns `false` (leaving `items` sorted descending) when none is left.
fn next_permutation(items: &mut [usize]) -> bool {
    let Some(pivot) = items.windows(2).rposition(|w| w[0] < w[1]) else {
        return false;
    };
    let Some(successor) = items.iter().rposition(|&x| x > items[pivot]) else {
        return false;
    };
    items.swap(pivot, successor);
    items[pivot + 1..].reverse();
    true
}

/// Route from start to end through every waypoint, in the cheapest order.
///
/// Each leg is a Dijkstra shortest path under the query's weight. With no
/// waypoints the result is exactly Dijkstra's. Repeated waypoints count
/// once.
#[derive(Debug, Clone, Copy)]
pub struct WaypointEngine<'w, O = BruteForceOrdering> {
    pub waypoints: &'w [NodeId],
    pub max_waypoints: usize,
    pub ordering: O,
}

impl<'w> WaypointEngine<'w> {
    pub fn new(waypoints: &'w [NodeId]) -> Self {
        WaypointEngine {
            waypoints,
            max_waypoints: DEFAULT_MAX_WAYPOINTS,
            ordering: BruteForceOrdering,
        }
    }
}

impl<'w, O> WaypointEngine<'w, O> {
    pub fn with_max_waypoints(mut self, max_waypoints: usize) -> Self {
        self.max_waypoints = max_waypoints;
        self
    }

    pub fn with_ordering<P: StopOrdering>(self, ordering: P) -> WaypointEngine<'w, P> {
        WaypointEngine {
            waypoints: self.waypoints,
            max_waypoints: self.max_waypoints,
            ordering,
        }
    }

    /// Validated, deduplicated, sorted stops
    fn stops(&self, graph: &Graph) -> Result<Vec<&'w str>> {
        for waypoint in self.waypoints {
            graph.require_node(waypoint)?;
        }
        let mut stops: Vec<&str> = self.waypoints.iter().map(String::as_str).collect();
        stops.sort_unstable();
        stops.dedup();
        if stops.len() > self.max_waypoints {
            return Err(RouteError::invalid_value(
                "waypoint count",
                format!("{} (maximum {})", stops.len(), self.max_waypoints),
            ));
        }
        Ok(stops)
    }
}

impl<O: StopOrdering> RouteEngine for WaypointEngine<'_, O> {
    fn name(&self) -> &'static str {
        "waypoints"
    }

    #[tracing::instrument(skip(self, graph, query), fields(start = %query.start, end = %query.end, waypoints = self.waypoints.len()))]
    fn solve(&self, graph: &Graph, query: &RouteQuery<'_>) -> Result<PathResult> {
        validate_endpoints(graph, query)?;
        let stops = self.stops(graph)?;
        self.ordering.best_route(graph, query, &stops)
    }
}

/// Cheapest route from `query.start` to `query.end` visiting every waypoint
pub fn waypoints(graph: &Graph, query: &RouteQuery<'_>, waypoints: &[NodeId]) -> Result<PathResult> {
    WaypointEngine::new(waypoints).solve(graph, query)
}
