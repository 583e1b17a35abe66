use crate::error::Result;
use crate::graph::algos::shared::{best_first, validate_endpoints};
use crate::graph::engine::{RouteEngine, RouteQuery};
use crate::graph::{Graph, PathResult};

/// Exact single-pair shortest path.
///
/// Edge weights must be non-negative. This is a precondition, not a
/// checked invariant: a negative weight gives undefined results.
///
/// Ties are broken deterministically. The frontier pops the smallest
/// `(cost, node_id)` first and a node keeps the first predecessor that
/// reached it at its final cost.
#[derive(Debug, Clone, Copy, Default)]
pub struct DijkstraEngine;

impl RouteEngine for DijkstraEngine {
    fn name(&self) -> &'static str {
        "dijkstra"
    }

    #[tracing::instrument(skip(self, graph, query), fields(start = %query.start, end = %query.end))]
    fn solve(&self, graph: &Graph, query: &RouteQuery<'_>) -> Result<PathResult> {
        validate_endpoints(graph, query)?;
        if query.start == query.end {
            return Ok(PathResult::trivial(query.start));
        }

        let (result, stats) = best_first(graph, query, |_| 0.0);
        tracing::debug!(
            expanded = stats.expanded,
            pushed = stats.pushed,
            found = result.is_found(),
            cost = result.cost,
            "dijkstra_complete"
        );
        Ok(result)
    }
}

/// Shortest path from `query.start` to `query.end`
pub fn dijkstra(graph: &Graph, query: &RouteQuery<'_>) -> Result<PathResult> {
    DijkstraEngine.solve(graph, query)
}
