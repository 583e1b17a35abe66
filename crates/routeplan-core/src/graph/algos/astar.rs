use crate::error::Result;
use crate::graph::algos::shared::{best_first, validate_endpoints};
use crate::graph::engine::{RouteEngine, RouteQuery};
use crate::graph::{Graph, HeuristicTable, PathResult};

/// Heuristic-guided exact search.
///
/// Frontier priority is `cost_so_far + heuristic(node)`. Nodes missing
/// from the heuristic table have infinite priority: they are expanded only
/// after every finite-priority node, in plain cost order, so a missing
/// entry never hides a reachable goal.
///
/// The result is optimal only when the heuristic is admissible (it never
/// overestimates the true remaining cost). Admissibility is the caller's
/// responsibility and is not checked here. Edge weights must be
/// non-negative, as for Dijkstra.
#[derive(Debug, Clone, Copy)]
pub struct AStarEngine<'h> {
    pub heuristics: &'h HeuristicTable,
}

impl<'h> AStarEngine<'h> {
    pub fn new(heuristics: &'h HeuristicTable) -> Self {
        AStarEngine { heuristics }
    }
}

impl RouteEngine for AStarEngine<'_> {
    fn name(&self) -> &'static str {
        "astar"
    }

    #[tracing::instrument(skip(self, graph, query), fields(start = %query.start, end = %query.end, heuristics = self.heuristics.len()))]
    fn solve(&self, graph: &Graph, query: &RouteQuery<'_>) -> Result<PathResult> {
        validate_endpoints(graph, query)?;
        if query.start == query.end {
            return Ok(PathResult::trivial(query.start));
        }

        let (result, stats) = best_first(graph, query, |node| self.heuristics.get(node));
        tracing::debug!(
            expanded = stats.expanded,
            pushed = stats.pushed,
            found = result.is_found(),
            cost = result.cost,
            "astar_complete"
        );
        Ok(result)
    }
}

/// A* search from `query.start` to `query.end` guided by `heuristics`
pub fn astar(
    graph: &Graph,
    query: &RouteQuery<'_>,
    heuristics: &HeuristicTable,
) -> Result<PathResult> {
    AStarEngine::new(heuristics).solve(graph, query)
}
