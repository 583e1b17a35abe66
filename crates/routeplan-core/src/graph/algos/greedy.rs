use std::collections::HashSet;

use crate::error::Result;
use crate::graph::algos::shared::{path_cost, validate_endpoints};
use crate::graph::engine::{RouteEngine, RouteQuery};
use crate::graph::{Graph, HeuristicTable, NodeId, PathResult};

/// Why a greedy walk stopped short of the goal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkStop {
    /// The current node has no outgoing edges
    DeadEnd,
    /// Every neighbor was already visited; moving on would revisit
    Revisit,
    /// The step bound (node count) ran out
    Exhausted,
}

/// Nearest-heuristic walk.
///
/// From `start`, repeatedly step to the unvisited neighbor with the lowest
/// heuristic value (ties by node id, missing entries last) until `end` is
/// reached. The reported cost is the actual weight of the edges walked.
///
/// No optimality guarantee: the walk can take an expensive route or stop
/// at a dead end even when the goal is reachable. Both outcomes are
/// [`PathResult::none`], not errors.
#[derive(Debug, Clone, Copy)]
pub struct GreedyEngine<'h> {
    pub heuristics: &'h HeuristicTable,
}

impl<'h> GreedyEngine<'h> {
    pub fn new(heuristics: &'h HeuristicTable) -> Self {
        GreedyEngine { heuristics }
    }

    /// Walk from `start` toward `end`, returning the visited sequence or
    /// the reason the walk stopped
    fn walk(&self, graph: &Graph, start: &str, end: &str) -> std::result::Result<Vec<NodeId>, WalkStop> {
        let mut visited: HashSet<&str> = HashSet::new();
        let mut path = vec![start.to_string()];
        let mut current = start;

        for _ in 0..graph.node_count() {
            visited.insert(current);

            let mut neighbors = graph.neighbors(current).peekable();
            if neighbors.peek().is_none() {
                return Err(WalkStop::DeadEnd);
            }

            let next = neighbors
                .filter(|n| !visited.contains(n))
                .min_by(|a, b| {
                    self.heuristics
                        .get(a)
                        .total_cmp(&self.heuristics.get(b))
                        .then_with(|| a.cmp(b))
                })
                .ok_or(WalkStop::Revisit)?;

            tracing::trace!(from = current, to = next, h = self.heuristics.get(next), "step");
            path.push(next.to_string());
            if next == end {
                return Ok(path);
            }
            current = next;
        }

        Err(WalkStop::Exhausted)
    }
}

impl RouteEngine for GreedyEngine<'_> {
    fn name(&self) -> &'static str {
        "greedy"
    }

    #[tracing::instrument(skip(self, graph, query), fields(start = %query.start, end = %query.end))]
    fn solve(&self, graph: &Graph, query: &RouteQuery<'_>) -> Result<PathResult> {
        validate_endpoints(graph, query)?;
        if query.start == query.end {
            return Ok(PathResult::trivial(query.start));
        }

        match self.walk(graph, query.start, query.end) {
            Ok(path) => {
                let cost = path_cost(graph, &path, query)?;
                tracing::debug!(steps = path.len() - 1, cost, "greedy_complete");
                Ok(PathResult::new(path, cost))
            }
            Err(stop) => {
                tracing::debug!(reason = ?stop, "greedy_no_path");
                Ok(PathResult::none())
            }
        }
    }
}

/// Greedy best-first walk from `query.start` to `query.end`
pub fn greedy(
    graph: &Graph,
    query: &RouteQuery<'_>,
    heuristics: &HeuristicTable,
) -> Result<PathResult> {
    GreedyEngine::new(heuristics).solve(graph, query)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RouteError;
    use crate::graph::algos::fixtures::{scenario, with_isolated};

    fn table(entries: &[(&str, f64)]) -> HeuristicTable {
        entries.iter().map(|(n, h)| (n.to_string(), *h)).collect()
    }

    #[test]
    fn test_greedy_follows_lowest_heuristic() {
        let graph = scenario();
        // C looks closer than B, so the walk takes the shortcut
        let heuristics = table(&[("A", 40.0), ("B", 30.0), ("C", 20.0), ("D", 10.0), ("E", 0.0)]);
        let result = greedy(&graph, &RouteQuery::new("A", "E"), &heuristics).unwrap();

        assert_eq!(result.path, vec!["A", "C", "D", "E"]);
        // real edge costs, not heuristic sums; worse than the optimal 42
        assert_eq!(result.cost, 45.0);
    }

    #[test]
    fn test_greedy_dead_end_is_no_path() {
        let graph = Graph::from_edges([
            ("A", "B", 1.0, 1.0),
            ("A", "C", 5.0, 1.0),
            ("C", "E", 1.0, 1.0),
        ])
        .unwrap();
        // B looks best but has no way out
        let heuristics = table(&[("B", 0.0), ("C", 9.0), ("E", 0.0)]);

        let result = greedy(&graph, &RouteQuery::new("A", "E"), &heuristics).unwrap();
        assert_eq!(result, PathResult::none());

        let engine = GreedyEngine::new(&heuristics);
        assert_eq!(engine.walk(&graph, "A", "E"), Err(WalkStop::DeadEnd));
    }

    #[test]
    fn test_greedy_cycle_is_no_path() {
        let graph = Graph::from_edges([
            ("A", "B", 1.0, 1.0),
            ("B", "C", 1.0, 1.0),
            ("C", "A", 1.0, 1.0),
            ("C", "B", 1.0, 1.0),
        ])
        .unwrap();
        let mut graph = graph;
        graph.add_node("E");
        let heuristics = table(&[("A", 1.0), ("B", 1.0), ("C", 1.0), ("E", 0.0)]);

        let engine = GreedyEngine::new(&heuristics);
        assert_eq!(engine.walk(&graph, "A", "E"), Err(WalkStop::Revisit));
        let result = greedy(&graph, &RouteQuery::new("A", "E"), &heuristics).unwrap();
        assert!(!result.is_found());
    }

    #[test]
    fn test_greedy_self_loop_only_is_revisit() {
        let mut graph = Graph::from_edges([("A", "A", 1.0, 1.0)]).unwrap();
        graph.add_node("E");
        let empty = HeuristicTable::new();
        let engine = GreedyEngine::new(&empty);
        assert_eq!(engine.walk(&graph, "A", "E"), Err(WalkStop::Revisit));
    }

    #[test]
    fn test_greedy_missing_heuristics_rank_last_but_remain_eligible() {
        let graph = Graph::from_edges([("A", "B", 1.0, 1.0), ("A", "C", 1.0, 1.0), ("C", "E", 1.0, 1.0)])
            .unwrap();
        // B has no entry at all, C has one: C wins
        let heuristics = table(&[("C", 100.0)]);
        let result = greedy(&graph, &RouteQuery::new("A", "E"), &heuristics).unwrap();
        assert_eq!(result.path, vec!["A", "C", "E"]);

        // no entries anywhere: ties break by node id, B first, which dead-ends
        let result = greedy(&graph, &RouteQuery::new("A", "E"), &HeuristicTable::new()).unwrap();
        assert!(!result.is_found());
    }

    #[test]
    fn test_greedy_start_equals_end() {
        let graph = scenario();
        let result = greedy(&graph, &RouteQuery::new("B", "B"), &HeuristicTable::new()).unwrap();
        assert_eq!(result, PathResult::trivial("B"));
    }

    #[test]
    fn test_greedy_no_edge_into_end() {
        let graph = with_isolated();
        let heuristics = table(&[("A", 1.0), ("B", 1.0), ("C", 1.0), ("D", 1.0), ("E", 1.0)]);
        let result = greedy(&graph, &RouteQuery::new("A", "Z"), &heuristics).unwrap();
        assert_eq!(result, PathResult::none());
    }

    #[test]
    fn test_greedy_unknown_node_propagates() {
        let graph = scenario();
        let err = greedy(&graph, &RouteQuery::new("nowhere", "E"), &HeuristicTable::new()).unwrap_err();
        assert!(matches!(err, RouteError::UnknownNode { .. }));
    }
}
