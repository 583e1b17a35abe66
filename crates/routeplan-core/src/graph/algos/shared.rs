use crate::error::Result;
use crate::graph::engine::RouteQuery;
use crate::graph::{Graph, NodeId, PathResult};
use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, HashMap};

/// Frontier entry for best-first searches.
///
/// Ordered by `(priority, cost, node_id)` ascending so that ties between
/// equal priorities resolve to the cheaper, then lexicographically smaller,
/// node. Wrap in `Reverse` for a min-heap.
#[derive(Debug, Clone)]
pub struct HeapEntry<'g> {
    pub node_id: &'g str,
    pub priority: f64,
    pub cost: f64,
}

impl PartialEq for HeapEntry<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HeapEntry<'_> {}

impl PartialOrd for HeapEntry<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority
            .total_cmp(&other.priority)
            .then_with(|| self.cost.total_cmp(&other.cost))
            .then_with(|| self.node_id.cmp(other.node_id))
    }
}

/// Statistics reported by a finished search
#[derive(Debug, Clone, Copy, Default)]
pub struct SearchStats {
    pub expanded: usize,
    pub pushed: usize,
}

/// Best-first search from `query.start` to `query.end`.
///
/// `estimate` gives the remaining-cost estimate added to the cost so far
/// (`0` for Dijkstra). A node is re-expanded only when a strictly cheaper
/// route to it is found, which never happens under non-negative weights
/// with a zero estimate, so Dijkstra finalizes each node once.
pub fn best_first<'g>(
    graph: &'g Graph,
    query: &RouteQuery<'_>,
    estimate: impl Fn(&str) -> f64,
) -> (PathResult, SearchStats) {
    let mut stats = SearchStats::default();
    let Some(start) = graph.node(query.start) else {
        return (PathResult::none(), stats);
    };

    let mut best: HashMap<&'g str, f64> = HashMap::new();
    let mut predecessors: HashMap<&'g str, &'g str> = HashMap::new();
    let mut heap = BinaryHeap::new();

    best.insert(start, 0.0);
    heap.push(Reverse(HeapEntry {
        node_id: start,
        priority: estimate(start),
        cost: 0.0,
    }));
    stats.pushed += 1;

    while let Some(Reverse(entry)) = heap.pop() {
        if best.get(entry.node_id).is_some_and(|&b| entry.cost > b) {
            continue;
        }
        stats.expanded += 1;
        tracing::trace!(node = entry.node_id, cost = entry.cost, "expand");

        if entry.node_id == query.end {
            let path = reconstruct_path(start, entry.node_id, &predecessors);
            return (PathResult::new(path, entry.cost), stats);
        }

        for edge in graph.outgoing(entry.node_id) {
            let candidate = entry.cost + query.weight.weight(edge);
            let to = edge.to.as_str();
            if candidate < best.get(to).copied().unwrap_or(f64::INFINITY) {
                best.insert(to, candidate);
                predecessors.insert(to, entry.node_id);
                heap.push(Reverse(HeapEntry {
                    node_id: to,
                    priority: candidate + estimate(to),
                    cost: candidate,
                }));
                stats.pushed += 1;
            }
        }
    }

    (PathResult::none(), stats)
}

/// Walk predecessor links back from `to` and return the forward path
pub fn reconstruct_path<'g>(
    from: &'g str,
    to: &'g str,
    predecessors: &HashMap<&'g str, &'g str>,
) -> Vec<NodeId> {
    let mut path = vec![to.to_string()];
    let mut current = to;
    while current != from {
        match predecessors.get(current) {
            Some(&pred) => {
                path.push(pred.to_string());
                current = pred;
            }
            None => break,
        }
    }
    path.reverse();
    path
}

/// Fail fast on endpoints missing from the graph
pub fn validate_endpoints(graph: &Graph, query: &RouteQuery<'_>) -> Result<()> {
    graph.require_node(query.start)?;
    graph.require_node(query.end)
}

/// Sum of `weight` over consecutive pairs of `path`
pub fn path_cost(graph: &Graph, path: &[NodeId], query: &RouteQuery<'_>) -> Result<f64> {
    path.windows(2).try_fold(0.0, |acc, pair| {
        Ok(acc + graph.edge_cost(&pair[0], &pair[1], query.weight)?)
    })
}
