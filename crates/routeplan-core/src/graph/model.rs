use std::collections::BTreeMap;

use super::types::{Edge, EdgeAttributes, NodeId};
use super::weight::WeightResolver;
use crate::error::{Result, RouteError};

/// Directed weighted graph with at most one edge per ordered node pair.
///
/// Adjacency is kept in ordered maps so node listing and neighbor
/// iteration are deterministic (lexicographic by node id). Adding an edge
/// whose endpoints are unknown creates those nodes.
///
/// A `Graph` is treated as an immutable snapshot once handed to an engine;
/// traffic changes produce a new graph via [`Graph::with_traffic_factor`].
#[derive(Debug, Clone, Default)]
pub struct Graph {
    adjacency: BTreeMap<NodeId, BTreeMap<NodeId, Edge>>,
    edge_count: usize,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from `(from, to, base_distance, traffic_factor)` tuples
    pub fn from_edges<'a>(
        edges: impl IntoIterator<Item = (&'a str, &'a str, f64, f64)>,
    ) -> Result<Self> {
        let mut graph = Graph::new();
        for (from, to, base, factor) in edges {
            graph.add_edge(from, to, base, factor, EdgeAttributes::default())?;
        }
        Ok(graph)
    }

    /// Add a node; adding an existing node is a no-op
    pub fn add_node(&mut self, id: impl Into<NodeId>) {
        self.adjacency.entry(id.into()).or_default();
    }

    /// Add a directed edge, creating missing endpoints.
    ///
    /// Fails with `DuplicateEdge` if `(from, to)` already has an edge and
    /// with `InvalidValue` for a negative distance or non-positive factor.
    pub fn add_edge(
        &mut self,
        from: &str,
        to: &str,
        base_distance: f64,
        traffic_factor: f64,
        attributes: EdgeAttributes,
    ) -> Result<()> {
        let edge =
            Edge::new(from, to, base_distance, traffic_factor)?.with_attributes(attributes);
        self.insert_edge(edge)
    }

    /// Insert a prebuilt edge, rejecting duplicates
    pub fn insert_edge(&mut self, edge: Edge) -> Result<()> {
        if self.edge(&edge.from, &edge.to).is_some() {
            return Err(RouteError::DuplicateEdge {
                from: edge.from,
                to: edge.to,
            });
        }
        self.replace_edge(edge);
        Ok(())
    }

    /// Insert an edge, overwriting any existing edge for the same pair.
    /// Returns the replaced edge.
    pub fn replace_edge(&mut self, edge: Edge) -> Option<Edge> {
        if !self.adjacency.contains_key(&edge.to) {
            tracing::trace!(node = %edge.to, "auto-creating edge target");
            self.add_node(edge.to.clone());
        }
        let replaced = self
            .adjacency
            .entry(edge.from.clone())
            .or_default()
            .insert(edge.to.clone(), edge);
        if replaced.is_none() {
            self.edge_count += 1;
        }
        replaced
    }

    /// The graph's own copy of `node`'s id, if present
    pub fn node(&self, node: &str) -> Option<&str> {
        self.adjacency.get_key_value(node).map(|(id, _)| id.as_str())
    }

    pub fn contains(&self, node: &str) -> bool {
        self.adjacency.contains_key(node)
    }

    /// Fail with `UnknownNode` if `node` is not in the graph
    pub fn require_node(&self, node: &str) -> Result<()> {
        if self.contains(node) {
            Ok(())
        } else {
            Err(RouteError::unknown_node(node))
        }
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// All nodes in lexicographic order
    pub fn nodes(&self) -> impl Iterator<Item = &str> {
        self.adjacency.keys().map(String::as_str)
    }

    /// All edges ordered by `(from, to)`
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.adjacency.values().flat_map(|out| out.values())
    }

    /// Successors of `node` in lexicographic order; empty for unknown nodes
    pub fn neighbors(&self, node: &str) -> impl Iterator<Item = &str> {
        self.adjacency
            .get(node)
            .into_iter()
            .flat_map(|out| out.keys().map(String::as_str))
    }

    /// Outgoing edges of `node` ordered by target id
    pub fn outgoing(&self, node: &str) -> impl Iterator<Item = &Edge> {
        self.adjacency
            .get(node)
            .into_iter()
            .flat_map(|out| out.values())
    }

    pub fn edge(&self, from: &str, to: &str) -> Option<&Edge> {
        self.adjacency.get(from).and_then(|out| out.get(to))
    }

    /// Cost of the edge `from -> to` under `weight`
    pub fn edge_cost(&self, from: &str, to: &str, weight: &dyn WeightResolver) -> Result<f64> {
        self.edge(from, to)
            .map(|edge| weight.weight(edge))
            .ok_or_else(|| RouteError::NoSuchEdge {
                from: from.to_string(),
                to: to.to_string(),
            })
    }

    /// A copy of this graph with every edge's traffic factor set to `factor`
    pub fn with_traffic_factor(&self, factor: f64) -> Result<Graph> {
        let mut rebuilt = self.clone();
        for out in rebuilt.adjacency.values_mut() {
            for edge in out.values_mut() {
                edge.set_traffic_factor(factor)?;
            }
        }
        Ok(rebuilt)
    }
}
