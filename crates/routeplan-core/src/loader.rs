//! JSON graph documents
//!
//! ```json
//! { "nodes": ["A", "B"],
//!   "edges": [{"from": "A", "to": "B", "distance": 10, "traffic": "high"}],
//!   "heuristics": {"A": 10, "B": 0} }
//! ```
//!
//! `traffic`, `tolls` and `safety` on an edge are carried through as
//! opaque attributes. The traffic factor applied to every edge comes from
//! the predictor, not from the document.

use std::collections::BTreeMap;
use std::path::Path;
use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::error::{Result, RouteError};
use crate::graph::{Edge, EdgeAttributes, Graph, HeuristicTable, NodeId};
use crate::snapshot::GraphSnapshot;
use crate::trace_time;
use crate::traffic::{TrafficContext, TrafficPredictor};

/// One edge as written in a graph document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeRecord {
    pub from: NodeId,
    pub to: NodeId,
    pub distance: f64,
    #[serde(default, skip_serializing_if = "serde_json::Value::is_null")]
    pub traffic: serde_json::Value,
    #[serde(default, skip_serializing_if = "serde_json::Value::is_null")]
    pub tolls: serde_json::Value,
    #[serde(default, skip_serializing_if = "serde_json::Value::is_null")]
    pub safety: serde_json::Value,
}

/// Serialized form of a road graph
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphDocument {
    #[serde(default)]
    pub nodes: Vec<NodeId>,
    #[serde(default)]
    pub edges: Vec<EdgeRecord>,
    #[serde(default)]
    pub heuristics: BTreeMap<NodeId, f64>,
}

impl GraphDocument {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    #[tracing::instrument(skip(path), fields(path = %path.display()))]
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Build a snapshot, applying the predicted multiplier for `context`.
    ///
    /// Without both a predictor and a context every traffic factor is 1.0.
    /// A repeated `(from, to)` pair keeps the last edge.
    pub fn build(
        &self,
        predictor: Option<&dyn TrafficPredictor>,
        context: Option<TrafficContext>,
    ) -> Result<GraphSnapshot> {
        let start = Instant::now();
        let (factor, context) = match (predictor, context) {
            (Some(predictor), Some(ctx)) => (predictor.predict(ctx.hour, ctx.day_of_week), Some(ctx)),
            _ => (1.0, None),
        };

        let mut graph = Graph::new();
        for node in &self.nodes {
            graph.add_node(node.as_str());
        }
        for record in &self.edges {
            let attributes = EdgeAttributes {
                tolls: record.tolls.clone(),
                safety: record.safety.clone(),
                traffic: record.traffic.clone(),
            };
            let edge = Edge::new(record.from.as_str(), record.to.as_str(), record.distance, factor)?
                .with_attributes(attributes);
            if graph.replace_edge(edge).is_some() {
                tracing::debug!(from = %record.from, to = %record.to, "duplicate edge replaced");
            }
        }

        let mut heuristics = HeuristicTable::new();
        for (node, estimate) in &self.heuristics {
            if !estimate.is_finite() || *estimate < 0.0 {
                return Err(RouteError::invalid_value(
                    &format!("heuristic for {node}"),
                    estimate,
                ));
            }
            if !graph.contains(node) {
                tracing::debug!(node = %node, "heuristic for node not in graph");
            }
            heuristics.insert(node.as_str(), *estimate);
        }

        trace_time!(
            start,
            "graph_build",
            nodes = graph.node_count(),
            edges = graph.edge_count()
        );
        Ok(GraphSnapshot::new(graph, heuristics, context))
    }
}

/// Load a graph document from `path` and build its snapshot
#[tracing::instrument(skip(path, predictor, context), fields(path = %path.display(), context = ?context))]
pub fn load_graph(
    path: &Path,
    predictor: Option<&dyn TrafficPredictor>,
    context: Option<TrafficContext>,
) -> Result<GraphSnapshot> {
    let document = GraphDocument::load(path)?;
    let snapshot = document.build(predictor, context)?;
    tracing::debug!(
        nodes = snapshot.graph.node_count(),
        edges = snapshot.graph.edge_count(),
        heuristics = snapshot.heuristics.len(),
        "graph loaded"
    );
    Ok(snapshot)
}
