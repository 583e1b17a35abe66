use serde::{Serialize, Serializer};
use std::collections::HashMap;

use crate::error::{Result, RouteError};

/// Opaque location identifier
pub type NodeId = String;

/// Auxiliary edge attributes carried through the graph but never read by
/// the route engines
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EdgeAttributes {
    pub tolls: serde_json::Value,
    pub safety: serde_json::Value,
    /// Traffic label from the graph source (distinct from `traffic_factor`)
    pub traffic: serde_json::Value,
}

/// A directed edge with its base and traffic-adjusted distances
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    pub from: NodeId,
    pub to: NodeId,
    base_distance: f64,
    traffic_factor: f64,
    adjusted_distance: f64,
    pub attributes: EdgeAttributes,
}

impl Edge {
    /// Build an edge, validating `base_distance >= 0` and `traffic_factor > 0`
    pub fn new(
        from: impl Into<NodeId>,
        to: impl Into<NodeId>,
        base_distance: f64,
        traffic_factor: f64,
    ) -> Result<Self> {
        validate_base_distance(base_distance)?;
        validate_traffic_factor(traffic_factor)?;
        Ok(Edge {
            from: from.into(),
            to: to.into(),
            base_distance,
            traffic_factor,
            adjusted_distance: base_distance * traffic_factor,
            attributes: EdgeAttributes::default(),
        })
    }

    pub fn with_attributes(mut self, attributes: EdgeAttributes) -> Self {
        self.attributes = attributes;
        self
    }

    pub fn base_distance(&self) -> f64 {
        self.base_distance
    }

    pub fn traffic_factor(&self) -> f64 {
        self.traffic_factor
    }

    pub fn adjusted_distance(&self) -> f64 {
        self.adjusted_distance
    }

    /// Change the traffic factor; the adjusted distance follows it
    pub fn set_traffic_factor(&mut self, traffic_factor: f64) -> Result<()> {
        validate_traffic_factor(traffic_factor)?;
        self.traffic_factor = traffic_factor;
        self.adjusted_distance = self.base_distance * traffic_factor;
        Ok(())
    }

    pub fn is_self_loop(&self) -> bool {
        self.from == self.to
    }
}

fn validate_base_distance(base_distance: f64) -> Result<()> {
    if !base_distance.is_finite() || base_distance < 0.0 {
        return Err(RouteError::invalid_value("base distance", base_distance));
    }
    Ok(())
}

fn validate_traffic_factor(traffic_factor: f64) -> Result<()> {
    if !traffic_factor.is_finite() || traffic_factor <= 0.0 {
        return Err(RouteError::invalid_value("traffic factor", traffic_factor));
    }
    Ok(())
}

/// Per-node estimate of the remaining cost to a fixed goal.
///
/// Missing entries read as `f64::INFINITY`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HeuristicTable(HashMap<NodeId, f64>);

impl HeuristicTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// An all-zero table over the given nodes (trivially admissible)
    pub fn zero<'a>(nodes: impl IntoIterator<Item = &'a str>) -> Self {
        nodes.into_iter().map(|n| (n.to_string(), 0.0)).collect()
    }

    pub fn insert(&mut self, node: impl Into<NodeId>, estimate: f64) {
        self.0.insert(node.into(), estimate);
    }

    pub fn get(&self, node: &str) -> f64 {
        self.0.get(node).copied().unwrap_or(f64::INFINITY)
    }

    pub fn contains(&self, node: &str) -> bool {
        self.0.contains_key(node)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(NodeId, f64)> for HeuristicTable {
    fn from_iter<I: IntoIterator<Item = (NodeId, f64)>>(iter: I) -> Self {
        HeuristicTable(iter.into_iter().collect())
    }
}

impl From<HashMap<NodeId, f64>> for HeuristicTable {
    fn from(map: HashMap<NodeId, f64>) -> Self {
        HeuristicTable(map)
    }
}

/// Outcome of one route query.
///
/// An unreachable destination is `path = []`, `cost = +inf`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathResult {
    pub path: Vec<NodeId>,
    #[serde(serialize_with = "serialize_cost")]
    pub cost: f64,
}

impl PathResult {
    pub fn new(path: Vec<NodeId>, cost: f64) -> Self {
        PathResult { path, cost }
    }

    /// The "no path" sentinel
    pub fn none() -> Self {
        PathResult {
            path: Vec::new(),
            cost: f64::INFINITY,
        }
    }

    /// The singleton route for `start == end`
    pub fn trivial(node: &str) -> Self {
        PathResult {
            path: vec![node.to_string()],
            cost: 0.0,
        }
    }

    pub fn is_found(&self) -> bool {
        !self.path.is_empty() && self.cost.is_finite()
    }
}

fn serialize_cost<S: Serializer>(cost: &f64, serializer: S) -> std::result::Result<S::Ok, S::Error> {
    if cost.is_finite() {
        serializer.serialize_f64(*cost)
    } else {
        serializer.serialize_none()
    }
}
