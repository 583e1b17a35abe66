//! Edge weight resolution
//!
//! Engines never read edge fields directly; they ask a [`WeightResolver`]
//! for the scalar cost of an edge. [`WeightKind`] covers the two built-in
//! weights and any `Fn(&Edge) -> f64` closure plugs in as a custom one.
//!
//! Dijkstra and A* require every resolved weight to be non-negative. This is
//! not checked; a negative weight gives undefined results.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::types::Edge;
use crate::error::RouteError;

/// Maps an edge to the cost a search uses for it
pub trait WeightResolver {
    fn weight(&self, edge: &Edge) -> f64;
}

impl<F> WeightResolver for F
where
    F: Fn(&Edge) -> f64,
{
    fn weight(&self, edge: &Edge) -> f64 {
        self(edge)
    }
}

/// Built-in edge weights
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeightKind {
    /// Raw distance, ignoring traffic
    #[serde(alias = "distance")]
    BaseDistance,
    /// Distance multiplied by the traffic factor
    #[default]
    #[serde(alias = "adjusted")]
    AdjustedDistance,
}

impl WeightResolver for WeightKind {
    fn weight(&self, edge: &Edge) -> f64 {
        match self {
            WeightKind::BaseDistance => edge.base_distance(),
            WeightKind::AdjustedDistance => edge.adjusted_distance(),
        }
    }
}

impl FromStr for WeightKind {
    type Err = RouteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "distance" | "base_distance" | "base" => Ok(WeightKind::BaseDistance),
            "adjusted_distance" | "adjusted" => Ok(WeightKind::AdjustedDistance),
            other => Err(RouteError::InvalidWeight(other.to_string())),
        }
    }
}

impl fmt::Display for WeightKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WeightKind::BaseDistance => write!(f, "distance"),
            WeightKind::AdjustedDistance => write!(f, "adjusted_distance"),
        }
    }
}
