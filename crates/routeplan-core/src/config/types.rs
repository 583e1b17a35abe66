//! Configuration type definitions

use serde::{Deserialize, Serialize};

use crate::graph::{Strategy, WeightKind, DEFAULT_MAX_WAYPOINTS};

/// Planner configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannerConfig {
    /// Edge weight used when a query does not name one
    #[serde(default)]
    pub weight: WeightKind,

    /// Engine used when a query does not name one
    #[serde(default)]
    pub strategy: Strategy,

    /// Largest number of distinct waypoints the waypoint engine accepts
    #[serde(default = "default_max_waypoints")]
    pub max_waypoints: usize,

    /// Traffic table bounds
    #[serde(default)]
    pub traffic: TrafficConfig,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        PlannerConfig {
            weight: WeightKind::default(),
            strategy: Strategy::default(),
            max_waypoints: default_max_waypoints(),
            traffic: TrafficConfig::default(),
        }
    }
}

fn default_max_waypoints() -> usize {
    DEFAULT_MAX_WAYPOINTS
}

/// Bounds applied to traffic table predictions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrafficConfig {
    /// Multiplier for time slots missing from the table
    #[serde(default = "default_multiplier")]
    pub default_multiplier: f64,

    /// Floor for every prediction
    #[serde(default = "default_multiplier")]
    pub min_multiplier: f64,
}

impl Default for TrafficConfig {
    fn default() -> Self {
        TrafficConfig {
            default_multiplier: default_multiplier(),
            min_multiplier: default_multiplier(),
        }
    }
}

fn default_multiplier() -> f64 {
    1.0
}
