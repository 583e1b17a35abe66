//! Argument structs shared by the routing commands

use clap::Args;
use std::path::PathBuf;

use routeplan_core::graph::{Strategy, WeightKind};

use super::parse::{parse_strategy, parse_weight};

/// Where the graph comes from and which traffic slot to apply
#[derive(Args, Debug, Clone)]
pub struct GraphArgs {
    /// Graph document (JSON)
    #[arg(long, short = 'g')]
    pub graph: PathBuf,

    /// Traffic table (CSV: hour,day_of_week,traffic_multiplier)
    #[arg(long)]
    pub traffic: Option<PathBuf>,

    /// Hour of day for traffic prediction (0-23)
    #[arg(long, requires = "day")]
    pub hour: Option<u8>,

    /// Weekday for traffic prediction (1 = Monday .. 5 = Friday)
    #[arg(long, requires = "hour")]
    pub day: Option<u8>,
}

/// Endpoints, stops and weight of a query
#[derive(Args, Debug, Clone)]
pub struct QueryArgs {
    #[command(flatten)]
    pub graph: GraphArgs,

    /// Start node
    #[arg(long)]
    pub from: String,

    /// Destination node
    #[arg(long)]
    pub to: String,

    /// Intermediate stops, comma separated or repeated
    #[arg(long, value_delimiter = ',', action = clap::ArgAction::Append)]
    pub via: Vec<String>,

    /// Edge weight (distance, adjusted_distance)
    #[arg(long, value_parser = parse_weight)]
    pub weight: Option<WeightKind>,

    /// Largest number of distinct stops accepted
    #[arg(long)]
    pub max_waypoints: Option<usize>,
}

#[derive(Args, Debug, Clone)]
pub struct RouteArgs {
    #[command(flatten)]
    pub query: QueryArgs,

    /// Engine (dijkstra, astar, greedy, waypoints); waypoints when --via is given
    #[arg(long, short = 's', value_parser = parse_strategy)]
    pub strategy: Option<Strategy>,
}

#[derive(Args, Debug, Clone)]
pub struct CompareArgs {
    #[command(flatten)]
    pub query: QueryArgs,
}

#[derive(Args, Debug, Clone)]
pub struct NodesArgs {
    #[command(flatten)]
    pub graph: GraphArgs,
}
