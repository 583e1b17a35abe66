//! CLI commands for routeplan

pub mod compare;
pub mod dispatch;
pub mod nodes;
pub mod route;

use crate::cli::args::QueryArgs;
use routeplan_core::planner::{Planner, RouteRequest};

/// A request seeded from config, with command-line overrides applied
fn query_request<'a>(planner: &Planner, args: &'a QueryArgs) -> RouteRequest<'a> {
    let mut request = planner
        .request(&args.from, &args.to)
        .with_waypoints(&args.via);
    if let Some(weight) = args.weight {
        request = request.with_weight(weight);
    }
    if let Some(max_waypoints) = args.max_waypoints {
        request.max_waypoints = max_waypoints;
    }
    request
}
