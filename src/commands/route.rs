use crate::cli::RouteArgs;
use crate::commands::dispatch::command::CommandContext;
use crate::commands::query_request;
use routeplan_core::error::Result;
use routeplan_core::format::render_route;
use routeplan_core::graph::Strategy;

/// Plan one route and print it
pub fn execute(ctx: &CommandContext, args: &RouteArgs) -> Result<()> {
    let planner = ctx.planner(&args.query.graph)?;
    let mut request = query_request(&planner, &args.query);

    request.strategy = match args.strategy {
        Some(strategy) => strategy,
        None if !args.query.via.is_empty() => Strategy::Waypoints,
        None => request.strategy,
    };

    let report = planner.route(&request)?;
    tracing::debug!(elapsed = ?ctx.start.elapsed(), found = report.found, "route");
    println!("{}", render_route(&report, ctx.cli.format)?);
    Ok(())
}
