use crate::cli::CompareArgs;
use crate::commands::dispatch::command::CommandContext;
use crate::commands::query_request;
use routeplan_core::error::Result;
use routeplan_core::format::render_routes;

/// Run every strategy on one query and print the results in order
pub fn execute(ctx: &CommandContext, args: &CompareArgs) -> Result<()> {
    let planner = ctx.planner(&args.query.graph)?;
    let request = query_request(&planner, &args.query);

    let reports = planner.compare(&request)?;
    tracing::debug!(elapsed = ?ctx.start.elapsed(), strategies = reports.len(), "compare");
    println!("{}", render_routes(&reports, ctx.cli.format)?);
    Ok(())
}
