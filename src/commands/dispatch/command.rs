//! Command trait and context for dispatching commands

use std::time::Instant;

use crate::cli::args::GraphArgs;
use crate::cli::Cli;
use routeplan_core::config::PlannerConfig;
use routeplan_core::error::Result;
use routeplan_core::loader::load_graph;
use routeplan_core::planner::Planner;
use routeplan_core::snapshot::GraphSnapshot;
use routeplan_core::traffic::{TrafficContext, TrafficPredictor, TrafficTable};

/// Traffic slot requested on the command line.
///
/// `--hour`/`--day` win; a traffic table without them uses the current
/// local time, which yields no slot on weekends.
fn traffic_context(args: &GraphArgs) -> Result<Option<TrafficContext>> {
    match (args.hour, args.day) {
        (Some(hour), Some(day)) => TrafficContext::new(hour, day).map(Some),
        _ if args.traffic.is_some() => {
            let now = TrafficContext::now();
            if now.is_none() {
                tracing::info!("weekend: no traffic slot, using base distances");
            }
            Ok(now)
        }
        _ => Ok(None),
    }
}

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, start: Instant) -> Self {
        Self { cli, start }
    }

    /// Planner config from `--config`, else the default location
    pub fn config(&self) -> Result<PlannerConfig> {
        PlannerConfig::discover(self.cli.config.as_deref())
    }

    /// Load the graph with the requested traffic slot applied
    pub fn snapshot(&self, args: &GraphArgs, config: &PlannerConfig) -> Result<GraphSnapshot> {
        let context = traffic_context(args)?;
        let table: Option<TrafficTable> = match &args.traffic {
            Some(path) => Some(config.traffic_table(path)?),
            None => {
                if context.is_some() {
                    tracing::warn!("--hour/--day given without --traffic; base distances are used");
                }
                None
            }
        };
        let predictor = table.as_ref().map(|t| t as &dyn TrafficPredictor);

        let snapshot = load_graph(&args.graph, predictor, context)?;
        tracing::debug!(elapsed = ?self.start.elapsed(), "load_graph");
        Ok(snapshot)
    }

    pub fn planner(&self, args: &GraphArgs) -> Result<Planner> {
        let config = self.config()?;
        let snapshot = self.snapshot(args, &config)?;
        Ok(Planner::new(snapshot, config))
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("routeplan {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Traffic-aware route planning over a directed road graph.");
        println!();
        println!("Run `routeplan --help` for usage information.");
        Ok(())
    }
}
