//! Command dispatch logic for routeplan

use std::time::Instant;

use crate::cli::{Cli, Commands};
use crate::commands::{compare, nodes, route};
use routeplan_core::error::Result;

pub mod command;

use command::{Command, CommandContext, NoCommand};

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::Route(args) => route::execute(ctx, args),
            Commands::Compare(args) => compare::execute(ctx, args),
            Commands::Nodes(args) => nodes::execute(ctx, args),
        }
    }
}

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let ctx = CommandContext::new(cli, start);

    match &cli.command {
        None => NoCommand.execute(&ctx),
        Some(cmd) => cmd.execute(&ctx),
    }
}
