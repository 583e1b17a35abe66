use serde::Serialize;

use crate::cli::NodesArgs;
use crate::commands::dispatch::command::CommandContext;
use routeplan_core::error::Result;
use routeplan_core::format::OutputFormat;
use routeplan_core::graph::Graph;

#[derive(Debug, Serialize)]
struct NodeListing<'a> {
    nodes: Vec<&'a str>,
    node_count: usize,
    edge_count: usize,
}

/// List the graph's nodes (sorted) and its edge count
pub fn execute(ctx: &CommandContext, args: &NodesArgs) -> Result<()> {
    let config = ctx.config()?;
    let snapshot = ctx.snapshot(&args.graph, &config)?;
    println!("{}", render(&snapshot.graph, ctx.cli.format, ctx.cli.quiet)?);
    Ok(())
}

fn render(graph: &Graph, format: OutputFormat, quiet: bool) -> Result<String> {
    let listing = NodeListing {
        nodes: graph.nodes().collect(),
        node_count: graph.node_count(),
        edge_count: graph.edge_count(),
    };

    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&listing)?),
        OutputFormat::Human => {
            let mut lines: Vec<String> = listing.nodes.iter().map(|n| n.to_string()).collect();
            if !quiet {
                lines.push(format!(
                    "{} nodes, {} edges",
                    listing.node_count, listing.edge_count
                ));
            }
            Ok(lines.join("\n"))
        }
        OutputFormat::Records => {
            let mut out = format!(
                "H nodes={} edges={}",
                listing.node_count, listing.edge_count
            );
            for node in &listing.nodes {
                out.push_str(&format!("\nN {}", node));
            }
            Ok(out)
        }
    }
}
