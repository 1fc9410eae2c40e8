mod cli;
mod cmd;
mod error;
mod format;
mod io;

pub use cli::{Cli, Command, OutputFormat, PathOrStdin};

use clap::Parser;
use repgraph_core::FormalTests;
use tracing::Level;
use tracing_subscriber::EnvFilter;

use crate::cmd::search::Query;
use crate::error::CliError;
use crate::format::Style;

/// Installs the stderr log subscriber. `RUST_LOG` directives are honored;
/// the verbosity flags set the default level.
fn init_tracing(cli: &Cli) {
    let level = if cli.verbose {
        Level::DEBUG
    } else if cli.quiet {
        Level::ERROR
    } else {
        Level::WARN
    };
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(format::colors_enabled(cli.no_color))
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let corpus = io::load_corpus(cli.command.input(), cli.max_file_size)?;
    let style = Style::from_flags(cli.no_color);
    let format = &cli.format;

    match &cli.command {
        Command::Analyze { graph, .. } => {
            cmd::analyze::run(&corpus, graph.as_deref(), format, style)
        }
        Command::Formal {
            graph,
            planar,
            directed,
            connected,
            ..
        } => {
            let tests = FormalTests {
                planar: *planar,
                directed: *directed,
                connected: *connected,
            };
            cmd::formal::run(&corpus, graph, tests, format, style)
        }
        Command::Longest {
            graph, directed, ..
        } => cmd::longest::run(&corpus, graph, *directed, format),
        Command::Stats { .. } => cmd::stats::run(&corpus, format),
        Command::Search {
            label, graph, node, ..
        } => {
            let query = match graph {
                Some(graph) => Query::NodeSet { graph, nodes: node },
                None => Query::Labels(label),
            };
            cmd::search::run(&corpus, query, format)
        }
        Command::Span {
            graph, from, end, ..
        } => cmd::span::run(&corpus, graph, *from, *end, format),
        Command::Reorder { graph, .. } => cmd::reorder::run(&corpus, graph, format),
        Command::Compare { a, b, .. } => cmd::compare::run(&corpus, a, b, format),
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(&cli);

    if let Err(e) = run(&cli) {
        tracing::debug!(exit_code = e.exit_code(), "command failed");
        eprintln!("{e}");
        std::process::exit(e.exit_code());
    }
}
