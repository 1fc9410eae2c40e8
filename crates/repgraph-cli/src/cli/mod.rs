//! Clap CLI definition: root struct, subcommands, and shared argument types.
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// A CLI argument that is either a filesystem path or the stdin sentinel `"-"`.
#[derive(Clone, Debug)]
pub enum PathOrStdin {
    /// Read from standard input.
    Stdin,
    /// Read from the given filesystem path.
    Path(PathBuf),
}

impl std::str::FromStr for PathOrStdin {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "-" {
            Ok(PathOrStdin::Stdin)
        } else {
            Ok(PathOrStdin::Path(PathBuf::from(s)))
        }
    }
}

/// Output format for CLI commands.
///
/// `Human` emits aligned, optionally colored text to stdout. `Json` emits a
/// single pretty-printed JSON value to stdout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable, optionally colored output (default).
    Human,
    /// Structured JSON output.
    Json,
}

/// All top-level subcommands exposed by the `repgraph` binary.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Summarize the structure of every graph (or one graph) in a corpus.
    Analyze {
        /// Corpus file (JSON array or JSON Lines), or `-` for stdin.
        #[arg(value_name = "FILE")]
        file: PathOrStdin,
        /// Restrict the summary to this graph id.
        #[arg(long, value_name = "ID")]
        graph: Option<String>,
    },

    /// Run selected formal tests on one graph.
    Formal {
        /// Corpus file, or `-` for stdin.
        #[arg(value_name = "FILE")]
        file: PathOrStdin,
        /// Graph id.
        #[arg(long, value_name = "ID")]
        graph: String,
        /// Run the crossing (planarity) test.
        #[arg(long)]
        planar: bool,
        /// Compute directed longest paths instead of undirected ones.
        #[arg(long)]
        directed: bool,
        /// Run the connectivity test.
        #[arg(long)]
        connected: bool,
    },

    /// Print every longest path of one graph.
    Longest {
        /// Corpus file, or `-` for stdin.
        #[arg(value_name = "FILE")]
        file: PathOrStdin,
        /// Graph id.
        #[arg(long, value_name = "ID")]
        graph: String,
        /// Follow edge direction (fails on graphs with a directed cycle).
        #[arg(long)]
        directed: bool,
    },

    /// Print corpus-wide counts and structural percentages.
    Stats {
        /// Corpus file, or `-` for stdin.
        #[arg(value_name = "FILE")]
        file: PathOrStdin,
    },

    /// Find graphs containing every given node label.
    ///
    /// Labels come from `--label`, or from the nodes named by `--node` in
    /// the graph named by `--graph`.
    Search {
        /// Corpus file, or `-` for stdin.
        #[arg(value_name = "FILE")]
        file: PathOrStdin,
        /// Node label to require (repeatable).
        #[arg(
            long,
            value_name = "LABEL",
            conflicts_with = "node",
            required_unless_present = "node"
        )]
        label: Vec<String>,
        /// Graph whose nodes supply the labels (used with `--node`).
        #[arg(long, value_name = "ID", requires = "node")]
        graph: Option<String>,
        /// Node id whose label to require (repeatable; needs `--graph`).
        #[arg(long, value_name = "NODE_ID", requires = "graph")]
        node: Vec<u32>,
    },

    /// Render an inclusive token span of one graph.
    Span {
        /// Corpus file, or `-` for stdin.
        #[arg(value_name = "FILE")]
        file: PathOrStdin,
        /// Graph id.
        #[arg(long, value_name = "ID")]
        graph: String,
        /// First token position.
        #[arg(value_name = "FROM")]
        from: usize,
        /// Last token position (inclusive).
        #[arg(value_name = "END")]
        end: usize,
    },

    /// Print one graph with node ids renumbered in anchor order.
    Reorder {
        /// Corpus file, or `-` for stdin.
        #[arg(value_name = "FILE")]
        file: PathOrStdin,
        /// Graph id.
        #[arg(long, value_name = "ID")]
        graph: String,
    },

    /// Compare the node and edge labels of two graphs.
    Compare {
        /// Corpus file, or `-` for stdin.
        #[arg(value_name = "FILE")]
        file: PathOrStdin,
        /// First graph id.
        #[arg(value_name = "A")]
        a: String,
        /// Second graph id.
        #[arg(value_name = "B")]
        b: String,
    },
}

impl Command {
    /// The corpus input every subcommand reads.
    pub fn input(&self) -> &PathOrStdin {
        match self {
            Command::Analyze { file, .. }
            | Command::Formal { file, .. }
            | Command::Longest { file, .. }
            | Command::Stats { file }
            | Command::Search { file, .. }
            | Command::Span { file, .. }
            | Command::Reorder { file, .. }
            | Command::Compare { file, .. } => file,
        }
    }
}

/// Root CLI struct for the `repgraph` binary.
///
/// All global flags are defined here and marked `global = true` so that clap
/// propagates them to every subcommand.
#[derive(Parser, Debug)]
#[command(
    name = "repgraph",
    version,
    about = "Sentence meaning-representation graph analysis",
    long_about = "Structural analysis of anchored sentence graphs in the MRP format.\n\
                  Tests connectivity, cycles and edge crossings, finds longest\n\
                  paths, renders token spans, and searches and compares corpora."
)]
pub struct Cli {
    /// Active subcommand.
    #[command(subcommand)]
    pub command: Command,

    /// Output format: human (default) or json.
    #[arg(long, short = 'f', default_value = "human", global = true)]
    pub format: OutputFormat,

    /// Only log errors to stderr (incompatible with `--verbose`).
    #[arg(long, short = 'q', global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log debug events to stderr (incompatible with `--quiet`).
    #[arg(long, short = 'v', global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Maximum input size in bytes.
    ///
    /// Can also be set via the `REPGRAPH_MAX_FILE_SIZE` environment variable.
    /// The CLI flag takes precedence over the environment variable.
    /// Default: 268435456 (256 MB).
    #[arg(
        long,
        global = true,
        env = "REPGRAPH_MAX_FILE_SIZE",
        default_value = "268435456"
    )]
    pub max_file_size: u64,

    /// Disable ANSI color codes in human output.
    ///
    /// Also respects the `NO_COLOR` environment variable per
    /// <https://no-color.org>.
    #[arg(long, global = true, env = "NO_COLOR")]
    pub no_color: bool,
}
