/// CLI error types with associated exit codes.
///
/// [`CliError`] is the top-level error type for the `repgraph` binary. Every
/// variant maps to a stable exit code (1 or 2) via [`CliError::exit_code`]:
///
/// - Exit code **2**: input failure. The corpus could not be read or parsed,
///   so no analysis ran.
/// - Exit code **1**: logical failure. The corpus loaded but the request
///   names something absent, finds nothing, or hits an analysis
///   precondition (directed cycle, span out of range).
use std::fmt;
use std::path::PathBuf;

use repgraph_core::{AnalysisError, CorpusError, TransportError};

// ---------------------------------------------------------------------------
// CliError
// ---------------------------------------------------------------------------

/// All error conditions that the `repgraph` CLI can produce.
///
/// Use [`CliError::exit_code`] to obtain the exit code associated with each
/// variant. [`CliError::message`] returns the human-readable error string
/// that should be printed to stderr before exiting.
#[derive(Debug)]
pub enum CliError {
    // --- Exit code 2: input failures ---
    /// A file argument could not be found on the filesystem.
    FileNotFound {
        /// The path that was not found.
        path: PathBuf,
    },

    /// The process lacks permission to read a file.
    PermissionDenied {
        /// The path that could not be read.
        path: PathBuf,
    },

    /// The input exceeds the configured `--max-file-size` limit.
    FileTooLarge {
        /// `"-"` for stdin, or the filesystem path.
        source: String,
        /// The configured size limit in bytes.
        limit: u64,
        /// The actual size in bytes; `None` for stdin.
        actual: Option<u64>,
    },

    /// The input bytes are not valid UTF-8.
    InvalidUtf8 {
        /// A human-readable label for the source.
        source: String,
        /// The byte offset of the first invalid byte sequence.
        byte_offset: usize,
    },

    /// An I/O error occurred while reading from stdin.
    StdinReadError {
        /// The underlying I/O error message.
        detail: String,
    },

    /// A generic I/O error not covered by the more specific variants above.
    IoError {
        /// A human-readable label for the source or sink.
        source: String,
        /// The underlying I/O error message.
        detail: String,
    },

    /// The corpus is not valid MRP JSON, or repeats a graph id.
    ParseFailed {
        /// Parser message, including the line and column.
        detail: String,
    },

    // --- Exit code 1: logical failures ---
    /// The requested graph id is not in the corpus.
    GraphNotFound {
        /// The missing graph id.
        id: String,
    },

    /// The requested node id is not in the named graph.
    NodeNotFound {
        /// Graph that was searched.
        graph: String,
        /// The missing node id.
        node: u32,
    },

    /// The query ran but matched nothing.
    NoResults {
        /// What was searched for.
        detail: String,
    },

    /// An analysis precondition failed.
    AnalysisFailed {
        /// Graph the analysis ran on.
        graph: String,
        /// The underlying failure.
        source: AnalysisError,
    },
}

impl CliError {
    /// Returns the process exit code for this error.
    ///
    /// - `2`: input failure (file not found, parse error, etc.).
    /// - `1`: logical failure (unknown graph, no results, analysis error).
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::FileNotFound { .. }
            | Self::PermissionDenied { .. }
            | Self::FileTooLarge { .. }
            | Self::InvalidUtf8 { .. }
            | Self::StdinReadError { .. }
            | Self::IoError { .. }
            | Self::ParseFailed { .. } => 2,

            Self::GraphNotFound { .. }
            | Self::NodeNotFound { .. }
            | Self::NoResults { .. }
            | Self::AnalysisFailed { .. } => 1,
        }
    }

    /// Returns a human-readable error message suitable for printing to stderr.
    pub fn message(&self) -> String {
        match self {
            Self::FileNotFound { path } => {
                format!("error: file not found: {}", path.display())
            }
            Self::PermissionDenied { path } => {
                format!("error: permission denied: {}", path.display())
            }
            Self::FileTooLarge {
                source,
                limit,
                actual: Some(actual),
            } => {
                format!("error: file too large: {source} is {actual} bytes, limit is {limit} bytes")
            }
            Self::FileTooLarge {
                source,
                limit,
                actual: None,
            } => {
                format!("error: file too large: {source} exceeded limit of {limit} bytes")
            }
            Self::InvalidUtf8 {
                source,
                byte_offset,
            } => {
                format!(
                    "error: invalid UTF-8 in {source}: first invalid byte at offset {byte_offset}"
                )
            }
            Self::StdinReadError { detail } => {
                format!("error: failed to read stdin: {detail}")
            }
            Self::IoError { source, detail } => {
                format!("error: I/O error on {source}: {detail}")
            }
            Self::ParseFailed { detail } => format!("error: {detail}"),
            Self::GraphNotFound { id } => format!("error: graph not found: {id}"),
            Self::NodeNotFound { graph, node } => {
                format!("error: node {node} not found in graph {graph}")
            }
            Self::NoResults { detail } => format!("error: no results: {detail}"),
            Self::AnalysisFailed { graph, source } => {
                format!("error: graph {graph}: {source}")
            }
        }
    }

    /// Wraps a stdout write failure.
    pub fn stdout(e: &std::io::Error) -> Self {
        Self::IoError {
            source: "stdout".to_owned(),
            detail: e.to_string(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

impl std::error::Error for CliError {}

impl From<TransportError> for CliError {
    fn from(e: TransportError) -> Self {
        Self::ParseFailed {
            detail: e.to_string(),
        }
    }
}

impl From<CorpusError> for CliError {
    fn from(e: CorpusError) -> Self {
        match e {
            CorpusError::UnknownGraph(id) => Self::GraphNotFound { id: id.to_string() },
            CorpusError::UnknownNode { graph, node } => Self::NodeNotFound {
                graph: graph.to_string(),
                node: node.0,
            },
            CorpusError::Analysis { graph, source } => Self::AnalysisFailed {
                graph: graph.to_string(),
                source,
            },
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
