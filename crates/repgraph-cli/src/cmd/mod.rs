/// Command modules for the `repgraph` CLI.
///
/// Each submodule implements one subcommand. Its `run` function takes the
/// loaded corpus and the parsed arguments, writes the result to stdout, and
/// returns `Ok(())` on success or a [`crate::error::CliError`] on failure.
pub mod analyze;
pub mod compare;
pub mod formal;
pub mod longest;
pub mod reorder;
pub mod search;
pub mod span;
pub mod stats;
