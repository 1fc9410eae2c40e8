/// Output helpers shared by the subcommands.
///
/// Human mode writes aligned text to stdout, with `yes`/`no` verdicts
/// color-coded when colors are enabled. Colors are disabled when
/// `--no-color` is set, the `NO_COLOR` environment variable is present (per
/// <https://no-color.org>), or stdout is not a TTY. JSON mode writes a single
/// pretty-printed value followed by a newline.
use std::io::{IsTerminal as _, Write};

use repgraph_core::NodeId;
use serde::Serialize;

// ---------------------------------------------------------------------------
// Color support detection
// ---------------------------------------------------------------------------

/// Returns `true` if ANSI color codes should be emitted to stdout.
pub fn colors_enabled(no_color_flag: bool) -> bool {
    if no_color_flag {
        return false;
    }
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    std::io::stdout().is_terminal()
}

const ANSI_GREEN: &str = "\x1b[32m";
const ANSI_RED: &str = "\x1b[31m";
const ANSI_RESET: &str = "\x1b[0m";

/// Human-mode rendering settings derived from the CLI flags.
#[derive(Debug, Clone, Copy)]
pub struct Style {
    /// Whether ANSI colors are enabled.
    pub colors: bool,
}

impl Style {
    /// Constructs a [`Style`] from the `--no-color` flag.
    pub fn from_flags(no_color_flag: bool) -> Self {
        Self {
            colors: colors_enabled(no_color_flag),
        }
    }

    /// Renders a boolean verdict as `yes` or `no`.
    ///
    /// `good` is the value shown in green; the other one is shown in red.
    pub fn verdict(self, value: bool, good: bool) -> String {
        let word = if value { "yes" } else { "no" };
        if !self.colors {
            return word.to_owned();
        }
        let color = if value == good { ANSI_GREEN } else { ANSI_RED };
        format!("{color}{word}{ANSI_RESET}")
    }
}

// ---------------------------------------------------------------------------
// Writers
// ---------------------------------------------------------------------------

/// Writes `value` as pretty-printed JSON plus a trailing newline.
///
/// # Errors
///
/// Returns an error if serialization or the write fails.
pub fn write_json<W: Write, T: Serialize + ?Sized>(w: &mut W, value: &T) -> std::io::Result<()> {
    serde_json::to_writer_pretty(&mut *w, value)?;
    writeln!(w)
}

/// Renders a node path as `0 -> 1 -> 2`.
pub fn path_display(path: &[NodeId]) -> String {
    path.iter()
        .map(NodeId::to_string)
        .collect::<Vec<_>>()
        .join(" -> ")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
