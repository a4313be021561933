//! Output mode routing logic.

use std::io::IsTerminal;

use crate::errors::CliError;

/// How command results are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Machine-readable JSON only
    Json,
    /// One line per allocation, stable for scripts
    #[default]
    Plain,
    /// Boxed tables
    Table,
}

impl OutputMode {
    /// Resolve output mode from flags and terminal state.
    ///
    /// `--json` wins over everything. An explicit `--format` comes next.
    /// Otherwise tables are used on a TTY unless `TERM=dumb`.
    pub fn resolve(
        json_flag: bool,
        format_flag: Option<&str>,
        is_tty: bool,
        term_is_dumb: bool,
    ) -> anyhow::Result<Self> {
        if json_flag {
            return Ok(Self::Json);
        }

        match format_flag.map(|f| f.trim().to_ascii_lowercase()).as_deref() {
            Some("plain") => return Ok(Self::Plain),
            Some("table") => return Ok(Self::Table),
            Some(other) => {
                return Err(CliError::invalid_input(format!(
                    "Unknown output format: {} (use table or plain)",
                    other
                ))
                .into())
            }
            None => {}
        }

        if is_tty && !term_is_dumb {
            Ok(Self::Table)
        } else {
            Ok(Self::Plain)
        }
    }

    /// Resolve against the real stdout and `TERM`.
    pub fn from_env(json_flag: bool, format_flag: Option<&str>) -> anyhow::Result<Self> {
        let is_tty = std::io::stdout().is_terminal();
        let term_is_dumb = std::env::var("TERM").map(|v| v == "dumb").unwrap_or(false);
        Self::resolve(json_flag, format_flag, is_tty, term_is_dumb)
    }

    pub fn is_json(&self) -> bool {
        matches!(self, Self::Json)
    }
}
