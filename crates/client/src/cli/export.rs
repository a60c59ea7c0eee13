//! Export CLI commands.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use super::FilterArgs;

/// Export commands.
#[derive(Debug, Parser)]
pub struct ExportCommand {
    #[command(subcommand)]
    pub action: ExportAction,
}

/// Available export formats.
#[derive(Debug, Subcommand)]
pub enum ExportAction {
    /// Export the filtered events as CSV.
    Csv {
        /// Output file. Defaults to `agenda_kegiatan_<date>.csv`.
        #[arg(long, short)]
        output: Option<PathBuf>,
        #[command(flatten)]
        filter: FilterArgs,
    },
    /// Render the printable HTML report.
    Print {
        /// Output file. Printed to stdout when omitted.
        #[arg(long, short)]
        output: Option<PathBuf>,
        #[command(flatten)]
        filter: FilterArgs,
    },
}
