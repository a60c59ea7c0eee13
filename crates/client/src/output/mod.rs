//! Output formatting functions.

pub mod csv;
pub mod json;
pub mod pretty;
pub mod print;

use crate::cli::OutputFormat;
use crate::error::Result;

/// Format a value for output.
pub fn format_output<T: serde::Serialize>(value: &T, format: OutputFormat) -> Result<String> {
    let output = match format {
        OutputFormat::Json => json::format_json(value)?,
        OutputFormat::Pretty => json::format_json_pretty(value)?,
    };
    Ok(output)
}
