//! Output rendering for balance reports
//!
//! A report renders in one of three formats: a fixed-width table for
//! terminals, a pretty-printed mapping keyed by category name, or the same
//! mapping as compact JSON. The mapping and JSON forms are structurally
//! identical; only the whitespace differs.

pub mod table;

pub use table::format_balance_table;

use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;

use crate::error::{LnBalanceError, LnBalanceResult};
use crate::report::BalanceReport;

/// Output format selection
///
/// There is deliberately no default: the caller must pick one, and an
/// unrecognized name is an error rather than a silent fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Fixed-width grid for terminals
    Table,
    /// Pretty-printed mapping keyed by category name
    Dict,
    /// Compact JSON, same structure as the mapping
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutputFormat::Table => "table",
            OutputFormat::Dict => "dict",
            OutputFormat::Json => "json",
        };
        f.write_str(name)
    }
}

impl FromStr for OutputFormat {
    type Err = LnBalanceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "table" => Ok(OutputFormat::Table),
            "dict" => Ok(OutputFormat::Dict),
            "json" => Ok(OutputFormat::Json),
            other => Err(LnBalanceError::InvalidFormat(other.to_string())),
        }
    }
}

/// Render a report in the selected format
pub fn render(report: &BalanceReport, format: OutputFormat) -> LnBalanceResult<String> {
    match format {
        OutputFormat::Table => Ok(format_balance_table(report)),
        OutputFormat::Dict => Ok(serde_json::to_string_pretty(report)?),
        OutputFormat::Json => Ok(serde_json::to_string(report)?),
    }
}
