//! Balance table formatting
//!
//! Renders a report as a fixed-width grid, one row per category plus the
//! two wallet rows.

use crate::report::{BalanceReport, CategoryFigures};

const LOCATION_HEADER: &str = "Balance Location";
const STATE_HEADER: &str = "Channel State";
const SATS_HEADER: &str = "satoshis";
const PCT_LOCATION_HEADER: &str = "% of Location";
const PCT_CHANNEL_HEADER: &str = "% of Channel total";
const PCT_NODE_HEADER: &str = "% of Node total";

/// Format a balance report as a fixed-width table
pub fn format_balance_table(report: &BalanceReport) -> String {
    let rows: [(&str, &str, &CategoryFigures); 6] = [
        ("Local channel", "active", &report.local_active),
        ("Local channel", "inactive", &report.local_inactive),
        ("Remote channel", "active", &report.remote_active),
        ("Remote channel", "inactive", &report.remote_inactive),
        ("Local wallet", "confirmed", &report.wallet_confirmed),
        ("Local wallet", "total", &report.wallet_total),
    ];

    // The satoshi column grows with the amounts; everything else is sized
    // by its header.
    let sats_width = rows
        .iter()
        .map(|(_, _, figures)| figures.satoshis.len())
        .max()
        .unwrap_or(0)
        .max(SATS_HEADER.len());

    let location_width = LOCATION_HEADER.len();
    let state_width = STATE_HEADER.len();
    let pct_location_width = PCT_LOCATION_HEADER.len();
    let pct_channel_width = PCT_CHANNEL_HEADER.len();
    let pct_node_width = PCT_NODE_HEADER.len();

    let mut output = String::new();

    output.push_str(&format!(
        "{:<location_width$}  {:<state_width$}  {:>sats_width$}  {:>pct_location_width$}  {:>pct_channel_width$}  {:>pct_node_width$}\n",
        LOCATION_HEADER,
        STATE_HEADER,
        SATS_HEADER,
        PCT_LOCATION_HEADER,
        PCT_CHANNEL_HEADER,
        PCT_NODE_HEADER,
        location_width = location_width,
        state_width = state_width,
        sats_width = sats_width,
        pct_location_width = pct_location_width,
        pct_channel_width = pct_channel_width,
        pct_node_width = pct_node_width,
    ));

    output.push_str(&format!(
        "{:-<location_width$}  {:-<state_width$}  {:->sats_width$}  {:->pct_location_width$}  {:->pct_channel_width$}  {:->pct_node_width$}\n",
        "",
        "",
        "",
        "",
        "",
        "",
        location_width = location_width,
        state_width = state_width,
        sats_width = sats_width,
        pct_location_width = pct_location_width,
        pct_channel_width = pct_channel_width,
        pct_node_width = pct_node_width,
    ));

    for (location, state, figures) in rows {
        output.push_str(&format!(
            "{:<location_width$}  {:<state_width$}  {:>sats_width$}  {:>pct_location_width$}  {:>pct_channel_width$}  {:>pct_node_width$}\n",
            location,
            state,
            figures.satoshis,
            format_pct(figures.pct_of_location),
            format_pct(figures.pct_of_channel_total),
            format_pct(figures.pct_of_node_total),
            location_width = location_width,
            state_width = state_width,
            sats_width = sats_width,
            pct_location_width = pct_location_width,
            pct_channel_width = pct_channel_width,
            pct_node_width = pct_node_width,
        ));
    }

    output
}

/// Two-decimal percentage, or `n/a` when the denominator was zero
fn format_pct(pct: Option<f64>) -> String {
    match pct {
        Some(value) => format!("{:.2}", value),
        None => "n/a".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ChannelRecord, WalletBalance};
    use crate::report::aggregate;

    fn sample_report() -> BalanceReport {
        let sums = aggregate(&[
            ChannelRecord::new(true, 1_234_700, 300),
            ChannelRecord::new(false, 200, 800),
        ]);
        BalanceReport::build(&sums, &WalletBalance::new(400, 500))
    }

    #[test]
    fn test_table_has_all_rows() {
        let table = format_balance_table(&sample_report());
        let lines: Vec<&str> = table.lines().collect();

        // Header, separator, four channel rows, two wallet rows.
        assert_eq!(lines.len(), 8);
        assert!(lines[0].contains("Balance Location"));
        assert!(lines[0].contains("% of Node total"));
        assert!(lines[1].starts_with("----"));
        assert_eq!(
            lines
                .iter()
                .filter(|line| line.starts_with("Local channel"))
                .count(),
            2
        );
        assert_eq!(
            lines
                .iter()
                .filter(|line| line.starts_with("Local wallet"))
                .count(),
            2
        );
    }

    #[test]
    fn test_table_groups_satoshis() {
        let table = format_balance_table(&sample_report());
        assert!(table.contains("1,234,700"));
    }

    #[test]
    fn test_table_aligns_columns() {
        let table = format_balance_table(&sample_report());
        let lines: Vec<&str> = table.lines().collect();
        let width = lines[0].len();
        for line in &lines {
            assert_eq!(line.len(), width, "ragged line: {:?}", line);
        }
    }

    #[test]
    fn test_table_prints_not_applicable() {
        let report = BalanceReport::build(&aggregate(&[]), &WalletBalance::new(0, 0));
        let table = format_balance_table(&report);
        assert!(table.contains("n/a"));
        assert!(!table.contains("NaN"));
    }

    #[test]
    fn test_format_pct() {
        assert_eq!(format_pct(Some(77.78)), "77.78");
        assert_eq!(format_pct(Some(28.0)), "28.00");
        assert_eq!(format_pct(None), "n/a");
    }
}
