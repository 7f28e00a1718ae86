//! Balance aggregation and percentage computation
//!
//! One pass over the node's channel list sorts every balance into four
//! buckets (local/remote crossed with active/inactive); the wallet balance
//! adds two more categories. [`BalanceReport`] then expresses each category
//! as satoshis plus three percentage views. Everything is recomputed from
//! scratch on every run; nothing is cached between invocations.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::client::NodeClient;
use crate::error::LnBalanceResult;
use crate::models::{ChannelRecord, Sats, WalletBalance};

/// The four channel-balance buckets plus a count of skipped records
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChannelSums {
    pub local_active: Sats,
    pub local_inactive: Sats,
    pub remote_active: Sats,
    pub remote_inactive: Sats,
    /// Records that failed the balance check and did not contribute
    pub skipped: usize,
}

impl ChannelSums {
    /// Total balance on our side, all channel states
    pub fn total_local(&self) -> Sats {
        self.local_active + self.local_inactive
    }

    /// Total balance on peers' sides, all channel states
    pub fn total_remote(&self) -> Sats {
        self.remote_active + self.remote_inactive
    }

    /// Total balance held in channels
    pub fn total_channel(&self) -> Sats {
        self.total_local() + self.total_remote()
    }
}

/// Sum channel balances into the four location/state buckets
///
/// A record with missing or non-numeric balance fields is logged and
/// skipped; the remaining records still contribute. One bad record never
/// aborts or zeroes the rest of the report.
pub fn aggregate(channels: &[ChannelRecord]) -> ChannelSums {
    let mut sums = ChannelSums::default();

    for (index, channel) in channels.iter().enumerate() {
        let (local, remote) = match channel.balances() {
            Ok(pair) => pair,
            Err(reason) => {
                warn!(index, %reason, "skipping malformed channel record");
                sums.skipped += 1;
                continue;
            }
        };

        if channel.active {
            sums.local_active += local;
            sums.remote_active += remote;
        } else {
            sums.local_inactive += local;
            sums.remote_inactive += remote;
        }
    }

    sums
}

/// Percentage of `part` in `whole`, rounded to two decimals
///
/// Rounds half away from zero (plain half-up for these non-negative
/// amounts). Returns `None` when `whole` is zero: the figure is
/// not-applicable rather than an error.
pub fn percent(part: Sats, whole: Sats) -> Option<f64> {
    if whole.is_zero() {
        return None;
    }
    let ratio = part.get() as f64 / whole.get() as f64 * 100.0;
    Some((ratio * 100.0).round() / 100.0)
}

/// One reported category: its balance and the three percentage views
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryFigures {
    /// Comma-grouped satoshi amount
    pub satoshis: String,

    /// Share of this category's own location total (local channel total,
    /// remote channel total, or wallet total); `None` when undefined
    pub pct_of_location: Option<f64>,

    /// Share of the total balance held in channels
    pub pct_of_channel_total: Option<f64>,

    /// Share of the node total (channel balance plus wallet balance)
    pub pct_of_node_total: Option<f64>,
}

/// Aggregated balances of the whole node, one entry per category
///
/// Field order is the row order of the rendered table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalanceReport {
    pub local_active: CategoryFigures,
    pub local_inactive: CategoryFigures,
    pub remote_active: CategoryFigures,
    pub remote_inactive: CategoryFigures,
    pub wallet_confirmed: CategoryFigures,
    pub wallet_total: CategoryFigures,
}

impl BalanceReport {
    /// Derive the full report from channel sums and the wallet balance
    pub fn build(sums: &ChannelSums, wallet: &WalletBalance) -> Self {
        let total_local = sums.total_local();
        let total_remote = sums.total_remote();
        let total_channel = sums.total_channel();
        let node_total = total_channel + wallet.total_balance;

        let entry = |amount: Sats, location_total: Sats| CategoryFigures {
            satoshis: amount.grouped(),
            pct_of_location: percent(amount, location_total),
            pct_of_channel_total: percent(amount, total_channel),
            pct_of_node_total: percent(amount, node_total),
        };

        Self {
            local_active: entry(sums.local_active, total_local),
            local_inactive: entry(sums.local_inactive, total_local),
            remote_active: entry(sums.remote_active, total_remote),
            remote_inactive: entry(sums.remote_inactive, total_remote),
            wallet_confirmed: entry(wallet.confirmed_balance, wallet.total_balance),
            wallet_total: entry(wallet.total_balance, wallet.total_balance),
        }
    }
}

/// Fetch both balance views from the node and build the report
///
/// The two calls run sequentially and both must succeed; the report is
/// never built from partial data.
pub fn generate(client: &dyn NodeClient) -> LnBalanceResult<BalanceReport> {
    let channels = client.list_channels()?;
    let wallet = client.wallet_balance()?;
    let sums = aggregate(&channels);
    Ok(BalanceReport::build(&sums, &wallet))
}
