//! Node RPC client boundary
//!
//! The reporter only ever needs two read-only calls from the node, captured
//! by the [`NodeClient`] trait. The binary talks to a real LND instance
//! through [`LndRestClient`]; tests substitute an in-memory fake.

pub mod lnd;

pub use lnd::LndRestClient;

use crate::error::LnBalanceResult;
use crate::models::{ChannelRecord, WalletBalance};

/// Read-only RPC surface the reporter consumes from a node
pub trait NodeClient {
    /// Fetch the node's current channel list
    fn list_channels(&self) -> LnBalanceResult<Vec<ChannelRecord>>;

    /// Fetch the node's on-chain wallet balance
    fn wallet_balance(&self) -> LnBalanceResult<WalletBalance>;
}
