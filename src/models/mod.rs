//! Core data models for lnbalance
//!
//! This module contains the data structures that represent the node's
//! balance domain: satoshi amounts, channel records, and the on-chain
//! wallet balance.

pub mod channel;
pub mod sats;

pub use channel::{ChannelRecord, MalformedRecord, WalletBalance};
pub use sats::Sats;
