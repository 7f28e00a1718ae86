//! lnbalance - Channel and wallet balance reporting for LND nodes
//!
//! This library backs the `lnbalance` binary: it connects to a running LND
//! node's REST interface, fetches the channel list and on-chain wallet
//! balance, aggregates balances into active/inactive and local/remote
//! categories, and renders the result as a table, a mapping, or JSON.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: node connection settings and credential paths
//! - `error`: custom error types
//! - `models`: core data models (satoshi amounts, channel records, wallet balance)
//! - `client`: the node RPC boundary and the LND REST implementation
//! - `report`: balance aggregation and percentage computation
//! - `display`: table, mapping, and JSON rendering
//!
//! # Example
//!
//! ```rust,ignore
//! use lnbalance::client::{LndRestClient, NodeClient};
//! use lnbalance::config::{Network, NodeConfig};
//!
//! let config = NodeConfig::new("localhost:8080".into(), Network::Mainnet, None, None, None)?;
//! let client = LndRestClient::connect(&config)?;
//! let report = lnbalance::report::generate(&client)?;
//! ```

pub mod client;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod report;

pub use error::{LnBalanceError, LnBalanceResult};
