//! Channel and wallet balance records as the node reports them
//!
//! These mirror the wire shape of the node's `ListChannels` and
//! `WalletBalance` responses. The REST proxy serializes int64 balances as
//! decimal strings and omits boolean fields that are false, so the raw
//! channel record is deliberately loose; [`ChannelRecord::balances`] is the
//! narrow check that decides whether a record can contribute to a report.

use serde::{Deserialize, Deserializer};
use std::fmt;

use crate::models::Sats;

/// One channel summary from the node's channel list
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChannelRecord {
    /// Connectivity state at query time; absent on the wire means inactive
    #[serde(default)]
    pub active: bool,

    /// Balance on our side of the channel, as the node sent it
    #[serde(default)]
    pub local_balance: Option<String>,

    /// Balance on the peer's side of the channel, as the node sent it
    #[serde(default)]
    pub remote_balance: Option<String>,
}

impl ChannelRecord {
    /// Create a well-formed record (used by tests and fakes)
    pub fn new(active: bool, local_balance: u64, remote_balance: u64) -> Self {
        Self {
            active,
            local_balance: Some(local_balance.to_string()),
            remote_balance: Some(remote_balance.to_string()),
        }
    }

    /// Parse both balance fields into satoshi amounts
    ///
    /// Fails when either field is missing or not a non-negative integer.
    /// Callers decide what skipping a malformed record means; this check
    /// only answers whether the record is usable.
    pub fn balances(&self) -> Result<(Sats, Sats), MalformedRecord> {
        let local = parse_balance("local_balance", self.local_balance.as_deref())?;
        let remote = parse_balance("remote_balance", self.remote_balance.as_deref())?;
        Ok((local, remote))
    }
}

fn parse_balance(field: &'static str, value: Option<&str>) -> Result<Sats, MalformedRecord> {
    let value = value.ok_or(MalformedRecord::MissingField(field))?;
    value.parse().map_err(|_| MalformedRecord::BadInteger {
        field,
        value: value.to_string(),
    })
}

/// Why a channel record could not contribute to the sums
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MalformedRecord {
    MissingField(&'static str),
    BadInteger { field: &'static str, value: String },
}

impl fmt::Display for MalformedRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MalformedRecord::MissingField(field) => write!(f, "missing {} field", field),
            MalformedRecord::BadInteger { field, value } => {
                write!(f, "{} is not a satoshi amount: {:?}", field, value)
            }
        }
    }
}

impl std::error::Error for MalformedRecord {}

/// On-chain wallet balance summary
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct WalletBalance {
    /// Balance with at least one confirmation
    #[serde(default, deserialize_with = "sats_field")]
    pub confirmed_balance: Sats,

    /// Confirmed plus unconfirmed balance
    #[serde(default, deserialize_with = "sats_field")]
    pub total_balance: Sats,
}

impl WalletBalance {
    /// Create a wallet balance (used by tests and fakes)
    pub fn new(confirmed_balance: u64, total_balance: u64) -> Self {
        Self {
            confirmed_balance: Sats::new(confirmed_balance),
            total_balance: Sats::new(total_balance),
        }
    }
}

/// Accept a satoshi amount written either as a JSON number or as the node's
/// string-encoded int64.
fn sats_field<'de, D>(deserializer: D) -> Result<Sats, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(u64),
        Text(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Number(n) => Ok(Sats::new(n)),
        Raw::Text(s) => s.parse().map_err(serde::de::Error::custom),
    }
}
