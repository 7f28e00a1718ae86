//! Configuration module for lnbalance
//!
//! Resolves where to find the node's REST interface and its credential
//! files. Defaults follow the stock LND layout:
//!
//! - REST interface on `localhost:8080`
//! - node directory at `~/.lnd`
//! - TLS certificate at `<lnd_dir>/tls.cert`
//! - admin macaroon at `<lnd_dir>/data/chain/bitcoin/<network>/admin.macaroon`
//!
//! Every piece can be overridden by a CLI flag or environment variable.

use std::fmt;
use std::path::PathBuf;

use clap::ValueEnum;
use directories::BaseDirs;

use crate::error::{LnBalanceError, LnBalanceResult};

/// Bitcoin network the node runs on
///
/// Only selects the macaroon subdirectory; the node itself knows which
/// network it serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Network {
    #[default]
    Mainnet,
    Testnet,
    Signet,
    Regtest,
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Network::Mainnet => "mainnet",
            Network::Testnet => "testnet",
            Network::Signet => "signet",
            Network::Regtest => "regtest",
        };
        f.write_str(name)
    }
}

/// Connection settings for one node
#[derive(Debug, Clone)]
pub struct NodeConfig {
    /// Host and port of the node's REST interface
    pub rest_host: String,

    /// Network used to locate the admin macaroon
    pub network: Network,

    /// Node directory holding tls.cert and the macaroon tree
    pub lnd_dir: PathBuf,

    tls_cert: Option<PathBuf>,
    macaroon: Option<PathBuf>,
}

impl NodeConfig {
    /// Assemble a configuration from CLI inputs
    ///
    /// # Errors
    ///
    /// Returns an error if no node directory was given and the home
    /// directory cannot be determined.
    pub fn new(
        rest_host: String,
        network: Network,
        lnd_dir: Option<PathBuf>,
        tls_cert: Option<PathBuf>,
        macaroon: Option<PathBuf>,
    ) -> LnBalanceResult<Self> {
        let lnd_dir = match lnd_dir {
            Some(dir) => dir,
            None => default_lnd_dir()?,
        };

        Ok(Self {
            rest_host,
            network,
            lnd_dir,
            tls_cert,
            macaroon,
        })
    }

    /// Path of the node's TLS certificate
    pub fn tls_cert_path(&self) -> PathBuf {
        self.tls_cert
            .clone()
            .unwrap_or_else(|| self.lnd_dir.join("tls.cert"))
    }

    /// Path of the admin macaroon for the configured network
    pub fn macaroon_path(&self) -> PathBuf {
        self.macaroon.clone().unwrap_or_else(|| {
            self.lnd_dir
                .join("data")
                .join("chain")
                .join("bitcoin")
                .join(self.network.to_string())
                .join("admin.macaroon")
        })
    }
}

/// Resolve the default `~/.lnd` node directory
fn default_lnd_dir() -> LnBalanceResult<PathBuf> {
    let base = BaseDirs::new()
        .ok_or_else(|| LnBalanceError::Config("cannot determine home directory".into()))?;
    Ok(base.home_dir().join(".lnd"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_for(network: Network) -> NodeConfig {
        NodeConfig::new(
            "localhost:8080".into(),
            network,
            Some(PathBuf::from("/var/lnd")),
            None,
            None,
        )
        .unwrap()
    }

    #[test]
    fn test_default_credential_paths() {
        let config = config_for(Network::Mainnet);
        assert_eq!(config.tls_cert_path(), PathBuf::from("/var/lnd/tls.cert"));
        assert_eq!(
            config.macaroon_path(),
            PathBuf::from("/var/lnd/data/chain/bitcoin/mainnet/admin.macaroon")
        );
    }

    #[test]
    fn test_network_selects_macaroon_dir() {
        let config = config_for(Network::Testnet);
        assert_eq!(
            config.macaroon_path(),
            PathBuf::from("/var/lnd/data/chain/bitcoin/testnet/admin.macaroon")
        );
    }

    #[test]
    fn test_explicit_paths_win() {
        let config = NodeConfig::new(
            "10.0.0.5:8080".into(),
            Network::Mainnet,
            Some(PathBuf::from("/var/lnd")),
            Some(PathBuf::from("/etc/lnd/tls.cert")),
            Some(PathBuf::from("/etc/lnd/readonly.macaroon")),
        )
        .unwrap();
        assert_eq!(config.tls_cert_path(), PathBuf::from("/etc/lnd/tls.cert"));
        assert_eq!(
            config.macaroon_path(),
            PathBuf::from("/etc/lnd/readonly.macaroon")
        );
    }

    #[test]
    fn test_network_display() {
        assert_eq!(Network::Mainnet.to_string(), "mainnet");
        assert_eq!(Network::Signet.to_string(), "signet");
    }
}
