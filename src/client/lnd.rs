//! LND REST client
//!
//! Talks to the node's REST proxy over TLS. The node presents a self-signed
//! certificate, so the certificate from the node directory is pinned as the
//! only trusted root, and the hex-encoded admin macaroon rides along on
//! every request in the `Grpc-Metadata-macaroon` header.

use std::fs;

use reqwest::blocking::Client;
use reqwest::{Certificate, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::debug;

use super::NodeClient;
use crate::config::NodeConfig;
use crate::error::{LnBalanceError, LnBalanceResult};
use crate::models::{ChannelRecord, WalletBalance};

/// Header the REST proxy expects the macaroon on
const MACAROON_HEADER: &str = "Grpc-Metadata-macaroon";

/// Client for LND's REST interface
///
/// Credentials are read once at construction; the client is then reused for
/// every call in the process lifetime.
pub struct LndRestClient {
    http: Client,
    base_url: String,
    macaroon_hex: String,
}

#[derive(Deserialize)]
struct ListChannelsResponse {
    #[serde(default)]
    channels: Vec<ChannelRecord>,
}

impl LndRestClient {
    /// Build a client from the node configuration
    ///
    /// # Errors
    ///
    /// Returns a configuration error when the TLS certificate or macaroon
    /// cannot be read or the certificate is not valid PEM.
    pub fn connect(config: &NodeConfig) -> LnBalanceResult<Self> {
        let cert_path = config.tls_cert_path();
        let cert_pem = fs::read(&cert_path).map_err(|e| {
            LnBalanceError::Config(format!(
                "cannot read TLS certificate {}: {}",
                cert_path.display(),
                e
            ))
        })?;
        let cert = Certificate::from_pem(&cert_pem)
            .map_err(|e| LnBalanceError::Config(format!("invalid TLS certificate: {}", e)))?;

        let macaroon_path = config.macaroon_path();
        let macaroon = fs::read(&macaroon_path).map_err(|e| {
            LnBalanceError::Config(format!(
                "cannot read macaroon {}: {}",
                macaroon_path.display(),
                e
            ))
        })?;

        // Trust exactly the node's own certificate.
        let http = Client::builder()
            .add_root_certificate(cert)
            .tls_built_in_root_certs(false)
            .build()
            .map_err(|e| LnBalanceError::Connection(e.to_string()))?;

        Ok(Self {
            http,
            base_url: format!("https://{}", config.rest_host),
            macaroon_hex: hex::encode(macaroon),
        })
    }

    fn get<T: DeserializeOwned>(&self, path: &str) -> LnBalanceResult<T> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, "issuing node RPC");

        let response = self
            .http
            .get(&url)
            .header(MACAROON_HEADER, self.macaroon_hex.as_str())
            .send()
            .map_err(|e| {
                if e.is_connect() || e.is_timeout() {
                    LnBalanceError::Connection(e.to_string())
                } else {
                    LnBalanceError::Rpc(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(classify_http_failure(status, &body));
        }

        response
            .json()
            .map_err(|e| LnBalanceError::Rpc(format!("invalid response payload: {}", e)))
    }
}

impl NodeClient for LndRestClient {
    fn list_channels(&self) -> LnBalanceResult<Vec<ChannelRecord>> {
        let response: ListChannelsResponse = self.get("/v1/channels")?;
        debug!(count = response.channels.len(), "fetched channel list");
        Ok(response.channels)
    }

    fn wallet_balance(&self) -> LnBalanceResult<WalletBalance> {
        self.get("/v1/balance/blockchain")
    }
}

/// Map a non-success HTTP response to an error kind
///
/// LND reports macaroon problems either as 401/403 or as an internal error
/// whose body mentions the macaroon, so the body is inspected as well.
fn classify_http_failure(status: StatusCode, body: &str) -> LnBalanceError {
    let body = body.trim();
    if status == StatusCode::UNAUTHORIZED
        || status == StatusCode::FORBIDDEN
        || body.contains("permission denied")
        || body.contains("macaroon")
    {
        return LnBalanceError::Authentication(format!("node rejected credentials ({})", status));
    }
    LnBalanceError::Rpc(format!("{}: {}", status, body))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_auth_failures() {
        assert!(classify_http_failure(StatusCode::UNAUTHORIZED, "").is_authentication());
        assert!(classify_http_failure(StatusCode::FORBIDDEN, "").is_authentication());
        assert!(classify_http_failure(
            StatusCode::INTERNAL_SERVER_ERROR,
            r#"{"error": "verification failed: invalid macaroon"}"#
        )
        .is_authentication());
        assert!(classify_http_failure(
            StatusCode::INTERNAL_SERVER_ERROR,
            r#"{"error": "permission denied"}"#
        )
        .is_authentication());
    }

    #[test]
    fn test_classify_other_failures() {
        let err = classify_http_failure(StatusCode::NOT_FOUND, "no such endpoint");
        assert!(matches!(err, LnBalanceError::Rpc(_)));
        assert!(err.to_string().contains("404"));
    }

    #[test]
    fn test_list_channels_response_shape() {
        let response: ListChannelsResponse =
            serde_json::from_str(r#"{"channels": [{"active": true, "local_balance": "1"}]}"#)
                .unwrap();
        assert_eq!(response.channels.len(), 1);

        // A node with no channels may answer with an empty object.
        let response: ListChannelsResponse = serde_json::from_str("{}").unwrap();
        assert!(response.channels.is_empty());
    }
}
