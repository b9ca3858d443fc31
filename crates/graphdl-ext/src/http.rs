//! Reqwest transport for the cancel RPC.

use async_trait::async_trait;
use graphdl_core::{
    CANCEL_ENDPOINT, CancelOutcome, CancelRequest, CancelResponse, CancelRpcError,
    CancelTransportPort, NodeId,
};
use url::Url;

use crate::config::CancelClientConfig;

/// Production cancel transport speaking JSON over HTTP to the host backend.
///
/// The backend reports "not_found" with a 404 status line, so the status
/// line is ignored whenever the body decodes into a cancel response; only
/// transport failures and undecodable bodies become errors. No request
/// timeout is configured: the cancel call has none client-side, and a stuck
/// call is superseded by reissuing the control.
pub struct ReqwestCancelClient {
    client: reqwest::Client,
    endpoint: Url,
}

impl ReqwestCancelClient {
    /// Create a transport for the given configuration.
    #[must_use]
    pub fn new(config: &CancelClientConfig) -> Self {
        let client = reqwest::Client::builder()
            .build()
            .expect("failed to create HTTP client");
        let endpoint = config
            .base_url
            .join(CANCEL_ENDPOINT)
            .expect("cancel endpoint URL construction should not fail");

        Self { client, endpoint }
    }

    /// The resolved cancel endpoint URL.
    #[must_use]
    pub const fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

fn map_reqwest_error(err: &reqwest::Error) -> CancelRpcError {
    match err.status() {
        Some(status) => CancelRpcError::network_with_status(err.to_string(), status.as_u16()),
        None => CancelRpcError::network(err.to_string()),
    }
}

#[async_trait]
impl CancelTransportPort for ReqwestCancelClient {
    async fn cancel_download(&self, node: &NodeId) -> Result<CancelOutcome, CancelRpcError> {
        let body = CancelRequest {
            node_id: node.clone(),
        };

        let response = self
            .client
            .post(self.endpoint.clone())
            .json(&body)
            .send()
            .await
            .map_err(|err| map_reqwest_error(&err))?;

        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .map_err(|err| map_reqwest_error(&err))?;

        match serde_json::from_slice::<CancelResponse>(&bytes) {
            Ok(decoded) => Ok(CancelOutcome::from(&decoded)),
            Err(_) if !status.is_success() => Err(CancelRpcError::network_with_status(
                format!("cancel endpoint returned HTTP {status}"),
                status.as_u16(),
            )),
            Err(err) => Err(CancelRpcError::invalid_response(err.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_built_from_base_url() {
        let config = CancelClientConfig::new();
        let client = ReqwestCancelClient::new(&config);
        assert_eq!(
            client.endpoint().as_str(),
            "http://127.0.0.1:8188/model_downloader/cancel"
        );
    }

    #[test]
    fn test_endpoint_replaces_base_path() {
        let config = CancelClientConfig::new()
            .with_base_url(Url::parse("http://host:9000/some/prefix").unwrap());
        let client = ReqwestCancelClient::new(&config);
        // The endpoint path is absolute on the backend.
        assert_eq!(
            client.endpoint().as_str(),
            "http://host:9000/model_downloader/cancel"
        );
    }
}
