//! Cancel RPC port.
//!
//! The backend owns the actual download task; cancelling one is a
//! request/response call keyed by node id. This port abstracts the transport
//! so the controller can be driven by the reqwest client in `graphdl-ext` or
//! by scripted fakes in tests.

use crate::node::NodeId;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Path of the cancel endpoint on the host backend.
pub const CANCEL_ENDPOINT: &str = "/model_downloader/cancel";

/// Wire body of a cancel request.
///
/// The node id is serialized as a string regardless of its native type.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CancelRequest {
    /// Id of the node whose download should be cancelled.
    pub node_id: NodeId,
}

/// Wire body of a cancel response.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CancelResponse {
    /// Backend status string ("cancelled", "not_found", or other).
    pub status: String,
    /// Optional human-readable detail for non-success statuses.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Interpreted result of a cancel RPC.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CancelOutcome {
    /// The backend cancelled an active download for the node.
    Cancelled,
    /// The backend had no active download for the node.
    NotFound,
    /// A status outside the known set (defined but unhandled; the UI leaves
    /// the label untouched and the open question is flagged at `warn` level).
    Unknown(String),
}

impl CancelOutcome {
    /// Interpret a backend status string.
    #[must_use]
    pub fn from_status(status: &str) -> Self {
        match status {
            "cancelled" => Self::Cancelled,
            "not_found" => Self::NotFound,
            other => Self::Unknown(other.to_string()),
        }
    }
}

impl From<&CancelResponse> for CancelOutcome {
    fn from(response: &CancelResponse) -> Self {
        Self::from_status(&response.status)
    }
}

/// Errors from the cancel transport.
///
/// Designed without a dependency on any HTTP client type; the adapter maps
/// its own errors into these at the boundary. Every variant folds into the
/// same `RequestFailed` UI state.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum CancelRpcError {
    /// Transport-level failure (connect, TLS, interrupted body, or an HTTP
    /// error status with an undecodable body).
    #[error("cancel request failed: {message}")]
    Network {
        /// Detailed error message.
        message: String,
        /// HTTP status code if one was received.
        status_code: Option<u16>,
    },

    /// The response body was not a decodable cancel response.
    #[error("invalid cancel response: {message}")]
    InvalidResponse {
        /// Description of what was invalid.
        message: String,
    },
}

impl CancelRpcError {
    /// Create a network error without a status code.
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
            status_code: None,
        }
    }

    /// Create a network error carrying an HTTP status code.
    pub fn network_with_status(message: impl Into<String>, status_code: u16) -> Self {
        Self::Network {
            message: message.into(),
            status_code: Some(status_code),
        }
    }

    /// Create an invalid response error.
    pub fn invalid_response(message: impl Into<String>) -> Self {
        Self::InvalidResponse {
            message: message.into(),
        }
    }
}

/// Port for the backend cancel RPC.
///
/// One logical call per control activation. The call itself carries no
/// client-side timeout: if it never resolves, the control stays in its
/// requesting state until the user reissues it (a reissue supersedes the
/// stuck continuation via the controller's sequence guard).
#[async_trait]
pub trait CancelTransportPort: Send + Sync {
    /// Request termination of the in-flight download for `node`.
    async fn cancel_download(&self, node: &NodeId) -> Result<CancelOutcome, CancelRpcError>;
}
