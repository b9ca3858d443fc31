//! Node identity types.
//!
//! Pure data types with no I/O dependencies.

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Opaque identifier for a downloader node.
///
/// Stable for the node's lifetime and used as the correlation key for both
/// the progress channel and the cancel RPC. The host's native id is numeric,
/// but event payloads may carry it as either a number or a string, and the
/// cancel RPC body always wants a string; `NodeId` normalizes to the string
/// form on construction.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct NodeId(String);

impl NodeId {
    /// Create a node id from any string-like value.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the string form of the id (the wire form for the cancel RPC).
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for NodeId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

impl From<&str> for NodeId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for NodeId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl<'de> Deserialize<'de> for NodeId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct NodeIdVisitor;

        impl Visitor<'_> for NodeIdVisitor {
            type Value = NodeId;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a node id as a string or an integer")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<NodeId, E> {
                Ok(NodeId::new(v))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<NodeId, E> {
                Ok(NodeId::from(v))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<NodeId, E> {
                Ok(NodeId::new(v.to_string()))
            }
        }

        deserializer.deserialize_any(NodeIdVisitor)
    }
}

/// The downloader node types managed by the extension.
///
/// Only these kinds get a cancel control and a registry entry; progress
/// events addressed to any other node type on the shared bus drop at the
/// router because the node was never registered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    /// Downloads a single file from a HuggingFace repository URL.
    HfDownloader,
    /// Resolves a model by name, then downloads it (no URL input).
    AutoModelDownloader,
    /// Downloads a model version from a CivitAI URL.
    CivitaiDownloader,
}

impl NodeKind {
    /// The host-side type name of this node kind.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::HfDownloader => "HF Downloader",
            Self::AutoModelDownloader => "Auto Model Downloader",
            Self::CivitaiDownloader => "CivitAI Downloader",
        }
    }

    /// Parse a host-side type name. Unmanaged types return `None`.
    #[must_use]
    pub fn from_type_name(name: &str) -> Option<Self> {
        match name {
            "HF Downloader" => Some(Self::HfDownloader),
            "Auto Model Downloader" => Some(Self::AutoModelDownloader),
            "CivitAI Downloader" => Some(Self::CivitaiDownloader),
            _ => None,
        }
    }

    /// Whether this node kind carries a model-URL input field.
    #[must_use]
    pub const fn accepts_url(&self) -> bool {
        !matches!(self, Self::AutoModelDownloader)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_id_serializes_as_string() {
        let id = NodeId::from(42);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"42\"");
    }

    #[test]
    fn test_node_id_deserializes_from_number_or_string() {
        let from_number: NodeId = serde_json::from_str("17").unwrap();
        let from_string: NodeId = serde_json::from_str("\"17\"").unwrap();
        assert_eq!(from_number, from_string);
        assert_eq!(from_number.as_str(), "17");
    }

    #[test]
    fn test_node_id_rejects_other_json_types() {
        assert!(serde_json::from_str::<NodeId>("true").is_err());
        assert!(serde_json::from_str::<NodeId>("[1]").is_err());
    }

    #[test]
    fn test_kind_type_name_round_trip() {
        for kind in [
            NodeKind::HfDownloader,
            NodeKind::AutoModelDownloader,
            NodeKind::CivitaiDownloader,
        ] {
            assert_eq!(NodeKind::from_type_name(kind.type_name()), Some(kind));
        }
        assert_eq!(NodeKind::from_type_name("KSampler"), None);
    }

    #[test]
    fn test_url_input_is_kind_specific() {
        assert!(NodeKind::HfDownloader.accepts_url());
        assert!(NodeKind::CivitaiDownloader.accepts_url());
        assert!(!NodeKind::AutoModelDownloader.accepts_url());
    }
}
