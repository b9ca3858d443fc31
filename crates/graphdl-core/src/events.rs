//! Progress event wire payload.

use crate::node::NodeId;
use serde::{Deserialize, Serialize};

/// Name of the host's push channel that carries download progress.
pub const PROGRESS_EVENT: &str = "progress";

/// A pushed progress notification as delivered by the host's event bus.
///
/// The channel is shared with other node types and the producer's contract
/// is unspecified, so every field is optional on the wire. Events that are
/// missing a target, address an unregistered node, or declare a non-positive
/// maximum are steady-state traffic and drop at the router without error.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ProgressEvent {
    /// Target node id, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node: Option<NodeId>,
    /// Units completed so far.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    /// Declared maximum (total units).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
}

impl ProgressEvent {
    /// Create a fully populated event (tests and in-process producers).
    pub fn new(node: impl Into<NodeId>, value: f64, max: f64) -> Self {
        Self {
            node: Some(node.into()),
            value: Some(value),
            max: Some(max),
        }
    }

    /// Normalized completion fraction, if this event is usable.
    ///
    /// The declared maximum must be strictly positive; anything else (absent,
    /// zero, negative, NaN) yields `None` so division by zero and NaN can
    /// never reach node state. The fraction itself is deliberately NOT
    /// clamped: out-of-range values pass through so backend bugs surface in
    /// the UI instead of being masked.
    #[must_use]
    pub fn fraction(&self) -> Option<f64> {
        let value = self.value?;
        let max = self.max?;
        if max > 0.0 { Some(value / max) } else { None }
    }
}
