//! Per-node UI state and the cancel-control state machine.

use crate::node::{NodeId, NodeKind};
use crate::ports::CancelOutcome;
use serde::{Deserialize, Serialize};

/// States of the cancel control.
///
/// `Idle` is the resting state; `Requesting` holds while the RPC is in
/// flight; the three completion states are transient and return to `Idle`
/// when the reset timer fires.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CancelControlState {
    /// Resting state, control is ready to issue a request.
    #[default]
    Idle,
    /// A cancel RPC is in flight.
    Requesting,
    /// The backend cancelled an active download.
    Cancelled,
    /// The backend had no active download for this node.
    NotFound,
    /// The RPC failed in transport or produced an undecodable body.
    RequestFailed,
}

impl CancelControlState {
    /// The label the host renders on the control in this state.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Idle => "Cancel Download",
            Self::Requesting => "Cancelling...",
            Self::Cancelled => "Download Cancelled",
            Self::NotFound => "No Active Download",
            Self::RequestFailed => "Cancel Failed",
        }
    }

    /// True for the completion states the reset timer returns to `Idle`.
    #[must_use]
    pub const fn is_transient(&self) -> bool {
        matches!(self, Self::Cancelled | Self::NotFound | Self::RequestFailed)
    }
}

/// UI-facing state of one downloader node.
///
/// Owned via the registry for exactly the node's lifetime. The host reads
/// the progress fraction and the cancel label from here when painting;
/// mutation happens only through the node's own router dispatch and cancel
/// controller, never across nodes.
#[derive(Clone, Debug)]
pub struct DownloadNodeState {
    node_id: NodeId,
    kind: NodeKind,
    progress_fraction: Option<f64>,
    cancel_control: CancelControlState,
}

impl DownloadNodeState {
    /// Create the state for a freshly constructed node.
    pub fn new(node_id: impl Into<NodeId>, kind: NodeKind) -> Self {
        Self {
            node_id: node_id.into(),
            kind,
            progress_fraction: None,
            cancel_control: CancelControlState::Idle,
        }
    }

    /// The node this state belongs to.
    #[must_use]
    pub const fn node_id(&self) -> &NodeId {
        &self.node_id
    }

    /// The node's kind.
    #[must_use]
    pub const fn kind(&self) -> NodeKind {
        self.kind
    }

    /// Current progress fraction, unset until the first accepted event.
    ///
    /// Nominally in [0.0, 1.0] but neither clamped nor monotonic; the
    /// producer may skip, reset, or overshoot.
    #[must_use]
    pub const fn progress_fraction(&self) -> Option<f64> {
        self.progress_fraction
    }

    /// Current cancel-control state.
    #[must_use]
    pub const fn cancel_control(&self) -> CancelControlState {
        self.cancel_control
    }

    /// The label the host should render on the cancel control.
    #[must_use]
    pub const fn cancel_label(&self) -> &'static str {
        self.cancel_control.label()
    }

    /// Record a normalized progress fraction.
    ///
    /// The router has already applied the positive-maximum guard; this
    /// stores whatever it was given, including out-of-range values.
    pub const fn record_progress(&mut self, fraction: f64) {
        self.progress_fraction = Some(fraction);
    }

    /// Control activation: enter `Requesting`.
    ///
    /// The control stays interactive while requesting, so this can also fire
    /// from a transient state; the label updates synchronously either way.
    pub const fn begin_cancel_request(&mut self) {
        self.cancel_control = CancelControlState::Requesting;
    }

    /// Apply an interpreted RPC outcome.
    ///
    /// Returns whether the control changed: an unknown status is a no-op for
    /// the label (open question, see DESIGN.md) and reports `false`.
    pub fn apply_cancel_outcome(&mut self, outcome: &CancelOutcome) -> bool {
        match outcome {
            CancelOutcome::Cancelled => {
                self.cancel_control = CancelControlState::Cancelled;
                true
            }
            CancelOutcome::NotFound => {
                self.cancel_control = CancelControlState::NotFound;
                true
            }
            CancelOutcome::Unknown(_) => false,
        }
    }

    /// RPC transport failure: enter `RequestFailed`.
    pub const fn fail_cancel_request(&mut self) {
        self.cancel_control = CancelControlState::RequestFailed;
    }

    /// Timer-driven return to the resting state.
    pub const fn reset_cancel_control(&mut self) {
        self.cancel_control = CancelControlState::Idle;
    }
}
