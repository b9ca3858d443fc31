//! Cancel-control driver.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use graphdl_core::{CancelOutcome, CancelTransportPort, NodeCanvasPort, NodeId};
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::registry::NodeRegistry;

/// How long a transient completion label stays up before the control
/// returns to its resting state.
pub const RESET_DELAY: Duration = Duration::from_millis(2000);

/// Drives the cancel control of one node.
///
/// The control stays interactive while a request is in flight, so a second
/// activation can race the first. Each activation is tagged with a
/// monotonically increasing sequence number; a response, a transport
/// failure, or a scheduled label reset only takes effect while its sequence
/// is still the latest issued. A stale completion therefore never clobbers a
/// fresher one, and an RPC that never resolves (there is no client-side
/// timeout) is simply superseded by the next activation.
///
/// Continuations carry the node id, never a live state handle, and
/// re-resolve through the registry when they run; a node destroyed
/// mid-flight makes them no-ops.
#[derive(Clone)]
pub struct CancelController {
    node_id: NodeId,
    registry: NodeRegistry,
    canvas: Arc<dyn NodeCanvasPort>,
    transport: Arc<dyn CancelTransportPort>,
    issued: Arc<AtomicU64>,
    reset_delay: Duration,
}

impl CancelController {
    /// Create a controller bound to `node_id`.
    pub fn new(
        node_id: impl Into<NodeId>,
        registry: NodeRegistry,
        canvas: Arc<dyn NodeCanvasPort>,
        transport: Arc<dyn CancelTransportPort>,
    ) -> Self {
        Self {
            node_id: node_id.into(),
            registry,
            canvas,
            transport,
            issued: Arc::new(AtomicU64::new(0)),
            reset_delay: RESET_DELAY,
        }
    }

    /// Override the reset delay (host configuration).
    #[must_use]
    pub const fn with_reset_delay(mut self, delay: Duration) -> Self {
        self.reset_delay = delay;
        self
    }

    /// The node this controller mutates.
    #[must_use]
    pub const fn node_id(&self) -> &NodeId {
        &self.node_id
    }

    /// User activation of the control (the click callback).
    ///
    /// The label flips to "Cancelling..." synchronously, before the RPC is
    /// issued. Returns the continuation's task handle; hosts ignore it,
    /// tests use it to observe completion.
    pub fn activate(&self) -> JoinHandle<()> {
        let seq = self.issued.fetch_add(1, Ordering::SeqCst) + 1;

        if let Some(state) = self.registry.resolve(&self.node_id) {
            state
                .lock()
                .expect("node state lock poisoned")
                .begin_cancel_request();
            self.canvas.request_redraw(&self.node_id);
        }

        let controller = self.clone();
        tokio::spawn(async move { controller.run(seq).await })
    }

    fn is_latest(&self, seq: u64) -> bool {
        self.issued.load(Ordering::SeqCst) == seq
    }

    async fn run(self, seq: u64) {
        let outcome = self.transport.cancel_download(&self.node_id).await;

        if !self.is_latest(seq) {
            debug!(node = %self.node_id, seq, "stale cancel completion, discarding");
            return;
        }
        let Some(state) = self.registry.resolve(&self.node_id) else {
            debug!(node = %self.node_id, "node gone before cancel completion, discarding");
            return;
        };

        match outcome {
            Ok(outcome) => {
                if let CancelOutcome::Unknown(status) = &outcome {
                    // Open question: backend status outside the known set.
                    // Label policy is no-op; the reset timer still runs.
                    warn!(node = %self.node_id, status = %status, "unrecognized cancel status");
                }
                let changed = state
                    .lock()
                    .expect("node state lock poisoned")
                    .apply_cancel_outcome(&outcome);
                if changed {
                    self.canvas.request_redraw(&self.node_id);
                }
            }
            Err(err) => {
                debug!(node = %self.node_id, error = %err, "cancel request failed");
                state
                    .lock()
                    .expect("node state lock poisoned")
                    .fail_cancel_request();
                self.canvas.request_redraw(&self.node_id);
            }
        }

        tokio::time::sleep(self.reset_delay).await;

        if !self.is_latest(seq) {
            // A newer activation owns the control; its own reset will fire.
            return;
        }
        if let Some(state) = self.registry.resolve(&self.node_id) {
            state
                .lock()
                .expect("node state lock poisoned")
                .reset_cancel_control();
            self.canvas.request_redraw(&self.node_id);
        }
    }
}
