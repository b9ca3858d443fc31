//! Progress routing: one subscription, many per-node sinks.

use std::sync::Arc;

use graphdl_core::{NodeCanvasPort, ProgressEvent};
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::task::JoinHandle;
use tracing::trace;

use crate::registry::NodeRegistry;

/// Routes pushed progress notifications to the owning node's state.
///
/// There is exactly one router subscription per process, created at
/// extension setup and alive for the process lifetime; per-node fan-out
/// happens through the registry.
#[derive(Clone)]
pub struct ProgressRouter {
    registry: NodeRegistry,
    canvas: Arc<dyn NodeCanvasPort>,
}

impl ProgressRouter {
    /// Create a router over the given registry and canvas.
    pub fn new(registry: NodeRegistry, canvas: Arc<dyn NodeCanvasPort>) -> Self {
        Self { registry, canvas }
    }

    /// Handle one pushed progress notification.
    ///
    /// Purely synchronous, never suspends, handles events strictly in
    /// delivery order. Unroutable or unusable events are expected
    /// steady-state traffic (deleted nodes, unmanaged node types sharing the
    /// bus, producers without bounds) and drop without error.
    pub fn on_progress(&self, event: &ProgressEvent) {
        let Some(node) = event.node.as_ref() else {
            trace!("progress event without a target, dropping");
            return;
        };
        let Some(state) = self.registry.resolve(node) else {
            trace!(node = %node, "progress event for unregistered node, dropping");
            return;
        };
        let Some(fraction) = event.fraction() else {
            trace!(node = %node, "progress event with unusable bounds, dropping");
            return;
        };

        state
            .lock()
            .expect("node state lock poisoned")
            .record_progress(fraction);
        self.canvas.request_redraw(node);
    }

    /// Spawn the process-wide subscription task over the host's untyped
    /// "progress" channel.
    ///
    /// Payloads arrive as raw JSON values; ones that do not decode into a
    /// `ProgressEvent` drop like any other unroutable event. The task ends
    /// when the sender side closes (process teardown); no explicit
    /// unsubscribe exists or is needed.
    pub fn spawn_subscription(
        &self,
        mut events: UnboundedReceiver<serde_json::Value>,
    ) -> JoinHandle<()> {
        let router = self.clone();
        tokio::spawn(async move {
            while let Some(payload) = events.recv().await {
                match serde_json::from_value::<ProgressEvent>(payload) {
                    Ok(event) => router.on_progress(&event),
                    Err(err) => trace!(error = %err, "undecodable progress payload, dropping"),
                }
            }
        })
    }
}
