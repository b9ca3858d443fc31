//! Extension wiring: node lifecycle hooks and the process-wide subscription.

use std::sync::Arc;
use std::time::Duration;

use graphdl_core::{CancelTransportPort, NodeCanvasPort, NodeId, NodeKind};
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::task::JoinHandle;

use crate::cancel::CancelController;
use crate::config::CancelClientConfig;
use crate::http::ReqwestCancelClient;
use crate::registry::{NodeRegistry, SharedNodeState};
use crate::router::ProgressRouter;
use crate::url::{UrlValidity, classify_model_url};

/// Everything a newly constructed node needs from the extension.
///
/// By the time this exists, the node's identity is registered and its cancel
/// controller is live, so the node can be selected and receive events
/// immediately.
pub struct NodeBinding {
    /// Shared state the host renders from (progress fraction, cancel label).
    pub state: SharedNodeState,
    /// Controller behind the node's cancel control (the click callback).
    pub cancel: CancelController,
    /// URL-input validator, present only for node kinds that accept a URL.
    pub validate_url: Option<fn(&str) -> UrlValidity>,
}

/// The downloader extension: owns the registry, the router, and the cancel
/// transport, and hands out per-node bindings.
pub struct DownloaderExtension {
    registry: NodeRegistry,
    router: ProgressRouter,
    canvas: Arc<dyn NodeCanvasPort>,
    transport: Arc<dyn CancelTransportPort>,
    reset_delay: Duration,
}

impl DownloaderExtension {
    /// Build the extension against the production reqwest transport.
    #[must_use]
    pub fn new(config: &CancelClientConfig, canvas: Arc<dyn NodeCanvasPort>) -> Self {
        let transport = Arc::new(ReqwestCancelClient::new(config));
        Self::with_transport(canvas, transport, config.reset_delay)
    }

    /// Build with an explicit transport (tests, alternative hosts).
    #[must_use]
    pub fn with_transport(
        canvas: Arc<dyn NodeCanvasPort>,
        transport: Arc<dyn CancelTransportPort>,
        reset_delay: Duration,
    ) -> Self {
        let registry = NodeRegistry::new();
        let router = ProgressRouter::new(registry.clone(), Arc::clone(&canvas));
        Self {
            registry,
            router,
            canvas,
            transport,
            reset_delay,
        }
    }

    /// Create the single process-wide progress subscription.
    ///
    /// Call once at extension setup. The subscription lives for the process
    /// lifetime; no teardown is needed or modeled.
    pub fn setup(&self, events: UnboundedReceiver<serde_json::Value>) -> JoinHandle<()> {
        self.router.spawn_subscription(events)
    }

    /// Node-construction hook; call exactly once per node instance.
    ///
    /// Registers the node's identity (so the router can resolve its events)
    /// and binds a cancel controller to it, both before returning.
    pub fn on_node_created(&self, id: impl Into<NodeId>, kind: NodeKind) -> NodeBinding {
        let id = id.into();
        let state = self.registry.register(id.clone(), kind);
        let cancel = CancelController::new(
            id,
            self.registry.clone(),
            Arc::clone(&self.canvas),
            Arc::clone(&self.transport),
        )
        .with_reset_delay(self.reset_delay);

        NodeBinding {
            state,
            cancel,
            validate_url: kind
                .accepts_url()
                .then_some(classify_model_url as fn(&str) -> UrlValidity),
        }
    }

    /// Node-destruction hook: later events for this id drop silently.
    pub fn on_node_removed(&self, id: &NodeId) {
        self.registry.unregister(id);
    }

    /// The router, for hosts that dispatch progress events synchronously
    /// instead of through a channel.
    #[must_use]
    pub const fn router(&self) -> &ProgressRouter {
        &self.router
    }

    /// The registry of live downloader nodes.
    #[must_use]
    pub const fn registry(&self) -> &NodeRegistry {
        &self.registry
    }
}
