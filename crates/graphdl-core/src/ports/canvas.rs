//! Canvas redraw port.
//!
//! The host renders each node from its `DownloadNodeState` (progress bar and
//! cancel-control label); the coordination layer only ever asks for a redraw
//! of the single node it just mutated.

use crate::node::NodeId;

/// Port for requesting a visual redraw of one node.
///
/// Implementations must not block; the router calls this synchronously from
/// the event-dispatch path.
pub trait NodeCanvasPort: Send + Sync {
    /// Ask the host to repaint the given node.
    fn request_redraw(&self, node: &NodeId);

    /// Clone this canvas into a boxed trait object.
    ///
    /// This enables cloning of `Arc<dyn NodeCanvasPort>` consumers without
    /// requiring the underlying type to implement Clone.
    fn clone_box(&self) -> Box<dyn NodeCanvasPort>;
}

/// A no-op canvas for tests and headless contexts.
#[derive(Debug, Clone, Default)]
pub struct NoopCanvas;

impl NoopCanvas {
    /// Create a new no-op canvas.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl NodeCanvasPort for NoopCanvas {
    fn request_redraw(&self, _node: &NodeId) {
        // Intentionally do nothing
    }

    fn clone_box(&self) -> Box<dyn NodeCanvasPort> {
        Box::new(self.clone())
    }
}
