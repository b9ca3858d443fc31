//! Node registry: identifier to state-sink resolution.
//!
//! One inbound event stream fans into many independent per-node sinks; the
//! registry is the resolution step in the middle. It is populated at node
//! construction and depopulated at node destruction, so "event for a node
//! that no longer exists" and "event for an unmanaged node type" both
//! resolve to nothing and drop upstream.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, RwLock};

use graphdl_core::{DownloadNodeState, NodeId, NodeKind};

/// Shared handle to one node's state.
///
/// Critical sections are short and never held across an await; the scheduling
/// model is a single-threaded event loop, the lock only satisfies Rust's
/// aliasing rules for the spawned continuations.
pub type SharedNodeState = Arc<Mutex<DownloadNodeState>>;

/// Registry of live downloader nodes.
///
/// Cheap to clone; all clones share the same map.
#[derive(Clone, Default)]
pub struct NodeRegistry {
    nodes: Arc<RwLock<HashMap<NodeId, SharedNodeState>>>,
}

impl NodeRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a node at construction time and return its state handle.
    ///
    /// Re-registering an id replaces the previous entry; in-flight
    /// continuations re-resolve through the registry, so they pick up the
    /// replacement rather than touching the stale state.
    pub fn register(&self, id: impl Into<NodeId>, kind: NodeKind) -> SharedNodeState {
        let id = id.into();
        let state = Arc::new(Mutex::new(DownloadNodeState::new(id.clone(), kind)));
        self.nodes
            .write()
            .expect("node registry lock poisoned")
            .insert(id, Arc::clone(&state));
        state
    }

    /// Remove a node at destruction time.
    ///
    /// Later progress events and cancel continuations for this id become
    /// no-ops.
    pub fn unregister(&self, id: &NodeId) -> Option<SharedNodeState> {
        self.nodes
            .write()
            .expect("node registry lock poisoned")
            .remove(id)
    }

    /// Re-resolve the current live node for `id`, if any.
    ///
    /// Async continuations call this at the moment they run instead of
    /// capturing a state handle at issue time, which removes any
    /// use-after-destruction hazard.
    #[must_use]
    pub fn resolve(&self, id: &NodeId) -> Option<SharedNodeState> {
        self.nodes
            .read()
            .expect("node registry lock poisoned")
            .get(id)
            .map(Arc::clone)
    }

    /// Whether `id` is currently registered.
    #[must_use]
    pub fn contains(&self, id: &NodeId) -> bool {
        self.nodes
            .read()
            .expect("node registry lock poisoned")
            .contains_key(id)
    }

    /// Number of live nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes
            .read()
            .expect("node registry lock poisoned")
            .len()
    }

    /// Whether the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
