//! Shared fakes for unit tests: a scripted cancel transport and a canvas
//! that records redraw requests.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use graphdl_core::{
    CancelOutcome, CancelRpcError, CancelTransportPort, NodeCanvasPort, NodeId,
};

/// One scripted transport call. `result: None` means the call never resolves.
struct ScriptedCall {
    delay: Option<Duration>,
    result: Option<Result<CancelOutcome, CancelRpcError>>,
}

/// A cancel transport that replays a script, one entry per call, in call
/// order. Panics on an unscripted call so tests fail loudly.
pub(crate) struct ScriptedTransport {
    script: Mutex<VecDeque<ScriptedCall>>,
}

impl ScriptedTransport {
    pub(crate) fn new() -> Self {
        Self {
            script: Mutex::new(VecDeque::new()),
        }
    }

    fn push(self, call: ScriptedCall) -> Self {
        self.script.lock().unwrap().push_back(call);
        self
    }

    /// Next call resolves immediately with `outcome`.
    pub(crate) fn then_ok(self, outcome: CancelOutcome) -> Self {
        self.push(ScriptedCall {
            delay: None,
            result: Some(Ok(outcome)),
        })
    }

    /// Next call resolves with `outcome` after `delay` of simulated time.
    pub(crate) fn then_ok_after(self, outcome: CancelOutcome, delay: Duration) -> Self {
        self.push(ScriptedCall {
            delay: Some(delay),
            result: Some(Ok(outcome)),
        })
    }

    /// Next call fails immediately with `err`.
    pub(crate) fn then_err(self, err: CancelRpcError) -> Self {
        self.push(ScriptedCall {
            delay: None,
            result: Some(Err(err)),
        })
    }

    /// Next call never resolves.
    pub(crate) fn then_hang(self) -> Self {
        self.push(ScriptedCall {
            delay: None,
            result: None,
        })
    }
}

#[async_trait]
impl CancelTransportPort for ScriptedTransport {
    async fn cancel_download(&self, node: &NodeId) -> Result<CancelOutcome, CancelRpcError> {
        let call = self
            .script
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| panic!("unscripted cancel call for node {node}"));

        if let Some(delay) = call.delay {
            tokio::time::sleep(delay).await;
        }
        match call.result {
            Some(result) => result,
            None => {
                std::future::pending::<()>().await;
                unreachable!("pending future resolved")
            }
        }
    }
}

/// A canvas that records which nodes were asked to repaint.
#[derive(Clone, Default)]
pub(crate) struct RecordingCanvas {
    redraws: Arc<Mutex<Vec<NodeId>>>,
}

impl RecordingCanvas {
    pub(crate) fn redraws(&self) -> Vec<NodeId> {
        self.redraws.lock().unwrap().clone()
    }
}

impl NodeCanvasPort for RecordingCanvas {
    fn request_redraw(&self, node: &NodeId) {
        self.redraws.lock().unwrap().push(node.clone());
    }

    fn clone_box(&self) -> Box<dyn NodeCanvasPort> {
        Box::new(self.clone())
    }
}

/// Give spawned continuations a chance to run without letting the paused
/// clock auto-advance.
pub(crate) async fn settle() {
    for _ in 0..8 {
        tokio::task::yield_now().await;
    }
}
