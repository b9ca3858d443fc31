#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

pub mod events;
pub mod node;
pub mod ports;
pub mod state;

// Re-export commonly used types for convenience
pub use events::{PROGRESS_EVENT, ProgressEvent};
pub use node::{NodeId, NodeKind};
pub use ports::{
    CANCEL_ENDPOINT, CancelOutcome, CancelRequest, CancelResponse, CancelRpcError,
    CancelTransportPort, NodeCanvasPort, NoopCanvas,
};
pub use state::{CancelControlState, DownloadNodeState};
