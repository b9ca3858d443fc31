//! Port definitions for host-provided collaborators.
//!
//! The extension runtime in `graphdl-ext` consumes these; the host editor
//! (canvas) and its backend (cancel RPC) provide the implementations.

mod cancel;
mod canvas;

pub use cancel::{
    CANCEL_ENDPOINT, CancelOutcome, CancelRequest, CancelResponse, CancelRpcError,
    CancelTransportPort,
};
pub use canvas::{NodeCanvasPort, NoopCanvas};
