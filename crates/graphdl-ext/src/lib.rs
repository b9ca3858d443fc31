#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

mod cancel;
mod config;
mod extension;
mod http;
mod registry;
mod router;
#[cfg(test)]
mod testing;
mod url;

// ============================================================================
// Public API
// ============================================================================

pub use cancel::{CancelController, RESET_DELAY};
pub use config::CancelClientConfig;
pub use extension::{DownloaderExtension, NodeBinding};
pub use http::ReqwestCancelClient;
pub use registry::{NodeRegistry, SharedNodeState};
pub use router::ProgressRouter;
pub use self::url::{UrlValidity, classify_model_url, is_supported_model_url};
