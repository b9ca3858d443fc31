//! Model URL validation.
//!
//! A stateless predicate over the URL input field of URL-bearing node kinds.
//! The host maps the result to input recoloring on every keystroke; nothing
//! here has a lifecycle.

use regex::Regex;
use std::sync::OnceLock;

/// Validity of a model URL input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UrlValidity {
    /// The URL matches a supported model source.
    Valid,
    /// The URL matches nothing this extension can download.
    Invalid,
}

fn civitai_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^https?://(www\.)?civitai\.com/models/(\d+)").expect("pattern is valid")
    })
}

fn huggingface_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^https?://huggingface\.co/([^/]+/[^/]+)").expect("pattern is valid")
    })
}

/// Whether `url` points at a supported model source (CivitAI model page or
/// HuggingFace repository).
#[must_use]
pub fn is_supported_model_url(url: &str) -> bool {
    civitai_pattern().is_match(url) || huggingface_pattern().is_match(url)
}

/// Classify a URL input for the host's recoloring.
#[must_use]
pub fn classify_model_url(url: &str) -> UrlValidity {
    if is_supported_model_url(url) {
        UrlValidity::Valid
    } else {
        UrlValidity::Invalid
    }
}
