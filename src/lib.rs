//! prompt-sanitizer: wrap untrusted external content for LLM prompts
//!
//! Content from stdin, a file, or a subprocess is passed through byte-for-byte
//! inside a fixed envelope of boundary markers and a source label. Nothing is
//! parsed, escaped, or rewritten.

pub mod cli;
pub mod domain;
pub mod error;
pub mod fetch;
pub mod render;

pub use domain::{ContentSource, Invocation, DEFAULT_SOURCE_LABEL};
pub use error::AcquireError;
pub use fetch::fetch_content;
pub use render::{wrap, wrap_str};

/// Version reported by `--version`, stamped at build time when
/// `PROMPT_SANITIZER_VERSION` is set.
pub const VERSION: &str = match option_env!("PROMPT_SANITIZER_VERSION") {
    Some(version) => version,
    None => env!("CARGO_PKG_VERSION"),
};
