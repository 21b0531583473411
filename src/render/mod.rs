//! Output rendering (untrusted-content envelope)

pub mod envelope;

pub use envelope::{count_markers, envelope_overhead, wrap, wrap_str, END_MARKER, START_MARKER};
