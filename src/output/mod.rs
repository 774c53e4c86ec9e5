//! Output module
//!
//! Writes validated file URLs and per-entry diagnostics to their channels.

mod writer;

pub use writer::LineOutput;
