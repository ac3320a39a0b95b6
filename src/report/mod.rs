//! Rendering of benchmark results
//!
//! Consumes only the size-to-elapsed-time mapping produced by the
//! benchmark harness and renders it as a terminal bar chart or JSON.

mod chart;

pub use chart::*;
