//! Timing benchmark harness for the digest service
//!
//! Measures one digest computation per input size and reports an
//! insertion-ordered size-to-elapsed-time mapping.

mod timing;

pub use timing::*;
