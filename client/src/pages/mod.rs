//! Top-level routed pages.

pub mod console;
