//! Reactive view state shared through Leptos context.
//!
//! SYSTEM CONTEXT
//! ==============
//! `notice` holds the single transient message line, `link` holds the
//! realtime connection status, and `surface` adapts both signals to the
//! sink traits the connection manager writes through.

pub mod link;
pub mod notice;
pub mod surface;
