//! Networking modules for the realtime link.
//!
//! SYSTEM CONTEXT
//! ==============
//! `endpoint` derives the socket URL from the page location, `link` owns the
//! connection lifecycle and the outbound ping, and `socket` binds `link` to
//! the browser's WebSocket and timers.

pub mod endpoint;
pub mod link;
#[cfg(feature = "hydrate")]
pub mod socket;

#[cfg(test)]
#[path = "test_helpers.rs"]
pub(crate) mod test_helpers;
