//! WebSocket endpoint derived from the page's own origin.
//!
//! The socket always lives at `/ws` on the host and port that served the
//! page, with `wss` on secure pages and `ws` otherwise.

#[cfg(test)]
#[path = "endpoint_test.rs"]
mod endpoint_test;

/// Path of the realtime endpoint on the serving host.
pub const WS_PATH: &str = "/ws";

/// Endpoint used when no browser location is available (SSR, native tests).
pub const FALLBACK_ENDPOINT: &str = "ws://localhost:3000/ws";

/// Build the socket URL from `location.protocol`, `location.hostname` and
/// `location.port`.
///
/// The port is interpolated as-is; pages on a default port produce
/// `scheme://host:/ws`, which the browser resolves to the default port.
pub fn endpoint_url(protocol: &str, hostname: &str, port: &str) -> String {
    let scheme = if protocol == "https:" { "wss" } else { "ws" };
    format!("{scheme}://{hostname}:{port}{WS_PATH}")
}

/// Endpoint for the current page.
pub fn page_endpoint() -> String {
    #[cfg(feature = "hydrate")]
    {
        let Some(location) = web_sys::window().map(|w| w.location()) else {
            return FALLBACK_ENDPOINT.to_owned();
        };
        let protocol = location.protocol().unwrap_or_default();
        let Ok(hostname) = location.hostname() else {
            return FALLBACK_ENDPOINT.to_owned();
        };
        let port = location.port().unwrap_or_default();
        endpoint_url(&protocol, &hostname, &port)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        FALLBACK_ENDPOINT.to_owned()
    }
}
