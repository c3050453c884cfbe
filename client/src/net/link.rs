//! Realtime link to the server: connect, surface events, reconnect forever.
//!
//! DESIGN
//! ======
//! A `Transport` opens one connection attempt and reports its lifecycle as a
//! stream of `LinkEvent`s. `ConnectionManager` folds those events into
//! notices and status changes and, once an attempt reports `Closed`, waits on
//! its `Timer` before opening the next one. Browser bindings live in
//! `net::socket`; tests drive the same loop with scripted transports.
//!
//! RETRY POLICY
//! ============
//! Fixed delay, no attempt cap, no backoff. An attempt that fails to open
//! and a socket the server drops are the same `Closed` event.
//!
//! The current socket sits in a `ConnectionHandle` shared with the sphere
//! trigger. Everything runs on the page's event loop, so the handle is a
//! plain `Rc<RefCell<..>>`.

#[cfg(test)]
#[path = "link_test.rs"]
mod link_test;

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use futures::StreamExt;
use futures::future::LocalBoxFuture;
use futures::stream::LocalBoxStream;

use crate::state::link::ConnectionStatus;
use crate::state::notice::{Notice, NoticeSink};

/// Delay between mount and the first connection attempt.
pub const STARTUP_DELAY: Duration = Duration::from_secs(1);
/// Delay between a close and the next attempt.
pub const RETRY_DELAY: Duration = Duration::from_secs(3);

pub const CONNECTED_NOTICE: &str = "⚡ CONECTADO COM SUCESSO! ⚡";
pub const DISCONNECTED_NOTICE: &str = "Desconectado. Tentando de novo...";

/// Payload sent when the sphere is tapped.
pub const PING_PAYLOAD: &str = "Ping: Toque na esfera";
pub const SENDING_NOTICE: &str = "Enviando sinal...";
pub const OFFLINE_NOTICE: &str = "Cérebro offline!";

/// Lifecycle events of a single connection attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LinkEvent {
    Opened,
    /// Inbound text, passed through untouched.
    Received(String),
    /// Terminal: the attempt failed or the socket closed.
    Closed,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LinkError {
    #[error("socket open failed: {0}")]
    Open(String),
    #[error("socket send failed: {0}")]
    Send(String),
}

/// The live half of a connection: state query and text send.
pub trait Socket {
    fn is_open(&self) -> bool;

    /// Send one text message.
    ///
    /// # Errors
    ///
    /// Returns [`LinkError::Send`] if the underlying socket rejects the send.
    fn send_text(&self, text: &str) -> Result<(), LinkError>;
}

/// One connection attempt: the socket plus its event stream.
///
/// The stream ends after `Closed`.
pub struct Attempt {
    pub socket: Rc<dyn Socket>,
    pub events: LocalBoxStream<'static, LinkEvent>,
}

pub trait Transport {
    /// Start a connection attempt to `url`.
    ///
    /// # Errors
    ///
    /// Returns [`LinkError::Open`] if the socket cannot even be created
    /// (malformed URL, blocked scheme).
    fn open(&self, url: &str) -> Result<Attempt, LinkError>;
}

pub trait Timer {
    fn sleep(&self, delay: Duration) -> LocalBoxFuture<'static, ()>;
}

/// Where the manager reports notices and status changes.
pub trait Surface: NoticeSink {
    fn set_status(&self, status: ConnectionStatus);
}

/// Shared reference to the current socket, if any.
///
/// Each attempt overwrites it unconditionally; the previous socket has
/// already closed by then.
#[derive(Clone, Default)]
pub struct ConnectionHandle {
    current: Rc<RefCell<Option<Rc<dyn Socket>>>>,
}

impl ConnectionHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn replace(&self, socket: Rc<dyn Socket>) {
        *self.current.borrow_mut() = Some(socket);
    }

    pub fn current(&self) -> Option<Rc<dyn Socket>> {
        self.current.borrow().clone()
    }

    pub fn is_open(&self) -> bool {
        self.current.borrow().as_ref().is_some_and(|s| s.is_open())
    }
}

impl std::fmt::Debug for ConnectionHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConnectionHandle")
            .field("present", &self.current.borrow().is_some())
            .field("open", &self.is_open())
            .finish()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LinkConfig {
    pub endpoint: String,
    pub startup_delay: Duration,
    pub retry_delay: Duration,
}

impl LinkConfig {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self { endpoint: endpoint.into(), startup_delay: STARTUP_DELAY, retry_delay: RETRY_DELAY }
    }
}

/// Owns the connect/close/retry loop for one page.
pub struct ConnectionManager<T, C, S> {
    config: LinkConfig,
    handle: ConnectionHandle,
    transport: T,
    timer: C,
    surface: S,
}

impl<T: Transport, C: Timer, S: Surface> ConnectionManager<T, C, S> {
    pub fn new(config: LinkConfig, handle: ConnectionHandle, transport: T, timer: C, surface: S) -> Self {
        Self { config, handle, transport, timer, surface }
    }

    pub fn config(&self) -> &LinkConfig {
        &self.config
    }

    #[cfg(test)]
    pub(crate) fn handle(&self) -> &ConnectionHandle {
        &self.handle
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Wait out the startup delay, then connect and reconnect forever.
    pub async fn run(&self) {
        self.timer.sleep(self.config.startup_delay).await;
        loop {
            self.connect().await;
            self.timer.sleep(self.config.retry_delay).await;
        }
    }

    /// Run one connection attempt until it closes.
    pub async fn connect(&self) {
        self.surface.set_status(ConnectionStatus::Connecting);

        let attempt = match self.transport.open(&self.config.endpoint) {
            Ok(attempt) => attempt,
            Err(e) => {
                leptos::logging::warn!("link: {e} ({})", self.config.endpoint);
                self.apply(LinkEvent::Closed);
                return;
            }
        };
        self.handle.replace(attempt.socket);

        let mut events = attempt.events;
        while let Some(event) = events.next().await {
            let closed = event == LinkEvent::Closed;
            self.apply(event);
            if closed {
                return;
            }
        }
        // Stream ended without an explicit close.
        self.apply(LinkEvent::Closed);
    }

    fn apply(&self, event: LinkEvent) {
        match event {
            LinkEvent::Opened => {
                leptos::logging::log!("link: connected to {}", self.config.endpoint);
                self.surface.show(Notice::info(CONNECTED_NOTICE));
                self.surface.set_status(ConnectionStatus::Open);
            }
            LinkEvent::Received(payload) => {
                self.surface.show(Notice::info(payload));
            }
            LinkEvent::Closed => {
                leptos::logging::warn!(
                    "link: disconnected, retrying in {}ms",
                    self.config.retry_delay.as_millis()
                );
                self.surface.show(Notice::error(DISCONNECTED_NOTICE));
                self.surface.set_status(ConnectionStatus::Closed);
            }
        }
    }
}

/// Result of a sphere tap.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TriggerOutcome {
    Sent,
    Offline,
}

/// Send the ping if the current socket is open, otherwise report offline.
///
/// Nothing is queued: a tap while offline is dropped after the notice.
pub fn trigger(handle: &ConnectionHandle, notices: &impl NoticeSink) -> TriggerOutcome {
    let sent = match handle.current() {
        Some(socket) if socket.is_open() => match socket.send_text(PING_PAYLOAD) {
            Ok(()) => true,
            Err(e) => {
                leptos::logging::warn!("link: {e}");
                false
            }
        },
        _ => false,
    };

    if sent {
        notices.show(Notice::info(SENDING_NOTICE));
        TriggerOutcome::Sent
    } else {
        notices.show(Notice::info(OFFLINE_NOTICE));
        TriggerOutcome::Offline
    }
}
