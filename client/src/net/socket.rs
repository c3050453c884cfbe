//! Browser bindings for `net::link`: a `web_sys::WebSocket` transport and a
//! `gloo-timers` timer.
//!
//! The socket's `onopen`/`onmessage`/`onclose` callbacks are forwarded into an
//! unbounded channel as `LinkEvent`s. Only `onclose` is terminal; browsers
//! fire it after `onerror` as well, so errors are just logged.

use std::rc::Rc;
use std::time::Duration;

use futures::FutureExt;
use futures::StreamExt;
use futures::channel::mpsc;
use futures::future::LocalBoxFuture;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{CloseEvent, Event, MessageEvent, WebSocket};

use super::link::{Attempt, LinkError, LinkEvent, Socket, Timer, Transport};
use crate::util::js::error_text;

/// Opens a fresh `WebSocket` per attempt.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTransport;

impl Transport for BrowserTransport {
    fn open(&self, url: &str) -> Result<Attempt, LinkError> {
        let ws = WebSocket::new(url).map_err(|e| LinkError::Open(error_text(&e)))?;
        let (tx, rx) = mpsc::unbounded::<LinkEvent>();

        let on_open = {
            let tx = tx.clone();
            Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
                let _ = tx.unbounded_send(LinkEvent::Opened);
            })
        };
        let on_message = {
            let tx = tx.clone();
            Closure::<dyn FnMut(MessageEvent)>::new(move |event: MessageEvent| match event.data().as_string() {
                Some(text) => {
                    let _ = tx.unbounded_send(LinkEvent::Received(text));
                }
                None => leptos::logging::warn!("link: ignoring non-text message"),
            })
        };
        let on_error = Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
            leptos::logging::warn!("link: socket error");
        });
        let on_close = Closure::<dyn FnMut(CloseEvent)>::new(move |event: CloseEvent| {
            leptos::logging::log!("link: socket closed code={} clean={}", event.code(), event.was_clean());
            let _ = tx.unbounded_send(LinkEvent::Closed);
            tx.close_channel();
        });

        ws.set_onopen(Some(on_open.as_ref().unchecked_ref()));
        ws.set_onmessage(Some(on_message.as_ref().unchecked_ref()));
        ws.set_onerror(Some(on_error.as_ref().unchecked_ref()));
        ws.set_onclose(Some(on_close.as_ref().unchecked_ref()));

        let socket = BrowserSocket {
            ws,
            _on_open: on_open,
            _on_message: on_message,
            _on_error: on_error,
            _on_close: on_close,
        };
        Ok(Attempt { socket: Rc::new(socket), events: rx.boxed_local() })
    }
}

/// A live `WebSocket` plus the callbacks it calls into.
///
/// The closures must outlive the socket's handlers, so they are owned here
/// and the handlers are detached on drop.
struct BrowserSocket {
    ws: WebSocket,
    _on_open: Closure<dyn FnMut(Event)>,
    _on_message: Closure<dyn FnMut(MessageEvent)>,
    _on_error: Closure<dyn FnMut(Event)>,
    _on_close: Closure<dyn FnMut(CloseEvent)>,
}

impl Socket for BrowserSocket {
    fn is_open(&self) -> bool {
        self.ws.ready_state() == WebSocket::OPEN
    }

    fn send_text(&self, text: &str) -> Result<(), LinkError> {
        self.ws.send_with_str(text).map_err(|e| LinkError::Send(error_text(&e)))
    }
}

impl Drop for BrowserSocket {
    fn drop(&mut self) {
        self.ws.set_onopen(None);
        self.ws.set_onmessage(None);
        self.ws.set_onerror(None);
        self.ws.set_onclose(None);
    }
}

/// `setTimeout`-backed delays.
#[derive(Clone, Copy, Debug, Default)]
pub struct GlooTimer;

impl Timer for GlooTimer {
    fn sleep(&self, delay: Duration) -> LocalBoxFuture<'static, ()> {
        gloo_timers::future::sleep(delay).boxed_local()
    }
}
